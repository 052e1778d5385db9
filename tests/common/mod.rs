#![allow(dead_code)]

use std::collections::VecDeque;

use employee_tracker::{Prompter, Result, Session, SqliteStore, Store, Table, TrackerError, Value};

#[derive(Debug, Clone)]
pub enum Answer {
    Text(String),
    Pick(String),
}

/// Answers prompts from a fixed script. Picks are matched by label; running
/// out of answers behaves like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    pub asked: Vec<String>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, answer: &str) -> Self {
        self.answers.push_back(Answer::Text(answer.to_string()));
        self
    }

    pub fn pick(mut self, label: &str) -> Self {
        self.answers.push_back(Answer::Pick(label.to_string()));
        self
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }
}

impl Prompter for ScriptedPrompter {
    fn input(&mut self, message: &str) -> Result<String> {
        self.asked.push(message.to_string());
        match self.answers.pop_front() {
            Some(Answer::Text(text)) => Ok(text),
            Some(other) => panic!("expected text for '{}', script has {:?}", message, other),
            None => Err(TrackerError::InputClosed),
        }
    }

    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize> {
        self.asked.push(message.to_string());
        match self.answers.pop_front() {
            Some(Answer::Pick(label)) => Ok(choices
                .iter()
                .position(|c| *c == label)
                .unwrap_or_else(|| {
                    panic!("'{}' not offered for '{}': {:?}", label, message, choices)
                })),
            Some(other) => panic!("expected a pick for '{}', script has {:?}", message, other),
            None => Err(TrackerError::InputClosed),
        }
    }
}

/// Store wrapper that remembers every statement it forwards.
pub struct RecordingStore<S> {
    inner: S,
    pub queries: Vec<String>,
    pub executed: Vec<String>,
}

impl<S: Store> RecordingStore<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            queries: Vec::new(),
            executed: Vec::new(),
        }
    }

    pub fn deletes(&self) -> usize {
        self.executed
            .iter()
            .filter(|sql| sql.trim_start().to_uppercase().starts_with("DELETE"))
            .count()
    }
}

impl<S: Store> Store for RecordingStore<S> {
    fn query(&mut self, sql: &str, params: &[Value]) -> Result<Table> {
        self.queries.push(sql.to_string());
        self.inner.query(sql, params)
    }

    fn execute(&mut self, sql: &str, params: &[Value]) -> Result<usize> {
        self.executed.push(sql.to_string());
        self.inner.execute(sql, params)
    }

    fn close(self) -> Result<()> {
        self.inner.close()
    }
}

pub type TestSession = Session<RecordingStore<SqliteStore>, ScriptedPrompter, Vec<u8>>;

pub fn session(prompter: ScriptedPrompter) -> TestSession {
    let store = SqliteStore::open_in_memory().expect("Failed to open in-memory store");
    Session::new(RecordingStore::new(store), prompter, Vec::new())
}

pub fn seeded_session(prompter: ScriptedPrompter) -> TestSession {
    let mut store = SqliteStore::open_in_memory().expect("Failed to open in-memory store");
    store.seed().expect("Failed to seed store");
    Session::new(RecordingStore::new(store), prompter, Vec::new())
}

pub fn output(session: &TestSession) -> String {
    String::from_utf8(session.output().clone()).expect("Output is not UTF-8")
}

pub fn count(session: &mut TestSession, table: &str) -> i64 {
    let result = session
        .store_mut()
        .query(&format!("SELECT COUNT(*) AS n FROM {}", table), &[])
        .expect("Count query failed");
    result
        .value(0, "n")
        .and_then(Value::as_integer)
        .expect("Count missing")
}

pub fn exec(session: &mut TestSession, sql: &str, params: &[Value]) {
    session
        .store_mut()
        .execute(sql, params)
        .expect("Fixture statement failed");
}
