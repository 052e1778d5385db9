use std::io::{self, BufRead, Write};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, ListState, Paragraph},
    Frame, Terminal, TerminalOptions, Viewport,
};

use super::Prompter;
use crate::error::{Result, TrackerError};

const MAX_VISIBLE_CHOICES: usize = 10;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickerEvent {
    Pending,
    Selected(usize),
    Interrupted,
}

/// Cursor over a list of choices. Moving past either end wraps around.
#[derive(Debug, Default)]
pub struct Picker {
    state: ListState,
    len: usize,
}

impl Picker {
    pub fn new(len: usize) -> Self {
        let mut state = ListState::default();
        if len > 0 {
            state.select(Some(0));
        }
        Self { state, len }
    }

    pub fn selected(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn move_down(&mut self) {
        if self.len == 0 {
            return;
        }
        let next = match self.state.selected() {
            Some(i) if i + 1 < self.len => i + 1,
            _ => 0,
        };
        self.state.select(Some(next));
    }

    pub fn move_up(&mut self) {
        if self.len == 0 {
            return;
        }
        let prev = match self.state.selected() {
            Some(0) | None => self.len - 1,
            Some(i) => i - 1,
        };
        self.state.select(Some(prev));
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> PickerEvent {
        if key.kind != KeyEventKind::Press {
            return PickerEvent::Pending;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return PickerEvent::Interrupted;
        }

        match key.code {
            KeyCode::Char('j') | KeyCode::Down | KeyCode::Tab => self.move_down(),
            KeyCode::Char('k') | KeyCode::Up | KeyCode::BackTab => self.move_up(),
            KeyCode::Home | KeyCode::Char('g') => {
                if self.len > 0 {
                    self.state.select(Some(0));
                }
            }
            KeyCode::End | KeyCode::Char('G') => {
                if self.len > 0 {
                    self.state.select(Some(self.len - 1));
                }
            }
            KeyCode::Enter => {
                if let Some(i) = self.state.selected() {
                    return PickerEvent::Selected(i);
                }
            }
            _ => {}
        }
        PickerEvent::Pending
    }
}

struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Prompter backed by the controlling terminal: lines are read from stdin
/// and lists are drawn inline below the cursor.
#[derive(Debug, Default)]
pub struct TerminalPrompter;

impl TerminalPrompter {
    pub fn new() -> Self {
        Self
    }

    fn run_picker(&self, message: &str, choices: &[String]) -> Result<usize> {
        let _raw = RawModeGuard::enable()?;

        let height = (choices.len().min(MAX_VISIBLE_CHOICES) + 1) as u16;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::with_options(
            backend,
            TerminalOptions {
                viewport: Viewport::Inline(height),
            },
        )?;

        let mut picker = Picker::new(choices.len());
        let outcome = loop {
            terminal.draw(|frame| draw_picker(frame, message, choices, &mut picker))?;

            if let Event::Key(key) = event::read()? {
                match picker.handle_key(key) {
                    PickerEvent::Pending => {}
                    PickerEvent::Selected(i) => break Ok(i),
                    PickerEvent::Interrupted => break Err(TrackerError::Interrupted),
                }
            }
        };

        terminal.clear()?;
        let top = terminal.get_frame().area().y;
        terminal.set_cursor_position((0, top))?;
        outcome
    }
}

impl Prompter for TerminalPrompter {
    fn input(&mut self, message: &str) -> Result<String> {
        let mut stdout = io::stdout();
        write!(stdout, "? {} ", message)?;
        stdout.flush()?;

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Err(TrackerError::InputClosed);
        }

        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize> {
        if choices.is_empty() {
            return Err(TrackerError::NoChoices(message.to_string()));
        }
        let index = self.run_picker(message, choices)?;
        println!("? {} {}", message, choices[index]);
        Ok(index)
    }
}

fn draw_picker(frame: &mut Frame, message: &str, choices: &[String], picker: &mut Picker) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0)])
        .split(frame.area());

    let question = Line::from(vec![
        Span::styled("? ", Style::default().fg(Color::Green)),
        Span::styled(message, Style::default().add_modifier(Modifier::BOLD)),
    ]);
    frame.render_widget(Paragraph::new(question), chunks[0]);

    let items: Vec<ListItem> = choices.iter().map(|c| ListItem::new(c.as_str())).collect();
    let list = List::new(items)
        .highlight_style(Style::default().fg(Color::Cyan))
        .highlight_symbol("> ");
    frame.render_stateful_widget(list, chunks[1], &mut picker.state);
}
