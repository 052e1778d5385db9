use std::fmt;
use std::io::Write;

use super::{choices_from, department_choices, employee_choices, GO_BACK_LABEL};
use crate::error::Result;
use crate::prompt::{choose, Choice, Prompter};
use crate::session::Session;
use crate::storage::{Store, Value};

const ROLE_LIST_SQL: &str =
    "SELECT id, title || ' (' || id || ') - ' || salary AS label FROM roles";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteTarget {
    Employee,
    Role,
    Department,
}

impl DeleteTarget {
    pub const ALL: [DeleteTarget; 3] = [
        DeleteTarget::Employee,
        DeleteTarget::Role,
        DeleteTarget::Department,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeleteTarget::Employee => "Employee",
            DeleteTarget::Role => "Role",
            DeleteTarget::Department => "Department",
        }
    }

    fn prompt(self) -> &'static str {
        match self {
            DeleteTarget::Employee => "Select the employee you want to delete:",
            DeleteTarget::Role => "Select the role you want to delete:",
            DeleteTarget::Department => "Which department do you want to delete?",
        }
    }

    fn delete_sql(self) -> &'static str {
        match self {
            DeleteTarget::Employee => "DELETE FROM employee WHERE id = ?",
            DeleteTarget::Role => "DELETE FROM roles WHERE id = ?",
            DeleteTarget::Department => "DELETE FROM departments WHERE id = ?",
        }
    }
}

impl fmt::Display for DeleteTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

/// Entity list followed by the "Go Back" entry, which maps to `None`.
fn with_go_back(choices: Vec<Choice<i64>>) -> Vec<Choice<Option<i64>>> {
    choices
        .into_iter()
        .map(|c| Choice::new(c.label, Some(c.value)))
        .chain(std::iter::once(Choice::new(GO_BACK_LABEL, None)))
        .collect()
}

impl<S: Store, P: Prompter, W: Write> Session<S, P, W> {
    pub(crate) fn delete_entries(&mut self) -> Result<()> {
        let targets = DeleteTarget::ALL
            .iter()
            .map(|t| Choice::new(t.label(), *t))
            .collect();
        let target = choose(&mut self.prompter, "What would you like to delete?", targets)?;
        self.delete_entry(target)
    }

    fn delete_entry(&mut self, target: DeleteTarget) -> Result<()> {
        let entries = match target {
            DeleteTarget::Employee => employee_choices(&mut self.store)?,
            DeleteTarget::Role => {
                let table = self.store.query(ROLE_LIST_SQL, &[])?;
                choices_from(&table, "label")?
            }
            DeleteTarget::Department => department_choices(&mut self.store)?,
        };

        let Some(id) = choose(&mut self.prompter, target.prompt(), with_go_back(entries))? else {
            log::debug!("Delete of {} cancelled", target);
            return Ok(());
        };

        self.store.execute(target.delete_sql(), &[Value::Integer(id)])?;
        writeln!(self.out, "Deleted {} with ID {} from the database!", target, id)?;
        Ok(())
    }
}
