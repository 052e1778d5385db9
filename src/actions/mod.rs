//! One handler per menu entry. Each handler asks its questions, issues its
//! statement through the [`Store`] and writes the outcome to the session
//! console.

pub mod add;
pub mod budget;
pub mod delete;
pub mod input;
pub mod update;
pub mod view;

pub use budget::format_currency;
pub use input::{ManagerAssignment, NewDepartment, NewEmployee, NewRole, RoleChange};
pub use view::{group_by_manager, GroupMember, ManagerGroup, NO_MANAGER};

use crate::error::{Result, TrackerError};
use crate::prompt::Choice;
use crate::storage::{Store, Table, Value};

pub(crate) const NONE_LABEL: &str = "None";
pub(crate) const GO_BACK_LABEL: &str = "Go Back";

const DEPARTMENT_CHOICES_SQL: &str = "SELECT id, department_name FROM departments";
const ROLE_CHOICES_SQL: &str = "SELECT id, title FROM roles";
const EMPLOYEE_CHOICES_SQL: &str =
    "SELECT id, first_name || ' ' || last_name AS name FROM employee";

pub(crate) fn department_choices<S: Store>(store: &mut S) -> Result<Vec<Choice<i64>>> {
    let table = store.query(DEPARTMENT_CHOICES_SQL, &[])?;
    choices_from(&table, "department_name")
}

pub(crate) fn role_choices<S: Store>(store: &mut S) -> Result<Vec<Choice<i64>>> {
    let table = store.query(ROLE_CHOICES_SQL, &[])?;
    choices_from(&table, "title")
}

pub(crate) fn employee_choices<S: Store>(store: &mut S) -> Result<Vec<Choice<i64>>> {
    let table = store.query(EMPLOYEE_CHOICES_SQL, &[])?;
    choices_from(&table, "name")
}

/// Manager list: "None" first, then every employee.
pub(crate) fn manager_choices(employees: &[Choice<i64>]) -> Vec<Choice<Option<i64>>> {
    std::iter::once(Choice::new(NONE_LABEL, None))
        .chain(
            employees
                .iter()
                .map(|c| Choice::new(c.label.clone(), Some(c.value))),
        )
        .collect()
}

/// Turns an `id` column and a label column into list choices.
pub(crate) fn choices_from(table: &Table, label_column: &str) -> Result<Vec<Choice<i64>>> {
    let id_index = column(table, "id")?;
    let label_index = column(table, label_column)?;

    table
        .iter()
        .map(|row| {
            let id = row
                .get(id_index)
                .and_then(Value::as_integer)
                .ok_or_else(|| TrackerError::MissingColumn("id".to_string()))?;
            let label = row.get(label_index).map(|v| v.to_string()).unwrap_or_default();
            Ok(Choice::new(label, id))
        })
        .collect()
}

pub(crate) fn column(table: &Table, name: &str) -> Result<usize> {
    table
        .get_column_index(name)
        .ok_or_else(|| TrackerError::MissingColumn(name.to_string()))
}

/// Fails before any question is asked when a required list would be empty.
pub(crate) fn ensure_available<T>(choices: &[Choice<T>], what: &str) -> Result<()> {
    if choices.is_empty() {
        return Err(TrackerError::NoChoices(format!("no {} exist yet", what)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{Row, Schema};

    #[test]
    fn test_choices_from_table() {
        let table = Table::with_rows(
            Schema::from_names(["id", "department_name"]),
            vec![
                Row::new(vec![Value::Integer(3), Value::from("Legal")]),
                Row::new(vec![Value::Integer(5), Value::from("Sales")]),
            ],
        );
        let choices = choices_from(&table, "department_name").unwrap();
        assert_eq!(
            choices,
            vec![Choice::new("Legal", 3), Choice::new("Sales", 5)]
        );
    }

    #[test]
    fn test_choices_from_missing_column() {
        let table = Table::new(Schema::from_names(["id"]));
        assert!(matches!(
            choices_from(&table, "title"),
            Err(TrackerError::MissingColumn(_))
        ));
    }

    #[test]
    fn test_manager_choices_start_with_none() {
        let employees = vec![Choice::new("Ann Lee", 1), Choice::new("Bo Ray", 2)];
        let managers = manager_choices(&employees);
        assert_eq!(managers[0], Choice::new("None", None));
        assert_eq!(managers[2], Choice::new("Bo Ray", Some(2)));
        assert_eq!(managers.len(), 3);
    }
}
