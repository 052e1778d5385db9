use std::collections::HashMap;
use std::io::Write;

use super::column;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::render::write_table;
use crate::session::Session;
use crate::storage::{Store, Table, Value};

pub const NO_MANAGER: &str = "No Manager";

const ALL_DEPARTMENTS_SQL: &str = "SELECT id, department_name FROM departments";

const ALL_ROLES_SQL: &str = "
    SELECT roles.title, roles.id, departments.department_name, roles.salary
    FROM roles
    JOIN departments ON roles.department_id = departments.id
";

const ALL_EMPLOYEES_SQL: &str = "
    SELECT e.id, e.first_name, e.last_name, r.title, d.department_name, r.salary,
           m.first_name || ' ' || m.last_name AS manager_name
    FROM employee e
    LEFT JOIN roles r ON e.role_id = r.id
    LEFT JOIN departments d ON r.department_id = d.id
    LEFT JOIN employee m ON e.manager_id = m.id
";

const EMPLOYEES_BY_MANAGER_SQL: &str = "
    SELECT e.id, e.first_name, e.last_name, r.title, d.department_name,
           m.first_name || ' ' || m.last_name AS manager_name
    FROM employee e
    INNER JOIN roles r ON e.role_id = r.id
    INNER JOIN departments d ON r.department_id = d.id
    LEFT JOIN employee m ON e.manager_id = m.id
    ORDER BY manager_name, e.last_name, e.first_name
";

const EMPLOYEES_BY_DEPARTMENT_SQL: &str = "
    SELECT departments.department_name, employee.first_name, employee.last_name
    FROM employee
    INNER JOIN roles ON employee.role_id = roles.id
    INNER JOIN departments ON roles.department_id = departments.id
    ORDER BY departments.department_name ASC
";

#[derive(Debug, Clone, PartialEq)]
pub struct GroupMember {
    pub first_name: String,
    pub last_name: String,
    pub title: String,
    pub department_name: String,
}

impl GroupMember {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ManagerGroup {
    pub manager: String,
    pub members: Vec<GroupMember>,
}

/// Buckets employee rows by `manager_name`. Rows without a manager go to
/// [`NO_MANAGER`]. Buckets keep the order in which their first member
/// appears, members keep the row order.
pub fn group_by_manager(table: &Table) -> Result<Vec<ManagerGroup>> {
    let manager_idx = column(table, "manager_name")?;
    let first_idx = column(table, "first_name")?;
    let last_idx = column(table, "last_name")?;
    let title_idx = column(table, "title")?;
    let dept_idx = column(table, "department_name")?;

    let text = |value: Option<&Value>| value.map(|v| v.to_string()).unwrap_or_default();

    let mut groups: Vec<ManagerGroup> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for row in table.iter() {
        let manager = match row.get(manager_idx) {
            None | Some(Value::Null) => NO_MANAGER.to_string(),
            Some(v) => {
                let name = v.to_string();
                if name.is_empty() {
                    NO_MANAGER.to_string()
                } else {
                    name
                }
            }
        };

        let member = GroupMember {
            first_name: text(row.get(first_idx)),
            last_name: text(row.get(last_idx)),
            title: text(row.get(title_idx)),
            department_name: text(row.get(dept_idx)),
        };

        let position = *positions.entry(manager.clone()).or_insert_with(|| {
            groups.push(ManagerGroup {
                manager,
                members: Vec::new(),
            });
            groups.len() - 1
        });
        groups[position].members.push(member);
    }

    Ok(groups)
}

impl<S: Store, P: Prompter, W: Write> Session<S, P, W> {
    pub(crate) fn view_all_departments(&mut self) -> Result<()> {
        let table = self.store.query(ALL_DEPARTMENTS_SQL, &[])?;
        write_table(&mut self.out, &table)?;
        Ok(())
    }

    pub(crate) fn view_all_roles(&mut self) -> Result<()> {
        let table = self.store.query(ALL_ROLES_SQL, &[])?;
        write_table(&mut self.out, &table)?;
        Ok(())
    }

    pub(crate) fn view_all_employees(&mut self) -> Result<()> {
        let table = self.store.query(ALL_EMPLOYEES_SQL, &[])?;
        write_table(&mut self.out, &table)?;
        Ok(())
    }

    pub(crate) fn view_employees_by_manager(&mut self) -> Result<()> {
        let table = self.store.query(EMPLOYEES_BY_MANAGER_SQL, &[])?;
        let groups = group_by_manager(&table)?;

        writeln!(self.out, "\nEmployees by manager:")?;
        for group in &groups {
            writeln!(self.out, "\n{}:", group.manager)?;
            for member in &group.members {
                writeln!(
                    self.out,
                    "  {} | {} | {}",
                    member.full_name(),
                    member.title,
                    member.department_name
                )?;
            }
        }
        Ok(())
    }

    pub(crate) fn view_employees_by_department(&mut self) -> Result<()> {
        let table = self.store.query(EMPLOYEES_BY_DEPARTMENT_SQL, &[])?;
        writeln!(self.out, "\nEmployees by department:")?;
        write_table(&mut self.out, &table)?;
        Ok(())
    }
}
