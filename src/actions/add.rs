use std::io::Write;

use super::input::{ManagerAssignment, NewDepartment, NewEmployee, NewRole};
use super::{department_choices, employee_choices, ensure_available, manager_choices, role_choices};
use crate::error::Result;
use crate::prompt::{choose, Prompter};
use crate::session::Session;
use crate::storage::{Store, Value};

const INSERT_DEPARTMENT_SQL: &str = "INSERT INTO departments (department_name) VALUES (?)";
const INSERT_ROLE_SQL: &str = "INSERT INTO roles (title, salary, department_id) VALUES (?, ?, ?)";
const INSERT_EMPLOYEE_SQL: &str =
    "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES (?, ?, ?, ?)";

// Leaves the row untouched when the employee's role is outside the department.
const ASSIGN_MANAGER_SQL: &str = "
    UPDATE employee SET manager_id = ?
    WHERE id = ? AND role_id IN (SELECT id FROM roles WHERE department_id = ?)
";

impl<S: Store, P: Prompter, W: Write> Session<S, P, W> {
    pub(crate) fn add_department(&mut self) -> Result<()> {
        let name = self.prompter.input("Enter the name of the new department:")?;
        let department = NewDepartment::new(&name)?;

        self.store.execute(INSERT_DEPARTMENT_SQL, &department.params())?;
        writeln!(self.out, "Added department {} to the database!", department.name)?;
        Ok(())
    }

    pub(crate) fn add_role(&mut self) -> Result<()> {
        let departments = department_choices(&mut self.store)?;
        ensure_available(&departments, "departments")?;

        let title = self.prompter.input("Enter the title of the new role:")?;
        let salary = self.prompter.input("Enter the salary of the new role:")?;
        let department_id = choose(
            &mut self.prompter,
            "Select the department for the new role:",
            departments,
        )?;
        let role = NewRole::new(&title, &salary, department_id)?;

        self.store.execute(INSERT_ROLE_SQL, &role.params())?;
        writeln!(
            self.out,
            "Added role {} with salary {} to the database!",
            role.title,
            Value::Float(role.salary)
        )?;
        Ok(())
    }

    pub(crate) fn add_employee(&mut self) -> Result<()> {
        let roles = role_choices(&mut self.store)?;
        ensure_available(&roles, "roles")?;
        let managers = manager_choices(&employee_choices(&mut self.store)?);

        let first_name = self.prompter.input("Enter the employee's first name:")?;
        let last_name = self.prompter.input("Enter the employee's last name:")?;
        let role_id = choose(&mut self.prompter, "Select the employee role:", roles)?;
        let manager_id = choose(&mut self.prompter, "Select the employee manager:", managers)?;
        let employee = NewEmployee::new(&first_name, &last_name, role_id, manager_id)?;

        self.store.execute(INSERT_EMPLOYEE_SQL, &employee.params())?;
        writeln!(self.out, "Employee added successfully")?;
        Ok(())
    }

    pub(crate) fn add_manager(&mut self) -> Result<()> {
        let departments = department_choices(&mut self.store)?;
        ensure_available(&departments, "departments")?;
        let employees = employee_choices(&mut self.store)?;
        ensure_available(&employees, "employees")?;
        let managers = manager_choices(&employees);

        let department_id = choose(&mut self.prompter, "Select the department:", departments)?;
        let employee_id = choose(
            &mut self.prompter,
            "Select the employee to add a manager to:",
            employees,
        )?;
        let manager_id = choose(&mut self.prompter, "Select the employee's manager:", managers)?;
        let assignment = ManagerAssignment {
            department_id,
            employee_id,
            manager_id,
        };

        let updated = self.store.execute(ASSIGN_MANAGER_SQL, &assignment.params())?;
        if updated == 0 {
            log::warn!(
                "Employee {} has no role in department {}; manager left unchanged",
                assignment.employee_id,
                assignment.department_id
            );
            writeln!(
                self.out,
                "The selected employee is not in that department. No manager was assigned."
            )?;
        } else {
            writeln!(self.out, "Manager added successfully!")?;
        }
        Ok(())
    }
}
