use std::io::Write;

use super::input::RoleChange;
use super::{employee_choices, ensure_available, role_choices};
use crate::error::Result;
use crate::prompt::{choose, Prompter};
use crate::session::Session;
use crate::storage::Store;

const UPDATE_ROLE_SQL: &str = "UPDATE employee SET role_id = ? WHERE id = ?";

impl<S: Store, P: Prompter, W: Write> Session<S, P, W> {
    pub(crate) fn update_employee_role(&mut self) -> Result<()> {
        let employees = employee_choices(&mut self.store)?;
        ensure_available(&employees, "employees")?;
        let roles = role_choices(&mut self.store)?;
        ensure_available(&roles, "roles")?;

        let employee_id = choose(&mut self.prompter, "Select the employee to update:", employees)?;
        let role_id = choose(&mut self.prompter, "Select the new role:", roles)?;
        let change = RoleChange {
            employee_id,
            role_id,
        };

        self.store.execute(UPDATE_ROLE_SQL, &change.params())?;
        writeln!(self.out, "Employee role updated successfully!")?;
        Ok(())
    }
}
