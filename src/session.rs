use std::io::Write;

use crate::error::Result;
use crate::menu::{Action, MENU_PROMPT};
use crate::prompt::Prompter;
use crate::storage::Store;

/// One interactive session: the store connection, the prompt surface and the
/// console the handlers write to.
pub struct Session<S, P, W> {
    pub(crate) store: S,
    pub(crate) prompter: P,
    pub(crate) out: W,
}

impl<S: Store, P: Prompter, W: Write> Session<S, P, W> {
    pub fn new(store: S, prompter: P, out: W) -> Self {
        Self {
            store,
            prompter,
            out,
        }
    }

    /// Shows the menu until "Exit" is picked.
    ///
    /// Failed actions are logged and the menu comes back. Only errors that
    /// leave no way to keep prompting (closed input, interruption, terminal
    /// I/O) end the loop early.
    pub fn run(&mut self) -> Result<()> {
        let labels = Action::labels();
        loop {
            let index = self.prompter.select(MENU_PROMPT, &labels)?;
            let Some(action) = Action::from_index(index) else {
                log::warn!("Action not recognized");
                continue;
            };

            if action == Action::Exit {
                writeln!(self.out, "Application terminated.")?;
                return Ok(());
            }
            self.dispatch(action)?;
        }
    }

    /// Runs a single action and absorbs the failures the session survives.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        match self.perform(action) {
            Ok(()) => Ok(()),
            Err(e) if e.ends_session() => Err(e),
            Err(e) => {
                log::error!("{}: {}", action.failure_context(), e);
                Ok(())
            }
        }
    }

    pub fn perform(&mut self, action: Action) -> Result<()> {
        match action {
            Action::ViewDepartments => self.view_all_departments(),
            Action::ViewRoles => self.view_all_roles(),
            Action::ViewEmployees => self.view_all_employees(),
            Action::AddDepartment => self.add_department(),
            Action::AddRole => self.add_role(),
            Action::AddEmployee => self.add_employee(),
            Action::AddManager => self.add_manager(),
            Action::UpdateEmployeeRole => self.update_employee_role(),
            Action::ViewEmployeesByManager => self.view_employees_by_manager(),
            Action::ViewEmployeesByDepartment => self.view_employees_by_department(),
            Action::Delete => self.delete_entries(),
            Action::ViewDepartmentBudget => self.view_department_budget(),
            Action::Exit => Ok(()),
        }
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn prompter(&self) -> &P {
        &self.prompter
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    /// Closes the store connection and hands back the console.
    pub fn close(self) -> Result<W> {
        self.store.close()?;
        Ok(self.out)
    }
}
