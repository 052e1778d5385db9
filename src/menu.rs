use std::fmt;

pub const MENU_PROMPT: &str = "What would you like to do?";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    AddManager,
    UpdateEmployeeRole,
    ViewEmployeesByManager,
    ViewEmployeesByDepartment,
    Delete,
    ViewDepartmentBudget,
    Exit,
}

impl Action {
    /// Menu order.
    pub const ALL: [Action; 13] = [
        Action::ViewDepartments,
        Action::ViewRoles,
        Action::ViewEmployees,
        Action::AddDepartment,
        Action::AddRole,
        Action::AddEmployee,
        Action::AddManager,
        Action::UpdateEmployeeRole,
        Action::ViewEmployeesByManager,
        Action::ViewEmployeesByDepartment,
        Action::Delete,
        Action::ViewDepartmentBudget,
        Action::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Action::ViewDepartments => "View all departments",
            Action::ViewRoles => "View all roles",
            Action::ViewEmployees => "View all employees",
            Action::AddDepartment => "Add a department",
            Action::AddRole => "Add a role",
            Action::AddEmployee => "Add an employee",
            Action::AddManager => "Add a Manager",
            Action::UpdateEmployeeRole => "Update an employee role",
            Action::ViewEmployeesByManager => "View Employees by Manager",
            Action::ViewEmployeesByDepartment => "View Employees by Department",
            Action::Delete => "Delete Departments, Roles, Employees",
            Action::ViewDepartmentBudget => "View the total utilized budget of a department",
            Action::Exit => "Exit",
        }
    }

    /// What went wrong, phrased for the log line written when the action fails.
    pub fn failure_context(self) -> &'static str {
        match self {
            Action::ViewDepartments => "Failed to query departments",
            Action::ViewRoles => "Failed to query roles",
            Action::ViewEmployees => "Failed to query employees",
            Action::AddDepartment => "Failed to add the new department",
            Action::AddRole => "Failed to add the new role",
            Action::AddEmployee => "Failed to add the new employee",
            Action::AddManager => "Failed to add the manager",
            Action::UpdateEmployeeRole => "Failed to update the employee role",
            Action::ViewEmployeesByManager => "Failed to view employees by manager",
            Action::ViewEmployeesByDepartment => "Failed to view employees by department",
            Action::Delete => "Failed to delete the entry",
            Action::ViewDepartmentBudget => {
                "Failed to calculate the total utilized budget of the department"
            }
            Action::Exit => "Failed to close the database connection",
        }
    }

    pub fn from_index(index: usize) -> Option<Action> {
        Self::ALL.get(index).copied()
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|a| a.label().to_string()).collect()
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
