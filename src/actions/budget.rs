use std::io::Write;

use super::{column, department_choices, ensure_available};
use crate::error::Result;
use crate::prompt::{choose, Prompter};
use crate::session::Session;
use crate::storage::{Store, Value};

// One salary per employee: a role held by two people is paid twice.
const DEPARTMENT_BUDGET_SQL: &str = "
    SELECT departments.department_name AS department,
           SUM(roles.salary) AS total_salary
    FROM departments
    INNER JOIN roles ON departments.id = roles.department_id
    INNER JOIN employee ON roles.id = employee.role_id
    WHERE departments.id = ?
    GROUP BY departments.id
";

pub const NO_BUDGET: &str = "Department not found or no salaries to calculate.";

/// Formats an amount with thousands separators and at most two decimals,
/// without trailing zeros.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();

    let digits = (cents / 100).to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    match cents % 100 {
        0 => format!("{}{}", sign, grouped),
        fraction => {
            let fraction = format!("{:02}", fraction);
            format!("{}{}.{}", sign, grouped, fraction.trim_end_matches('0'))
        }
    }
}

impl<S: Store, P: Prompter, W: Write> Session<S, P, W> {
    pub(crate) fn view_department_budget(&mut self) -> Result<()> {
        let departments = department_choices(&mut self.store)?;
        ensure_available(&departments, "departments")?;

        let department_id = choose(
            &mut self.prompter,
            "Which department do you want to calculate the total salary for?",
            departments,
        )?;

        let result = self
            .store
            .query(DEPARTMENT_BUDGET_SQL, &[Value::Integer(department_id)])?;
        let name_idx = column(&result, "department")?;
        let total_idx = column(&result, "total_salary")?;

        let Some(row) = result.rows.first() else {
            writeln!(self.out, "{}", NO_BUDGET)?;
            return Ok(());
        };

        let name = row.get(name_idx).map(|v| v.to_string()).unwrap_or_default();
        let total = row.get(total_idx).and_then(Value::as_float).unwrap_or(0.0);
        writeln!(
            self.out,
            "The total salary for the {} department is ${}",
            name,
            format_currency(total)
        )?;
        Ok(())
    }
}
