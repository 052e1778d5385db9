use crate::error::{Result, TrackerError};
use crate::storage::Value;

#[derive(Debug, Clone, PartialEq)]
pub struct NewDepartment {
    pub name: String,
}

impl NewDepartment {
    pub fn new(name: &str) -> Result<Self> {
        Ok(Self {
            name: required("department name", name)?,
        })
    }

    pub fn params(&self) -> Vec<Value> {
        vec![Value::from(self.name.as_str())]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewRole {
    pub title: String,
    pub salary: f64,
    pub department_id: i64,
}

impl NewRole {
    pub fn new(title: &str, salary: &str, department_id: i64) -> Result<Self> {
        Ok(Self {
            title: required("role title", title)?,
            salary: parse_salary(salary)?,
            department_id,
        })
    }

    pub fn params(&self) -> Vec<Value> {
        vec![
            Value::from(self.title.as_str()),
            Value::Float(self.salary),
            Value::Integer(self.department_id),
        ]
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub role_id: i64,
    pub manager_id: Option<i64>,
}

impl NewEmployee {
    pub fn new(
        first_name: &str,
        last_name: &str,
        role_id: i64,
        manager_id: Option<i64>,
    ) -> Result<Self> {
        Ok(Self {
            first_name: required("first name", first_name)?,
            last_name: required("last name", last_name)?,
            role_id,
            manager_id,
        })
    }

    pub fn params(&self) -> Vec<Value> {
        vec![
            Value::from(self.first_name.as_str()),
            Value::from(self.last_name.as_str()),
            Value::Integer(self.role_id),
            Value::from(self.manager_id),
        ]
    }
}

/// Sets (or clears) an employee's manager, restricted to employees whose role
/// belongs to `department_id`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ManagerAssignment {
    pub department_id: i64,
    pub employee_id: i64,
    pub manager_id: Option<i64>,
}

impl ManagerAssignment {
    pub fn params(&self) -> Vec<Value> {
        vec![
            Value::from(self.manager_id),
            Value::Integer(self.employee_id),
            Value::Integer(self.department_id),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoleChange {
    pub employee_id: i64,
    pub role_id: i64,
}

impl RoleChange {
    pub fn params(&self) -> Vec<Value> {
        vec![Value::Integer(self.role_id), Value::Integer(self.employee_id)]
    }
}

fn required(field: &str, raw: &str) -> Result<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(TrackerError::InvalidInput(format!("{} must not be empty", field)));
    }
    Ok(value.to_string())
}

/// Accepts plain or currency-formatted amounts such as `90000`, `$90,000.50`.
pub fn parse_salary(raw: &str) -> Result<f64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',')
        .collect();

    let salary: f64 = cleaned
        .parse()
        .map_err(|_| TrackerError::InvalidInput(format!("salary '{}' is not a number", raw.trim())))?;

    if !salary.is_finite() || salary < 0.0 {
        return Err(TrackerError::InvalidInput(format!(
            "salary '{}' must be a non-negative amount",
            raw.trim()
        )));
    }
    Ok(salary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_salary() {
        assert_eq!(parse_salary("90000").unwrap(), 90000.0);
        assert_eq!(parse_salary(" $90,000.50 ").unwrap(), 90000.5);
        assert!(parse_salary("lots").is_err());
        assert!(parse_salary("").is_err());
        assert!(parse_salary("-1").is_err());
        assert!(parse_salary("inf").is_err());
    }

    #[test]
    fn test_text_fields_trimmed_and_required() {
        let dept = NewDepartment::new("  Engineering ").unwrap();
        assert_eq!(dept.name, "Engineering");
        assert!(NewDepartment::new("   ").is_err());
        assert!(NewEmployee::new("Ann", "", 1, None).is_err());
    }

    #[test]
    fn test_employee_params_bind_null_manager() {
        let employee = NewEmployee::new("Ann", "Lee", 4, None).unwrap();
        assert_eq!(
            employee.params(),
            vec![
                Value::from("Ann"),
                Value::from("Lee"),
                Value::Integer(4),
                Value::Null
            ]
        );
    }

    #[test]
    fn test_manager_assignment_param_order() {
        let assignment = ManagerAssignment {
            department_id: 2,
            employee_id: 7,
            manager_id: Some(3),
        };
        assert_eq!(
            assignment.params(),
            vec![Value::Integer(3), Value::Integer(7), Value::Integer(2)]
        );
    }
}
