//! DDL for the three tables and the optional sample data.
//!
//! Deleting a department removes its roles, deleting a role removes the
//! employees holding it, and deleting a manager leaves their reports without
//! a manager.

pub const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS departments (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    department_name VARCHAR(30) NOT NULL
);

CREATE TABLE IF NOT EXISTS roles (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    title VARCHAR(30) NOT NULL,
    salary DECIMAL NOT NULL,
    department_id INTEGER NOT NULL,
    FOREIGN KEY (department_id) REFERENCES departments(id) ON DELETE CASCADE
);

CREATE TABLE IF NOT EXISTS employee (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    first_name VARCHAR(30) NOT NULL,
    last_name VARCHAR(30) NOT NULL,
    role_id INTEGER NOT NULL,
    manager_id INTEGER,
    FOREIGN KEY (role_id) REFERENCES roles(id) ON DELETE CASCADE,
    FOREIGN KEY (manager_id) REFERENCES employee(id) ON DELETE SET NULL
);
";

pub const SEED_SQL: &str = "
INSERT INTO departments (department_name) VALUES
    ('Engineering'),
    ('Finance'),
    ('Legal'),
    ('Sales');

INSERT INTO roles (title, salary, department_id) VALUES
    ('Lead Engineer', 150000, 1),
    ('Software Engineer', 120000, 1),
    ('Account Manager', 160000, 2),
    ('Accountant', 125000, 2),
    ('Legal Team Lead', 250000, 3),
    ('Lawyer', 190000, 3),
    ('Sales Lead', 100000, 4),
    ('Salesperson', 80000, 4);

INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES
    ('John', 'Doe', 7, NULL),
    ('Mike', 'Chan', 8, 1),
    ('Ashley', 'Rodriguez', 1, NULL),
    ('Kevin', 'Tupik', 2, 3),
    ('Kunal', 'Singh', 3, NULL),
    ('Malia', 'Brown', 4, 5),
    ('Sarah', 'Lourd', 5, NULL),
    ('Tom', 'Allen', 6, 7);
";
