use std::io::{self, Write};

use crate::storage::table::Table;

pub const NO_DATA: &str = "No data available.";

/// Display width of every column: the longest of the header and the cells.
pub fn column_widths(table: &Table) -> Vec<usize> {
    table
        .schema
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| {
            let header_width = col.name.chars().count();
            let max_value_width = table
                .rows
                .iter()
                .map(|row| {
                    row.values
                        .get(i)
                        .map(|v| v.to_string().chars().count())
                        .unwrap_or(0)
                })
                .max()
                .unwrap_or(0);
            header_width.max(max_value_width)
        })
        .collect()
}

/// Lays the table out as left-aligned, space separated columns with a dashed
/// rule under the header, framed by blank lines. A table without rows becomes
/// the single no-data notice.
pub fn render_table(table: &Table) -> String {
    if table.is_empty() {
        return format!("{}\n", NO_DATA);
    }

    let widths = column_widths(table);
    let mut out = String::from("\n");

    let header: Vec<String> = table
        .schema
        .columns
        .iter()
        .enumerate()
        .map(|(i, col)| format!("{:<width$}", col.name, width = widths[i]))
        .collect();
    out.push_str(&header.join(" "));
    out.push('\n');

    let sep: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    out.push_str(&sep.join(" "));
    out.push('\n');

    for row in &table.rows {
        let values: Vec<String> = widths
            .iter()
            .enumerate()
            .map(|(i, &width)| {
                let cell = row.get(i).map(|v| v.to_string()).unwrap_or_default();
                format!("{:<width$}", cell, width = width)
            })
            .collect();
        out.push_str(&values.join(" "));
        out.push('\n');
    }

    out.push('\n');
    out
}

pub fn write_table<W: Write>(out: &mut W, table: &Table) -> io::Result<()> {
    out.write_all(render_table(table).as_bytes())
}
