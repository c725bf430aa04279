//! Row rendering for ad hoc SELECT output.
//!
//! sqlx decodes columns by static type, so display strings are produced
//! per column based on the MySQL type name. Types with no decoder
//! configured here render as a placeholder rather than failing the row.

use sqlx::mysql::MySqlRow;
use sqlx::{Column, Row, TypeInfo};

/// Column names of a result row, in order.
pub fn header(row: &MySqlRow) -> Vec<String> {
    row.columns()
        .iter()
        .map(|column| column.name().to_string())
        .collect()
}

/// Display strings for every column of a row.
pub fn render_row(row: &MySqlRow) -> Vec<String> {
    row.columns()
        .iter()
        .map(|column| render_value(row, column.ordinal(), column.type_info().name()))
        .collect()
}

fn render_value(row: &MySqlRow, ordinal: usize, type_name: &str) -> String {
    match type_name {
        "BOOLEAN" => show(row.try_get::<Option<bool>, _>(ordinal)),
        "TINYINT" | "SMALLINT" | "MEDIUMINT" | "INT" | "BIGINT" => {
            show(row.try_get::<Option<i64>, _>(ordinal))
        }
        "TINYINT UNSIGNED" | "SMALLINT UNSIGNED" | "MEDIUMINT UNSIGNED" | "INT UNSIGNED"
        | "BIGINT UNSIGNED" => show(row.try_get::<Option<u64>, _>(ordinal)),
        "FLOAT" | "DOUBLE" => show(row.try_get::<Option<f64>, _>(ordinal)),
        "CHAR" | "VARCHAR" | "TEXT" | "TINYTEXT" | "MEDIUMTEXT" | "LONGTEXT" | "ENUM" => {
            show(row.try_get::<Option<String>, _>(ordinal))
        }
        "BLOB" | "TINYBLOB" | "MEDIUMBLOB" | "LONGBLOB" | "VARBINARY" | "BINARY" => {
            match row.try_get::<Option<Vec<u8>>, _>(ordinal) {
                Ok(Some(bytes)) => format!("<{} bytes>", bytes.len()),
                Ok(None) => "NULL".to_string(),
                Err(_) => "<unreadable>".to_string(),
            }
        }
        other => format!("<{}>", other),
    }
}

fn show<T: std::fmt::Display>(value: sqlx::Result<Option<T>>) -> String {
    match value {
        Ok(Some(v)) => v.to_string(),
        Ok(None) => "NULL".to_string(),
        Err(_) => "<unreadable>".to_string(),
    }
}
