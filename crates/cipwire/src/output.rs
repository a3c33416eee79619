use std::io::IsTerminal;

use cipwire_types::CipValue;
use clap::ValueEnum;
use comfy_table::{presets::UTF8_FULL, ContentArrangement, Table};
use serde::Serialize;
use serde_json::Value;

#[derive(Clone, Debug, Copy, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Pretty,
    Raw,
}

impl OutputFormat {
    pub fn default_for_stdout() -> Self {
        if std::io::stdout().is_terminal() {
            Self::Table
        } else {
            Self::Json
        }
    }
}

pub fn print_json<T: Serialize>(output: &T) {
    println!(
        "{}",
        serde_json::to_string(output).unwrap_or_else(|_| "{}".to_string())
    );
}

pub fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header);
    table
}

/// JSON form of a decoded value. Non-finite floats become `null`.
pub fn value_json(value: &CipValue) -> Value {
    match *value {
        CipValue::Bool(v) => Value::from(v),
        CipValue::Byte(v) | CipValue::Usint(v) => Value::from(v),
        CipValue::Sint(v) => Value::from(v),
        CipValue::Int(v) => Value::from(v),
        CipValue::Dint(v) => Value::from(v),
        CipValue::Lint(v) => Value::from(v),
        CipValue::Uint(v) | CipValue::Word(v) => Value::from(v),
        CipValue::Udint(v) | CipValue::Dword(v) => Value::from(v),
        CipValue::Lword(v) => Value::from(v),
        CipValue::Real(v) => finite_or_null(f64::from(v)),
        CipValue::Lreal(v) => finite_or_null(v),
        CipValue::String(_) => Value::from(value.string_payload_text().unwrap_or_default()),
    }
}

fn finite_or_null(v: f64) -> Value {
    serde_json::Number::from_f64(v)
        .map(Value::Number)
        .unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_json_keeps_integer_types() {
        assert_eq!(value_json(&CipValue::Dint(-1)), serde_json::json!(-1));
        assert_eq!(value_json(&CipValue::Lword(u64::MAX)), serde_json::json!(u64::MAX));
        assert_eq!(value_json(&CipValue::Bool(true)), serde_json::json!(true));
    }

    #[test]
    fn value_json_floats() {
        assert_eq!(value_json(&CipValue::Real(1.0)), serde_json::json!(1.0));
        assert_eq!(value_json(&CipValue::Lreal(f64::NAN)), Value::Null);
    }
}
