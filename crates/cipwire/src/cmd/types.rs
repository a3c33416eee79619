use cipwire_types::CipType;
use serde::Serialize;

use crate::cmd::TypesArgs;
use crate::exit::{CliResult, SUCCESS};
use crate::output::{new_table, print_json, OutputFormat};

#[derive(Serialize)]
struct TagRow {
    code: u8,
    hex: String,
    name: &'static str,
    size: usize,
    payload_size: usize,
    decodable: bool,
    label: &'static str,
}

impl From<CipType> for TagRow {
    fn from(tag: CipType) -> Self {
        Self {
            code: tag.code(),
            hex: format!("0x{:02X}", tag.code()),
            name: tag.name(),
            size: tag.size(),
            payload_size: tag.payload_size(),
            decodable: tag.is_decodable(),
            label: tag.label(),
        }
    }
}

pub fn run(args: TypesArgs, format: OutputFormat) -> CliResult<i32> {
    let rows: Vec<TagRow> = CipType::ALL
        .into_iter()
        .filter(|tag| !args.decodable || tag.is_decodable())
        .map(TagRow::from)
        .collect();

    match format {
        OutputFormat::Json => print_json(&rows),
        OutputFormat::Table => {
            let mut table = new_table(vec!["CODE", "NAME", "SIZE", "PAYLOAD", "DECODABLE"]);
            for row in &rows {
                table.add_row(vec![
                    row.hex.clone(),
                    row.name.to_string(),
                    row.size.to_string(),
                    row.payload_size.to_string(),
                    row.decodable.to_string(),
                ]);
            }
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for row in &rows {
                println!("{:<16} size={:<3} payload={}", row.label, row.size, row.payload_size);
            }
        }
        OutputFormat::Raw => {
            for row in &rows {
                println!("{}", row.label);
            }
        }
    }

    Ok(SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_carries_table_facts() {
        let row = TagRow::from(CipType::LREAL);
        assert_eq!(row.hex, "0xCB");
        assert_eq!(row.size, 8);
        assert!(row.decodable);

        let json = serde_json::to_string(&TagRow::from(CipType::STRING)).unwrap();
        assert!(json.contains("\"payload_size\":86"));
        assert!(json.contains("\"size\":1"));
    }
}
