use std::fs;
use std::io::Cursor;

use cipwire_decode::{DecoderConfig, ReadFault, UnitReader};
use cipwire_types::{CipType, CipValue};
use serde::Serialize;
use serde_json::Value;

use crate::cmd::DecodeArgs;
use crate::exit::{decode_error, io_error, type_error, CliError, CliResult, SUCCESS, USAGE};
use crate::output::{new_table, print_json, value_json, OutputFormat};

#[derive(Serialize)]
struct UnitOutput {
    index: usize,
    offset: u64,
    value: Value,
    kind: &'static str,
    fault: Option<String>,
}

#[derive(Serialize)]
struct DecodeOutput {
    tag: &'static str,
    label: &'static str,
    unit_size: usize,
    input_size: usize,
    bytes_consumed: u64,
    units: Vec<UnitOutput>,
    faults: usize,
}

pub fn run(args: DecodeArgs, format: OutputFormat) -> CliResult<i32> {
    let tag: CipType = args
        .tag
        .parse()
        .map_err(|err| type_error("invalid tag", err))?;
    let input = resolve_input(&args)?;
    let count = args.count.unwrap_or_else(|| default_count(tag, input.len()));

    let config = DecoderConfig {
        fail_on_read_fault: args.strict,
        ..DecoderConfig::default()
    };
    let output = decode_units(tag, input, count, config)?;
    print_output(&output, format);
    Ok(SUCCESS)
}

fn resolve_input(args: &DecodeArgs) -> CliResult<Vec<u8>> {
    if let Some(path) = &args.file {
        return fs::read(path)
            .map_err(|err| io_error(&format!("failed reading {}", path.display()), err));
    }
    parse_hex(&args.hex.join(" "))
}

/// Every complete unit in the input, and at least one so an empty input
/// still reports its fault.
fn default_count(tag: CipType, input_len: usize) -> usize {
    match tag.payload_size() {
        0 => 1,
        width => (input_len / width).max(1),
    }
}

fn decode_units(
    tag: CipType,
    input: Vec<u8>,
    count: usize,
    config: DecoderConfig,
) -> CliResult<DecodeOutput> {
    let input_size = input.len();
    let mut reader = UnitReader::with_config(Cursor::new(input), config);
    // The input holds at most this many units plus the one that hits EOF.
    let mut units = Vec::with_capacity(count.min(default_count(tag, input_size) + 1));

    for index in 0..count {
        let offset = reader.bytes_consumed();
        let faults_before = reader.faults().len();
        let value = reader
            .read_unit(tag)
            .map_err(|err| decode_error("decode failed", err))?;
        let fault = reader.faults().get(faults_before).map(ReadFault::to_string);
        units.push(unit_output(index, offset, &value, fault));
        if reader.is_exhausted() {
            break;
        }
    }

    Ok(DecodeOutput {
        tag: tag.name(),
        label: tag.label(),
        unit_size: tag.payload_size(),
        input_size,
        bytes_consumed: reader.bytes_consumed(),
        faults: reader.faults().len() + reader.dropped_faults(),
        units,
    })
}

fn unit_output(index: usize, offset: u64, value: &CipValue, fault: Option<String>) -> UnitOutput {
    UnitOutput {
        index,
        offset,
        value: value_json(value),
        kind: value.native_kind().name(),
        fault,
    }
}

fn print_output(output: &DecodeOutput, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(output),
        OutputFormat::Table => {
            let mut table = new_table(vec!["#", "OFFSET", "VALUE", "KIND", "FAULT"]);
            for unit in &output.units {
                table.add_row(vec![
                    unit.index.to_string(),
                    unit.offset.to_string(),
                    unit.value.to_string(),
                    unit.kind.to_string(),
                    unit.fault.clone().unwrap_or_default(),
                ]);
            }
            println!("{}", output.label);
            println!("{table}");
        }
        OutputFormat::Pretty => {
            for unit in &output.units {
                match &unit.fault {
                    Some(fault) => println!(
                        "[{}] @{} {} = {} (fault: {})",
                        unit.index, unit.offset, output.label, unit.value, fault
                    ),
                    None => println!(
                        "[{}] @{} {} = {}",
                        unit.index, unit.offset, output.label, unit.value
                    ),
                }
            }
        }
        OutputFormat::Raw => {
            for unit in &output.units {
                println!("{}", unit.value);
            }
        }
    }
}

/// Parse hex such as `"01 00 00 00"`, `"01000000"` or `"0x01,0x00"`.
fn parse_hex(input: &str) -> CliResult<Vec<u8>> {
    let digits: String = input
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .map(|chunk| {
            chunk
                .strip_prefix("0x")
                .or_else(|| chunk.strip_prefix("0X"))
                .unwrap_or(chunk)
        })
        .collect();

    if digits.len() % 2 != 0 {
        return Err(CliError::new(
            USAGE,
            format!("hex input has an odd number of digits ({})", digits.len()),
        ));
    }

    digits
        .as_bytes()
        .chunks(2)
        .map(|pair| {
            std::str::from_utf8(pair)
                .ok()
                .and_then(|s| u8::from_str_radix(s, 16).ok())
                .ok_or_else(|| {
                    CliError::new(
                        USAGE,
                        format!("invalid hex byte: {}", String::from_utf8_lossy(pair)),
                    )
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exit::{DATA_INVALID, USAGE};

    #[test]
    fn parses_spaced_and_packed_hex() {
        assert_eq!(parse_hex("01 00 00 00").unwrap(), vec![1, 0, 0, 0]);
        assert_eq!(parse_hex("0000803F").unwrap(), vec![0x00, 0x00, 0x80, 0x3F]);
        assert_eq!(parse_hex("0xDE,0xad").unwrap(), vec![0xDE, 0xAD]);
        assert!(parse_hex("").unwrap().is_empty());
    }

    #[test]
    fn rejects_bad_hex() {
        assert_eq!(parse_hex("0").unwrap_err().code, USAGE);
        assert_eq!(parse_hex("zz").unwrap_err().code, USAGE);
    }

    #[test]
    fn default_count_covers_complete_units() {
        assert_eq!(default_count(CipType::DINT, 8), 2);
        assert_eq!(default_count(CipType::DINT, 9), 2);
        assert_eq!(default_count(CipType::DINT, 0), 1);
        assert_eq!(default_count(CipType::STRING, 86), 1);
        assert_eq!(default_count(CipType::UNKNOWN, 4), 1);
    }

    #[test]
    fn decodes_each_unit_with_offsets() {
        let output = decode_units(
            CipType::INT,
            vec![0x01, 0x00, 0xFF, 0xFF],
            2,
            DecoderConfig::default(),
        )
        .unwrap();

        assert_eq!(output.bytes_consumed, 4);
        assert_eq!(output.faults, 0);
        assert_eq!(output.units[0].value, serde_json::json!(1));
        assert_eq!(output.units[1].value, serde_json::json!(-1));
        assert_eq!(output.units[1].offset, 2);
    }

    #[test]
    fn short_input_is_reported_per_unit() {
        let output = decode_units(
            CipType::DINT,
            vec![0x01, 0x00, 0x00, 0x00, 0x02],
            2,
            DecoderConfig::default(),
        )
        .unwrap();

        assert_eq!(output.faults, 1);
        assert!(output.units[0].fault.is_none());
        let fault = output.units[1].fault.as_deref().unwrap();
        assert!(fault.contains("0xC4 - DINT"));
        assert_eq!(output.units[1].value, serde_json::json!(0));
    }

    #[test]
    fn oversized_count_stops_at_end_of_input() {
        let output = decode_units(
            CipType::DINT,
            vec![0x01, 0x00, 0x00, 0x00],
            usize::MAX,
            DecoderConfig::default(),
        )
        .unwrap();

        assert_eq!(output.units.len(), 2);
        assert_eq!(output.units[0].value, serde_json::json!(1));
        assert!(output.units[1].fault.is_some());
        assert_eq!(output.faults, 1);
        assert_eq!(output.bytes_consumed, 4);
    }

    #[test]
    fn strict_short_input_is_data_invalid() {
        let config = DecoderConfig {
            fail_on_read_fault: true,
            ..DecoderConfig::default()
        };
        let err = decode_units(CipType::LREAL, vec![0x00], 1, config)
            .err()
            .expect("strict decode should fail");
        assert_eq!(err.code, DATA_INVALID);
    }

    #[test]
    fn struct_tag_is_usage_error() {
        let err = decode_units(CipType::STRUCT, vec![0; 88], 1, DecoderConfig::default())
            .err()
            .expect("struct decode should fail");
        assert_eq!(err.code, USAGE);
    }
}
