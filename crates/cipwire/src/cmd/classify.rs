use cipwire_types::{tag_for_native_kind, CipType, NativeKind};
use serde::Serialize;

use crate::cmd::ClassifyArgs;
use crate::exit::{CliError, CliResult, SUCCESS, USAGE};
use crate::output::{new_table, print_json, OutputFormat};

#[derive(Serialize)]
struct Classification {
    kind: &'static str,
    code: u8,
    tag: &'static str,
    label: &'static str,
    mapped: bool,
}

pub fn run(args: ClassifyArgs, format: OutputFormat) -> CliResult<i32> {
    let kind = NativeKind::from_name(&args.kind)
        .ok_or_else(|| CliError::new(USAGE, format!("unknown native kind: {}", args.kind)))?;
    let tag = tag_for_native_kind(kind);
    let out = Classification {
        kind: kind.name(),
        code: tag.code(),
        tag: tag.name(),
        label: tag.label(),
        mapped: tag != CipType::UNKNOWN,
    };

    match format {
        OutputFormat::Json => print_json(&out),
        OutputFormat::Table => {
            let mut table = new_table(vec!["KIND", "TAG"]);
            table.add_row(vec![out.kind, out.label]);
            println!("{table}");
        }
        OutputFormat::Pretty => println!("{} -> {}", out.kind, out.label),
        OutputFormat::Raw => println!("{}", out.tag),
    }

    Ok(SUCCESS)
}
