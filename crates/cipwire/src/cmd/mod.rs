use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod classify;
pub mod decode;
pub mod types;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the wire type tag table.
    Types(TypesArgs),
    /// Decode units of one tag from hex or a binary file.
    Decode(DecodeArgs),
    /// Show which tag a native kind maps to.
    Classify(ClassifyArgs),
    /// Show version information.
    Version(VersionArgs),
}

pub fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Types(args) => types::run(args, format),
        Command::Decode(args) => decode::run(args, format),
        Command::Classify(args) => classify::run(args, format),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug, Default)]
pub struct TypesArgs {
    /// Only list tags that decode as a single unit.
    #[arg(long)]
    pub decodable: bool,
}

#[derive(Args, Debug)]
pub struct DecodeArgs {
    /// Tag name (e.g. DINT, real) or hex code (e.g. 0xC4).
    pub tag: String,
    /// Hex bytes, little-endian as received (e.g. "01 00 00 00" or 01000000).
    #[arg(conflicts_with = "file")]
    pub hex: Vec<String>,
    /// Read raw bytes from file instead of hex arguments.
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Number of units to decode. Default: every complete unit in the input.
    #[arg(long, short = 'n')]
    pub count: Option<usize>,
    /// Fail on the first short or failed read instead of recording it.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Native kind (bool, u8, i8, u16, i16, u32, i32, u64, i64, f32, f64,
    /// text, structured, usize, isize, u128, i128, char).
    pub kind: String,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}
