use std::fmt;
use std::io;

use cipwire_decode::DecodeError;
use cipwire_types::TypeError;

// Exit codes follow sysexits where one applies.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;
pub const PERMISSION_DENIED: i32 = 50;
pub const DATA_INVALID: i32 = 60;
pub const USAGE: i32 = 64;
pub const INTERNAL: i32 = 125;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn io_error(context: &str, err: io::Error) -> CliError {
    let code = match err.kind() {
        io::ErrorKind::PermissionDenied => PERMISSION_DENIED,
        io::ErrorKind::NotFound => FAILURE,
        _ => INTERNAL,
    };
    CliError::new(code, format!("{context}: {err}"))
}

pub fn type_error(context: &str, err: TypeError) -> CliError {
    CliError::new(USAGE, format!("{context}: {err}"))
}

pub fn decode_error(context: &str, err: DecodeError) -> CliError {
    match err {
        DecodeError::UnsupportedTag(_) => CliError::new(USAGE, format!("{context}: {err}")),
        DecodeError::Read(_) => CliError::new(DATA_INVALID, format!("{context}: {err}")),
    }
}

#[cfg(test)]
mod tests {
    use cipwire_types::CipType;

    use super::*;

    #[test]
    fn unsupported_tag_is_usage_error() {
        let err = decode_error("decode failed", DecodeError::UnsupportedTag(CipType::STRUCT));
        assert_eq!(err.code, USAGE);
        assert_eq!(
            err.message,
            "decode failed: unsupported tag 0xA0 - Struct: cannot decode as one unit"
        );
    }

    #[test]
    fn io_error_codes() {
        let denied = io::Error::new(io::ErrorKind::PermissionDenied, "nope");
        assert_eq!(io_error("read", denied).code, PERMISSION_DENIED);
        let other = io::Error::other("boom");
        assert_eq!(io_error("read", other).code, INTERNAL);
    }
}
