use std::fmt;
use std::io;

use cipwire_types::CipType;

/// Errors that can occur while decoding a unit.
#[derive(Debug, thiserror::Error)]
pub enum DecodeError {
    /// The tag cannot be decoded as a single unit. This indicates misuse:
    /// structures belong to a structure decoder and Unknown is never valid.
    #[error("unsupported tag {0}: cannot decode as one unit")]
    UnsupportedTag(CipType),

    /// A read fault, surfaced only when the decoder is configured to fail on
    /// read faults.
    #[error("{0}")]
    Read(ReadFault),
}

pub type Result<T> = std::result::Result<T, DecodeError>;

/// Record of a short or failed read while decoding one unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadFault {
    /// Tag being decoded.
    pub tag: CipType,
    /// Native type name the unit was decoded into, e.g. `"i32"`.
    pub native: &'static str,
    /// Bytes the unit needed.
    pub expected: usize,
    /// Kind of the underlying I/O error.
    pub kind: io::ErrorKind,
    /// Message of the underlying I/O error.
    pub message: String,
}

impl ReadFault {
    pub(crate) fn new(tag: CipType, native: &'static str, err: &io::Error) -> Self {
        Self {
            tag,
            native,
            expected: tag.payload_size(),
            kind: err.kind(),
            message: err.to_string(),
        }
    }

    /// Returns true if the source ended before the unit was complete.
    pub fn is_short_read(&self) -> bool {
        self.kind == io::ErrorKind::UnexpectedEof
    }
}

impl fmt::Display for ReadFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "problem reading {} as one unit of {} ({} bytes): {}",
            self.tag, self.native, self.expected, self.message
        )
    }
}

impl std::error::Error for ReadFault {}
