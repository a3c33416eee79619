//! Decoding of single CIP wire units.
//!
//! A unit is one fixed-width, little-endian value of a known [`CipType`].
//! Decoding is best-effort:
//! - a tag this layer cannot decode (Unknown, Struct, unrecognized codes) is
//!   a caller bug and returns [`DecodeError::UnsupportedTag`]
//! - a short or failed read is logged, recorded as a [`ReadFault`], and
//!   yields the zero value so a run of fields keeps going
//!
//! [`CipType`]: cipwire_types::CipType

pub mod codec;
pub mod error;
pub mod reader;

pub use codec::{
    decode, decode_slice, Decoded, DecoderConfig, DEFAULT_MAX_RECORDED_FAULTS,
};
pub use error::{DecodeError, ReadFault, Result};
pub use reader::UnitReader;
