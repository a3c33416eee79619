//! CIP wire type tags and the native values they decode to.
//!
//! Every field a Logix-class controller returns is prefixed (or implied) by a
//! single-byte type tag. This crate is the table behind those tags:
//! - the wire code and fixed unit width of each tag
//! - a stable `"<hex> - <name>"` label used in diagnostics
//! - classification of native Rust kinds onto tags
//! - [`CipValue`], the tagged result of decoding one unit
//!
//! Nothing here performs I/O. See `cipwire-decode` for reading units.

pub mod error;
pub mod kind;
pub mod tag;
pub mod value;

pub use error::{Result, TypeError};
pub use kind::{cip_type_of, tag_for_native_kind, CipNative, NativeKind};
pub use tag::{CipType, STRING_PAYLOAD_SIZE};
pub use value::CipValue;
