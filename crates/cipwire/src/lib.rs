//! Typed binary value codec for the CIP wire format.
//!
//! cipwire turns raw bytes returned by EtherNet/IP-class controllers into
//! typed Rust values, one fixed-width unit at a time.
//!
//! # Crate Structure
//!
//! - [`types`] — Wire type tags, unit widths, labels, native kind mapping
//! - [`decode`] — Best-effort unit decoding with a fault record
//!
//! ```
//! use cipwire::{decode_slice, CipType, CipValue};
//!
//! let (decoded, used) = decode_slice(CipType::REAL, &[0x00, 0x00, 0x80, 0x3F]).unwrap();
//! assert_eq!(decoded.value, CipValue::Real(1.0));
//! assert_eq!(used, CipType::REAL.size());
//! ```

/// Re-export tag model types.
pub mod types {
    pub use cipwire_types::*;
}

/// Re-export unit decoder types.
pub mod decode {
    pub use cipwire_decode::*;
}

pub use cipwire_decode::{
    decode, decode_slice, DecodeError, Decoded, DecoderConfig, ReadFault, UnitReader,
};
pub use cipwire_types::{
    cip_type_of, tag_for_native_kind, CipNative, CipType, CipValue, NativeKind,
};
