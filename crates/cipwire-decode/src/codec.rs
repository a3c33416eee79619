use std::io::Read;

use bytes::{Buf, BytesMut};
use cipwire_types::{CipType, CipValue, STRING_PAYLOAD_SIZE};

use crate::error::{DecodeError, ReadFault, Result};

/// Default cap on faults kept by a [`UnitReader`](crate::UnitReader).
pub const DEFAULT_MAX_RECORDED_FAULTS: usize = 1024;

/// Result of decoding one unit.
///
/// `value` is always populated. When `fault` is set the read failed and
/// `value` is the zero value for the tag, so a zero can only be trusted
/// after checking `fault`.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded {
    pub value: CipValue,
    pub fault: Option<ReadFault>,
}

impl Decoded {
    /// Returns true if the unit was read completely.
    pub fn is_clean(&self) -> bool {
        self.fault.is_none()
    }

    /// Convert into the value, or the fault if the read failed.
    pub fn into_result(self) -> std::result::Result<CipValue, ReadFault> {
        match self.fault {
            Some(fault) => Err(fault),
            None => Ok(self.value),
        }
    }
}

/// Configuration for decoding a run of units.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecoderConfig {
    /// When true, read faults are returned as [`DecodeError::Read`] instead
    /// of being recorded. Default: false.
    pub fail_on_read_fault: bool,
    /// Maximum faults kept in the fault record. Later faults are counted but
    /// not stored. Default: 1024.
    pub max_recorded_faults: usize,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            fail_on_read_fault: false,
            max_recorded_faults: DEFAULT_MAX_RECORDED_FAULTS,
        }
    }
}

/// Decode one unit of `tag` from `source`.
///
/// Consumes exactly `tag.payload_size()` bytes on success. Bytes are
/// little-endian. A short or failed read is logged and reported in
/// [`Decoded::fault`] with a zero value; it is never an `Err`.
///
/// # Errors
///
/// [`DecodeError::UnsupportedTag`] if `tag` is Unknown, Struct, or not a
/// recognized code.
pub fn decode<R: Read + ?Sized>(tag: CipType, source: &mut R) -> Result<Decoded> {
    let Some(zero) = CipValue::zero(tag) else {
        tracing::error!(tag = %tag, "refusing to decode unsupported tag");
        return Err(DecodeError::UnsupportedTag(tag));
    };

    let mut buf = BytesMut::zeroed(tag.payload_size());
    if let Err(err) = source.read_exact(&mut buf) {
        let fault = ReadFault::new(tag, native_type_name(&zero), &err);
        tracing::warn!(tag = %tag, error = %err, "{fault}");
        return Ok(Decoded {
            value: zero,
            fault: Some(fault),
        });
    }

    let value = read_value(tag, &mut buf).ok_or(DecodeError::UnsupportedTag(tag))?;
    tracing::trace!(tag = %tag, value = %value, "decoded unit");
    Ok(Decoded { value, fault: None })
}

/// Decode one unit from the front of `bytes`.
///
/// Returns the decoded unit and the number of bytes consumed. On a short
/// read the whole slice is consumed.
pub fn decode_slice(tag: CipType, bytes: &[u8]) -> Result<(Decoded, usize)> {
    let mut cursor = bytes;
    let decoded = decode(tag, &mut cursor)?;
    Ok((decoded, bytes.len() - cursor.len()))
}

fn read_value(tag: CipType, buf: &mut impl Buf) -> Option<CipValue> {
    let value = match tag {
        CipType::BOOL => CipValue::Bool(buf.get_u8() != 0),
        CipType::BYTE => CipValue::Byte(buf.get_u8()),
        CipType::SINT => CipValue::Sint(buf.get_i8()),
        CipType::INT => CipValue::Int(buf.get_i16_le()),
        CipType::DINT => CipValue::Dint(buf.get_i32_le()),
        CipType::LINT => CipValue::Lint(buf.get_i64_le()),
        CipType::USINT => CipValue::Usint(buf.get_u8()),
        CipType::UINT => CipValue::Uint(buf.get_u16_le()),
        CipType::UDINT => CipValue::Udint(buf.get_u32_le()),
        CipType::LWORD => CipValue::Lword(buf.get_u64_le()),
        CipType::REAL => CipValue::Real(buf.get_f32_le()),
        CipType::LREAL => CipValue::Lreal(buf.get_f64_le()),
        CipType::WORD => CipValue::Word(buf.get_u16_le()),
        CipType::DWORD => CipValue::Dword(buf.get_u32_le()),
        CipType::STRING => {
            let mut raw = [0u8; STRING_PAYLOAD_SIZE];
            buf.copy_to_slice(&mut raw);
            CipValue::String(raw)
        }
        _ => return None,
    };
    Some(value)
}

fn native_type_name(value: &CipValue) -> &'static str {
    match value {
        CipValue::String(_) => "[u8; 86]",
        other => other.native_kind().name(),
    }
}
