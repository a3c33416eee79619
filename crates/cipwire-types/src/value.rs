use std::fmt;

use crate::error::{Result, TypeError};
use crate::kind::NativeKind;
use crate::tag::{CipType, STRING_PAYLOAD_SIZE};

const STRING_LEN_SIZE: usize = 4;

/// One decoded unit, tagged with the kind it decoded to.
///
/// Callers narrow to the concrete type with `TryFrom`, e.g.
/// `i32::try_from(value)?`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CipValue {
    Bool(bool),
    Byte(u8),
    Sint(i8),
    Int(i16),
    Dint(i32),
    Lint(i64),
    Usint(u8),
    Uint(u16),
    Udint(u32),
    Lword(u64),
    Real(f32),
    Lreal(f64),
    Word(u16),
    Dword(u32),
    /// Raw controller string payload.
    String([u8; STRING_PAYLOAD_SIZE]),
}

impl CipValue {
    /// The zero value for a decodable tag, or `None` if the tag cannot be
    /// decoded as a single unit.
    pub fn zero(tag: CipType) -> Option<Self> {
        let value = match tag {
            CipType::BOOL => Self::Bool(false),
            CipType::BYTE => Self::Byte(0),
            CipType::SINT => Self::Sint(0),
            CipType::INT => Self::Int(0),
            CipType::DINT => Self::Dint(0),
            CipType::LINT => Self::Lint(0),
            CipType::USINT => Self::Usint(0),
            CipType::UINT => Self::Uint(0),
            CipType::UDINT => Self::Udint(0),
            CipType::LWORD => Self::Lword(0),
            CipType::REAL => Self::Real(0.0),
            CipType::LREAL => Self::Lreal(0.0),
            CipType::WORD => Self::Word(0),
            CipType::DWORD => Self::Dword(0),
            CipType::STRING => Self::String([0; STRING_PAYLOAD_SIZE]),
            _ => return None,
        };
        Some(value)
    }

    /// The tag this value was decoded from.
    pub const fn cip_type(&self) -> CipType {
        match self {
            Self::Bool(_) => CipType::BOOL,
            Self::Byte(_) => CipType::BYTE,
            Self::Sint(_) => CipType::SINT,
            Self::Int(_) => CipType::INT,
            Self::Dint(_) => CipType::DINT,
            Self::Lint(_) => CipType::LINT,
            Self::Usint(_) => CipType::USINT,
            Self::Uint(_) => CipType::UINT,
            Self::Udint(_) => CipType::UDINT,
            Self::Lword(_) => CipType::LWORD,
            Self::Real(_) => CipType::REAL,
            Self::Lreal(_) => CipType::LREAL,
            Self::Word(_) => CipType::WORD,
            Self::Dword(_) => CipType::DWORD,
            Self::String(_) => CipType::STRING,
        }
    }

    /// The native kind carried by this value.
    pub const fn native_kind(&self) -> NativeKind {
        match self {
            Self::Bool(_) => NativeKind::Bool,
            Self::Byte(_) | Self::Usint(_) => NativeKind::U8,
            Self::Sint(_) => NativeKind::I8,
            Self::Int(_) => NativeKind::I16,
            Self::Dint(_) => NativeKind::I32,
            Self::Lint(_) => NativeKind::I64,
            Self::Uint(_) | Self::Word(_) => NativeKind::U16,
            Self::Udint(_) | Self::Dword(_) => NativeKind::U32,
            Self::Lword(_) => NativeKind::U64,
            Self::Real(_) => NativeKind::F32,
            Self::Lreal(_) => NativeKind::F64,
            Self::String(_) => NativeKind::Text,
        }
    }

    /// Returns true if this is the zero value for its tag.
    pub fn is_zero(&self) -> bool {
        CipValue::zero(self.cip_type()).as_ref() == Some(self)
    }

    /// Text of a string payload, decoded lossily.
    ///
    /// The payload is a little-endian `LEN` followed by the characters. `LEN`
    /// is clamped to the character area. Returns `None` for non-string values.
    pub fn string_payload_text(&self) -> Option<String> {
        match self {
            Self::String(raw) => {
                let (len, data) = raw.split_at(STRING_LEN_SIZE);
                let len = u32::from_le_bytes([len[0], len[1], len[2], len[3]]) as usize;
                let text = &data[..len.min(data.len())];
                Some(String::from_utf8_lossy(text).into_owned())
            }
            _ => None,
        }
    }

    fn mismatch(&self, expected: &'static str) -> TypeError {
        TypeError::Mismatch {
            actual: self.cip_type(),
            expected,
        }
    }
}

impl fmt::Display for CipValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Byte(v) | Self::Usint(v) => write!(f, "{v}"),
            Self::Sint(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Dint(v) => write!(f, "{v}"),
            Self::Lint(v) => write!(f, "{v}"),
            Self::Uint(v) | Self::Word(v) => write!(f, "{v}"),
            Self::Udint(v) | Self::Dword(v) => write!(f, "{v}"),
            Self::Lword(v) => write!(f, "{v}"),
            Self::Real(v) => write!(f, "{v}"),
            Self::Lreal(v) => write!(f, "{v}"),
            Self::String(_) => {
                write!(f, "{:?}", self.string_payload_text().unwrap_or_default())
            }
        }
    }
}

macro_rules! impl_try_from_value {
    ($ty:ty, $name:literal, $($variant:ident)|+) => {
        impl TryFrom<CipValue> for $ty {
            type Error = TypeError;

            fn try_from(value: CipValue) -> Result<Self> {
                match value {
                    $(CipValue::$variant(v) => Ok(v),)+
                    other => Err(other.mismatch($name)),
                }
            }
        }
    };
}

impl_try_from_value!(bool, "bool", Bool);
impl_try_from_value!(u8, "u8", Byte | Usint);
impl_try_from_value!(i8, "i8", Sint);
impl_try_from_value!(i16, "i16", Int);
impl_try_from_value!(i32, "i32", Dint);
impl_try_from_value!(i64, "i64", Lint);
impl_try_from_value!(u16, "u16", Uint | Word);
impl_try_from_value!(u32, "u32", Udint | Dword);
impl_try_from_value!(u64, "u64", Lword);
impl_try_from_value!(f32, "f32", Real);
impl_try_from_value!(f64, "f64", Lreal);
impl_try_from_value!([u8; STRING_PAYLOAD_SIZE], "string payload", String);
