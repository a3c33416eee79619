use std::fmt;
use std::str::FromStr;

use bytes::BytesMut;

use crate::error::TypeError;

/// Fixed payload width of a controller string when decoded under the
/// [`CipType::STRING`] marker: a 4-byte length followed by 82 characters.
pub const STRING_PAYLOAD_SIZE: usize = 86;

/// A single-byte CIP wire type tag.
///
/// Any byte is representable so that codes read off the wire can be carried
/// around before they are checked. Only the associated constants are
/// recognized; everything else sizes to 0 and labels as `"0 - Unknown"`.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CipType(u8);

impl CipType {
    /// Sentinel for "no mapping found". Never decoded.
    pub const UNKNOWN: CipType = CipType(0x00);
    /// Generic structure, also used by controllers for strings.
    pub const STRUCT: CipType = CipType(0xA0);
    pub const BOOL: CipType = CipType(0xC1);
    /// 8 bits packed into one byte.
    pub const BYTE: CipType = CipType(0xD1);
    pub const SINT: CipType = CipType(0xC2);
    pub const INT: CipType = CipType(0xC3);
    pub const DINT: CipType = CipType(0xC4);
    pub const LINT: CipType = CipType(0xC5);
    pub const USINT: CipType = CipType(0xC6);
    pub const UINT: CipType = CipType(0xC7);
    pub const UDINT: CipType = CipType(0xC8);
    pub const LWORD: CipType = CipType(0xC9);
    pub const REAL: CipType = CipType(0xCA);
    pub const LREAL: CipType = CipType(0xCB);
    pub const WORD: CipType = CipType(0xD2);
    pub const DWORD: CipType = CipType(0xD3);
    /// Library-side marker flagging a structure as a string. Controllers send
    /// strings as [`CipType::STRUCT`]; this code does not appear on the wire.
    pub const STRING: CipType = CipType(0xDA);

    /// Every recognized tag, in code table order.
    pub const ALL: [CipType; 17] = [
        Self::UNKNOWN,
        Self::STRUCT,
        Self::BOOL,
        Self::BYTE,
        Self::SINT,
        Self::INT,
        Self::DINT,
        Self::LINT,
        Self::USINT,
        Self::UINT,
        Self::UDINT,
        Self::LWORD,
        Self::REAL,
        Self::LREAL,
        Self::WORD,
        Self::DWORD,
        Self::STRING,
    ];

    /// Wrap a raw wire code.
    pub const fn from_code(code: u8) -> Self {
        Self(code)
    }

    /// The raw wire code.
    pub const fn code(self) -> u8 {
        self.0
    }

    /// Size in bytes of one unit of this tag.
    ///
    /// Returns 0 for [`CipType::UNKNOWN`] and for unrecognized codes. Callers
    /// must treat 0 as "cannot size this tag".
    pub const fn size(self) -> usize {
        match self {
            Self::UNKNOWN => 0,
            Self::STRUCT => 88,
            Self::BOOL | Self::BYTE | Self::SINT | Self::USINT => 1,
            Self::INT | Self::UINT | Self::WORD => 2,
            Self::DINT | Self::UDINT | Self::REAL | Self::DWORD => 4,
            Self::LINT | Self::LWORD | Self::LREAL => 8,
            Self::STRING => 1,
            _ => 0,
        }
    }

    /// Number of bytes the decoder consumes for one unit of this tag.
    ///
    /// Equal to [`size`](Self::size) except for the string marker, whose
    /// payload is [`STRING_PAYLOAD_SIZE`] bytes.
    pub const fn payload_size(self) -> usize {
        match self {
            Self::STRING => STRING_PAYLOAD_SIZE,
            other => other.size(),
        }
    }

    /// Allocate a zero-filled buffer of exactly [`size`](Self::size) bytes.
    pub fn new_buffer(self) -> BytesMut {
        BytesMut::zeroed(self.size())
    }

    /// Bare tag name, e.g. `"DINT"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::UNKNOWN => "Unknown",
            Self::STRUCT => "Struct",
            Self::BOOL => "BOOL",
            Self::BYTE => "BYTE",
            Self::SINT => "SINT",
            Self::INT => "INT",
            Self::DINT => "DINT",
            Self::LINT => "LINT",
            Self::USINT => "USINT",
            Self::UINT => "UINT",
            Self::UDINT => "UDINT",
            Self::LWORD => "LWORD",
            Self::REAL => "REAL",
            Self::LREAL => "LREAL",
            Self::WORD => "WORD",
            Self::DWORD => "DWORD",
            Self::STRING => "String",
            _ => "Unknown",
        }
    }

    /// Diagnostic label in `"<hex code> - <name>"` form.
    ///
    /// These strings appear in logs and fault messages and must not change.
    pub const fn label(self) -> &'static str {
        match self {
            Self::UNKNOWN => "0x00 - Unknown",
            Self::STRUCT => "0xA0 - Struct",
            Self::BOOL => "0xC1 - BOOL",
            Self::BYTE => "0xD1 - BYTE",
            Self::SINT => "0xC2 - SINT",
            Self::INT => "0xC3 - INT",
            Self::DINT => "0xC4 - DINT",
            Self::LINT => "0xC5 - LINT",
            Self::USINT => "0xC6 - USINT",
            Self::UINT => "0xC7 - UINT",
            Self::UDINT => "0xC8 - UDINT",
            Self::LWORD => "0xC9 - LWORD",
            Self::REAL => "0xCA - REAL",
            Self::LREAL => "0xCB - LREAL",
            Self::WORD => "0xD2 - WORD",
            Self::DWORD => "0xD3 - DWORD",
            Self::STRING => "0xDA - String",
            _ => "0 - Unknown",
        }
    }

    /// Returns true if this is one of the enumerated tags.
    pub fn is_known(self) -> bool {
        Self::ALL.contains(&self)
    }

    /// Returns true for fixed-width little-endian scalar tags.
    pub const fn is_scalar(self) -> bool {
        matches!(
            self,
            Self::BOOL
                | Self::BYTE
                | Self::SINT
                | Self::INT
                | Self::DINT
                | Self::LINT
                | Self::USINT
                | Self::UINT
                | Self::UDINT
                | Self::LWORD
                | Self::REAL
                | Self::LREAL
                | Self::WORD
                | Self::DWORD
        )
    }

    /// Returns true if a single unit of this tag can be decoded directly.
    ///
    /// Struct decoding belongs to a structure decoder and is excluded here.
    pub const fn is_decodable(self) -> bool {
        self.is_scalar() || matches!(self, Self::STRING)
    }
}

impl From<u8> for CipType {
    fn from(code: u8) -> Self {
        Self(code)
    }
}

impl From<CipType> for u8 {
    fn from(tag: CipType) -> Self {
        tag.0
    }
}

impl fmt::Display for CipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Debug for CipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "CipType::{}", self.name().to_ascii_uppercase())
        } else {
            write!(f, "CipType(0x{:02X})", self.0)
        }
    }
}

impl FromStr for CipType {
    type Err = TypeError;

    /// Parse a tag name (case-insensitive) or a `0x`-prefixed hex code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
        {
            return u8::from_str_radix(hex, 16)
                .map(Self)
                .map_err(|_| TypeError::UnknownTag(s.to_string()));
        }

        Self::ALL
            .iter()
            .copied()
            .find(|tag| tag.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TypeError::UnknownTag(s.to_string()))
    }
}
