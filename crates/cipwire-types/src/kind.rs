//! Classification of native value kinds onto CIP type tags.
//!
//! The mapping is closed: [`NativeKind`] enumerates every kind the codec
//! knows about, and kinds without a fixed-width wire counterpart map to
//! [`CipType::UNKNOWN`] instead of failing.

use crate::tag::CipType;

/// Shape of a native value, independent of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeKind {
    Bool,
    U8,
    I8,
    U16,
    I16,
    U32,
    I32,
    U64,
    I64,
    F32,
    F64,
    /// Text. Controllers send strings as structures.
    Text,
    /// Any other composite value (user-defined types, arrays of structures).
    Structured,
    /// Platform-width unsigned integer.
    Usize,
    /// Platform-width signed integer.
    Isize,
    U128,
    I128,
    Char,
}

impl NativeKind {
    /// Every kind, in declaration order.
    pub const ALL: [NativeKind; 18] = [
        Self::Bool,
        Self::U8,
        Self::I8,
        Self::U16,
        Self::I16,
        Self::U32,
        Self::I32,
        Self::U64,
        Self::I64,
        Self::F32,
        Self::F64,
        Self::Text,
        Self::Structured,
        Self::Usize,
        Self::Isize,
        Self::U128,
        Self::I128,
        Self::Char,
    ];

    /// Rust spelling of the kind, e.g. `"i32"`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::U8 => "u8",
            Self::I8 => "i8",
            Self::U16 => "u16",
            Self::I16 => "i16",
            Self::U32 => "u32",
            Self::I32 => "i32",
            Self::U64 => "u64",
            Self::I64 => "i64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Text => "text",
            Self::Structured => "structured",
            Self::Usize => "usize",
            Self::Isize => "isize",
            Self::U128 => "u128",
            Self::I128 => "i128",
            Self::Char => "char",
        }
    }

    /// Parse the Rust spelling returned by [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name))
    }
}

/// Map a native kind to the tag a controller uses for it.
///
/// Total over [`NativeKind`]: kinds with no fixed-width wire mapping return
/// [`CipType::UNKNOWN`].
pub const fn tag_for_native_kind(kind: NativeKind) -> CipType {
    match kind {
        NativeKind::Bool => CipType::BOOL,
        NativeKind::U8 => CipType::USINT,
        NativeKind::I8 => CipType::SINT,
        NativeKind::U16 => CipType::UINT,
        NativeKind::I16 => CipType::INT,
        NativeKind::U32 => CipType::UDINT,
        NativeKind::I32 => CipType::DINT,
        NativeKind::U64 => CipType::LWORD,
        NativeKind::I64 => CipType::LINT,
        NativeKind::F32 => CipType::REAL,
        NativeKind::F64 => CipType::LREAL,
        NativeKind::Text | NativeKind::Structured => CipType::STRUCT,
        NativeKind::Usize
        | NativeKind::Isize
        | NativeKind::U128
        | NativeKind::I128
        | NativeKind::Char => CipType::UNKNOWN,
    }
}

/// Rust types with a fixed native kind.
pub trait CipNative {
    const KIND: NativeKind;
}

macro_rules! impl_cip_native {
    ($($ty:ty => $kind:ident),* $(,)?) => {
        $(
            impl CipNative for $ty {
                const KIND: NativeKind = NativeKind::$kind;
            }
        )*
    };
}

impl_cip_native! {
    bool => Bool,
    u8 => U8,
    i8 => I8,
    u16 => U16,
    i16 => I16,
    u32 => U32,
    i32 => I32,
    u64 => U64,
    i64 => I64,
    f32 => F32,
    f64 => F64,
    String => Text,
    &str => Text,
    usize => Usize,
    isize => Isize,
    u128 => U128,
    i128 => I128,
    char => Char,
}

/// The tag for Rust type `T`, resolved at compile time.
pub const fn cip_type_of<T: CipNative + ?Sized>() -> CipType {
    tag_for_native_kind(T::KIND)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_kinds_map_to_matching_tags() {
        assert_eq!(tag_for_native_kind(NativeKind::Bool), CipType::BOOL);
        assert_eq!(tag_for_native_kind(NativeKind::U8), CipType::USINT);
        assert_eq!(tag_for_native_kind(NativeKind::I8), CipType::SINT);
        assert_eq!(tag_for_native_kind(NativeKind::U16), CipType::UINT);
        assert_eq!(tag_for_native_kind(NativeKind::I16), CipType::INT);
        assert_eq!(tag_for_native_kind(NativeKind::U32), CipType::UDINT);
        assert_eq!(tag_for_native_kind(NativeKind::I32), CipType::DINT);
        assert_eq!(tag_for_native_kind(NativeKind::U64), CipType::LWORD);
        assert_eq!(tag_for_native_kind(NativeKind::I64), CipType::LINT);
        assert_eq!(tag_for_native_kind(NativeKind::F32), CipType::REAL);
        assert_eq!(tag_for_native_kind(NativeKind::F64), CipType::LREAL);
    }

    #[test]
    fn text_and_structures_arrive_as_struct() {
        assert_eq!(tag_for_native_kind(NativeKind::Text), CipType::STRUCT);
        assert_eq!(tag_for_native_kind(NativeKind::Structured), CipType::STRUCT);
    }

    #[test]
    fn unmapped_kinds_return_unknown() {
        for kind in [
            NativeKind::Usize,
            NativeKind::Isize,
            NativeKind::U128,
            NativeKind::I128,
            NativeKind::Char,
        ] {
            assert_eq!(tag_for_native_kind(kind), CipType::UNKNOWN, "{kind:?}");
        }
    }

    #[test]
    fn every_mapped_tag_has_a_size() {
        for kind in NativeKind::ALL {
            let tag = tag_for_native_kind(kind);
            assert!(tag.is_known());
            assert_eq!(tag == CipType::UNKNOWN, tag.size() == 0, "{kind:?}");
        }
    }

    #[test]
    fn type_level_lookup_matches_kind_lookup() {
        assert_eq!(cip_type_of::<i32>(), CipType::DINT);
        assert_eq!(cip_type_of::<f32>(), CipType::REAL);
        assert_eq!(cip_type_of::<u64>(), CipType::LWORD);
        assert_eq!(cip_type_of::<bool>(), CipType::BOOL);
        assert_eq!(cip_type_of::<String>(), CipType::STRUCT);
        assert_eq!(cip_type_of::<&str>(), CipType::STRUCT);
        assert_eq!(cip_type_of::<usize>(), CipType::UNKNOWN);
    }

    #[test]
    fn kind_names_round_trip() {
        for kind in NativeKind::ALL {
            assert_eq!(NativeKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(NativeKind::from_name("F32"), Some(NativeKind::F32));
        assert_eq!(NativeKind::from_name("decimal"), None);
    }
}
