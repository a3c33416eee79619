use crate::tag::CipType;

/// Errors produced by the tag model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TypeError {
    /// A tag name or code could not be parsed.
    #[error("unknown CIP type tag: {0:?}")]
    UnknownTag(String),

    /// A value was requested as a type other than the one it decoded to.
    #[error("value of type {actual} cannot be read as {expected}")]
    Mismatch {
        actual: CipType,
        expected: &'static str,
    },
}

pub type Result<T> = std::result::Result<T, TypeError>;
