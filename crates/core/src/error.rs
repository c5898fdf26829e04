use miette::Diagnostic;

/// Errors produced while decoding an SPC file.
///
/// Every fallible operation in this crate returns one of these variants. None
/// of them carry the raw bytes that triggered them, only enough context
/// (a field name, a subfile index, a byte count) to explain what went wrong.
#[derive(Debug, thiserror::Error, Diagnostic)]
pub enum SpcError {
    #[error("truncated while reading {field}: needed {needed} more byte(s), {remaining} left")]
    Truncated {
        field: &'static str,
        needed: usize,
        remaining: usize,
    },

    #[error("unsupported SPC variant: {reason}")]
    UnsupportedVariant { reason: String },

    #[error("invalid header field `{field}`: {message}")]
    InvalidHeader { field: &'static str, message: String },

    #[error(
        "shape mismatch in subfile {subfile}: x has {x_len} point(s), y has {y_len} point(s)"
    )]
    ShapeMismatch {
        subfile: usize,
        x_len: usize,
        y_len: usize,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpcError>;
