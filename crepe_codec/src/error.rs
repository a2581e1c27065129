use derive_more::Display;
use std::error::Error;

/// Decode failures that the engine itself classifies.
///
/// They travel inside [`anyhow::Error`]; callers that care `downcast_ref::<CodecError>()`.
/// Truncated input is not classified here: it surfaces as the stream's own
/// [`std::io::ErrorKind::UnexpectedEof`].
#[derive(Display, PartialEq, Eq, Clone, Debug)]
pub enum CodecError {
    #[display(fmt = "Type tag mismatch. Expected {}, found {}.", expected, found)]
    TypeMismatch { expected: String, found: String },

    #[display(
        fmt = "Invalid index for variadic type sequence. Index {} is not below arity {}.",
        index,
        arity
    )]
    InvalidUnionIndex { index: u16, arity: usize },

    #[display(fmt = "Non-canonical bool byte 0x{:02X}.", _0)]
    InvalidBool(u8),

    #[display(fmt = "Invalid char encoding 0x{:X}.", _0)]
    InvalidChar(u32),

    #[display(fmt = "Expected {} but found {:?}.", expected, found)]
    Syntax { expected: String, found: String },
}

impl Error for CodecError {}
