//! # Shape rules
//!
//! One [`Encode`]/[`Decode`] implementation per value shape, each with a binary and a text
//! rendition. The [`Writer`] and [`Reader`] pick the rendition from the
//! [`EncodingMode`]'s wire family and handle the type tag before delegating here, so a rule
//! only ever sees a mode whose policy is `Excluded` or `Conditional`.
//!
//! Rules write nested values back through [`Writer::write`] / [`Reader::read_value`]
//! under [`EncodingMode::demoted`].
//!
//! Binary layouts, with `len` being a machine-word [`crate::io::SeqLen`]:
//!
//! ```text
//! bool                    u8, 0 or 1
//! int*, uint*, byte       raw, mode's byte order
//! float, double           raw, mode's byte order
//! char                    UTF-8, 1 to 4 bytes
//! string                  len, [u8; len]
//! optional<T>             bool, T if true
//! pair<A,B>, tuple<..>    members back to back
//! array<T,N>              [T; N]
//! vector, set, map        len, [element; len], map elements as pair<K,V>
//! variant<..>             u16 index, active alternative (tagged if tags were requested)
//! ```

use crate::io::{Reader, Writer};
use crate::mode::{EncodingMode, WireFamily};
use crate::TypeName;
use anyhow::Result;
use std::io::{BufRead, Write};

pub mod array;
pub mod optional;
pub mod scalar;
pub mod sequence;
pub mod string;
pub mod tuple;
pub mod union;
mod wrappers;


/// Properties common to both directions of a shape rule.
pub trait Codec: TypeName {
    /// Whether the text rendition is already enclosed in parentheses.
    ///
    /// A type tag in text is followed directly by such a rendition,
    /// and wraps any other rendition in parentheses.
    const PARENTHESIZED: bool = false;
}

pub trait Encode: Codec {
    fn encode_binary<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()>;
    fn encode_text<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()>;
}

pub trait Decode: Codec + Sized {
    /// Constructs a value from its parts. Every type has this path,
    /// including those with no meaningful empty state.
    fn decode_binary<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self>;
    fn decode_text<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self>;

    /// Overwrites `self`. Containers override this to refill their existing storage.
    ///
    /// On failure `self` holds some valid but unspecified value.
    fn decode_in_place<R: BufRead>(&mut self, r: &mut Reader<R>, mode: EncodingMode) -> Result<()> {
        *self = match mode.wire_family() {
            WireFamily::Binary => Self::decode_binary(r, mode)?,
            WireFamily::Text => Self::decode_text(r, mode)?,
        };
        Ok(())
    }
}
