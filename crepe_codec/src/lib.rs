//! # Encoding engine
//!
//! Converts typed values to and from two wire representations:
//!
//! - binary, in a chosen byte order;
//! - text, human-readable.
//!
//! Either may embed type tags, i.e. the canonical names from [`crepe_type_name`],
//! which are verified on decode.
//!
//! An [`EncodingMode`] selects the representation. A [`Writer`] or [`Reader`] wraps a byte
//! stream and dispatches each value to the [`Encode`]/[`Decode`] rule of its shape.
//!
//! ```
//! use crepe_codec::{decode_from_slice, encode_to_vec, to_literal_text, BINARY_LITTLE};
//! use std::collections::BTreeMap;
//!
//! let buf = encode_to_vec(&0x1234_5678i32, BINARY_LITTLE).unwrap();
//! assert_eq!(vec![0x78, 0x56, 0x34, 0x12], buf);
//! assert_eq!(0x1234_5678i32, decode_from_slice::<i32>(&buf, BINARY_LITTLE).unwrap());
//!
//! let map = BTreeMap::from([('h', false), ('i', true)]);
//! assert_eq!(
//!     "map<char,bool>(('h', false), ('i', true))",
//!     to_literal_text(&map).unwrap()
//! );
//! ```

pub mod codec;
pub mod endian;
pub mod error;
pub mod io;
pub mod mode;

pub use codec::scalar::Byte;
pub use codec::tuple::TupleCursor;
pub use codec::union::{Variant2, Variant3, Variant4, Variant5, Variant6};
pub use codec::{Codec, Decode, Encode};
pub use crepe_type_name::{type_name_of, variant_name, TypeName};
pub use endian::ByteOrder;
pub use error::CodecError;
pub use io::{Reader, Writer};
pub use mode::*;

#[doc(hidden)]
pub use anyhow as __anyhow;

use anyhow::Result;

/* Whole-buffer conveniences. */

pub fn encode_to_vec<T: Encode + ?Sized>(val: &T, mode: EncodingMode) -> Result<Vec<u8>> {
    let mut w = Writer::from(vec![]);
    w.write(val, mode)?;
    Ok(w.into_inner())
}

/// Decodes one `T` from the start of `buf`. Trailing bytes are left unread.
pub fn decode_from_slice<T: Decode>(buf: &[u8], mode: EncodingMode) -> Result<T> {
    let mut r = Reader::from(buf);
    r.read_value::<T>(mode)
}

/// Like [`encode_to_vec`], for a text `mode`.
pub fn encode_to_string<T: Encode + ?Sized>(val: &T, mode: EncodingMode) -> Result<String> {
    let buf = encode_to_vec(val, mode)?;
    Ok(String::from_utf8(buf)?)
}

pub fn decode_from_str<T: Decode>(s: &str, mode: EncodingMode) -> Result<T> {
    decode_from_slice(s.as_bytes(), mode)
}

/// Untagged text. A.k.a. "plain".
pub fn to_plain_text<T: Encode + ?Sized>(val: &T) -> Result<String> {
    encode_to_string(val, TEXT)
}

/// Text prefixed by the type name. A.k.a. "literal".
pub fn to_literal_text<T: Encode + ?Sized>(val: &T) -> Result<String> {
    encode_to_string(val, TEXT_TAGGED)
}
