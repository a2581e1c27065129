use crate::codec::{Codec, Decode, Encode};
use crate::endian::{FixedWidth, SwapByteOrder};
use crate::error::CodecError;
use crate::io::{text, Reader, Writer};
use crate::mode::EncodingMode;
use crate::TypeName;
use anyhow::Result;
use derive_more::{Deref, From, Into};
use std::io::{BufRead, Write};

/// An opaque octet. Unlike `u8`, its text form is hexadecimal (`0xA7`).
#[derive(From, Into, Deref, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default, Debug)]
pub struct Byte(pub u8);

impl TypeName for Byte {
    fn type_name() -> String {
        String::from("byte")
    }
}
impl SwapByteOrder for Byte {
    fn swap_byte_order(&mut self) {}
}
impl FixedWidth for Byte {
    type Bytes = [u8; 1];

    fn to_machine_bytes(self) -> Self::Bytes {
        [self.0]
    }
    fn from_machine_bytes(bytes: Self::Bytes) -> Self {
        Self(bytes[0])
    }
}

impl Codec for Byte {}
impl Encode for Byte {
    fn encode_binary<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        w.write_fixed(*self, mode)
    }
    fn encode_text<W: Write>(&self, w: &mut Writer<W>, _mode: EncodingMode) -> Result<()> {
        write!(w, "0x{:02X}", self.0)
    }
}
impl Decode for Byte {
    fn decode_binary<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
        r.read_fixed(mode)
    }
    fn decode_text<R: BufRead>(r: &mut Reader<R>, _mode: EncodingMode) -> Result<Self> {
        let token = r.read_token()?;
        let int = token
            .strip_prefix("0x")
            .filter(|hex| hex.len() == 2)
            .and_then(|hex| u8::from_str_radix(hex, 16).ok())
            .ok_or_else(|| text::syntax_error(String::from("a byte like 0xA7"), token.clone()))?;
        Ok(Self(int))
    }
}

/* Integers: raw bytes in binary, decimal in text. */

macro_rules! impl_int_codec {
    ($($t:ty),*) => {$(
        impl Codec for $t {}
        impl Encode for $t {
            fn encode_binary<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
                w.write_fixed(*self, mode)
            }
            fn encode_text<W: Write>(&self, w: &mut Writer<W>, _mode: EncodingMode) -> Result<()> {
                write!(w, "{}", self)
            }
        }
        impl Decode for $t {
            fn decode_binary<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
                r.read_fixed(mode)
            }
            fn decode_text<R: BufRead>(r: &mut Reader<R>, _mode: EncodingMode) -> Result<Self> {
                r.read_parsed_token()
            }
        }
    )*};
}
impl_int_codec!(i8, u8, i16, u16, i32, u32, i64, u64);

/* Floats: raw bytes in binary, scientific notation with round-trip precision in text. */

macro_rules! impl_float_codec {
    ($($t:ty => $frac_digits:literal),*) => {$(
        impl Codec for $t {}
        impl Encode for $t {
            fn encode_binary<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
                w.write_fixed(*self, mode)
            }
            fn encode_text<W: Write>(&self, w: &mut Writer<W>, _mode: EncodingMode) -> Result<()> {
                let sci = format!("{:.*e}", $frac_digits, self);
                w.write_token(&text::normalize_exponent(sci))
            }
        }
        impl Decode for $t {
            fn decode_binary<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
                r.read_fixed(mode)
            }
            fn decode_text<R: BufRead>(r: &mut Reader<R>, _mode: EncodingMode) -> Result<Self> {
                r.read_parsed_token()
            }
        }
    )*};
}
impl_float_codec!(f32 => 9, f64 => 17);

/* bool */

impl Codec for bool {}
impl Encode for bool {
    fn encode_binary<W: Write>(&self, w: &mut Writer<W>, _mode: EncodingMode) -> Result<()> {
        w.write_raw(&[u8::from(*self)])
    }
    fn encode_text<W: Write>(&self, w: &mut Writer<W>, _mode: EncodingMode) -> Result<()> {
        w.write_token(if *self { "true" } else { "false" })
    }
}
impl Decode for bool {
    /// Only 0 and 1 are accepted.
    fn decode_binary<R: BufRead>(r: &mut Reader<R>, _mode: EncodingMode) -> Result<Self> {
        match r.read_byte()? {
            0 => Ok(false),
            1 => Ok(true),
            b => {
                log::debug!("Non-canonical bool byte 0x{b:02X}.");
                Err(CodecError::InvalidBool(b).into())
            }
        }
    }
    fn decode_text<R: BufRead>(r: &mut Reader<R>, _mode: EncodingMode) -> Result<Self> {
        r.read_parsed_token()
    }
}

/* char: UTF-8 in binary, so ASCII takes one byte. Quoted in text. */

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC0..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF7 => Some(4),
        _ => None,
    }
}

impl Codec for char {}
impl Encode for char {
    fn encode_binary<W: Write>(&self, w: &mut Writer<W>, _mode: EncodingMode) -> Result<()> {
        let mut buf = [0u8; 4];
        w.write_raw(self.encode_utf8(&mut buf).as_bytes())
    }
    fn encode_text<W: Write>(&self, w: &mut Writer<W>, _mode: EncodingMode) -> Result<()> {
        let mut buf = [0u8; 4];
        w.write_token(&text::quote(self.encode_utf8(&mut buf), '\''))
    }
}
impl Decode for char {
    fn decode_binary<R: BufRead>(r: &mut Reader<R>, _mode: EncodingMode) -> Result<Self> {
        let mut buf = [0u8; 4];
        buf[0] = r.read_byte()?;
        let width = utf8_width(buf[0]).ok_or(CodecError::InvalidChar(buf[0] as u32))?;
        r.read_raw(&mut buf[1..width])?;

        std::str::from_utf8(&buf[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .ok_or_else(|| {
                let bits = u32::from_be_bytes(buf) >> (8 * (4 - width));
                log::debug!("Invalid UTF-8 char 0x{bits:X}.");
                CodecError::InvalidChar(bits).into()
            })
    }
    fn decode_text<R: BufRead>(r: &mut Reader<R>, _mode: EncodingMode) -> Result<Self> {
        let s = r.read_quoted(b'\'')?;
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(text::syntax_error(String::from("a single char"), s)),
        }
    }
}
