use crate::codec::{Codec, Decode, Encode};
use crate::io::{Reader, Writer};
use crate::mode::EncodingMode;
use anyhow::Result;
use std::io::{BufRead, Write};

/* References and boxes are encoded as what they point to. */

impl<T: Codec + ?Sized> Codec for &T {
    const PARENTHESIZED: bool = T::PARENTHESIZED;
}
impl<T: Encode + ?Sized> Encode for &T {
    fn encode_binary<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        (**self).encode_binary(w, mode)
    }
    fn encode_text<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        (**self).encode_text(w, mode)
    }
}

impl<T: Codec + ?Sized> Codec for Box<T> {
    const PARENTHESIZED: bool = T::PARENTHESIZED;
}
impl<T: Encode + ?Sized> Encode for Box<T> {
    fn encode_binary<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        (**self).encode_binary(w, mode)
    }
    fn encode_text<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        (**self).encode_text(w, mode)
    }
}
impl<T: Decode> Decode for Box<T> {
    fn decode_binary<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
        T::decode_binary(r, mode).map(Box::new)
    }
    fn decode_text<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
        T::decode_text(r, mode).map(Box::new)
    }
    fn decode_in_place<R: BufRead>(&mut self, r: &mut Reader<R>, mode: EncodingMode) -> Result<()> {
        (**self).decode_in_place(r, mode)
    }
}
