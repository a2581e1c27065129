use crate::codec::{Codec, Decode, Encode};
use crate::io::{text, Reader, SeqLen, Writer};
use crate::mode::EncodingMode;
use anyhow::Result;
use std::io::{BufRead, Write};

/* str: encode-only view of a string. */

impl Codec for str {}
impl Encode for str {
    /// UTF-8 is one byte per code unit, so the payload needs no byte order conversion.
    fn encode_binary<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        SeqLen::from(self.len()).ser(w, mode)?;
        w.write_raw(self.as_bytes())
    }
    fn encode_text<W: Write>(&self, w: &mut Writer<W>, _mode: EncodingMode) -> Result<()> {
        w.write_token(&text::quote(self, '"'))
    }
}

/* String */

impl Codec for String {}
impl Encode for String {
    fn encode_binary<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        self.as_str().encode_binary(w, mode)
    }
    fn encode_text<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        self.as_str().encode_text(w, mode)
    }
}
impl Decode for String {
    fn decode_binary<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
        let len = SeqLen::deser(r, mode)?;
        let buf = r.read_raw_vec(*len)?;
        Ok(String::from_utf8(buf)?)
    }
    fn decode_text<R: BufRead>(r: &mut Reader<R>, _mode: EncodingMode) -> Result<Self> {
        r.read_quoted(b'"')
    }
}
