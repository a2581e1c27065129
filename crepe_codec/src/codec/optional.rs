use crate::codec::{Codec, Decode, Encode};
use crate::io::{Reader, Writer};
use crate::mode::{EncodingMode, WireFamily};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Presence flag, then the value if present.
///
/// ```text
/// binary      00  |  01 <T>
/// text        (false)  |  (true, <T>)
/// ```
impl<T: Codec> Codec for Option<T> {
    const PARENTHESIZED: bool = true;
}

impl<T: Encode> Encode for Option<T> {
    fn encode_binary<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        let mode = mode.demoted();
        w.write(&self.is_some(), mode)?;
        if let Some(t) = self {
            w.write(t, mode)?;
        }
        Ok(())
    }
    fn encode_text<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        let mode = mode.demoted();
        w.write_token("(")?;
        w.write(&self.is_some(), mode)?;
        if let Some(t) = self {
            w.write_token(", ")?;
            w.write(t, mode)?;
        }
        w.write_token(")")
    }
}

impl<T: Decode> Decode for Option<T> {
    fn decode_binary<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
        let mut opt: Option<T> = None;
        opt.decode_in_place(r, mode)?;
        Ok(opt)
    }
    fn decode_text<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
        let mut opt: Option<T> = None;
        opt.decode_in_place(r, mode)?;
        Ok(opt)
    }

    /// Reuses the contained value's storage when both sides are present.
    fn decode_in_place<R: BufRead>(&mut self, r: &mut Reader<R>, mode: EncodingMode) -> Result<()> {
        let mode = mode.demoted();
        let is_text = mode.wire_family() == WireFamily::Text;

        if is_text {
            r.expect_punct("(")?;
        }
        let present = r.read_value::<bool>(mode)?;
        if present && is_text {
            r.expect_punct(",")?;
        }

        if !present {
            *self = None;
        } else if let Some(t) = self {
            r.read_in_place(t, mode)?;
        } else {
            *self = Some(r.read_value::<T>(mode)?);
        }

        if is_text {
            r.expect_punct(")")?;
        }
        Ok(())
    }
}
