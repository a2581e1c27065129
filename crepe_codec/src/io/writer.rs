use crate::codec::Encode;
use crate::endian::{convert_byte_order, machine_byte_order, FixedWidth};
use crate::mode::{EncodingMode, WireFamily};
use anyhow::Result;
use derive_more::Deref;
use itertools::{Itertools, Position};
use std::fmt;
use std::io::Write;

#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);

pub struct Writer<W: Write> {
    w: W,
    w_len: usize,
}

impl<W: Write> From<W> for Writer<W> {
    fn from(w: W) -> Self {
        Self { w, w_len: 0 }
    }
}

impl<W: Write> Writer<W> {
    pub fn into_inner(self) -> W {
        self.w
    }

    /// Total bytes written through this writer.
    pub fn w_len(&self) -> WriteLen {
        WriteLen(self.w_len)
    }

    /// Writes `val`, preceded by its type tag if `mode` includes one.
    pub fn write<T: Encode + ?Sized>(&mut self, val: &T, mode: EncodingMode) -> Result<WriteLen> {
        let w_len_before = self.w_len;
        log::trace!(
            "Writing {} as {:?}, {:?}",
            T::type_name(),
            mode.wire_family(),
            mode.type_tag_policy()
        );

        if mode.includes_type_tag() {
            let inner_mode = mode.demoted();
            match mode.wire_family() {
                WireFamily::Binary => {
                    T::type_name().as_str().encode_binary(self, inner_mode)?;
                    val.encode_binary(self, inner_mode)?;
                }
                WireFamily::Text => {
                    self.write_token(&T::type_name())?;
                    if T::PARENTHESIZED {
                        val.encode_text(self, inner_mode)?;
                    } else {
                        self.write_token("(")?;
                        val.encode_text(self, inner_mode)?;
                        self.write_token(")")?;
                    }
                }
            }
        } else {
            match mode.wire_family() {
                WireFamily::Binary => val.encode_binary(self, mode)?,
                WireFamily::Text => val.encode_text(self, mode)?,
            }
        }

        Ok(WriteLen(self.w_len - w_len_before))
    }

    /* Binary primitives. */

    pub fn write_raw(&mut self, buf: &[u8]) -> Result<()> {
        self.w.write_all(buf)?;
        self.w_len += buf.len();
        Ok(())
    }

    /// Writes the machine-order bytes of `val`, converted to `mode`'s byte order.
    pub fn write_fixed<S: FixedWidth>(&mut self, val: S, mode: EncodingMode) -> Result<()> {
        let mut val = val;
        convert_byte_order(&mut val, machine_byte_order(), mode.byte_order());
        self.write_raw(val.to_machine_bytes().as_ref())
    }

    /* Text primitives. */

    pub fn write_token(&mut self, token: &str) -> Result<()> {
        self.write_raw(token.as_bytes())
    }

    /// Lets rules use `write!(w, ...)`.
    pub fn write_fmt(&mut self, args: fmt::Arguments<'_>) -> Result<()> {
        let token = fmt::format(args);
        self.write_token(&token)
    }

    /// Writes `(e0, e1, ...)`, each element under `mode`.
    pub fn write_text_list<I>(&mut self, elems: I, mode: EncodingMode) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Encode,
    {
        self.write_token("(")?;
        for pos_elem in elems.into_iter().with_position() {
            match pos_elem {
                Position::First(elem) | Position::Middle(elem) => {
                    self.write(&elem, mode)?;
                    self.write_token(", ")?;
                }
                Position::Last(elem) | Position::Only(elem) => {
                    self.write(&elem, mode)?;
                }
            }
        }
        self.write_token(")")
    }
}
