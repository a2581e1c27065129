use crate::codec::{Codec, Decode, Encode};
use crate::io::{text, Reader, Writer};
use crate::mode::{EncodingMode, WireFamily};
use anyhow::{anyhow, Result};
use std::any;
use std::io::{BufRead, Write};

/// `N` elements, no length prefix. `N` is part of the type.
impl<T: Codec, const N: usize> Codec for [T; N] {
    const PARENTHESIZED: bool = true;
}

impl<T: Encode, const N: usize> Encode for [T; N] {
    fn encode_binary<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        let mode = mode.demoted();
        for elem in self.iter() {
            w.write(elem, mode)?;
        }
        Ok(())
    }
    fn encode_text<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        w.write_text_list(self.iter(), mode.demoted())
    }
}

impl<T: Decode, const N: usize> Decode for [T; N] {
    fn decode_binary<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
        let mode = mode.demoted();
        let mut elems = Vec::with_capacity(N);
        for _ in 0..N {
            elems.push(r.read_value::<T>(mode)?);
        }
        into_array(elems)
    }
    fn decode_text<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
        let mut elems = Vec::with_capacity(N);
        r.read_text_list(mode.demoted(), |elem: T| elems.push(elem))?;
        if elems.len() != N {
            return Err(text::syntax_error(
                format!("{N} elements"),
                format!("{} elements", elems.len()),
            ));
        }
        into_array(elems)
    }

    /// Element-wise, so each element may reuse its own storage.
    fn decode_in_place<R: BufRead>(&mut self, r: &mut Reader<R>, mode: EncodingMode) -> Result<()> {
        match mode.wire_family() {
            WireFamily::Binary => {
                let mode = mode.demoted();
                for elem in self.iter_mut() {
                    r.read_in_place(elem, mode)?;
                }
                Ok(())
            }
            WireFamily::Text => {
                *self = Self::decode_text(r, mode)?;
                Ok(())
            }
        }
    }
}

fn into_array<T, const N: usize>(elems: Vec<T>) -> Result<[T; N]> {
    let len = elems.len();
    elems.try_into().map_err(|_| {
        anyhow!(
            "{len} elements cannot fill an array of {N} {}",
            any::type_name::<T>()
        )
    })
}
