use crate::io::{Reader, Writer, PREALLOC_LIMIT};
use crate::mode::EncodingMode;
use anyhow::Result;
use derive_more::{Deref, From};
use std::io::{BufRead, Write};

/// The length prefix of strings and variable-length containers.
/// A machine-word scalar in the mode's byte order.
#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct SeqLen(usize);

impl SeqLen {
    pub fn ser<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
        w.write_fixed(self.0, mode)
    }

    pub fn deser<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
        let len = r.read_fixed::<usize>(mode)?;
        Ok(Self(len))
    }

    pub fn prealloc_capacity(&self) -> usize {
        self.0.min(PREALLOC_LIMIT)
    }
}
