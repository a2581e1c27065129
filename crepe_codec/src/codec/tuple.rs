//! Pairs and tuples: members in index order.
//!
//! Binary has no delimiters. Text is `(a, b, c)`; a 1-tuple is `(a,)` so that it reads
//! differently from a parenthesized value.

use crate::codec::{Codec, Decode, Encode};
use crate::io::{Reader, Writer};
use crate::mode::EncodingMode;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Position within a tuple of known arity, while walking its members.
#[derive(Clone, Copy, Debug)]
pub struct TupleCursor {
    pos: usize,
    arity: usize,
}

impl TupleCursor {
    pub fn new(arity: usize) -> Self {
        Self { pos: 0, arity }
    }

    pub fn current(&self) -> usize {
        self.pos
    }

    pub fn advance(&mut self) {
        self.pos += 1;
    }

    /// Whether the position has run past the last member.
    pub fn has_ended(&self) -> bool {
        self.pos >= self.arity
    }

    /// Whether the current member is the last one.
    pub fn next_has_ended(&self) -> bool {
        self.pos + 1 >= self.arity
    }

    /// The text that follows the current member.
    pub fn separator(&self) -> &'static str {
        if !self.next_has_ended() {
            ", "
        } else if self.arity == 1 {
            ",)"
        } else {
            ")"
        }
    }
}

macro_rules! impl_tuple_codec {
    ($arity:literal; $($t:ident . $idx:tt),+) => {
        impl<$($t: Codec),+> Codec for ($($t,)+) {
            const PARENTHESIZED: bool = true;
        }

        impl<$($t: Encode),+> Encode for ($($t,)+) {
            fn encode_binary<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
                let mode = mode.demoted();
                $( w.write(&self.$idx, mode)?; )+
                Ok(())
            }
            fn encode_text<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
                let mode = mode.demoted();
                let mut cursor = TupleCursor::new($arity);
                w.write_token("(")?;
                $(
                    debug_assert_eq!($idx, cursor.current());
                    w.write(&self.$idx, mode)?;
                    w.write_token(cursor.separator())?;
                    cursor.advance();
                )+
                debug_assert!(cursor.has_ended());
                Ok(())
            }
        }

        /// Members are read into locals in index order, then the tuple is built,
        /// so no member needs a default value.
        impl<$($t: Decode),+> Decode for ($($t,)+) {
            #[allow(non_snake_case)]
            fn decode_binary<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
                let mode = mode.demoted();
                $( let $t = r.read_value::<$t>(mode)?; )+
                Ok(($($t,)+))
            }
            #[allow(non_snake_case)]
            fn decode_text<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
                let mode = mode.demoted();
                let mut cursor = TupleCursor::new($arity);
                r.expect_punct("(")?;
                $(
                    let $t = r.read_value::<$t>(mode)?;
                    r.expect_punct(cursor.separator())?;
                    cursor.advance();
                )+
                debug_assert!(cursor.has_ended());
                Ok(($($t,)+))
            }
        }
    };
}
impl_tuple_codec!(1; A.0);
impl_tuple_codec!(2; A.0, B.1);
impl_tuple_codec!(3; A.0, B.1, C.2);
impl_tuple_codec!(4; A.0, B.1, C.2, D.3);
impl_tuple_codec!(5; A.0, B.1, C.2, D.3, E.4);
impl_tuple_codec!(6; A.0, B.1, C.2, D.3, E.4, F.5);
impl_tuple_codec!(7; A.0, B.1, C.2, D.3, E.4, F.5, G.6);
impl_tuple_codec!(8; A.0, B.1, C.2, D.3, E.4, F.5, G.6, H.7);
