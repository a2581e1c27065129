//! Variable-length containers: vectors, deques, sets, maps.
//!
//! Binary is a [`SeqLen`] followed by the elements in iteration order. Text is
//! `(e0, e1, ...)`. Map elements are `pair<K,V>`.
//!
//! Decoding into a set or map keeps the first of any duplicate keys.

use crate::codec::{Codec, Decode, Encode};
use crate::io::{Reader, SeqLen, Writer};
use crate::mode::{EncodingMode, WireFamily};
use anyhow::Result;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::io::{BufRead, Write};

fn encode_binary_elems<W, I>(
    w: &mut Writer<W>,
    len: usize,
    elems: I,
    mode: EncodingMode,
) -> Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Encode,
{
    let mode = mode.demoted();
    SeqLen::from(len).ser(w, mode)?;
    for elem in elems {
        w.write(&elem, mode)?;
    }
    Ok(())
}

/// A container that can be emptied and refilled one decoded element at a time.
trait Refill: Default {
    type Elem: Decode;

    fn clear_for(&mut self, capacity: usize);
    fn put(&mut self, elem: Self::Elem);
}

fn refill<C, R>(coll: &mut C, r: &mut Reader<R>, mode: EncodingMode) -> Result<()>
where
    C: Refill,
    R: BufRead,
{
    let mode = mode.demoted();
    match mode.wire_family() {
        WireFamily::Binary => {
            let len = SeqLen::deser(r, mode)?;
            coll.clear_for(len.prealloc_capacity());
            for _ in 0..*len {
                coll.put(r.read_value::<C::Elem>(mode)?);
            }
        }
        WireFamily::Text => {
            coll.clear_for(0);
            r.read_text_list(mode, |elem: C::Elem| coll.put(elem))?;
        }
    }
    Ok(())
}

impl<T: Decode> Refill for Vec<T> {
    type Elem = T;
    fn clear_for(&mut self, capacity: usize) {
        self.clear();
        self.reserve(capacity);
    }
    fn put(&mut self, elem: T) {
        self.push(elem);
    }
}

impl<T: Decode> Refill for VecDeque<T> {
    type Elem = T;
    fn clear_for(&mut self, capacity: usize) {
        self.clear();
        self.reserve(capacity);
    }
    fn put(&mut self, elem: T) {
        self.push_back(elem);
    }
}

impl<T: Decode + Ord> Refill for BTreeSet<T> {
    type Elem = T;
    fn clear_for(&mut self, _capacity: usize) {
        self.clear();
    }
    fn put(&mut self, elem: T) {
        self.insert(elem);
    }
}

impl<T: Decode + Eq + Hash> Refill for HashSet<T> {
    type Elem = T;
    fn clear_for(&mut self, capacity: usize) {
        self.clear();
        self.reserve(capacity);
    }
    fn put(&mut self, elem: T) {
        self.insert(elem);
    }
}

impl<K: Decode + Ord, V: Decode> Refill for BTreeMap<K, V> {
    type Elem = (K, V);
    fn clear_for(&mut self, _capacity: usize) {
        self.clear();
    }
    fn put(&mut self, (k, v): (K, V)) {
        self.entry(k).or_insert(v);
    }
}

impl<K: Decode + Eq + Hash, V: Decode> Refill for HashMap<K, V> {
    type Elem = (K, V);
    fn clear_for(&mut self, capacity: usize) {
        self.clear();
        self.reserve(capacity);
    }
    fn put(&mut self, (k, v): (K, V)) {
        self.entry(k).or_insert(v);
    }
}

macro_rules! impl_collection_codec {
    ($($coll:ident<$($p:ident),+> decode where [$($decode_gen:tt)*];)*) => {$(
        impl<$($p: Codec),+> Codec for $coll<$($p),+> {
            const PARENTHESIZED: bool = true;
        }

        impl<$($p: Encode),+> Encode for $coll<$($p),+> {
            fn encode_binary<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
                encode_binary_elems(w, self.len(), self.iter(), mode)
            }
            fn encode_text<W: Write>(&self, w: &mut Writer<W>, mode: EncodingMode) -> Result<()> {
                w.write_text_list(self.iter(), mode.demoted())
            }
        }

        impl<$($decode_gen)*> Decode for $coll<$($p),+> {
            fn decode_binary<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
                let mut coll = Self::default();
                refill(&mut coll, r, mode)?;
                Ok(coll)
            }
            fn decode_text<R: BufRead>(r: &mut Reader<R>, mode: EncodingMode) -> Result<Self> {
                let mut coll = Self::default();
                refill(&mut coll, r, mode)?;
                Ok(coll)
            }

            /// Clears and refills, keeping the allocation where the container has one.
            fn decode_in_place<R: BufRead>(
                &mut self,
                r: &mut Reader<R>,
                mode: EncodingMode,
            ) -> Result<()> {
                refill(self, r, mode)
            }
        }
    )*};
}
impl_collection_codec! {
    Vec<T> decode where [T: Decode];
    VecDeque<T> decode where [T: Decode];
    BTreeSet<T> decode where [T: Decode + Ord];
    HashSet<T> decode where [T: Decode + Eq + Hash];
    BTreeMap<K, V> decode where [K: Decode + Ord, V: Decode];
    HashMap<K, V> decode where [K: Decode + Eq + Hash, V: Decode];
}
