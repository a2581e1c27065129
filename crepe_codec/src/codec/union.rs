//! Tagged unions: exactly one active alternative, identified on the wire by its index.
//!
//! ```text
//! binary      u16 index, [alternative's type tag], alternative
//! text        (index, [alternative's type tag] alternative)
//! ```
//!
//! The union's static type does not determine which alternative is active, so the
//! alternative is tagged whenever the union's mode requests tags at all,
//! `Conditional` included.
//!
//! Declare a union with [`tagged_union!`](crate::tagged_union). [`Variant2`] through
//! [`Variant6`] are declared that way.

use crate::codec::Encode;
use crate::error::CodecError;
use crate::io::{Reader, Writer};
use crate::mode::{EncodingMode, TypeTagPolicy, WireFamily};
use anyhow::Result;
use std::io::{BufRead, Write};

/// The mode an active alternative is written and read under.
pub fn alternative_mode(mode: EncodingMode) -> EncodingMode {
    if mode.requests_type_tags() {
        mode.with_type_tag_policy(TypeTagPolicy::Included)
    } else {
        mode
    }
}

pub fn invalid_index(index: u16, arity: usize) -> anyhow::Error {
    log::debug!("Union index {index} is out of range for arity {arity}.");
    CodecError::InvalidUnionIndex { index, arity }.into()
}

pub fn encode_alternative<W, T>(
    w: &mut Writer<W>,
    index: u16,
    value: &T,
    mode: EncodingMode,
) -> Result<()>
where
    W: Write,
    T: Encode + ?Sized,
{
    let index_mode = mode.demoted();
    let alt_mode = alternative_mode(mode);
    match mode.wire_family() {
        WireFamily::Binary => {
            w.write(&index, index_mode)?;
            w.write(value, alt_mode)?;
            Ok(())
        }
        WireFamily::Text => {
            w.write_token("(")?;
            w.write(&index, index_mode)?;
            w.write_token(", ")?;
            w.write(value, alt_mode)?;
            w.write_token(")")
        }
    }
}

/// Reads and bounds-checks the index, then lets `read_alt` construct that alternative
/// under [`alternative_mode`].
pub fn decode_alternative<R, X, F>(
    r: &mut Reader<R>,
    mode: EncodingMode,
    arity: usize,
    read_alt: F,
) -> Result<X>
where
    R: BufRead,
    F: FnOnce(&mut Reader<R>, u16, EncodingMode) -> Result<X>,
{
    let is_text = mode.wire_family() == WireFamily::Text;

    if is_text {
        r.expect_punct("(")?;
    }
    let index = r.read_value::<u16>(mode.demoted())?;
    if usize::from(index) >= arity {
        return Err(invalid_index(index, arity));
    }
    if is_text {
        r.expect_punct(",")?;
    }

    let x = read_alt(r, index, alternative_mode(mode))?;

    if is_text {
        r.expect_punct(")")?;
    }
    Ok(x)
}

/// Declares an enum whose variants each hold one value, and makes it a tagged union.
///
/// Alternative indices follow declaration order. The canonical name is
/// `variant<..>` over the alternatives' names.
///
/// ```
/// use crepe_codec::{tagged_union, to_plain_text};
///
/// tagged_union! {
///     #[derive(PartialEq, Debug)]
///     pub enum Shape {
///         Circle(f32),
///         Label(String),
///     }
/// }
///
/// assert_eq!("(1, \"x\")", to_plain_text(&Shape::Label("x".into())).unwrap());
/// ```
#[macro_export]
macro_rules! tagged_union {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident $(<$($gen:ident),+ $(,)?>)? {
            $($alt:ident($ty:ty)),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis enum $name $(<$($gen),+>)? {
            $($alt($ty)),+
        }

        impl $(<$($gen: $crate::TypeName),+>)? $crate::TypeName for $name $(<$($gen),+>)? {
            fn type_name() -> String {
                $crate::variant_name(&[$(<$ty as $crate::TypeName>::type_name()),+])
            }
        }

        impl $(<$($gen: $crate::codec::Codec),+>)? $crate::codec::Codec
            for $name $(<$($gen),+>)?
        {
            const PARENTHESIZED: bool = true;
        }

        impl $(<$($gen: $crate::codec::Encode),+>)? $crate::codec::Encode
            for $name $(<$($gen),+>)?
        {
            fn encode_binary<W: ::std::io::Write>(
                &self,
                w: &mut $crate::io::Writer<W>,
                mode: $crate::mode::EncodingMode,
            ) -> $crate::__anyhow::Result<()> {
                $crate::__union_alternatives!($($alt),+);
                match self {
                    $(Self::$alt(value) => $crate::codec::union::encode_alternative(
                        w,
                        Alternative::$alt as u16,
                        value,
                        mode,
                    ),)+
                }
            }
            fn encode_text<W: ::std::io::Write>(
                &self,
                w: &mut $crate::io::Writer<W>,
                mode: $crate::mode::EncodingMode,
            ) -> $crate::__anyhow::Result<()> {
                // `encode_alternative` follows the mode's wire family.
                self.encode_binary(w, mode)
            }
        }

        impl $(<$($gen: $crate::codec::Decode),+>)? $crate::codec::Decode
            for $name $(<$($gen),+>)?
        {
            fn decode_binary<R: ::std::io::BufRead>(
                r: &mut $crate::io::Reader<R>,
                mode: $crate::mode::EncodingMode,
            ) -> $crate::__anyhow::Result<Self> {
                $crate::__union_alternatives!($($alt),+);
                $crate::codec::union::decode_alternative(
                    r,
                    mode,
                    ALTERNATIVES.len(),
                    |r, index, alt_mode| match ALTERNATIVES.get(usize::from(index)) {
                        $(Some(Alternative::$alt) => {
                            Ok(Self::$alt(r.read_value::<$ty>(alt_mode)?))
                        })+
                        None => Err($crate::codec::union::invalid_index(
                            index,
                            ALTERNATIVES.len(),
                        )),
                    },
                )
            }
            fn decode_text<R: ::std::io::BufRead>(
                r: &mut $crate::io::Reader<R>,
                mode: $crate::mode::EncodingMode,
            ) -> $crate::__anyhow::Result<Self> {
                // `decode_alternative` follows the mode's wire family.
                Self::decode_binary(r, mode)
            }
        }
    };
}

/// The alternatives of one union as a fieldless enum, numbered in declaration order.
#[doc(hidden)]
#[macro_export]
macro_rules! __union_alternatives {
    ($($alt:ident),+) => {
        #[allow(dead_code)]
        #[derive(Clone, Copy)]
        #[repr(u16)]
        enum Alternative {
            $($alt),+
        }
        #[allow(dead_code)]
        const ALTERNATIVES: &[Alternative] = &[$(Alternative::$alt),+];
    };
}

tagged_union! {
    #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
    pub enum Variant2<A, B> {
        V0(A),
        V1(B),
    }
}

tagged_union! {
    #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
    pub enum Variant3<A, B, C> {
        V0(A),
        V1(B),
        V2(C),
    }
}

tagged_union! {
    #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
    pub enum Variant4<A, B, C, D> {
        V0(A),
        V1(B),
        V2(C),
        V3(D),
    }
}

tagged_union! {
    #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
    pub enum Variant5<A, B, C, D, E> {
        V0(A),
        V1(B),
        V2(C),
        V3(D),
        V4(E),
    }
}

tagged_union! {
    #[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Debug)]
    pub enum Variant6<A, B, C, D, E, F> {
        V0(A),
        V1(B),
        V2(C),
        V3(D),
        V4(E),
        V5(F),
    }
}
