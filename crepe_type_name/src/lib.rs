//! Canonical printable names for static types.
//!
//! The codec embeds these names as type tags, so a name must be unique per distinct
//! static type. Composite names are built from their parameters' names with no spaces:
//!
//! ```text
//! int32
//! vector<string>
//! map<char,optional<double>>
//! pair<uint8,array<bool,3>>
//! ```
//!
//! References and boxes are transparent: `&T` and `Box<T>` are named like `T`.

use itertools::Itertools;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};


pub trait TypeName {
    fn type_name() -> String;
}

pub fn type_name_of<T: TypeName + ?Sized>() -> String {
    T::type_name()
}

/* Scalars. */

macro_rules! impl_scalar_name {
    ($($t:ty => $name:literal),* $(,)?) => {$(
        impl TypeName for $t {
            fn type_name() -> String {
                String::from($name)
            }
        }
    )*};
}
impl_scalar_name! {
    bool => "bool",
    char => "char",
    i8 => "int8",
    u8 => "uint8",
    i16 => "int16",
    u16 => "uint16",
    i32 => "int32",
    u32 => "uint32",
    i64 => "int64",
    u64 => "uint64",
    f32 => "float",
    f64 => "double",
    String => "string",
    str => "string",
}

/* Transparent wrappers. */

impl<T: TypeName + ?Sized> TypeName for &T {
    fn type_name() -> String {
        T::type_name()
    }
}
impl<T: TypeName + ?Sized> TypeName for Box<T> {
    fn type_name() -> String {
        T::type_name()
    }
}

/* Single-parameter templates. */

fn templated(template: &str, params: &[String]) -> String {
    format!("{}<{}>", template, params.iter().join(","))
}

macro_rules! impl_container_name {
    ($($container:ident => $name:literal),* $(,)?) => {$(
        impl<T: TypeName> TypeName for $container<T> {
            fn type_name() -> String {
                templated($name, &[T::type_name()])
            }
        }
    )*};
}
impl_container_name! {
    Option => "optional",
    Vec => "vector",
    VecDeque => "deque",
    BTreeSet => "set",
    HashSet => "unordered_set",
}

impl<K: TypeName, V: TypeName> TypeName for BTreeMap<K, V> {
    fn type_name() -> String {
        templated("map", &[K::type_name(), V::type_name()])
    }
}
impl<K: TypeName, V: TypeName> TypeName for HashMap<K, V> {
    fn type_name() -> String {
        templated("unordered_map", &[K::type_name(), V::type_name()])
    }
}

impl<T: TypeName, const N: usize> TypeName for [T; N] {
    fn type_name() -> String {
        templated("array", &[T::type_name(), N.to_string()])
    }
}

/* Tuples. A 2-tuple is a pair. */

macro_rules! impl_tuple_name {
    ($template:literal; $($t:ident),+) => {
        impl<$($t: TypeName),+> TypeName for ($($t,)+) {
            fn type_name() -> String {
                templated($template, &[$($t::type_name()),+])
            }
        }
    };
}
impl_tuple_name!("tuple"; A);
impl_tuple_name!("pair"; A, B);
impl_tuple_name!("tuple"; A, B, C);
impl_tuple_name!("tuple"; A, B, C, D);
impl_tuple_name!("tuple"; A, B, C, D, E);
impl_tuple_name!("tuple"; A, B, C, D, E, F);
impl_tuple_name!("tuple"; A, B, C, D, E, F, G);
impl_tuple_name!("tuple"; A, B, C, D, E, F, G, H);

/// Builds the name of a tagged union from its alternatives' names, in declaration order.
///
/// Exposed for union types declared outside this crate.
pub fn variant_name(alternatives: &[String]) -> String {
    templated("variant", alternatives)
}
