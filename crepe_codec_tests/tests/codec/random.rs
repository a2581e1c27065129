//! Arbitrary values of every shape, for round-trip tests.
//!
//! Variable-length containers get 0 to [`MAX_LEN`] elements. Sets and maps give up on
//! reaching their target size after [`WATCHDOG_LIMIT`] duplicate draws, so e.g. a
//! `set<bool>` never loops forever; it just ends up smaller.

use crepe_codec::{Byte, Variant2, Variant3};
use rand::distributions::{Alphanumeric, DistString};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::hash::Hash;

pub const MAX_LEN: usize = 10;
pub const WATCHDOG_LIMIT: usize = 100;

pub trait MakeRandom: Sized {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

pub fn make_random<T: MakeRandom, R: Rng + ?Sized>(rng: &mut R) -> T {
    T::make_random(rng)
}

fn random_len<R: Rng + ?Sized>(rng: &mut R) -> usize {
    rng.gen_range(0..=MAX_LEN)
}

/* Scalars. A quarter of the draws are edge values. */

macro_rules! impl_make_random_num {
    ($($t:ty),*) => {$(
        impl MakeRandom for $t {
            fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                if rng.gen_ratio(1, 4) {
                    let edges = [<$t>::MIN, <$t>::MAX, 0 as $t];
                    *edges.choose(rng).unwrap()
                } else {
                    rng.gen()
                }
            }
        }
    )*};
}
impl_make_random_num!(i8, u8, i16, u16, i32, u32, i64, u64);

macro_rules! impl_make_random_float {
    ($($t:ident),*) => {$(
        impl MakeRandom for $t {
            fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
                if rng.gen_ratio(1, 4) {
                    let edges = [
                        $t::MIN,
                        $t::MAX,
                        $t::MIN_POSITIVE,
                        $t::EPSILON,
                        0.0,
                        -1.0,
                    ];
                    *edges.choose(rng).unwrap()
                } else {
                    rng.gen_range(-1e6..1e6)
                }
            }
        }
    )*};
}
impl_make_random_float!(f32, f64);

impl MakeRandom for bool {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.gen()
    }
}
impl MakeRandom for Byte {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Byte(rng.gen())
    }
}
impl MakeRandom for char {
    /// Any scalar value, control characters and quotes included.
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen_ratio(1, 4) {
            let edges = ['\'', '"', '\\', '\n', '\0', ' ', '(', ','];
            *edges.choose(rng).unwrap()
        } else {
            rng.gen()
        }
    }
}
impl MakeRandom for String {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let len = random_len(rng);
        if rng.gen() {
            Alphanumeric.sample_string(rng, len)
        } else {
            (0..len).map(|_| char::make_random(rng)).collect()
        }
    }
}

/* Composites. */

impl<T: MakeRandom> MakeRandom for Option<T> {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.gen() {
            Some(T::make_random(rng))
        } else {
            None
        }
    }
}

impl<A: MakeRandom> MakeRandom for (A,) {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        (A::make_random(rng),)
    }
}
impl<A: MakeRandom, B: MakeRandom> MakeRandom for (A, B) {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let a = A::make_random(rng);
        let b = B::make_random(rng);
        (a, b)
    }
}
impl<A: MakeRandom, B: MakeRandom, C: MakeRandom> MakeRandom for (A, B, C) {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let a = A::make_random(rng);
        let b = B::make_random(rng);
        let c = C::make_random(rng);
        (a, b, c)
    }
}

impl<T: MakeRandom, const N: usize> MakeRandom for [T; N] {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        std::array::from_fn(|_| T::make_random(rng))
    }
}

impl<A: MakeRandom, B: MakeRandom> MakeRandom for Variant2<A, B> {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..2) {
            0 => Self::V0(A::make_random(rng)),
            _ => Self::V1(B::make_random(rng)),
        }
    }
}
impl<A: MakeRandom, B: MakeRandom, C: MakeRandom> MakeRandom for Variant3<A, B, C> {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        match rng.gen_range(0..3) {
            0 => Self::V0(A::make_random(rng)),
            1 => Self::V1(B::make_random(rng)),
            _ => Self::V2(C::make_random(rng)),
        }
    }
}

/* Containers. */

impl<T: MakeRandom> MakeRandom for Vec<T> {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let len = random_len(rng);
        (0..len).map(|_| T::make_random(rng)).collect()
    }
}
impl<T: MakeRandom> MakeRandom for VecDeque<T> {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Vec::<T>::make_random(rng).into()
    }
}

/// Draws elements until `len` of them are distinct, or the watchdog runs out.
fn fill_distinct<R, T, F>(rng: &mut R, mut insert: F)
where
    R: Rng + ?Sized,
    T: MakeRandom,
    F: FnMut(T) -> bool,
{
    let len = random_len(rng);
    let mut inserted = 0;
    let mut watchdog = 0;
    while inserted < len && watchdog < WATCHDOG_LIMIT {
        if insert(T::make_random(rng)) {
            inserted += 1;
        } else {
            watchdog += 1;
        }
    }
}

impl<T: MakeRandom + Ord> MakeRandom for BTreeSet<T> {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut set = Self::new();
        fill_distinct(rng, |elem: T| set.insert(elem));
        set
    }
}
impl<T: MakeRandom + Eq + Hash> MakeRandom for HashSet<T> {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut set = Self::new();
        fill_distinct(rng, |elem: T| set.insert(elem));
        set
    }
}
impl<K: MakeRandom + Ord, V: MakeRandom> MakeRandom for BTreeMap<K, V> {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut map = Self::new();
        fill_distinct(rng, |(k, v): (K, V)| map.insert(k, v).is_none());
        map
    }
}
impl<K: MakeRandom + Eq + Hash, V: MakeRandom> MakeRandom for HashMap<K, V> {
    fn make_random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut map = Self::new();
        fill_distinct(rng, |(k, v): (K, V)| map.insert(k, v).is_none());
        map
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn containers_are_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..100 {
            assert!(Vec::<u8>::make_random(&mut rng).len() <= MAX_LEN);
            assert!(make_random::<String, _>(&mut rng).chars().count() <= MAX_LEN);
            assert!(make_random::<BTreeSet<bool>, _>(&mut rng).len() <= 2);
            assert!(make_random::<HashMap<bool, u8>, _>(&mut rng).len() <= 2);
        }
    }
}
