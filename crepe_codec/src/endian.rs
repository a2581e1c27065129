use num_traits::PrimInt;

#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum ByteOrder {
    Big,
    Little,
}

/// The byte order of the target architecture. Constant for the life of the process.
pub const fn machine_byte_order() -> ByteOrder {
    #[cfg(target_endian = "big")]
    let order = ByteOrder::Big;

    #[cfg(target_endian = "little")]
    let order = ByteOrder::Little;

    order
}

pub trait SwapByteOrder {
    /// Reverses the bytes of `self` in place. A no-op for 1-byte types.
    fn swap_byte_order(&mut self);
}

pub fn convert_byte_order<T: SwapByteOrder>(val: &mut T, from: ByteOrder, to: ByteOrder) {
    if from != to {
        val.swap_byte_order();
    }
}

/// A scalar with a fixed wire width, whose bytes are copied verbatim in machine order.
pub trait FixedWidth: SwapByteOrder + Copy {
    type Bytes: AsRef<[u8]> + AsMut<[u8]> + Default;

    fn to_machine_bytes(self) -> Self::Bytes;
    fn from_machine_bytes(bytes: Self::Bytes) -> Self;
}

macro_rules! impl_int_width {
    ($($t:ty),*) => {$(
        impl SwapByteOrder for $t {
            fn swap_byte_order(&mut self) {
                *self = PrimInt::swap_bytes(*self);
            }
        }
        impl FixedWidth for $t {
            type Bytes = [u8; std::mem::size_of::<$t>()];

            fn to_machine_bytes(self) -> Self::Bytes {
                self.to_ne_bytes()
            }
            fn from_machine_bytes(bytes: Self::Bytes) -> Self {
                Self::from_ne_bytes(bytes)
            }
        }
    )*};
}
impl_int_width!(i8, u8, i16, u16, i32, u32, i64, u64, isize, usize);

macro_rules! impl_float_width {
    ($($t:ty),*) => {$(
        impl SwapByteOrder for $t {
            fn swap_byte_order(&mut self) {
                *self = <$t>::from_bits(PrimInt::swap_bytes(self.to_bits()));
            }
        }
        impl FixedWidth for $t {
            type Bytes = [u8; std::mem::size_of::<$t>()];

            fn to_machine_bytes(self) -> Self::Bytes {
                self.to_ne_bytes()
            }
            fn from_machine_bytes(bytes: Self::Bytes) -> Self {
                Self::from_ne_bytes(bytes)
            }
        }
    )*};
}
impl_float_width!(f32, f64);

impl SwapByteOrder for bool {
    fn swap_byte_order(&mut self) {}
}
