use std::fmt::Debug;
use std::ops::{Add, AddAssign, Mul};

/// Scalar types the tiled kernels operate on.
///
/// Implemented for the signed primitive integers, where tiled and untiled
/// sums agree exactly. Overflow follows the width of the chosen type (a panic
/// in debug builds, wrapping in release builds).
pub trait Element:
    Copy
    + Default
    + PartialEq
    + Debug
    + Add<Output = Self>
    + Mul<Output = Self>
    + AddAssign
    + Send
    + Sync
    + 'static
{
    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Short type name used in log messages (e.g. "i32").
    const NAME: &'static str;

    /// Lossless widening from `i8`, used to build kernel presets.
    fn from_i8(v: i8) -> Self;
}

macro_rules! impl_element {
    ($($t:ty => $name:literal),* $(,)?) => {
        $(
            impl Element for $t {
                const ZERO: Self = 0;
                const ONE: Self = 1;
                const NAME: &'static str = $name;

                fn from_i8(v: i8) -> Self {
                    v as $t
                }
            }
        )*
    };
}

impl_element! {
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identities() {
        assert_eq!(i32::ZERO, 0);
        assert_eq!(i64::ONE, 1);
        assert_eq!(<i16 as Element>::ZERO + <i16 as Element>::ONE, 1);
    }

    #[test]
    fn test_names() {
        assert_eq!(<i8 as Element>::NAME, "i8");
        assert_eq!(<i32 as Element>::NAME, "i32");
        assert_eq!(<isize as Element>::NAME, "isize");
    }

    #[test]
    fn test_from_i8_sign_extends() {
        assert_eq!(i64::from_i8(-1), -1);
        assert_eq!(i128::from_i8(i8::MIN), -128);
        assert_eq!(i32::from_i8(5), 5);
    }
}
