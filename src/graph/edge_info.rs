//! Type-dependent edge sentinels.
//!
//! Every graph stores one "no edge" value for its lifetime. [`EdgeInfo`]
//! supplies the value used when a graph is built with `new()`:
//!
//! | Edge type | Sentinel |
//! |-----------|----------|
//! | integers | `0` |
//! | `f32`, `f64` | `+inf` |
//! | `bool` | `false` |
//! | `String`, `Option<T>`, `()` | `Default::default()` |
//!
//! Graphs over any other `Clone + PartialEq` type are built with
//! `with_default_edge_info` instead.

use num_traits::{Float, One, Zero};

/// An edge value type with a natural "no edge" sentinel.
pub trait EdgeInfo: Clone + PartialEq {
    /// The value that encodes the absence of an edge.
    fn default_edge_info() -> Self;
}

/// An edge value type with a "true-like" value used by `add_edge`.
pub trait EdgeMarker: EdgeInfo {
    /// The value stored by `add_edge`.
    fn marker() -> Self;
}

macro_rules! impl_integral_edge_info {
    ($($t:ty),* $(,)?) => {$(
        impl EdgeInfo for $t {
            #[inline]
            fn default_edge_info() -> Self {
                <$t as Zero>::zero()
            }
        }

        impl EdgeMarker for $t {
            #[inline]
            fn marker() -> Self {
                <$t as One>::one()
            }
        }
    )*};
}

macro_rules! impl_float_edge_info {
    ($($t:ty),* $(,)?) => {$(
        impl EdgeInfo for $t {
            #[inline]
            fn default_edge_info() -> Self {
                <$t as Float>::infinity()
            }
        }

        impl EdgeMarker for $t {
            #[inline]
            fn marker() -> Self {
                <$t as One>::one()
            }
        }
    )*};
}

impl_integral_edge_info!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float_edge_info!(f32, f64);

impl EdgeInfo for bool {
    fn default_edge_info() -> Self {
        false
    }
}

impl EdgeMarker for bool {
    fn marker() -> Self {
        true
    }
}

impl EdgeInfo for String {
    fn default_edge_info() -> Self {
        String::new()
    }
}

impl<T: Clone + PartialEq> EdgeInfo for Option<T> {
    fn default_edge_info() -> Self {
        None
    }
}

impl EdgeInfo for () {
    fn default_edge_info() -> Self {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        assert_eq!(i32::default_edge_info(), 0);
        assert_eq!(u8::default_edge_info(), 0);
        assert_eq!(f64::default_edge_info(), f64::INFINITY);
        assert_eq!(f32::default_edge_info(), f32::INFINITY);
        assert!(!bool::default_edge_info());
        assert_eq!(String::default_edge_info(), "");
        assert_eq!(Option::<u32>::default_edge_info(), None);
    }

    #[test]
    fn test_markers_differ_from_sentinels() {
        assert_eq!(i64::marker(), 1);
        assert_eq!(f32::marker(), 1.0);
        assert!(bool::marker());
        assert_ne!(usize::marker(), usize::default_edge_info());
        assert_ne!(f64::marker(), f64::default_edge_info());
    }
}
