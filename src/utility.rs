//! Small helpers for moving between raw numbers and optional quantities.
use metfor::Quantity;
use optional::{none, some, Noned, Optioned};

/// Wrap a raw value, NaN is missing.
#[inline]
pub(crate) fn optioned<T, F>(val: f64, pack: F) -> Optioned<T>
where
    T: Noned + Copy,
    F: FnOnce(f64) -> T,
{
    if val.is_nan() {
        none()
    } else {
        some(pack(val))
    }
}

/// Unwrap a quantity to a raw value, missing is NaN.
#[inline]
pub(crate) fn unpack_or_nan<T>(val: Optioned<T>) -> f64
where
    T: Quantity + Noned + Copy,
{
    val.into_option().map_or(std::f64::NAN, Quantity::unpack)
}
