//! Elementwise kernels shared by the steppers.
//!
//! Each stepper's update rule is one or two calls into this module, so no
//! loop logic is duplicated per stepper and no intermediate containers are
//! built. Accumulation happens in the written order with no compensation.

use crate::traits::Scalar;

/// x[i] = x[i] + dt * dxdt[i]. Slices must have equal length.
pub fn increment<T: Scalar>(x: &mut [T], dxdt: &[T], dt: T) {
    for (xi, di) in x.iter_mut().zip(dxdt) {
        *xi = *xi + dt * *di;
    }
}

/// dest[i] = a_coeff * a[i] + b_coeff * b[i].
/// `dest` must be a buffer distinct from `a` and `b`; all slices must have
/// equal length.
pub fn scale_two_sum<T: Scalar>(dest: &mut [T], a_coeff: T, a: &[T], b_coeff: T, b: &[T]) {
    for ((di, ai), bi) in dest.iter_mut().zip(a).zip(b) {
        *di = a_coeff * *ai + b_coeff * *bi;
    }
}

/// dest[i] = dest[i] + a_coeff * a[i] + b_coeff * b[i].
pub fn scale_two_sum_accumulate<T: Scalar>(
    dest: &mut [T],
    a_coeff: T,
    a: &[T],
    b_coeff: T,
    b: &[T],
) {
    for ((di, ai), bi) in dest.iter_mut().zip(a).zip(b) {
        *di = *di + a_coeff * *ai + b_coeff * *bi;
    }
}
