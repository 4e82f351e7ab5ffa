//! `StateVector` implementations for the supported containers.
//!
//! `Vec` and `nalgebra::DVector` are growable and override `resize`;
//! fixed-size arrays keep the default no-op, so callers using them must
//! pre-size state and scratch buffers consistently.

use crate::traits::{Scalar, StateVector};
use nalgebra::DVector;

impl<T: Scalar> StateVector for Vec<T> {
    type Value = T;

    fn zeros(len: usize) -> Self {
        vec![T::zero(); len]
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }

    fn resize(&mut self, len: usize) {
        Vec::resize(self, len, T::zero());
    }
}

impl<T: Scalar, const N: usize> StateVector for [T; N] {
    type Value = T;

    fn zeros(_len: usize) -> Self {
        [T::zero(); N]
    }

    fn len(&self) -> usize {
        N
    }

    fn as_slice(&self) -> &[T] {
        self
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Scalar> StateVector for DVector<T> {
    type Value = T;

    fn zeros(len: usize) -> Self {
        DVector::zeros(len)
    }

    fn len(&self) -> usize {
        self.nrows()
    }

    fn as_slice(&self) -> &[T] {
        DVector::as_slice(self)
    }

    fn as_mut_slice(&mut self) -> &mut [T] {
        DVector::as_mut_slice(self)
    }

    fn resize(&mut self, len: usize) {
        self.resize_vertically_mut(len, T::zero());
    }
}
