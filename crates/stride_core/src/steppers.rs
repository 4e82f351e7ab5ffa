//! Fixed-step explicit one-step integrators.

use crate::algebra;
use crate::traits::{StateVector, Stepper, System};
use num_traits::{FromPrimitive, One};

/// Forward Euler stepper: x(t + dt) = x(t) + dt * f(x, t).
///
/// First-order accurate, one system evaluation per step. The derivative
/// scratch buffer is owned exclusively by the instance and reused across
/// steps, so copying is disallowed:
///
/// ```compile_fail
/// use stride_core::steppers::Euler;
///
/// let a: Euler<Vec<f64>> = Euler::new();
/// let b = a.clone();
/// ```
pub struct Euler<S: StateVector> {
    dxdt: S,
}

impl<S: StateVector> Euler<S> {
    /// Constructs a stepper with empty scratch; call `adjust_size` before
    /// the first step unless the state type is fixed-size.
    pub fn new() -> Self {
        Self { dxdt: S::zeros(0) }
    }

    /// Performs one step with a precomputed derivative dxdt(t), skipping
    /// the system evaluation. Useful when the caller already holds the
    /// derivative from a prior stage.
    pub fn do_step_with(&mut self, x: &mut S, dxdt: &S, dt: S::Value) {
        algebra::increment(x.as_mut_slice(), dxdt.as_slice(), dt);
    }
}

impl<S: StateVector> Default for Euler<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateVector> Stepper<S> for Euler<S> {
    const IS_ADAPTIVE: bool = false;

    fn order_step(&self) -> u16 {
        1
    }

    fn adjust_size(&mut self, reference: &S) {
        self.dxdt.resize(reference.len());
    }

    fn do_step(&mut self, system: &impl System<S::Value>, x: &mut S, t: S::Value, dt: S::Value) {
        // dxdt = f(x, t)
        system.apply(t, x.as_slice(), self.dxdt.as_mut_slice());

        // x(t + dt) = x(t) + dt * dxdt
        algebra::increment(x.as_mut_slice(), self.dxdt.as_slice(), dt);
    }
}

/// Heun stepper (improved Euler): a second-order trapezoidal
/// predictor-corrector. Two system evaluations per step; every step is
/// unconditionally accepted.
///
/// Owns two derivative scratch buffers, a predicted-state buffer, and a
/// monotone step counter. Like [`Euler`], instances cannot be copied:
///
/// ```compile_fail
/// use stride_core::steppers::Heun;
///
/// let a: Heun<Vec<f64>> = Heun::new();
/// let b = a.clone();
/// ```
pub struct Heun<S: StateVector> {
    dxdt1: S,
    dxdt2: S,
    x_pred: S,
    steps: u64,
}

impl<S: StateVector> Heun<S> {
    /// Constructs a stepper with empty scratch; call `adjust_size` before
    /// the first step unless the state type is fixed-size.
    pub fn new() -> Self {
        Self {
            dxdt1: S::zeros(0),
            dxdt2: S::zeros(0),
            x_pred: S::zeros(0),
            steps: 0,
        }
    }

    /// Number of completed steps since construction. Never reset.
    pub fn steps(&self) -> u64 {
        self.steps
    }
}

impl<S: StateVector> Default for Heun<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateVector> Stepper<S> for Heun<S> {
    const IS_ADAPTIVE: bool = false;

    fn order_step(&self) -> u16 {
        2
    }

    fn adjust_size(&mut self, reference: &S) {
        self.dxdt1.resize(reference.len());
        self.dxdt2.resize(reference.len());
        self.x_pred.resize(reference.len());
    }

    fn do_step(&mut self, system: &impl System<S::Value>, x: &mut S, t: S::Value, dt: S::Value) {
        let one = S::Value::one();
        let half_dt = dt * S::Value::from_f64(0.5).unwrap();

        // Predictor stage: dxdt1 = f(x, t)
        system.apply(t, x.as_slice(), self.dxdt1.as_mut_slice());

        // x_pred = x + dt * dxdt1
        algebra::scale_two_sum(
            self.x_pred.as_mut_slice(),
            one,
            x.as_slice(),
            dt,
            self.dxdt1.as_slice(),
        );

        // Corrector stage: dxdt2 = f(x_pred, t + dt)
        system.apply(t + dt, self.x_pred.as_slice(), self.dxdt2.as_mut_slice());

        // x(t + dt) = x(t) + (dt / 2) * (dxdt1 + dxdt2)
        algebra::scale_two_sum_accumulate(
            x.as_mut_slice(),
            half_dt,
            self.dxdt1.as_slice(),
            half_dt,
            self.dxdt2.as_slice(),
        );

        self.steps += 1;
    }
}
