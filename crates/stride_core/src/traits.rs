use num_traits::{Float, FromPrimitive};
use std::fmt::Debug;

/// A trait for types that can be used as scalars in state vectors and time
/// arithmetic. Must support floating-point arithmetic, debug printing, and
/// conversion from f64.
pub trait Scalar: Float + FromPrimitive + Debug + 'static {}

impl<T: Float + FromPrimitive + Debug + 'static> Scalar for T {}

/// The user-supplied derivative function of an ODE system.
pub trait System<T: Scalar> {
    /// Evaluates the vector field dx/dt = f(x, t).
    /// t: current time
    /// x: current state
    /// dxdt: buffer receiving the derivative; same length as x, never
    /// resized or reallocated by the callee
    fn apply(&self, t: T, x: &[T], dxdt: &mut [T]);
}

/// Minimal capability contract a state container must expose to the
/// steppers: length, contiguous element access, and construction of
/// like-typed scratch buffers.
pub trait StateVector {
    /// Element type of the state vector.
    type Value: Scalar;

    /// A zero-filled state of the given length. Fixed-size containers
    /// ignore `len` and return their full extent zeroed.
    fn zeros(len: usize) -> Self;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn as_slice(&self) -> &[Self::Value];

    fn as_mut_slice(&mut self) -> &mut [Self::Value];

    /// Resizes the container to `len` elements, zero-filling any growth.
    /// Growable containers override this; fixed-size containers keep the
    /// no-op, and the caller must pre-size state and scratch consistently.
    fn resize(&mut self, _len: usize) {}
}

/// A one-step integrator advancing a state vector by a time increment dt.
///
/// Steppers exclusively own their scratch buffers and are therefore not
/// copyable; an independent integration needs a freshly constructed
/// instance.
pub trait Stepper<S: StateVector> {
    /// Fixed step size only; no internal error estimate or step control.
    const IS_ADAPTIVE: bool;

    /// Order of the method's local truncation error.
    fn order_step(&self) -> u16;

    /// Resizes the internal scratch buffers to match `reference`, where the
    /// state type supports resizing. Must be called after any change to the
    /// state's length, before the next `do_step`.
    fn adjust_size(&mut self, reference: &S);

    /// Performs one step of size dt, mutating `x` in place.
    /// The system callable is invoked exactly as many times as the method's
    /// stage count requires. Buffer lengths are not validated.
    fn do_step(&mut self, system: &impl System<S::Value>, x: &mut S, t: S::Value, dt: S::Value);
}
