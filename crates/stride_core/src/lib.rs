pub mod algebra;
pub mod state;
pub mod steppers;
/// The `stride_core` crate provides fixed-step one-step integrators for
/// ordinary differential equations. A user supplies the derivative function
/// of the system; a stepper advances the state vector in place by a time
/// increment `dt`, reusing internally owned scratch buffers so that no
/// allocation happens per step.
///
/// Key components:
/// - **Traits**: `Scalar` (numeric type abstraction), `System` (derivative
///   function), `StateVector` (state container capability contract),
///   `Stepper` (uniform one-step integrator contract).
/// - **Algebra**: elementwise kernels shared by the steppers.
/// - **Steppers**: forward Euler (order 1) and Heun's improved Euler
///   (order 2, predictor-corrector).
pub mod traits;
