//! # Hodgkin Huxley Simulation
//!
//! `hodgkin_huxley_simulation` integrates the Hodgkin Huxley model of a single
//! compartment membrane with forward Euler: membrane voltage and the sodium and
//! potassium gating variables are stepped forward under an injected current and
//! returned as an immutable [`trajectory::Trajectory`], which can then be drawn
//! as a voltage plot or exported for other tools.
//!
//! The membrane equation is
//!
//! `Cm dV/dt = I_ext(t) - gNa m^3 h (V - ENa) - gK n^4 (V - EK) - gL (V - EL)`
//!
//! and each gate `x` in `m`, `h`, `n` follows `dx/dt = alpha_x(V) (1 - x) - beta_x(V) x`.
//!
//! ## Example Code
//!
//! ### Running the default current pulse and plotting it
//!
//! ```rust,no_run
//! use hodgkin_huxley_simulation::{
//!     error::HodgkinHuxleyError,
//!     parameters::{HodgkinHuxleyParameters, SimulationParameters},
//!     render::{Renderer, SvgPlot},
//!     simulation::simulate,
//!     stimulus::StepCurrent,
//! };
//!
//! fn main() -> Result<(), HodgkinHuxleyError> {
//!     let params = HodgkinHuxleyParameters::default();
//!     let sim_params = SimulationParameters::default();
//!
//!     // 10 uA/cm^2 between 10 and 40 ms
//!     let stimulus = StepCurrent { amplitude: 10., ..StepCurrent::default() };
//!
//!     let trajectory = simulate(&params, &sim_params, &stimulus)?;
//!     trajectory.check_finite()?;
//!
//!     println!("spikes: {:?}", trajectory.spike_indices(0.));
//!
//!     SvgPlot::new("membrane_potential.svg").render(&trajectory)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Stepping a single state
//!
//! ```rust
//! use hodgkin_huxley_simulation::{
//!     parameters::HodgkinHuxleyParameters,
//!     simulation::{next_state, State},
//!     stimulus::ConstantCurrent,
//! };
//!
//! let params = HodgkinHuxleyParameters::default();
//! let rest = State::resting(params.v_init);
//!
//! let next = next_state(rest, 0., 0.01, &params, &ConstantCurrent(0.));
//! assert!((next.v - rest.v).abs() < 1e-3);
//! ```

pub mod distribution;
pub mod error;
pub mod kinetics;
pub mod parameters;
pub mod render;
pub mod simulation;
pub mod stimulus;
pub mod trajectory;
