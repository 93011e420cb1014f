//! Forward Euler integration of the membrane equation and the three gating variables.

use ndarray::Array1;
use crate::error::HodgkinHuxleyError;
use crate::kinetics::GatingVariable;
use crate::parameters::{HodgkinHuxleyParameters, SimulationParameters};
use crate::stimulus::Stimulus;
use crate::trajectory::Trajectory;


/// Membrane voltage and gating variables at a single timestep
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    /// Membrane potential (mV)
    pub v: f64,
    /// Sodium activation
    pub m: f64,
    /// Sodium inactivation
    pub h: f64,
    /// Potassium activation
    pub n: f64,
}

impl State {
    /// State held at `voltage` long enough for every gate to reach its steady state
    pub fn resting(voltage: f64) -> Self {
        State {
            v: voltage,
            m: GatingVariable::M.steady_state(voltage),
            h: GatingVariable::H.steady_state(voltage),
            n: GatingVariable::N.steady_state(voltage),
        }
    }

    /// Whether every component is finite
    pub fn is_finite(&self) -> bool {
        self.v.is_finite() && self.m.is_finite() && self.h.is_finite() && self.n.is_finite()
    }
}

/// Ionic currents through each channel type (uA/cm^2), positive is outward
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonicCurrents {
    /// Sodium current
    pub i_na: f64,
    /// Potassium current
    pub i_k: f64,
    /// Leak current
    pub i_l: f64,
}

impl IonicCurrents {
    /// Calculates the channel currents for a given state
    pub fn from_state(state: &State, params: &HodgkinHuxleyParameters) -> Self {
        IonicCurrents {
            i_na: params.g_na * state.m.powi(3) * state.h * (state.v - params.e_na),
            i_k: params.g_k * state.n.powi(4) * (state.v - params.e_k),
            i_l: params.g_l * (state.v - params.e_l),
        }
    }

    /// Sum of all ionic currents
    pub fn total(&self) -> f64 {
        self.i_na + self.i_k + self.i_l
    }
}

/// Advances `prev` by one timestep of `dt` ms, the stimulus is read at `time`
/// (the time of `prev`) and every right hand side term uses `prev` only
pub fn next_state<S: Stimulus + ?Sized>(
    prev: State,
    time: f64,
    dt: f64,
    params: &HodgkinHuxleyParameters,
    stimulus: &S,
) -> State {
    let currents = IonicCurrents::from_state(&prev, params);
    let i_ext = stimulus.get_current(time);

    State {
        v: prev.v + dt * (i_ext - currents.i_na - currents.i_k - currents.i_l) / params.c_m,
        m: GatingVariable::M.update(prev.m, prev.v, dt),
        h: GatingVariable::H.update(prev.h, prev.v, dt),
        n: GatingVariable::N.update(prev.n, prev.v, dt),
    }
}

/// Generates `[0, dt, 2 * dt, ...)` up to but excluding `t_max`
pub fn time_grid(sim_params: &SimulationParameters) -> Result<Array1<f64>, HodgkinHuxleyError> {
    sim_params.validate()?;

    Ok(Array1::range(0., sim_params.t_max, sim_params.dt))
}

/// Runs the simulation from rest at `params.v_init` over the whole time grid
///
/// Parameters and the stimulus are validated before the loop starts, after that no checks are made:
/// NaN or infinite values produced by the model propagate through the remaining steps,
/// use [`Trajectory::check_finite`] to detect them afterwards.
pub fn simulate<S: Stimulus + ?Sized>(
    params: &HodgkinHuxleyParameters,
    sim_params: &SimulationParameters,
    stimulus: &S,
) -> Result<Trajectory, HodgkinHuxleyError> {
    params.validate()?;
    stimulus.validate()?;
    let time = time_grid(sim_params)?;
    let steps = time.len();
    debug_assert!(steps > 0);

    let mut voltage = Array1::<f64>::zeros(steps);
    let mut m = Array1::<f64>::zeros(steps);
    let mut h = Array1::<f64>::zeros(steps);
    let mut n = Array1::<f64>::zeros(steps);

    let mut state = State::resting(params.v_init);
    voltage[0] = state.v;
    m[0] = state.m;
    h[0] = state.h;
    n[0] = state.n;

    for i in 1..steps {
        state = next_state(state, time[i - 1], sim_params.dt, params, stimulus);

        voltage[i] = state.v;
        m[i] = state.m;
        h[i] = state.h;
        n[i] = state.n;
    }

    Ok(Trajectory::new(time, voltage, m, h, n))
}
