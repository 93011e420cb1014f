//! Physical constants of the membrane and the constants controlling the integration.

use crate::error::ConfigurationError;


/// Conductances, reversal potentials and capacitance of a single compartment
/// Hodgkin Huxley membrane
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HodgkinHuxleyParameters {
    /// Maximal sodium conductance (mS/cm^2)
    pub g_na: f64,
    /// Maximal potassium conductance (mS/cm^2)
    pub g_k: f64,
    /// Leak conductance (mS/cm^2)
    pub g_l: f64,
    /// Sodium reversal potential (mV)
    pub e_na: f64,
    /// Potassium reversal potential (mV)
    pub e_k: f64,
    /// Leak reversal potential (mV)
    pub e_l: f64,
    /// Membrane capacitance (uF/cm^2)
    pub c_m: f64,
    /// Resting potential the simulation starts from (mV)
    pub v_init: f64,
}

impl Default for HodgkinHuxleyParameters {
    fn default() -> Self {
        HodgkinHuxleyParameters {
            g_na: 120., // mS/cm^2
            g_k: 36., // mS/cm^2
            g_l: 0.3, // mS/cm^2
            e_na: 50., // mV
            e_k: -77., // mV
            e_l: -54.387, // mV, chosen so the membrane rests near -65 mV
            c_m: 1., // uF/cm^2
            v_init: -65., // mV
        }
    }
}

/// Largest number of samples a time grid may hold, each sample stores
/// five `f64` values so this caps a run at roughly 400 MB
pub const MAX_STEPS: usize = 10_000_000;

pub(crate) fn check_finite(value: f64, name: &str) -> Result<(), ConfigurationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ConfigurationError::NonFiniteParameter(String::from(name)))
    }
}

impl HodgkinHuxleyParameters {
    /// Checks that every constant is finite and that the capacitance is positive
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_finite(self.g_na, "g_na")?;
        check_finite(self.g_k, "g_k")?;
        check_finite(self.g_l, "g_l")?;
        check_finite(self.e_na, "e_na")?;
        check_finite(self.e_k, "e_k")?;
        check_finite(self.e_l, "e_l")?;
        check_finite(self.c_m, "c_m")?;
        check_finite(self.v_init, "v_init")?;

        if self.c_m <= 0. {
            return Err(ConfigurationError::NonPositiveCapacitance);
        }

        Ok(())
    }
}

/// Duration and timestep of a run
///
/// Forward Euler is only stable while `dt` is small compared to the fastest
/// time constant of the system, which is sodium activation at roughly 0.1 ms
/// near threshold. The default of 0.01 ms is well inside that range, steps
/// above ~0.05 ms can oscillate or diverge. This is not checked at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    /// Total simulated time (ms)
    pub t_max: f64,
    /// Timestep (ms)
    pub dt: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        SimulationParameters {
            t_max: 50., // ms
            dt: 0.01, // ms
        }
    }
}

impl SimulationParameters {
    /// Rejects non-positive or non-finite durations and timesteps, and grids
    /// longer than [`MAX_STEPS`]
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_finite(self.t_max, "t_max")?;
        check_finite(self.dt, "dt")?;

        if self.dt <= 0. {
            return Err(ConfigurationError::NonPositiveTimestep);
        }
        if self.t_max <= 0. {
            return Err(ConfigurationError::NonPositiveDuration);
        }

        let steps = (self.t_max / self.dt).ceil();
        if !steps.is_finite() || steps > MAX_STEPS as f64 {
            return Err(ConfigurationError::TooManySteps(steps));
        }

        Ok(())
    }

    /// Number of samples on the time grid, `ceil(t_max / dt)`, only meaningful
    /// once [`SimulationParameters::validate`] has passed
    pub fn num_steps(&self) -> usize {
        (self.t_max / self.dt).ceil() as usize
    }
}
