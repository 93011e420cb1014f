//! Injected current as a function of simulation time.

use crate::error::ConfigurationError;
use crate::distribution::GaussianParameters;
use crate::parameters::check_finite;


/// Maps a simulation time (ms) to an injected current (uA/cm^2)
pub trait Stimulus {
    /// Returns the injected current at the given time
    fn get_current(&self, time: f64) -> f64;

    /// Checks the stimulus is well formed, called before a run starts
    fn validate(&self) -> Result<(), ConfigurationError> {
        Ok(())
    }
}

/// Rectangular current pulse, active strictly inside `(start, end)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepCurrent {
    /// Pulse onset (ms), excluded from the window
    pub start: f64,
    /// Pulse offset (ms), excluded from the window
    pub end: f64,
    /// Current injected inside the window (uA/cm^2)
    pub amplitude: f64,
}

impl Default for StepCurrent {
    fn default() -> Self {
        StepCurrent {
            start: 10., // ms
            end: 40., // ms
            amplitude: 1.5, // uA/cm^2
        }
    }
}

impl Stimulus for StepCurrent {
    fn get_current(&self, time: f64) -> f64 {
        if self.start < time && time < self.end {
            self.amplitude
        } else {
            0.
        }
    }

    // bounds must be ordered, NaN bounds fail the comparison
    fn validate(&self) -> Result<(), ConfigurationError> {
        check_finite(self.amplitude, "amplitude")?;

        if !(self.start < self.end) {
            return Err(ConfigurationError::InvalidStimulusWindow);
        }

        Ok(())
    }
}

/// Static input current for the whole run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConstantCurrent(pub f64);

impl Stimulus for ConstantCurrent {
    fn get_current(&self, _time: f64) -> f64 {
        self.0
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        check_finite(self.0, "amplitude")
    }
}

/// Scales another stimulus by normally distributed noise on every call,
/// with the default [`GaussianParameters`] the factor is always `1.` and
/// the inner stimulus is returned unchanged
#[derive(Debug, Clone, Default)]
pub struct NoisyStimulus<S: Stimulus> {
    /// Stimulus being scaled
    pub stimulus: S,
    /// Distribution of the scaling factor
    pub gaussian_params: GaussianParameters,
}

impl<S: Stimulus> Stimulus for NoisyStimulus<S> {
    fn get_current(&self, time: f64) -> f64 {
        self.stimulus.get_current(time) * self.gaussian_params.get_random_number()
    }

    fn validate(&self) -> Result<(), ConfigurationError> {
        self.stimulus.validate()?;
        self.gaussian_params.validate()
    }
}
