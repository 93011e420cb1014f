use std::fmt::{Display, Debug, Formatter, Result};


/// Error set for parameters rejected before the integration loop starts
pub enum ConfigurationError {
    /// Timestep must be strictly positive
    NonPositiveTimestep,
    /// Total simulated duration must be strictly positive
    NonPositiveDuration,
    /// Membrane capacitance must be strictly positive
    NonPositiveCapacitance,
    /// A parameter was NaN or infinite, contains the field name
    NonFiniteParameter(String),
    /// Stimulus window must have its start before its end
    InvalidStimulusWindow,
    /// Noise distribution needs a non-negative standard deviation and `min <= max`
    InvalidNoiseDistribution,
    /// Time grid would hold more samples than the allowed maximum, contains `t_max / dt`
    TooManySteps(f64),
}

impl Display for ConfigurationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            ConfigurationError::NonPositiveTimestep => write!(f, "Timestep (dt) must be greater than 0"),
            ConfigurationError::NonPositiveDuration => write!(f, "Total time (t_max) must be greater than 0"),
            ConfigurationError::NonPositiveCapacitance => write!(f, "Membrane capacitance (c_m) must be greater than 0"),
            ConfigurationError::NonFiniteParameter(name) => write!(f, "Parameter '{}' must be finite", name),
            ConfigurationError::InvalidStimulusWindow => write!(f, "Stimulus start must be before stimulus end"),
            ConfigurationError::InvalidNoiseDistribution => write!(
                f, "Noise standard deviation must be non-negative and its minimum must not exceed its maximum"
            ),
            ConfigurationError::TooManySteps(steps) => write!(
                f, "Time grid of {} samples exceeds the maximum of {}", steps, crate::parameters::MAX_STEPS
            ),
        }
    }
}

impl Debug for ConfigurationError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for numerical degeneracy found after a run
pub enum NumericalError {
    /// A state variable became NaN or infinite at the given index
    NonFiniteValue {
        /// Name of the state variable (`"V"`, `"m"`, `"h"` or `"n"`)
        variable: &'static str,
        /// First index where the value is not finite
        index: usize,
    },
}

impl Display for NumericalError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            NumericalError::NonFiniteValue { variable, index } => write!(
                f, "State variable '{}' is not finite at index {}", variable, index
            ),
        }
    }
}

impl Debug for NumericalError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

/// Error set for failures while producing a plot or export
pub enum RenderError {
    /// Trajectory has no samples to draw
    EmptyTrajectory,
    /// Underlying file could not be written
    Io(std::io::Error),
}

impl Display for RenderError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            RenderError::EmptyTrajectory => write!(f, "Cannot render an empty trajectory"),
            RenderError::Io(err) => write!(f, "Could not write output: {}", err),
        }
    }
}

impl Debug for RenderError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl From<std::io::Error> for RenderError {
    fn from(err: std::io::Error) -> RenderError {
        RenderError::Io(err)
    }
}

/// A set of errors that may occur when using the library
pub enum HodgkinHuxleyError {
    /// Errors related to invalid parameters
    ConfigurationRelatedError(ConfigurationError),
    /// Errors related to non-finite simulation output
    NumericalRelatedError(NumericalError),
    /// Errors related to rendering
    RenderRelatedError(RenderError),
}

impl Display for HodgkinHuxleyError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        match self {
            HodgkinHuxleyError::ConfigurationRelatedError(err) => write!(f, "{}", err),
            HodgkinHuxleyError::NumericalRelatedError(err) => write!(f, "{}", err),
            HodgkinHuxleyError::RenderRelatedError(err) => write!(f, "{}", err),
        }
    }
}

impl Debug for HodgkinHuxleyError {
    fn fmt(&self, f: &mut Formatter) -> Result {
        write!(f, "file: {}, line: {}, error: {}", file!(), line!(), self)
    }
}

impl std::error::Error for HodgkinHuxleyError {}

impl From<ConfigurationError> for HodgkinHuxleyError {
    fn from(err: ConfigurationError) -> HodgkinHuxleyError {
        HodgkinHuxleyError::ConfigurationRelatedError(err)
    }
}

impl From<NumericalError> for HodgkinHuxleyError {
    fn from(err: NumericalError) -> HodgkinHuxleyError {
        HodgkinHuxleyError::NumericalRelatedError(err)
    }
}

impl From<RenderError> for HodgkinHuxleyError {
    fn from(err: RenderError) -> HodgkinHuxleyError {
        HodgkinHuxleyError::RenderRelatedError(err)
    }
}
