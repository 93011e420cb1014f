//! A tool to generate and clamp noise.

use rand_distr::{Normal, Distribution};
use crate::error::ConfigurationError;
use crate::parameters::check_finite;


/// Calculates the normal distribution at the given mean and standard deviation and clamps
/// the output value between the given minimum and maximum, if standard deviation is `0.`
/// the mean is always returned, [`GaussianParameters::validate`] rejects standard
/// deviations `Normal` cannot be built from
pub fn limited_distr(mean: f64, std: f64, minimum: f64, maximum: f64) -> f64 {
    if std == 0.0 {
        return mean;
    }

    let normal = match Normal::new(mean, std) {
        Ok(normal) => normal,
        Err(_) => return mean,
    };
    let output: f64 = normal.sample(&mut rand::thread_rng());

    output.max(minimum).min(maximum)
}

/// Parameters of the clamped normal distribution used to scale input noise
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianParameters {
    /// Mean of distribution
    pub mean: f64,
    /// Standard deviation of distribution
    pub std: f64,
    /// Maximum cutoff value
    pub max: f64,
    /// Minimum cutoff value
    pub min: f64,
}

impl Default for GaussianParameters {
    fn default() -> Self {
        GaussianParameters {
            mean: 1.0, // center of norm distr
            std: 0.0, // std of norm distr
            max: 2.0, // maximum cutoff for norm distr
            min: 0.0, // minimum cutoff for norm distr
        }
    }
}

impl GaussianParameters {
    /// Checks every field is finite, the standard deviation is non-negative
    /// and the cutoffs are ordered
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        check_finite(self.mean, "mean")?;
        check_finite(self.std, "std")?;
        check_finite(self.min, "min")?;
        check_finite(self.max, "max")?;

        if self.std < 0. || self.min > self.max {
            return Err(ConfigurationError::InvalidNoiseDistribution);
        }

        Ok(())
    }

    /// Generates a normally distributed random number clamped between
    /// a minimum and a maximum
    pub fn get_random_number(&self) -> f64 {
        limited_distr(self.mean, self.std, self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::{limited_distr, GaussianParameters};
    use crate::error::ConfigurationError;

    #[test]
    fn test_zero_std_returns_mean() {
        for _ in 0..100 {
            assert_eq!(limited_distr(1., 0., 0., 2.), 1.);
        }
    }

    #[test]
    fn test_output_is_clamped() {
        for _ in 0..1000 {
            let value = limited_distr(1., 5., 0.5, 1.5);
            assert!((0.5..=1.5).contains(&value));
        }
    }

    #[test]
    fn test_validate_noise_parameters() {
        assert!(GaussianParameters::default().validate().is_ok());

        let negative_std = GaussianParameters { std: -3., ..GaussianParameters::default() };
        assert!(matches!(negative_std.validate(), Err(ConfigurationError::InvalidNoiseDistribution)));

        let reversed_cutoffs = GaussianParameters { min: 2., max: 0., ..GaussianParameters::default() };
        assert!(matches!(reversed_cutoffs.validate(), Err(ConfigurationError::InvalidNoiseDistribution)));

        let nan_std = GaussianParameters { std: f64::NAN, ..GaussianParameters::default() };
        match nan_std.validate() {
            Err(ConfigurationError::NonFiniteParameter(name)) => assert_eq!(name, "std"),
            _ => panic!("Expected std to be rejected"),
        }
    }
}
