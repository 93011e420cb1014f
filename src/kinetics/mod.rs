//! Voltage dependent opening and closing rates of the sodium and potassium gates.
//!
//! Every rate is in ms^-1 and depends on membrane voltage (mV) alone.
//!
//! `alpha_m` and `alpha_n` have the form `a * x / (1 - exp(-x / 10))`, which is `0 / 0`
//! when `x` is exactly zero (`V = -40` mV for `m`, `V = -55` mV for `n`). At that single
//! voltage the analytic limit `10 * a` is returned instead of NaN, everywhere else the
//! expression is evaluated as written so results match the unguarded formula bit for bit.
//! Exponential overflow at extreme voltages is not guarded and yields infinities or NaN
//! that propagate through the integration.


/// Returns `a * x / (1 - exp(-x / y))`, or its limit `a * y` when `x` is zero
fn exp_ratio(a: f64, x: f64, y: f64) -> f64 {
    if x == 0. {
        a * y
    } else {
        a * x / (1. - (-x / y).exp())
    }
}

/// Sodium activation opening rate
pub fn alpha_m(voltage: f64) -> f64 {
    exp_ratio(0.1, voltage + 40., 10.)
}

/// Sodium activation closing rate
pub fn beta_m(voltage: f64) -> f64 {
    4. * (-(voltage + 65.) / 18.).exp()
}

/// Sodium inactivation opening rate
pub fn alpha_h(voltage: f64) -> f64 {
    0.07 * (-(voltage + 65.) / 20.).exp()
}

/// Sodium inactivation closing rate
pub fn beta_h(voltage: f64) -> f64 {
    1. / (1. + (-(voltage + 35.) / 10.).exp())
}

/// Potassium activation opening rate
pub fn alpha_n(voltage: f64) -> f64 {
    exp_ratio(0.01, voltage + 55., 10.)
}

/// Potassium activation closing rate
pub fn beta_n(voltage: f64) -> f64 {
    0.125 * (-(voltage + 65.) / 80.).exp()
}

/// The three gating variables of the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GatingVariable {
    /// Sodium activation
    M,
    /// Sodium inactivation
    H,
    /// Potassium activation
    N,
}

impl GatingVariable {
    /// Opening rate at the given voltage
    pub fn alpha(&self, voltage: f64) -> f64 {
        match self {
            GatingVariable::M => alpha_m(voltage),
            GatingVariable::H => alpha_h(voltage),
            GatingVariable::N => alpha_n(voltage),
        }
    }

    /// Closing rate at the given voltage
    pub fn beta(&self, voltage: f64) -> f64 {
        match self {
            GatingVariable::M => beta_m(voltage),
            GatingVariable::H => beta_h(voltage),
            GatingVariable::N => beta_n(voltage),
        }
    }

    /// Occupancy the gate relaxes to if the membrane is held at `voltage`,
    /// `alpha / (alpha + beta)`
    pub fn steady_state(&self, voltage: f64) -> f64 {
        let alpha = self.alpha(voltage);
        let beta = self.beta(voltage);

        alpha / (alpha + beta)
    }

    /// Time constant (ms) of relaxation towards the steady state
    pub fn time_constant(&self, voltage: f64) -> f64 {
        1. / (self.alpha(voltage) + self.beta(voltage))
    }

    /// First order kinetics, `alpha * (1 - state) - beta * state`
    pub fn derivative(&self, state: f64, voltage: f64) -> f64 {
        self.alpha(voltage) * (1. - state) - self.beta(voltage) * state
    }

    /// Forward Euler update of the gate over one timestep
    pub fn update(&self, state: f64, voltage: f64, dt: f64) -> f64 {
        state + dt * self.derivative(state, voltage)
    }

    /// Short name used in exports and error messages
    pub fn name(&self) -> &'static str {
        match self {
            GatingVariable::M => "m",
            GatingVariable::H => "h",
            GatingVariable::N => "n",
        }
    }
}
