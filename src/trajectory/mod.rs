//! Time series produced by a simulation run and tools to analyze it.

use ndarray::{Array1, ArrayView1};
use crate::error::NumericalError;
use crate::kinetics::GatingVariable;
use crate::parameters::HodgkinHuxleyParameters;
use crate::simulation::{IonicCurrents, State};


/// Time grid and state variables of a completed run, every series has the same length
/// and index `i` of each series belongs to `time[i]`
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    time: Array1<f64>,
    voltage: Array1<f64>,
    m: Array1<f64>,
    h: Array1<f64>,
    n: Array1<f64>,
}

fn diff(x: &[f64]) -> Vec<f64> {
    x.windows(2)
        .map(|pair| pair[1] - pair[0])
        .collect()
}

impl Trajectory {
    pub(crate) fn new(
        time: Array1<f64>,
        voltage: Array1<f64>,
        m: Array1<f64>,
        h: Array1<f64>,
        n: Array1<f64>,
    ) -> Self {
        debug_assert!(
            [voltage.len(), m.len(), h.len(), n.len()].iter().all(|len| *len == time.len())
        );

        Trajectory { time, voltage, m, h, n }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// Whether the trajectory has no samples
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Time of each sample (ms)
    pub fn time(&self) -> ArrayView1<f64> {
        self.time.view()
    }

    /// Membrane potential of each sample (mV)
    pub fn voltage(&self) -> ArrayView1<f64> {
        self.voltage.view()
    }

    /// Series of the given gating variable
    pub fn gating(&self, gate: GatingVariable) -> ArrayView1<f64> {
        match gate {
            GatingVariable::M => self.m.view(),
            GatingVariable::H => self.h.view(),
            GatingVariable::N => self.n.view(),
        }
    }

    /// State at the given index if it exists
    pub fn state(&self, index: usize) -> Option<State> {
        if index >= self.len() {
            return None;
        }

        Some(State {
            v: self.voltage[index],
            m: self.m[index],
            h: self.h[index],
            n: self.n[index],
        })
    }

    /// Iterates over `(time, state)` pairs in order
    pub fn iter(&self) -> impl Iterator<Item = (f64, State)> + '_ {
        (0..self.len()).map(move |i| (
            self.time[i],
            State { v: self.voltage[i], m: self.m[i], h: self.h[i], n: self.n[i] },
        ))
    }

    /// Returns an error naming the first sample where any state variable is NaN or
    /// infinite, the run itself never checks this
    pub fn check_finite(&self) -> Result<(), NumericalError> {
        for (i, (_, state)) in self.iter().enumerate() {
            if state.is_finite() {
                continue;
            }

            let series = [("V", state.v), ("m", state.m), ("h", state.h), ("n", state.n)];
            if let Some(&(variable, _)) = series.iter().find(|(_, value)| !value.is_finite()) {
                return Err(NumericalError::NonFiniteValue { variable, index: i });
            }
        }

        Ok(())
    }

    /// Index and value of the highest membrane potential, `None` when empty or
    /// when every voltage is NaN
    pub fn max_voltage(&self) -> Option<(usize, f64)> {
        self.voltage.iter()
            .copied()
            .enumerate()
            .filter(|(_, v)| !v.is_nan())
            .max_by(|(_, a), (_, b)| a.total_cmp(b))
    }

    /// Returns indices of where voltages have peaked given a certain tolerance,
    /// a sample is a candidate when the step into it changes voltage by at most
    /// `tolerance` and the curve is concave there, consecutive candidates are
    /// collapsed into their middle index
    pub fn find_peaks(&self, tolerance: f64) -> Vec<usize> {
        let voltages = self.voltage.to_vec();
        let first_diff = diff(&voltages);
        let second_diff = diff(&first_diff);

        // first_diff[i - 1] leads into sample i, second_diff[i - 1] is centered on it
        let local_maxima: Vec<usize> = (1..voltages.len().saturating_sub(1))
            .filter(|i| first_diff[i - 1].abs() <= tolerance && second_diff[i - 1] < 0.)
            .collect();

        let mut peak_spans: Vec<Vec<usize>> = Vec::new();
        for (n, i) in local_maxima.iter().enumerate() {
            if n == 0 || local_maxima[n] - local_maxima[n - 1] != 1 {
                peak_spans.push(Vec::new());
            }

            if let Some(span) = peak_spans.last_mut() {
                span.push(*i);
            }
        }

        peak_spans.iter()
            .map(|span| span[span.len() / 2])
            .collect()
    }

    /// Indices where the neuron spikes: the voltage is above `v_th`, it was
    /// increasing into the sample and is not increasing out of it
    pub fn spike_indices(&self, v_th: f64) -> Vec<usize> {
        (1..self.len().saturating_sub(1))
            .filter(|&i| {
                let was_increasing = self.voltage[i - 1] < self.voltage[i];
                let increasing_right_now = self.voltage[i] < self.voltage[i + 1];

                self.voltage[i] > v_th && was_increasing && !increasing_right_now
            })
            .collect()
    }

    /// Sodium, potassium and leak currents at every sample
    pub fn ionic_currents(&self, params: &HodgkinHuxleyParameters) -> Vec<IonicCurrents> {
        self.iter()
            .map(|(_, state)| IonicCurrents::from_state(&state, params))
            .collect()
    }
}
