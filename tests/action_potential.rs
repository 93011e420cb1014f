#[cfg(test)]
mod tests {
    extern crate hodgkin_huxley_simulation;
    use hodgkin_huxley_simulation::{
        error::{HodgkinHuxleyError, NumericalError},
        kinetics::GatingVariable,
        parameters::{HodgkinHuxleyParameters, SimulationParameters},
        simulation::simulate,
        stimulus::StepCurrent,
    };

    #[test]
    pub fn test_suprathreshold_pulse_fires() -> Result<(), HodgkinHuxleyError> {
        let stimulus = StepCurrent { amplitude: 10., ..StepCurrent::default() };
        let trajectory = simulate(
            &HodgkinHuxleyParameters::default(),
            &SimulationParameters::default(),
            &stimulus,
        )?;
        trajectory.check_finite()?;

        let time = trajectory.time();
        let (index, max_voltage) = trajectory.max_voltage().expect("Trajectory should not be empty");
        assert!(max_voltage > 0.);
        assert!(time[index] >= 10. && time[index] <= 40.);

        let spikes = trajectory.spike_indices(0.);
        assert_eq!(spikes.len(), 2);
        assert!(spikes.iter().all(|i| time[*i] > 10. && time[*i] < 40.));

        // back to a subthreshold range once the pulse has ended
        let voltage = trajectory.voltage();
        for i in 0..trajectory.len() {
            if time[i] >= 45. {
                assert!(voltage[i] > -75. && voltage[i] < -55.);
            }
        }

        Ok(())
    }

    #[test]
    pub fn test_reference_pulse_is_subthreshold() -> Result<(), HodgkinHuxleyError> {
        let trajectory = simulate(
            &HodgkinHuxleyParameters::default(),
            &SimulationParameters::default(),
            &StepCurrent::default(),
        )?;
        trajectory.check_finite()?;

        let (index, max_voltage) = trajectory.max_voltage().expect("Trajectory should not be empty");
        let peak_time = trajectory.time()[index];

        assert!(max_voltage > -65. && max_voltage < -55.);
        assert!(peak_time > 10. && peak_time < 40.);
        assert!(trajectory.spike_indices(0.).is_empty());

        Ok(())
    }

    #[test]
    pub fn test_gates_stay_bounded_during_spikes() -> Result<(), HodgkinHuxleyError> {
        let stimulus = StepCurrent { amplitude: 10., ..StepCurrent::default() };
        let trajectory = simulate(
            &HodgkinHuxleyParameters::default(),
            &SimulationParameters::default(),
            &stimulus,
        )?;

        for gate in [GatingVariable::M, GatingVariable::H, GatingVariable::N] {
            assert!(trajectory.gating(gate).iter().all(|x| *x >= 0. && *x <= 1.));
        }

        Ok(())
    }

    #[test]
    pub fn test_sodium_current_is_inward_at_spike() -> Result<(), HodgkinHuxleyError> {
        let params = HodgkinHuxleyParameters::default();
        let stimulus = StepCurrent { amplitude: 10., ..StepCurrent::default() };
        let trajectory = simulate(&params, &SimulationParameters::default(), &stimulus)?;

        let currents = trajectory.ionic_currents(&params);
        assert_eq!(currents.len(), trajectory.len());

        let min_sodium = currents.iter()
            .map(|i| i.i_na)
            .fold(f64::INFINITY, f64::min);
        assert!(min_sodium < -100.);

        Ok(())
    }

    #[test]
    pub fn test_singular_resting_voltages_stay_finite() -> Result<(), HodgkinHuxleyError> {
        let sim_params = SimulationParameters { t_max: 5., dt: 0.01 };

        for v_init in [-40., -55.] {
            let params = HodgkinHuxleyParameters { v_init, ..HodgkinHuxleyParameters::default() };
            let trajectory = simulate(&params, &sim_params, &StepCurrent::default())?;

            trajectory.check_finite()?;
        }

        Ok(())
    }

    #[test]
    pub fn test_unstable_timestep_is_reported_after_run() -> Result<(), HodgkinHuxleyError> {
        let stimulus = StepCurrent { amplitude: 10., ..StepCurrent::default() };
        let sim_params = SimulationParameters { t_max: 50., dt: 0.5 };

        let trajectory = simulate(&HodgkinHuxleyParameters::default(), &sim_params, &stimulus)?;
        assert_eq!(trajectory.len(), 100);

        match trajectory.check_finite() {
            Err(NumericalError::NonFiniteValue { index, .. }) => assert!(index > 0),
            Ok(()) => panic!("Expected the run to diverge"),
        }

        Ok(())
    }
}
