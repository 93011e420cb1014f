#[cfg(test)]
mod tests {
    use rand::Rng;
    extern crate hodgkin_huxley_simulation;
    use hodgkin_huxley_simulation::{
        error::HodgkinHuxleyError,
        parameters::{HodgkinHuxleyParameters, SimulationParameters},
        simulation::{next_state, simulate, IonicCurrents, State},
        stimulus::{ConstantCurrent, StepCurrent},
    };

    fn close(actual: f64, expected: f64) -> bool {
        (actual - expected).abs() <= 1e-9 * expected.abs().max(1.)
    }

    fn euler_step(state: State, i_ext: f64, dt: f64, params: &HodgkinHuxleyParameters) -> State {
        let v = state.v;

        let alpha_m = 0.1 * (v + 40.) / (1. - (-(v + 40.) / 10.).exp());
        let beta_m = 4. * (-(v + 65.) / 18.).exp();
        let alpha_h = 0.07 * (-(v + 65.) / 20.).exp();
        let beta_h = 1. / (1. + (-(v + 35.) / 10.).exp());
        let alpha_n = 0.01 * (v + 55.) / (1. - (-(v + 55.) / 10.).exp());
        let beta_n = 0.125 * (-(v + 65.) / 80.).exp();

        let i_na = params.g_na * state.m * state.m * state.m * state.h * (v - params.e_na);
        let i_k = params.g_k * state.n * state.n * state.n * state.n * (v - params.e_k);
        let i_l = params.g_l * (v - params.e_l);

        State {
            v: v + dt * (i_ext - i_na - i_k - i_l) / params.c_m,
            m: state.m + dt * (alpha_m * (1. - state.m) - beta_m * state.m),
            h: state.h + dt * (alpha_h * (1. - state.h) - beta_h * state.h),
            n: state.n + dt * (alpha_n * (1. - state.n) - beta_n * state.n),
        }
    }

    #[test]
    pub fn test_next_state_matches_euler_update() {
        let mut rng = rand::thread_rng();
        let params = HodgkinHuxleyParameters::default();

        for _ in 0..10_000 {
            let state = State {
                v: rng.gen_range(-100.0..50.0),
                m: rng.gen_range(0.0..=1.0),
                h: rng.gen_range(0.0..=1.0),
                n: rng.gen_range(0.0..=1.0),
            };
            let i_ext: f64 = rng.gen_range(-20.0..20.0);
            let dt: f64 = rng.gen_range(0.001..0.05);
            let time: f64 = rng.gen_range(0.0..50.0);

            let actual = next_state(state, time, dt, &params, &ConstantCurrent(i_ext));
            let expected = euler_step(state, i_ext, dt, &params);

            assert!(close(actual.v, expected.v), "v: {} != {}", actual.v, expected.v);
            assert!(close(actual.m, expected.m), "m: {} != {}", actual.m, expected.m);
            assert!(close(actual.h, expected.h), "h: {} != {}", actual.h, expected.h);
            assert!(close(actual.n, expected.n), "n: {} != {}", actual.n, expected.n);
        }
    }

    #[test]
    pub fn test_next_state_with_random_parameters() {
        let mut rng = rand::thread_rng();

        for _ in 0..1000 {
            let params = HodgkinHuxleyParameters {
                g_na: rng.gen_range(50.0..200.0),
                g_k: rng.gen_range(10.0..60.0),
                g_l: rng.gen_range(0.1..1.0),
                e_na: rng.gen_range(40.0..60.0),
                e_k: rng.gen_range(-90.0..-70.0),
                e_l: rng.gen_range(-60.0..-50.0),
                c_m: rng.gen_range(0.5..2.0),
                v_init: -65.,
            };
            let state = State {
                v: rng.gen_range(-90.0..40.0),
                m: rng.gen_range(0.0..=1.0),
                h: rng.gen_range(0.0..=1.0),
                n: rng.gen_range(0.0..=1.0),
            };

            let actual = next_state(state, 0., 0.01, &params, &ConstantCurrent(1.5));
            let expected = euler_step(state, 1.5, 0.01, &params);

            assert!(close(actual.v, expected.v));
            assert!(close(actual.m, expected.m));
            assert!(close(actual.h, expected.h));
            assert!(close(actual.n, expected.n));
        }
    }

    #[test]
    pub fn test_ionic_currents() {
        let params = HodgkinHuxleyParameters::default();
        let state = State { v: -60., m: 0.5, h: 0.4, n: 0.3 };

        let currents = IonicCurrents::from_state(&state, &params);

        assert!(close(currents.i_na, 120. * 0.125 * 0.4 * (-110.)));
        assert!(close(currents.i_k, 36. * 0.0081 * 17.));
        assert!(close(currents.i_l, 0.3 * (-60. + 54.387)));
        assert!(close(currents.total(), currents.i_na + currents.i_k + currents.i_l));
    }

    #[test]
    pub fn test_trajectory_follows_recurrence() -> Result<(), HodgkinHuxleyError> {
        let params = HodgkinHuxleyParameters::default();
        let sim_params = SimulationParameters::default();
        let stimulus = StepCurrent::default();

        let trajectory = simulate(&params, &sim_params, &stimulus)?;
        let time = trajectory.time();

        for i in 1..trajectory.len() {
            let prev = trajectory.state(i - 1).expect("Index in bounds");
            let expected = next_state(prev, time[i - 1], sim_params.dt, &params, &stimulus);

            assert_eq!(trajectory.state(i), Some(expected));
        }

        Ok(())
    }

    #[test]
    pub fn test_stimulus_read_at_previous_time() -> Result<(), HodgkinHuxleyError> {
        let params = HodgkinHuxleyParameters::default();
        let sim_params = SimulationParameters::default();

        let trajectory = simulate(&params, &sim_params, &StepCurrent::default())?;
        let voltage = trajectory.voltage();

        // t[1000] is exactly 10 ms, outside the open window, so the pulse
        // first affects the sample computed from t[1001]
        assert_eq!(trajectory.time()[1000], 10.);
        assert!((voltage[1001] - voltage[1000]).abs() < 1e-4);
        assert!(voltage[1002] - voltage[1001] > 0.01);

        Ok(())
    }
}
