use std::process::ExitCode;
use hodgkin_huxley_simulation::{
    error::HodgkinHuxleyError,
    kinetics::GatingVariable,
    parameters::{HodgkinHuxleyParameters, SimulationParameters},
    render::{CsvExport, Renderer, SvgPlot},
    simulation::simulate,
    stimulus::StepCurrent,
};


// Runs the default membrane under the default current pulse, prints a summary and
// writes a voltage plot and the full time series to the working directory
fn run() -> Result<(), HodgkinHuxleyError> {
    let params = HodgkinHuxleyParameters::default();
    println!("g_na: {}", params.g_na);
    println!("g_k: {}", params.g_k);
    println!("g_l: {}", params.g_l);
    println!("e_na: {}", params.e_na);
    println!("e_k: {}", params.e_k);
    println!("e_l: {}", params.e_l);
    println!("c_m: {}", params.c_m);
    println!("v_init: {}", params.v_init);

    let sim_params = SimulationParameters::default();
    println!("t_max: {}", sim_params.t_max);
    println!("dt: {}", sim_params.dt);

    for gate in [GatingVariable::M, GatingVariable::H, GatingVariable::N] {
        println!("tau_{}: {}", gate.name(), gate.time_constant(params.v_init));
    }

    let stimulus = StepCurrent::default();
    println!("stimulus_start: {}", stimulus.start);
    println!("stimulus_end: {}", stimulus.end);
    println!("stimulus_amplitude: {}", stimulus.amplitude);

    let trajectory = simulate(&params, &sim_params, &stimulus)?;
    println!("iterations: {}", trajectory.len());

    if let Err(e) = trajectory.check_finite() {
        println!("warning: {}", e);
    }

    if let Some((index, max_voltage)) = trajectory.max_voltage() {
        println!("max_voltage: {} (t = {})", max_voltage, trajectory.time()[index]);
    }
    println!("spikes: {}", trajectory.spike_indices(0.).len());

    let plot = SvgPlot::default();
    plot.render(&trajectory)?;
    println!("plot: {}", plot.path.display());

    let export = CsvExport::default();
    export.render(&trajectory)?;
    println!("export: {}", export.path.display());

    println!("\nFinished Hodgkin Huxley simulation");

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        },
    }
}
