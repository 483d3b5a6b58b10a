//! Gravistep - Fixed-step Newtonian gravity simulator
//!
//! Runs a preset scenario headlessly, plays the recorded trajectory back
//! frame by frame and logs positions plus a conservation summary.

use std::process::ExitCode;

use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;

use gravistep::physics::{RunSummary, SimulationFailure, SimulationPlugin, SimulationSetup};
use gravistep::playback::{Playback, PlaybackPlugin, PlaybackSystems};
use gravistep::scenarios::{self, SCENARIOS};
use gravistep::trajectory::TrajectoryHistory;
use gravistep::types::METERS_TO_AU;

#[derive(Parser, Debug)]
#[command(version, about = "Fixed-step Newtonian gravity simulator")]
struct Args {
    /// Preset scenario id
    #[arg(short, long, default_value = "inner_solar_system")]
    scenario: String,

    /// Override the number of steps
    #[arg(long)]
    steps: Option<usize>,

    /// Override the timestep in seconds
    #[arg(long)]
    dt: Option<f64>,

    /// Frames between position log lines (0 disables them)
    #[arg(long, default_value_t = 365)]
    report_every: usize,

    /// List available scenarios and exit
    #[arg(long)]
    list: bool,
}

/// How often the position report fires, in frames.
#[derive(Resource, Clone, Copy, Debug)]
struct ReportEvery(usize);

fn main() -> ExitCode {
    let args = Args::parse();

    if args.list {
        for scenario in SCENARIOS {
            println!("{:<20} {}", scenario.id, scenario.description);
        }
        return ExitCode::SUCCESS;
    }

    let Some(scenario) = scenarios::find(&args.scenario) else {
        eprintln!("unknown scenario '{}' (try --list)", args.scenario);
        return ExitCode::FAILURE;
    };

    let mut setup = SimulationSetup::from_scenario(scenario);
    if let Some(steps) = args.steps {
        setup.config = setup.config.with_steps(steps);
    }
    if let Some(dt) = args.dt {
        setup.config = setup.config.with_dt(dt);
    }

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        // Insert resources before plugins that depend on them
        .insert_resource(setup)
        .insert_resource(ReportEvery(args.report_every))
        .add_plugins((SimulationPlugin, PlaybackPlugin))
        .add_systems(Update, report_positions.after(PlaybackSystems));

    info!("Scenario: {}", scenario.name);

    loop {
        app.update();

        let world = app.world();
        if let Some(failure) = world.get_resource::<SimulationFailure>() {
            error!("Run aborted: {}", failure.0);
            return ExitCode::FAILURE;
        }
        if world.resource::<Playback>().finished() {
            break;
        }
    }

    if let Some(summary) = app.world().get_resource::<RunSummary>() {
        log_summary(summary);
    }
    ExitCode::SUCCESS
}

/// Log every body's position (AU) on report frames.
fn report_positions(
    playback: Res<Playback>,
    history: Option<Res<TrajectoryHistory>>,
    every: Res<ReportEvery>,
) {
    let Some(history) = history else {
        return;
    };
    if every.0 == 0 || (playback.frame % every.0 != 0 && !playback.finished()) {
        return;
    }

    let Some(positions) = history.frame(playback.frame) else {
        return;
    };
    for (name, pos) in history.names().iter().zip(positions) {
        let au = pos * METERS_TO_AU;
        info!(
            "frame {:>5}  {:<8} ({:+.4}, {:+.4}) AU",
            playback.frame, name, au.x, au.y
        );
    }
}

fn log_summary(summary: &RunSummary) {
    info!("Completed {} steps", summary.steps);
    info!(
        "Energy: {:.6e} J -> {:.6e} J (relative drift {:.3e})",
        summary.initial_energy,
        summary.final_energy,
        summary.energy_drift()
    );
    info!(
        "Momentum change: {:.3e} kg·m/s",
        summary.momentum_change()
    );
}
