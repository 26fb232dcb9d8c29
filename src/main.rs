//! Bounce Room entry point
//!
//! Usage: `bounce-room [settings.json]`. Without a settings file the
//! reference run is drawn in the terminal.

use std::io;

use bounce_room::renderer::{
    FixedDelay, GridLayout, JsonLinesRenderer, LogRenderer, NoDelay, TerminalRenderer,
};
use bounce_room::{RenderMode, Result, RunSummary, Settings, Simulation, StepObserver};

fn main() {
    env_logger::init();
    log::info!("Bounce Room starting...");

    if let Err(e) = run() {
        log::error!("{e}");
        eprintln!("bounce-room: {e}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let settings = match std::env::args_os().nth(1) {
        Some(path) => Settings::load(path)?,
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };
    log::info!("Render mode: {}", settings.render_mode.as_str());

    let mut sim = Simulation::new(settings.physics);
    let stdout = io::stdout().lock();

    match settings.render_mode {
        RenderMode::Ascii => {
            let layout = GridLayout::new(settings.grid_rows, settings.physics.room_width);
            if settings.frame_delay_ms == 0 {
                let mut renderer = TerminalRenderer::new(stdout, NoDelay, layout)
                    .with_clear_screen(settings.clear_screen);
                drive(&mut sim, &mut renderer, &settings)?;
            } else {
                log::info!("Frame delay: {} ms", settings.frame_delay_ms);
                let pacer = FixedDelay::new(settings.frame_delay());
                let mut renderer = TerminalRenderer::new(stdout, pacer, layout)
                    .with_clear_screen(settings.clear_screen);
                drive(&mut sim, &mut renderer, &settings)?;
            }
        }
        RenderMode::Json => {
            let mut renderer = JsonLinesRenderer::new(io::BufWriter::new(stdout));
            drive(&mut sim, &mut renderer, &settings)?;
        }
        RenderMode::Log => {
            drive(&mut sim, &mut LogRenderer, &settings)?;
        }
    }
    Ok(())
}

fn drive(
    sim: &mut Simulation,
    observer: &mut dyn StepObserver,
    settings: &Settings,
) -> Result<RunSummary> {
    let summary = sim.run_with_limit(observer, settings.max_steps)?;
    if summary.step_limit_reached {
        log::warn!(
            "Step limit of {} reached with {} bounces left",
            summary.steps,
            sim.state().bounces_remaining
        );
    }
    Ok(summary)
}
