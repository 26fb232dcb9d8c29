//! Full runs driven through the renderers into in-memory buffers

use bounce_room::renderer::{GridLayout, JsonLinesRenderer, NoDelay, TerminalRenderer};
use bounce_room::renderer::terminal::CLEAR_SCREEN;
use bounce_room::{Settings, SimEvent, SimParams, SimState, Simulation};

#[test]
fn terminal_renderer_draws_one_frame_per_step() {
    let params = SimParams {
        max_bounces: 3,
        ..Default::default()
    };
    let mut sim = Simulation::new(params);
    let mut renderer = TerminalRenderer::new(Vec::new(), NoDelay, GridLayout::default());

    let summary = sim.run(&mut renderer).unwrap();

    assert_eq!(summary.steps, 42);
    assert_eq!(renderer.frames_drawn(), 42);
    let out = String::from_utf8(renderer.into_inner()).unwrap();
    assert_eq!(out.matches(CLEAR_SCREEN).count(), 42);

    // Last frame: the mass has just landed on the floor at x = 39
    let last = out.rsplit(CLEAR_SCREEN).next().unwrap();
    let rows: Vec<&str> = last.lines().collect();
    assert_eq!(rows[9].find('*'), Some(1 + 39));
}

#[test]
fn json_trace_ends_with_summary() {
    let settings = Settings::from_json(r#"{ "physics": { "max_bounces": 0 } }"#).unwrap();
    let mut sim = Simulation::new(settings.physics);
    let mut renderer = JsonLinesRenderer::new(Vec::new());

    sim.run_with_limit(&mut renderer, settings.max_steps).unwrap();

    let out = String::from_utf8(renderer.into_inner()).unwrap();
    let lines: Vec<serde_json::Value> = out
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(lines.len(), 22);

    let first = &lines[0];
    assert_eq!(first["tick"], 1);
    assert_eq!(first["position"][0], 1.0);

    let last_step = &lines[20];
    assert_eq!(last_step["bounces_remaining"], -1);
    assert_eq!(last_step["events"][0]["kind"], "floor_bounce");

    let summary = &lines[21]["summary"];
    assert_eq!(summary["steps"], 21);
    assert_eq!(summary["floor_bounces"], 1);
    assert_eq!(summary["step_limit_reached"], false);
}

#[test]
fn alternate_room_keeps_mass_inside() {
    let params = SimParams {
        room_width: 9.0,
        initial_velocity: glam::DVec2::new(25.0, 6.0),
        max_bounces: 20,
        ..Default::default()
    };
    let mut sim = Simulation::new(params);
    let mut wall_hits = 0;
    let summary = sim
        .run(&mut |state: &SimState, events: &[SimEvent]| -> bounce_room::Result<()> {
            assert!((0.0..=9.0).contains(&state.position.x));
            assert!(state.position.y >= 0.0);
            wall_hits += events
                .iter()
                .filter(|e| matches!(e, SimEvent::WallBounce { .. }))
                .count();
            Ok(())
        })
        .unwrap();

    assert_eq!(summary.floor_bounces, 21);
    assert!(wall_hits > 0);
    assert_eq!(summary.wall_bounces as usize, wall_hits);
}
