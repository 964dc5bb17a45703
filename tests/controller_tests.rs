// Host-side tests for the cursor controller: input handlers, the frame step
// and the stop lifecycle, driven with synthetic hit-tests and timestamps.

use cursor_trail::core::*;
use glam::DVec2;

struct El(&'static str);

impl HitElement for El {
    fn matches(&self, selector: &str) -> bool {
        selector == self.0
    }
}

const DEMO: &str = r#"{
    "selector": { "button": { "colour": "rgb(255,255,0)", "size": 20, "trail_size": 0 } },
    "mouse_down": { "size": 30, "trail_size": 0 }
}"#;

fn controller(json: &str) -> CursorController {
    let config = CursorOptions::from_json(json).unwrap().resolve().unwrap();
    CursorController::new(config, DVec2::new(800.0, 600.0))
}

fn ellipse(out: &FrameOutput) -> Option<(DVec2, f64, f64)> {
    out.commands.iter().find_map(|c| match c {
        DrawCommand::Ellipse {
            center,
            radius_x,
            radius_y,
            ..
        } => Some((*center, *radius_x, *radius_y)),
        _ => None,
    })
}

#[test]
fn first_frame_draws_default_cursor_and_trail() {
    let mut c = controller("");
    let out = c.render_frame(16.0);
    assert_eq!(out.schedule, Schedule::Next);
    assert_eq!(out.commands.len(), 4);
    assert_eq!(
        out.commands[0],
        DrawCommand::Clear {
            size: DVec2::new(800.0, 600.0)
        }
    );
    assert_eq!(out.commands[1], DrawCommand::Composite(BlendMode::Difference));
    assert_eq!(
        out.commands[2],
        DrawCommand::Circle {
            center: DVec2::ZERO,
            radius: 10.0,
            color: Color::default(),
        }
    );
    let (center, rx, ry) = ellipse(&out).unwrap();
    assert_eq!(center, DVec2::ZERO);
    assert_eq!(rx, 10.0);
    assert_eq!(ry, 10.0);
}

#[test]
fn hovering_a_matching_element_activates_its_rule() {
    let mut c = controller(DEMO);
    c.on_mouse_move(DVec2::new(50.0, 50.0), &[El("button"), El("div")]);
    assert_eq!(c.resolution(), Resolution::Selector(0));
    assert_eq!(c.active_config().size, 20.0);
    assert_eq!(c.active_config().color, Color::new("rgb(255,255,0)"));
}

#[test]
fn selector_match_beats_held_button() {
    let mut c = controller(DEMO);
    c.on_pointer_down();
    c.on_mouse_move(DVec2::new(50.0, 50.0), &[El("button"), El("div")]);
    assert_eq!(c.active_config().size, 20.0);
}

#[test]
fn pointer_buttons_switch_between_mouse_down_and_default() {
    let mut c = controller(DEMO);
    c.on_pointer_down();
    assert!(c.state().button_down);
    assert_eq!(c.resolution(), Resolution::MouseDown);
    assert_eq!(c.active_config().size, 30.0);

    c.on_mouse_move(DVec2::new(5.0, 5.0), &[El("div")]);
    assert_eq!(c.resolution(), Resolution::MouseDown);

    c.on_pointer_up();
    assert!(!c.state().button_down);
    assert_eq!(c.resolution(), Resolution::Default);
    assert_eq!(c.active_config(), &c.config().cursor);
}

#[test]
fn touch_start_and_end_force_configs() {
    let mut c = controller(DEMO);
    c.on_mouse_move(DVec2::new(50.0, 50.0), &[El("button")]);
    assert!(c.resolution().is_selector());

    c.on_touch_start(Some(DVec2::new(120.0, 80.0)));
    assert!(c.state().is_touch);
    assert_eq!(c.resolution(), Resolution::MouseDown);
    assert_eq!(c.state().pointer, DVec2::new(120.0, 80.0));

    c.on_touch_end();
    assert!(!c.state().is_touch);
    assert_eq!(c.resolution(), Resolution::Default);
}

#[test]
fn touch_move_moves_trail_without_resolving() {
    let mut c = controller(DEMO);
    c.on_touch_start(None);
    c.on_touch_move(DVec2::new(300.0, 200.0));
    assert_eq!(c.state().pointer, DVec2::new(300.0, 200.0));
    assert_eq!(c.state().trail, DVec2::new(300.0, 200.0));
    assert_eq!(c.resolution(), Resolution::MouseDown);

    c.on_mouse_move(DVec2::new(10.0, 10.0), &[El("div")]);
    assert!(!c.state().is_touch);
}

#[test]
fn mouse_trail_lags_behind_pointer() {
    let mut c = controller(r#"{ "damping": { "trail_position": 0.001 } }"#);
    c.on_mouse_move(DVec2::new(10.0, 10.0), &[] as &[El]);
    assert_eq!(c.state().trail, DVec2::new(10.0, 10.0));

    c.on_mouse_move(DVec2::new(110.0, 10.0), &[] as &[El]);
    assert_eq!(c.state().trail, DVec2::new(10.0, 10.0));

    c.render_frame(16.0);
    let trail = c.state().trail;
    assert!(trail.x > 10.0 && trail.x < 110.0, "trail {trail:?}");
    assert_eq!(trail.y, 10.0);
}

#[test]
fn leaving_a_matched_element_snaps_the_trail() {
    let mut c = controller(DEMO);
    c.on_mouse_move(DVec2::new(10.0, 10.0), &[El("div")]);
    c.on_mouse_move(DVec2::new(200.0, 200.0), &[El("button")]);
    assert_eq!(c.state().trail, DVec2::new(10.0, 10.0));
    assert!(c.state().had_match);

    c.on_mouse_move(DVec2::new(300.0, 250.0), &[El("div")]);
    assert!(!c.state().had_match);
    assert_eq!(c.state().trail, DVec2::new(300.0, 250.0));
}

#[test]
fn radius_eases_toward_target_without_overshoot() {
    let mut c = controller(
        r#"{ "mouse_down": { "size": 20 }, "damping": { "cursor_radius": 0.001 } }"#,
    );
    c.on_pointer_down();
    let mut last = c.state().smoothed.cursor_radius;
    assert_eq!(last, 10.0);
    for i in 1..=200 {
        c.render_frame(i as f64 * 16.0);
        let r = c.state().smoothed.cursor_radius;
        assert!(r >= last && r <= 20.0, "frame {i}: {r} after {last}");
        last = r;
    }
    assert!(last > 19.0);
}

#[test]
fn zero_length_frame_changes_nothing() {
    let mut c = controller(r#"{ "damping": { "trail_position": 0.001 } }"#);
    c.on_mouse_move(DVec2::new(10.0, 10.0), &[] as &[El]);
    c.on_mouse_move(DVec2::new(400.0, 10.0), &[] as &[El]);
    c.render_frame(100.0);
    let before = c.state().clone();

    let out = c.render_frame(100.0);
    assert_eq!(c.state().trail, before.trail);
    assert_eq!(c.state().smoothed, before.smoothed);
    let (_, rx, ry) = ellipse(&out).unwrap();
    assert_eq!(rx, ry);
}

#[test]
fn trail_stretch_is_clamped() {
    let mut c = controller(r#"{ "damping": { "trail_position": 0.0001 } }"#);
    c.on_mouse_move(DVec2::new(0.0, 0.0), &[] as &[El]);
    c.on_mouse_move(DVec2::new(5000.0, 5000.0), &[] as &[El]);
    let out = c.render_frame(1.0);
    let (_, rx, ry) = ellipse(&out).unwrap();
    let r = c.state().smoothed.trail_radius;
    assert!((rx - r / 1.5).abs() < 1e-9);
    assert!((ry - r * 1.5).abs() < 1e-9);
}

#[test]
fn zero_trail_size_fades_out_instead_of_vanishing() {
    let mut c = controller(
        r#"{ "selector": { "button": { "trail_size": 0 } }, "damping": { "trail_radius": 0.01 } }"#,
    );
    c.on_mouse_move(DVec2::new(50.0, 50.0), &[El("button")]);

    let out = c.render_frame(16.0);
    let r = c.state().smoothed.trail_radius;
    assert!(r > 0.0 && r < 10.0, "radius {r}");
    assert!(ellipse(&out).is_some());

    let out = c.render_frame(100_000.0);
    assert!(ellipse(&out).is_none());
    assert_eq!(out.commands.len(), 3);
}

#[test]
fn image_config_draws_scaled_image() {
    let mut c = controller(r#"{ "cursor": { "image": "cursor.png", "size": 8 } }"#);
    c.on_mouse_move(DVec2::new(40.0, 30.0), &[] as &[El]);
    let out = c.render_frame(16.0);
    assert_eq!(
        out.commands[2],
        DrawCommand::Image {
            src: "cursor.png".into(),
            center: DVec2::new(40.0, 30.0),
            size: 16.0,
        }
    );
}

#[test]
fn blend_disabled_uses_normal_compositing() {
    let mut c = controller(r#"{ "cursor": { "blend_disabled": true } }"#);
    let out = c.render_frame(16.0);
    assert_eq!(out.commands[1], DrawCommand::Composite(BlendMode::Normal));
    assert_eq!(BlendMode::Normal.composite_op(), "source-over");
    assert_eq!(BlendMode::Difference.composite_op(), "difference");
}

#[test]
fn resize_updates_cleared_area() {
    let mut c = controller("");
    c.on_resize(1024.0, 768.0);
    let out = c.render_frame(16.0);
    assert_eq!(
        out.commands[0],
        DrawCommand::Clear {
            size: DVec2::new(1024.0, 768.0)
        }
    );
}

#[test]
fn stop_is_terminal_and_inert() {
    let mut c = controller(DEMO);
    assert_eq!(c.render_frame(16.0).schedule, Schedule::Next);

    assert!(c.stop());
    assert!(!c.stop());
    assert_eq!(c.lifecycle(), Lifecycle::Stopped);

    // the frame in which stop landed still draws but asks for no successor
    let out = c.render_frame(32.0);
    assert_eq!(out.schedule, Schedule::Done);
    assert!(!out.commands.is_empty());

    c.on_mouse_move(DVec2::new(50.0, 50.0), &[El("button")]);
    c.on_pointer_down();
    c.on_touch_start(Some(DVec2::new(1.0, 1.0)));
    c.on_resize(10.0, 10.0);
    assert_eq!(c.resolution(), Resolution::Default);
    assert!(!c.state().button_down);
    assert!(!c.state().is_touch);
    assert_eq!(c.state().pointer, DVec2::ZERO);
    assert_eq!(c.render_frame(48.0).schedule, Schedule::Done);
}
