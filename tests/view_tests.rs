//! Terminal view tests - projecting a session into the framebuffer

use tui_life::core::{patterns, LifeSession};
use tui_life::term::{FrameBuffer, LifeView, Viewport};
use tui_life::types::SimAction;

fn fb_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

fn blinker_session() -> LifeSession {
    let mut session = LifeSession::new(5, 5, 1).unwrap();
    session.handle_action(SimAction::Clear);
    session.apply_pattern(patterns::by_name("blinker").unwrap());
    session
}

#[test]
fn term_view_renders_border_corners() {
    let session = blinker_session();
    let view = LifeView::default();

    // With cell_w=2 and cell_h=1:
    // grid pixels = 5*2 by 5*1 => 10x5
    // plus border => 12x7, plus two HUD rows below.
    let fb = view.render(&session, Viewport::new(12, 9));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(11, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 6).unwrap().ch, '└');
    assert_eq!(fb.get(11, 6).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_live_cells_two_chars_wide() {
    let mut session = blinker_session();
    // Run so the paused overlay does not cover the middle row.
    session.handle_action(SimAction::ToggleRun);

    let view = LifeView::default();
    let fb = view.render(&session, Viewport::new(12, 9));

    // The blinker sits at cells (1,2)..(3,2); inside the border each cell
    // is two chars wide.
    for px in [3, 4, 5, 6, 7, 8] {
        assert_eq!(fb.get(px, 3).unwrap().ch, '█', "pixel ({}, 3)", px);
    }
    assert_eq!(fb.get(2, 3).unwrap().ch, ' ');
    assert_eq!(fb.get(9, 3).unwrap().ch, ' ');
}

#[test]
fn term_view_centers_the_field_in_larger_viewports() {
    let session = blinker_session();
    let view = LifeView::default();

    let fb = view.render(&session, Viewport::new(40, 20));

    // 12x7 frame centered in 40 columns and 18 non-HUD rows.
    assert_eq!(fb.get(14, 5).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 11).unwrap().ch, '┘');
}

#[test]
fn term_view_shows_paused_overlay_only_while_paused() {
    let mut session = blinker_session();
    let view = LifeView::default();

    let paused = fb_text(&view.render(&session, Viewport::new(60, 12)));
    assert!(paused.contains("PAUSED"));

    session.handle_action(SimAction::ToggleRun);
    let running = fb_text(&view.render(&session, Viewport::new(60, 12)));
    assert!(!running.contains("PAUSED"));
    assert!(running.contains("RUNNING"));
}

#[test]
fn term_view_hud_reports_generation_and_population() {
    let mut session = blinker_session();
    session.handle_action(SimAction::StepOnce);

    let view = LifeView::default();
    let text = fb_text(&view.render(&session, Viewport::new(60, 12)));

    assert!(text.contains("GEN 1"));
    assert!(text.contains("POP 3"));
    assert!(text.contains("GRID 5x5"));
    assert!(text.contains("SEED 1"));
}

#[test]
fn term_view_draws_dots_on_dead_cells_at_larger_cell_sizes() {
    let mut session = LifeSession::new(3, 3, 1).unwrap();
    session.handle_action(SimAction::Clear);

    // cell_size 2 => cells are 4x2; the dot sits at the cell center.
    let view = LifeView::new(2);
    let fb = view.render(&session, Viewport::new(20, 12));
    assert_eq!(fb.get(6, 3).unwrap().ch, '·');

    // At cell_size 1 the texture is omitted.
    let view = LifeView::new(1);
    let fb = view.render(&session, Viewport::new(20, 12));
    assert!(!fb_text(&fb).contains('·'));
}

#[test]
fn term_view_clips_oversized_grids_to_the_viewport() {
    // 40000 columns at cell_w=2 saturate the u16 pixel footprint; the
    // render clips at the screen edge instead of wrapping coordinates.
    let mut session = LifeSession::new(40_000, 5, 1).unwrap();
    session.handle_action(SimAction::Clear);

    let view = LifeView::default();
    let fb = view.render(&session, Viewport::new(80, 24));

    // The frame's top-left corner lands on screen; the right edge is far
    // off screen and stays dropped.
    assert_eq!(fb.get(0, 7).unwrap().ch, '┌');
    assert_eq!(fb.get(1, 7).unwrap().ch, '─');
    assert!(fb_text(&fb).contains("GRID 40000x5"));

    // The dotted texture at larger cell sizes clips the same way.
    let view = LifeView::new(2);
    let fb = view.render(&session, Viewport::new(80, 24));
    assert_eq!(fb.get(3, 7).unwrap().ch, '·');

    // Tall grids clip on rows instead.
    let session = LifeSession::new(5, 40_000, 1).unwrap();
    let fb = LifeView::default().render(&session, Viewport::new(80, 24));
    assert_eq!(fb.get(34, 0).unwrap().ch, '┌');
}
