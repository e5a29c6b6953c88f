//! Terminal Game of Life runner (default binary).
//!
//! Input comes from crossterm events; drawing goes through the diffing
//! framebuffer renderer in `tui-life-term`.

mod cli;

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_life::core::{patterns, LifeSession};
use tui_life::input::{action_for_key, should_quit, KeyRepeater};
use tui_life::term::{FrameBuffer, LifeView, TerminalRenderer, Viewport};
use tui_life::types::{SimAction, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = cli::parse_args(&args)?;
    if config.show_help {
        println!("{}", cli::usage());
        return Ok(());
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Restore the terminal even when run fails.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &cli::CliConfig) -> Result<()> {
    let mut view = LifeView::new(config.cell_size);
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);

    // With no explicit dimensions the grid fills the terminal, and stays
    // fitted to it across randomize and cell-size changes.
    let auto_size = config.columns.is_none() && config.rows.is_none();
    let (fit_columns, fit_rows) = view.grid_dims(viewport);
    let columns = config.columns.unwrap_or(fit_columns);
    let rows = config.rows.unwrap_or(fit_rows);

    let seed = config.seed.unwrap_or_else(seed_from_clock);
    let mut session = LifeSession::new(columns, rows, seed)?;
    session.set_step_interval(config.step_interval_ms);

    if let Some(name) = config.pattern.as_deref() {
        let pattern =
            patterns::by_name(name).ok_or_else(|| anyhow!("unknown pattern: {}", name))?;
        session.apply_pattern(pattern);
    }
    if config.start_running {
        session.toggle_running();
    }

    let mut repeater = KeyRepeater::new();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        view.render_into(&session, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Block on input at most until the next tick is due.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        if let Some(action) = repeater.handle_key_press(key.code) {
                            dispatch(action, &mut session, &mut view, viewport, auto_size)?;
                        }

                        if let Some(action) = action_for_key(key) {
                            match action {
                                SimAction::StepOnce | SimAction::SpeedUp | SimAction::SlowDown => {
                                    // Handled by the repeater above.
                                }
                                _ => {
                                    dispatch(action, &mut session, &mut view, viewport, auto_size)?
                                }
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // The repeater paces held keys itself; terminal
                        // auto-repeat would double-fire them.
                    }
                    KeyEventKind::Release => {
                        repeater.handle_key_release(key.code);
                    }
                },
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    term.invalidate();
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in repeater.update(TICK_MS) {
                dispatch(action, &mut session, &mut view, viewport, auto_size)?;
            }

            session.tick(TICK_MS);
        }
    }
}

/// Route an action, handling the ones that involve the viewport here.
///
/// Cell-size changes and (in auto-size mode) randomize rebuild the grid to
/// fit the terminal, so they need the view and viewport; everything else
/// goes straight to the session.
fn dispatch(
    action: SimAction,
    session: &mut LifeSession,
    view: &mut LifeView,
    viewport: Viewport,
    auto_size: bool,
) -> Result<()> {
    match action {
        SimAction::CellSizeUp | SimAction::CellSizeDown => {
            if session.running() {
                return Ok(());
            }
            let before = view.cell_size();
            let next = if action == SimAction::CellSizeUp {
                before.saturating_add(1)
            } else {
                before.saturating_sub(1)
            };
            view.set_cell_size(next);
            if auto_size && view.cell_size() != before {
                let (columns, rows) = view.grid_dims(viewport);
                session.randomize_to(columns, rows)?;
            }
        }
        SimAction::Randomize if auto_size => {
            if session.running() {
                return Ok(());
            }
            let (columns, rows) = view.grid_dims(viewport);
            session.randomize_to(columns, rows)?;
        }
        _ => {
            session.handle_action(action);
        }
    }
    Ok(())
}

fn seed_from_clock() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or(1)
}
