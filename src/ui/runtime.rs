//! Session event loop.
//!
//! Single-threaded and cooperative: the loop blocks on input and fully
//! processes one event, including any blocking animation frames and nested
//! dialog sub-loops, before reading the next. The only departure from this
//! thread of control is the launch handoff, which replaces the process image
//! outright when it succeeds.

use std::thread;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use crate::discovery::SearchDirs;
use crate::launch::{self, LaunchError};
use crate::logging::SessionLog;

use super::animation::transition;
use super::app::{Action, App};
use super::dialogs;

/// Run the interactive session to completion.
///
/// Returns when the user quits; a launch that fails re-acquires the terminal
/// and drops back into this loop with a status message, never exiting.
pub fn run(app: &mut App, dirs: &SearchDirs, log: &mut SessionLog) -> Result<()> {
    let mut terminal = ratatui::init();
    terminal.clear()?;

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match app.handle_key(key) {
            Some(Action::Quit) => break,
            Some(Action::Launch(name)) => {
                log.event(&format!("launching {name}"));
                let err = match launch::handoff(dirs, &name) {
                    Ok(never) => match never {},
                    Err(err) => err,
                };
                log.event(&format!("launch failed: {err}"));
                recover(&mut terminal, app, &name, &err)?;
            }
            Some(Action::Animate { from, to }) => animate(&mut terminal, app, from, to)?,
            Some(Action::OpenFilter) => {
                let (text, applied) = dialogs::run_filter(&mut terminal, app)?;
                if applied {
                    app.apply_filter(text);
                } else {
                    app.rebuild_view();
                }
            }
            Some(Action::OpenAbout) => dialogs::run_about(&mut terminal, app)?,
            None => {}
        }
    }

    ratatui::restore();
    Ok(())
}

/// Re-acquire the terminal after a failed handoff and surface the failure on
/// the status line. The viewport is left untouched.
fn recover(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    name: &str,
    err: &LaunchError,
) -> Result<()> {
    *terminal = ratatui::init();
    terminal.clear()?;
    app.status = Some(failure_status(name, err));
    Ok(())
}

/// Status-line text for a failed handoff.
fn failure_status(name: &str, err: &LaunchError) -> String {
    match err {
        LaunchError::NotFound { .. } => format!("Failed to launch {name}: not found"),
        LaunchError::Exec { .. } => format!("Failed to launch {name}"),
    }
}

/// Walk the highlight from its previous row to the new one, redrawing after
/// every step with a fixed pause in between. Input is not polled while this
/// runs. Moves spanning at least a full window skip the walk and render the
/// final state directly.
fn animate(terminal: &mut DefaultTerminal, app: &mut App, from: usize, to: usize) -> Result<()> {
    if app.visible_rows > 0 && from.abs_diff(to) >= app.visible_rows {
        app.view.highlight = to;
        app.view.clamp(app.visible_rows);
        terminal.draw(|frame| app.draw(frame))?;
        return Ok(());
    }

    let mut frames = transition(from, to).peekable();
    while let Some(row) = frames.next() {
        app.view.highlight = row;
        app.view.clamp(app.visible_rows);
        terminal.draw(|frame| app.draw(frame))?;
        if frames.peek().is_some() {
            thread::sleep(app.settings.animation_interval);
        }
    }
    Ok(())
}
