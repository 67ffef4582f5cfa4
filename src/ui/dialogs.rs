//! Modal dialog sub-loops.
//!
//! Dialogs run nested blocking loops over a centered overlay; the outer
//! session loop is suspended until they resolve, and results come back as
//! typed values instead of edits to the outer state. Both dialogs open with
//! a short growth animation of the overlay box before accepting input.

use std::thread;
use std::time::Duration;

use anyhow::Result;
use ratatui::DefaultTerminal;
use ratatui::Frame;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::layout::{Alignment, Rect};
use ratatui::widgets::{Block, Clear, Paragraph};

use super::app::{App, DialogKind, Mode};
use super::render::overlay_rect;

const GROWTH_INTERVAL: Duration = Duration::from_millis(15);

const FILTER_WIDTH: u16 = 44;
const FILTER_HEIGHT: u16 = 3;
const ABOUT_WIDTH: u16 = 48;
const ABOUT_HEIGHT: u16 = 9;

/// How a text-entry dialog was closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogSignal {
    Apply,
    Cancel,
}

/// Transient text buffer for the filter-entry dialog. The buffer belongs to
/// the dialog alone until it is committed; cancelling discards it without
/// touching the applied pattern.
#[derive(Debug)]
pub struct FilterDialog {
    buffer: String,
    max_len: usize,
}

impl FilterDialog {
    pub fn new(max_len: usize) -> Self {
        Self {
            buffer: String::new(),
            max_len,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    pub fn into_buffer(self) -> String {
        self.buffer
    }

    /// Handle one key press inside the dialog. Returns a signal once the
    /// dialog is done, `None` while it stays open.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<DialogSignal> {
        match key.code {
            KeyCode::Enter => Some(DialogSignal::Apply),
            KeyCode::Esc => Some(DialogSignal::Cancel),
            KeyCode::Backspace => {
                self.buffer.pop();
                None
            }
            KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if self.buffer.chars().count() < self.max_len {
                    self.buffer.push(ch);
                }
                None
            }
            _ => None,
        }
    }

    fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered().title(" Filter ");
        let inner = block.inner(area);
        frame.render_widget(block, area);
        if inner.width == 0 || inner.height == 0 {
            return;
        }
        // Keep the tail of the buffer visible when it outgrows the box.
        let visible = inner.width.saturating_sub(1) as usize;
        let skip = self.buffer.chars().count().saturating_sub(visible);
        let tail: String = self.buffer.chars().skip(skip).collect();
        frame.render_widget(Paragraph::new(format!("{tail}_")), inner);
    }
}

/// Run the filter-entry dialog to completion, returning the typed text and
/// whether it should be applied.
pub fn run_filter(terminal: &mut DefaultTerminal, app: &mut App) -> Result<(String, bool)> {
    app.mode = Mode::FilterEditing;
    let mut dialog = FilterDialog::new(app.settings.max_filter_len);

    grow_overlay(terminal, app, FILTER_WIDTH, FILTER_HEIGHT, |frame, area| {
        dialog.render(frame, area);
    })?;

    let signal = loop {
        terminal.draw(|frame| {
            app.draw(frame);
            let area = overlay_rect(frame.area(), FILTER_WIDTH, FILTER_HEIGHT);
            frame.render_widget(Clear, area);
            dialog.render(frame, area);
        })?;
        if let Some(key) = next_key_press()?
            && let Some(signal) = dialog.handle_key(key)
        {
            break signal;
        }
    };

    app.mode = Mode::Browsing;
    Ok((dialog.into_buffer(), signal == DialogSignal::Apply))
}

/// Show the informational dialog until any key is pressed.
pub fn run_about(terminal: &mut DefaultTerminal, app: &mut App) -> Result<()> {
    app.mode = Mode::DialogActive(DialogKind::About);

    grow_overlay(terminal, app, ABOUT_WIDTH, ABOUT_HEIGHT, render_about)?;

    loop {
        terminal.draw(|frame| {
            app.draw(frame);
            let area = overlay_rect(frame.area(), ABOUT_WIDTH, ABOUT_HEIGHT);
            frame.render_widget(Clear, area);
            render_about(frame, area);
        })?;
        if next_key_press()?.is_some() {
            break;
        }
    }

    app.mode = Mode::Browsing;
    Ok(())
}

fn render_about(frame: &mut Frame, area: Rect) {
    let block = Block::bordered().title(" About ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    let text = format!(
        "binlift {}\n\n\
         Full-screen launcher for programs found on\n\
         well-known executable search paths.\n\n\
         Enter launches, Ctrl+F filters, q quits.\n\n\
         Press any key to close.",
        env!("CARGO_PKG_VERSION")
    );
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

/// Block for the next key press, skipping releases, repeats, and non-key
/// events (a resize is picked up by the next redraw).
fn next_key_press() -> Result<Option<KeyEvent>> {
    let Event::Key(key) = event::read()? else {
        return Ok(None);
    };
    if key.kind == KeyEventKind::Press {
        Ok(Some(key))
    } else {
        Ok(None)
    }
}

/// Entry animation: the overlay's bounding box grows from nothing to its
/// final size over a fixed number of frames. Purely presentational; input is
/// not read until the box is at full size.
fn grow_overlay(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    width: u16,
    height: u16,
    render: impl Fn(&mut Frame, Rect),
) -> Result<()> {
    let steps = app.settings.dialog_growth_steps.max(1);
    for step in 1..=steps {
        let partial_width = partial_size(width, step, steps);
        let partial_height = partial_size(height, step, steps);
        terminal.draw(|frame| {
            app.draw(frame);
            let area = overlay_rect(frame.area(), partial_width, partial_height);
            frame.render_widget(Clear, area);
            render(frame, area);
        })?;
        if step < steps {
            thread::sleep(GROWTH_INTERVAL);
        }
    }
    Ok(())
}

/// Size of the overlay at one frame of the growth animation. The step count
/// comes from user configuration, so the intermediate multiply must not be
/// done in `u16`.
fn partial_size(full: u16, step: u16, steps: u16) -> u16 {
    (u32::from(full) * u32::from(step) / u32::from(steps)) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::from(code)
    }

    #[test]
    fn characters_append_to_the_buffer() {
        let mut dialog = FilterDialog::new(64);
        assert_eq!(dialog.handle_key(press(KeyCode::Char('f'))), None);
        assert_eq!(dialog.handle_key(press(KeyCode::Char('i'))), None);
        assert_eq!(dialog.buffer(), "fi");
    }

    #[test]
    fn backspace_removes_the_last_character() {
        let mut dialog = FilterDialog::new(64);
        dialog.handle_key(press(KeyCode::Char('a')));
        dialog.handle_key(press(KeyCode::Char('b')));
        dialog.handle_key(press(KeyCode::Backspace));
        assert_eq!(dialog.buffer(), "a");
    }

    #[test]
    fn backspace_on_an_empty_buffer_is_a_no_op() {
        let mut dialog = FilterDialog::new(64);
        assert_eq!(dialog.handle_key(press(KeyCode::Backspace)), None);
        assert_eq!(dialog.buffer(), "");
    }

    #[test]
    fn the_buffer_is_bounded() {
        let mut dialog = FilterDialog::new(3);
        for ch in ['a', 'b', 'c', 'd', 'e'] {
            dialog.handle_key(press(KeyCode::Char(ch)));
        }
        assert_eq!(dialog.buffer(), "abc");
    }

    #[test]
    fn enter_signals_apply() {
        let mut dialog = FilterDialog::new(64);
        dialog.handle_key(press(KeyCode::Char('c')));
        assert_eq!(dialog.handle_key(press(KeyCode::Enter)), Some(DialogSignal::Apply));
        assert_eq!(dialog.into_buffer(), "c");
    }

    #[test]
    fn escape_signals_cancel() {
        let mut dialog = FilterDialog::new(64);
        dialog.handle_key(press(KeyCode::Char('c')));
        assert_eq!(dialog.handle_key(press(KeyCode::Esc)), Some(DialogSignal::Cancel));
    }

    #[test]
    fn growth_sizes_survive_large_configured_step_counts() {
        assert_eq!(partial_size(ABOUT_WIDTH, 1366, 2000), 32);
        assert_eq!(partial_size(ABOUT_WIDTH, 2000, 2000), ABOUT_WIDTH);
        assert_eq!(partial_size(FILTER_WIDTH, 1, 4), 11);
        assert_eq!(partial_size(FILTER_WIDTH, 4, 4), FILTER_WIDTH);
        assert_eq!(partial_size(0, 3, 4), 0);
    }

    #[test]
    fn cancelled_filter_leaves_the_applied_view_unchanged() {
        use crate::ui::UiSettings;

        let candidates = ["ls", "cat", "catfish", "grep"]
            .iter()
            .map(|name| name.to_string())
            .collect();
        let mut app = App::new(candidates, UiSettings::default());
        app.apply_filter("cat".to_owned());
        let before = app.filtered.clone();

        // The round trip the runtime performs when the dialog is cancelled.
        let mut dialog = FilterDialog::new(app.settings.max_filter_len);
        dialog.handle_key(press(KeyCode::Char('f')));
        dialog.handle_key(press(KeyCode::Char('i')));
        assert_eq!(dialog.handle_key(press(KeyCode::Esc)), Some(DialogSignal::Cancel));
        app.rebuild_view();

        assert_eq!(app.filtered, before);
        assert_eq!(app.pattern(), "cat");
        assert_eq!(app.mode, Mode::Browsing);
        assert_eq!(app.view.highlight, 0);
        assert_eq!(app.view.top, 0);
    }

    #[test]
    fn control_chords_are_not_text() {
        let mut dialog = FilterDialog::new(64);
        let key = KeyEvent::new(KeyCode::Char('f'), KeyModifiers::CONTROL);
        assert_eq!(dialog.handle_key(key), None);
        assert_eq!(dialog.buffer(), "");
    }
}
