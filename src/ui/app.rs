//! Session context and key dispatch for the browsing state.

use std::time::Duration;

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::filter::filter;
use super::viewport::ViewState;

/// Which modal loop currently owns input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Browsing,
    FilterEditing,
    DialogActive(DialogKind),
}

/// Overlay kinds that run as `DialogActive` states. Filter entry is not one
/// of them: it has its own `FilterEditing` mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogKind {
    About,
}

/// What the runtime must do after a browsing key was dispatched. Navigation
/// mutates the view directly; everything that needs the terminal (launching,
/// animating, running a dialog sub-loop) is returned to the runtime instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    Launch(String),
    Animate { from: usize, to: usize },
    OpenFilter,
    OpenAbout,
}

/// Tunables for the interactive session, resolved from the config file.
#[derive(Debug, Clone)]
pub struct UiSettings {
    /// Pause between animation frames.
    pub animation_interval: Duration,
    /// Number of frames in a dialog's growth entry animation.
    pub dialog_growth_steps: u16,
    /// Upper bound on the filter pattern length.
    pub max_filter_len: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            animation_interval: Duration::from_millis(25),
            dialog_growth_steps: 4,
            max_filter_len: 64,
        }
    }
}

/// All mutable session state in one place: the immutable candidate set, the
/// applied pattern and its derived view, the viewport position, the active
/// mode, and the transient status line. Passed to every component; there are
/// no ambient globals.
pub struct App {
    candidates: Vec<String>,
    pattern: String,
    pub filtered: Vec<usize>,
    pub view: ViewState,
    pub mode: Mode,
    pub status: Option<String>,
    pub settings: UiSettings,
    pub(crate) visible_rows: usize,
}

impl App {
    pub fn new(candidates: Vec<String>, settings: UiSettings) -> Self {
        let filtered = filter(&candidates, "");
        Self {
            candidates,
            pattern: String::new(),
            filtered,
            view: ViewState::default(),
            mode: Mode::Browsing,
            status: None,
            settings,
            visible_rows: 0,
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The pattern currently applied to the view (not a dialog's transient
    /// buffer).
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// Name under the highlight, if the view is non-empty.
    pub fn selected_name(&self) -> Option<&str> {
        self.filtered
            .get(self.view.highlight)
            .map(|&index| self.candidates[index].as_str())
    }

    /// Name at a given row of the filtered view.
    pub fn name_at(&self, row: usize) -> Option<&str> {
        self.filtered
            .get(row)
            .map(|&index| self.candidates[index].as_str())
    }

    /// Commit a new pattern and rebuild the view from it.
    pub fn apply_filter(&mut self, pattern: String) {
        self.pattern = pattern;
        self.rebuild_view();
    }

    /// Recompute the filtered view wholesale from the applied pattern and
    /// drop the viewport back to the origin. Stale indices into a resized
    /// view are never tolerated.
    pub fn rebuild_view(&mut self) {
        self.filtered = filter(&self.candidates, &self.pattern);
        self.view.reset();
    }

    /// Dispatch one browsing-mode key press.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            if key.code == KeyCode::Char('f') {
                return Some(Action::OpenFilter);
            }
            return None;
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Enter => self
                .selected_name()
                .map(|name| Action::Launch(name.to_owned())),
            KeyCode::Up => self.step(|view, _| view.move_up()),
            KeyCode::Down => self.step(ViewState::move_down),
            KeyCode::F(1) => Some(Action::OpenAbout),
            KeyCode::Esc => {
                self.status = None;
                None
            }
            _ => None,
        }
    }

    /// Apply a single navigation step, recording the prior highlight so the
    /// runtime can animate the move. An edge no-op produces no action.
    fn step(&mut self, movement: impl Fn(&mut ViewState, usize)) -> Option<Action> {
        let from = self.view.highlight;
        movement(&mut self.view, self.filtered.len());
        self.view.clamp(self.visible_rows);
        let to = self.view.highlight;
        (from != to).then_some(Action::Animate { from, to })
    }
}
