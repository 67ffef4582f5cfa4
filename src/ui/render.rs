//! Frame rendering for the browsing session.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::app::App;

const HELP_TEXT: &str = "Enter: Launch | Up/Down: Move | Ctrl+F: Filter | F1: About | q: Quit";

impl App {
    /// Draw the full frame: the candidate list above a single status line.
    ///
    /// The list height doubles as the viewport's visible-row count, so the
    /// view is re-clamped here to absorb terminal resizes.
    pub fn draw(&mut self, frame: &mut Frame) {
        let [list_area, status_area] =
            Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

        self.visible_rows = list_area.height as usize;
        self.view.clamp(self.visible_rows);

        self.render_list(frame, list_area);
        self.render_status(frame, status_area);
    }

    fn render_list(&self, frame: &mut Frame, area: Rect) {
        if self.filtered.is_empty() {
            let empty = Paragraph::new("No matching programs")
                .alignment(Alignment::Center)
                .dim();
            frame.render_widget(empty, area);
            return;
        }

        let end = self.filtered.len().min(self.view.top + area.height as usize);
        let lines: Vec<Line> = (self.view.top..end)
            .map(|row| {
                let name = self.name_at(row).unwrap_or_default();
                let line = Line::from(truncate_to_width(name, area.width as usize));
                if row == self.view.highlight {
                    line.style(Style::default().add_modifier(Modifier::REVERSED))
                } else {
                    line
                }
            })
            .collect();
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_status(&self, frame: &mut Frame, area: Rect) {
        let counts = if self.pattern().is_empty() {
            format!("{}/{}", self.filtered_len(), self.candidates().len())
        } else {
            format!(
                "filter \"{}\" {}/{}",
                self.pattern(),
                self.filtered_len(),
                self.candidates().len()
            )
        };
        let [message_area, counts_area] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(counts.width() as u16)])
                .areas(area);

        let message = match &self.status {
            Some(status) => Paragraph::new(status.as_str()).yellow(),
            None => Paragraph::new(HELP_TEXT).dim(),
        };
        frame.render_widget(message, message_area);
        frame.render_widget(Paragraph::new(counts).dim(), counts_area);
    }
}

/// Center a `width`-by-`height` overlay box inside `area`, shrinking it to
/// fit when the terminal is smaller than the requested size.
pub(crate) fn overlay_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Clip a name to the given column budget, marking the cut with an ellipsis.
fn truncate_to_width(name: &str, max: usize) -> String {
    if name.width() <= max {
        return name.to_owned();
    }
    let budget = max.saturating_sub(1);
    let mut used = 0;
    let mut out = String::new();
    for ch in name.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > budget {
            break;
        }
        out.push(ch);
        used += ch_width;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::UiSettings;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{KeyCode, KeyEvent};

    fn app_with(names: &[&str]) -> App {
        let candidates = names.iter().map(|name| name.to_string()).collect();
        App::new(candidates, UiSettings::default())
    }

    fn rendered(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal.backend().to_string()
    }

    #[test]
    fn draw_shows_candidates_and_counts() {
        let mut app = app_with(&["cat", "grep", "ls"]);
        let view = rendered(&mut app, 60, 10);
        assert!(view.contains("cat"));
        assert!(view.contains("grep"));
        assert!(view.contains("ls"));
        assert!(view.contains("3/3"));
        assert_eq!(app.visible_rows, 9);
    }

    #[test]
    fn highlighted_row_is_rendered_reversed() {
        let mut app = app_with(&["cat", "grep"]);
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        let buffer = terminal.backend().buffer();
        let top_row = buffer.cell((0, 0)).unwrap();
        let next_row = buffer.cell((0, 1)).unwrap();
        assert!(top_row.style().add_modifier.contains(Modifier::REVERSED));
        assert!(!next_row.style().add_modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn empty_view_shows_a_placeholder() {
        let mut app = app_with(&["cat"]);
        app.apply_filter("zzz".to_owned());
        let view = rendered(&mut app, 60, 8);
        assert!(view.contains("No matching programs"));
        assert!(view.contains("filter \"zzz\" 0/1"));
    }

    #[test]
    fn status_line_prefers_the_failure_message_over_help() {
        let mut app = app_with(&["cat"]);
        let view = rendered(&mut app, 80, 8);
        assert!(view.contains("Enter: Launch"));

        app.status = Some("Failed to launch cat".to_owned());
        let view = rendered(&mut app, 80, 8);
        assert!(view.contains("Failed to launch cat"));
    }

    #[test]
    fn list_scrolls_to_keep_the_highlight_visible() {
        let names: Vec<String> = (0..20).map(|i| format!("prog{i:02}")).collect();
        let mut app = App::new(names, UiSettings::default());

        // Establish the viewport height, then walk past the bottom edge.
        let _ = rendered(&mut app, 30, 6);
        for _ in 0..7 {
            app.handle_key(KeyEvent::from(KeyCode::Down));
        }
        let view = rendered(&mut app, 30, 6);
        assert!(view.contains("prog07"));
        assert!(!view.contains("prog00"));
    }

    #[test]
    fn long_names_are_clipped_with_an_ellipsis() {
        assert_eq!(truncate_to_width("short", 10), "short");
        assert_eq!(truncate_to_width("averylongprogramname", 8), "averylo…");
    }

    #[test]
    fn overlay_rect_centers_and_clamps() {
        let area = Rect::new(0, 0, 80, 24);
        let overlay = overlay_rect(area, 40, 10);
        assert_eq!(overlay, Rect::new(20, 7, 40, 10));

        let small = Rect::new(0, 0, 20, 4);
        let clamped = overlay_rect(small, 40, 10);
        assert_eq!(clamped, Rect::new(0, 0, 20, 4));
    }
}
