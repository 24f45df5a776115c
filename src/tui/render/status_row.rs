use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, ChoiceTarget, Mode, TextTarget};
use crate::util::unicode::{display_width, tail_to_width, truncate_to_width};

pub const KEY_HINTS: &str = "a:Add  e:Edit  p:Priority  s:Sort Priority  c:Sort Date  Space:Toggle  d:Delete  t:Todo  f:Done  q:Quit";

const PRIORITY_CHOICES: &str = "1:Low  2:Medium  3:High";

/// Render the status row (bottom of screen): key hints, a transient
/// message, or the active prompt.
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let line = match &app.mode {
        Mode::Navigate => {
            if let Some(ref msg) = app.status_message {
                let fg = if app.status_is_error {
                    app.theme.red
                } else {
                    app.theme.text_bright
                };
                Line::from(Span::styled(
                    truncate_to_width(msg, width),
                    Style::default().fg(fg).bg(bg),
                ))
            } else {
                Line::from(Span::styled(
                    truncate_to_width(KEY_HINTS, width),
                    Style::default().fg(app.theme.dim).bg(bg),
                ))
            }
        }
        Mode::PromptText { target, buffer } => {
            let label = match target {
                TextTarget::NewTask => "New task: ",
                TextTarget::Title { .. } => "Edit title: ",
            };
            // Label + cursor cell, then as much of the buffer's tail as fits
            let room = width.saturating_sub(display_width(label) + 1);
            let spans = vec![
                Span::styled(
                    label,
                    Style::default()
                        .fg(app.theme.highlight)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    tail_to_width(buffer, room),
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
                // cursor
                Span::styled("\u{258C}", Style::default().fg(app.theme.highlight).bg(bg)),
            ];
            with_right_hint(app, spans, "Enter confirm  Esc cancel", width)
        }
        Mode::PromptChoice { target } => {
            let label = match target {
                ChoiceTarget::NewTask { .. } => "Priority: ".to_string(),
                ChoiceTarget::Priority { current, .. } => {
                    format!("Priority (now {}): ", current)
                }
            };
            let spans = vec![
                Span::styled(
                    label,
                    Style::default()
                        .fg(app.theme.highlight)
                        .bg(bg)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    PRIORITY_CHOICES,
                    Style::default().fg(app.theme.text_bright).bg(bg),
                ),
            ];
            with_right_hint(app, spans, "Esc cancel", width)
        }
    };

    let paragraph = Paragraph::new(line).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// Right-align a dim hint after `spans` if there is room for it
fn with_right_hint<'a>(
    app: &App,
    mut spans: Vec<Span<'a>>,
    hint: &'a str,
    width: usize,
) -> Line<'a> {
    let bg = app.theme.background;
    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    let hint_width = display_width(hint);
    if content_width + hint_width < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }
    Line::from(spans)
}
