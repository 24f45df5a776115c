use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{Task, TaskStatus};
use crate::tui::app::App;
use crate::util::unicode::fit_to_width;

/// Cells used by everything on a row except the title:
/// marker (3) + gaps (3) + "(YYYY-MM-DD)" (12) + priority column (8)
const FIXED_COLUMNS: usize = 26;

/// Width of the right-aligned priority column ("[MEDIUM]")
const PRIORITY_WIDTH: usize = 8;

/// Checkbox-style status marker
fn status_marker(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "[ ]",
        TaskStatus::Done => "[\u{2713}]",
    }
}

/// Render the visible page of the display list plus the scrollbar
pub fn render_task_list(frame: &mut Frame, app: &App, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let bg = app.theme.background;
    let entries = app.display_list();

    if entries.is_empty() {
        let msg = if app.filter.is_active() {
            " No matching tasks"
        } else {
            " No tasks"
        };
        let empty = Paragraph::new(msg).style(Style::default().fg(app.theme.dim).bg(bg));
        frame.render_widget(empty, area);
        return;
    }

    let page = area.height as usize;
    // Last column is reserved for the scrollbar
    let content_width = (area.width as usize).saturating_sub(1);
    let top = app.selection.top_line.min(entries.len() - 1);
    let end = entries.len().min(top + page);

    let lines: Vec<Line> = entries[top..end]
        .iter()
        .zip(top..end)
        .map(|(entry, row)| {
            render_task_line(app, entry.task, row == app.selection.current_row, content_width)
        })
        .collect();

    let list_area = Rect {
        width: content_width as u16,
        ..area
    };
    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), list_area);

    if let Some((thumb_top, thumb_len)) = scrollbar_thumb(entries.len(), page, top) {
        render_scrollbar(frame, app, area, thumb_top, thumb_len);
    }
}

/// One task row: marker, title, date, priority
fn render_task_line<'a>(app: &'a App, task: &Task, is_cursor: bool, width: usize) -> Line<'a> {
    let theme = &app.theme;
    let bg = if is_cursor {
        theme.selection_bg
    } else {
        theme.background
    };
    let base = Style::default().fg(theme.text).bg(bg);
    let title_style = if is_cursor {
        base.fg(theme.text_bright).add_modifier(Modifier::BOLD)
    } else if task.is_done() {
        base.fg(theme.dim)
    } else {
        base
    };

    let title_width = width.saturating_sub(FIXED_COLUMNS);
    let priority = format!("[{}]", task.priority.label());

    let spans = vec![
        Span::styled(
            status_marker(task.status),
            base.fg(theme.status_color(task.status)),
        ),
        Span::styled(" ", base),
        Span::styled(fit_to_width(&task.title, title_width), title_style),
        Span::styled(" ", base),
        Span::styled(format!("({})", task.date_label()), base.fg(theme.dim)),
        Span::styled(" ", base),
        Span::styled(
            format!("{:>width$}", priority, width = PRIORITY_WIDTH),
            base.fg(theme.priority_color(task.priority)),
        ),
    ];
    Line::from(spans)
}

/// Position and length of the scrollbar thumb, or None when everything fits
/// on one page. The thumb is proportional to the visible fraction of the list.
pub(super) fn scrollbar_thumb(
    len: usize,
    page: usize,
    top_line: usize,
) -> Option<(usize, usize)> {
    if page == 0 || len <= page {
        return None;
    }
    let thumb_len = (page * page / len).max(1);
    let thumb_top = (page - thumb_len) * top_line / (len - page).max(1);
    Some((thumb_top.min(page - thumb_len), thumb_len))
}

fn render_scrollbar(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    thumb_top: usize,
    thumb_len: usize,
) {
    let rail = Style::default().fg(app.theme.dim).bg(app.theme.background);
    let thumb = Style::default().fg(app.theme.highlight).bg(app.theme.background);
    let lines: Vec<Line> = (0..area.height as usize)
        .map(|row| {
            if row >= thumb_top && row < thumb_top + thumb_len {
                Line::from(Span::styled("\u{2588}", thumb))
            } else {
                Line::from(Span::styled("\u{2502}", rail))
            }
        })
        .collect();
    let bar_area = Rect {
        x: area.x + area.width - 1,
        width: 1,
        ..area
    };
    frame.render_widget(Paragraph::new(lines), bar_area);
}
