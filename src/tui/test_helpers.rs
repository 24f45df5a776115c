use std::cell::Cell;
use std::rc::Rc;

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::store::{StoreError, TaskStore};
use crate::model::{Config, Priority, Task, TaskStatus};
use crate::tui::app::App;

/// In-memory store that counts how many times it was asked to persist.
pub struct MemoryStore {
    pub tasks: Vec<Task>,
    pub saves: Rc<Cell<usize>>,
}

impl TaskStore for MemoryStore {
    fn list(&self) -> &[Task] {
        &self.tasks
    }

    fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    fn save(&mut self) -> Result<(), StoreError> {
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}

/// Store that fails every save
pub struct FailingStore {
    pub tasks: Vec<Task>,
}

impl TaskStore for FailingStore {
    fn list(&self) -> &[Task] {
        &self.tasks
    }

    fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    fn save(&mut self) -> Result<(), StoreError> {
        Err(StoreError::WriteError {
            path: "tasks.json".into(),
            source: std::io::Error::other("read-only file system"),
        })
    }
}

/// Noon on the given day of May 2024
pub fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 5, d)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap()
}

pub fn task(title: &str, priority: Priority, status: TaskStatus, d: u32) -> Task {
    Task {
        title: title.into(),
        creation_date: day(d),
        priority,
        status,
    }
}

/// "Task 1" .. "Task n", all LOW/TODO, one day apart
pub fn numbered_tasks(n: usize) -> Vec<Task> {
    (1..=n)
        .map(|i| {
            task(
                &format!("Task {}", i),
                Priority::Low,
                TaskStatus::Todo,
                1 + (i % 28) as u32,
            )
        })
        .collect()
}

/// The three-task store used across the scenario tests
pub fn sample_tasks() -> Vec<Task> {
    vec![
        task("Buy milk", Priority::Low, TaskStatus::Todo, 1),
        task("Fix bug", Priority::High, TaskStatus::Todo, 2),
        task("Pay rent", Priority::Medium, TaskStatus::Done, 3),
    ]
}

/// App over an in-memory store with default config (todo filter,
/// priority descending) and a 20-row page.
pub fn app_with_tasks(tasks: Vec<Task>) -> (App, Rc<Cell<usize>>) {
    let saves = Rc::new(Cell::new(0));
    let store = MemoryStore {
        tasks,
        saves: Rc::clone(&saves),
    };
    let mut app = App::new(Box::new(store), &Config::default());
    app.set_page_size(20);
    (app, saves)
}

pub fn sample_app() -> App {
    app_with_tasks(sample_tasks()).0
}

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ch(c: char) -> KeyEvent {
    key(KeyCode::Char(c))
}

/// Feed every character of `text` as a key press
pub fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        crate::tui::input::handle_key(app, ch(c));
    }
}

pub fn titles(app: &App) -> Vec<String> {
    app.display_list()
        .iter()
        .map(|e| e.task.title.clone())
        .collect()
}

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}
