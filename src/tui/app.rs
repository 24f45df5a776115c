use std::io;
use std::path::Path;
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::io::store::{JsonTaskStore, StoreError, TaskStore, ensure_parent_dir};
use crate::model::{Config, FilterSetting, Priority, SortSetting, Task};
use crate::ops::view_ops::{self, DisplayEntry};

use super::input;
use super::render;
use super::selection::SelectionState;
use super::theme::Theme;

/// Rows taken by the header (3) and footer (1) around the task list
pub const CHROME_ROWS: u16 = 4;

/// Poll timeout; short so resizes are picked up promptly
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// What a text prompt is collecting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextTarget {
    /// Title for a task that does not exist yet
    NewTask,
    /// Replacement title for the task at store index `index`
    Title { index: usize, original: String },
}

/// What a single-key choice prompt is collecting
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChoiceTarget {
    /// Initial priority for a new task with an already confirmed title
    NewTask { title: String },
    /// New priority for the task at store index `index`
    Priority { index: usize, current: Priority },
}

/// Current interaction mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    PromptText { target: TextTarget, buffer: String },
    PromptChoice { target: ChoiceTarget },
}

/// Main application state
pub struct App {
    pub store: Box<dyn TaskStore>,
    pub mode: Mode,
    pub filter: FilterSetting,
    pub sort: SortSetting,
    pub selection: SelectionState,
    /// Rows available for tasks in the last frame
    pub page_size: usize,
    pub should_quit: bool,
    pub theme: Theme,
    /// Transient message shown in the footer until the next key press
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl App {
    pub fn new(store: Box<dyn TaskStore>, config: &Config) -> Self {
        App {
            store,
            mode: Mode::Navigate,
            filter: config.view.filter,
            sort: config.view.sort,
            selection: SelectionState::default(),
            page_size: 1,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            status_message: None,
            status_is_error: false,
        }
    }

    pub fn tasks(&self) -> &[Task] {
        self.store.list()
    }

    /// The filtered and sorted list as it is shown right now
    pub fn display_list(&self) -> Vec<DisplayEntry<'_>> {
        view_ops::project(self.store.list(), self.filter, self.sort)
    }

    pub fn display_len(&self) -> usize {
        self.display_list().len()
    }

    /// Store index of the task under the cursor
    pub fn selected_index(&self) -> Option<usize> {
        view_ops::original_index(
            self.store.list(),
            self.filter,
            self.sort,
            self.selection.current_row,
        )
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected_index().and_then(|i| self.store.list().get(i))
    }

    /// Record the rows available for tasks and keep the cursor on screen
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.selection.ensure_visible(self.page_size);
    }

    /// Re-validate the selection against the current display list
    pub fn reclamp(&mut self) {
        let len = self.display_len();
        self.selection.reclamp(len, self.page_size);
    }

    /// Surface a failed save in the footer; the in-memory change stands.
    pub fn report_store_result<T>(&mut self, result: Result<T, StoreError>) {
        if let Err(e) = result {
            tracing::error!(error = %e, "save failed");
            self.status_message = Some(format!("save failed: {}", e));
            self.status_is_error = true;
        }
    }

    pub fn is_prompting(&self) -> bool {
        !matches!(self.mode, Mode::Navigate)
    }
}

/// Number of task rows that fit in a terminal of the given height
pub fn list_height(term_height: u16) -> usize {
    term_height.saturating_sub(CHROME_ROWS) as usize
}

/// Run the TUI application against the task file at `path`
pub fn run(path: &Path, config: Config) -> Result<(), Box<dyn std::error::Error>> {
    ensure_parent_dir(path)?;
    let store = JsonTaskStore::open(path)?;
    tracing::info!(path = %path.display(), tasks = store.list().len(), "starting");

    let mut app = App::new(Box::new(store), &config);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    tracing::info!("exiting");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        let size = terminal.size()?;
        app.set_page_size(list_height(size.height));
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(POLL_INTERVAL)? {
            let event = event::read()?;
            if matches!(event, Event::Resize(..)) {
                terminal.clear()?;
            }
            input::handle_event(app, event);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
