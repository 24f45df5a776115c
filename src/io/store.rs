use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::model::{Priority, Task};

/// Error type for task store persistence
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("could not read {path}: {source}")]
    ReadError { path: PathBuf, source: io::Error },
    #[error("could not write {path}: {source}")]
    WriteError { path: PathBuf, source: io::Error },
    #[error("could not serialize tasks: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// Ordered task storage addressed by position.
///
/// Implementors provide access to the backing list and a way to persist it;
/// the mutation methods are shared. Every mutation saves before returning,
/// and index-based calls with an out-of-range index do nothing.
pub trait TaskStore {
    /// All tasks in store order
    fn list(&self) -> &[Task];

    fn tasks_mut(&mut self) -> &mut Vec<Task>;

    /// Write the current list to durable storage
    fn save(&mut self) -> Result<(), StoreError>;

    /// Append a new TODO task
    fn create(&mut self, title: &str, priority: Priority) -> Result<Task, StoreError> {
        let task = Task::new(title.trim(), priority);
        self.tasks_mut().push(task.clone());
        self.save()?;
        Ok(task)
    }

    /// Replace a task's title. Blank titles are ignored.
    fn update_title(&mut self, index: usize, title: &str) -> Result<(), StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Ok(());
        }
        match self.tasks_mut().get_mut(index) {
            Some(task) => task.title = title.to_string(),
            None => return Ok(()),
        }
        self.save()
    }

    fn update_priority(&mut self, index: usize, priority: Priority) -> Result<(), StoreError> {
        match self.tasks_mut().get_mut(index) {
            Some(task) => task.priority = priority,
            None => return Ok(()),
        }
        self.save()
    }

    /// Flip TODO <-> DONE
    fn toggle_status(&mut self, index: usize) -> Result<(), StoreError> {
        match self.tasks_mut().get_mut(index) {
            Some(task) => task.status = task.status.toggled(),
            None => return Ok(()),
        }
        self.save()
    }

    /// Remove a task; later tasks shift down by one
    fn delete(&mut self, index: usize) -> Result<(), StoreError> {
        let tasks = self.tasks_mut();
        if index >= tasks.len() {
            return Ok(());
        }
        tasks.remove(index);
        self.save()
    }
}

/// Task store backed by a pretty-printed JSON array on disk
#[derive(Debug)]
pub struct JsonTaskStore {
    path: PathBuf,
    tasks: Vec<Task>,
    /// The file on disk could not be read as a task list; copy it aside
    /// before the first save replaces it.
    backup_pending: bool,
}

impl JsonTaskStore {
    /// Load the store at `path`.
    ///
    /// A missing file or one that does not parse as a task list opens as an
    /// empty store. Other read failures are errors.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let (tasks, backup_pending) = match fs::read_to_string(path) {
            Ok(content) => match parse_tasks(path, &content) {
                Some(tasks) => (tasks, false),
                None => (Vec::new(), true),
            },
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no task file yet, starting empty");
                (Vec::new(), false)
            }
            Err(e) => {
                return Err(StoreError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                });
            }
        };
        Ok(JsonTaskStore {
            path: path.to_path_buf(),
            tasks,
            backup_pending,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Where an unreadable task file is kept: `<file>.bak` next to it
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.clone().into_os_string();
        name.push(".bak");
        PathBuf::from(name)
    }
}

fn parse_tasks(path: &Path, content: &str) -> Option<Vec<Task>> {
    match serde_json::from_str::<Vec<Task>>(content) {
        Ok(tasks) => {
            tracing::debug!(path = %path.display(), count = tasks.len(), "loaded tasks");
            Some(tasks)
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "task file is malformed, starting empty"
            );
            None
        }
    }
}

impl TaskStore for JsonTaskStore {
    fn list(&self) -> &[Task] {
        &self.tasks
    }

    fn tasks_mut(&mut self) -> &mut Vec<Task> {
        &mut self.tasks
    }

    fn save(&mut self) -> Result<(), StoreError> {
        if self.backup_pending {
            let backup = self.backup_path();
            fs::copy(&self.path, &backup).map_err(|e| StoreError::WriteError {
                path: backup.clone(),
                source: e,
            })?;
            tracing::warn!(
                backup = %backup.display(),
                "kept a copy of the unreadable task file"
            );
            self.backup_pending = false;
        }
        let content = serde_json::to_string_pretty(&self.tasks)?;
        atomic_write(&self.path, content.as_bytes()).map_err(|e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        })?;
        tracing::debug!(path = %self.path.display(), count = self.tasks.len(), "saved tasks");
        Ok(())
    }
}

/// Create the parent directory of `path` if it does not exist yet
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() && !dir.exists() => fs::create_dir_all(dir),
        _ => Ok(()),
    }
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
