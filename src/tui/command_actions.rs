//! Effects of the navigation-mode commands on the store and selection.

use crate::model::{FilterSetting, Priority};

use super::app::{App, ChoiceTarget, Mode, TextTarget};

/// Move the cursor one row up (`-1`) or down (`+1`)
pub fn move_selection(app: &mut App, delta: isize) {
    let len = app.display_len();
    app.selection.move_by(delta, len, app.page_size);
}

/// Open the title prompt for a new task
pub fn begin_add(app: &mut App) {
    app.mode = Mode::PromptText {
        target: TextTarget::NewTask,
        buffer: String::new(),
    };
}

/// Open the title prompt seeded with the selected task's title
pub fn begin_edit_title(app: &mut App) {
    let Some(index) = app.selected_index() else {
        return;
    };
    let original = app.tasks()[index].title.clone();
    app.mode = Mode::PromptText {
        target: TextTarget::Title {
            index,
            original: original.clone(),
        },
        buffer: original,
    };
}

/// Open the priority choice for the selected task
pub fn begin_edit_priority(app: &mut App) {
    let Some(index) = app.selected_index() else {
        return;
    };
    let current = app.tasks()[index].priority;
    app.mode = Mode::PromptChoice {
        target: ChoiceTarget::Priority { index, current },
    };
}

/// Append a new TODO task. The selection is left where it was.
pub fn add_task(app: &mut App, title: &str, priority: Priority) {
    tracing::debug!(title, %priority, "add task");
    let result = app.store.create(title, priority);
    app.report_store_result(result);
}

/// Set a new title if it differs from the current one
pub fn update_title(app: &mut App, index: usize, original: &str, title: &str) {
    let title = title.trim();
    // Stored titles may carry stray whitespace; that alone is not an edit
    if title.is_empty() || title == original.trim() {
        return;
    }
    tracing::debug!(index, title, "edit title");
    let result = app.store.update_title(index, title);
    app.report_store_result(result);
}

pub fn update_priority(app: &mut App, index: usize, current: Priority, priority: Priority) {
    if priority == current {
        return;
    }
    tracing::debug!(index, %priority, "edit priority");
    let result = app.store.update_priority(index, priority);
    app.report_store_result(result);
}

/// Flip the selected task between TODO and DONE.
///
/// Under a status filter the task drops out of the list, so the cursor is
/// re-validated afterwards.
pub fn toggle_selected(app: &mut App) {
    let Some(index) = app.selected_index() else {
        return;
    };
    tracing::debug!(index, "toggle status");
    let result = app.store.toggle_status(index);
    app.report_store_result(result);
    if app.filter.is_active() {
        app.reclamp();
    }
}

/// Delete the selected task and re-validate the cursor
pub fn delete_selected(app: &mut App) {
    let Some(index) = app.selected_index() else {
        return;
    };
    tracing::debug!(index, "delete task");
    let result = app.store.delete(index);
    app.report_store_result(result);
    app.reclamp();
}

/// Toggle between showing everything and showing only `target`
pub fn toggle_filter(app: &mut App, target: FilterSetting) {
    app.filter = app.filter.toggled(target);
    app.selection.reset();
    tracing::debug!(filter = ?app.filter, "filter changed");
}

pub fn cycle_priority_sort(app: &mut App) {
    app.sort = app.sort.cycle_priority();
    app.selection.reset();
    tracing::debug!(sort = ?app.sort, "sort changed");
}

pub fn cycle_date_sort(app: &mut App) {
    app.sort = app.sort.cycle_date();
    app.selection.reset();
    tracing::debug!(sort = ?app.sort, "sort changed");
}
