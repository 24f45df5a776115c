use crate::model::{FilterSetting, SortSetting, Task};

/// A task as it appears in the list, tagged with its position in the store
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayEntry<'a> {
    /// Index into the unfiltered, unsorted task list
    pub index: usize,
    pub task: &'a Task,
}

/// Build the display list: filter by status, then stable-sort.
///
/// Equal keys keep their store order in both directions, so repeated calls
/// with the same inputs always produce the same sequence.
pub fn project(tasks: &[Task], filter: FilterSetting, sort: SortSetting) -> Vec<DisplayEntry<'_>> {
    let mut entries: Vec<DisplayEntry<'_>> = tasks
        .iter()
        .enumerate()
        .filter(|(_, task)| filter.matches(task.status))
        .map(|(index, task)| DisplayEntry { index, task })
        .collect();

    match sort {
        SortSetting::None => {}
        SortSetting::PriorityAsc => entries.sort_by(|a, b| a.task.priority.cmp(&b.task.priority)),
        SortSetting::PriorityDesc => entries.sort_by(|a, b| b.task.priority.cmp(&a.task.priority)),
        SortSetting::DateAsc => {
            entries.sort_by(|a, b| a.task.creation_date.cmp(&b.task.creation_date))
        }
        SortSetting::DateDesc => {
            entries.sort_by(|a, b| b.task.creation_date.cmp(&a.task.creation_date))
        }
    }

    entries
}

/// Resolve a display row to the store index of the task shown there
pub fn original_index(
    tasks: &[Task],
    filter: FilterSetting,
    sort: SortSetting,
    row: usize,
) -> Option<usize> {
    project(tasks, filter, sort).get(row).map(|e| e.index)
}
