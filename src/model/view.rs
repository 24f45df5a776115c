use serde::{Deserialize, Serialize};

use super::task::TaskStatus;

/// Which tasks the list shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FilterSetting {
    #[default]
    All,
    Todo,
    Done,
}

impl FilterSetting {
    /// The status this filter keeps, or None when every task is shown
    pub fn status(self) -> Option<TaskStatus> {
        match self {
            FilterSetting::All => None,
            FilterSetting::Todo => Some(TaskStatus::Todo),
            FilterSetting::Done => Some(TaskStatus::Done),
        }
    }

    pub fn matches(self, status: TaskStatus) -> bool {
        self.status().is_none_or(|s| s == status)
    }

    pub fn is_active(self) -> bool {
        self != FilterSetting::All
    }

    /// Switch between showing everything and showing only `target`
    pub fn toggled(self, target: FilterSetting) -> FilterSetting {
        if self == target {
            FilterSetting::All
        } else {
            target
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FilterSetting::All => "All Tasks",
            FilterSetting::Todo => "Todo Tasks",
            FilterSetting::Done => "Done Tasks",
        }
    }
}

/// Display order of the list. Only one axis is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortSetting {
    #[default]
    None,
    PriorityAsc,
    PriorityDesc,
    DateAsc,
    DateDesc,
}

impl SortSetting {
    /// Next step of the priority cycle: asc → desc → none → asc.
    /// Any date sort restarts the cycle at asc.
    pub fn cycle_priority(self) -> SortSetting {
        match self {
            SortSetting::PriorityAsc => SortSetting::PriorityDesc,
            SortSetting::PriorityDesc => SortSetting::None,
            _ => SortSetting::PriorityAsc,
        }
    }

    /// Next step of the date cycle: asc → desc → none → asc.
    /// Any priority sort restarts the cycle at asc.
    pub fn cycle_date(self) -> SortSetting {
        match self {
            SortSetting::DateAsc => SortSetting::DateDesc,
            SortSetting::DateDesc => SortSetting::None,
            _ => SortSetting::DateAsc,
        }
    }

    /// Header indicator, e.g. "Sort: Priority ↓". None when unsorted.
    pub fn indicator(self) -> Option<&'static str> {
        match self {
            SortSetting::None => None,
            SortSetting::PriorityAsc => Some("Sort: Priority \u{2191}"),
            SortSetting::PriorityDesc => Some("Sort: Priority \u{2193}"),
            SortSetting::DateAsc => Some("Sort: Date \u{2191}"),
            SortSetting::DateDesc => Some("Sort: Date \u{2193}"),
        }
    }
}
