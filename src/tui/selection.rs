/// Cursor and scroll position within the display list.
///
/// `current_row` indexes the display list (0 when it is empty) and
/// `top_line` is the first visible row. All operations are total: an empty
/// list is an inert but valid state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub current_row: usize,
    pub top_line: usize,
}

impl SelectionState {
    /// Move the cursor by `delta` rows, scrolling one row at a time when it
    /// would leave the visible window.
    pub fn move_by(&mut self, delta: isize, len: usize, page_size: usize) {
        if len == 0 {
            *self = SelectionState::default();
            return;
        }
        let last = len - 1;
        let target = self.current_row.saturating_add_signed(delta).min(last);
        if target == self.current_row {
            return;
        }
        let page_size = page_size.max(1);
        let shift = target.abs_diff(self.current_row);
        self.current_row = target;
        if self.current_row < self.top_line {
            self.top_line = self.top_line.saturating_sub(shift);
        } else if self.current_row >= self.top_line + page_size {
            self.top_line += shift;
        }
    }

    /// Back to the first row, scrolled to the top
    pub fn reset(&mut self) {
        self.current_row = 0;
        self.top_line = 0;
    }

    /// Re-validate after the display list may have shrunk.
    ///
    /// The cursor is pulled back onto the last row if it fell off the end;
    /// `top_line` only ever moves up here.
    pub fn reclamp(&mut self, new_len: usize, page_size: usize) {
        if self.current_row >= new_len {
            self.current_row = new_len.saturating_sub(1);
        }
        if self.top_line > self.current_row {
            self.top_line = self.current_row;
        }
        self.ensure_visible(page_size);
    }

    /// Scroll forward the minimum amount so the cursor is inside a page of
    /// `page_size` rows (needed after the terminal shrinks).
    pub fn ensure_visible(&mut self, page_size: usize) {
        let page_size = page_size.max(1);
        if self.top_line > self.current_row {
            self.top_line = self.current_row;
        }
        if self.current_row >= self.top_line + page_size {
            self.top_line = self.current_row + 1 - page_size;
        }
    }
}
