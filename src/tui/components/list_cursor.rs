use ratatui::widgets::ListState;

/// Persistent cursor state for a selectable list panel.
///
/// Lives in `TuiState` across frames; the list components borrow it
/// during rendering so ratatui can keep the highlighted row in view.
pub struct ListCursor {
    pub selected: usize,
    pub list_state: ListState,
}

impl ListCursor {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    pub fn up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn down(&mut self, len: usize) {
        if len > 0 {
            self.selected = (self.selected + 1).min(len - 1);
        }
    }

    /// Re-fits the cursor after the underlying list changed length.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.list_state.select(None);
        } else {
            self.selected = self.selected.min(len - 1);
            self.list_state.select(Some(self.selected));
        }
    }

    /// The selected index, if it points at an actual row.
    pub fn selected_in(&self, len: usize) -> Option<usize> {
        (self.selected < len).then_some(self.selected)
    }
}

impl Default for ListCursor {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_bounds() {
        let mut cursor = ListCursor::new();
        cursor.down(3);
        cursor.down(3);
        assert_eq!(cursor.selected, 2);
        cursor.down(3);
        assert_eq!(cursor.selected, 2);
        cursor.up();
        assert_eq!(cursor.selected, 1);
        cursor.up();
        cursor.up();
        assert_eq!(cursor.selected, 0);
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut cursor = ListCursor::new();
        cursor.down(5);
        cursor.down(5);
        cursor.down(5);
        cursor.down(5);
        assert_eq!(cursor.selected, 4);
        cursor.clamp(2);
        assert_eq!(cursor.selected, 1);
        assert_eq!(cursor.list_state.selected(), Some(1));
    }

    #[test]
    fn test_clamp_on_empty_list_deselects() {
        let mut cursor = ListCursor::new();
        cursor.down(3);
        cursor.clamp(0);
        assert_eq!(cursor.selected, 0);
        assert_eq!(cursor.list_state.selected(), None);
        assert_eq!(cursor.selected_in(0), None);
    }

    #[test]
    fn test_selected_in_checks_range() {
        let mut cursor = ListCursor::new();
        cursor.down(2);
        assert_eq!(cursor.selected_in(2), Some(1));
        assert_eq!(cursor.selected_in(1), None);
    }
}
