// Selectable list state.
// Tracks loading status and keyboard selection for a list of cafes.

use ratatui::widgets::ListState;

/// Loading state for async data.
#[derive(Debug, Clone, Default)]
pub enum LoadingState<T> {
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Error(String),
}

impl<T> LoadingState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadingState::Loading)
    }

    pub fn data(&self) -> Option<&T> {
        match self {
            LoadingState::Loaded(data) => Some(data),
            _ => None,
        }
    }
}

/// State for a selectable list with keyboard navigation.
#[derive(Debug, Clone)]
pub struct SelectableList<T> {
    pub data: LoadingState<Vec<T>>,
    pub list_state: ListState,
}

impl<T> Default for SelectableList<T> {
    fn default() -> Self {
        Self {
            data: LoadingState::Idle,
            list_state: ListState::default(),
        }
    }
}

impl<T> SelectableList<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of loaded items.
    pub fn len(&self) -> usize {
        self.data.data().map_or(0, Vec::len)
    }

    /// Select the next item in the list.
    pub fn select_next(&mut self) {
        let len = self.len();
        if len == 0 {
            return;
        }
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            Some(i) => i, // Stay at end
            None => 0,
        };
        self.list_state.select(Some(i));
    }

    /// Select the previous item in the list.
    pub fn select_prev(&mut self) {
        if self.len() == 0 {
            return;
        }
        let i = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(i));
    }

    /// Get the selected item.
    pub fn selected_item(&self) -> Option<&T> {
        let index = self.list_state.selected()?;
        self.data.data()?.get(index)
    }

    /// Set loaded data and select the first item.
    pub fn set_loaded(&mut self, items: Vec<T>) {
        let first = (!items.is_empty()).then_some(0);
        self.data = LoadingState::Loaded(items);
        self.list_state.select(first);
    }

    pub fn set_loading(&mut self) {
        self.data = LoadingState::Loading;
    }

    pub fn set_error(&mut self, error: String) {
        self.data = LoadingState::Error(error);
        self.list_state.select(None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_bounds() {
        let mut list = SelectableList::new();
        list.select_next();
        assert_eq!(list.selected_item(), None::<&u32>);

        list.set_loaded(vec![10, 20, 30]);
        assert_eq!(list.selected_item(), Some(&10));

        list.select_prev();
        assert_eq!(list.selected_item(), Some(&10));

        list.select_next();
        list.select_next();
        list.select_next();
        assert_eq!(list.selected_item(), Some(&30));
    }

    #[test]
    fn test_empty_load_has_no_selection() {
        let mut list: SelectableList<u32> = SelectableList::new();
        list.set_loaded(Vec::new());
        assert!(list.list_state.selected().is_none());
        assert!(list.data.data().is_some());
    }

    #[test]
    fn test_error_clears_selection() {
        let mut list = SelectableList::new();
        list.set_loaded(vec![1]);
        list.set_error("boom".to_string());
        assert!(list.selected_item().is_none());
        assert_eq!(list.len(), 0);
    }
}
