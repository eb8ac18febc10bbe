//! Page-level fetch state machine.
//!
//! Each page holds exactly one `PageState` per fetch stage, replacing the
//! independent loading/error/data flags that allow impossible combinations
//! (loading while errored, data alongside an error banner, and so on).

/// Lifecycle of a single page-level fetch.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PageState<T> {
    /// No fetch attempted yet.
    #[default]
    Uninitialized,
    /// Request in flight.
    Loading,
    /// Fetch finished; holds the data.
    Ready(T),
    /// Fetch failed; holds the user-facing message.
    Error(String),
    /// Domain empty state ("no golf clubs configured"). Distinct from
    /// `Error`: pages render a hint here, never an error banner.
    EmptyBag,
}

impl<T> PageState<T> {
    pub fn is_uninitialized(&self) -> bool {
        matches!(self, PageState::Uninitialized)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, PageState::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, PageState::Ready(_))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, PageState::Error(_))
    }

    pub fn is_empty_bag(&self) -> bool {
        matches!(self, PageState::EmptyBag)
    }

    /// The data, if the fetch is ready.
    pub fn ready(&self) -> Option<&T> {
        match self {
            PageState::Ready(data) => Some(data),
            _ => None,
        }
    }

    /// The failure message, if the fetch errored.
    pub fn error(&self) -> Option<&str> {
        match self {
            PageState::Error(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_uninitialized() {
        let state: PageState<i32> = PageState::default();
        assert!(state.is_uninitialized());
        assert!(!state.is_loading());
        assert!(!state.is_ready());
    }

    #[test]
    fn ready_exposes_data() {
        let state = PageState::Ready(42);
        assert!(state.is_ready());
        assert_eq!(state.ready(), Some(&42));
        assert_eq!(state.error(), None);
    }

    #[test]
    fn error_exposes_message() {
        let state: PageState<i32> = PageState::Error("boom".to_string());
        assert!(state.is_error());
        assert_eq!(state.error(), Some("boom"));
        assert_eq!(state.ready(), None);
    }

    #[test]
    fn empty_bag_is_not_an_error() {
        let state: PageState<i32> = PageState::EmptyBag;
        assert!(state.is_empty_bag());
        assert!(!state.is_error());
        assert_eq!(state.error(), None);
    }

    #[test]
    fn loading_has_neither_data_nor_error() {
        let state: PageState<i32> = PageState::Loading;
        assert!(state.is_loading());
        assert_eq!(state.ready(), None);
        assert_eq!(state.error(), None);
    }
}
