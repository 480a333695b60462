use std::sync::Arc;

/// Local view of one REST collection.
///
/// `items` is swapped for a fresh allocation on every successful mutation and
/// left alone on failure, so callers holding an earlier snapshot can tell
/// whether anything changed with [`Arc::ptr_eq`].
#[derive(Debug)]
pub struct ListState<T> {
    pub items: Arc<Vec<T>>,
    pub loading: bool,
    /// Set by the first successful `load`.
    pub loaded: bool,
    /// User-facing message of the last failed operation.
    pub error: Option<String>,
}

impl<T> Clone for ListState<T> {
    fn clone(&self) -> Self {
        Self {
            items: Arc::clone(&self.items),
            loading: self.loading,
            loaded: self.loaded,
            error: self.error.clone(),
        }
    }
}

impl<T> Default for ListState<T> {
    fn default() -> Self {
        Self {
            items: Arc::new(Vec::new()),
            loading: false,
            loaded: false,
            error: None,
        }
    }
}

/// The branch a view renders.
#[derive(Debug, PartialEq)]
pub enum ViewPhase<'a, T> {
    Loading,
    Error(&'a str),
    Empty,
    Populated(&'a [T]),
}

impl<T> ListState<T> {
    /// A loaded state holding `items`.
    pub fn with_items(items: Vec<T>) -> Self {
        Self {
            items: Arc::new(items),
            loaded: true,
            ..Self::default()
        }
    }

    pub fn phase(&self) -> ViewPhase<'_, T> {
        if self.loading {
            return ViewPhase::Loading;
        }
        if let Some(message) = &self.error {
            return ViewPhase::Error(message);
        }
        if !self.loaded {
            return ViewPhase::Loading;
        }
        if self.items.is_empty() {
            ViewPhase::Empty
        } else {
            ViewPhase::Populated(&self.items)
        }
    }
}
