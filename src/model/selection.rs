//! Selection change events emitted by the strip.

/// Result of resolving a pointer position to a symbol.
///
/// Emitted to the registered listener whenever the resolved index changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Pointer is outside every cell, or the gesture ended.
    Cleared,

    /// Pointer is over a symbol.
    Selected {
        /// Index into the symbol set.
        index: usize,
        /// The symbol at `index`.
        symbol: String,
    },
}

impl Selection {
    /// Sentinel index reported for [`Selection::Cleared`].
    pub const NO_INDEX: i32 = -1;

    /// Create a selected event.
    pub fn selected(index: usize, symbol: impl Into<String>) -> Self {
        Self::Selected {
            index,
            symbol: symbol.into(),
        }
    }

    /// Index in the `(index, symbol)` listener form: `-1` when cleared.
    pub fn raw_index(&self) -> i32 {
        match self {
            Self::Cleared => Self::NO_INDEX,
            Self::Selected { index, .. } => i32::try_from(*index).unwrap_or(i32::MAX),
        }
    }

    /// Index if a symbol is selected.
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Cleared => None,
            Self::Selected { index, .. } => Some(*index),
        }
    }

    /// Symbol if one is selected.
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Self::Cleared => None,
            Self::Selected { symbol, .. } => Some(symbol),
        }
    }

    /// True for [`Selection::Cleared`].
    pub fn is_cleared(&self) -> bool {
        matches!(self, Self::Cleared)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cleared_reports_sentinel() {
        let s = Selection::Cleared;
        assert_eq!(s.raw_index(), -1);
        assert_eq!(s.index(), None);
        assert_eq!(s.symbol(), None);
        assert!(s.is_cleared());
    }

    #[test]
    fn selected_reports_index_and_symbol() {
        let s = Selection::selected(1, "B");
        assert_eq!(s.raw_index(), 1);
        assert_eq!(s.index(), Some(1));
        assert_eq!(s.symbol(), Some("B"));
        assert!(!s.is_cleared());
    }
}
