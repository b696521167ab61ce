//! Ordered symbol list shown on the strip.

/// Ordered sequence of symbols.
///
/// Insertion order is display order and defines the index mapping.
/// Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SymbolSet(Vec<String>);

impl SymbolSet {
    /// The catch-all marker appended after the Latin letters.
    pub const CATCH_ALL: &'static str = "#";

    /// Create from any iterable of strings.
    pub fn new<I, S>(symbols: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(symbols.into_iter().map(Into::into).collect())
    }

    /// `A` through `Z` followed by `#`.
    pub fn latin() -> Self {
        let mut symbols: Vec<String> = ('A'..='Z').map(|c| c.to_string()).collect();
        symbols.push(Self::CATCH_ALL.to_string());
        Self(symbols)
    }

    /// Parse a comma-separated list (`"A,B,C"`). Blank items are dropped.
    pub fn parse_list(list: &str) -> Self {
        Self(
            list.split(',')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect(),
        )
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there is nothing to draw or hit.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Symbol at `index`.
    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Iterate in display order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl From<Vec<String>> for SymbolSet {
    fn from(symbols: Vec<String>) -> Self {
        Self(symbols)
    }
}
