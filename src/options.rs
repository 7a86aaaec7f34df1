// Author: Dustin Pilgrim
// License: MIT

/// Nesting limit used by [`crate::parse`].
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 64;

/// Knobs for [`crate::parse_with_options`].
///
/// `max_nesting_depth` bounds how many list brackets may be open at once.
/// A list written directly as a pair value is depth 1, so a limit of `N`
/// accepts `N` nested `[` and rejects the `N + 1`th.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    pub max_nesting_depth: usize,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
        }
    }
}

impl ParseOptions {
    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }
}
