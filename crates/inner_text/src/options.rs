/// Nesting depth at which browsers stop nesting elements while parsing.
pub const DEFAULT_MAX_DEPTH: usize = 512;

/// Tuning for a single inner text computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InnerTextOptions {
    /// Nodes more than this many levels below the root contribute nothing.
    /// Bounds recursion when walking untrusted markup.
    pub max_depth: usize,
}

impl InnerTextOptions {
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for InnerTextOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
