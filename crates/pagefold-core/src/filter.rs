//! Post-processing hook applied to composed output

/// A filter applied to the composed document after layout inheritance.
///
/// Implemented by any `Fn(String) -> String`, so callers can pass a
/// closure directly.
pub trait ContentFilter {
    /// Transform the composed text.
    fn filter(&self, content: String) -> String;
}

impl<F> ContentFilter for F
where
    F: Fn(String) -> String,
{
    fn filter(&self, content: String) -> String {
        self(content)
    }
}
