//! Outcome - a successful value plus the warnings recorded along the way
//!
//! Some operations succeed even though an auxiliary step failed (a secondary
//! profile write, an enrichment lookup). Those failures are not errors of the
//! operation, but callers and tests still need to see them, so they travel
//! next to the value instead of disappearing into a log line.

/// Value produced by an operation together with its non-fatal warnings
///
/// ## Examples
/// ```rust
/// use kernel::outcome::Outcome;
///
/// let mut outcome: Outcome<u32, &str> = Outcome::clean(7);
/// outcome.warn("profile table unavailable");
/// assert!(outcome.has_warnings());
/// assert_eq!(outcome.into_value(), 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome<T, W> {
    value: T,
    warnings: Vec<W>,
}

impl<T, W> Outcome<T, W> {
    /// Outcome without warnings
    #[inline]
    pub fn clean(value: T) -> Self {
        Self {
            value,
            warnings: Vec::new(),
        }
    }

    /// Outcome carrying a single warning
    #[inline]
    pub fn with_warning(value: T, warning: W) -> Self {
        Self {
            value,
            warnings: vec![warning],
        }
    }

    /// Record another warning
    pub fn warn(&mut self, warning: W) {
        self.warnings.push(warning);
    }

    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn warnings(&self) -> &[W] {
        &self.warnings
    }

    #[inline]
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Drop the warnings and keep the value
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, Vec<W>) {
        (self.value, self.warnings)
    }

    /// Transform the value, keeping the warnings
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U, W> {
        Outcome {
            value: f(self.value),
            warnings: self.warnings,
        }
    }
}
