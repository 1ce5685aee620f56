//! Fixture fallback
//!
//! A list read that fails or comes back empty is answered with the fixed
//! fixture set of its collection. Both cases are treated the same; the
//! reason is kept in [`Provenance`] so callers and tests can tell.

use derive_more::Display;

use crate::domain::Collection;
use crate::error::ContentResult;

/// Why fixtures were served instead of remote rows
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum FallbackReason {
    #[display("no rows")]
    Empty,
    #[display("read failed: {_0}")]
    Failed(String),
}

/// Where a list came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Provenance {
    Remote,
    Fallback(FallbackReason),
}

/// List value plus its provenance
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fetched<T> {
    value: T,
    provenance: Provenance,
}

impl<T> Fetched<T> {
    pub fn remote(value: T) -> Self {
        Self {
            value,
            provenance: Provenance::Remote,
        }
    }

    pub fn fallback(value: T, reason: FallbackReason) -> Self {
        Self {
            value,
            provenance: Provenance::Fallback(reason),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn provenance(&self) -> &Provenance {
        &self.provenance
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.provenance, Provenance::Fallback(_))
    }

    pub fn into_value(self) -> T {
        self.value
    }

    pub fn into_parts(self) -> (T, Provenance) {
        (self.value, self.provenance)
    }

    /// Transform the value, keeping the provenance
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Fetched<U> {
        Fetched {
            value: f(self.value),
            provenance: self.provenance,
        }
    }
}

/// Keep non-empty remote rows, otherwise serve `fixtures`
pub(crate) fn with_fallback<T>(
    collection: Collection,
    result: ContentResult<Vec<T>>,
    fixtures: impl FnOnce() -> Vec<T>,
) -> Fetched<Vec<T>> {
    match result {
        Ok(rows) if !rows.is_empty() => {
            tracing::debug!(collection = %collection, count = rows.len(), "Rows fetched");
            Fetched::remote(rows)
        }
        Ok(_) => {
            tracing::warn!(collection = %collection, "No rows, serving fixtures");
            Fetched::fallback(fixtures(), FallbackReason::Empty)
        }
        Err(e) => {
            tracing::warn!(collection = %collection, error = %e, "Read failed, serving fixtures");
            Fetched::fallback(fixtures(), FallbackReason::Failed(e.to_string()))
        }
    }
}

#[cfg(test)]
mod tests {
    use platform::ServiceError;

    use super::*;
    use crate::error::ContentError;

    #[test]
    fn test_remote_rows_kept() {
        let fetched = with_fallback(Collection::Programs, Ok(vec![1, 2]), || vec![9]);
        assert_eq!(fetched.provenance(), &Provenance::Remote);
        assert_eq!(fetched.into_value(), vec![1, 2]);
    }

    #[test]
    fn test_empty_and_error_both_fall_back() {
        let empty = with_fallback(Collection::Projects, Ok(Vec::new()), || vec![9]);
        assert_eq!(empty.provenance(), &Provenance::Fallback(FallbackReason::Empty));
        assert_eq!(empty.value(), &vec![9]);

        let err = ContentError::from(ServiceError::Api {
            status: 500,
            code: None,
            message: "boom".to_string(),
        });
        let failed = with_fallback(Collection::Projects, Err(err), || vec![9]);
        assert!(failed.is_fallback());
        assert_eq!(failed.value(), &vec![9]);
    }

    #[test]
    fn test_fixtures_built_only_when_needed() {
        let fetched = with_fallback(Collection::TopPosts, Ok(vec![1]), || {
            panic!("fixtures must not be built for remote rows")
        });
        assert!(!fetched.is_fallback());
    }

    #[test]
    fn test_map_keeps_provenance() {
        let fetched = Fetched::fallback(vec![1, 2, 3], FallbackReason::Empty).map(|v| v.len());
        assert_eq!(fetched.value(), &3);
        assert!(fetched.is_fallback());
    }
}
