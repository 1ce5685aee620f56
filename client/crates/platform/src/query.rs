//! Table query builder
//!
//! Builds the query string understood by the tabular read API
//! (`select=*&slug=eq.x&order=created_at.desc&limit=5`).

/// A read against one table or view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableQuery {
    table: String,
    select: String,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<usize>,
}

impl TableQuery {
    /// `select=*` on `table`
    pub fn from(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            select: "*".to_string(),
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn select(mut self, columns: impl Into<String>) -> Self {
        self.select = columns.into();
        self
    }

    /// `column = value`
    pub fn eq(mut self, column: &str, value: impl AsRef<str>) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", value.as_ref())));
        self
    }

    /// Case-insensitive substring match on `column`
    pub fn ilike(mut self, column: &str, needle: impl AsRef<str>) -> Self {
        self.filters
            .push((column.to_string(), format!("ilike.{}", pattern(needle.as_ref()))));
        self
    }

    /// Case-insensitive substring match on any of `columns`
    pub fn or_ilike(mut self, columns: &[&str], needle: impl AsRef<str>) -> Self {
        let needle = pattern(needle.as_ref());
        let clauses: Vec<String> = columns
            .iter()
            .map(|column| format!("{column}.ilike.{needle}"))
            .collect();
        self.filters
            .push(("or".to_string(), format!("({})", clauses.join(","))));
        self
    }

    /// Descending order on `column`
    pub fn order_desc(mut self, column: &str) -> Self {
        self.order = Some(format!("{column}.desc"));
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    /// Query pairs in the order the service expects them
    pub fn params(&self) -> Vec<(String, String)> {
        let mut params = Vec::with_capacity(self.filters.len() + 3);
        params.push(("select".to_string(), self.select.clone()));
        params.extend(self.filters.iter().cloned());
        if let Some(order) = &self.order {
            params.push(("order".to_string(), order.clone()));
        }
        if let Some(limit) = self.limit {
            params.push(("limit".to_string(), limit.to_string()));
        }
        params
    }
}

/// Search text with the filter grammar's reserved characters removed
///
/// An empty result means the term cannot narrow anything down.
pub fn clean_needle(needle: &str) -> String {
    let cleaned: String = needle
        .chars()
        .filter(|c| !matches!(c, ',' | '(' | ')' | '*' | '"'))
        .collect();
    cleaned.trim().to_string()
}

/// `*needle*` for `ilike` filters
fn pattern(needle: &str) -> String {
    format!("*{}*", clean_needle(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(query: &TableQuery) -> Vec<(String, String)> {
        query.params()
    }

    #[test]
    fn test_plain_select() {
        let query = TableQuery::from("programs");
        assert_eq!(query.table(), "programs");
        assert_eq!(pairs(&query), vec![("select".into(), "*".into())]);
    }

    #[test]
    fn test_filters_order_limit() {
        let query = TableQuery::from("allblogposts")
            .ilike("category", "Front")
            .order_desc("publish_date")
            .limit(5);

        assert_eq!(
            pairs(&query),
            vec![
                ("select".into(), "*".into()),
                ("category".into(), "ilike.*Front*".into()),
                ("order".into(), "publish_date.desc".into()),
                ("limit".into(), "5".into()),
            ]
        );
    }

    #[test]
    fn test_or_ilike_strips_reserved_characters() {
        let query = TableQuery::from("projects").or_ilike(&["title", "description"], "web (app)");
        assert_eq!(
            pairs(&query)[1],
            (
                "or".to_string(),
                "(title.ilike.*web app*,description.ilike.*web app*)".to_string()
            )
        );
    }

    #[test]
    fn test_eq() {
        let query = TableQuery::from("profiles").eq("id", "abc");
        assert_eq!(pairs(&query)[1], ("id".to_string(), "eq.abc".to_string()));
    }

    #[test]
    fn test_clean_needle() {
        assert_eq!(clean_needle("  rust (async), \"web\"* "), "rust async web");
        assert!(clean_needle("(),*").is_empty());
    }
}
