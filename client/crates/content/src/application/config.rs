//! Content Configuration

/// Result-size limits of the content gateway
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Rows read from the ranking view
    pub top_posts_limit: usize,
    /// Projects shown on the home page
    pub featured_limit: usize,
    /// Same-category posts under an article
    pub related_limit: usize,
    /// Matches per collection in a search
    pub search_limit: usize,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            top_posts_limit: 5,
            featured_limit: 6,
            related_limit: 3,
            search_limit: 10,
        }
    }
}
