use derive_more::Display;

/// Content collections and the table or view each one is read from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Collection {
    #[display("programs")]
    Programs,
    #[display("projects")]
    Projects,
    #[display("blog posts")]
    BlogPosts,
    #[display("top posts")]
    TopPosts,
}

impl Collection {
    /// Collections a search covers when none are named
    pub const SEARCHABLE: [Collection; 3] = [
        Collection::Programs,
        Collection::Projects,
        Collection::BlogPosts,
    ];

    pub const fn table(&self) -> &'static str {
        match self {
            Collection::Programs => "programs",
            Collection::Projects => "projects",
            Collection::BlogPosts => "allblogposts",
            Collection::TopPosts => "top_posts",
        }
    }

    pub const fn is_searchable(&self) -> bool {
        !matches!(self, Collection::TopPosts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables() {
        assert_eq!(Collection::BlogPosts.table(), "allblogposts");
        assert_eq!(Collection::TopPosts.table(), "top_posts");
    }

    #[test]
    fn test_searchable() {
        assert!(Collection::SEARCHABLE.iter().all(Collection::is_searchable));
        assert!(!Collection::TopPosts.is_searchable());
    }
}
