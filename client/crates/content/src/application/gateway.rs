//! Content Gateway
//!
//! Read-only entry point for catalog pages. List reads fall back to
//! fixtures; slug lookups resolve to `None` on any failure. Nothing here
//! returns an error except `check_connection`.

use std::sync::Arc;

use platform::query::clean_needle;

use crate::application::config::ContentConfig;
use crate::application::fallback::{Fetched, with_fallback};
use crate::application::fixtures;
use crate::application::search::SearchResults;
use crate::domain::entity::{BlogPost, Program, Project, TopPost};
use crate::domain::{Collection, ContentSource};
use crate::error::ContentResult;

pub struct ContentGateway<S>
where
    S: ContentSource,
{
    source: Arc<S>,
    config: ContentConfig,
}

/// Lookup result with failures read as "not found"
fn found<T>(collection: Collection, slug: &str, result: ContentResult<Option<T>>) -> Option<T> {
    match result {
        Ok(Some(row)) => Some(row),
        Ok(None) => {
            tracing::debug!(collection = %collection, slug, "Not found");
            None
        }
        Err(e) => {
            tracing::warn!(collection = %collection, slug, error = %e, "Lookup failed, treating as not found");
            None
        }
    }
}

/// Search hits with failures read as "no matches"
fn hits<T>(collection: Collection, term: &str, result: ContentResult<Vec<T>>) -> Vec<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(collection = %collection, term, error = %e, "Search failed, no matches");
        Vec::new()
    })
}

fn blank(s: &str) -> bool {
    s.trim().is_empty()
}

impl<S> ContentGateway<S>
where
    S: ContentSource,
{
    pub fn new(source: Arc<S>, config: ContentConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &ContentConfig {
        &self.config
    }

    // ========================================================================
    // Programs
    // ========================================================================

    pub async fn list_programs(&self) -> Fetched<Vec<Program>> {
        with_fallback(
            Collection::Programs,
            self.source.programs().await,
            fixtures::programs,
        )
    }

    pub async fn program_by_slug(&self, slug: &str) -> Option<Program> {
        if blank(slug) {
            return None;
        }
        found(
            Collection::Programs,
            slug,
            self.source.program_by_slug(slug).await,
        )
    }

    /// Program whose id or slug is `key`, fixtures included
    pub async fn program_by_id(&self, key: &str) -> Option<Program> {
        if blank(key) {
            return None;
        }
        self.list_programs()
            .await
            .into_value()
            .into_iter()
            .find(|p| p.is_addressed_by(key))
    }

    // ========================================================================
    // Projects
    // ========================================================================

    pub async fn list_projects(&self) -> Fetched<Vec<Project>> {
        with_fallback(
            Collection::Projects,
            self.source.projects().await,
            fixtures::projects,
        )
    }

    pub async fn project_by_slug(&self, slug: &str) -> Option<Project> {
        if blank(slug) {
            return None;
        }
        found(
            Collection::Projects,
            slug,
            self.source.project_by_slug(slug).await,
        )
    }

    /// Leading projects of the list, for the home page
    pub async fn featured_projects(&self) -> Fetched<Vec<Project>> {
        let limit = self.config.featured_limit;
        self.list_projects().await.map(|mut projects| {
            projects.truncate(limit);
            projects
        })
    }

    // ========================================================================
    // Blog
    // ========================================================================

    /// All posts, newest first
    pub async fn list_blog_posts(&self) -> Fetched<Vec<BlogPost>> {
        with_fallback(
            Collection::BlogPosts,
            self.source.blog_posts().await,
            fixtures::blog_posts,
        )
    }

    pub async fn blog_post_by_slug(&self, slug: &str) -> Option<BlogPost> {
        if blank(slug) {
            return None;
        }
        found(
            Collection::BlogPosts,
            slug,
            self.source.blog_post_by_slug(slug).await,
        )
    }

    /// Posts in `category` (case-insensitive substring), newest first
    ///
    /// The fallback applies the same match to the fixtures and serves the
    /// whole fixture set when nothing matches.
    pub async fn blog_posts_by_category(&self, category: &str) -> Fetched<Vec<BlogPost>> {
        with_fallback(
            Collection::BlogPosts,
            self.source.blog_posts_by_category(category).await,
            || {
                let all = fixtures::blog_posts();
                let matching: Vec<BlogPost> =
                    all.iter().filter(|p| p.in_category(category)).cloned().collect();
                if matching.is_empty() { all } else { matching }
            },
        )
    }

    /// Other posts in the same category as `post`
    pub async fn related_posts(&self, post: &BlogPost) -> Vec<BlogPost> {
        let Some(category) = post.category.as_deref() else {
            return Vec::new();
        };
        self.list_blog_posts()
            .await
            .into_value()
            .into_iter()
            .filter(|p| p.id != post.id && p.category.as_deref() == Some(category))
            .take(self.config.related_limit)
            .collect()
    }

    /// Most viewed posts first
    pub async fn top_posts(&self) -> Fetched<Vec<TopPost>> {
        let limit = self.config.top_posts_limit;
        with_fallback(
            Collection::TopPosts,
            self.source.top_posts(limit).await,
            || {
                let mut posts = fixtures::top_posts();
                posts.truncate(limit);
                posts
            },
        )
    }

    // ========================================================================
    // Search & health
    // ========================================================================

    /// Title/description matches in each named collection (all when none)
    ///
    /// No fixture fallback: an empty result is a real answer. A failed
    /// collection contributes no matches.
    pub async fn search(&self, term: &str, collections: &[Collection]) -> SearchResults {
        let mut results = SearchResults::default();
        let term = clean_needle(term);
        if term.is_empty() {
            return results;
        }
        let term = term.as_str();

        let collections = if collections.is_empty() {
            &Collection::SEARCHABLE[..]
        } else {
            collections
        };
        let limit = self.config.search_limit;

        if collections.contains(&Collection::Programs) {
            let result = self.source.search_programs(term, limit).await;
            results.programs = hits(Collection::Programs, term, result);
        }
        if collections.contains(&Collection::Projects) {
            let result = self.source.search_projects(term, limit).await;
            results.projects = hits(Collection::Projects, term, result);
        }
        if collections.contains(&Collection::BlogPosts) {
            let result = self.source.search_blog_posts(term, limit).await;
            results.blog_posts = hits(Collection::BlogPosts, term, result);
        }

        tracing::debug!(term, total = results.total(), "Search finished");
        results
    }

    /// `Ok(())` when the hosted tables answer
    pub async fn check_connection(&self) -> ContentResult<()> {
        match self.source.probe().await {
            Ok(()) => {
                tracing::info!("Content service reachable");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Content service unreachable");
                Err(e)
            }
        }
    }
}
