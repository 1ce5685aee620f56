//! Repository Traits
//!
//! Port to the hosted table API. One method call is one read: no retries,
//! no pagination. Implementations are in the infrastructure layer.

use crate::domain::entity::{BlogPost, Program, Project, TopPost};
use crate::error::ContentResult;

/// Catalog content source
#[trait_variant::make(ContentSource: Send)]
pub trait LocalContentSource {
    async fn programs(&self) -> ContentResult<Vec<Program>>;

    /// `None` when no row has this slug
    async fn program_by_slug(&self, slug: &str) -> ContentResult<Option<Program>>;

    async fn projects(&self) -> ContentResult<Vec<Project>>;

    async fn project_by_slug(&self, slug: &str) -> ContentResult<Option<Project>>;

    /// All posts, newest first
    async fn blog_posts(&self) -> ContentResult<Vec<BlogPost>>;

    async fn blog_post_by_slug(&self, slug: &str) -> ContentResult<Option<BlogPost>>;

    /// Posts whose category contains `category` (case-insensitive), newest first
    async fn blog_posts_by_category(&self, category: &str) -> ContentResult<Vec<BlogPost>>;

    /// Most viewed posts first
    async fn top_posts(&self, limit: usize) -> ContentResult<Vec<TopPost>>;

    /// Programs whose title or description contains `term`
    async fn search_programs(&self, term: &str, limit: usize) -> ContentResult<Vec<Program>>;

    /// Projects whose title or description contains `term`
    async fn search_projects(&self, term: &str, limit: usize) -> ContentResult<Vec<Project>>;

    /// Posts whose title or excerpt contains `term`
    async fn search_blog_posts(&self, term: &str, limit: usize) -> ContentResult<Vec<BlogPost>>;

    /// Cheapest possible read proving the service answers
    async fn probe(&self) -> ContentResult<()>;
}
