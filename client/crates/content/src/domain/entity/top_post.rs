//! Top Post
//!
//! Projection of the ranking view: posts ordered by view count.

use serde::Serialize;

use super::image::route_key;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopPost {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub views: u64,
    pub excerpt: Option<String>,
    pub author: Option<String>,
    pub published_at: Option<String>,
    pub slug: Option<String>,
}

impl TopPost {
    pub fn route_key(&self) -> &str {
        route_key(self.slug.as_deref(), &self.id)
    }
}
