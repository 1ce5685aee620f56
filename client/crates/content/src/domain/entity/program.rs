//! Training Program Entity

use serde::Serialize;

use super::image::{Image, route_key};

/// Training program offered by the center
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Program {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Long-form body for the detail page
    pub detailed_content: Option<String>,
    pub highlights: Vec<String>,
    pub duration: Option<String>,
    /// Display price as stored (free text)
    pub price: Option<String>,
    pub image: Option<String>,
    pub slug: Option<String>,
    pub level: Option<String>,
    pub category: Option<String>,
    /// Enrollment count as stored (free text)
    pub students: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Program {
    pub fn image(&self) -> Image {
        Image::or_placeholder(self.image.as_deref())
    }

    pub fn route_key(&self) -> &str {
        route_key(self.slug.as_deref(), &self.id)
    }

    /// Detail pages address programs by id or by slug
    pub fn is_addressed_by(&self, key: &str) -> bool {
        self.id == key || self.slug.as_deref() == Some(key)
    }
}
