//! Project Entity

use derive_more::Display;
use serde::Serialize;

use super::image::{Image, route_key};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    #[default]
    #[display("ongoing")]
    Ongoing,
    #[display("completed")]
    Completed,
    #[display("planning")]
    Planning,
}

impl ProjectStatus {
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_ascii_lowercase().as_str() {
            "ongoing" => Some(ProjectStatus::Ongoing),
            "completed" => Some(ProjectStatus::Completed),
            "planning" => Some(ProjectStatus::Planning),
            _ => None,
        }
    }
}

/// Mentor attached to a project card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Mentor {
    pub name: String,
    pub avatar: Option<String>,
}

impl Mentor {
    pub const UNNAMED: &'static str = "Chuyên gia";

    pub fn avatar(&self) -> Image {
        Image::or_placeholder(self.avatar.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    /// Markdown body for the detail page
    pub detail: Option<String>,
    pub image: Option<String>,
    pub technologies: Vec<String>,
    pub mentors: Vec<Mentor>,
    pub status: Option<ProjectStatus>,
    pub slug: Option<String>,
    pub category: Option<String>,
}

impl Project {
    pub fn image(&self) -> Image {
        Image::or_placeholder(self.image.as_deref())
    }

    pub fn route_key(&self) -> &str {
        route_key(self.slug.as_deref(), &self.id)
    }
}
