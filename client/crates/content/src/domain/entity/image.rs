//! Image reference
//!
//! Catalog rows often lack an image. Consumers always get something to
//! render: the stored path, or the shared placeholder.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Image(String);

impl Image {
    pub const PLACEHOLDER: &'static str = "/placeholder.svg";

    pub fn placeholder() -> Self {
        Self(Self::PLACEHOLDER.to_string())
    }

    /// Stored path, or the placeholder when absent or blank
    pub fn or_placeholder(path: Option<&str>) -> Self {
        match path.map(str::trim) {
            Some(p) if !p.is_empty() => Self(p.to_string()),
            _ => Self::placeholder(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_placeholder(&self) -> bool {
        self.0 == Self::PLACEHOLDER
    }
}

impl std::fmt::Display for Image {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Slug when present, otherwise the id
pub(crate) fn route_key<'a>(slug: Option<&'a str>, id: &'a str) -> &'a str {
    slug.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(id)
}
