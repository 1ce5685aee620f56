//! Blog Post Entity

use serde::Serialize;

use super::image::{Image, route_key};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlogPost {
    pub id: String,
    pub title: String,
    pub content: Option<String>,
    pub excerpt: Option<String>,
    pub context: Option<String>,
    pub image: Option<String>,
    pub author: Option<String>,
    pub author_avatar: Option<String>,
    /// Publication date as stored; ISO-8601, so it sorts as text
    pub published_at: Option<String>,
    pub read_time: Option<String>,
    pub tags: Vec<String>,
    pub category: Option<String>,
    pub slug: Option<String>,
}

impl BlogPost {
    pub fn image(&self) -> Image {
        Image::or_placeholder(self.image.as_deref())
    }

    pub fn author_avatar(&self) -> Image {
        Image::or_placeholder(self.author_avatar.as_deref())
    }

    pub fn route_key(&self) -> &str {
        route_key(self.slug.as_deref(), &self.id)
    }

    /// Case-insensitive substring match on the category
    pub fn in_category(&self, needle: &str) -> bool {
        let needle = needle.trim().to_lowercase();
        self.category
            .as_deref()
            .is_some_and(|c| c.to_lowercase().contains(&needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(category: Option<&str>) -> BlogPost {
        BlogPost {
            id: "1".to_string(),
            title: "Post".to_string(),
            content: None,
            excerpt: None,
            context: None,
            image: None,
            author: None,
            author_avatar: None,
            published_at: None,
            read_time: None,
            tags: Vec::new(),
            category: category.map(str::to_string),
            slug: None,
        }
    }

    #[test]
    fn test_in_category() {
        assert!(post(Some("Kinh nghiệm")).in_category("KINH"));
        assert!(post(Some("Backend")).in_category("end"));
        assert!(!post(Some("Backend")).in_category("devops"));
        assert!(!post(None).in_category("backend"));
    }

    #[test]
    fn test_placeholders() {
        let p = post(None);
        assert!(p.image().is_placeholder());
        assert!(p.author_avatar().is_placeholder());
        assert_eq!(p.route_key(), "1");
    }
}
