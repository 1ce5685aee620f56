//! Row normalization
//!
//! Catalog tables are edited by hand, so rows are read leniently: ids may
//! be numbers, lists may be null, and some columns have legacy names
//! (`details_blog`, `detailproject`, `publish_date`). A row without an id
//! or a title is rejected.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::domain::Collection;
use crate::domain::entity::{BlogPost, Mentor, Program, Project, ProjectStatus, TopPost};
use crate::error::ContentError;

// ============================================================================
// Lenient field readers
// ============================================================================

fn text(value: Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// Strings and numbers; blank, null and anything else read as absent
fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(text(Value::deserialize(deserializer)?))
}

/// Arrays of scalars, or a JSON-encoded array stored as text; else empty
fn lenient_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        Value::String(s) => match serde_json::from_str::<Value>(&s) {
            Ok(Value::Array(items)) => items,
            _ => vec![Value::String(s)],
        },
        _ => Vec::new(),
    };
    Ok(items.into_iter().filter_map(text).collect())
}

/// Non-negative integer, possibly as text; anything else is zero
fn lenient_count<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64().unwrap_or(0),
        Value::String(s) => s.trim().parse().unwrap_or(0),
        _ => 0,
    })
}

fn mentor(value: Value) -> Option<Mentor> {
    match value {
        Value::Object(mut obj) => Some(Mentor {
            name: obj
                .remove("name")
                .and_then(text)
                .unwrap_or_else(|| Mentor::UNNAMED.to_string()),
            avatar: obj.remove("avatar").and_then(text),
        }),
        Value::String(name) if !name.trim().is_empty() => Some(Mentor { name, avatar: None }),
        _ => None,
    }
}

fn lenient_mentors<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Mentor>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items.into_iter().filter_map(mentor).collect(),
        _ => Vec::new(),
    })
}

fn required(
    collection: Collection,
    id: Option<String>,
    title: Option<String>,
) -> Result<(String, String), ContentError> {
    let id = id.ok_or(ContentError::Malformed {
        collection,
        reason: "missing id",
    })?;
    let title = title.ok_or(ContentError::Malformed {
        collection,
        reason: "missing title",
    })?;
    Ok((id, title))
}

/// Convert rows, dropping the ones that cannot form an entity
pub(crate) fn normalize<R, T>(collection: Collection, rows: Vec<R>) -> Vec<T>
where
    T: TryFrom<R, Error = ContentError>,
{
    let total = rows.len();
    let entities: Vec<T> = rows
        .into_iter()
        .filter_map(|row| {
            T::try_from(row)
                .inspect_err(|e| tracing::warn!(error = %e, "Skipping row"))
                .ok()
        })
        .collect();
    if entities.len() < total {
        tracing::warn!(
            collection = %collection,
            kept = entities.len(),
            total,
            "Some rows were skipped"
        );
    }
    entities
}

// ============================================================================
// Rows
// ============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct ProgramRow {
    #[serde(default, deserialize_with = "lenient_text")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    detailed_content: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    highlights: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    duration: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    price: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    image: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    level: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    students: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    created_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    updated_at: Option<String>,
}

impl TryFrom<ProgramRow> for Program {
    type Error = ContentError;

    fn try_from(row: ProgramRow) -> Result<Self, Self::Error> {
        let (id, title) = required(Collection::Programs, row.id, row.title)?;
        Ok(Program {
            id,
            title,
            description: row.description,
            detailed_content: row.detailed_content,
            highlights: row.highlights,
            duration: row.duration,
            price: row.price,
            image: row.image,
            slug: row.slug,
            level: row.level,
            category: row.category,
            students: row.students,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct ProjectRow {
    #[serde(default, deserialize_with = "lenient_text")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    description: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    detailproject: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    detail: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    image: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    technologies: Vec<String>,
    #[serde(default, deserialize_with = "lenient_mentors")]
    mentors: Vec<Mentor>,
    #[serde(default, deserialize_with = "lenient_text")]
    status: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    slug: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    category: Option<String>,
}

impl TryFrom<ProjectRow> for Project {
    type Error = ContentError;

    fn try_from(row: ProjectRow) -> Result<Self, Self::Error> {
        let (id, title) = required(Collection::Projects, row.id, row.title)?;
        Ok(Project {
            id,
            title,
            description: row.description,
            detail: row.detailproject.or(row.detail),
            image: row.image,
            technologies: row.technologies,
            mentors: row.mentors,
            status: row.status.as_deref().and_then(ProjectStatus::from_code),
            slug: row.slug,
            category: row.category,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct BlogPostRow {
    #[serde(default, deserialize_with = "lenient_text")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    content: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    details_blog: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    excerpt: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    context: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    image: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    author: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    author_avatar: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    publish_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    published_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    read_time: Option<String>,
    #[serde(default, deserialize_with = "lenient_list")]
    tags: Vec<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    category: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    slug: Option<String>,
}

impl TryFrom<BlogPostRow> for BlogPost {
    type Error = ContentError;

    fn try_from(row: BlogPostRow) -> Result<Self, Self::Error> {
        let (id, title) = required(Collection::BlogPosts, row.id, row.title)?;
        Ok(BlogPost {
            id,
            title,
            content: row.content.or(row.details_blog),
            excerpt: row.excerpt,
            context: row.context,
            image: row.image,
            author: row.author,
            author_avatar: row.author_avatar,
            published_at: row.publish_date.or(row.published_at),
            read_time: row.read_time,
            tags: row.tags,
            category: row.category,
            slug: row.slug,
        })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopPostRow {
    #[serde(default, deserialize_with = "lenient_text")]
    id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    title: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    category: Option<String>,
    #[serde(default, deserialize_with = "lenient_count")]
    views: u64,
    #[serde(default, deserialize_with = "lenient_text")]
    excerpt: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    author: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    publish_date: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    published_at: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    slug: Option<String>,
}

impl TryFrom<TopPostRow> for TopPost {
    type Error = ContentError;

    fn try_from(row: TopPostRow) -> Result<Self, Self::Error> {
        let (id, title) = required(Collection::TopPosts, row.id, row.title)?;
        Ok(TopPost {
            id,
            title,
            category: row.category,
            views: row.views,
            excerpt: row.excerpt,
            author: row.author,
            published_at: row.publish_date.or(row.published_at),
            slug: row.slug,
        })
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse<R: serde::de::DeserializeOwned>(value: Value) -> R {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_blog_post_legacy_columns() {
        let row: BlogPostRow = parse(json!({
            "id": 7,
            "title": "Học Rust",
            "details_blog": "Nội dung",
            "publish_date": "2024-03-01",
            "tags": null,
        }));
        let post = BlogPost::try_from(row).unwrap();
        assert_eq!(post.id, "7");
        assert_eq!(post.content.as_deref(), Some("Nội dung"));
        assert_eq!(post.published_at.as_deref(), Some("2024-03-01"));
        assert!(post.tags.is_empty());
    }

    #[test]
    fn test_content_wins_over_details_blog() {
        let row: BlogPostRow = parse(json!({
            "id": "a",
            "title": "T",
            "content": "new",
            "details_blog": "old",
        }));
        assert_eq!(BlogPost::try_from(row).unwrap().content.as_deref(), Some("new"));

        let row: BlogPostRow = parse(json!({"id": "a", "title": "T", "content": "", "details_blog": "old"}));
        assert_eq!(BlogPost::try_from(row).unwrap().content.as_deref(), Some("old"));
    }

    #[test]
    fn test_project_row() {
        let row: ProjectRow = parse(json!({
            "id": 3,
            "title": "Portal",
            "detailproject": "# Chi tiết",
            "technologies": ["Rust", 2024],
            "mentors": [{"name": "Lan", "avatar": "/lan.webp"}, {"avatar": null}, "Minh", 5],
            "status": "completed",
        }));
        let project = Project::try_from(row).unwrap();
        assert_eq!(project.detail.as_deref(), Some("# Chi tiết"));
        assert_eq!(project.technologies, vec!["Rust", "2024"]);
        assert_eq!(project.status, Some(ProjectStatus::Completed));
        let names: Vec<&str> = project.mentors.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Lan", Mentor::UNNAMED, "Minh"]);
    }

    #[test]
    fn test_program_highlights_as_text() {
        let row: ProgramRow = parse(json!({
            "id": "p1",
            "title": "PMP",
            "highlights": "[\"A\", \"B\"]",
            "students": 250,
        }));
        let program = Program::try_from(row).unwrap();
        assert_eq!(program.highlights, vec!["A", "B"]);
        assert_eq!(program.students.as_deref(), Some("250"));
    }

    #[test]
    fn test_top_post_views() {
        let row: TopPostRow = parse(json!({"id": 1, "title": "T", "views": "42"}));
        assert_eq!(TopPost::try_from(row).unwrap().views, 42);
    }

    #[test]
    fn test_rows_without_title_are_dropped() {
        let rows: Vec<ProgramRow> = parse(json!([
            {"id": "p1", "title": "PMP"},
            {"id": "p2", "title": "  "},
            {"title": "No id"},
        ]));
        let programs: Vec<Program> = normalize(Collection::Programs, rows);
        assert_eq!(programs.len(), 1);
        assert_eq!(programs[0].id, "p1");
    }
}
