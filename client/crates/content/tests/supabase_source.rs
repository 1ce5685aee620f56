//! Content gateway over the hosted adapter, against a fake table API

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use content::{
    Collection, ContentConfig, ContentGateway, FallbackReason, Provenance, SupabaseContentGateway,
    SupabaseContentSource,
};
use platform::{ServiceClient, ServiceConfig};
use serde_json::{Value, json};
use tokio::net::TcpListener;

type Params = Query<HashMap<String, String>>;

fn rows(table: &str) -> Option<Vec<Value>> {
    let rows = match table {
        "programs" => vec![
            json!({
                "id": "b7d1c3f0-0000-4000-8000-000000000001",
                "title": "Rust cho kỹ sư hệ thống",
                "description": "Lập trình an toàn bộ nhớ",
                "highlights": ["Ownership", "Async"],
                "price": "9.000.000 ₫",
                "slug": "rust-he-thong",
                "students": 40,
            }),
            json!({"id": "b7d1c3f0-0000-4000-8000-000000000002", "title": "PMP", "highlights": null}),
        ],
        "projects" => vec![json!({
            "id": 11,
            "title": "Cổng học viên",
            "description": "Portal",
            "detailproject": "## Chi tiết",
            "technologies": null,
            "mentors": [{"name": "Lan", "avatar": "/lan.webp"}],
            "status": "ongoing",
            "slug": "cong-hoc-vien",
        })],
        "allblogposts" => vec![
            json!({"id": 1, "title": "Cũ", "category": "Backend", "publish_date": "2024-01-01", "details_blog": "body 1"}),
            json!({"id": 2, "title": "Mới", "category": "Backend", "publish_date": "2024-06-01", "content": "body 2", "slug": "moi"}),
            json!({"id": 3, "title": "Giao diện", "category": "Frontend", "publish_date": "2024-03-01"}),
        ],
        "top_posts" => (1..=8)
            .map(|i| json!({"id": i, "title": format!("Top {i}"), "views": i * 10}))
            .collect(),
        _ => return None,
    };
    Some(rows)
}

fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Minimal filter grammar: `eq.`, `ilike.*x*`, `or=(a.ilike.*x*,...)`, `order`, `limit`
fn apply(mut rows: Vec<Value>, params: &HashMap<String, String>) -> Vec<Value> {
    for (key, filter) in params {
        match key.as_str() {
            "select" | "order" | "limit" => {}
            "or" => {
                let clauses: Vec<(String, String)> = filter
                    .trim_matches(|c| c == '(' || c == ')')
                    .split(',')
                    .filter_map(|clause| {
                        let (column, rest) = clause.split_once(".ilike.")?;
                        Some((column.to_string(), rest.trim_matches('*').to_lowercase()))
                    })
                    .collect();
                rows.retain(|row| {
                    clauses
                        .iter()
                        .any(|(column, needle)| text(&row[column.as_str()]).to_lowercase().contains(needle))
                });
            }
            column => {
                if let Some(value) = filter.strip_prefix("eq.") {
                    rows.retain(|row| text(&row[column]) == value);
                } else if let Some(pattern) = filter.strip_prefix("ilike.") {
                    let needle = pattern.trim_matches('*').to_lowercase();
                    rows.retain(|row| text(&row[column]).to_lowercase().contains(&needle));
                }
            }
        }
    }

    if let Some(order) = params.get("order") {
        let column = order.trim_end_matches(".desc");
        rows.sort_by(|a, b| {
            let (a, b) = (&a[column], &b[column]);
            match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => y.total_cmp(&x),
                _ => text(b).cmp(&text(a)),
            }
        });
    }
    if let Some(limit) = params.get("limit").and_then(|l| l.parse().ok()) {
        rows.truncate(limit);
    }
    rows
}

async fn table(Path(table): Path<String>, headers: HeaderMap, Query(params): Params) -> Response {
    if headers.get("apikey").and_then(|v| v.to_str().ok()) != Some("anon-key") {
        return StatusCode::UNAUTHORIZED.into_response();
    }
    let Some(all) = rows(&table) else {
        return (
            StatusCode::NOT_FOUND,
            Json(json!({"code": "42P01", "message": format!("relation \"{table}\" does not exist")})),
        )
            .into_response();
    };

    let matching = apply(all, &params);
    let single = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("vnd.pgrst.object"));
    if single {
        return match matching.as_slice() {
            [row] => Json(row.clone()).into_response(),
            _ => (
                StatusCode::NOT_ACCEPTABLE,
                Json(json!({
                    "code": "PGRST116",
                    "message": "JSON object requested, multiple (or no) rows returned",
                })),
            )
                .into_response(),
        };
    }
    Json(matching).into_response()
}

async fn gateway() -> SupabaseContentGateway {
    let app = Router::new().route("/rest/v1/{table}", get(table));
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let config = ServiceConfig::new(&format!("http://{addr}"), "anon-key").unwrap();
    let client = Arc::new(ServiceClient::new(config).unwrap());
    ContentGateway::new(
        Arc::new(SupabaseContentSource::new(client)),
        ContentConfig::default(),
    )
}

#[tokio::test]
async fn programs_are_read_and_normalized() {
    let gateway = gateway().await;
    let programs = gateway.list_programs().await;

    assert_eq!(programs.provenance(), &Provenance::Remote);
    let first = &programs.value()[0];
    assert_eq!(first.highlights, vec!["Ownership", "Async"]);
    assert_eq!(first.students.as_deref(), Some("40"));
    assert!(programs.value()[1].highlights.is_empty());
    assert!(programs.value()[1].image().is_placeholder());
}

#[tokio::test]
async fn projects_map_legacy_detail_column() {
    let gateway = gateway().await;
    let project = gateway.project_by_slug("cong-hoc-vien").await.unwrap();

    assert_eq!(project.id, "11");
    assert_eq!(project.detail.as_deref(), Some("## Chi tiết"));
    assert!(project.technologies.is_empty());
    assert_eq!(project.mentors[0].name, "Lan");
}

#[tokio::test]
async fn blog_posts_newest_first_with_content_fallback() {
    let gateway = gateway().await;
    let posts = gateway.list_blog_posts().await.into_value();

    let ids: Vec<&str> = posts.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["2", "3", "1"]);
    assert_eq!(posts[2].content.as_deref(), Some("body 1"));
    assert_eq!(posts[2].route_key(), "1");
}

#[tokio::test]
async fn blog_posts_by_category() {
    let gateway = gateway().await;

    let backend = gateway.blog_posts_by_category("BACK").await;
    assert_eq!(backend.provenance(), &Provenance::Remote);
    assert_eq!(backend.value().len(), 2);
    assert_eq!(backend.value()[0].title, "Mới");

    let missing = gateway.blog_posts_by_category("devops").await;
    assert_eq!(missing.provenance(), &Provenance::Fallback(FallbackReason::Empty));
    assert_eq!(missing.value()[0].category.as_deref(), Some("DevOps"));
}

#[tokio::test]
async fn top_posts_are_limited_and_ranked() {
    let gateway = gateway().await;
    let top = gateway.top_posts().await.into_value();

    let views: Vec<u64> = top.iter().map(|p| p.views).collect();
    assert_eq!(views, vec![80, 70, 60, 50, 40]);
}

#[tokio::test]
async fn slug_lookups() {
    let gateway = gateway().await;

    assert_eq!(gateway.blog_post_by_slug("moi").await.unwrap().id, "2");
    assert!(gateway.blog_post_by_slug("khong-co").await.is_none());
    assert_eq!(gateway.program_by_slug("rust-he-thong").await.unwrap().title, "Rust cho kỹ sư hệ thống");
}

#[tokio::test]
async fn related_posts_use_the_remote_list() {
    let gateway = gateway().await;
    let current = gateway.blog_post_by_slug("moi").await.unwrap();

    let related = gateway.related_posts(&current).await;
    assert_eq!(related.len(), 1);
    assert_eq!(related[0].id, "1");
}

#[tokio::test]
async fn search_matches_title_and_description() {
    let gateway = gateway().await;

    let results = gateway.search("bộ nhớ", &[]).await;
    assert_eq!(results.programs.len(), 1);
    assert!(results.projects.is_empty());

    let results = gateway.search("giao", &[Collection::BlogPosts]).await;
    assert_eq!(results.blog_posts.len(), 1);
    assert!(results.programs.is_empty());
}

#[tokio::test]
async fn connection_check() {
    let gateway = gateway().await;
    assert!(gateway.check_connection().await.is_ok());
}

#[tokio::test]
async fn unreachable_service_serves_fixtures() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ServiceConfig::new(&format!("http://{addr}"), "anon-key").unwrap();
    let client = Arc::new(ServiceClient::new(config).unwrap());
    let gateway = ContentGateway::new(
        Arc::new(SupabaseContentSource::new(client)),
        ContentConfig::default(),
    );

    let programs = gateway.list_programs().await;
    assert!(matches!(
        programs.provenance(),
        Provenance::Fallback(FallbackReason::Failed(_))
    ));
    assert_eq!(programs.value().len(), 3);
    assert!(gateway.program_by_slug("pmp").await.is_none());
    assert!(gateway.search("pmp", &[]).await.is_empty());
    assert!(gateway.check_connection().await.is_err());
}
