//! ServiceClient against a fake hosted service

use std::collections::HashMap;

use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use platform::{ServiceClient, ServiceConfig, ServiceError, TableQuery};
use serde::Deserialize;
use serde_json::json;
use tokio::net::TcpListener;

#[derive(Debug, Deserialize, PartialEq)]
struct Row {
    id: u32,
    slug: String,
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

async fn rows(headers: HeaderMap, Query(params): Query<HashMap<String, String>>) -> impl IntoResponse {
    let key_ok = headers.get("apikey").and_then(|v| v.to_str().ok()) == Some("anon-key");
    let bearer_ok = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        == Some("Bearer anon-key");
    if !key_ok || !bearer_ok {
        return (StatusCode::UNAUTHORIZED, Json(json!({"message": "No API key found"})));
    }

    let single = headers
        .get(header::ACCEPT)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.contains("vnd.pgrst.object"));

    let all = vec![json!({"id": 1, "slug": "pmp"}), json!({"id": 2, "slug": "marketing"})];
    let matching: Vec<_> = match params.get("slug") {
        Some(filter) => {
            let wanted = filter.trim_start_matches("eq.");
            all.into_iter().filter(|r| r["slug"] == wanted).collect()
        }
        None => all,
    };

    if single {
        return match matching.as_slice() {
            [row] => (StatusCode::OK, Json(row.clone())),
            _ => (
                StatusCode::NOT_ACCEPTABLE,
                Json(json!({
                    "code": "PGRST116",
                    "message": "JSON object requested, multiple (or no) rows returned",
                    "details": "The result contains 0 rows",
                    "hint": null,
                })),
            ),
        };
    }
    (StatusCode::OK, Json(json!(matching)))
}

async fn broken() -> impl IntoResponse {
    (StatusCode::OK, "[{\"id\": \"not a number\"}]")
}

async fn client() -> ServiceClient {
    let app = Router::new()
        .route("/rest/v1/programs", get(rows))
        .route("/rest/v1/broken", get(broken));
    let base = serve(app).await;
    ServiceClient::new(ServiceConfig::new(&base, "anon-key").unwrap()).unwrap()
}

#[tokio::test]
async fn select_returns_all_rows() {
    let client = client().await;
    let rows: Vec<Row> = client.select(&TableQuery::from("programs")).await.unwrap();
    assert_eq!(rows.len(), 2);
}

#[tokio::test]
async fn select_single_finds_row() {
    let client = client().await;
    let row: Option<Row> = client
        .select_single(&TableQuery::from("programs").eq("slug", "pmp"))
        .await
        .unwrap();
    assert_eq!(row, Some(Row { id: 1, slug: "pmp".into() }));
}

#[tokio::test]
async fn select_single_zero_rows_is_none() {
    let client = client().await;
    let row: Option<Row> = client
        .select_single(&TableQuery::from("programs").eq("slug", "missing"))
        .await
        .unwrap();
    assert!(row.is_none());
}

#[tokio::test]
async fn malformed_body_is_decode_error() {
    let client = client().await;
    let err = client
        .select::<Row>(&TableQuery::from("broken"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Decode { .. }));
}

#[tokio::test]
async fn unknown_table_is_api_error() {
    let client = client().await;
    let err = client
        .select::<Row>(&TableQuery::from("nowhere"))
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn unreachable_service_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ServiceConfig::new(&format!("http://{addr}"), "anon-key").unwrap();
    let client = ServiceClient::new(config).unwrap();
    let err = client
        .select::<Row>(&TableQuery::from("programs"))
        .await
        .unwrap_err();
    assert!(matches!(err, ServiceError::Transport(_)));

    let app = AppError::from(err);
    assert_eq!(app.kind(), ErrorKind::ServiceUnavailable);
    assert_eq!(app.message(), "Service unreachable");
}
