//! Hosted Service Content Source
//!
//! Reads the catalog tables and views over the `/rest/v1` API.

use std::sync::Arc;

use platform::{ServiceClient, TableQuery};
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::domain::entity::{BlogPost, Program, Project, TopPost};
use crate::domain::{Collection, ContentSource};
use crate::error::{ContentError, ContentResult};
use crate::infra::row::{BlogPostRow, ProgramRow, ProjectRow, TopPostRow, normalize};

const PUBLISH_DATE: &str = "publish_date";

/// Content source backed by the hosted table API
#[derive(Clone)]
pub struct SupabaseContentSource {
    client: Arc<ServiceClient>,
}

impl SupabaseContentSource {
    pub fn new(client: Arc<ServiceClient>) -> Self {
        Self { client }
    }

    fn query(collection: Collection) -> TableQuery {
        TableQuery::from(collection.table())
    }

    async fn list<R, T>(&self, collection: Collection, query: TableQuery) -> ContentResult<Vec<T>>
    where
        R: DeserializeOwned,
        T: TryFrom<R, Error = ContentError>,
    {
        let rows: Vec<R> = self.client.select(&query).await?;
        Ok(normalize(collection, rows))
    }

    async fn by_slug<R, T>(&self, collection: Collection, slug: &str) -> ContentResult<Option<T>>
    where
        R: DeserializeOwned,
        T: TryFrom<R, Error = ContentError>,
    {
        let query = Self::query(collection).eq("slug", slug);
        let row: Option<R> = self.client.select_single(&query).await?;
        row.map(T::try_from).transpose()
    }
}

impl ContentSource for SupabaseContentSource {
    async fn programs(&self) -> ContentResult<Vec<Program>> {
        self.list::<ProgramRow, _>(Collection::Programs, Self::query(Collection::Programs))
            .await
    }

    async fn program_by_slug(&self, slug: &str) -> ContentResult<Option<Program>> {
        self.by_slug::<ProgramRow, _>(Collection::Programs, slug).await
    }

    async fn projects(&self) -> ContentResult<Vec<Project>> {
        self.list::<ProjectRow, _>(Collection::Projects, Self::query(Collection::Projects))
            .await
    }

    async fn project_by_slug(&self, slug: &str) -> ContentResult<Option<Project>> {
        self.by_slug::<ProjectRow, _>(Collection::Projects, slug).await
    }

    async fn blog_posts(&self) -> ContentResult<Vec<BlogPost>> {
        let query = Self::query(Collection::BlogPosts).order_desc(PUBLISH_DATE);
        self.list::<BlogPostRow, _>(Collection::BlogPosts, query).await
    }

    async fn blog_post_by_slug(&self, slug: &str) -> ContentResult<Option<BlogPost>> {
        self.by_slug::<BlogPostRow, _>(Collection::BlogPosts, slug).await
    }

    async fn blog_posts_by_category(&self, category: &str) -> ContentResult<Vec<BlogPost>> {
        let query = Self::query(Collection::BlogPosts)
            .ilike("category", category.trim())
            .order_desc(PUBLISH_DATE);
        self.list::<BlogPostRow, _>(Collection::BlogPosts, query).await
    }

    async fn top_posts(&self, limit: usize) -> ContentResult<Vec<TopPost>> {
        let query = Self::query(Collection::TopPosts)
            .order_desc("views")
            .limit(limit);
        self.list::<TopPostRow, _>(Collection::TopPosts, query).await
    }

    async fn search_programs(&self, term: &str, limit: usize) -> ContentResult<Vec<Program>> {
        let query = Self::query(Collection::Programs)
            .or_ilike(&["title", "description"], term)
            .limit(limit);
        self.list::<ProgramRow, _>(Collection::Programs, query).await
    }

    async fn search_projects(&self, term: &str, limit: usize) -> ContentResult<Vec<Project>> {
        let query = Self::query(Collection::Projects)
            .or_ilike(&["title", "description"], term)
            .limit(limit);
        self.list::<ProjectRow, _>(Collection::Projects, query).await
    }

    async fn search_blog_posts(&self, term: &str, limit: usize) -> ContentResult<Vec<BlogPost>> {
        let query = Self::query(Collection::BlogPosts)
            .or_ilike(&["title", "excerpt"], term)
            .limit(limit);
        self.list::<BlogPostRow, _>(Collection::BlogPosts, query).await
    }

    async fn probe(&self) -> ContentResult<()> {
        let query = Self::query(Collection::Programs).select("id").limit(1);
        let _rows: Vec<Value> = self.client.select(&query).await?;
        Ok(())
    }
}
