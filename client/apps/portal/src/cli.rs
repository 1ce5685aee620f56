//! Command line surface
//!
//! Every command prints JSON on stdout; logs go to stderr.

use std::sync::Arc;

use auth::{AuthContext, ProfileUpdate, SupabaseAuthGateway};
use clap::{Parser, Subcommand, ValueEnum};
use content::{Collection, Fetched, Provenance, SupabaseContentGateway};
use serde::Serialize;

#[derive(Debug, Parser)]
#[command(name = "portal", about = "Training-center portal client", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Probe the hosted tables
    Check,
    /// List training programs
    Programs,
    /// Show one program by id or slug
    Program { key: String },
    /// List projects
    Projects {
        /// Only the home-page selection
        #[arg(long)]
        featured: bool,
    },
    /// Show one project by slug
    Project { slug: String },
    /// List blog posts, newest first
    Posts {
        /// Case-insensitive category filter
        #[arg(long)]
        category: Option<String>,
    },
    /// Show one blog post by slug, with related posts
    Post { slug: String },
    /// Most viewed posts
    Top,
    /// Search titles and descriptions
    Search {
        term: String,
        /// Collections to search (all when omitted)
        #[arg(long = "in", value_enum, value_delimiter = ',')]
        scopes: Vec<Scope>,
    },
    /// Create an account
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        full_name: String,
        #[arg(long)]
        phone: Option<String>,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign in, print the session, then sign out
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign in and change display name or avatar
    UpdateProfile {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PORTAL_PASSWORD", hide_env_values = true)]
        password: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        avatar: Option<String>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Scope {
    Programs,
    Projects,
    Posts,
}

impl From<Scope> for Collection {
    fn from(scope: Scope) -> Self {
        match scope {
            Scope::Programs => Collection::Programs,
            Scope::Projects => Collection::Projects,
            Scope::Posts => Collection::BlogPosts,
        }
    }
}

pub struct Gateways {
    pub content: SupabaseContentGateway,
    pub auth: Arc<SupabaseAuthGateway>,
}

#[derive(Serialize)]
struct Listing<'a, T> {
    source: String,
    items: &'a T,
}

fn print<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_listing<T: Serialize>(fetched: &Fetched<T>) -> anyhow::Result<()> {
    let source = match fetched.provenance() {
        Provenance::Remote => "remote".to_string(),
        Provenance::Fallback(reason) => format!("fixtures ({reason})"),
    };
    print(&Listing {
        source,
        items: fetched.value(),
    })
}

pub async fn run(command: Command, gateways: &Gateways) -> anyhow::Result<()> {
    let content = &gateways.content;

    match command {
        Command::Check => {
            content.check_connection().await?;
            print(&serde_json::json!({ "connected": true }))
        }
        Command::Programs => print_listing(&content.list_programs().await),
        Command::Program { key } => print(&content.program_by_id(&key).await),
        Command::Projects { featured: false } => print_listing(&content.list_projects().await),
        Command::Projects { featured: true } => print_listing(&content.featured_projects().await),
        Command::Project { slug } => print(&content.project_by_slug(&slug).await),
        Command::Posts { category: None } => print_listing(&content.list_blog_posts().await),
        Command::Posts {
            category: Some(category),
        } => print_listing(&content.blog_posts_by_category(&category).await),
        Command::Post { slug } => {
            let Some(post) = content.blog_post_by_slug(&slug).await else {
                return print(&serde_json::Value::Null);
            };
            let related = content.related_posts(&post).await;
            print(&serde_json::json!({ "post": post, "related": related }))
        }
        Command::Top => print_listing(&content.top_posts().await),
        Command::Search { term, scopes } => {
            let collections: Vec<Collection> = scopes.into_iter().map(Collection::from).collect();
            print(&content.search(&term, &collections).await)
        }
        Command::Register {
            email,
            full_name,
            phone,
            password,
        } => {
            let outcome = gateways
                .auth
                .register(&email, &password, &full_name, phone.as_deref())
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            for warning in outcome.warnings() {
                tracing::warn!(warning = %warning, "Registration warning");
            }
            print(outcome.value())
        }
        Command::Login { email, password } => {
            let context = AuthContext::new(gateways.auth.clone());
            context.initialize().await;

            let result = context.login(&email, &password).await;
            print(&serde_json::json!({ "result": result, "user": context.user() }))?;

            if context.is_authenticated() {
                context.logout().await;
            }
            Ok(())
        }
        Command::UpdateProfile {
            email,
            password,
            name,
            avatar,
        } => {
            let auth = &gateways.auth;
            auth.login(&email, &password)
                .await
                .map_err(|e| anyhow::anyhow!(e.user_message()))?;
            auth.update_profile(ProfileUpdate {
                display_name: name,
                avatar,
            })
            .await
            .map_err(|e| anyhow::anyhow!(e.user_message()))?;

            print(&auth.current_identity().await.into_value())?;
            auth.logout().await?;
            Ok(())
        }
    }
}
