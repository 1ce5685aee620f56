//! Infrastructure Layer
//!
//! Hosted identity API and `profiles` table implementations.

pub mod supabase;

pub use supabase::{SupabaseIdentityProvider, SupabaseProfileRepository};
