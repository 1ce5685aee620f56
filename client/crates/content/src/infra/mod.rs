//! Infrastructure Layer
//!
//! Table API implementation of the content source.

mod row;
pub mod supabase;

pub use supabase::SupabaseContentSource;
