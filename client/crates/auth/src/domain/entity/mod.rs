pub mod identity;
pub mod profile;
pub mod provider_session;
pub mod provider_user;

pub use identity::Identity;
pub use profile::{NewProfile, ProfileRecord, ProfileUpdate};
pub use provider_session::ProviderSession;
pub use provider_user::{ProviderUser, UserMetadata};
