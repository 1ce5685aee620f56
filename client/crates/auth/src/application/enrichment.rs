//! Profile enrichment
//!
//! The `profiles` table is secondary: reading or writing it may fail without
//! failing the auth operation. Such failures become [`EnrichmentWarning`]s.

use derive_more::Display;
use kernel::outcome::Outcome;

use crate::domain::entity::{Identity, ProviderUser};
use crate::domain::merge::merge_identity;
use crate::domain::repository::ProfileRepository;

/// Non-fatal failure of a profile read or write
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EnrichmentWarning {
    /// Profile row could not be created after sign-up
    #[display("profile insert failed: {reason}")]
    ProfileInsertFailed { reason: String },
    /// Profile lookup failed; identity built from provider data only
    #[display("profile lookup failed: {reason}")]
    ProfileLookupFailed { reason: String },
    /// Identity has no profile row
    #[display("no profile row")]
    ProfileMissing,
}

/// Merge `user` with its profile row when one can be read
pub(crate) async fn enrich<R: ProfileRepository>(
    profiles: &R,
    user: &ProviderUser,
    guest_name: &str,
) -> Outcome<Identity, EnrichmentWarning> {
    match profiles.find_by_id(&user.id).await {
        Ok(Some(profile)) => Outcome::clean(merge_identity(user, Some(&profile), guest_name)),
        Ok(None) => {
            tracing::debug!(user_id = %user.id, "No profile row, using provider data only");
            Outcome::with_warning(
                merge_identity(user, None, guest_name),
                EnrichmentWarning::ProfileMissing,
            )
        }
        Err(e) => {
            tracing::warn!(
                user_id = %user.id,
                error = %e,
                "Profile lookup failed, using provider data only"
            );
            Outcome::with_warning(
                merge_identity(user, None, guest_name),
                EnrichmentWarning::ProfileLookupFailed {
                    reason: e.to_string(),
                },
            )
        }
    }
}
