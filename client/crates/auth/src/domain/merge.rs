//! Identity normalization
//!
//! Folds the provider record and the optional profile row into one
//! [`Identity`]. A profile value wins over provider metadata only when it is
//! present and non-empty.

use crate::domain::entity::{Identity, ProfileRecord, ProviderUser};
use crate::domain::value_object::{user_role::UserRole, user_status::UserStatus};

/// First non-blank candidate, trimmed
fn first_filled<'a>(candidates: impl IntoIterator<Item = Option<&'a str>>) -> Option<String> {
    candidates
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

/// Build the canonical identity
///
/// `guest_name` is the display name used when neither a name nor an email
/// is known.
pub fn merge_identity(
    user: &ProviderUser,
    profile: Option<&ProfileRecord>,
    guest_name: &str,
) -> Identity {
    let meta = &user.metadata;
    let profile_field = |pick: fn(&ProfileRecord) -> Option<&String>| {
        profile.and_then(pick).map(String::as_str)
    };

    let full_name = first_filled([
        profile_field(|p| p.full_name.as_ref()),
        meta.full_name.as_deref(),
    ])
    .unwrap_or_default();

    let email = user.email.clone().unwrap_or_default();

    let display_name = first_filled([Some(full_name.as_str()), Some(email.as_str())])
        .unwrap_or_else(|| guest_name.to_string());

    let role = first_filled([profile_field(|p| p.role.as_ref()), meta.role.as_deref()])
        .and_then(|code| UserRole::from_code(&code))
        .unwrap_or_default();

    Identity {
        id: user.id,
        email,
        display_name,
        full_name,
        avatar: first_filled([
            profile_field(|p| p.avatar_url.as_ref()),
            meta.avatar_url.as_deref(),
        ]),
        phone: first_filled([
            user.phone.as_deref(),
            meta.phone.as_deref(),
            profile_field(|p| p.phone.as_ref()),
        ]),
        university: first_filled([meta.university.as_deref()]),
        major: first_filled([meta.major.as_deref()]),
        role: Some(role),
        status: profile.map(|_| UserStatus::Active),
        created_at: profile.and_then(|p| p.created_at).or(user.created_at),
        updated_at: user.updated_at,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entity::UserMetadata;
    use crate::domain::value_object::IdentityId;

    const GUEST: &str = "Người dùng";

    fn provider_user(email: Option<&str>, full_name: Option<&str>) -> ProviderUser {
        ProviderUser {
            id: IdentityId::new(),
            email: email.map(str::to_string),
            phone: None,
            metadata: UserMetadata {
                full_name: full_name.map(str::to_string),
                avatar_url: Some("https://cdn.example.com/meta.png".to_string()),
                phone: Some("0901234567".to_string()),
                university: Some("HUST".to_string()),
                major: None,
                role: None,
            },
            created_at: None,
            updated_at: None,
        }
    }

    fn profile(id: IdentityId, full_name: Option<&str>, role: Option<&str>) -> ProfileRecord {
        ProfileRecord {
            id,
            full_name: full_name.map(str::to_string),
            avatar_url: None,
            role: role.map(str::to_string),
            phone: None,
            created_at: None,
        }
    }

    #[test]
    fn test_provider_only() {
        let user = provider_user(Some("an@example.com"), Some("Nguyễn Văn An"));
        let identity = merge_identity(&user, None, GUEST);

        assert_eq!(identity.full_name, "Nguyễn Văn An");
        assert_eq!(identity.display_name, "Nguyễn Văn An");
        assert_eq!(identity.avatar.as_deref(), Some("https://cdn.example.com/meta.png"));
        assert_eq!(identity.phone.as_deref(), Some("0901234567"));
        assert_eq!(identity.university.as_deref(), Some("HUST"));
        assert_eq!(identity.role, Some(UserRole::User));
        assert_eq!(identity.status, None);
    }

    #[test]
    fn test_profile_overrides_metadata() {
        let user = provider_user(Some("an@example.com"), Some("Old Name"));
        let row = profile(user.id, Some("Trần Thị Bình"), Some("mentor"));
        let identity = merge_identity(&user, Some(&row), GUEST);

        assert_eq!(identity.full_name, "Trần Thị Bình");
        assert_eq!(identity.role, Some(UserRole::Mentor));
        assert_eq!(identity.status, Some(UserStatus::Active));
        // Profile avatar absent: metadata value is kept
        assert_eq!(identity.avatar.as_deref(), Some("https://cdn.example.com/meta.png"));
    }

    #[test]
    fn test_blank_profile_fields_do_not_override() {
        let user = provider_user(Some("an@example.com"), Some("Meta Name"));
        let row = profile(user.id, Some("   "), Some(""));
        let identity = merge_identity(&user, Some(&row), GUEST);

        assert_eq!(identity.full_name, "Meta Name");
        assert_eq!(identity.role, Some(UserRole::User));
    }

    #[test]
    fn test_display_name_fallbacks() {
        let user = provider_user(Some("an@example.com"), None);
        assert_eq!(merge_identity(&user, None, GUEST).display_name, "an@example.com");

        let user = provider_user(None, None);
        let identity = merge_identity(&user, None, GUEST);
        assert_eq!(identity.display_name, GUEST);
        assert_eq!(identity.email, "");
    }
}
