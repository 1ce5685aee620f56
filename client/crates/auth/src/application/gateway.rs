//! Auth Gateway
//!
//! Single entry point for registration, sign-in, sign-out and profile
//! operations. Every method returns a `Result` (or an `Outcome` when it
//! cannot fail); none of them panics on expected conditions.

use std::sync::Arc;

use kernel::outcome::Outcome;

use crate::application::config::AuthConfig;
use crate::application::current_identity::CurrentIdentityUseCase;
use crate::application::enrichment::EnrichmentWarning;
use crate::application::login::LoginUseCase;
use crate::application::logout::LogoutUseCase;
use crate::application::messages;
use crate::application::register::RegisterUseCase;
use crate::application::registration::{FieldErrors, FormField, RegistrationForm};
use crate::application::update_profile::UpdateProfileUseCase;
use crate::domain::entity::{Identity, ProfileUpdate};
use crate::domain::repository::{IdentityProvider, ProfileRepository, SignUpRequest};
use crate::domain::value_object::{email::Email, phone::Phone};
use crate::error::{AuthError, AuthResult};

pub struct AuthGateway<P, R>
where
    P: IdentityProvider,
    R: ProfileRepository,
{
    register: RegisterUseCase<P, R>,
    login: LoginUseCase<P, R>,
    logout: LogoutUseCase<P>,
    current: CurrentIdentityUseCase<P, R>,
    update_profile: UpdateProfileUseCase<P>,
}

impl<P, R> AuthGateway<P, R>
where
    P: IdentityProvider,
    R: ProfileRepository,
{
    pub fn new(provider: Arc<P>, profiles: Arc<R>, config: AuthConfig) -> Self {
        let config = Arc::new(config);
        Self {
            register: RegisterUseCase::new(provider.clone(), profiles.clone(), config.clone()),
            login: LoginUseCase::new(provider.clone(), profiles.clone(), config.clone()),
            logout: LogoutUseCase::new(provider.clone()),
            current: CurrentIdentityUseCase::new(provider.clone(), profiles, config),
            update_profile: UpdateProfileUseCase::new(provider),
        }
    }

    /// Create an account and its profile row
    ///
    /// A failed profile write is reported as a warning, not an error.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
        full_name: &str,
        phone: Option<&str>,
    ) -> AuthResult<Outcome<Identity, EnrichmentWarning>> {
        let mut errors = FieldErrors::default();
        let email = Email::new(email)
            .map_err(|_| errors.insert(FormField::Email, messages::EMAIL_INVALID))
            .ok();
        let phone = match phone.map(str::trim).filter(|p| !p.is_empty()) {
            Some(raw) => Phone::new(raw)
                .map_err(|_| errors.insert(FormField::Phone, messages::PHONE_INVALID))
                .ok(),
            None => None,
        };

        let Some(email) = email.filter(|_| errors.is_empty()) else {
            return Err(AuthError::Validation(errors));
        };

        self.register
            .execute(SignUpRequest {
                email,
                password: password.to_string(),
                full_name: full_name.trim().to_string(),
                phone,
                university: None,
                major: None,
            })
            .await
    }

    /// Validate the registration form, then register
    pub async fn register_form(
        &self,
        form: &RegistrationForm,
    ) -> AuthResult<Outcome<Identity, EnrichmentWarning>> {
        let request = form.validate().map_err(AuthError::Validation)?;
        self.register.execute(request).await
    }

    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> AuthResult<Outcome<Identity, EnrichmentWarning>> {
        self.login.execute(email, password).await
    }

    /// End the provider session; session state held elsewhere is untouched
    pub async fn logout(&self) -> AuthResult<()> {
        self.logout.execute().await
    }

    /// Identity of the current session, `None` when signed out or unreachable
    pub async fn current_identity(&self) -> Outcome<Option<Identity>, EnrichmentWarning> {
        self.current.execute().await
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> AuthResult<()> {
        self.update_profile.execute(update).await
    }
}
