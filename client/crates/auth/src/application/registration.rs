//! Registration form validation
//!
//! Checks the raw form before anything is sent to the provider. Every field
//! is checked so the form can show all problems at once.

use std::collections::BTreeMap;
use std::fmt;

use crate::application::messages;
use crate::domain::repository::SignUpRequest;
use crate::domain::value_object::{email::Email, phone::Phone};

const MIN_PASSWORD_CHARS: usize = 6;

/// Form fields that can carry a validation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FormField {
    FullName,
    Email,
    Phone,
    Password,
    ConfirmPassword,
}

impl FormField {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FormField::FullName => "full_name",
            FormField::Email => "email",
            FormField::Phone => "phone",
            FormField::Password => "password",
            FormField::ConfirmPassword => "confirm_password",
        }
    }
}

/// Field -> message map, in form order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<FormField, &'static str>);

impl FieldErrors {
    pub(crate) fn insert(&mut self, field: FormField, message: &'static str) {
        self.0.insert(field, message);
    }

    pub fn get(&self, field: FormField) -> Option<&'static str> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message of the first invalid field
    pub fn first_message(&self) -> Option<&'static str> {
        self.0.values().next().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormField, &'static str)> + '_ {
        self.0.iter().map(|(field, message)| (*field, *message))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, message)| format!("{}: {}", field.as_str(), message))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Raw registration form input
#[derive(Debug, Clone, Default)]
pub struct RegistrationForm {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub university: Option<String>,
    pub major: Option<String>,
}

impl RegistrationForm {
    /// Validate every field; on success the provider request is ready to send
    pub fn validate(&self) -> Result<SignUpRequest, FieldErrors> {
        let mut errors = FieldErrors::default();

        let full_name = self.full_name.trim();
        if full_name.is_empty() {
            errors.insert(FormField::FullName, messages::FULL_NAME_REQUIRED);
        }

        let email = if self.email.trim().is_empty() {
            errors.insert(FormField::Email, messages::EMAIL_REQUIRED);
            None
        } else {
            Email::new(self.email.as_str())
                .map_err(|_| errors.insert(FormField::Email, messages::EMAIL_INVALID))
                .ok()
        };

        let phone = if self.phone.trim().is_empty() {
            errors.insert(FormField::Phone, messages::PHONE_REQUIRED);
            None
        } else {
            Phone::new(&self.phone)
                .map_err(|_| errors.insert(FormField::Phone, messages::PHONE_INVALID))
                .ok()
        };

        if self.password.is_empty() {
            errors.insert(FormField::Password, messages::PASSWORD_REQUIRED);
        } else if self.password.chars().count() < MIN_PASSWORD_CHARS {
            errors.insert(FormField::Password, messages::PASSWORD_TOO_SHORT);
        }

        if self.confirm_password.is_empty() {
            errors.insert(FormField::ConfirmPassword, messages::CONFIRMATION_REQUIRED);
        } else if self.confirm_password != self.password {
            errors.insert(FormField::ConfirmPassword, messages::CONFIRMATION_MISMATCH);
        }

        match (email, errors.is_empty()) {
            (Some(email), true) => Ok(SignUpRequest {
                email,
                password: self.password.clone(),
                full_name: full_name.to_string(),
                phone,
                university: non_blank(self.university.as_deref()),
                major: non_blank(self.major.as_deref()),
            }),
            _ => Err(errors),
        }
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
