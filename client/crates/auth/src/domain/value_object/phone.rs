//! Phone Number Value Object
//!
//! Local mobile numbers: 10 or 11 digits once whitespace is removed.

use kernel::error::app_error::{AppError, AppResult};
use serde::{Deserialize, Serialize};

const PHONE_MIN_DIGITS: usize = 10;
const PHONE_MAX_DIGITS: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> AppResult<Self> {
        let digits: String = raw.chars().filter(|c| !c.is_whitespace()).collect();

        if digits.is_empty() {
            return Err(AppError::bad_request("Phone number cannot be empty"));
        }

        let valid_length = (PHONE_MIN_DIGITS..=PHONE_MAX_DIGITS).contains(&digits.len());
        if !valid_length || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::bad_request(format!(
                "Phone number must be {}-{} digits",
                PHONE_MIN_DIGITS, PHONE_MAX_DIGITS
            )));
        }

        Ok(Self(digits))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Phone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
