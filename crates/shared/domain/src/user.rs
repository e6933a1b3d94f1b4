//! User domain entity and related types.

use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::constants::{ROLE_ADMIN, ROLE_NON_ADMIN};
use crate::error::DomainError;

/// User roles enumeration.
///
/// The role set is closed: a stored value outside it is rejected rather than
/// mapped to a default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    NonAdmin,
}

impl UserRole {
    /// Stored string form of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => ROLE_ADMIN,
            UserRole::NonAdmin => ROLE_NON_ADMIN,
        }
    }
}

impl FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_ADMIN => Ok(UserRole::Admin),
            ROLE_NON_ADMIN => Ok(UserRole::NonAdmin),
            other => Err(DomainError::UnknownRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub role: UserRole,
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub country: Option<String>,
    pub about_me: Option<String>,
    pub dob: Option<NaiveDate>,
    pub contact_number: Option<String>,
}

impl User {
    /// Check if the user holds the given role
    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role
    }
}

/// Public profile of a user (safe to return to any signed-in client)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserProfile {
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Unique user name
    pub user_name: String,
    /// Email address
    pub email_address: String,
    /// Country of residence
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// Free-form self description
    #[serde(skip_serializing_if = "Option::is_none")]
    pub about_me: Option<String>,
    /// Date of birth
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dob: Option<NaiveDate>,
    /// Contact number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_number: Option<String>,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            first_name: user.first_name,
            last_name: user.last_name,
            user_name: user.user_name,
            email_address: user.email,
            country: user.country,
            about_me: user.about_me,
            dob: user.dob,
            contact_number: user.contact_number,
        }
    }
}

impl From<&User> for UserProfile {
    fn from(user: &User) -> Self {
        Self {
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            user_name: user.user_name.clone(),
            email_address: user.email.clone(),
            country: user.country.clone(),
            about_me: user.about_me.clone(),
            dob: user.dob,
            contact_number: user.contact_number.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_round_trips_through_stored_form() {
        assert_eq!("admin".parse::<UserRole>(), Ok(UserRole::Admin));
        assert_eq!("nonadmin".parse::<UserRole>(), Ok(UserRole::NonAdmin));
        assert_eq!(UserRole::NonAdmin.to_string(), "nonadmin");
    }

    #[test]
    fn test_unknown_role_is_rejected() {
        let err = "superuser".parse::<UserRole>().unwrap_err();
        assert_eq!(err, DomainError::UnknownRole("superuser".to_string()));
    }

    #[test]
    fn test_profile_copies_fields() {
        let user = User {
            id: Uuid::new_v4(),
            role: UserRole::NonAdmin,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            user_name: "ada".to_string(),
            email: "ada@example.com".to_string(),
            country: Some("UK".to_string()),
            about_me: None,
            dob: NaiveDate::from_ymd_opt(1815, 12, 10),
            contact_number: None,
        };

        let profile = UserProfile::from(&user);
        assert_eq!(profile.user_name, "ada");
        assert_eq!(profile.email_address, "ada@example.com");
        assert_eq!(profile.dob, NaiveDate::from_ymd_opt(1815, 12, 10));
    }
}
