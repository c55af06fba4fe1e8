//! Wire DTOs for the backend REST boundary.
//!
//! DESIGN
//! ======
//! The backend speaks camelCase JSON, so every record type renames its
//! fields on the wire. Optional payload fields are skipped entirely when
//! unset rather than serialized as `null`; the backend treats an absent
//! key and an absent value differently for partial updates.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Access level attached to a portal account.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full access, including the staff directory.
    Admin,
    /// Patient management only.
    Staff,
}

impl Role {
    /// Wire spelling of the role, matching the `<select>` option values.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Staff => "STAFF",
        }
    }

    /// Parse the wire spelling back into a role.
    pub fn parse(value: &str) -> Option<Role> {
        match value {
            "ADMIN" => Some(Role::Admin),
            "STAFF" => Some(Role::Staff),
            _ => None,
        }
    }
}

/// A portal account, both the signed-in identity and a staff-directory row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique account identifier.
    pub id: String,
    /// Sign-in email address, unique per hospital.
    pub email: String,
    /// Access level.
    pub role: Role,
    /// Hospital this account belongs to.
    pub hospital_id: String,
    /// ISO 8601 creation timestamp; absent on the session endpoints.
    #[serde(default)]
    pub created_at: String,
}

impl User {
    /// Whether this account may see the staff directory.
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

/// A patient record as returned by the patients endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    /// Unique patient identifier.
    pub id: String,
    /// Patient display name.
    pub full_name: String,
    /// ISO 8601 date, sometimes with a time suffix the UI strips.
    pub date_of_birth: Option<String>,
    /// Free-form gender label chosen from the form options.
    pub gender: Option<String>,
    /// Contact number as entered.
    pub mobile: Option<String>,
    /// ISO 8601 creation timestamp.
    #[serde(default)]
    pub created_at: String,
}

/// Create/update body for a patient record.
///
/// Optional fields left `None` are omitted from the JSON body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientPayload {
    pub full_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
}

/// Create/update body for a portal account.
///
/// `password` is only present when creating; updates never send it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPayload {
    pub email: String,
    pub role: Role,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Body for `POST /api/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Response envelope shared by the login and session-probe endpoints.
///
/// A 2xx response with `success: false` or a missing `user` still means
/// "not signed in"; callers must check both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthEnvelope {
    pub success: bool,
    #[serde(default)]
    pub user: Option<User>,
}
