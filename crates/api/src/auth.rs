// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller identity and role checks.
//!
//! User accounts live with an external identity collaborator; the API
//! trusts the caller identity it is handed and only enforces role and
//! ownership rules on top of it.

use campstay_domain::UserId;

use crate::error::ApiError;

/// Caller roles for authorization.
///
/// The role set is closed. Unknown role strings must be rejected at the
/// boundary that constructs a [`Caller`], never defaulted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Regular user: may own listings, book stays, and review them.
    User,
    /// Administrator: may additionally resolve listing approval requests.
    Admin,
}

impl Role {
    /// Returns the lowercase string form of this role.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An authenticated caller with an associated role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller {
    /// The caller's identifier with the identity collaborator.
    pub user_id: UserId,
    /// The caller's display name, used in owner-facing notices.
    pub name: String,
    /// The role assigned to the caller.
    pub role: Role,
}

impl Caller {
    /// Creates a new caller.
    #[must_use]
    pub const fn new(user_id: UserId, name: String, role: Role) -> Self {
        Self {
            user_id,
            name,
            role,
        }
    }
}

/// Requires the caller to hold the admin role.
///
/// # Arguments
///
/// * `caller` - The authenticated caller
/// * `action` - The action being attempted, for the error message
///
/// # Errors
///
/// Returns `ApiError::Forbidden` if the caller is not an administrator.
pub fn require_admin(caller: &Caller, action: &str) -> Result<(), ApiError> {
    if caller.role == Role::Admin {
        Ok(())
    } else {
        tracing::warn!(user_id = %caller.user_id, action, "admin action refused");
        Err(ApiError::Forbidden {
            action: action.to_string(),
            message: format!("'{action}' requires the {} role", Role::Admin),
        })
    }
}
