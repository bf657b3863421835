//! Auth provider port - the session collaborator contract.
//!
//! The quotation core never implements authentication; it only consumes this
//! shape. Any identity backend can populate these types. The core must keep
//! working when no user context is available: `current_user` returning None
//! simply means role-gated UI affordances stay hidden.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::foundation::UserId;

/// Back-office role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Manager,
    Operator,
}

impl Role {
    /// Permissions granted to the role out of the box.
    pub fn default_permissions(&self) -> Vec<String> {
        let perms: &[&str] = match self {
            Role::Admin => &[
                "quotations.manage",
                "quotations.send",
                "catalogue.manage",
                "users.manage",
            ],
            Role::Manager => &["quotations.manage", "quotations.send", "catalogue.manage"],
            Role::Operator => &["quotations.manage"],
        };
        perms.iter().map(|p| p.to_string()).collect()
    }
}

/// Authenticated user as reported by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    pub id: UserId,
    pub email: String,
    pub display_name: Option<String>,
    pub role: Role,
    pub permissions: Vec<String>,
}

impl AuthenticatedUser {
    /// Creates a user with the role's default permission set.
    pub fn with_role(id: UserId, email: impl Into<String>, role: Role) -> Self {
        Self {
            id,
            email: email.into(),
            display_name: None,
            role,
            permissions: role.default_permissions(),
        }
    }

    /// Checks whether the user holds a permission.
    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    /// Checks whether the user holds a role.
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

/// Login credential pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: AuthenticatedUser,
    /// Opaque bearer token; the core never inspects it.
    pub token: String,
}

/// Authentication errors reported by the collaborator.
#[derive(Debug, Clone, Error)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("No active session")]
    NotAuthenticated,

    #[error("Auth service unavailable: {0}")]
    ServiceUnavailable(String),
}

/// Port for the authentication collaborator.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Validates credentials and opens a session.
    ///
    /// # Errors
    /// - `InvalidCredentials` when the pair is not accepted
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, AuthError>;

    /// Ends the active session; a missing session is a no-op.
    async fn logout(&self) -> Result<(), AuthError>;

    /// Returns the active user, if any.
    async fn current_user(&self) -> Option<AuthenticatedUser>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn operator() -> AuthenticatedUser {
        AuthenticatedUser::with_role(
            UserId::new("op-1").unwrap(),
            "operator@agency.example",
            Role::Operator,
        )
    }

    #[test]
    fn role_grants_default_permissions() {
        let user = operator();
        assert!(user.has_permission("quotations.manage"));
        assert!(!user.has_permission("quotations.send"));
    }

    #[test]
    fn admin_can_manage_users() {
        let admin = AuthenticatedUser::with_role(
            UserId::new("admin-1").unwrap(),
            "admin@agency.example",
            Role::Admin,
        );
        assert!(admin.has_permission("users.manage"));
        assert!(admin.has_role(Role::Admin));
        assert!(!admin.has_role(Role::Operator));
    }

    #[test]
    fn auth_provider_trait_is_object_safe_and_send_sync() {
        fn _assert_trait_object(_: &dyn AuthProvider) {}
        fn _assert_arc_send_sync<T: Send + Sync + ?Sized>() {}
        _assert_arc_send_sync::<std::sync::Arc<dyn AuthProvider>>();
    }
}
