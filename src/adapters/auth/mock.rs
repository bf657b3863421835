//! Mock authentication adapter.
//!
//! Implements the `AuthProvider` port against a fixed credential table,
//! avoiding the need for a real identity backend in development and tests.
//! Three demo accounts cover the three roles:
//!
//! | email                       | password     | role     |
//! |-----------------------------|--------------|----------|
//! | admin@tourcraft.example     | admin-demo   | Admin    |
//! | manager@tourcraft.example   | manager-demo | Manager  |
//! | operator@tourcraft.example  | operator-demo| Operator |

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::foundation::UserId;
use crate::ports::{AuthError, AuthProvider, AuthSession, AuthenticatedUser, Credentials, Role};

/// Mock auth provider with a fixed credential table and one active session.
#[derive(Debug)]
pub struct MockAuthProvider {
    /// Map of email to (password, user)
    accounts: RwLock<HashMap<String, (String, AuthenticatedUser)>>,
    session: RwLock<Option<AuthSession>>,
    /// Optional error to return for all logins (for error testing)
    force_error: RwLock<Option<AuthError>>,
}

impl MockAuthProvider {
    /// Creates a provider preloaded with the three demo accounts.
    pub fn new() -> Self {
        let provider = Self::empty();
        provider.register(
            "admin-demo",
            demo_user("admin", "admin@tourcraft.example", Role::Admin),
        );
        provider.register(
            "manager-demo",
            demo_user("manager", "manager@tourcraft.example", Role::Manager),
        );
        provider.register(
            "operator-demo",
            demo_user("operator", "operator@tourcraft.example", Role::Operator),
        );
        provider
    }

    /// Creates a provider with no accounts.
    pub fn empty() -> Self {
        Self {
            accounts: RwLock::new(HashMap::new()),
            session: RwLock::new(None),
            force_error: RwLock::new(None),
        }
    }

    /// Adds an account to the credential table.
    pub fn register(&self, password: impl Into<String>, user: AuthenticatedUser) {
        self.accounts
            .write()
            .unwrap()
            .insert(user.email.clone(), (password.into(), user));
    }

    /// Forces all logins to return the specified error.
    pub fn with_error(self, error: AuthError) -> Self {
        *self.force_error.write().unwrap() = Some(error);
        self
    }

    /// Clears the forced error.
    pub fn clear_error(&self) {
        *self.force_error.write().unwrap() = None;
    }

    /// Returns the number of registered accounts.
    pub fn account_count(&self) -> usize {
        self.accounts.read().unwrap().len()
    }
}

impl Default for MockAuthProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn demo_user(id: &str, email: &str, role: Role) -> AuthenticatedUser {
    // Demo ids are static non-empty strings
    let mut user = AuthenticatedUser::with_role(UserId::new(id).unwrap(), email, role);
    user.display_name = Some(format!("Demo {}", role_label(role)));
    user
}

fn role_label(role: Role) -> &'static str {
    match role {
        Role::Admin => "Admin",
        Role::Manager => "Manager",
        Role::Operator => "Operator",
    }
}

#[async_trait]
impl AuthProvider for MockAuthProvider {
    async fn login(&self, credentials: &Credentials) -> Result<AuthSession, AuthError> {
        if let Some(error) = self.force_error.read().unwrap().clone() {
            return Err(error);
        }

        let accounts = self.accounts.read().unwrap();
        let (password, user) = accounts
            .get(&credentials.email)
            .ok_or(AuthError::InvalidCredentials)?;

        if *password != credentials.password {
            return Err(AuthError::InvalidCredentials);
        }

        let session = AuthSession {
            user: user.clone(),
            token: Uuid::new_v4().to_string(),
        };
        drop(accounts);

        *self.session.write().unwrap() = Some(session.clone());
        Ok(session)
    }

    async fn logout(&self) -> Result<(), AuthError> {
        *self.session.write().unwrap() = None;
        Ok(())
    }

    async fn current_user(&self) -> Option<AuthenticatedUser> {
        self.session
            .read()
            .unwrap()
            .as_ref()
            .map(|s| s.user.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager_credentials() -> Credentials {
        Credentials {
            email: "manager@tourcraft.example".to_string(),
            password: "manager-demo".to_string(),
        }
    }

    #[tokio::test]
    async fn demo_accounts_can_log_in() {
        let provider = MockAuthProvider::new();

        let session = provider.login(&manager_credentials()).await.unwrap();

        assert_eq!(session.user.role, Role::Manager);
        assert!(session.user.has_permission("quotations.send"));
        assert!(!session.token.is_empty());
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let provider = MockAuthProvider::new();

        let result = provider
            .login(&Credentials {
                email: "manager@tourcraft.example".to_string(),
                password: "wrong".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn unknown_email_is_rejected() {
        let provider = MockAuthProvider::new();

        let result = provider
            .login(&Credentials {
                email: "nobody@tourcraft.example".to_string(),
                password: "anything".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_establishes_current_user_and_logout_clears_it() {
        let provider = MockAuthProvider::new();

        assert!(provider.current_user().await.is_none());

        provider.login(&manager_credentials()).await.unwrap();
        let user = provider.current_user().await.unwrap();
        assert_eq!(user.email, "manager@tourcraft.example");

        provider.logout().await.unwrap();
        assert!(provider.current_user().await.is_none());
    }

    #[tokio::test]
    async fn logout_without_session_is_a_no_op() {
        let provider = MockAuthProvider::new();
        provider.logout().await.unwrap();
    }

    #[tokio::test]
    async fn forced_error_surfaces_on_login() {
        let provider = MockAuthProvider::new()
            .with_error(AuthError::ServiceUnavailable("maintenance".to_string()));

        let result = provider.login(&manager_credentials()).await;

        assert!(matches!(result, Err(AuthError::ServiceUnavailable(_))));

        provider.clear_error();
        assert!(provider.login(&manager_credentials()).await.is_ok());
    }

    #[test]
    fn demo_table_has_three_accounts() {
        let provider = MockAuthProvider::new();
        assert_eq!(provider.account_count(), 3);
    }
}
