//! Session state and the hardcoded credential check
//!
//! There is exactly one valid account. The session lives only as long as
//! the `AuthContext` value that holds it.

use std::time::Duration;

use review_types::{AuthState, User};
use tracing::{info, warn};

use crate::error::{Result, ReviewError};

pub const DEMO_EMAIL: &str = "admin@contract.ai";
pub const DEMO_PASSWORD: &str = "password123";

/// Shown for every failed login, whatever was wrong
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password.";

const LOGIN_DELAY: Duration = Duration::from_millis(300);

/// The one account allowed in, and the user it logs in as
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    pub user: User,
}

impl Default for Credentials {
    fn default() -> Self {
        Self {
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
            user: User {
                name: "Admin User".to_string(),
                email: DEMO_EMAIL.to_string(),
            },
        }
    }
}

impl Credentials {
    /// Exact, case-sensitive comparison of both fields
    pub fn matches(&self, email: &str, password: &str) -> bool {
        email == self.email && password == self.password
    }
}

#[derive(Debug, Clone)]
pub struct AuthContext {
    state: AuthState,
    credentials: Credentials,
    delay: Duration,
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthContext {
    pub fn new() -> Self {
        Self::with_credentials(Credentials::default())
    }

    pub fn with_credentials(credentials: Credentials) -> Self {
        Self {
            state: AuthState::default(),
            credentials,
            delay: LOGIN_DELAY,
        }
    }

    /// Override the simulated login latency
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Check the pair after the login delay; a failure leaves state alone
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        if self.credentials.matches(email, password) {
            self.state = AuthState {
                is_authenticated: true,
                user: Some(self.credentials.user.clone()),
            };
            info!("Logged in as {}", email);
            true
        } else {
            warn!("Rejected login for {}", email);
            false
        }
    }

    pub fn logout(&mut self) {
        if let Some(user) = &self.state.user {
            info!("Logged out {}", user.email);
        }
        self.state = AuthState::default();
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated
    }

    pub fn user(&self) -> Option<&User> {
        self.state.user.as_ref()
    }

    /// The logged in user, for code that must not run without a session
    pub fn require_user(&self) -> Result<&User> {
        self.user().ok_or(ReviewError::NotAuthenticated)
    }
}
