use crate::auth::{AuthContext, LOGIN_FAILED_MESSAGE};
use crate::routes::Route;

/// Login form state
#[derive(Debug, Clone, Default)]
pub struct LoginPage {
    pub email: String,
    pub password: String,
    error: Option<String>,
    loading: bool,
    from: Option<Route>,
}

impl LoginPage {
    pub const TITLE: &'static str = "Contract AI Review Portal";

    /// `from` is the protected route that sent the user here
    pub fn new(from: Option<Route>) -> Self {
        Self {
            from,
            ..Self::default()
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Submit the form; on success returns the route to navigate to
    pub async fn submit(&mut self, auth: &mut AuthContext) -> Option<Route> {
        self.error = None;
        self.loading = true;

        let ok = auth.login(&self.email, &self.password).await;
        self.loading = false;

        if ok {
            Some(self.from.take().unwrap_or(Route::Documents))
        } else {
            self.error = Some(LOGIN_FAILED_MESSAGE.to_string());
            None
        }
    }
}
