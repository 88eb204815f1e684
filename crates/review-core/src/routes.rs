//! Page routes and the login gate in front of them

use std::fmt;

use crate::auth::AuthContext;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Login,
    Documents,
    Review(String),
}

impl Route {
    /// `/` and anything unrecognised land on the document list
    pub fn parse(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            ["login"] => Route::Login,
            ["documents", id] => Route::Review((*id).to_string()),
            _ => Route::Documents,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Login => "/login".to_string(),
            Route::Documents => "/documents".to_string(),
            Route::Review(id) => format!("/documents/{id}"),
        }
    }

    pub fn is_protected(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Outcome of asking for a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolved {
    Allow(Route),
    /// Send the user to login, then back to `from`
    Login { from: Route },
}

pub fn resolve(requested: Route, auth: &AuthContext) -> Resolved {
    if requested.is_protected() && !auth.is_authenticated() {
        Resolved::Login { from: requested }
    } else {
        Resolved::Allow(requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{DEMO_EMAIL, DEMO_PASSWORD};
    use std::time::Duration;

    #[test]
    fn parses_known_paths() {
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/documents"), Route::Documents);
        assert_eq!(
            Route::parse("/documents/doc-003/"),
            Route::Review("doc-003".into())
        );
        assert_eq!(Route::parse("/"), Route::Documents);
        assert_eq!(Route::parse("/settings/profile"), Route::Documents);
    }

    #[test]
    fn paths_round_trip() {
        for route in [
            Route::Login,
            Route::Documents,
            Route::Review("doc-001".into()),
        ] {
            assert_eq!(Route::parse(&route.path()), route);
        }
    }

    #[tokio::test]
    async fn protected_routes_need_a_session() {
        let mut auth = AuthContext::new().with_delay(Duration::ZERO);
        let target = Route::Review("doc-002".into());

        assert_eq!(
            resolve(target.clone(), &auth),
            Resolved::Login {
                from: target.clone()
            }
        );
        assert_eq!(resolve(Route::Login, &auth), Resolved::Allow(Route::Login));

        auth.login(DEMO_EMAIL, DEMO_PASSWORD).await;
        assert_eq!(resolve(target.clone(), &auth), Resolved::Allow(target));
    }
}
