//! Route table and session guard.
//!
//! Every view sits behind a route with an authentication policy. The guard
//! is evaluated once per route entry: protected routes redirect to the
//! login view when no session exists, and the public-only auth views
//! redirect to the dashboard when one does. The root route resolves purely
//! on session presence.

use quill_shared::PostId;

/// The navigable route surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/` — redirects to dashboard or login depending on the session.
    Root,
    Login,
    Register,
    Dashboard,
    CreatePost,
    EditPost(PostId),
    PostDetails(PostId),
    Favourites,
    Analytics,
    /// Fallback for anything unrecognised.
    NotFound(String),
}

/// What a route demands of the session before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthPolicy {
    /// Renders only when a session exists.
    Required,
    /// Renders only when no session exists (login, register).
    Forbidden,
    /// Renders either way.
    Open,
}

/// Outcome of guarding a route against the current session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Render,
    RedirectToLogin,
    RedirectToDashboard,
}

impl Route {
    /// Parse a path string. Matching is case-insensitive (`/Login` and
    /// `/login` are the same view); ids keep their case.
    pub fn parse(path: &str) -> Route {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Route::Root;
        }

        let lower = trimmed.to_ascii_lowercase();
        match lower.as_str() {
            "/login" => Route::Login,
            "/register" => Route::Register,
            "/dashboard" => Route::Dashboard,
            "/create-post" => Route::CreatePost,
            "/favourites" => Route::Favourites,
            "/analytics" => Route::Analytics,
            _ => {
                if let Some(id) = lower.strip_prefix("/edit-post/") {
                    if !id.is_empty() && !id.contains('/') {
                        // ids keep their original case
                        let id = &trimmed[trimmed.len() - id.len()..];
                        return Route::EditPost(PostId::from(id));
                    }
                }
                if let Some(id) = lower.strip_prefix("/post/") {
                    if !id.is_empty() && !id.contains('/') {
                        let id = &trimmed[trimmed.len() - id.len()..];
                        return Route::PostDetails(PostId::from(id));
                    }
                }
                Route::NotFound(path.to_string())
            }
        }
    }

    pub fn auth_policy(&self) -> AuthPolicy {
        match self {
            Route::Login | Route::Register => AuthPolicy::Forbidden,
            Route::Dashboard
            | Route::CreatePost
            | Route::EditPost(_)
            | Route::PostDetails(_)
            | Route::Favourites
            | Route::Analytics => AuthPolicy::Required,
            Route::Root | Route::NotFound(_) => AuthPolicy::Open,
        }
    }
}

/// Decide whether `route` renders or redirects given session presence.
pub fn resolve(route: &Route, session_present: bool) -> RouteDecision {
    // The root route is itself a redirect.
    if *route == Route::Root {
        return if session_present {
            RouteDecision::RedirectToDashboard
        } else {
            RouteDecision::RedirectToLogin
        };
    }

    match (route.auth_policy(), session_present) {
        (AuthPolicy::Required, false) => RouteDecision::RedirectToLogin,
        (AuthPolicy::Forbidden, true) => RouteDecision::RedirectToDashboard,
        _ => RouteDecision::Render,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_static_routes() {
        assert_eq!(Route::parse("/"), Route::Root);
        assert_eq!(Route::parse(""), Route::Root);
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/Register"), Route::Register);
        assert_eq!(Route::parse("/dashboard/"), Route::Dashboard);
        assert_eq!(Route::parse("/create-post"), Route::CreatePost);
        assert_eq!(Route::parse("/analytics"), Route::Analytics);
        assert_eq!(Route::parse("/favourites"), Route::Favourites);
    }

    #[test]
    fn parse_parameterised_routes() {
        assert_eq!(Route::parse("/post/7"), Route::PostDetails(PostId::from("7")));
        assert_eq!(
            Route::parse("/edit-post/aB3"),
            Route::EditPost(PostId::from("aB3"))
        );
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert!(matches!(Route::parse("/nope"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/post/"), Route::NotFound(_)));
        assert!(matches!(Route::parse("/post/1/extra"), Route::NotFound(_)));
    }

    #[test]
    fn guard_truth_table() {
        // required + no session -> login
        assert_eq!(resolve(&Route::Dashboard, false), RouteDecision::RedirectToLogin);
        assert_eq!(
            resolve(&Route::PostDetails(PostId::from("1")), false),
            RouteDecision::RedirectToLogin
        );

        // forbidden + session -> dashboard
        assert_eq!(resolve(&Route::Login, true), RouteDecision::RedirectToDashboard);
        assert_eq!(
            resolve(&Route::Register, true),
            RouteDecision::RedirectToDashboard
        );

        // everything else renders
        assert_eq!(resolve(&Route::Dashboard, true), RouteDecision::Render);
        assert_eq!(resolve(&Route::Login, false), RouteDecision::Render);
        assert_eq!(
            resolve(&Route::NotFound("/x".into()), false),
            RouteDecision::Render
        );
        assert_eq!(
            resolve(&Route::NotFound("/x".into()), true),
            RouteDecision::Render
        );
    }

    #[test]
    fn root_redirects_on_session_presence() {
        assert_eq!(resolve(&Route::Root, true), RouteDecision::RedirectToDashboard);
        assert_eq!(resolve(&Route::Root, false), RouteDecision::RedirectToLogin);
    }
}
