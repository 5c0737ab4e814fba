//! Path classification and the gate decision procedure.
//!
//! Both functions here are total and pure: every path maps to exactly one
//! class, anything unlisted is `Protected`, and identical inputs always
//! produce identical decisions.

/// How a route pattern is compared against a request path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Prefix,
}

/// One entry of the static classification table.
#[derive(Debug, Clone, Copy)]
pub struct RoutePattern {
    pub pattern: &'static str,
    pub kind: MatchKind,
}

impl RoutePattern {
    const fn exact(pattern: &'static str) -> Self {
        RoutePattern {
            pattern,
            kind: MatchKind::Exact,
        }
    }

    const fn prefix(pattern: &'static str) -> Self {
        RoutePattern {
            pattern,
            kind: MatchKind::Prefix,
        }
    }

    fn matches(&self, path: &str) -> bool {
        match self.kind {
            MatchKind::Exact => path == self.pattern,
            MatchKind::Prefix => path.starts_with(self.pattern),
        }
    }
}

/// Pages reachable without a session.
pub const PUBLIC_PAGES: &[RoutePattern] = &[
    RoutePattern::exact("/"),
    RoutePattern::exact("/login"),
    RoutePattern::exact("/registro"),
    RoutePattern::exact("/recuperar"),
    RoutePattern::exact("/restablecer"),
    RoutePattern::exact("/verificacion"),
    RoutePattern::exact("/terminos"),
    RoutePattern::exact("/privacidad"),
];

/// API namespaces reachable without a session.
pub const PUBLIC_API_PREFIXES: &[RoutePattern] = &[
    RoutePattern::prefix("/api/auth/login"),
    RoutePattern::prefix("/api/auth/registro"),
    RoutePattern::prefix("/api/auth/verificar"),
    RoutePattern::prefix("/api/auth/reset-password"),
    RoutePattern::prefix("/api/rates"),
];

/// Auth entry pages an already-authenticated user is bounced away from.
pub const AUTH_ENTRY_PAGES: &[&str] = &["/login", "/registro"];

/// Classification of a request path. Derived per request, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Public,
    PublicApi,
    Protected,
}

/// Classify a path: exact public pages first, then public API prefixes,
/// everything else protected.
pub fn classify(path: &str) -> RouteClass {
    if PUBLIC_PAGES.iter().any(|p| p.matches(path)) {
        return RouteClass::Public;
    }
    if PUBLIC_API_PREFIXES.iter().any(|p| p.matches(path)) {
        return RouteClass::PublicApi;
    }
    RouteClass::Protected
}

/// Outcome of the request gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// Request proceeds unmodified.
    Allow,
    /// Unauthenticated request to a protected path; `return_to` carries the
    /// originally requested path.
    RedirectToLogin { return_to: String },
    /// Authenticated request to an auth entry page.
    RedirectToDashboard,
}

/// The gate decision procedure. Token presence only; the token value is
/// validated deeper in the request path, not here.
pub fn decide(path: &str, session_present: bool) -> GateDecision {
    if !session_present && classify(path) == RouteClass::Protected {
        return GateDecision::RedirectToLogin {
            return_to: path.to_string(),
        };
    }
    if session_present && AUTH_ENTRY_PAGES.contains(&path) {
        return GateDecision::RedirectToDashboard;
    }
    GateDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn public_pages_match_exactly() {
        assert_eq!(classify("/"), RouteClass::Public);
        assert_eq!(classify("/login"), RouteClass::Public);
        assert_eq!(classify("/terminos"), RouteClass::Public);
        // A public page is not a prefix.
        assert_eq!(classify("/login/extra"), RouteClass::Protected);
    }

    #[test]
    fn public_apis_match_by_prefix() {
        assert_eq!(classify("/api/rates"), RouteClass::PublicApi);
        assert_eq!(classify("/api/rates/stream"), RouteClass::PublicApi);
        assert_eq!(classify("/api/auth/login"), RouteClass::PublicApi);
        assert_eq!(classify("/api/auth/reset-password/confirm"), RouteClass::PublicApi);
    }

    #[test]
    fn unlisted_paths_default_to_protected() {
        assert_eq!(classify("/dashboard"), RouteClass::Protected);
        assert_eq!(classify("/secret"), RouteClass::Protected);
        assert_eq!(classify("/api/transfers"), RouteClass::Protected);
        assert_eq!(classify(""), RouteClass::Protected);
    }

    #[test]
    fn unauthenticated_protected_path_redirects_to_login() {
        assert_eq!(
            decide("/dashboard", false),
            GateDecision::RedirectToLogin {
                return_to: "/dashboard".to_string()
            }
        );
        assert_eq!(
            decide("/secret", false),
            GateDecision::RedirectToLogin {
                return_to: "/secret".to_string()
            }
        );
    }

    #[test]
    fn unauthenticated_public_paths_are_allowed() {
        assert_eq!(decide("/", false), GateDecision::Allow);
        assert_eq!(decide("/login", false), GateDecision::Allow);
        assert_eq!(decide("/api/rates", false), GateDecision::Allow);
    }

    #[test]
    fn authenticated_auth_entry_pages_redirect_to_dashboard() {
        assert_eq!(decide("/login", true), GateDecision::RedirectToDashboard);
        assert_eq!(decide("/registro", true), GateDecision::RedirectToDashboard);
        // Other public pages stay reachable when authenticated.
        assert_eq!(decide("/terminos", true), GateDecision::Allow);
    }

    #[test]
    fn authenticated_requests_pass_everywhere_else() {
        assert_eq!(decide("/dashboard", true), GateDecision::Allow);
        assert_eq!(decide("/api/transfers", true), GateDecision::Allow);
    }

    #[test]
    fn decision_is_idempotent() {
        for _ in 0..3 {
            assert_eq!(
                decide("/dashboard", false),
                GateDecision::RedirectToLogin {
                    return_to: "/dashboard".to_string()
                }
            );
            assert_eq!(decide("/api/rates", false), GateDecision::Allow);
        }
    }
}
