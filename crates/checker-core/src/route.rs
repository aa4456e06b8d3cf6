//! Route Table
//!
//! Three literal paths, matched exactly. Anything else resolves to no page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ShellError;

/// A page the shell can show in its content region
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum AppRoute {
    Home,
    Checker,
    Legal,
}

impl AppRoute {
    /// All routes, in table order
    pub const ALL: [AppRoute; 3] = [AppRoute::Home, AppRoute::Checker, AppRoute::Legal];

    /// Literal URL path for this route
    pub const fn path(self) -> &'static str {
        match self {
            AppRoute::Home => "/",
            AppRoute::Checker => "/check",
            AppRoute::Legal => "/legal",
        }
    }

    /// Label shown in the navbar
    pub const fn label(self) -> &'static str {
        match self {
            AppRoute::Home => "首页",
            AppRoute::Checker => "补剂检查",
            AppRoute::Legal => "法律声明",
        }
    }

    /// Name of the page component the route renders
    pub const fn page_name(self) -> &'static str {
        match self {
            AppRoute::Home => "HomePage",
            AppRoute::Checker => "CheckerPage",
            AppRoute::Legal => "LegalPage",
        }
    }

    /// Exact-match lookup of a URL pathname.
    ///
    /// A single trailing `/` is accepted on non-root routes, the same as the
    /// client router. No case folding or prefix matching: `/Check` and
    /// `/check//` are misses.
    pub fn resolve(path: &str) -> Option<AppRoute> {
        Self::ALL.into_iter().find(|route| route.matches(path))
    }

    fn matches(self, path: &str) -> bool {
        path == self.path()
            || (self != AppRoute::Home && path.strip_suffix('/') == Some(self.path()))
    }
}

impl fmt::Display for AppRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for AppRoute {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| ShellError::UnknownRoute(s.to_string()))
    }
}

impl TryFrom<String> for AppRoute {
    type Error = ShellError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AppRoute> for &'static str {
    fn from(route: AppRoute) -> Self {
        route.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_defined_paths_resolve() {
        assert_eq!(AppRoute::resolve("/"), Some(AppRoute::Home));
        assert_eq!(AppRoute::resolve("/check"), Some(AppRoute::Checker));
        assert_eq!(AppRoute::resolve("/legal"), Some(AppRoute::Legal));
    }

    #[test]
    fn test_every_route_resolves_to_itself() {
        for route in AppRoute::ALL {
            assert_eq!(AppRoute::resolve(route.path()), Some(route));
        }
    }

    #[test]
    fn test_paths_are_distinct() {
        let paths: HashSet<_> = AppRoute::ALL.iter().map(|r| r.path()).collect();
        assert_eq!(paths.len(), AppRoute::ALL.len());
    }

    #[test]
    fn test_unknown_path_renders_nothing() {
        assert_eq!(AppRoute::resolve("/unknown"), None);
        assert_eq!(AppRoute::resolve(""), None);
    }

    #[test]
    fn test_single_trailing_slash_matches() {
        assert_eq!(AppRoute::resolve("/check/"), Some(AppRoute::Checker));
        assert_eq!(AppRoute::resolve("/legal/"), Some(AppRoute::Legal));
    }

    #[test]
    fn test_match_is_exact() {
        for miss in ["/check//", "/Check", "/legal/terms", "/checker", "//", "/check?x=1"] {
            assert_eq!(AppRoute::resolve(miss), None, "{miss} should not match");
        }
    }

    #[test]
    fn test_from_str_reports_unknown_route() {
        let err = "/nope".parse::<AppRoute>().unwrap_err();
        assert_eq!(err, ShellError::UnknownRoute("/nope".into()));
    }

    #[test]
    fn test_serializes_as_path() {
        let json = serde_json::to_string(&AppRoute::ALL).unwrap();
        assert_eq!(json, r#"["/","/check","/legal"]"#);

        let back: AppRoute = serde_json::from_str(r#""/legal""#).unwrap();
        assert_eq!(back, AppRoute::Legal);
        assert!(serde_json::from_str::<AppRoute>(r#""/admin""#).is_err());
    }
}
