//! Legal Notice Copy

use crate::route::AppRoute;

/// Disclaimer shown on every page
pub const NOTICE_TEXT: &str = "本内容仅供参考，不构成医疗建议！";

/// Label of the link to the full statement
pub const FULL_STATEMENT_LABEL: &str = "完整声明";

/// Where the banner link points
pub const FULL_STATEMENT_ROUTE: AppRoute = AppRoute::Legal;

/// Tailwind classes for the banner container
pub const BANNER_CLASS: &str = "bg-legal/5 border-t-4 border-legal text-legal p-4";

/// Tailwind classes for the banner paragraph
pub const TEXT_CLASS: &str = "text-sm text-center";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_links_to_legal_page() {
        assert_eq!(FULL_STATEMENT_ROUTE.path(), "/legal");
    }

    #[test]
    fn test_banner_uses_legal_palette() {
        assert!(BANNER_CLASS.split_whitespace().any(|c| c == "text-legal"));
        assert!(BANNER_CLASS.split_whitespace().any(|c| c == "border-legal"));
    }
}
