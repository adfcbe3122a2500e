use strum_macros::EnumIter;

/// The HTML pages of the application. Every page is served the same SPA
/// shell; the frontend picks the view from the location path.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Page {
    Search,
    TestCases,
    TestCollections,
    ResultCollections,
    ResultCollection,
    ResultCase,
    Admin,
}

impl Page {
    /// Route pattern in actix-web syntax; ids only match digits.
    pub fn route(&self) -> &'static str {
        match self {
            Page::Search => "/",
            Page::TestCases => "/test-cases",
            Page::TestCollections => "/test-collections",
            Page::ResultCollections => r"/test-collections/{collection_id:\d+}/results",
            Page::ResultCollection => {
                r"/test-collections/{test_collection_id:\d+}/results/{result_collection_id:\d+}"
            }
            Page::ResultCase => {
                r"/test-collections/{test_collection_id:\d+}/results/{result_collection_id:\d+}/cases/{case_id:\d+}"
            }
            Page::Admin => "/admin",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Page::Search => "Search",
            Page::TestCases => "Test Cases",
            Page::TestCollections => "Test Collections",
            Page::ResultCollections => "Result Collections",
            Page::ResultCollection => "Result Collection",
            Page::ResultCase => "Result Case",
            Page::Admin => "Admin",
        }
    }

    /// Matches a location path against the page routes. Ids are plain
    /// digit runs, the same rule as the `\d+` route segments, and a single
    /// trailing slash is accepted.
    pub fn from_path(path: &str) -> Option<Page> {
        if !path.starts_with('/') {
            return None;
        }

        let trimmed = path.strip_suffix('/').unwrap_or(path);
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Some(Page::Search),
            ["test-cases"] => Some(Page::TestCases),
            ["admin"] => Some(Page::Admin),
            ["test-collections"] => Some(Page::TestCollections),
            ["test-collections", tc, "results"] if is_id(tc) => Some(Page::ResultCollections),
            ["test-collections", tc, "results", rc] if is_id(tc) && is_id(rc) => {
                Some(Page::ResultCollection)
            }
            ["test-collections", tc, "results", rc, "cases", case]
                if is_id(tc) && is_id(rc) && is_id(case) =>
            {
                Some(Page::ResultCase)
            }
            _ => None,
        }
    }
}

fn is_id(segment: &str) -> bool {
    !segment.is_empty() && segment.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn root_is_the_search_page() {
        assert_eq!(Page::from_path("/"), Some(Page::Search));
    }

    #[test]
    fn static_pages_match_with_and_without_trailing_slash() {
        assert_eq!(Page::from_path("/test-cases"), Some(Page::TestCases));
        assert_eq!(Page::from_path("/test-cases/"), Some(Page::TestCases));
        assert_eq!(Page::from_path("/admin"), Some(Page::Admin));
        assert_eq!(Page::from_path("/test-collections"), Some(Page::TestCollections));
    }

    #[test]
    fn nested_result_pages_require_numeric_ids() {
        assert_eq!(
            Page::from_path("/test-collections/3/results"),
            Some(Page::ResultCollections)
        );
        assert_eq!(
            Page::from_path("/test-collections/3/results/12"),
            Some(Page::ResultCollection)
        );
        assert_eq!(
            Page::from_path("/test-collections/3/results/12/cases/7"),
            Some(Page::ResultCase)
        );
        assert_eq!(Page::from_path("/test-collections/abc/results"), None);
        assert_eq!(Page::from_path("/test-collections/3/results/-1"), None);
        assert_eq!(Page::from_path("/test-collections/3/results/12/cases/x"), None);
    }

    #[test]
    fn ids_are_digit_runs_of_any_length() {
        assert_eq!(
            Page::from_path("/test-collections/123456789012345678901234567890/results"),
            Some(Page::ResultCollections)
        );
        assert_eq!(Page::from_path("/test-collections/+3/results"), None);
        assert_eq!(Page::from_path("/test-collections/3/results/ 4"), None);
        assert_eq!(Page::from_path("/test-collections//results"), None);
    }

    #[test]
    fn unknown_paths_do_not_match() {
        assert_eq!(Page::from_path("/search"), None);
        assert_eq!(Page::from_path("admin"), None);
        assert_eq!(Page::from_path("/admin/users"), None);
        assert_eq!(Page::from_path(""), None);
    }

    #[test]
    fn every_page_has_distinct_route_and_title() {
        let pages: Vec<Page> = Page::iter().collect();
        assert_eq!(pages.len(), 7);
        for (i, a) in pages.iter().enumerate() {
            for b in pages.iter().skip(i + 1) {
                assert_ne!(a.route(), b.route());
                assert_ne!(a.title(), b.title());
            }
        }
    }

    #[test]
    fn static_routes_resolve_to_their_page() {
        for page in Page::iter().filter(|p| !p.route().contains('{')) {
            assert_eq!(Page::from_path(page.route()), Some(page));
        }
    }
}
