// =============================================================================
// GS-IT Web - Route Table
// =============================================================================
// Table of Contents:
// 1. Route Enum
// 2. Path Resolution
// 3. Tests
// =============================================================================

// -----------------------------------------------------------------------------
// 1. Route Enum
// -----------------------------------------------------------------------------

/// Every page the site can show. `NotFound` is the catch-all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    About,
    Service,
    Contact,
    Clients,
    AudioVideo,
    Hikvision,
    Dahua,
    Unv,
    Privacy,
    NotFound,
}

impl Route {
    /// All routes reachable by a real path, in menu order where applicable.
    pub const ALL: [Route; 10] = [
        Route::Home,
        Route::AudioVideo,
        Route::Service,
        Route::Clients,
        Route::About,
        Route::Contact,
        Route::Hikvision,
        Route::Dahua,
        Route::Unv,
        Route::Privacy,
    ];

    /// Canonical path for links.
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/About",
            Route::Service => "/Service",
            Route::Contact => "/Contact",
            Route::Clients => "/Client",
            Route::AudioVideo => "/AudioVideo",
            Route::Hikvision => "/Hikvision",
            Route::Dahua => "/Dahua",
            Route::Unv => "/Unv",
            Route::Privacy => "/Privacy",
            Route::NotFound => "/404",
        }
    }

    /// Short name used in log lines.
    pub fn name(self) -> &'static str {
        match self {
            Route::Home => "home",
            Route::About => "about",
            Route::Service => "service",
            Route::Contact => "contact",
            Route::Clients => "clients",
            Route::AudioVideo => "audio-video",
            Route::Hikvision => "hikvision",
            Route::Dahua => "dahua",
            Route::Unv => "unv",
            Route::Privacy => "privacy",
            Route::NotFound => "not-found",
        }
    }

    // -------------------------------------------------------------------------
    // 2. Path Resolution
    // -------------------------------------------------------------------------

    /// Resolve a location pathname to a route.
    ///
    /// Matching ignores ASCII case, a query string or fragment, and a single
    /// trailing slash, so `/audiovideo/` and `/AudioVideo` are the same page.
    pub fn from_path(path: &str) -> Route {
        let path = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let trimmed = match path.strip_suffix('/') {
            Some(rest) if !rest.is_empty() => rest,
            _ => path,
        };

        if trimmed.is_empty() || trimmed == "/" {
            return Route::Home;
        }

        Route::ALL
            .into_iter()
            .find(|route| route.path().eq_ignore_ascii_case(trimmed))
            .unwrap_or(Route::NotFound)
    }
}

// -----------------------------------------------------------------------------
// 3. Tests
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_paths_round_trip() {
        for route in Route::ALL {
            assert_eq!(Route::from_path(route.path()), route);
        }
    }

    #[test]
    fn test_case_insensitive_match() {
        assert_eq!(Route::from_path("/audiovideo"), Route::AudioVideo);
        assert_eq!(Route::from_path("/about"), Route::About);
        assert_eq!(Route::from_path("/CONTACT"), Route::Contact);
        assert_eq!(Route::from_path("/client"), Route::Clients);
    }

    #[test]
    fn test_trailing_slash_and_query() {
        assert_eq!(Route::from_path("/Service/"), Route::Service);
        assert_eq!(Route::from_path("/Contact?ref=footer"), Route::Contact);
        assert_eq!(Route::from_path("/Dahua#products"), Route::Dahua);
        assert_eq!(Route::from_path(""), Route::Home);
        assert_eq!(Route::from_path("/"), Route::Home);
    }

    #[test]
    fn test_unknown_paths_fall_through() {
        assert_eq!(Route::from_path("/Clients"), Route::NotFound);
        assert_eq!(Route::from_path("/About/team"), Route::NotFound);
        assert_eq!(Route::from_path("/404"), Route::NotFound);
    }
}
