// =============================================================================
// GS-IT Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Site Configuration
// 3. App State
// 4. Navigation Context
// =============================================================================

use leptos::prelude::*;

use crate::loader::ModuleCache;
use crate::routes::Route;

// -----------------------------------------------------------------------------
// 2. Site Configuration
// -----------------------------------------------------------------------------

/// Build-time configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Deployment environment name.
    pub environment: String,
    /// Prefix for API calls. Empty means same origin.
    pub api_base: String,
    /// Brand name used in titles.
    pub site_name: String,
}

impl SiteConfig {
    /// Read configuration baked in at compile time.
    pub fn from_build_env() -> Self {
        Self::resolve(option_env!("ENVIRONMENT"), option_env!("CONTACT_API_BASE"))
    }

    fn resolve(environment: Option<&str>, api_base: Option<&str>) -> Self {
        let environment = environment.unwrap_or("production").to_string();
        let api_base = match api_base {
            Some(base) => base.to_string(),
            None if environment == "development" => "http://localhost:8080".to_string(),
            None => String::new(),
        };

        Self {
            environment,
            api_base,
            site_name: "GS-IT".to_string(),
        }
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// `"<page> | GS-IT"`.
    pub fn page_title(&self, page: &str) -> String {
        format!("{} | {}", page, self.site_name)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

// -----------------------------------------------------------------------------
// 3. App State
// -----------------------------------------------------------------------------

/// Page constructor resolved by the loader.
pub type PageModule = fn() -> AnyView;

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    pub config: SiteConfig,

    /// Page modules loaded so far this session.
    pub modules: RwSignal<ModuleCache<Route, PageModule>>,
}

impl AppState {
    /// Create a new app state instance.
    pub fn new() -> Self {
        Self {
            config: SiteConfig::from_build_env(),
            modules: RwSignal::new(ModuleCache::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

// -----------------------------------------------------------------------------
// 4. Navigation Context
// -----------------------------------------------------------------------------

/// Ambient view state handed to the navigation bar explicitly.
#[derive(Clone, Copy)]
pub struct NavContext {
    /// Current router pathname.
    pub pathname: Signal<String>,
    /// Latest debounced vertical scroll offset.
    pub scroll_y: ReadSignal<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_production_defaults_to_same_origin() {
        let config = SiteConfig::resolve(None, None);
        assert_eq!(config.environment, "production");
        assert_eq!(config.api_base, "");
        assert!(!config.is_development());
    }

    #[test]
    fn test_development_targets_local_api() {
        let config = SiteConfig::resolve(Some("development"), None);
        assert!(config.is_development());
        assert_eq!(config.api_base, "http://localhost:8080");
    }

    #[test]
    fn test_explicit_api_base_wins() {
        let config = SiteConfig::resolve(Some("development"), Some("https://api.gs-it.ae"));
        assert_eq!(config.api_base, "https://api.gs-it.ae");
    }

    #[test]
    fn test_page_title() {
        let config = SiteConfig::resolve(None, None);
        assert_eq!(config.page_title("Contact Us"), "Contact Us | GS-IT");
    }
}
