// =============================================================================
// GS-IT Web - UI Components
// =============================================================================
// Table of Contents:
// 1. Shell Components (nav, footer, lazy page)
// 2. Common Components
// 3. Form Components
// 4. Section Components
// =============================================================================

pub mod common;
pub mod footer;
pub mod forms;
pub mod lazy;
pub mod nav;
pub mod sections;

pub use common::{
    ErrorDisplay, LoadErrorView, LoadingView, PageHero, PageMeta, SectionHeader, StatusBanner,
};
pub use footer::Footer;
pub use forms::{ConsentSwitch, TextArea, TextInput};
pub use lazy::LazyPage;
pub use nav::NavBar;
pub use sections::{
    BlogCard, CtaBanner, FeatureCard, ProcessStepCard, ServiceCard, SolutionCard, StatCard,
    TestimonialCard,
};
