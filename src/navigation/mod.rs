// ============================================================================
// NAVIGATION - Page catalog, access-control resolver and navbar chrome
// ============================================================================

pub mod pages;
pub mod chrome;
pub mod resolver;

pub use pages::{DonorPage, EntityKind, NgoPage, Page, PageRegistry, PublicPage, DEFAULT_ENTITY_ID};
pub use chrome::{resolve_chrome, Chrome, MenuItem};
pub use resolver::{resolve, resolve_view, ResolvedView};
