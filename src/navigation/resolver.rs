// ============================================================================
// RESOLVER - (page id, role, auth flag) -> page actually rendered
// ============================================================================

use crate::models::Role;
use crate::navigation::chrome::{resolve_chrome, Chrome};
use crate::navigation::pages::{
    DonorPage, NgoPage, Page, PageRegistry, PublicPage, DEFAULT_ENTITY_ID,
};
use crate::state::{NavigationRequest, Session};

/// Resolve a requested page id. Total: every input maps to one page.
///
/// Rules, first match wins:
/// 1. `login` always renders the login screen.
/// 2. Authenticated donors resolve against the donor registry.
/// 3. Authenticated NGOs resolve against the NGO registry.
/// 4. Protected general pages send anonymous visitors home.
/// 5. Everything else resolves against the public registry.
pub fn resolve(page_id: &str, role: &Role, is_authenticated: bool) -> Page {
    if page_id == "login" {
        return Page::Login;
    }

    match role {
        Role::Donor if is_authenticated => return Page::Donor(DonorPage::resolve(page_id)),
        Role::Ngo if is_authenticated => return Page::Ngo(NgoPage::resolve(page_id)),
        _ => {}
    }

    let page = PublicPage::resolve(page_id);
    if page.is_protected() && !is_authenticated {
        log::debug!("🔒 [NAV] {} requires sign-in, showing home", page_id);
        return Page::Public(PublicPage::Home);
    }
    Page::Public(page)
}

/// Everything a renderer needs for the current request
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ResolvedView {
    pub page: Page,
    /// Set only for pages that declare an entity dependency
    pub entity_id: Option<i64>,
    pub chrome: Chrome,
}

pub fn resolve_view(request: &NavigationRequest, session: &Session) -> ResolvedView {
    let page = resolve(&request.page_id, session.role(), session.is_authenticated());
    let chrome = resolve_chrome(&request.page_id, session.role(), session.is_authenticated());
    let entity_id = page
        .entity_dependency()
        .map(|_| request.selected_entity_id.unwrap_or(DEFAULT_ENTITY_ID));

    ResolvedView {
        page,
        entity_id,
        chrome,
    }
}
