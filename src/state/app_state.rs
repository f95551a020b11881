// ============================================================================
// APP STATE - Global application state
// ============================================================================

use std::rc::Rc;

use crate::navigation::{resolve_view, ResolvedView};
use crate::services::token_cache::{LocalStorageTokenCache, TokenSink, TokenSource};
use crate::state::{NavigationState, SessionStore};

/// Everything screens share. Cloning is cheap and shares the same state.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub navigation: NavigationState,
    /// Read side of the token mirror, for screens' own API calls
    pub token_source: Rc<dyn TokenSource>,
}

impl AppState {
    /// Browser state: the token is mirrored to localStorage
    pub fn new() -> Self {
        Self::with_token_cache(Rc::new(LocalStorageTokenCache::new()))
    }

    pub fn with_token_cache<C>(cache: Rc<C>) -> Self
    where
        C: TokenSink + TokenSource + 'static,
    {
        Self {
            session: SessionStore::new(cache.clone()),
            navigation: NavigationState::new(),
            token_source: cache,
        }
    }

    /// Resolve the current request against the current session
    pub fn view(&self) -> ResolvedView {
        resolve_view(&self.navigation.current(), &self.session.snapshot())
    }

    /// Token for API calls: the session's, else the durable mirror
    pub fn api_token(&self) -> Option<String> {
        self.session.token().or_else(|| self.token_source.load())
    }

    /// Run `callback` after any session or navigation change
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        let callback = Rc::new(callback);
        {
            let callback = Rc::clone(&callback);
            self.session.subscribe(move || callback());
        }
        self.navigation.subscribe(move || callback());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::navigation::{DonorPage, Page, PublicPage};
    use crate::services::token_cache::MemoryTokenCache;
    use std::cell::Cell;

    fn state() -> AppState {
        AppState::with_token_cache(Rc::new(MemoryTokenCache::new()))
    }

    #[test]
    fn anonymous_reports_request_shows_home_then_donor_flow() {
        let state = state();

        state.navigation.navigate("reports", None);
        assert_eq!(state.view().page, Page::Public(PublicPage::Home));

        state.session.login(Role::Donor, Some("t1".to_string()), Some(7));
        let session = state.session.snapshot();
        assert!(session.is_authenticated());
        assert_eq!(session.role(), &Role::Donor);
        assert_eq!(session.token(), Some("t1"));
        assert_eq!(session.user_id(), Some(7));

        state.navigation.navigate("donor-ngo-details", Some(42));
        let view = state.view();
        assert_eq!(view.page, Page::Donor(DonorPage::NgoDetails));
        assert_eq!(view.entity_id, Some(42));
        assert_eq!(state.navigation.selected_entity_id(), Some(42));

        state.session.logout();
        state.navigation.navigate("donor-dashboard", None);
        assert_eq!(state.view().page, Page::Public(PublicPage::Home));
    }

    #[test]
    fn logout_without_navigation_keeps_stale_page_requested() {
        let state = state();
        state.session.login(Role::Ngo, None, Some(2));
        state.navigation.navigate("ngo-profile", None);

        state.session.logout();
        // The request still names the NGO page until someone navigates
        assert_eq!(state.navigation.page_id(), "ngo-profile");
        assert_eq!(state.view().page, Page::Public(PublicPage::Home));
    }

    #[test]
    fn api_token_falls_back_to_mirror() {
        let cache = Rc::new(MemoryTokenCache::new());
        let state = AppState::with_token_cache(cache.clone());
        assert_eq!(state.api_token(), None);

        cache.store("from-storage").unwrap();
        assert_eq!(state.api_token().as_deref(), Some("from-storage"));

        state.session.login(Role::Donor, Some("live".to_string()), Some(1));
        assert_eq!(state.api_token().as_deref(), Some("live"));
    }

    #[test]
    fn change_subscription_covers_session_and_navigation() {
        let state = state();
        let calls = Rc::new(Cell::new(0));
        {
            let calls = calls.clone();
            state.subscribe_to_changes(move || calls.set(calls.get() + 1));
        }

        state.navigation.navigate("about", None);
        state.session.login(Role::User, None, None);
        assert_eq!(calls.get(), 2);
    }
}
