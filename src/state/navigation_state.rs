// ============================================================================
// NAVIGATION STATE - Requested page id + sticky selected entity id
// ============================================================================

use crate::state::ReactiveState;

/// Page the user asked for, before role resolution
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavigationRequest {
    pub page_id: String,
    pub selected_entity_id: Option<i64>,
}

impl Default for NavigationRequest {
    fn default() -> Self {
        Self {
            page_id: "home".to_string(),
            selected_entity_id: None,
        }
    }
}

#[derive(Clone)]
pub struct NavigationState {
    request: ReactiveState<NavigationRequest>,
}

impl NavigationState {
    pub fn new() -> Self {
        Self {
            request: ReactiveState::new(NavigationRequest::default()),
        }
    }

    /// Request a page. A supplied id replaces the stored one; `None` keeps
    /// whatever id an earlier navigation left behind.
    pub fn navigate(&self, page_id: &str, selected_entity_id: Option<i64>) {
        log::debug!("🧭 [NAV] {} (id: {:?})", page_id, selected_entity_id);
        self.request.update(|request| {
            request.page_id = page_id.to_string();
            if selected_entity_id.is_some() {
                request.selected_entity_id = selected_entity_id;
            }
        });
    }

    pub fn current(&self) -> NavigationRequest {
        self.request.get()
    }

    pub fn page_id(&self) -> String {
        self.request.with(|request| request.page_id.clone())
    }

    pub fn selected_entity_id(&self) -> Option<i64> {
        self.request.with(|request| request.selected_entity_id)
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.request.subscribe(callback);
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
