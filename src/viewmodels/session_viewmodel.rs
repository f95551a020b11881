// ============================================================================
// SESSION VIEWMODEL - Sign-in and sign-out
// ============================================================================
// Talks to the API and returns results; the session and navigation stores
// are only written through their own operations.
// ============================================================================

use std::rc::Rc;

use crate::errors::{FormError, ValidationError};
use crate::models::{LoginRequest, Role};
use crate::navigation::{PageRegistry, PublicPage};
use crate::services::TrustBridgeApi;
use crate::state::AppState;

/// Values typed into the sign-in card
#[derive(Clone, Debug, PartialEq)]
pub struct SignInForm {
    pub email: String,
    pub password: String,
    pub role: Role,
}

impl SignInForm {
    fn request(&self) -> Result<LoginRequest, ValidationError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        Ok(LoginRequest {
            email: email.to_string(),
            password: self.password.clone(),
            role: self.role.clone(),
        })
    }
}

pub struct SessionViewModel {
    api: Rc<dyn TrustBridgeApi>,
}

impl SessionViewModel {
    pub fn new(api: Rc<dyn TrustBridgeApi>) -> Self {
        Self { api }
    }

    /// Sign in and land on the role's dashboard. The role returned by the
    /// backend wins over the one picked in the form.
    pub async fn sign_in(&self, state: &AppState, form: SignInForm) -> Result<Role, FormError> {
        let request = form.request()?;

        log::info!("🔐 [SESSION] Signing in...");
        let response = match self.api.login(&request).await {
            Ok(response) => response,
            Err(e) => {
                log::error!("❌ [SESSION] Sign-in failed: {}", e);
                return Err(e.into());
            }
        };

        let role = response.role.clone();
        state
            .session
            .login(role.clone(), response.token, Some(response.user_id));
        state.navigation.navigate(role.landing_page_id(), None);

        log::info!("✅ [SESSION] Signed in as {}", role.display_name());
        Ok(role)
    }

    /// Logout and leave protected pages in one step
    pub fn sign_out(&self, state: &AppState) {
        state.session.logout();
        state.navigation.navigate(PublicPage::Home.id(), None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use crate::navigation::{DonorPage, NgoPage, Page};
    use crate::services::token_cache::TokenSource;
    use crate::viewmodels::testing::{auth_response, state, FakeApi};
    use futures::executor::block_on;

    fn form(email: &str, password: &str) -> SignInForm {
        SignInForm {
            email: email.to_string(),
            password: password.to_string(),
            role: Role::Donor,
        }
    }

    #[test]
    fn sign_in_lands_on_role_dashboard() {
        let api = FakeApi::new();
        let (state, cache) = state();
        let vm = SessionViewModel::new(api.clone());

        let role = block_on(vm.sign_in(&state, form("asha@example.org", "pw"))).unwrap();

        assert_eq!(role, Role::Donor);
        assert!(state.session.is_authenticated());
        assert_eq!(cache.load().as_deref(), Some("t1"));
        assert_eq!(state.view().page, Page::Donor(DonorPage::Dashboard));
    }

    #[test]
    fn backend_role_decides_landing_page() {
        let api = FakeApi::new();
        *api.auth.borrow_mut() = Ok(auth_response(Role::Ngo, Some("t2"), 3));
        let (state, _) = state();
        let vm = SessionViewModel::new(api);

        block_on(vm.sign_in(&state, form("ngo@example.org", "pw"))).unwrap();
        assert_eq!(state.view().page, Page::Ngo(NgoPage::Dashboard));
    }

    #[test]
    fn empty_credentials_never_reach_the_network() {
        let api = FakeApi::new();
        let (state, _) = state();
        let vm = SessionViewModel::new(api.clone());

        let err = block_on(vm.sign_in(&state, form("  ", "pw"))).unwrap_err();
        assert_eq!(err, FormError::Validation(ValidationError::MissingField("email")));

        let err = block_on(vm.sign_in(&state, form("a@b.c", ""))).unwrap_err();
        assert!(err.is_validation());
        assert!(api.calls().is_empty());
    }

    #[test]
    fn failed_sign_in_leaves_session_anonymous() {
        let api = FakeApi::new();
        *api.auth.borrow_mut() = Err(ApiError::Http {
            status: 401,
            message: "Invalid credentials".to_string(),
        });
        let (state, _) = state();
        let vm = SessionViewModel::new(api);

        let err = block_on(vm.sign_in(&state, form("a@b.c", "bad"))).unwrap_err();
        assert_eq!(err.to_string(), "Invalid credentials");
        assert!(!state.session.is_authenticated());
        assert_eq!(state.navigation.page_id(), "home");
    }

    #[test]
    fn sign_out_clears_token_and_goes_home() {
        let api = FakeApi::new();
        let (state, cache) = state();
        let vm = SessionViewModel::new(api);
        block_on(vm.sign_in(&state, form("asha@example.org", "pw"))).unwrap();
        state.navigation.navigate("donor-reports", None);

        vm.sign_out(&state);

        assert!(!state.session.is_authenticated());
        assert_eq!(cache.load(), None);
        assert_eq!(state.navigation.page_id(), "home");
        assert_eq!(state.view().page, Page::Public(PublicPage::Home));
    }
}
