// ============================================================================
// DONATION VIEWMODEL - NGO picker and donation submission
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use serde::Serialize;

use crate::errors::{ApiError, FormError};
use crate::navigation::{DonorPage, PageRegistry};
use crate::services::TrustBridgeApi;
use crate::state::AppState;
use crate::wizard::{DonationFlow, DonationWizard, FormFields};

pub const NGO_LIST_ERROR: &str = "Unable to load NGO list. Please try again or contact support.";

/// Options for the NGO select. A failed load leaves the list empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct NgoOptions {
    pub names: Vec<String>,
    pub error: Option<String>,
}

pub struct DonationViewModel {
    api: Rc<dyn TrustBridgeApi>,
}

impl DonationViewModel {
    pub fn new(api: Rc<dyn TrustBridgeApi>) -> Self {
        Self { api }
    }

    pub async fn load_ngo_options(&self, state: &AppState) -> NgoOptions {
        let token = state.api_token();
        match self.api.list_ngos(token.as_deref()).await {
            Ok(list) => {
                log::info!("✅ [DONATION] {} NGOs available", list.ngos.len());
                NgoOptions {
                    names: list.names(),
                    error: None,
                }
            }
            Err(e) => {
                log::error!("❌ [DONATION] Failed to load NGOs: {}", e);
                NgoOptions {
                    names: Vec::new(),
                    error: Some(NGO_LIST_ERROR.to_string()),
                }
            }
        }
    }

    /// Send the donation and go back to the donor dashboard.
    ///
    /// Returns the reference shown to the donor, or `Ok(None)` when the
    /// form was closed before the backend answered.
    pub async fn submit(
        &self,
        state: &AppState,
        wizard: &Weak<RefCell<DonationWizard>>,
    ) -> Result<Option<String>, FormError> {
        let Some(handle) = wizard.upgrade() else {
            return Ok(None);
        };
        let fields = handle.borrow_mut().begin_submit()?;
        drop(handle);

        let outcome = self.donate(state, &fields).await;

        let Some(handle) = wizard.upgrade() else {
            log::debug!("🗑️ [DONATION] Form closed, discarding response");
            return Ok(None);
        };

        match outcome {
            Ok(reference) => {
                handle.borrow_mut().finish_submit(Ok(()));
                log::info!("✅ [DONATION] Donation successful! Reference: {}", reference);
                state.navigation.navigate(DonorPage::Dashboard.id(), None);
                Ok(Some(reference))
            }
            Err(e) => {
                handle.borrow_mut().finish_submit(Err(e.to_string()));
                Err(e)
            }
        }
    }

    async fn donate(&self, state: &AppState, fields: &FormFields) -> Result<String, FormError> {
        let token = state.api_token().ok_or(ApiError::MissingToken)?;
        let request = DonationFlow::request(fields)?;
        let response = self.api.create_donation(&token, &request).await?;
        Ok(response.reference())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Role;
    use crate::navigation::Page;
    use crate::services::token_cache::TokenSink;
    use crate::viewmodels::testing::{fill_donation_form, receipt, state, FakeApi};
    use crate::wizard::SubmissionState;
    use futures::executor::block_on;
    use std::cell::Cell;

    fn at_review() -> Rc<RefCell<DonationWizard>> {
        let mut wizard = DonationWizard::new();
        fill_donation_form(&mut wizard);
        for _ in 0..3 {
            wizard.go_next().unwrap();
        }
        Rc::new(RefCell::new(wizard))
    }

    fn signed_in() -> AppState {
        let (state, _) = state();
        state.session.login(Role::Donor, Some("t1".to_string()), Some(7));
        state.navigation.navigate("donor-make-donation", None);
        state
    }

    #[test]
    fn loads_ngo_names() {
        let api = FakeApi::new();
        let vm = DonationViewModel::new(api);

        let options = block_on(vm.load_ngo_options(&signed_in()));
        assert_eq!(options.names, vec!["Seva Trust", "Green Earth"]);
        assert_eq!(options.error, None);
    }

    #[test]
    fn failed_ngo_load_leaves_empty_list_and_message() {
        let api = FakeApi::new();
        *api.ngos.borrow_mut() = Err(ApiError::Network("offline".to_string()));
        let vm = DonationViewModel::new(api);

        let options = block_on(vm.load_ngo_options(&signed_in()));
        assert!(options.names.is_empty());
        assert_eq!(options.error.as_deref(), Some(NGO_LIST_ERROR));
    }

    #[test]
    fn success_navigates_to_dashboard_with_reference() {
        let api = FakeApi::new();
        let state = signed_in();
        let vm = DonationViewModel::new(api.clone());
        let wizard = at_review();

        let reference = block_on(vm.submit(&state, &Rc::downgrade(&wizard))).unwrap();

        assert_eq!(reference.as_deref(), Some("TXN000000012"));
        assert_eq!(api.donation_tokens.borrow().clone(), vec!["t1"]);
        assert_eq!(wizard.borrow().submission(), &SubmissionState::Succeeded);
        assert_eq!(state.view().page, Page::Donor(DonorPage::Dashboard));
    }

    #[test]
    fn network_failure_keeps_review_step_then_retry_navigates_once() {
        let api = FakeApi::new();
        api.donations
            .borrow_mut()
            .push_back(Err(ApiError::Network("offline".to_string())));
        api.donations.borrow_mut().push_back(Ok(receipt("TXN1")));
        let state = signed_in();
        let vm = DonationViewModel::new(api.clone());
        let wizard = at_review();

        let navigations = Rc::new(Cell::new(0));
        {
            let navigations = navigations.clone();
            state
                .navigation
                .subscribe(move || navigations.set(navigations.get() + 1));
        }

        let err = block_on(vm.submit(&state, &Rc::downgrade(&wizard))).unwrap_err();
        assert_eq!(err.to_string(), "Network error: offline");
        assert_eq!(wizard.borrow().step(), 4);
        assert_eq!(
            wizard.borrow().submission(),
            &SubmissionState::Failed("Network error: offline".to_string())
        );
        assert_eq!(navigations.get(), 0);

        let reference = block_on(vm.submit(&state, &Rc::downgrade(&wizard))).unwrap();
        assert_eq!(reference.as_deref(), Some("TXN1"));
        assert_eq!(navigations.get(), 1);
        assert_eq!(api.calls(), vec!["donation", "donation"]);
    }

    #[test]
    fn stored_token_is_used_when_session_has_none() {
        let api = FakeApi::new();
        let (state, cache) = state();
        state.session.login(Role::Donor, None, Some(7));
        cache.store("from-storage").unwrap();
        let vm = DonationViewModel::new(api.clone());

        let wizard = at_review();
        block_on(vm.submit(&state, &Rc::downgrade(&wizard))).unwrap();

        assert_eq!(api.donation_tokens.borrow().clone(), vec!["from-storage"]);
    }

    #[test]
    fn missing_token_fails_without_request() {
        let api = FakeApi::new();
        let (state, _) = state();
        state.session.login(Role::Donor, None, Some(7));
        let vm = DonationViewModel::new(api.clone());
        let wizard = at_review();

        let err = block_on(vm.submit(&state, &Rc::downgrade(&wizard))).unwrap_err();

        assert_eq!(err, FormError::Api(ApiError::MissingToken));
        assert_eq!(
            wizard.borrow().submission(),
            &SubmissionState::Failed(
                "Authentication token not found. Please log in again.".to_string()
            )
        );
        assert!(api.calls().is_empty());
    }

    #[test]
    fn invalid_amount_is_rejected_before_submitting() {
        let api = FakeApi::new();
        let state = signed_in();
        let vm = DonationViewModel::new(api.clone());
        let wizard = at_review();
        wizard.borrow_mut().set_field("donation_amount", "abc");

        let err = block_on(vm.submit(&state, &Rc::downgrade(&wizard))).unwrap_err();

        assert!(err.is_validation());
        assert_eq!(wizard.borrow().submission(), &SubmissionState::Idle);
        assert!(api.calls().is_empty());
    }
}
