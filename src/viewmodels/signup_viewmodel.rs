// ============================================================================
// SIGNUP VIEWMODEL - Account creation behind the 2-step wizard
// ============================================================================

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::errors::FormError;
use crate::models::{AuthResponse, Role};
use crate::services::TrustBridgeApi;
use crate::state::AppState;
use crate::wizard::{FormFields, SignupFlow, SignupWizard};

pub struct SignupViewModel {
    api: Rc<dyn TrustBridgeApi>,
}

impl SignupViewModel {
    pub fn new(api: Rc<dyn TrustBridgeApi>) -> Self {
        Self { api }
    }

    /// Create the account and its profile, then sign in as the new user.
    ///
    /// Returns `Ok(None)` when the form was closed before the backend
    /// answered; the late answer is dropped without touching the session.
    pub async fn submit(
        &self,
        state: &AppState,
        wizard: &Weak<RefCell<SignupWizard>>,
    ) -> Result<Option<Role>, FormError> {
        let Some(handle) = wizard.upgrade() else {
            return Ok(None);
        };
        let fields = handle.borrow_mut().begin_submit()?;
        drop(handle);

        let outcome = self.register(&fields).await;

        let Some(handle) = wizard.upgrade() else {
            log::debug!("🗑️ [SIGNUP] Form closed, discarding response");
            return Ok(None);
        };

        match outcome {
            Ok(account) => {
                handle.borrow_mut().finish_submit(Ok(()));
                let role = account.role.clone();
                state
                    .session
                    .login(role.clone(), account.token, Some(account.user_id));
                state.navigation.navigate(role.landing_page_id(), None);
                Ok(Some(role))
            }
            Err(e) => {
                handle.borrow_mut().finish_submit(Err(e.to_string()));
                Err(e)
            }
        }
    }

    async fn register(&self, fields: &FormFields) -> Result<AuthResponse, FormError> {
        let request = SignupFlow::signup_request(fields)?;
        let account = self.api.signup(&request).await?;
        log::info!("✅ [SIGNUP] Account {} created", account.user_id);

        if let Some(profile) = SignupFlow::profile_request(fields, account.user_id) {
            self.api.create_profile(&profile).await?;
            log::info!("✅ [SIGNUP] Profile created");
        }
        Ok(account)
    }
}
