// In-memory backend and form fixtures shared by tests

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use async_trait::async_trait;

use crate::errors::ApiError;
use crate::models::{
    AuthResponse, CreateDonationRequest, CreateDonationResponse, DonationReceipt, LoginRequest,
    NgoListResponse, NgoSummary, ProfileRequest, ProfileResponse, Role, SignupRequest,
};
use crate::services::token_cache::MemoryTokenCache;
use crate::services::TrustBridgeApi;
use crate::state::AppState;
use crate::wizard::DonationWizard;

pub struct FakeApi {
    pub auth: RefCell<Result<AuthResponse, ApiError>>,
    pub profile: RefCell<Result<ProfileResponse, ApiError>>,
    /// Consumed front to back; an empty queue means success
    pub donations: RefCell<VecDeque<Result<CreateDonationResponse, ApiError>>>,
    pub ngos: RefCell<Result<NgoListResponse, ApiError>>,
    pub calls: RefCell<Vec<String>>,
    pub donation_tokens: RefCell<Vec<String>>,
}

impl FakeApi {
    pub fn new() -> Rc<Self> {
        Rc::new(Self {
            auth: RefCell::new(Ok(auth_response(Role::Donor, Some("t1"), 7))),
            profile: RefCell::new(Ok(ProfileResponse {
                message: Some("Profile created".to_string()),
            })),
            donations: RefCell::new(VecDeque::new()),
            ngos: RefCell::new(Ok(NgoListResponse {
                ngos: vec![ngo("Seva Trust"), ngo("Green Earth")],
            })),
            calls: RefCell::new(Vec::new()),
            donation_tokens: RefCell::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: &str) {
        self.calls.borrow_mut().push(call.to_string());
    }
}

pub fn auth_response(role: Role, token: Option<&str>, user_id: i64) -> AuthResponse {
    AuthResponse {
        message: None,
        role,
        token: token.map(str::to_string),
        user_id,
    }
}

fn ngo(name: &str) -> NgoSummary {
    NgoSummary {
        ngo_id: None,
        name: name.to_string(),
        sector: None,
        location: None,
        description: None,
        funds_received: 0.0,
    }
}

pub fn receipt(transaction_id: &str) -> CreateDonationResponse {
    CreateDonationResponse {
        success: true,
        message: None,
        donation: Some(DonationReceipt {
            donation_id: Some(12),
            transaction_id: Some(transaction_id.to_string()),
            amount: None,
            ngo: None,
            purpose: None,
            donated_at: None,
        }),
    }
}

/// Fill every required input of the donation form, paying by card
pub fn fill_donation_form(wizard: &mut DonationWizard) {
    for (name, value) in [
        ("full_name", "Asha Rao"),
        ("email", "asha@example.org"),
        ("phone", "9800000000"),
        ("date_of_birth", "1990-04-12"),
        ("gender", "female"),
        ("address", "12 MG Road"),
        ("city", "Pune"),
        ("state", "Maharashtra"),
        ("pincode", "411001"),
        ("pan_number", "ABCDE1234F"),
        ("ngo", "Seva Trust"),
        ("donation_amount", "2500"),
        ("donation_purpose", "Education Support"),
        ("card_number", "4111111111111111"),
        ("card_holder", "Asha Rao"),
        ("expiry_date", "12/29"),
        ("cvv", "123"),
    ] {
        wizard.set_field(name, value);
    }
    wizard.set_field("tax_benefit_consent", true);
    wizard.set_field("terms_accepted", true);
}

pub fn state() -> (AppState, Rc<MemoryTokenCache>) {
    let cache = Rc::new(MemoryTokenCache::new());
    (AppState::with_token_cache(cache.clone()), cache)
}

#[async_trait(?Send)]
impl TrustBridgeApi for FakeApi {
    async fn login(&self, _request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        self.record("login");
        self.auth.borrow().clone()
    }

    async fn signup(&self, _request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        self.record("signup");
        self.auth.borrow().clone()
    }

    async fn create_profile(&self, request: &ProfileRequest) -> Result<ProfileResponse, ApiError> {
        match request {
            ProfileRequest::Donor(_) => self.record("profile/donor"),
            ProfileRequest::Ngo(_) => self.record("profile/ngo"),
        }
        self.profile.borrow().clone()
    }

    async fn create_donation(
        &self,
        token: &str,
        _request: &CreateDonationRequest,
    ) -> Result<CreateDonationResponse, ApiError> {
        self.record("donation");
        self.donation_tokens.borrow_mut().push(token.to_string());
        self.donations
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(receipt("TXN000000012")))
    }

    async fn list_ngos(&self, _token: Option<&str>) -> Result<NgoListResponse, ApiError> {
        self.record("ngo/list");
        self.ngos.borrow().clone()
    }
}
