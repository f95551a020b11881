// ============================================================================
// APP - Screens mounted for the current view and the JSON view descriptor
// ============================================================================

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::{Rc, Weak};

use serde::Serialize;

use crate::errors::ValidationError;
use crate::navigation::{Chrome, DonorPage, MenuItem, Page, ResolvedView};
use crate::services::{ApiClient, TrustBridgeApi};
use crate::state::AppState;
use crate::viewmodels::{DonationViewModel, NgoOptions, SessionViewModel, SignupViewModel};
use crate::wizard::{
    DonationWizard, FieldValue, FormFields, SignupWizard, SubmissionState, Wizard, WizardFlow,
};

/// DOM event the JS renderer listens to
pub const CHANGE_EVENT: &str = "trustbridge:change";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum FormKind {
    Signup,
    Donation,
}

impl FormKind {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "signup" => Some(FormKind::Signup),
            "donation" => Some(FormKind::Donation),
            _ => None,
        }
    }
}

#[derive(Serialize, Debug, PartialEq)]
pub struct MenuEntry {
    pub page_id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

#[derive(Serialize, Debug, PartialEq)]
pub struct FormView {
    pub step: usize,
    pub total_steps: usize,
    pub step_labels: Vec<&'static str>,
    pub visible_fields: Vec<&'static str>,
    pub required_fields: Vec<&'static str>,
    pub choices: BTreeMap<&'static str, Vec<String>>,
    pub fields: FormFields,
    pub status: &'static str,
    pub error: Option<String>,
}

impl FormView {
    fn of<F: WizardFlow>(wizard: &Wizard<F>) -> Self {
        let (status, error) = match wizard.submission() {
            SubmissionState::Idle => ("idle", None),
            SubmissionState::Submitting => ("submitting", None),
            SubmissionState::Succeeded => ("succeeded", None),
            SubmissionState::Failed(message) => ("failed", Some(message.clone())),
        };
        Self {
            step: wizard.step(),
            total_steps: wizard.total_steps(),
            step_labels: wizard.step_labels(),
            visible_fields: wizard.visible_fields(),
            required_fields: wizard.required_fields(),
            choices: wizard.choices().into_iter().collect(),
            fields: wizard.fields().clone(),
            status,
            error,
        }
    }
}

/// Everything the renderer needs for one frame
#[derive(Serialize, Debug, PartialEq)]
pub struct ViewDescriptor {
    pub page: &'static str,
    pub title: &'static str,
    pub entity_id: Option<i64>,
    pub chrome: Chrome,
    pub menu: Vec<MenuEntry>,
    pub call_to_action: Option<MenuEntry>,
    pub show_navbar: bool,
    pub show_footer: bool,
    pub can_sign_out: bool,
    pub role: String,
    pub is_authenticated: bool,
    pub form: Option<FormView>,
    pub ngo_options: Option<NgoOptions>,
}

pub struct App {
    state: AppState,
    session_vm: Rc<SessionViewModel>,
    signup_vm: Rc<SignupViewModel>,
    donation_vm: Rc<DonationViewModel>,
    signup: Option<Rc<RefCell<SignupWizard>>>,
    donation: Option<Rc<RefCell<DonationWizard>>>,
    ngo_options: NgoOptions,
}

impl App {
    /// Browser app: localStorage token mirror, HTTP backend and a change
    /// event batched per tick
    pub fn browser() -> Self {
        let app = Self::new(AppState::new(), Rc::new(ApiClient::new()));

        app.state.subscribe_to_changes(|| {
            use gloo_timers::callback::Timeout;
            Timeout::new(0, crate::refresh_app).forget();
        });

        app
    }

    pub fn new(state: AppState, api: Rc<dyn TrustBridgeApi>) -> Self {
        let mut app = Self {
            state,
            session_vm: Rc::new(SessionViewModel::new(api.clone())),
            signup_vm: Rc::new(SignupViewModel::new(api.clone())),
            donation_vm: Rc::new(DonationViewModel::new(api)),
            signup: None,
            donation: None,
            ngo_options: NgoOptions::default(),
        };
        app.sync_screens();
        app
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn session_vm(&self) -> Rc<SessionViewModel> {
        self.session_vm.clone()
    }

    pub fn signup_vm(&self) -> Rc<SignupViewModel> {
        self.signup_vm.clone()
    }

    pub fn donation_vm(&self) -> Rc<DonationViewModel> {
        self.donation_vm.clone()
    }

    /// Mount the form of the current page and drop the others. Forms left
    /// behind lose their state; requests they started are not cancelled.
    ///
    /// Returns true when a donation form was just mounted and its NGO
    /// options need loading.
    pub fn sync_screens(&mut self) -> bool {
        let page = self.state.view().page;

        if page == Page::Login {
            self.signup
                .get_or_insert_with(|| Rc::new(RefCell::new(SignupWizard::new())));
        } else if self.signup.take().is_some() {
            log::debug!("🧹 [APP] Signup form closed");
        }

        if page == Page::Donor(DonorPage::MakeDonation) {
            if self.donation.is_none() {
                self.donation = Some(Rc::new(RefCell::new(DonationWizard::new())));
                self.ngo_options = NgoOptions::default();
                return true;
            }
        } else if self.donation.take().is_some() {
            log::debug!("🧹 [APP] Donation form closed");
        }
        false
    }

    pub fn signup_handle(&self) -> Option<Weak<RefCell<SignupWizard>>> {
        self.signup.as_ref().map(Rc::downgrade)
    }

    pub fn donation_handle(&self) -> Option<Weak<RefCell<DonationWizard>>> {
        self.donation.as_ref().map(Rc::downgrade)
    }

    /// Store NGO options loaded for `form`, unless it has been closed since
    pub fn ngo_options_loaded(&mut self, form: &Weak<RefCell<DonationWizard>>, options: NgoOptions) {
        let still_open = match (&self.donation, form.upgrade()) {
            (Some(current), Some(loaded_for)) => Rc::ptr_eq(current, &loaded_for),
            _ => false,
        };
        if still_open {
            self.ngo_options = options;
        }
    }

    /// Returns false when no such form is on screen
    pub fn set_field(&self, kind: FormKind, name: &str, value: FieldValue) -> bool {
        let updated = match kind {
            FormKind::Signup => self.signup.as_ref().map(|w| w.borrow_mut().set_field(name, value)),
            FormKind::Donation => self
                .donation
                .as_ref()
                .map(|w| w.borrow_mut().set_field(name, value)),
        };
        updated.is_some()
    }

    pub fn step_forward(&self, kind: FormKind) -> Option<Result<usize, ValidationError>> {
        match kind {
            FormKind::Signup => self.signup.as_ref().map(|w| w.borrow_mut().go_next()),
            FormKind::Donation => self.donation.as_ref().map(|w| w.borrow_mut().go_next()),
        }
    }

    pub fn step_back(&self, kind: FormKind) -> Option<usize> {
        match kind {
            FormKind::Signup => self.signup.as_ref().map(|w| w.borrow_mut().go_back()),
            FormKind::Donation => self.donation.as_ref().map(|w| w.borrow_mut().go_back()),
        }
    }

    pub fn view(&self) -> ViewDescriptor {
        let ResolvedView {
            page,
            entity_id,
            chrome,
        } = self.state.view();
        let session = self.state.session.snapshot();
        let authenticated = session.is_authenticated();

        // Highlight follows the requested id, not the page it resolved to
        let requested = self.state.navigation.page_id();
        let entry = |item: MenuItem| MenuEntry {
            page_id: item.page_id,
            label: item.label,
            active: item.is_active(&requested),
        };

        let form = match page {
            Page::Login => self.signup.as_ref().map(|w| FormView::of(&*w.borrow())),
            Page::Donor(DonorPage::MakeDonation) => {
                self.donation.as_ref().map(|w| FormView::of(&*w.borrow()))
            }
            _ => None,
        };
        let ngo_options = match page {
            Page::Donor(DonorPage::MakeDonation) => Some(self.ngo_options.clone()),
            _ => None,
        };

        ViewDescriptor {
            page: page.id(),
            title: page.title(),
            entity_id,
            chrome,
            menu: chrome.menu(authenticated).into_iter().map(entry).collect(),
            call_to_action: chrome.call_to_action(authenticated).map(entry),
            show_navbar: chrome.show_navbar(),
            show_footer: chrome.show_footer(),
            can_sign_out: chrome.offers_sign_out(authenticated),
            role: session.role().as_str().to_string(),
            is_authenticated: authenticated,
            form,
            ngo_options,
        }
    }

    pub fn view_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.view())
    }
}
