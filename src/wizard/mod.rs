// ============================================================================
// WIZARD - Multi-step forms (signup, donation) over one controller
// ============================================================================

pub mod fields;
pub mod controller;
pub mod signup;
pub mod donation;

pub use fields::{FieldValue, FormFields};
pub use controller::{SubmissionState, Wizard, WizardFlow};
pub use signup::SignupFlow;
pub use donation::DonationFlow;

pub type SignupWizard = Wizard<SignupFlow>;
pub type DonationWizard = Wizard<DonationFlow>;
