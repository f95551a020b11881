pub mod session_viewmodel;
pub mod signup_viewmodel;
pub mod donation_viewmodel;

#[cfg(test)]
pub(crate) mod testing;

pub use session_viewmodel::{SessionViewModel, SignInForm};
pub use signup_viewmodel::SignupViewModel;
pub use donation_viewmodel::{DonationViewModel, NgoOptions};
