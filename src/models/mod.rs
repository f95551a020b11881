pub mod auth;
pub mod profile;
pub mod donation;
pub mod ngo;

pub use auth::{AuthResponse, ErrorBody, LoginRequest, Role, SignupRequest};
pub use profile::{DonorProfileRequest, NgoProfileRequest, ProfileRequest, ProfileResponse};
pub use donation::{CreateDonationRequest, CreateDonationResponse, DonationReceipt};
pub use ngo::{NgoListResponse, NgoSummary};
