use serde::{Deserialize, Serialize};

/// POST `/api/profile/donor`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorProfileRequest {
    pub user_id: i64,
    pub name: String,
    pub phone: String,
    pub dob: Option<String>,
    pub gender: Option<String>,
    pub pan_number: Option<String>,
    pub aadhaar_number: Option<String>,
}

/// POST `/api/profile/ngo`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgoProfileRequest {
    pub user_id: i64,
    pub registration_number: String,
    pub registration_date: String,
    pub category: String,
    pub phone: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub mission: Option<String>,
    pub vision: Option<String>,
    pub website: Option<String>,
}

/// Role-specific profile created right after sign-up
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileRequest {
    Donor(DonorProfileRequest),
    Ngo(NgoProfileRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResponse {
    #[serde(default)]
    pub message: Option<String>,
}
