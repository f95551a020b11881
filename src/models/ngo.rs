use serde::{Deserialize, Serialize};

/// One entry of GET `/api/ngo/list`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgoSummary {
    #[serde(default)]
    pub ngo_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub sector: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "fundsReceived")]
    pub funds_received: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NgoListResponse {
    #[serde(default)]
    pub ngos: Vec<NgoSummary>,
}

impl NgoListResponse {
    /// Names offered in the donation form's NGO picker
    pub fn names(&self) -> Vec<String> {
        self.ngos.iter().map(|ngo| ngo.name.clone()).collect()
    }
}
