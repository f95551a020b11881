use serde::{Deserialize, Serialize};

/// POST `/api/donations/create`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDonationRequest {
    pub ngo_name: String,
    pub amount: f64,
    pub purpose: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDonationResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub donation: Option<DonationReceipt>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationReceipt {
    #[serde(default)]
    pub donation_id: Option<i64>,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub ngo: Option<String>,
    #[serde(default)]
    pub purpose: Option<String>,
    #[serde(default)]
    pub donated_at: Option<String>,
}

impl CreateDonationResponse {
    /// Reference shown to the donor: transaction id, else donation id, else "N/A"
    pub fn reference(&self) -> String {
        let Some(donation) = &self.donation else {
            return "N/A".to_string();
        };
        if let Some(txn) = &donation.transaction_id {
            return txn.clone();
        }
        donation
            .donation_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "N/A".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reference_prefers_transaction_id() {
        let body = r#"{"success":true,"donation":{"donation_id":12,"transaction_id":"TXN000000012"}}"#;
        let response: CreateDonationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.reference(), "TXN000000012");
    }

    #[test]
    fn reference_falls_back_to_donation_id_then_na() {
        let body = r#"{"donation":{"donation_id":12}}"#;
        let response: CreateDonationResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.reference(), "12");

        let response: CreateDonationResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(response.reference(), "N/A");
    }
}
