// ============================================================================
// DONATION WIZARD - Personal, Donation, Payment, Review
// ============================================================================

use crate::errors::ValidationError;
use crate::models::CreateDonationRequest;
use crate::wizard::controller::WizardFlow;
use crate::wizard::fields::{FieldValue, FormFields};

pub struct DonationFlow;

pub const PAYMENT_CREDIT_CARD: &str = "creditCard";
pub const PAYMENT_UPI: &str = "upi";
pub const PAYMENT_NET_BANKING: &str = "netbanking";

pub const PURPOSE_OPTIONS: [&str; 7] = [
    "Education Support",
    "Medical Equipment",
    "Infrastructure Development",
    "Food Security",
    "Skill Development",
    "Emergency Relief",
    "General Contribution",
];

impl DonationFlow {
    /// Body for `/api/donations/create`
    pub fn request(fields: &FormFields) -> Result<CreateDonationRequest, ValidationError> {
        let ngo_name = fields
            .optional_text("ngo")
            .ok_or(ValidationError::MissingField("ngo"))?;
        let purpose = fields
            .optional_text("donation_purpose")
            .ok_or(ValidationError::MissingField("donation_purpose"))?;
        let raw_amount = match fields.get("donation_amount") {
            Some(FieldValue::Number(value)) => value.to_string(),
            _ => fields.text("donation_amount").trim().to_string(),
        };
        let amount = match fields.number("donation_amount") {
            Some(amount) if amount.is_finite() && amount > 0.0 => amount,
            _ if raw_amount.is_empty() => {
                return Err(ValidationError::MissingField("donation_amount"))
            }
            _ => return Err(ValidationError::InvalidAmount(raw_amount)),
        };

        Ok(CreateDonationRequest {
            ngo_name,
            amount,
            purpose,
        })
    }

    fn pays_by_card(fields: &FormFields) -> bool {
        fields.text("payment_method") == PAYMENT_CREDIT_CARD
    }
}

impl WizardFlow for DonationFlow {
    const NAME: &'static str = "DONATION";
    const TOTAL_STEPS: usize = 4;

    fn initial_fields() -> FormFields {
        FormFields::with_defaults([
            ("country", FieldValue::from("India")),
            ("payment_method", FieldValue::from(PAYMENT_CREDIT_CARD)),
            ("is_organization", FieldValue::from(false)),
            ("is_anonymous", FieldValue::from(false)),
            ("is_recurring", FieldValue::from(false)),
            ("tax_benefit_consent", FieldValue::from(false)),
            ("communication_consent", FieldValue::from(false)),
            ("terms_accepted", FieldValue::from(false)),
        ])
    }

    fn step_label(step: usize) -> &'static str {
        match step {
            1 => "Personal",
            2 => "Donation",
            3 => "Payment",
            _ => "Review",
        }
    }

    fn visible_fields(step: usize, fields: &FormFields) -> Vec<&'static str> {
        match step {
            1 => {
                let mut visible = vec![
                    "full_name",
                    "email",
                    "phone",
                    "alternate_phone",
                    "date_of_birth",
                    "gender",
                    "address",
                    "city",
                    "state",
                    "pincode",
                    "country",
                    "is_organization",
                ];
                if fields.flag("is_organization") {
                    visible.extend(["organization_name", "designation", "employee_id"]);
                }
                visible.extend(["pan_number", "aadhar_number"]);
                visible
            }
            2 => {
                let mut visible = vec![
                    "ngo",
                    "donation_amount",
                    "donation_purpose",
                    "comments",
                    "is_anonymous",
                    "is_recurring",
                ];
                if fields.flag("is_recurring") {
                    visible.push("recurring_frequency");
                }
                visible
            }
            3 => {
                let mut visible = vec!["payment_method"];
                if Self::pays_by_card(fields) {
                    visible.extend(["card_number", "card_holder", "expiry_date", "cvv"]);
                }
                visible
            }
            4 => vec!["tax_benefit_consent", "communication_consent", "terms_accepted"],
            _ => Vec::new(),
        }
    }

    fn required_fields(step: usize, fields: &FormFields) -> Vec<&'static str> {
        match step {
            1 => {
                let mut required = vec![
                    "full_name",
                    "email",
                    "phone",
                    "date_of_birth",
                    "gender",
                    "address",
                    "city",
                    "state",
                    "pincode",
                    "country",
                ];
                if fields.flag("is_organization") {
                    required.push("organization_name");
                }
                required.push("pan_number");
                required
            }
            2 => vec!["ngo", "donation_amount", "donation_purpose"],
            3 if Self::pays_by_card(fields) => {
                vec!["card_number", "card_holder", "expiry_date", "cvv"]
            }
            3 => Vec::new(),
            4 => vec!["tax_benefit_consent", "terms_accepted"],
            _ => Vec::new(),
        }
    }

    fn choices() -> Vec<(&'static str, Vec<String>)> {
        let owned = |options: &[&str]| -> Vec<String> {
            options.iter().map(|option| option.to_string()).collect()
        };
        vec![
            ("donation_purpose", owned(&PURPOSE_OPTIONS[..])),
            (
                "payment_method",
                owned(&[PAYMENT_CREDIT_CARD, PAYMENT_UPI, PAYMENT_NET_BANKING][..]),
            ),
        ]
    }

    // No inter-step gate: `go_next` always advances while steps remain.

    fn validate_submission(fields: &FormFields) -> Result<(), ValidationError> {
        Self::request(fields).map(|_| ())
    }
}
