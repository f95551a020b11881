// ============================================================================
// SIGNUP WIZARD - Account (step 1) then role-specific profile (step 2)
// ============================================================================

use crate::errors::ValidationError;
use crate::models::{DonorProfileRequest, NgoProfileRequest, ProfileRequest, Role, SignupRequest};
use crate::wizard::controller::WizardFlow;
use crate::wizard::fields::FormFields;

pub struct SignupFlow;

const ACCOUNT_FIELDS: [&str; 5] = ["role", "name", "email", "password", "confirm_password"];

const DONOR_PROFILE_FIELDS: [&str; 5] = ["phone", "dob", "gender", "pan_number", "aadhaar_number"];

const NGO_PROFILE_FIELDS: [&str; 10] = [
    "registration_number",
    "registration_date",
    "category",
    "phone",
    "city",
    "state",
    "country",
    "mission",
    "vision",
    "website",
];

const NGO_OPTIONAL_FIELDS: [&str; 3] = ["mission", "vision", "website"];

impl SignupFlow {
    /// Role picked on step 1 (defaults to "user")
    pub fn role(fields: &FormFields) -> Role {
        Role::parse(fields.text("role"))
    }

    fn needs_organization(role: &Role) -> bool {
        matches!(role, Role::Ngo | Role::Admin)
    }

    pub fn signup_request(fields: &FormFields) -> Result<SignupRequest, ValidationError> {
        Self::validate_submission(fields)?;
        for name in Self::required_fields(1, fields) {
            if !fields.is_filled(name) {
                return Err(ValidationError::MissingField(name));
            }
        }
        let role = Self::role(fields);
        let organization = if Self::needs_organization(&role) {
            fields.optional_text("organization")
        } else {
            None
        };
        Ok(SignupRequest {
            email: fields.text("email").trim().to_string(),
            password: fields.text("password").to_string(),
            role,
            name: fields.optional_text("name"),
            organization,
        })
    }

    /// Profile created right after the account, `None` for roles without one
    pub fn profile_request(fields: &FormFields, user_id: i64) -> Option<ProfileRequest> {
        match Self::role(fields) {
            Role::Donor => Some(ProfileRequest::Donor(DonorProfileRequest {
                user_id,
                name: fields.text("name").trim().to_string(),
                phone: fields.text("phone").trim().to_string(),
                dob: fields.optional_text("dob"),
                gender: fields.optional_text("gender"),
                pan_number: fields.optional_text("pan_number"),
                aadhaar_number: fields.optional_text("aadhaar_number"),
            })),
            Role::Ngo => Some(ProfileRequest::Ngo(NgoProfileRequest {
                user_id,
                registration_number: fields.text("registration_number").trim().to_string(),
                registration_date: fields.text("registration_date").trim().to_string(),
                category: fields.text("category").trim().to_string(),
                phone: fields.text("phone").trim().to_string(),
                city: fields.text("city").trim().to_string(),
                state: fields.text("state").trim().to_string(),
                country: fields.text("country").trim().to_string(),
                mission: fields.optional_text("mission"),
                vision: fields.optional_text("vision"),
                website: fields.optional_text("website"),
            })),
            _ => None,
        }
    }
}

impl WizardFlow for SignupFlow {
    const NAME: &'static str = "SIGNUP";
    const TOTAL_STEPS: usize = 2;

    fn initial_fields() -> FormFields {
        let mut fields = FormFields::new();
        fields.set("role", Role::User.as_str());
        fields
    }

    fn step_label(step: usize) -> &'static str {
        match step {
            1 => "Account",
            _ => "Profile",
        }
    }

    fn visible_fields(step: usize, fields: &FormFields) -> Vec<&'static str> {
        let role = Self::role(fields);
        match step {
            1 => {
                let mut visible = ACCOUNT_FIELDS.to_vec();
                if Self::needs_organization(&role) {
                    visible.push("organization");
                }
                visible
            }
            2 => match role {
                Role::Donor => DONOR_PROFILE_FIELDS.to_vec(),
                Role::Ngo => NGO_PROFILE_FIELDS.to_vec(),
                _ => Vec::new(),
            },
            _ => Vec::new(),
        }
    }

    fn required_fields(step: usize, fields: &FormFields) -> Vec<&'static str> {
        let role = Self::role(fields);
        match (step, role) {
            (2, Role::Donor) => vec!["phone"],
            (2, Role::Ngo) => NGO_PROFILE_FIELDS
                .into_iter()
                .filter(|name| !NGO_OPTIONAL_FIELDS.contains(name))
                .collect(),
            (2, _) => Vec::new(),
            (_, role) => {
                let mut required = vec!["name", "email", "password", "confirm_password"];
                if Self::needs_organization(&role) {
                    required.push("organization");
                }
                required
            }
        }
    }

    /// Step 1 only leaves once both passwords are filled in and equal
    fn validate_step(step: usize, fields: &FormFields) -> Result<(), ValidationError> {
        if step != 1 {
            return Ok(());
        }
        let password = fields.text("password");
        let confirm = fields.text("confirm_password");
        if password.is_empty() {
            return Err(ValidationError::MissingField("password"));
        }
        if confirm.is_empty() {
            return Err(ValidationError::MissingField("confirm_password"));
        }
        if password != confirm {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }

    fn choices() -> Vec<(&'static str, Vec<String>)> {
        let roles = Role::selectable()
            .iter()
            .map(|role| role.as_str().to_string())
            .collect();
        vec![("role", roles)]
    }

    /// The password pair is off screen at submit time
    fn validate_submission(fields: &FormFields) -> Result<(), ValidationError> {
        Self::validate_step(1, fields)
    }
}
