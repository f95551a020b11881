use serde::{Deserialize, Serialize};

/// Who the current session belongs to
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Ngo,
    Donor,
    User,
    #[default]
    None,
    /// A role string the client does not know; treated like an anonymous visitor
    Unknown(String),
}

impl Role {
    /// Parse a role as sent by the backend (which may upper-case it)
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "admin" => Role::Admin,
            "ngo" => Role::Ngo,
            "donor" => Role::Donor,
            "user" => Role::User,
            "" | "none" => Role::None,
            _ => Role::Unknown(raw.trim().to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => "admin",
            Role::Ngo => "ngo",
            Role::Donor => "donor",
            Role::User => "user",
            Role::None => "none",
            Role::Unknown(raw) => raw,
        }
    }

    pub fn display_name(&self) -> &str {
        match self {
            Role::Admin => "Admin",
            Role::Ngo => "NGO",
            Role::Donor => "Donor",
            Role::User => "User",
            Role::None => "Guest",
            Role::Unknown(raw) => raw,
        }
    }

    /// Roles offered on the sign-in / sign-up screen
    pub fn selectable() -> [Role; 4] {
        [Role::Admin, Role::Ngo, Role::Donor, Role::User]
    }

    /// Page id requested right after a successful sign-in or sign-up
    pub fn landing_page_id(&self) -> &'static str {
        match self {
            Role::Donor => "donor-dashboard",
            Role::Ngo => "ngo-dashboard",
            _ => "dashboard",
        }
    }
}

impl From<String> for Role {
    fn from(raw: String) -> Self {
        Role::parse(&raw)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.as_str().to_string()
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
    pub name: Option<String>,
    pub organization: Option<String>,
}

/// Body returned by `/api/auth/login` and `/api/auth/signup`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AuthResponse {
    #[serde(default)]
    pub message: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub token: Option<String>,
    pub user_id: i64,
}

/// `{ "error": "..." }` body the backend sends with non-2xx statuses
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!(Role::parse("DONOR"), Role::Donor);
        assert_eq!(Role::parse("ngo"), Role::Ngo);
        assert_eq!(Role::parse(""), Role::None);
        assert_eq!(Role::parse("auditor"), Role::Unknown("auditor".to_string()));
    }

    #[test]
    fn auth_response_decodes_backend_payload() {
        let body = r#"{"message":"Login successful","user_id":7,"role":"donor","token":"t1"}"#;
        let response: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.role, Role::Donor);
        assert_eq!(response.token.as_deref(), Some("t1"));
        assert_eq!(response.user_id, 7);
    }

    #[test]
    fn signup_response_may_omit_token() {
        let body = r#"{"message":"Signup successful","user_id":3,"role":"ngo"}"#;
        let response: AuthResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.token, None);
    }

    #[test]
    fn login_request_sends_lowercase_role() {
        let request = LoginRequest {
            email: "a@b.org".to_string(),
            password: "pw".to_string(),
            role: Role::Ngo,
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["role"], "ngo");
    }
}
