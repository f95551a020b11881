// ============================================================================
// API CLIENT - HTTP only (stateless)
// ============================================================================
// No business logic here: build the request, send it, decode the body.
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::CONFIG;
use crate::errors::ApiError;
use crate::models::{
    AuthResponse, CreateDonationRequest, CreateDonationResponse, ErrorBody, LoginRequest,
    NgoListResponse, ProfileRequest, ProfileResponse, SignupRequest,
};

/// Backend endpoints the client core depends on
#[async_trait(?Send)]
pub trait TrustBridgeApi {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError>;

    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError>;

    async fn create_profile(&self, request: &ProfileRequest) -> Result<ProfileResponse, ApiError>;

    async fn create_donation(
        &self,
        token: &str,
        request: &CreateDonationRequest,
    ) -> Result<CreateDonationResponse, ApiError>;

    async fn list_ngos(&self, token: Option<&str>) -> Result<NgoListResponse, ApiError>;
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url())
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(
        &self,
        path: &str,
        token: Option<&str>,
        body: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let request = with_bearer(Request::post(&self.url(path)), token)
            .json(body)
            .map_err(|e| ApiError::Parse(format!("Serialization error: {}", e)))?;
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }

    async fn get_json<T>(&self, path: &str, token: Option<&str>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let response = with_bearer(Request::get(&self.url(path)), token)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        decode(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn with_bearer(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody { error: Some(error) }) => error,
            _ => format!("HTTP {}: {}", status, response.status_text()),
        };
        return Err(ApiError::Http { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[async_trait(?Send)]
impl TrustBridgeApi for ApiClient {
    async fn login(&self, request: &LoginRequest) -> Result<AuthResponse, ApiError> {
        log::info!("🔐 [API] Signing in {} as {}", request.email, request.role.as_str());
        self.post_json("/api/auth/login", None, request).await
    }

    async fn signup(&self, request: &SignupRequest) -> Result<AuthResponse, ApiError> {
        log::info!("📝 [API] Creating {} account for {}", request.role.as_str(), request.email);
        self.post_json("/api/auth/signup", None, request).await
    }

    async fn create_profile(&self, request: &ProfileRequest) -> Result<ProfileResponse, ApiError> {
        match request {
            ProfileRequest::Donor(profile) => {
                self.post_json("/api/profile/donor", None, profile).await
            }
            ProfileRequest::Ngo(profile) => self.post_json("/api/profile/ngo", None, profile).await,
        }
    }

    async fn create_donation(
        &self,
        token: &str,
        request: &CreateDonationRequest,
    ) -> Result<CreateDonationResponse, ApiError> {
        log::info!("💸 [API] Donating {} to {}", request.amount, request.ngo_name);
        self.post_json("/api/donations/create", Some(token), request)
            .await
    }

    async fn list_ngos(&self, token: Option<&str>) -> Result<NgoListResponse, ApiError> {
        self.get_json("/api/ngo/list", token).await
    }
}
