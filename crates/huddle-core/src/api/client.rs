//! API client for communicating with the Huddle backend REST API.
//!
//! This module provides the `ApiClient` struct: one outbound pipeline
//! that attaches the bearer token to every request and funnels every
//! failure through `ApiError` classification.

use std::time::Duration;

use reqwest::{Client, Method};
use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::models::{AuthResponse, LoginRequest, SignupRequest, VerifyEmailRequest};

use super::{ApiError, ApiResult};

/// HTTP request timeout in seconds.
/// 30s allows for slow backend responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// API client for the Huddle backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Drop the bearer token; subsequent requests go out unauthenticated.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(), // Cheap clone, shares connection pool
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Start a request with the bearer token attached when present.
    pub(crate) fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, self.url(path));
        if let Some(ref token) = self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    /// Check if response is successful, classifying the body if not.
    pub(crate) async fn check_response(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            debug!(status = %status, cause = "server", "request rejected");
            Err(ApiError::from_response(status, &body))
        }
    }

    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.request(Method::GET, path).send().await?;
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn put<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn patch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.request(Method::PATCH, path).json(body).send().await?;
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }

    pub(crate) async fn delete(&self, path: &str) -> ApiResult<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::check_response(response).await?;
        Ok(())
    }

    // ===== Authentication Endpoints =====

    /// Authenticate with email and password.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<AuthResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post("/api/auth/login", &body).await
    }

    /// Register a new account. New accounts start unverified.
    pub async fn signup(&self, request: &SignupRequest) -> ApiResult<AuthResponse> {
        self.post("/api/auth/signup", request).await
    }

    /// Submit the emailed OTP to mark the account verified.
    pub async fn verify_email(&self, email: &str, otp: &str) -> ApiResult<()> {
        let body = VerifyEmailRequest {
            email: email.to_string(),
            otp: otp.to_string(),
        };
        let response = self
            .request(Method::POST, "/api/auth/verify-email")
            .json(&body)
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }

    /// Ask the backend to issue a fresh OTP for the given email.
    pub async fn resend_otp(&self, email: &str) -> ApiResult<()> {
        let response = self
            .request(Method::POST, "/api/auth/resend-otp")
            .query(&[("email", email)])
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_login_parses_auth_response() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/login")
            .match_body(mockito::Matcher::Json(serde_json::json!({
                "email": "jdoe@example.com",
                "password": "hunter22"
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(
                r#"{"token":"tok-1","user":{"id":"u1","username":"jdoe","email":"jdoe@example.com","firstName":"Jane","lastName":"Doe","isVerified":true,"createdAt":"2025-04-17T09:21:44"}}"#,
            )
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).expect("build client");
        let auth = client
            .login("jdoe@example.com", "hunter22")
            .await
            .expect("login should succeed");

        assert_eq!(auth.token, "tok-1");
        assert!(auth.user.is_verified);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_login_failure_surfaces_backend_message() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/api/auth/login")
            .with_status(401)
            .with_header("content-type", "application/json")
            .with_body(r#"{"error":"Invalid email or password"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).expect("build client");
        let err = client
            .login("jdoe@example.com", "wrong")
            .await
            .expect_err("login should fail");

        assert_eq!(err.to_string(), "Invalid email or password");
        assert_eq!(err.cause(), "server");
    }

    #[tokio::test]
    async fn test_resend_otp_sends_email_as_query_param() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/resend-otp")
            .match_query(mockito::Matcher::UrlEncoded(
                "email".into(),
                "jdoe@example.com".into(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"OTP sent successfully"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url()).expect("build client");
        client
            .resend_otp("jdoe@example.com")
            .await
            .expect("resend should succeed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_bearer_token_attached_when_present() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/api/auth/verify-email")
            .match_header("authorization", "Bearer tok-9")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"message":"Email verified successfully"}"#)
            .create_async()
            .await;

        let client = ApiClient::new(server.url())
            .expect("build client")
            .with_token("tok-9".to_string());
        client
            .verify_email("jdoe@example.com", "483920")
            .await
            .expect("verify should succeed");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_unreachable_server_classifies_as_network() {
        // Port 1 is never listening
        let client = ApiClient::new("http://127.0.0.1:1").expect("build client");
        let err = client
            .login("jdoe@example.com", "hunter22")
            .await
            .expect_err("connect should fail");
        assert_eq!(err.cause(), "network");
    }
}
