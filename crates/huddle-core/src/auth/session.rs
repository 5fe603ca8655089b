use tracing::{debug, warn};

use crate::api::{ApiClient, ApiError, ApiResult};
use crate::models::{SignupRequest, User};

use super::store::CredentialStore;

/// Client-side authentication state.
///
/// Constructed empty (and loading) at process start, hydrated once from
/// the credential store, then mutated only by the session operations.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: Option<String>,
    pub user: Option<User>,
    pub is_loading: bool,
}

impl Session {
    pub fn new() -> Self {
        Self {
            token: None,
            user: None,
            is_loading: true,
        }
    }

    /// True iff both a non-empty token and a user record are present.
    pub fn is_authenticated(&self) -> bool {
        self.token.as_deref().is_some_and(|t| !t.is_empty()) && self.user.is_some()
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Single source of truth for who is logged in and at what verification
/// stage.
///
/// Owns the in-memory `Session`, the credential store, and the API
/// client; navigation is not its job -- the UI observes the session and
/// asks the routing gate. Callers pre-validate inputs (email shape,
/// password length); the manager does not re-validate. Only one
/// operation is expected in flight at a time; that exclusion lives in
/// the UI (e.g., disabling the submit control while `is_loading`).
pub struct SessionManager<S: CredentialStore> {
    store: S,
    api: ApiClient,
    session: Session,
}

impl<S: CredentialStore> SessionManager<S> {
    pub fn new(api: ApiClient, store: S) -> Self {
        Self {
            store,
            api,
            session: Session::new(),
        }
    }

    /// Current session state, for rendering and routing decisions.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// API client carrying the current bearer token, for data calls
    /// outside the session lifecycle (profile gateway).
    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Hydrate the session from the credential store. Called once at
    /// startup; storage failures degrade to an empty session (the user
    /// re-authenticates) and are never surfaced as errors.
    pub fn load_session(&mut self) {
        match (self.store.token(), self.store.user()) {
            (Ok(Some(token)), Ok(Some(user))) if !token.is_empty() => {
                debug!(username = %user.username, verified = user.is_verified, "restored session");
                self.api.set_token(token.clone());
                self.session.token = Some(token);
                self.session.user = Some(user);
            }
            (Ok(_), Ok(_)) => {
                debug!("no stored session");
            }
            (token, user) => {
                if let Err(e) = token {
                    warn!(error = %e, "failed to read stored token");
                }
                if let Err(e) = user {
                    warn!(error = %e, "failed to read stored user");
                }
            }
        }
        self.session.is_loading = false;
    }

    /// Authenticate with email and password. On success the credential
    /// store holds exactly the returned token and user, and the
    /// in-memory session matches; on failure nothing changes.
    pub async fn login(&mut self, email: &str, password: &str) -> ApiResult<()> {
        self.session.is_loading = true;
        let result = self.login_inner(email, password).await;
        self.session.is_loading = false;
        result
    }

    async fn login_inner(&mut self, email: &str, password: &str) -> ApiResult<()> {
        let auth = self.api.login(email, password).await?;
        self.install_session(auth.token, auth.user)
    }

    /// Register a new account. New accounts start unverified, so the
    /// routing gate will send the session to the verification screen.
    pub async fn signup(&mut self, request: &SignupRequest) -> ApiResult<()> {
        self.session.is_loading = true;
        let result = self.signup_inner(request).await;
        self.session.is_loading = false;
        result
    }

    async fn signup_inner(&mut self, request: &SignupRequest) -> ApiResult<()> {
        let auth = self.api.signup(request).await?;
        self.install_session(auth.token, auth.user)
    }

    fn install_session(&mut self, token: String, user: User) -> ApiResult<()> {
        self.store
            .save_session(&token, &user)
            .map_err(|e| ApiError::Client(format!("Failed to persist session: {}", e)))?;
        self.api.set_token(token.clone());
        self.session.token = Some(token);
        self.session.user = Some(user);
        Ok(())
    }

    /// Submit the emailed OTP. On success only `user.is_verified` flips,
    /// in memory and in the persisted record; the token is untouched.
    pub async fn verify_email(&mut self, email: &str, otp: &str) -> ApiResult<()> {
        self.session.is_loading = true;
        let result = self.verify_inner(email, otp).await;
        self.session.is_loading = false;
        result
    }

    async fn verify_inner(&mut self, email: &str, otp: &str) -> ApiResult<()> {
        self.api.verify_email(email, otp).await?;
        if let Some(current) = self.session.user.as_ref() {
            // Persist first; the in-memory session stays untouched until
            // the updated record is safely stored
            let updated = User {
                is_verified: true,
                ..current.clone()
            };
            self.store
                .save_user(&updated)
                .map_err(|e| ApiError::Client(format!("Failed to persist user record: {}", e)))?;
            self.session.user = Some(updated);
        }
        Ok(())
    }

    /// Ask the backend for a fresh OTP. No session mutation either way;
    /// any resend cooldown is screen state, not session state.
    pub async fn resend_otp(&mut self, email: &str) -> ApiResult<()> {
        self.session.is_loading = true;
        let result = self.api.resend_otp(email).await;
        self.session.is_loading = false;
        result
    }

    /// Clear the credential store and the in-memory session. Best
    /// effort: local invalidation wins over storage consistency, so a
    /// failed store deletion is logged and the session is cleared anyway.
    pub fn logout(&mut self) {
        self.session.is_loading = true;
        if let Err(e) = self.store.clear() {
            warn!(error = %e, "failed to clear credential store on logout");
        }
        self.api.clear_token();
        self.session.token = None;
        self.session.user = None;
        self.session.is_loading = false;
    }
}
