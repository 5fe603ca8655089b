//! Profile data gateway: typed CRUD over profile, education,
//! work-experience, life-event, and privacy resources.
//!
//! Every operation reuses the client's single error-normalization
//! path; no call site classifies failures on its own.

use std::path::Path;

use reqwest::multipart::{Form, Part};
use reqwest::Method;
use tracing::debug;

use crate::models::{
    Education, EducationInput, LifeEvent, PrivacySettings, PrivacyUpdate, Profile, ProfileUpdate,
    WorkExperience, WorkInput,
};

use super::{ApiClient, ApiError, ApiResult};

/// Guess a mime type from the file extension for upload parts.
fn mime_for_extension(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("gif") => "image/gif",
        Some("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}

impl ApiClient {
    // ===== Profile =====

    /// Fetch a profile by username. Fields hidden by the owner's
    /// privacy settings come back absent.
    pub async fn fetch_profile(&self, username: &str) -> ApiResult<Profile> {
        self.get(&format!("/api/profiles/{}", username)).await
    }

    /// Patch the authenticated user's profile; only the fields set on
    /// the update are touched.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<Profile> {
        self.patch("/api/profiles", update).await
    }

    /// Upload a new avatar from a local image file.
    /// Returns the stored file path usable to build a display URL.
    pub async fn upload_avatar(&self, path: &Path) -> ApiResult<String> {
        self.upload_image("/api/profiles/avatar", path).await
    }

    /// Upload a new cover photo from a local image file.
    pub async fn upload_cover(&self, path: &Path) -> ApiResult<String> {
        self.upload_image("/api/profiles/cover", path).await
    }

    /// Build a multipart `file` part from a local path and POST it.
    /// The backend responds with the stored path as a plain string.
    async fn upload_image(&self, route: &str, path: &Path) -> ApiResult<String> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| ApiError::Client(format!("Failed to read {}: {}", path.display(), e)))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload.jpg")
            .to_string();
        debug!(route = route, file = %file_name, size = bytes.len(), "uploading image");

        let part = Part::bytes(bytes)
            .file_name(file_name)
            .mime_str(mime_for_extension(path))
            .map_err(|e| ApiError::Client(e.to_string()))?;
        let form = Form::new().part("file", part);

        let response = self.request(Method::POST, route).multipart(form).send().await?;
        let response = Self::check_response(response).await?;
        Ok(response.text().await?)
    }

    // ===== Education =====

    pub async fn add_education(&self, input: &EducationInput) -> ApiResult<Education> {
        self.post("/api/profiles/education", input).await
    }

    pub async fn update_education(&self, id: &str, input: &EducationInput) -> ApiResult<Education> {
        self.put(&format!("/api/profiles/education/{}", id), input).await
    }

    pub async fn delete_education(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/profiles/education/{}", id)).await
    }

    // ===== Work Experience =====

    pub async fn add_work(&self, input: &WorkInput) -> ApiResult<WorkExperience> {
        self.post("/api/profiles/work", input).await
    }

    pub async fn update_work(&self, id: &str, input: &WorkInput) -> ApiResult<WorkExperience> {
        self.put(&format!("/api/profiles/work/{}", id), input).await
    }

    pub async fn delete_work(&self, id: &str) -> ApiResult<()> {
        self.delete(&format!("/api/profiles/work/{}", id)).await
    }

    // ===== Life Events =====

    /// Add a timeline entry; the backend returns the updated profile.
    pub async fn add_life_event(&self, event: &LifeEvent) -> ApiResult<Profile> {
        self.post("/api/profiles/life-events", event).await
    }

    pub async fn delete_life_event(&self, id: &str) -> ApiResult<Profile> {
        let response = self
            .request(Method::DELETE, &format!("/api/profiles/life-events/{}", id))
            .send()
            .await?;
        let response = Self::check_response(response).await?;
        Ok(response.json().await?)
    }

    // ===== Privacy =====

    pub async fn fetch_privacy_settings(&self) -> ApiResult<PrivacySettings> {
        self.get("/api/privacy").await
    }

    pub async fn update_privacy_settings(
        &self,
        update: &PrivacyUpdate,
    ) -> ApiResult<PrivacySettings> {
        self.put("/api/privacy", update).await
    }

    /// Block a user from seeing or contacting the authenticated account.
    pub async fn block_user(&self, user_id: &str) -> ApiResult<()> {
        let response = self
            .request(Method::POST, &format!("/api/privacy/block/{}", user_id))
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }

    pub async fn unblock_user(&self, user_id: &str) -> ApiResult<()> {
        let response = self
            .request(Method::POST, &format!("/api/privacy/unblock/{}", user_id))
            .send()
            .await?;
        Self::check_response(response).await?;
        Ok(())
    }
}
