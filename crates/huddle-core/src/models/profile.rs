// Allow dead code: API response structs have fields for completeness
#![allow(dead_code)]

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Education, WorkExperience};

/// Full profile as served by GET /api/profiles/{username}.
///
/// The backend omits null fields, so everything the owner may not have
/// filled in (or that privacy settings hide from the viewer) is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    #[serde(rename = "userId")]
    pub user_id: String,
    pub username: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub avatar: Option<String>,
    #[serde(rename = "coverPhoto")]
    pub cover_photo: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "birthDate")]
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    #[serde(rename = "relationshipStatus")]
    pub relationship_status: Option<String>,
    #[serde(rename = "phoneNumber")]
    pub phone_number: Option<String>,
    pub website: Option<String>,
    #[serde(rename = "alternativeEmail")]
    pub alternative_email: Option<String>,
    #[serde(rename = "currentCity")]
    pub current_city: Option<String>,
    pub hometown: Option<String>,
    #[serde(rename = "placesLived", default)]
    pub places_lived: Vec<String>,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub music: Vec<String>,
    #[serde(default)]
    pub movies: Vec<String>,
    #[serde(default)]
    pub books: Vec<String>,
    #[serde(default)]
    pub sports: Vec<String>,
    #[serde(rename = "lifeEvents", default)]
    pub life_events: Vec<LifeEvent>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(rename = "workExperience", default)]
    pub work_experience: Vec<WorkExperience>,
    #[serde(rename = "followerCount", default)]
    pub follower_count: i64,
    #[serde(rename = "followingCount", default)]
    pub following_count: i64,
    #[serde(rename = "isVerified", default)]
    pub is_verified: bool,
    #[serde(rename = "createdAt")]
    pub created_at: Option<String>,
}

impl Profile {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// PATCH /api/profiles body. Only fields present in the request are
/// touched by the backend, so every field is optional and skipped
/// when unset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(rename = "birthDate", skip_serializing_if = "Option::is_none")]
    pub birth_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(rename = "relationshipStatus", skip_serializing_if = "Option::is_none")]
    pub relationship_status: Option<String>,
    #[serde(rename = "phoneNumber", skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(rename = "alternativeEmail", skip_serializing_if = "Option::is_none")]
    pub alternative_email: Option<String>,
    #[serde(rename = "currentCity", skip_serializing_if = "Option::is_none")]
    pub current_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hometown: Option<String>,
    #[serde(rename = "placesLived", skip_serializing_if = "Option::is_none")]
    pub places_lived: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interests: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub movies: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub books: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sports: Option<Vec<String>>,
}

/// Timeline entry on a profile (graduations, moves, ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LifeEvent {
    pub id: Option<String>,
    pub title: String,
    pub description: Option<String>,
    pub date: NaiveDate,
    pub category: Option<String>,
    pub visibility: Option<String>,
}

/// Privacy settings as served by GET /api/privacy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrivacySettings {
    pub id: String,
    #[serde(rename = "defaultPostVisibility")]
    pub default_post_visibility: String,
    #[serde(rename = "profileVisibility")]
    pub profile_visibility: String,
    #[serde(rename = "friendListVisibility")]
    pub friend_list_visibility: String,
    #[serde(rename = "sectionVisibility", default)]
    pub section_visibility: HashMap<String, String>,
    #[serde(rename = "allowSearchEngines")]
    pub allow_search_engines: bool,
    #[serde(rename = "showInFriendSuggestions")]
    pub show_in_friend_suggestions: bool,
    #[serde(rename = "allowFriendRequests")]
    pub allow_friend_requests: bool,
    #[serde(rename = "allowDataForRecommendations")]
    pub allow_data_for_recommendations: bool,
}

/// PUT /api/privacy body; unset fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PrivacyUpdate {
    #[serde(rename = "defaultPostVisibility", skip_serializing_if = "Option::is_none")]
    pub default_post_visibility: Option<String>,
    #[serde(rename = "profileVisibility", skip_serializing_if = "Option::is_none")]
    pub profile_visibility: Option<String>,
    #[serde(rename = "friendListVisibility", skip_serializing_if = "Option::is_none")]
    pub friend_list_visibility: Option<String>,
    #[serde(rename = "sectionVisibility", skip_serializing_if = "Option::is_none")]
    pub section_visibility: Option<HashMap<String, String>>,
    #[serde(rename = "allowSearchEngines", skip_serializing_if = "Option::is_none")]
    pub allow_search_engines: Option<bool>,
    #[serde(rename = "showInFriendSuggestions", skip_serializing_if = "Option::is_none")]
    pub show_in_friend_suggestions: Option<bool>,
    #[serde(rename = "allowFriendRequests", skip_serializing_if = "Option::is_none")]
    pub allow_friend_requests: Option<bool>,
    #[serde(rename = "allowDataForRecommendations", skip_serializing_if = "Option::is_none")]
    pub allow_data_for_recommendations: Option<bool>,
}
