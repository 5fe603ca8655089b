use serde::{Deserialize, Serialize};

/// Account record returned by the auth endpoints and cached locally
/// alongside the session token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
    pub avatar: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "isVerified")]
    pub is_verified: bool,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl User {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// Response from /api/auth/login and /api/auth/signup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: User,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(rename = "firstName")]
    pub first_name: String,
    #[serde(rename = "lastName")]
    pub last_name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyEmailRequest {
    pub email: String,
    pub otp: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_auth_response() {
        let json = r#"{"token":"eyJhbGciOiJIUzI1NiJ9.x.y","user":{"id":"661f2","username":"jdoe","email":"jdoe@example.com","firstName":"Jane","lastName":"Doe","avatar":null,"bio":null,"isVerified":false,"createdAt":"2025-04-17T09:21:44"}}"#;

        let resp: AuthResponse = serde_json::from_str(json)
            .expect("Failed to parse auth response test JSON");
        assert_eq!(resp.token, "eyJhbGciOiJIUzI1NiJ9.x.y");
        assert_eq!(resp.user.username, "jdoe");
        assert_eq!(resp.user.full_name(), "Jane Doe");
        assert!(!resp.user.is_verified);
    }

    #[test]
    fn test_user_round_trips_through_json() {
        let user = User {
            id: "u1".to_string(),
            username: "jdoe".to_string(),
            email: "jdoe@example.com".to_string(),
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            avatar: Some("/uploads/avatars/u1.jpg".to_string()),
            bio: None,
            is_verified: true,
            created_at: "2025-04-17T09:21:44".to_string(),
        };

        let json = serde_json::to_string(&user).expect("serialize user");
        // Wire format stays camelCase
        assert!(json.contains("\"firstName\":\"Jane\""));
        assert!(json.contains("\"isVerified\":true"));

        let back: User = serde_json::from_str(&json).expect("parse user");
        assert_eq!(back, user);
    }
}
