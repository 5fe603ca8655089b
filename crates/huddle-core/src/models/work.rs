use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Work-experience entry as stored on a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkExperience {
    pub id: String,
    pub company: String,
    pub position: String,
    pub location: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Body for POST/PUT /api/profiles/work; the backend assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct WorkInput {
    pub company: String,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate", skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_work_entry() {
        let json = r#"{"id":"w-3","company":"Acme","position":"Engineer","location":"Remote","startDate":"2021-02-15","endDate":"2023-11-30","current":false,"description":"Backend services"}"#;

        let entry: WorkExperience = serde_json::from_str(json)
            .expect("Failed to parse work test JSON");
        assert_eq!(entry.company, "Acme");
        assert_eq!(entry.end_date, NaiveDate::from_ymd_opt(2023, 11, 30));
        assert!(!entry.current);
    }
}
