use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Education entry as stored on a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub id: String,
    pub institution: String,
    pub degree: String,
    #[serde(rename = "fieldOfStudy")]
    pub field_of_study: Option<String>,
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,
    #[serde(rename = "endDate")]
    pub end_date: Option<NaiveDate>,
    pub current: bool,
    pub description: Option<String>,
}

/// Body for POST/PUT /api/profiles/education; the backend assigns the id.
#[derive(Debug, Clone, Serialize)]
pub struct EducationInput {
    pub institution: String,
    pub degree: String,
    #[serde(rename = "fieldOfStudy", skip_serializing_if = "Option::is_none")]
    pub field_of_study: Option<String>,
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
    fn test_parse_education_entry() {
        let json = r#"{"id":"e-9","institution":"IST","degree":"MSc","fieldOfStudy":"Distributed Systems","startDate":"2019-09-01","current":true}"#;

        let entry: Education = serde_json::from_str(json)
            .expect("Failed to parse education test JSON");
        assert_eq!(entry.institution, "IST");
        assert_eq!(entry.start_date, NaiveDate::from_ymd_opt(2019, 9, 1).unwrap());
        assert!(entry.end_date.is_none());
        assert!(entry.current);
    }

    #[test]
    fn test_education_input_wire_format() {
        let input = EducationInput {
            institution: "IST".to_string(),
            degree: "BSc".to_string(),
            field_of_study: None,
            start_date: NaiveDate::from_ymd_opt(2016, 9, 1).unwrap(),
            end_date: Some(NaiveDate::from_ymd_opt(2019, 6, 30).unwrap()),
            current: false,
            description: None,
        };

        let json = serde_json::to_string(&input).expect("serialize education input");
        assert_eq!(
            json,
            r#"{"institution":"IST","degree":"BSc","startDate":"2016-09-01","endDate":"2019-06-30","current":false}"#
        );
    }
}
