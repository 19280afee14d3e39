//! Wire types for the external data and vote services.
//!
//! The HTTP round trips themselves live in the JS shell; this module owns
//! the payload shapes. `GET /api/themes` returns the theme tree, and
//! `POST /api/news/vote` records a reaction and returns the authoritative
//! new score.

use serde::{Deserialize, Serialize};

use crate::model::Theme;
use crate::stance::Vote;

/// Response body of `GET /api/themes`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemesResponse {
    #[serde(default)]
    pub themes: Vec<Theme>,
}

/// Request body of `POST /api/news/vote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteRequest {
    #[serde(rename = "currentScore")]
    pub current_score: f64,
    #[serde(rename = "opinionId")]
    pub opinion_id: String,
    #[serde(rename = "voteType")]
    pub vote_type: Vote,
}

/// Response body of `POST /api/news/vote`. The service is the source of
/// truth for the persisted score; the client-side aggregator only echoes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoteResponse {
    #[serde(rename = "newScore")]
    pub new_score: f64,
}

/// Parse a themes payload as fetched by the shell.
pub fn parse_themes(json: &str) -> Result<ThemesResponse, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_realistic_themes_payload() {
        let json = r##"{
            "themes": [
                {
                    "id": "tax_usage",
                    "title": "税金の使い道",
                    "color": "#E57373",
                    "opinions": [
                        {
                            "id": "op1",
                            "theme_id": "tax_usage",
                            "title": "社会保障を優先",
                            "body": "高齢化に備えるべき",
                            "score": -80,
                            "color": "#E57373",
                            "sourceUrl": "https://example.com/a"
                        },
                        {
                            "id": "op2",
                            "title": "減税を優先",
                            "body": "",
                            "score": 72.5
                        }
                    ]
                }
            ]
        }"##;

        let resp = parse_themes(json).unwrap();
        assert_eq!(resp.themes.len(), 1);
        let theme = &resp.themes[0];
        assert_eq!(theme.id, "tax_usage");
        assert_eq!(theme.opinions.len(), 2);
        assert_eq!(theme.opinions[0].score, -80.0);
        assert_eq!(
            theme.opinions[0].source_url.as_deref(),
            Some("https://example.com/a")
        );
        // Optional fields absent in the second opinion.
        assert!(theme.opinions[1].color.is_none());
        assert!(theme.opinions[1].source_url.is_none());
    }

    #[test]
    fn test_parse_empty_and_missing_themes() {
        assert!(parse_themes(r#"{"themes": []}"#).unwrap().themes.is_empty());
        assert!(parse_themes(r#"{}"#).unwrap().themes.is_empty());
        assert!(parse_themes("not json").is_err());
    }

    #[test]
    fn test_vote_request_wire_format() {
        let req = VoteRequest {
            current_score: 16.0,
            opinion_id: "op1".into(),
            vote_type: Vote::Oppose,
        };
        let json = serde_json::to_string(&req).unwrap();
        assert!(json.contains(r#""currentScore":16.0"#));
        assert!(json.contains(r#""voteType":"oppose""#));

        let resp: VoteResponse = serde_json::from_str(r#"{"newScore": 24}"#).unwrap();
        assert_eq!(resp.new_score, 24.0);
    }
}
