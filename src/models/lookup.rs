//! Wire types for the two autofill lookups.

use serde::{Deserialize, Serialize};

/// Body of the PAN verification request.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PanVerificationRequest<'a> {
    pub pan_number: &'a str,
}

/// Response of the PAN verification lookup.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PanVerification {
    /// Whether the PAN is registered
    #[serde(default)]
    pub is_valid: bool,

    /// Registered holder name, present when `is_valid` is true
    #[serde(default)]
    pub full_name: Option<String>,
}

impl PanVerification {
    /// Name to autofill, if the PAN verified and a non-empty name came back.
    pub fn verified_name(&self) -> Option<&str> {
        if !self.is_valid {
            return None;
        }
        self.full_name.as_deref().filter(|name| !name.trim().is_empty())
    }
}

/// Body of the postcode lookup request.
#[derive(Debug, Clone, Serialize)]
pub struct PostcodeRequest<'a> {
    pub postcode: &'a str,
}

/// A named place in a postcode response.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct PlaceName {
    pub name: String,
}

/// Response of the postcode lookup.
///
/// Both arrays are optional on the wire; a missing, null, or empty array is
/// treated as "no match" for that field.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct PostcodeDetails {
    #[serde(default)]
    pub city: Option<Vec<PlaceName>>,

    #[serde(default)]
    pub state: Option<Vec<PlaceName>>,
}

impl PostcodeDetails {
    /// First city returned for the postcode.
    pub fn city(&self) -> Option<&str> {
        first_name(self.city.as_deref())
    }

    /// First state returned for the postcode.
    pub fn state(&self) -> Option<&str> {
        first_name(self.state.as_deref())
    }

    /// True when neither a city nor a state came back.
    pub fn is_empty(&self) -> bool {
        self.city().is_none() && self.state().is_none()
    }
}

fn first_name(places: Option<&[PlaceName]>) -> Option<&str> {
    places
        .and_then(|p| p.first())
        .map(|p| p.name.as_str())
        .filter(|name| !name.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_request_body() {
        let body = serde_json::to_value(PanVerificationRequest {
            pan_number: "ABCDE1234F",
        })
        .unwrap();
        assert_eq!(body, serde_json::json!({ "panNumber": "ABCDE1234F" }));
    }

    #[test]
    fn test_pan_verification_name() {
        let ok: PanVerification =
            serde_json::from_str(r#"{"isValid": true, "fullName": "Asha Rao"}"#).unwrap();
        assert_eq!(ok.verified_name(), Some("Asha Rao"));

        let invalid: PanVerification =
            serde_json::from_str(r#"{"isValid": false, "fullName": "Asha Rao"}"#).unwrap();
        assert_eq!(invalid.verified_name(), None);

        let nameless: PanVerification = serde_json::from_str(r#"{"isValid": true}"#).unwrap();
        assert_eq!(nameless.verified_name(), None);
    }

    #[test]
    fn test_postcode_details() {
        let details: PostcodeDetails = serde_json::from_str(
            r#"{"status": "Success", "city": [{"id": 1, "name": "Bengaluru"}], "state": [{"id": 2, "name": "Karnataka"}]}"#,
        )
        .unwrap();
        assert_eq!(details.city(), Some("Bengaluru"));
        assert_eq!(details.state(), Some("Karnataka"));
    }

    #[test]
    fn test_postcode_details_missing_arrays_are_no_match() {
        let missing: PostcodeDetails = serde_json::from_str(r#"{"status": "Error"}"#).unwrap();
        assert!(missing.is_empty());

        let null: PostcodeDetails =
            serde_json::from_str(r#"{"city": null, "state": []}"#).unwrap();
        assert!(null.is_empty());
    }
}
