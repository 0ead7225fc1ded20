use crate::repository::PassengerProfile;
use serde::Serialize;
use uuid::Uuid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum VerificationFailureReason {
    InvalidOrExpired,
    AlreadyUsed,
}

///
/// Outcome of a verification attempt. Domain rejections are carried
/// here with `valid: false`; only infrastructure failures surface
/// as errors, so the driver UI can tell "bad ticket" from
/// "network problem".
///
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verification {
    pub valid: bool,

    /// Set on repeated scans of the same ticket within the dedup window
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<VerificationFailureReason>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub passenger_id: Option<Uuid>,

    pub passenger_name: Option<String>,
    pub passenger_company: Option<String>,
    pub passenger_position: Option<String>,
}

impl Verification {
    pub fn accepted(
        passenger_id: Uuid,
        profile: Option<PassengerProfile>,
        duplicate: bool,
    ) -> Self {
        let (passenger_name, passenger_company, passenger_position) = match profile {
            Some(profile) => (Some(profile.name), profile.company, profile.position),
            None => (None, None, None),
        };

        Self {
            valid: true,
            duplicate: duplicate.then_some(true),
            reason: None,
            passenger_id: Some(passenger_id),
            passenger_name,
            passenger_company,
            passenger_position,
        }
    }

    pub fn rejected(reason: VerificationFailureReason) -> Self {
        Self {
            valid: false,
            duplicate: None,
            reason: Some(reason),
            passenger_id: None,
            passenger_name: None,
            passenger_company: None,
            passenger_position: None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::Value;

    #[test]
    fn accepted_json_shape() {
        let passenger_id = Uuid::new_v4();
        let verification = Verification::accepted(
            passenger_id,
            Some(PassengerProfile {
                name: "Jin Wei".to_string(),
                company: Some("Acme".to_string()),
                position: None,
            }),
            false,
        );

        let json = serde_json::to_value(&verification).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.get("valid"), Some(&Value::Bool(true)));
        assert!(object.get("duplicate").is_none());
        assert!(object.get("reason").is_none());
        assert_eq!(
            object.get("passengerId").unwrap().as_str().unwrap(),
            passenger_id.to_string()
        );
        assert_eq!(object.get("passengerName").unwrap(), "Jin Wei");
        assert_eq!(object.get("passengerPosition"), Some(&Value::Null));
    }

    #[test]
    fn duplicate_json_shape() {
        let verification = Verification::accepted(Uuid::new_v4(), None, true);

        let json = serde_json::to_value(&verification).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.get("valid"), Some(&Value::Bool(true)));
        assert_eq!(object.get("duplicate"), Some(&Value::Bool(true)));
        assert_eq!(object.get("passengerName"), Some(&Value::Null));
    }

    #[test]
    fn rejected_json_shape() {
        let verification = Verification::rejected(VerificationFailureReason::AlreadyUsed);

        let json = serde_json::to_value(&verification).unwrap();

        let object = json.as_object().unwrap();
        assert_eq!(object.get("valid"), Some(&Value::Bool(false)));
        assert_eq!(object.get("reason").unwrap(), "ALREADY_USED");
        assert!(object.get("passengerId").is_none());
    }

    #[test]
    fn reason_names() {
        let json = serde_json::to_value(VerificationFailureReason::InvalidOrExpired).unwrap();

        assert_eq!(json, "INVALID_OR_EXPIRED");
    }
}
