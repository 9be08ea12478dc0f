use serde::{Deserialize, Serialize};

use crate::users::repo_types::User;

/// Request body for create and update. Missing fields decode as empty strings;
/// client-sent `userId` / `_id` are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
}

impl From<UserPayload> for User {
    fn from(p: UserPayload) -> Self {
        Self {
            id: None,
            user_id: String::new(),
            first_name: p.first_name,
            last_name: p.last_name,
            email: p.email,
            mobile_number: p.mobile_number,
            password: p.password,
        }
    }
}

/// User as rendered over HTTP; `_id` is the hex form of the ObjectId.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id.map(|oid| oid.to_hex()),
            user_id: u.user_id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            mobile_number: u.mobile_number,
            password: u.password,
        }
    }
}

/// Uniform `{status, message, data?}` response wrapper.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub status: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> Envelope<T> {
    pub fn with_data(status: u16, message: impl Into<String>, data: T) -> Self {
        Self {
            status,
            message: message.into(),
            data: Some(data),
        }
    }
}

impl Envelope<()> {
    pub fn message(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            data: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn payload_ignores_client_ids_and_defaults_missing_fields() {
        let p: UserPayload =
            serde_json::from_str(r#"{"userId":"x","_id":"y","firstName":"Ann"}"#).unwrap();
        assert_eq!(p.first_name, "Ann");
        assert_eq!(p.last_name, "");
        assert_eq!(p.password, "");
    }

    #[test]
    fn response_hides_empty_password_and_renders_hex_id() {
        let oid = ObjectId::new();
        let user = User {
            id: Some(oid),
            user_id: "u-1".into(),
            first_name: "Ann".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(UserResponse::from(user)).unwrap();
        assert_eq!(json["_id"], oid.to_hex());
        assert_eq!(json["userId"], "u-1");
        assert!(json.get("password").is_none());
    }

    #[test]
    fn envelope_without_data_omits_field() {
        let json = serde_json::to_value(Envelope::message(200, "ok")).unwrap();
        assert_eq!(json, serde_json::json!({"status": 200, "message": "ok"}));
    }
}
