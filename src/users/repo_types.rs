use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

/// User document as stored in the `users` collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,        // assigned on create
    pub user_id: String,             // public lookup key, assigned on create
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub mobile_number: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub password: String,            // stored as-is
}
