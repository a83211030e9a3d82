//! Signed-in account profile.

use serde::{Deserialize, Serialize};

/// Profile document of the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "$id")]
    pub id: String,

    #[serde(rename = "accountId")]
    pub account_id: String,

    #[serde(rename = "fullName")]
    pub full_name: String,

    pub email: String,

    /// Avatar image URL.
    #[serde(default)]
    pub avatar: String,
}
