use crate::UserId;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A user record as served by the user service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub is_active: bool,
    /// Absent on records created before the field existed.
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}
