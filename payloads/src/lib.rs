pub mod api_client;
pub mod responses;

pub use api_client::{APIClient, ClientError};
pub use responses::User;

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Numeric identifier of a user, as it appears in `/users/{id}` paths.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
)]
#[serde(transparent)]
pub struct UserId(pub u32);
