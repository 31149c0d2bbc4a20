use derive_more::Display;

use crate::error::InvalidTarget;

/// The identifier driving a fetch, usually a URL or an endpoint path.
///
/// Two requests are the same request iff their targets are byte-for-byte
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display)]
#[display("{target}")]
pub struct FetchRequest {
    target: String,
}

impl FetchRequest {
    pub fn new(target: impl Into<String>) -> Result<Self, InvalidTarget> {
        let target = target.into();
        if target.is_empty() {
            return Err(InvalidTarget);
        }
        Ok(Self { target })
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl TryFrom<&str> for FetchRequest {
    type Error = InvalidTarget;

    fn try_from(target: &str) -> Result<Self, Self::Error> {
        Self::new(target)
    }
}
