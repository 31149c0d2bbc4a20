use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Observable lifecycle of a single fetch.
///
/// A load always publishes `Pending` first and then exactly one of
/// `Success` or `Failure`. Holding the three cases in one enum means a
/// consumer can never see "loading" and "error" at the same time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum FetchState<T> {
    Pending,
    Success {
        payload: T,
    },
    Failure {
        message: String,
    },
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Pending
    }
}

impl<T> FetchState<T> {
    pub fn success(payload: T) -> Self {
        Self::Success { payload }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self::Failure {
            message: message.into(),
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failure { .. })
    }

    /// True once the fetch has resolved one way or the other.
    pub fn is_terminal(&self) -> bool {
        !self.is_pending()
    }

    pub fn payload(&self) -> Option<&T> {
        match self {
            Self::Success { payload } => Some(payload),
            _ => None,
        }
    }

    pub fn into_payload(self) -> Option<T> {
        match self {
            Self::Success { payload } => Some(payload),
            _ => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Failure { message } => Some(message),
            _ => None,
        }
    }

    pub fn map<U, F>(self, f: F) -> FetchState<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Self::Pending => FetchState::Pending,
            Self::Success { payload } => FetchState::Success {
                payload: f(payload),
            },
            Self::Failure { message } => FetchState::Failure { message },
        }
    }
}

impl<T, E: Display> From<Result<T, E>> for FetchState<T> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(payload) => Self::Success { payload },
            Err(e) => Self::Failure {
                message: e.to_string(),
            },
        }
    }
}
