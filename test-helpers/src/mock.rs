//! Seed data shared by the integration tests and the dev-server.
//!
//! - Ada (42): active, the canonical single-user fixture
//! - John Doe (1): active
//! - Jane Smith (2): inactive, so active-user listings skip her

use jiff::Timestamp;
use payloads::{User, UserId};

pub const ADA: UserId = UserId(42);
pub const JOHN: UserId = UserId(1);
pub const JANE: UserId = UserId(2);

/// An id no seeded user has.
pub const MISSING: UserId = UserId(999);

pub fn users() -> Vec<User> {
    vec![
        user(JOHN, "John Doe", "john@example.com", true),
        user(JANE, "Jane Smith", "jane@example.com", false),
        user(ADA, "Ada", "ada@example.com", true),
    ]
}

pub fn user(id: UserId, name: &str, email: &str, is_active: bool) -> User {
    User {
        id,
        name: name.into(),
        email: email.into(),
        is_active,
        created_at: Some(created_at()),
    }
}

fn created_at() -> Timestamp {
    // 2025-01-01T00:00:00Z
    Timestamp::from_second(1_735_689_600).unwrap_or(Timestamp::UNIX_EPOCH)
}

/// Print a summary of the seeded data
pub fn print_summary(users: &[User]) {
    tracing::info!("📋 Available test data:");
    for user in users {
        tracing::info!(
            "   👤 {} ({}) <{}> {}",
            user.name,
            user.id,
            user.email,
            if user.is_active { "active" } else { "inactive" }
        );
    }
}
