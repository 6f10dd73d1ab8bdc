//! Auth session state delivered by the backend.

use serde::{Deserialize, Serialize};

use docuhub_core::UserId;

/// The currently authenticated session, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user_id: UserId,
    pub email: String,
}

/// Auth-state change pushed by the backend.
///
/// Events can originate outside this process (another tab, token expiry), so
/// consumers must treat them as authoritative over local state.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    SignedIn,
    TokenRefreshed,
    SignedOut,
}
