//! Session-holder store: the authenticated user's profile and lifecycle.

use std::sync::Arc;

use tokio::sync::broadcast;

use docuhub_client::{AuthEvent, ProfileChanges, SessionClient};
use docuhub_core::{User, UserId, UserRole};

/// Owns the current authenticated user and the session-initialization
/// lifecycle. Capability flags are pure derivations over the held profile.
pub struct UserStore {
    client: Arc<dyn SessionClient>,
    user: Option<User>,
    loading: bool,
    initialized: bool,
}

impl UserStore {
    pub fn new(client: Arc<dyn SessionClient>) -> Self {
        Self {
            client,
            user: None,
            loading: false,
            initialized: false,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn initialized(&self) -> bool {
        self.initialized
    }

    // ── Derived capability flags ─────────────────────────────────────────

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Display name with a literal "User" fallback when absent or blank.
    pub fn full_name(&self) -> String {
        self.user
            .as_ref()
            .map(User::display_name)
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "User".to_string())
    }

    pub fn is_dean(&self) -> bool {
        self.has_role(UserRole::Dean)
    }

    pub fn is_admin(&self) -> bool {
        self.has_role(UserRole::Admin)
    }

    pub fn is_quams_coordinator(&self) -> bool {
        self.has_role(UserRole::QuamsCoordinator)
    }

    pub fn has_admin_access(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.role.has_admin_access())
    }

    pub fn has_validation_access(&self) -> bool {
        self.user
            .as_ref()
            .is_some_and(|u| u.role.has_validation_access())
    }

    fn has_role(&self, role: UserRole) -> bool {
        self.user.as_ref().is_some_and(|u| u.role == role)
    }

    // ── Lifecycle actions ────────────────────────────────────────────────

    /// Check the current backend session and load the matching profile.
    ///
    /// Idempotent: only the first call reaches the backend. `initialized`
    /// is set on completion regardless of outcome so navigation guards
    /// never retry indefinitely on a failing backend.
    pub async fn initialize(&mut self) {
        if self.initialized {
            return;
        }
        self.loading = true;

        match self.client.current_session().await {
            Ok(Some(session)) => {
                let _ = self
                    .fetch_profile(session.user_id, Some(&session.email))
                    .await;
            }
            Ok(None) => {}
            Err(err) => {
                tracing::error!("error initializing user store: {err}");
            }
        }

        self.loading = false;
        self.initialized = true;
    }

    /// Load a single profile row. A missing record or backend failure
    /// clears the held user and reports `false`; this never errors out to
    /// the caller.
    pub async fn fetch_profile(&mut self, user_id: UserId, email: Option<&str>) -> bool {
        match self.client.fetch_profile(user_id).await {
            Ok(Some(profile)) => {
                self.user = Some(User {
                    id: profile.id,
                    first_name: profile.first_name,
                    last_name: profile.last_name,
                    email: email.unwrap_or_default().to_string(),
                    role: profile.role,
                    department: profile.department,
                    status: profile.status,
                    avatar: profile.avatar,
                });
                true
            }
            Ok(None) => {
                tracing::error!("profile not found: {user_id}");
                self.user = None;
                false
            }
            Err(err) => {
                tracing::error!("error loading profile: {err}");
                self.user = None;
                false
            }
        }
    }

    /// Assign user state directly (post-login) and mark initialized.
    pub fn set_user(&mut self, user: User) {
        self.user = Some(user);
        self.initialized = true;
    }

    /// Persist the mutable profile fields (avatar, name parts). The local
    /// user is replaced only on success, so no partial update is ever
    /// visible.
    pub async fn update_user(&mut self, updated: User) -> bool {
        if self.user.is_none() {
            return false;
        }

        let changes = ProfileChanges {
            first_name: updated.first_name.clone(),
            last_name: updated.last_name.clone(),
            avatar: updated.avatar.clone(),
        };

        match self.client.update_profile(updated.id, changes).await {
            Ok(()) => {
                self.user = Some(updated);
                true
            }
            Err(err) => {
                tracing::error!("error updating user: {err}");
                false
            }
        }
    }

    /// Remote sign-out, then an unconditional local clear.
    pub async fn logout(&mut self) {
        if let Err(err) = self.client.sign_out().await {
            tracing::error!("error signing out: {err}");
        }
        self.user = None;
        self.initialized = false;
    }

    // ── Auth-state change handling ───────────────────────────────────────

    /// Long-lived subscription to remote auth-state changes. The UI event
    /// loop forwards received events into [`UserStore::handle_auth_event`].
    pub fn subscribe_auth_events(&self) -> broadcast::Receiver<AuthEvent> {
        self.client.subscribe_auth_events()
    }

    /// A sign-out from any source (another tab, token expiry) clears local
    /// state and resets `initialized` so the next guard check re-fetches.
    pub fn handle_auth_event(&mut self, event: AuthEvent) {
        if event == AuthEvent::SignedOut {
            self.user = None;
            self.initialized = false;
        }
    }
}
