//! Navigation guard evaluated before every route change.

use docuhub_stores::UserStore;

use crate::route::RouteMeta;

/// Outcome of a guard check.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Continue to the requested route.
    Proceed,
    /// Navigate to this path instead.
    Redirect(&'static str),
}

/// Decide whether the navigation may proceed.
///
/// The user store is initialized first so the auth check never races the
/// initial session fetch; the store makes repeat calls cheap.
pub async fn guard(users: &mut UserStore, meta: &RouteMeta) -> RouteDecision {
    users.initialize().await;

    let authenticated = users.is_authenticated();
    if meta.requires_auth && !authenticated {
        return RouteDecision::Redirect("/");
    }
    if meta.requires_guest && authenticated {
        return RouteDecision::Redirect("/dashboard");
    }
    RouteDecision::Proceed
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use docuhub_client::{InMemorySessionClient, Profile, Session};
    use docuhub_core::{UserId, UserRole};

    use super::*;
    use crate::route::resolve;

    fn signed_in_client() -> Arc<InMemorySessionClient> {
        let client = Arc::new(InMemorySessionClient::new());
        let user_id = UserId::new();
        client.insert_profile(Profile {
            id: user_id,
            first_name: "Jose".to_string(),
            last_name: "Cruz".to_string(),
            role: UserRole::Faculty,
            department: None,
            status: true,
            avatar: None,
        });
        client.set_session(Some(Session {
            user_id,
            email: "jose@example.edu".to_string(),
        }));
        client
    }

    #[tokio::test]
    async fn guest_hitting_protected_route_is_sent_to_login() {
        let mut users = UserStore::new(Arc::new(InMemorySessionClient::new()));
        let meta = resolve("/dashboard").unwrap().meta;

        assert_eq!(guard(&mut users, &meta).await, RouteDecision::Redirect("/"));
    }

    #[tokio::test]
    async fn guest_may_visit_login() {
        let mut users = UserStore::new(Arc::new(InMemorySessionClient::new()));
        let meta = resolve("/").unwrap().meta;

        assert_eq!(guard(&mut users, &meta).await, RouteDecision::Proceed);
    }

    #[tokio::test]
    async fn authenticated_user_hitting_login_is_sent_to_dashboard() {
        let mut users = UserStore::new(signed_in_client());
        let meta = resolve("/").unwrap().meta;

        assert_eq!(
            guard(&mut users, &meta).await,
            RouteDecision::Redirect("/dashboard")
        );
    }

    #[tokio::test]
    async fn authenticated_user_may_visit_dashboard() {
        let mut users = UserStore::new(signed_in_client());
        let meta = resolve("/dashboard").unwrap().meta;

        assert_eq!(guard(&mut users, &meta).await, RouteDecision::Proceed);
    }

    #[tokio::test]
    async fn repeated_guard_checks_fetch_the_session_once() {
        let client = signed_in_client();
        let mut users = UserStore::new(client.clone());
        let meta = resolve("/dashboard").unwrap().meta;

        for _ in 0..3 {
            assert_eq!(guard(&mut users, &meta).await, RouteDecision::Proceed);
        }

        assert_eq!(client.calls("current_session"), 1);
    }

    #[tokio::test]
    async fn sign_out_event_makes_the_next_check_refetch() {
        let client = signed_in_client();
        let mut users = UserStore::new(client.clone());
        let meta = resolve("/dashboard").unwrap().meta;

        assert_eq!(guard(&mut users, &meta).await, RouteDecision::Proceed);

        users.handle_auth_event(docuhub_client::AuthEvent::SignedOut);
        client.set_session(None);

        assert_eq!(guard(&mut users, &meta).await, RouteDecision::Redirect("/"));
        assert_eq!(client.calls("current_session"), 2);
    }
}
