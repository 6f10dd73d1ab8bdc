//! Static route table.

/// Access requirements attached to a route.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub struct RouteMeta {
    /// Only reachable with an authenticated session.
    pub requires_auth: bool,
    /// Only reachable without one (the login screen).
    pub requires_guest: bool,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Route {
    pub path: &'static str,
    pub name: &'static str,
    pub meta: RouteMeta,
}

/// Every navigable route, in declaration order.
pub const ROUTES: &[Route] = &[
    Route {
        path: "/",
        name: "login",
        meta: RouteMeta {
            requires_auth: false,
            requires_guest: true,
        },
    },
    Route {
        path: "/dashboard",
        name: "dashboard",
        meta: RouteMeta {
            requires_auth: true,
            requires_guest: false,
        },
    },
];

/// Look a route up by path.
pub fn resolve(path: &str) -> Option<&'static Route> {
    ROUTES.iter().find(|r| r.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_finds_known_paths() {
        assert_eq!(resolve("/").unwrap().name, "login");
        assert_eq!(resolve("/dashboard").unwrap().name, "dashboard");
        assert!(resolve("/missing").is_none());
    }

    #[test]
    fn no_route_is_both_guest_and_auth_only() {
        for route in ROUTES {
            assert!(!(route.meta.requires_auth && route.meta.requires_guest));
        }
    }
}
