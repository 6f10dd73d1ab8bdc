//! Navigation guard and route table.
//!
//! Re-exports: [`Route`], [`RouteMeta`], [`RouteDecision`], [`guard`],
//! [`resolve`], [`ROUTES`].

pub mod guard;
pub mod route;

pub use guard::{RouteDecision, guard};
pub use route::{ROUTES, Route, RouteMeta, resolve};
