//! `docuhub-client` — the session client boundary.
//!
//! Everything the application knows about the hosted backend goes through the
//! [`SessionClient`] trait: auth session retrieval, sign-out, profile and
//! document queries, notification mutations, file storage downloads, and the
//! realtime subscriptions. The trait is the seam that stores are built
//! against; production wires a real transport behind it, tests and local
//! development use [`InMemorySessionClient`].

pub mod client;
pub mod in_memory;
pub mod session;

pub use client::{
    BackendError, BackendResult, DocumentRecord, Profile, ProfileChanges, SessionClient,
    UploaderName,
};
pub use in_memory::InMemorySessionClient;
pub use session::{AuthEvent, Session};
