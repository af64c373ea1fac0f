//! Backend client: wire types, REST calls, and the session synchronizer.
//!
//! The hosted backend is consumed as a black box — auth endpoints issue and
//! invalidate sessions, the row API serves tenant-scoped records. Nothing in
//! this module owns storage or policy; row-level security lives server-side.

pub mod api;
pub mod session_sync;
pub mod types;
