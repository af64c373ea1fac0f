//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by domain (`session`, `roles`, `checks`) so individual
//! pages can depend on small focused models. Each model is a plain struct
//! mutated only through its methods; the reactive wrapper is an `RwSignal`
//! provided via context in `app`.

pub mod checks;
pub mod roles;
pub mod session;
