//! Reusable UI components.
//!
//! Components are small and prop-driven; pages own orchestration and pass
//! data down.

pub mod logo;
pub mod role_badge;
pub mod stat_card;
