//! Role badge shown next to user names.

use leptos::prelude::*;

use crate::net::types::UserRole;

/// Pill badge with the role's display label.
#[component]
pub fn RoleBadge(role: UserRole) -> impl IntoView {
    view! {
        <span class=format!("role-badge role-badge--{}", role.as_str())>
            {role.label()}
        </span>
    }
}
