//! REST client for the hosted auth/database backend.
//!
//! Browser (`web`): real HTTP calls via `gloo-net` against the GoTrue auth
//! endpoints and the PostgREST row API. Native: stubs returning
//! [`AuthError::Unavailable`] so the crate unit-tests without a browser.
//!
//! ERROR HANDLING
//! ==============
//! Credential errors carry the backend's message verbatim for display;
//! profile-fetch errors are non-fatal to the session; nothing here retries.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use thiserror::Error;

use super::types::{AuthUser, Class, NewAccount, NewProfile, Profile, School, Session, UserRole};

/// Failures surfaced by the backend client.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Sign-in/sign-up rejection; the message is shown to the user as-is.
    #[error("{0}")]
    Credentials(String),
    #[error("network error: {0}")]
    Network(String),
    /// Profile row fetch failed; the session survives without a profile.
    #[error("profile fetch failed: {0}")]
    Profile(String),
    /// Profile row insert failed after the auth account was created. The
    /// account exists without a profile; surfaced, never auto-repaired.
    #[error("profile insert failed: {0}")]
    ProfileInsert(String),
    #[error("backend unavailable outside the browser")]
    Unavailable,
}

/// Backend endpoint and publishable key, fixed at compile time with
/// development defaults.
#[derive(Clone, Copy, Debug)]
pub struct BackendConfig {
    pub base_url: &'static str,
    pub api_key: &'static str,
}

impl BackendConfig {
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            base_url: option_env!("NAWE_BACKEND_URL").unwrap_or("http://127.0.0.1:54321"),
            api_key: option_env!("NAWE_BACKEND_ANON_KEY").unwrap_or("dev-anon-key"),
        }
    }
}

// =============================================================================
// ENDPOINTS
// =============================================================================

#[cfg(any(test, feature = "web"))]
fn token_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/token?grant_type=password")
}

#[cfg(any(test, feature = "web"))]
fn signup_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/signup")
}

#[cfg(any(test, feature = "web"))]
fn logout_endpoint(base: &str) -> String {
    format!("{base}/auth/v1/logout")
}

#[cfg(any(test, feature = "web"))]
fn profile_endpoint(base: &str, user_id: &str) -> String {
    format!("{base}/rest/v1/profiles?id=eq.{user_id}&select=*")
}

#[cfg(any(test, feature = "web"))]
fn profiles_endpoint(base: &str) -> String {
    format!("{base}/rest/v1/profiles")
}

#[cfg(any(test, feature = "web"))]
fn table_endpoint(base: &str, table: &str, select: &str, limit: usize) -> String {
    format!("{base}/rest/v1/{table}?select={select}&limit={limit}")
}

/// Pull a displayable message out of a GoTrue error body. The field name
/// varies by endpoint (`error_description` on token, `msg` on signup).
#[cfg(any(test, feature = "web"))]
fn credentials_message(body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["error_description", "msg", "message"]
                .iter()
                .find_map(|key| value.get(key).and_then(|m| m.as_str()).map(str::to_owned))
        })
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| "authentication failed".to_owned())
}

/// Signup responses carry the user either at the root or under `user`,
/// depending on whether email confirmation is enabled.
#[cfg(any(test, feature = "web"))]
fn parse_signup_user(value: &serde_json::Value) -> Option<AuthUser> {
    let user = value.get("user").unwrap_or(value);
    Some(AuthUser {
        id: user.get("id")?.as_str()?.to_owned(),
        email: user.get("email")?.as_str()?.to_owned(),
    })
}

// =============================================================================
// AUTH CALLS
// =============================================================================

#[cfg(feature = "web")]
fn net_err(e: gloo_net::Error) -> AuthError {
    AuthError::Network(e.to_string())
}

/// Bearer token of the persisted session, if one exists. PostgREST row
/// policy decides row visibility from it.
#[cfg(feature = "web")]
fn bearer() -> Option<String> {
    crate::util::session_storage::load().map(|s| format!("Bearer {}", s.access_token))
}

#[cfg(feature = "web")]
fn with_auth(
    request: gloo_net::http::RequestBuilder,
    config: &BackendConfig,
) -> gloo_net::http::RequestBuilder {
    let request = request.header("apikey", config.api_key);
    match bearer() {
        Some(token) => request.header("Authorization", &token),
        None => request,
    }
}

/// Exchange credentials for a session.
///
/// # Errors
///
/// [`AuthError::Credentials`] with the backend's message on rejection.
pub async fn sign_in_with_password(email: &str, password: &str) -> Result<Session, AuthError> {
    #[cfg(feature = "web")]
    {
        let config = BackendConfig::from_env();
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post(&token_endpoint(config.base_url))
            .header("apikey", config.api_key)
            .json(&payload)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Credentials(credentials_message(&body)));
        }
        resp.json::<Session>().await.map_err(net_err)
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (email, password);
        Err(AuthError::Unavailable)
    }
}

/// Create an auth account. The returned user has no profile row yet; the
/// caller inserts one via [`insert_profile`].
///
/// # Errors
///
/// [`AuthError::Credentials`] with the backend's message on rejection.
pub async fn sign_up(
    email: &str,
    password: &str,
    account: &NewAccount,
) -> Result<AuthUser, AuthError> {
    #[cfg(feature = "web")]
    {
        let config = BackendConfig::from_env();
        let payload = serde_json::json!({
            "email": email,
            "password": password,
            "data": {
                "first_name": account.first_name,
                "last_name": account.last_name,
                "school_id": account.school_id,
                "role": account.role,
            },
        });
        let resp = gloo_net::http::Request::post(&signup_endpoint(config.base_url))
            .header("apikey", config.api_key)
            .json(&payload)
            .map_err(net_err)?
            .send()
            .await
            .map_err(net_err)?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::Credentials(credentials_message(&body)));
        }
        let body = resp.json::<serde_json::Value>().await.map_err(net_err)?;
        parse_signup_user(&body)
            .ok_or_else(|| AuthError::Network("signup response carried no user".to_owned()))
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (email, password, account);
        Err(AuthError::Unavailable)
    }
}

/// Invalidate the session server-side. Best effort; the local state is
/// cleared regardless of the outcome.
pub async fn sign_out(access_token: &str) {
    #[cfg(feature = "web")]
    {
        let config = BackendConfig::from_env();
        let _ = gloo_net::http::Request::post(&logout_endpoint(config.base_url))
            .header("apikey", config.api_key)
            .header("Authorization", &format!("Bearer {access_token}"))
            .send()
            .await;
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = access_token;
    }
}

// =============================================================================
// ROW CALLS
// =============================================================================

/// Single-row profile lookup by user id.
///
/// # Errors
///
/// [`AuthError::Profile`] when the row is missing or unreadable.
pub async fn fetch_profile(user_id: &str) -> Result<Profile, AuthError> {
    #[cfg(feature = "web")]
    {
        let config = BackendConfig::from_env();
        let request = gloo_net::http::Request::get(&profile_endpoint(config.base_url, user_id))
            // Single-object response instead of a one-element array.
            .header("Accept", "application/vnd.pgrst.object+json");
        let resp = with_auth(request, &config).send().await.map_err(net_err)?;
        if !resp.ok() {
            return Err(AuthError::Profile(format!("status {}", resp.status())));
        }
        resp.json::<Profile>()
            .await
            .map_err(|e| AuthError::Profile(e.to_string()))
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = user_id;
        Err(AuthError::Unavailable)
    }
}

/// Insert the profile row for a freshly created account.
///
/// # Errors
///
/// [`AuthError::ProfileInsert`] on any failure; the auth account already
/// exists at that point.
pub async fn insert_profile(profile: &NewProfile) -> Result<(), AuthError> {
    #[cfg(feature = "web")]
    {
        let config = BackendConfig::from_env();
        let request = gloo_net::http::Request::post(&profiles_endpoint(config.base_url))
            .header("Prefer", "return=minimal");
        let resp = with_auth(request, &config)
            .json(profile)
            .map_err(|e| AuthError::ProfileInsert(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::ProfileInsert(e.to_string()))?;
        if !resp.ok() {
            let body = resp.text().await.unwrap_or_default();
            return Err(AuthError::ProfileInsert(credentials_message(&body)));
        }
        Ok(())
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = profile;
        Err(AuthError::Unavailable)
    }
}

// =============================================================================
// HARNESS PROBES
// =============================================================================

/// Limited select against the `schools` table.
///
/// # Errors
///
/// [`AuthError::Network`] when the backend is unreachable or rejects the
/// query.
pub async fn fetch_schools(limit: usize) -> Result<Vec<School>, AuthError> {
    #[cfg(feature = "web")]
    {
        fetch_rows::<School>("schools", "*", limit).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = limit;
        Err(AuthError::Unavailable)
    }
}

/// Limited select against the `classes` table.
///
/// # Errors
///
/// Same as [`fetch_schools`].
pub async fn fetch_classes(limit: usize) -> Result<Vec<Class>, AuthError> {
    #[cfg(feature = "web")]
    {
        fetch_rows::<Class>("classes", "*", limit).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = limit;
        Err(AuthError::Unavailable)
    }
}

/// Roles of the profiles visible under the current row policy.
///
/// # Errors
///
/// Same as [`fetch_schools`].
pub async fn fetch_profile_roles(limit: usize) -> Result<Vec<UserRole>, AuthError> {
    #[cfg(feature = "web")]
    {
        #[derive(serde::Deserialize)]
        struct RoleRow {
            role: UserRole,
        }
        let rows = fetch_rows::<RoleRow>("profiles", "role", limit).await?;
        Ok(rows.into_iter().map(|row| row.role).collect())
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = limit;
        Err(AuthError::Unavailable)
    }
}

/// Classes joined to their school through the foreign key. PostgREST
/// rejects the embed when the relationship is broken, so a successful
/// response is the integrity check.
///
/// # Errors
///
/// Same as [`fetch_schools`].
pub async fn fetch_class_school_links(limit: usize) -> Result<usize, AuthError> {
    #[cfg(feature = "web")]
    {
        let rows =
            fetch_rows::<serde_json::Value>("classes", "id,name,school_id,schools!inner(name)", limit)
                .await?;
        Ok(rows.len())
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = limit;
        Err(AuthError::Unavailable)
    }
}

#[cfg(feature = "web")]
async fn fetch_rows<T: serde::de::DeserializeOwned>(
    table: &str,
    select: &str,
    limit: usize,
) -> Result<Vec<T>, AuthError> {
    let config = BackendConfig::from_env();
    let request =
        gloo_net::http::Request::get(&table_endpoint(config.base_url, table, select, limit));
    let resp = with_auth(request, &config).send().await.map_err(net_err)?;
    if !resp.ok() {
        return Err(AuthError::Network(format!("{table} query failed: status {}", resp.status())));
    }
    resp.json::<Vec<T>>().await.map_err(net_err)
}
