//! Supabase Auth (GoTrue) identity provider.
//!
//! Sign-in uses the PKCE flow with a loopback redirect:
//!
//! 1. bind `127.0.0.1:<redirect_port>` and generate a [`PkcePair`]
//! 2. open `/auth/v1/authorize?provider=...&code_challenge=...` in the browser
//! 3. wait for `/callback?code=...` on the loopback listener
//! 4. exchange the code at `/auth/v1/token?grant_type=pkce`
//!
//! The session lives in memory only.

use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::RwLock;
use reqwest::{StatusCode, Url};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tracing::{info, warn};

use super::callback::{await_authorization_code, CALLBACK_PATH};
use super::{
    AuthChange, OAuthProvider, PkcePair, Session, SessionChannel, SessionEvent, SessionProvider,
    SessionSubscription, UserProfile,
};
use crate::config::AuthConfig;
use crate::error::{VintrackError, VintrackResult};

/// GoTrue client holding the current session in memory.
pub struct SupabaseAuth {
    http: reqwest::Client,
    base_url: Url,
    anon_key: String,
    redirect_port: u16,
    sign_in_timeout: Duration,
    current: RwLock<Option<Session>>,
    channel: SessionChannel,
}

#[derive(Debug, Serialize)]
struct PkceGrant<'a> {
    auth_code: &'a str,
    code_verifier: &'a str,
}

#[derive(Debug, Serialize)]
struct RefreshGrant<'a> {
    refresh_token: &'a str,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    refresh_token: Option<String>,
    expires_at: Option<i64>,
    expires_in: Option<i64>,
    user: GoTrueUser,
}

#[derive(Debug, Deserialize)]
struct GoTrueUser {
    id: String,
    email: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
}

#[derive(Debug, Default, Deserialize)]
struct UserMetadata {
    full_name: Option<String>,
    name: Option<String>,
    avatar_url: Option<String>,
}

impl From<GoTrueUser> for UserProfile {
    fn from(user: GoTrueUser) -> Self {
        UserProfile {
            id: user.id,
            email: user.email.filter(|e| !e.is_empty()),
            display_name: user.user_metadata.full_name.or(user.user_metadata.name),
            avatar_url: user.user_metadata.avatar_url,
        }
    }
}

impl TokenResponse {
    fn into_session(self, now: DateTime<Utc>) -> Session {
        let expires_at = match (self.expires_at, self.expires_in) {
            (Some(at), _) => Utc.timestamp_opt(at, 0).single(),
            (None, Some(secs)) => Some(now + chrono::Duration::seconds(secs)),
            (None, None) => None,
        };
        Session {
            access_token: self.access_token,
            refresh_token: self.refresh_token,
            expires_at,
            user: self.user.into(),
        }
    }
}

impl SupabaseAuth {
    /// Build a client from the `[auth]` config section.
    pub fn from_config(config: &AuthConfig) -> VintrackResult<Self> {
        let url = config
            .supabase_url
            .as_deref()
            .ok_or_else(|| VintrackError::Config("missing auth.supabase_url".to_string()))?;
        let anon_key = config
            .anon_key
            .clone()
            .ok_or_else(|| VintrackError::Config("missing auth.anon_key".to_string()))?;
        let base_url = Url::parse(url)
            .map_err(|e| VintrackError::Config(format!("invalid supabase_url {}: {}", url, e)))?;

        Ok(Self {
            http: reqwest::Client::new(),
            base_url,
            anon_key,
            redirect_port: config.redirect_port,
            sign_in_timeout: Duration::from_secs(config.sign_in_timeout_secs),
            current: RwLock::new(None),
            channel: SessionChannel::new(),
        })
    }

    /// Supabase project URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Redirect target registered with the identity service
    pub fn redirect_url(&self) -> String {
        format!("http://127.0.0.1:{}{}", self.redirect_port, CALLBACK_PATH)
    }

    /// URL opened in the browser to start signing in with `provider`
    pub fn authorize_url(&self, provider: OAuthProvider, pkce: &PkcePair) -> VintrackResult<Url> {
        let endpoint = self.endpoint("auth/v1/authorize")?;
        Url::parse_with_params(
            endpoint.as_str(),
            &[
                ("provider", provider.as_str()),
                ("redirect_to", self.redirect_url().as_str()),
                ("code_challenge", pkce.challenge.as_str()),
                ("code_challenge_method", "s256"),
            ],
        )
        .map_err(|e| VintrackError::Config(e.to_string()))
    }

    fn endpoint(&self, path: &str) -> VintrackResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| VintrackError::Config(format!("invalid endpoint {}: {}", path, e)))
    }

    fn replace_session(&self, change: AuthChange, session: Option<Session>) {
        *self.current.write() = session.clone();
        self.channel.publish(SessionEvent { change, session });
    }

    async fn exchange_code(&self, code: &str, pkce: &PkcePair) -> VintrackResult<Session> {
        let mut url = self.endpoint("auth/v1/token")?;
        url.set_query(Some("grant_type=pkce"));

        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&PkceGrant {
                auth_code: code,
                code_verifier: &pkce.verifier,
            })
            .send()
            .await?;

        Ok(parse_token_response(response).await?.into_session(Utc::now()))
    }

    async fn refresh(&self, refresh_token: &str) -> VintrackResult<Session> {
        let mut url = self.endpoint("auth/v1/token")?;
        url.set_query(Some("grant_type=refresh_token"));

        let response = self
            .http
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&RefreshGrant { refresh_token })
            .send()
            .await?;

        Ok(parse_token_response(response).await?.into_session(Utc::now()))
    }

    async fn fetch_user(&self, access_token: &str) -> VintrackResult<UserProfile> {
        let response = self
            .http
            .get(self.endpoint("auth/v1/user")?)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        Ok(response.json::<GoTrueUser>().await?.into())
    }
}

async fn parse_token_response(response: reqwest::Response) -> VintrackResult<TokenResponse> {
    if !response.status().is_success() {
        return Err(error_from_response(response).await);
    }
    Ok(response.json::<TokenResponse>().await?)
}

async fn error_from_response(response: reqwest::Response) -> VintrackError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    VintrackError::Auth(error_message(status, &body))
}

/// Pull the human-readable message out of a GoTrue error body.
fn error_message(status: StatusCode, body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let message = parsed.as_ref().and_then(|v| {
        ["error_description", "msg", "message", "error"]
            .iter()
            .find_map(|key| v.get(*key).and_then(|m| m.as_str()))
            .map(str::to_string)
    });
    match message {
        Some(message) => format!("{} ({})", message, status.as_u16()),
        None if body.trim().is_empty() => format!("identity service returned {}", status),
        None => format!("identity service returned {}: {}", status, body.trim()),
    }
}

#[async_trait]
impl SessionProvider for SupabaseAuth {
    async fn current_user(&self) -> VintrackResult<Option<Session>> {
        let Some(mut session) = self.current.read().clone() else {
            return Ok(None);
        };

        if session.is_expired(Utc::now()) {
            let Some(refresh_token) = session.refresh_token.clone() else {
                self.replace_session(AuthChange::SignedOut, None);
                return Ok(None);
            };
            match self.refresh(&refresh_token).await {
                Ok(refreshed) => {
                    info!("Access token refreshed");
                    self.replace_session(AuthChange::TokenRefreshed, Some(refreshed.clone()));
                    return Ok(Some(refreshed));
                }
                Err(e) => {
                    warn!("Token refresh failed: {}", e);
                    self.replace_session(AuthChange::SignedOut, None);
                    return Err(e);
                }
            }
        }

        let user = self.fetch_user(&session.access_token).await?;
        if user != session.user {
            session.user = user;
            self.replace_session(AuthChange::UserUpdated, Some(session.clone()));
        }
        Ok(Some(session))
    }

    fn on_session_change(&self) -> SessionSubscription {
        self.channel.subscribe()
    }

    async fn sign_in_with_provider(&self, provider: OAuthProvider) -> VintrackResult<()> {
        let listener = TcpListener::bind(("127.0.0.1", self.redirect_port)).await?;
        let pkce = PkcePair::generate();
        let url = self.authorize_url(provider, &pkce)?;

        info!(%provider, "Opening browser for sign-in");
        if let Err(e) = open::that(url.as_str()) {
            warn!("Could not open browser ({}), visit {} manually", e, url);
        }

        let code = tokio::time::timeout(self.sign_in_timeout, await_authorization_code(listener))
            .await
            .map_err(|_| VintrackError::SignInTimeout(self.sign_in_timeout.as_secs()))??;

        let session = self.exchange_code(&code, &pkce).await?;
        info!(user = %session.user.label(), "Signed in");
        self.replace_session(AuthChange::SignedIn, Some(session));
        Ok(())
    }

    async fn sign_out(&self) -> VintrackResult<()> {
        let token = self.current.read().as_ref().map(|s| s.access_token.clone());
        // The local session is dropped whatever the server says.
        self.replace_session(AuthChange::SignedOut, None);

        let Some(token) = token else {
            return Ok(());
        };
        let response = self
            .http
            .post(self.endpoint("auth/v1/logout")?)
            .header("apikey", &self.anon_key)
            .bearer_auth(token)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }
        info!("Signed out");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> SupabaseAuth {
        let config = AuthConfig {
            supabase_url: Some("https://abc.supabase.co".to_string()),
            anon_key: Some("anon".to_string()),
            redirect_port: 47615,
            ..AuthConfig::default()
        };
        SupabaseAuth::from_config(&config).unwrap()
    }

    #[test]
    fn test_from_config_requires_url_and_key() {
        let config = AuthConfig::default();
        assert!(matches!(
            SupabaseAuth::from_config(&config),
            Err(VintrackError::Config(_))
        ));

        let config = AuthConfig {
            supabase_url: Some("not a url".to_string()),
            anon_key: Some("anon".to_string()),
            ..AuthConfig::default()
        };
        assert!(matches!(
            SupabaseAuth::from_config(&config),
            Err(VintrackError::Config(_))
        ));
    }

    #[test]
    fn test_authorize_url() {
        let auth = auth();
        let pkce = PkcePair::from_verifier("verifier".to_string());
        let url = auth.authorize_url(OAuthProvider::Discord, &pkce).unwrap();

        assert_eq!(url.path(), "/auth/v1/authorize");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert!(pairs.contains(&("provider".to_string(), "discord".to_string())));
        assert!(pairs.contains(&(
            "redirect_to".to_string(),
            "http://127.0.0.1:47615/callback".to_string()
        )));
        assert!(pairs.contains(&("code_challenge".to_string(), pkce.challenge.clone())));
        assert!(pairs.contains(&("code_challenge_method".to_string(), "s256".to_string())));
    }

    #[test]
    fn test_token_response_into_session() {
        let body = r#"{
            "access_token": "at",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "rt",
            "user": {
                "id": "1b7c",
                "email": "greg@example.com",
                "user_metadata": {
                    "full_name": "Greg",
                    "avatar_url": "https://cdn.discordapp.com/avatars/1.png"
                }
            }
        }"#;
        let now = Utc::now();
        let session = serde_json::from_str::<TokenResponse>(body)
            .unwrap()
            .into_session(now);

        assert_eq!(session.access_token, "at");
        assert_eq!(session.refresh_token.as_deref(), Some("rt"));
        assert_eq!(session.expires_at, Some(now + chrono::Duration::seconds(3600)));
        assert_eq!(session.user.display_name.as_deref(), Some("Greg"));
        assert_eq!(session.user.label(), "Greg");
    }

    #[test]
    fn test_user_without_metadata() {
        let user: GoTrueUser = serde_json::from_str(r#"{"id": "x", "email": ""}"#).unwrap();
        let profile = UserProfile::from(user);
        assert!(profile.email.is_none());
        assert!(profile.display_name.is_none());
        assert_eq!(profile.label(), crate::session::FALLBACK_USER_LABEL);
    }

    #[test]
    fn test_error_message_extraction() {
        let msg = error_message(
            StatusCode::BAD_REQUEST,
            r#"{"error":"invalid_grant","error_description":"Invalid Refresh Token"}"#,
        );
        assert_eq!(msg, "Invalid Refresh Token (400)");

        let msg = error_message(StatusCode::UNAUTHORIZED, "");
        assert!(msg.contains("401"));
    }

    #[tokio::test]
    async fn test_signed_out_current_user_is_absent() {
        let auth = auth();
        assert!(auth.current_user().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_expired_session_without_refresh_token_signs_out() {
        let auth = auth();
        let mut sub = auth.on_session_change();
        *auth.current.write() = Some(Session {
            access_token: "stale".to_string(),
            refresh_token: None,
            expires_at: Some(Utc::now() - chrono::Duration::hours(1)),
            user: UserProfile {
                id: "1b7c".to_string(),
                email: None,
                display_name: Some("Greg".to_string()),
                avatar_url: None,
            },
        });

        assert!(auth.current_user().await.unwrap().is_none());
        assert!(auth.current.read().is_none());

        let event = sub.recv().await.unwrap();
        assert_eq!(event.change, AuthChange::SignedOut);
        assert!(event.session.is_none());
    }

    #[tokio::test]
    async fn test_sign_out_without_session_publishes_absent() {
        let auth = auth();
        let mut sub = auth.on_session_change();
        auth.sign_out().await.unwrap();
        let event = sub.recv().await.unwrap();
        assert_eq!(event.change, AuthChange::SignedOut);
    }
}
