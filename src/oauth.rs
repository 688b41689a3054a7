//! OAuth authorization redirect support.
//!
//! Builds the authorization-request URL for the platform's Twitter
//! integration and hands it to the system browser. Only the redirect leg
//! lives here; the code-for-token exchange belongs to the backend callback
//! endpoint and is out of scope.

use anyhow::{Context, Result, bail};
use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;
use tracing::{info, warn};
use url::Url;

/// Errors from assembling the authorization URL.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// The configured authorize endpoint did not parse as a URL.
    #[error("invalid authorize endpoint {endpoint:?}: {source}")]
    InvalidEndpoint {
        /// The endpoint string as configured.
        endpoint: String,
        /// Parse failure reported by the `url` crate.
        #[source]
        source: url::ParseError,
    },

    /// A required field was left empty in the config.
    #[error("oauth {field} is not configured")]
    MissingField {
        /// Name of the empty config field.
        field: &'static str,
    },
}

/// PKCE code-challenge derivation method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChallengeMethod {
    /// Send the challenge value as-is. Matches the legacy dashboard, but
    /// exposes the verifier in the authorization request itself.
    #[default]
    Plain,

    /// Send `BASE64URL(SHA-256(verifier))`, per RFC 7636.
    S256,
}

impl ChallengeMethod {
    /// Wire value for the `code_challenge_method` query parameter.
    #[must_use]
    pub const fn wire_name(self) -> &'static str {
        match self {
            Self::Plain => "plain",
            Self::S256 => "S256",
        }
    }
}

/// OAuth authorization settings.
///
/// The legacy dashboard compiled the client id and challenge into the page;
/// here they are injected configuration. The client id has no default and
/// must be supplied before the redirect can fire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OauthConfig {
    /// Authorization endpoint the browser is sent to.
    #[serde(default = "default_authorize_endpoint")]
    pub authorize_endpoint: String,

    /// OAuth client identifier issued by the platform.
    #[serde(default)]
    pub client_id: String,

    /// Callback address the authorization server redirects back to.
    #[serde(default = "default_redirect_uri")]
    pub redirect_uri: String,

    /// Requested permission scopes, joined with spaces on the wire.
    #[serde(default = "default_scopes")]
    pub scopes: Vec<String>,

    /// Opaque state token echoed back on the callback.
    #[serde(default = "default_state")]
    pub state: String,

    /// PKCE verifier the challenge is derived from.
    #[serde(default = "default_code_challenge")]
    pub code_challenge: String,

    /// How the challenge travels in the request.
    #[serde(default)]
    pub challenge_method: ChallengeMethod,
}

fn default_authorize_endpoint() -> String {
    "https://twitter.com/i/oauth2/authorize".to_string()
}

fn default_redirect_uri() -> String {
    "http://localhost:3000/api/oauth-twitter".to_string()
}

fn default_scopes() -> Vec<String> {
    ["tweet.read", "tweet.write", "users.read", "offline.access"]
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn default_state() -> String {
    "state".to_string()
}

fn default_code_challenge() -> String {
    "challenge".to_string()
}

impl Default for OauthConfig {
    fn default() -> Self {
        Self {
            authorize_endpoint: default_authorize_endpoint(),
            client_id: String::new(),
            redirect_uri: default_redirect_uri(),
            scopes: default_scopes(),
            state: default_state(),
            code_challenge: default_code_challenge(),
            challenge_method: ChallengeMethod::default(),
        }
    }
}

impl OauthConfig {
    /// Assemble the authorization-request URL.
    ///
    /// Deterministic: a fixed configuration produces byte-identical URLs
    /// across calls. Nothing here is randomized per request.
    ///
    /// # Errors
    ///
    /// Returns an error if the client id or redirect URI is empty, or if
    /// the authorize endpoint does not parse as a URL.
    pub fn authorization_url(&self) -> Result<Url, AuthError> {
        if self.client_id.is_empty() {
            return Err(AuthError::MissingField { field: "client_id" });
        }
        if self.redirect_uri.is_empty() {
            return Err(AuthError::MissingField {
                field: "redirect_uri",
            });
        }

        let mut url =
            Url::parse(&self.authorize_endpoint).map_err(|source| AuthError::InvalidEndpoint {
                endpoint: self.authorize_endpoint.clone(),
                source,
            })?;

        if self.challenge_method == ChallengeMethod::Plain {
            warn!(
                "oauth code_challenge_method is \"plain\"; the verifier travels unhashed in the authorization request"
            );
        }

        let challenge = match self.challenge_method {
            ChallengeMethod::Plain => self.code_challenge.clone(),
            ChallengeMethod::S256 => {
                URL_SAFE_NO_PAD.encode(Sha256::digest(self.code_challenge.as_bytes()))
            }
        };

        let query = format!(
            "response_type=code&client_id={}&redirect_uri={}&scope={}&state={}&code_challenge={}&code_challenge_method={}",
            encode(&self.client_id),
            encode(&self.redirect_uri),
            encode(&self.scopes.join(" ")),
            encode(&self.state),
            encode(&challenge),
            self.challenge_method.wire_name(),
        );
        url.set_query(Some(&query));

        Ok(url)
    }
}

/// Query-component encoding that leaves RFC 3986 unreserved characters alone,
/// so `tweet.read` stays readable while spaces become `%20`.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_COMPONENT).to_string()
}

/// Hand the authorization URL to the system browser.
///
/// One-way: once the browser takes over there is no result to report back
/// here. Success or failure of the authorization exchange is entirely the
/// concern of the redirect target and the callback endpoint.
///
/// # Errors
///
/// Returns an error if the platform opener cannot be launched or exits
/// with a failure status.
pub fn open_in_browser(url: &Url) -> Result<()> {
    let opener = platform_opener();
    info!(%url, opener, "Opening authorization URL");

    let output = std::process::Command::new(opener)
        .arg(url.as_str())
        .output()
        .with_context(|| format!("Failed to launch {opener}"))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        bail!("{opener} exited with {}: {}", output.status, stderr.trim());
    }

    Ok(())
}

const fn platform_opener() -> &'static str {
    if cfg!(target_os = "macos") {
        "open"
    } else {
        "xdg-open"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn legacy_config() -> OauthConfig {
        OauthConfig {
            client_id: "VEpWdkJqUllDNG9sRlNyaVdneWc6MTpjaQ".to_string(),
            ..OauthConfig::default()
        }
    }

    #[test]
    fn test_authorization_url_matches_legacy_dashboard() -> Result<()> {
        let url = legacy_config().authorization_url()?;
        assert_eq!(
            url.as_str(),
            "https://twitter.com/i/oauth2/authorize\
             ?response_type=code\
             &client_id=VEpWdkJqUllDNG9sRlNyaVdneWc6MTpjaQ\
             &redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Fapi%2Foauth-twitter\
             &scope=tweet.read%20tweet.write%20users.read%20offline.access\
             &state=state\
             &code_challenge=challenge\
             &code_challenge_method=plain"
        );
        Ok(())
    }

    #[test]
    fn test_authorization_url_is_deterministic() -> Result<()> {
        let config = legacy_config();
        let first = config.authorization_url()?;
        let second = config.authorization_url()?;
        assert_eq!(first.as_str(), second.as_str());
        Ok(())
    }

    #[test]
    fn test_s256_challenge_uses_rfc_7636_derivation() -> Result<()> {
        // Test vector from RFC 7636 appendix B.
        let config = OauthConfig {
            code_challenge: "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk".to_string(),
            challenge_method: ChallengeMethod::S256,
            ..legacy_config()
        };

        let url = config.authorization_url()?;
        let challenge = url
            .query_pairs()
            .find(|(key, _)| key == "code_challenge")
            .map(|(_, value)| value.into_owned());
        assert_eq!(
            challenge.as_deref(),
            Some("E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM")
        );

        let method = url
            .query_pairs()
            .find(|(key, _)| key == "code_challenge_method")
            .map(|(_, value)| value.into_owned());
        assert_eq!(method.as_deref(), Some("S256"));
        Ok(())
    }

    #[test]
    fn test_missing_client_id_is_rejected() {
        let config = OauthConfig::default();
        assert_eq!(
            config.authorization_url(),
            Err(AuthError::MissingField { field: "client_id" })
        );
    }

    #[test]
    fn test_missing_redirect_uri_is_rejected() {
        let config = OauthConfig {
            redirect_uri: String::new(),
            ..legacy_config()
        };
        assert_eq!(
            config.authorization_url(),
            Err(AuthError::MissingField {
                field: "redirect_uri"
            })
        );
    }

    #[test]
    fn test_invalid_endpoint_is_rejected() {
        let config = OauthConfig {
            authorize_endpoint: "not a url".to_string(),
            ..legacy_config()
        };
        assert!(matches!(
            config.authorization_url(),
            Err(AuthError::InvalidEndpoint { .. })
        ));
    }

    #[test]
    fn test_scopes_join_with_encoded_spaces() -> Result<()> {
        let config = OauthConfig {
            scopes: vec!["a.b".to_string(), "c_d".to_string()],
            ..legacy_config()
        };
        let url = config.authorization_url()?;
        assert!(url.as_str().contains("&scope=a.b%20c_d&"));
        Ok(())
    }

    #[test]
    fn test_challenge_method_wire_names() {
        assert_eq!(ChallengeMethod::Plain.wire_name(), "plain");
        assert_eq!(ChallengeMethod::S256.wire_name(), "S256");
    }
}
