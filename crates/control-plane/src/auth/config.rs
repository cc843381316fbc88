// Authentication configuration loaded from environment variables.
// Decision: AUTH_ prefix for all auth config
// Decision: Default to "full" mode; "none" is an explicit opt-in for local development

use std::time::Duration;

/// Default token lifetime: 30 days
pub const DEFAULT_TOKEN_LIFETIME: Duration = Duration::from_secs(30 * 24 * 60 * 60);

/// Authentication mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthMode {
    /// No authentication required; every request runs as the anonymous caller
    None,
    /// Bearer tokens issued by register/login
    #[default]
    Full,
}

impl AuthMode {
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "none" | "off" | "disabled" => AuthMode::None,
            _ => AuthMode::Full,
        }
    }
}

/// JWT configuration
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// Secret key for signing JWTs
    pub secret: String,
    /// Token lifetime
    pub token_lifetime: Duration,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::new(),
            token_lifetime: DEFAULT_TOKEN_LIFETIME,
        }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default)]
pub struct AuthConfig {
    pub mode: AuthMode,
    pub jwt: JwtConfig,
    /// Whether to disable registration
    pub disable_signup: bool,
}

impl AuthConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let mode = std::env::var("AUTH_MODE")
            .map(|s| AuthMode::parse(&s))
            .unwrap_or_default();

        let secret = std::env::var("AUTH_JWT_SECRET")
            .ok()
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| {
                if mode == AuthMode::None {
                    random_secret()
                } else {
                    tracing::warn!("AUTH_JWT_SECRET not set, using insecure default");
                    "insecure-dev-secret-change-me".to_string()
                }
            });

        let token_lifetime = std::env::var("AUTH_JWT_TOKEN_LIFETIME")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TOKEN_LIFETIME);

        let disable_signup = std::env::var("AUTH_DISABLE_SIGNUP")
            .map(|s| s.to_lowercase() == "true" || s == "1")
            .unwrap_or(false);

        Self {
            mode,
            jwt: JwtConfig {
                secret,
                token_lifetime,
            },
            disable_signup,
        }
    }

    /// Config for tests and tools: full mode with a fresh random secret
    pub fn with_random_secret() -> Self {
        Self {
            mode: AuthMode::Full,
            jwt: JwtConfig {
                secret: random_secret(),
                ..Default::default()
            },
            disable_signup: false,
        }
    }

    /// Check if bearer tokens are required
    pub fn is_enabled(&self) -> bool {
        self.mode != AuthMode::None
    }

    pub fn signup_enabled(&self) -> bool {
        self.is_enabled() && !self.disable_signup
    }
}

fn random_secret() -> String {
    use rand::Rng;
    let bytes: [u8; 32] = rand::thread_rng().gen();
    hex::encode(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_mode_parsing() {
        assert_eq!(AuthMode::parse("none"), AuthMode::None);
        assert_eq!(AuthMode::parse("NONE"), AuthMode::None);
        assert_eq!(AuthMode::parse("full"), AuthMode::Full);
        assert_eq!(AuthMode::parse(" Full "), AuthMode::Full);
        // Unknown values fail closed
        assert_eq!(AuthMode::parse("whatever"), AuthMode::Full);
    }

    #[test]
    fn test_default_config() {
        let config = AuthConfig::default();
        assert_eq!(config.mode, AuthMode::Full);
        assert!(config.is_enabled());
        assert!(config.signup_enabled());
        assert_eq!(config.jwt.token_lifetime, DEFAULT_TOKEN_LIFETIME);
    }

    #[test]
    fn test_signup_disabled() {
        let config = AuthConfig {
            disable_signup: true,
            ..Default::default()
        };
        assert!(!config.signup_enabled());

        let none = AuthConfig {
            mode: AuthMode::None,
            ..Default::default()
        };
        assert!(!none.signup_enabled());
    }

    #[test]
    fn test_random_secret() {
        let a = AuthConfig::with_random_secret();
        let b = AuthConfig::with_random_secret();
        assert_eq!(a.jwt.secret.len(), 64);
        assert_ne!(a.jwt.secret, b.jwt.secret);
    }
}
