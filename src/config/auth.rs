//! Authentication configuration

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use super::error::ValidationError;
use super::server::Environment;

/// Shortest signing secret accepted in production, in bytes.
pub const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Bearer token settings (HS256 JWT)
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// Expected `iss` claim
    pub issuer: String,

    /// Expected `aud` claim
    #[serde(default = "default_audience")]
    pub audience: String,

    /// Shared signing secret
    pub jwt_secret: SecretString,

    /// Tolerated clock skew on `exp`, in seconds
    #[serde(default = "default_leeway")]
    pub leeway_secs: u64,
}

impl AuthConfig {
    pub fn new(issuer: impl Into<String>, jwt_secret: impl Into<String>) -> Self {
        Self {
            issuer: issuer.into(),
            audience: default_audience(),
            jwt_secret: SecretString::new(jwt_secret.into()),
            leeway_secs: default_leeway(),
        }
    }

    /// Validate authentication configuration
    ///
    /// Production additionally requires an HTTPS issuer and a signing secret
    /// of at least [`MIN_PRODUCTION_SECRET_LEN`] bytes.
    pub fn validate(&self, environment: &Environment) -> Result<(), ValidationError> {
        if self.issuer.trim().is_empty() {
            return Err(ValidationError::MissingRequired("OFFERTER__AUTH__ISSUER"));
        }
        if self.audience.trim().is_empty() {
            return Err(ValidationError::MissingRequired("OFFERTER__AUTH__AUDIENCE"));
        }
        if self.jwt_secret.expose_secret().is_empty() {
            return Err(ValidationError::MissingRequired("OFFERTER__AUTH__JWT_SECRET"));
        }

        if *environment == Environment::Production {
            if !self.issuer.starts_with("https://") {
                return Err(ValidationError::IssuerMustBeHttps);
            }
            if self.jwt_secret.expose_secret().len() < MIN_PRODUCTION_SECRET_LEN {
                return Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN));
            }
        }

        Ok(())
    }
}

fn default_audience() -> String {
    "offerter-api".to_string()
}

fn default_leeway() -> u64 {
    30
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONG_SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn new_uses_default_audience_and_leeway() {
        let config = AuthConfig::new("http://localhost:9000", "dev");
        assert_eq!(config.audience, "offerter-api");
        assert_eq!(config.leeway_secs, 30);
        assert!(config.validate(&Environment::Development).is_ok());
    }

    #[test]
    fn missing_issuer_is_rejected() {
        let config = AuthConfig::new("", LONG_SECRET);
        assert_eq!(
            config.validate(&Environment::Development),
            Err(ValidationError::MissingRequired("OFFERTER__AUTH__ISSUER"))
        );
    }

    #[test]
    fn empty_secret_is_rejected() {
        let config = AuthConfig::new("https://id.offerter.se", "");
        assert!(config.validate(&Environment::Development).is_err());
    }

    #[test]
    fn production_requires_https_issuer() {
        let config = AuthConfig::new("http://id.offerter.se", LONG_SECRET);
        assert!(config.validate(&Environment::Staging).is_ok());
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::IssuerMustBeHttps)
        );
    }

    #[test]
    fn production_requires_long_secret() {
        let config = AuthConfig::new("https://id.offerter.se", "short");
        assert_eq!(
            config.validate(&Environment::Production),
            Err(ValidationError::JwtSecretTooShort(MIN_PRODUCTION_SECRET_LEN))
        );

        let config = AuthConfig::new("https://id.offerter.se", LONG_SECRET);
        assert!(config.validate(&Environment::Production).is_ok());
    }

    #[test]
    fn debug_output_hides_the_secret() {
        let rendered = format!("{:?}", AuthConfig::new("https://id.offerter.se", LONG_SECRET));
        assert!(!rendered.contains(LONG_SECRET));
    }
}
