//! Configuration for gofreta-seed
//!
//! CLI arguments and environment variable handling using clap.

use clap::Parser;

/// gofreta-seed - database seeding tool for the Gofreta CMS
///
/// Inserts the default administrator account and the default language record
/// into a freshly provisioned MongoDB instance. Safe to re-run: collections
/// that already contain a document are left untouched.
#[derive(Parser, Debug, Clone)]
#[command(name = "gofreta-seed")]
#[command(about = "Seed a Gofreta MongoDB instance with the default admin account and language")]
pub struct Args {
    /// MongoDB connection URI
    #[arg(long, env = "MONGODB_URI", default_value = "mongodb://localhost:27017")]
    pub mongodb_uri: String,

    /// MongoDB database name
    #[arg(long, env = "MONGODB_DB", default_value = "gofreta")]
    pub mongodb_db: String,

    /// Username for the seeded administrator account
    #[arg(long, env = "ADMIN_USERNAME", default_value = "admin")]
    pub admin_username: String,

    /// Email for the seeded administrator account
    #[arg(long, env = "ADMIN_EMAIL", default_value = "admin@example.com")]
    pub admin_email: String,

    /// Password for the seeded administrator account (hashed with bcrypt).
    /// When unset, the stock hash for "123456" is used.
    #[arg(long, env = "ADMIN_PASSWORD")]
    pub admin_password: Option<String>,

    /// Title of the seeded default language
    #[arg(long, env = "LANGUAGE_TITLE", default_value = "English")]
    pub language_title: String,

    /// Locale code of the seeded default language
    #[arg(long, env = "LANGUAGE_LOCALE", default_value = "en")]
    pub language_locale: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Validate configuration before touching the database
    pub fn validate(&self) -> Result<(), String> {
        if self.admin_username.trim().is_empty() {
            return Err("ADMIN_USERNAME must not be empty".to_string());
        }

        if !is_plausible_email(&self.admin_email) {
            return Err(format!(
                "ADMIN_EMAIL '{}' is not a valid email address",
                self.admin_email
            ));
        }

        if let Some(ref password) = self.admin_password {
            if password.is_empty() {
                return Err("ADMIN_PASSWORD must not be empty when set".to_string());
            }
        }

        if self.language_title.trim().is_empty() {
            return Err("LANGUAGE_TITLE must not be empty".to_string());
        }

        // Locale must be word characters only, matching the CMS validator
        if self.language_locale.is_empty()
            || !self
                .language_locale
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            return Err(format!(
                "LANGUAGE_LOCALE '{}' is not a valid locale code",
                self.language_locale
            ));
        }

        Ok(())
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty() && domain.contains('.') && !domain.starts_with('.')
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["gofreta-seed"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_are_valid() {
        let args = parse(&[]);
        assert!(args.validate().is_ok());
        assert_eq!(args.admin_username, "admin");
        assert_eq!(args.language_locale, "en");
    }

    #[test]
    fn test_rejects_empty_username() {
        let args = parse(&["--admin-username", "  "]);
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_rejects_malformed_email() {
        for email in ["not-an-email", "@example.com", "admin@", "admin@.com"] {
            let args = parse(&["--admin-email", email]);
            assert!(args.validate().is_err(), "accepted {email}");
        }
    }

    #[test]
    fn test_rejects_malformed_locale() {
        for locale in ["", "en-US", "en us", "en!"] {
            let args = parse(&["--language-locale", locale]);
            assert!(args.validate().is_err(), "accepted {locale}");
        }
    }

    #[test]
    fn test_accepts_underscore_locale() {
        let args = parse(&["--language-locale", "en_US"]);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_rejects_empty_password_override() {
        let args = parse(&["--admin-password", ""]);
        assert!(args.validate().is_err());
    }
}
