//! Environment-sourced configuration.

use lambda_runtime::Error;
use std::env;

const DEFAULT_APPLICATION_TITLE: &str = "Default Title";
const DEFAULT_HEALTH_CHECK_PATH: &str = "/hc/";
const DEFAULT_API_HOMEPAGE_PATH: &str = "/v1/homepage";
const DEFAULT_MAX_AGE: &str = "300";
const DEFAULT_REALM: &str = "Please Authenticate";

/// Configuration loaded once at process start.
///
/// Immutable for the process lifetime. Handling logic receives it by
/// reference and never reads the process environment itself.
#[derive(Clone, Debug)]
pub struct Config {
    /// Page title and heading.
    pub application_title: String,
    /// Displayed environment label.
    pub environment: Option<String>,
    /// Commit hash reported by the health check.
    pub git_commit: Option<String>,
    /// Route that serves the health check.
    pub health_check_path: String,
    /// Route that serves the public API homepage.
    pub api_homepage_path: String,
    /// `Cache-Control` max-age in seconds for the HTML pages.
    pub max_age: u64,
    /// Basic authentication realm.
    pub realm: String,
    /// Region displayed in the API homepage title.
    pub region: Option<String>,
    /// Region override for the Secrets Manager client.
    pub secret_region: Option<String>,
    /// ARN of the secret that holds the expected credential pair.
    ///
    /// May be left unset; the health check and the API homepage do not
    /// need it. The authenticated homepage answers 500 without it.
    pub secret_arn: Option<String>,
    /// Version string reported by the health check.
    pub version: Option<String>,
}

impl Config {
    /// Reads the configuration from environment variables.
    ///
    /// - `APPLICATION_TITLE`: page title (default: "Default Title")
    /// - `ENVIRONMENT`: environment label
    /// - `GIT_COMMIT`: commit hash for the health check
    /// - `HEALTH_CHECK_PATH`: health check route (default: `/hc/`)
    /// - `API_HOMEPAGE_PATH`: API homepage route (default: `/v1/homepage`)
    /// - `MAX_AGE`: `Cache-Control` seconds (default: 300)
    /// - `REALM`: basic authentication realm (default: "Please Authenticate")
    /// - `REGION`: region label for the API homepage title
    /// - `SECRET_REGION`: region for the Secrets Manager client
    /// - `SECRET_ARN`: secret that holds the expected credential pair
    /// - `VERSION`: version string for the health check
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, Error> {
        let max_age = lookup("MAX_AGE")
            .unwrap_or_else(|| DEFAULT_MAX_AGE.to_string())
            .parse()
            .map_err(|_| "MAX_AGE env must be an integer or omitted")?;
        Ok(Self {
            application_title: lookup("APPLICATION_TITLE")
                .unwrap_or_else(|| DEFAULT_APPLICATION_TITLE.to_string()),
            environment: lookup("ENVIRONMENT"),
            git_commit: lookup("GIT_COMMIT"),
            health_check_path: lookup("HEALTH_CHECK_PATH")
                .unwrap_or_else(|| DEFAULT_HEALTH_CHECK_PATH.to_string()),
            api_homepage_path: lookup("API_HOMEPAGE_PATH")
                .unwrap_or_else(|| DEFAULT_API_HOMEPAGE_PATH.to_string()),
            max_age,
            realm: lookup("REALM").unwrap_or_else(|| DEFAULT_REALM.to_string()),
            region: lookup("REGION"),
            secret_region: lookup("SECRET_REGION"),
            secret_arn: lookup("SECRET_ARN"),
            version: lookup("VERSION"),
        })
    }
}
