//! Homepage dispatcher.
//!
//! This application is intended to run as an AWS Lambda function behind an
//! API Gateway or an Application Load Balancer.
//!
//! You may configure the following environment variables:
//! - `APPLICATION_TITLE`: page title and heading (default: "Default Title")
//! - `ENVIRONMENT`: environment label shown on the pages
//! - `GIT_COMMIT`: commit hash reported by the health check
//! - `HEALTH_CHECK_PATH`: health check route (default: `/hc/`)
//! - `API_HOMEPAGE_PATH`: public homepage route (default: `/v1/homepage`)
//! - `MAX_AGE`: `Cache-Control` max-age in seconds (default: 300)
//! - `REALM`: basic authentication realm (default: "Please Authenticate")
//! - `REGION`: region label shown in the API homepage title
//! - `SECRET_REGION`: region for the Secrets Manager client
//! - `SECRET_ARN`: secret that holds the expected credential pair as
//!   `{"name": ..., "pass": ...}`
//! - `VERSION`: version string reported by the health check
//!
//! ## Endpoints
//!
//! ### `GET ${HEALTH_CHECK_PATH}` (or the literal `/hc`)
//!
//! Returns a JSON document with the configured homepage path, environment,
//! commit, and version. Never touches the secret store.
//!
//! ### `GET ${API_HOMEPAGE_PATH}`
//!
//! Returns the public HTML homepage.
//!
//! ### Any other path
//!
//! Returns the HTML homepage gated by basic authentication. The expected
//! credential pair is fetched from Secrets Manager on every request; a
//! missing or mismatched credential yields 401 and a secret store failure
//! yields 500.

use lambda_http::{
    Body,
    Error,
    Request,
    RequestExt as _,
    Response,
    run,
    service_fn,
};
use std::sync::Arc;
use tracing::{error, info, warn};

use homepage::basic_auth;
use homepage::config::Config;
use homepage::pages;
use homepage::secrets::load_expected_credentials;

// Served regardless of the configured health check route.
const FALLBACK_HEALTH_CHECK_PATH: &str = "/hc";

// State shared among Lambda invocations.
#[cfg_attr(test, derive(derive_builder::Builder))]
#[cfg_attr(test, builder(setter(into), pattern = "owned"))]
struct SharedState {
    secrets: aws_sdk_secretsmanager::Client,
    #[cfg_attr(test, builder(default = "self::tests::test_config()"))]
    config: Config,
}

impl SharedState {
    async fn new() -> Result<Self, Error> {
        let config = Config::from_env()?;
        let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
        if let Some(region) = config.secret_region.clone() {
            loader = loader.region(aws_config::Region::new(region));
        }
        let sdk_config = loader.load().await;
        Ok(Self {
            secrets: aws_sdk_secretsmanager::Client::new(&sdk_config),
            config,
        })
    }
}

async fn function_handler(
    shared_state: Arc<SharedState>,
    event: Request,
) -> Result<Response<Body>, Error> {
    let config = &shared_state.config;
    let path = event.raw_http_path();
    if path == config.health_check_path || path == FALLBACK_HEALTH_CHECK_PATH {
        Ok(health_check(config))
    } else if path == config.api_homepage_path {
        info!("loading API homepage");
        Ok(api_homepage(config))
    } else {
        info!("getting credentials");
        Ok(authenticated_homepage(&shared_state, &event).await)
    }
}

fn health_check(config: &Config) -> Response<Body> {
    let document = pages::HealthCheck {
        api_homepage_path: &config.api_homepage_path,
        environment: config.environment.as_deref(),
        git_commit: config.git_commit.as_deref(),
        version: config.version.as_deref(),
    };
    let document = serde_json::to_string(&document)
        .expect("failed to render health check");
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json; charset=UTF-8")
        .body(Body::from(document))
        .expect("failed to render response")
}

fn api_homepage(config: &Config) -> Response<Body> {
    html_response(
        config,
        pages::api_homepage(
            &config.application_title,
            config.region.as_deref().unwrap_or_default(),
            config.environment.as_deref().unwrap_or_default(),
            config.max_age,
        ),
    )
}

// The expected credential pair is fetched before the Authorization header
// is looked at, so a secret store failure answers 500 even for requests
// that carry no credential.
async fn authenticated_homepage(
    shared_state: &SharedState,
    event: &Request,
) -> Response<Body> {
    let config = &shared_state.config;
    let Some(secret_arn) = config.secret_arn.as_deref() else {
        error!("SECRET_ARN env must be set to serve the authenticated homepage");
        return internal_server_error();
    };
    let expected = match load_expected_credentials(&shared_state.secrets, secret_arn).await {
        Ok(expected) => expected,
        Err(e) => {
            warn!("secret store error: {e}");
            return internal_server_error();
        }
    };
    let claimed = basic_auth::parse_authorization(event.headers());
    match (claimed, expected) {
        (Some(claimed), Some(expected)) if claimed == expected => {
            info!("authorized, loading homepage");
            html_response(
                config,
                pages::authenticated_homepage(
                    &config.application_title,
                    config.environment.as_deref().unwrap_or_default(),
                    config.max_age,
                ),
            )
        }
        _ => {
            warn!("not authorized");
            Response::builder()
                .status(401)
                .header("WWW-Authenticate", format!("Basic realm={}", config.realm))
                .header("Content-Type", "text/plain; charset=UTF-8")
                .body(Body::from("Access Denied"))
                .expect("failed to render response")
        }
    }
}

fn html_response(config: &Config, page: String) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=UTF-8")
        .header("Cache-Control", format!("max-age={}", config.max_age))
        .body(Body::from(page))
        .expect("failed to render response")
}

fn internal_server_error() -> Response<Body> {
    Response::builder()
        .status(500)
        .header("Content-Type", "text/plain; charset=UTF-8")
        .body(Body::from("Internal Server Error"))
        .expect("failed to render response")
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        // disabling time is handy because CloudWatch will add the ingestion time.
        .without_time()
        .init();

    let shared_state = Arc::new(SharedState::new().await?);
    run(service_fn(|event| async {
        function_handler(shared_state.clone(), event).await
    })).await
}

#[cfg(test)]
mod tests {
    use super::*;

    use aws_smithy_mocks::{RuleMode, mock_client};
    use lambda_http::RequestExt as _;

    const SECRET_ARN: &str = "arn:aws:secretsmanager:us-east-1:123456789012:secret:homepage";

    pub(crate) fn test_config() -> Config {
        Config {
            application_title: "Network Demo".to_string(),
            environment: Some("production".to_string()),
            git_commit: Some("0123abc".to_string()),
            health_check_path: "/hc/".to_string(),
            api_homepage_path: "/v1/homepage".to_string(),
            max_age: 300,
            realm: "Please Authenticate".to_string(),
            region: Some("us-east-1".to_string()),
            secret_region: None,
            secret_arn: Some(SECRET_ARN.to_string()),
            version: Some("1.2.3".to_string()),
        }
    }

    fn shared_state_with_credential_secret() -> Arc<SharedState> {
        let secrets = mock_client!(
            aws_sdk_secretsmanager,
            RuleMode::MatchAny,
            [
                &self::mocks::get_secret_value_string(r#"{"name": "u", "pass": "p"}"#),
            ]
        );
        Arc::new(
            SharedStateBuilder::default()
                .secrets(secrets)
                .build()
                .unwrap(),
        )
    }

    fn request(path: &str, authorization: Option<&str>) -> Request {
        let mut builder = lambda_http::http::Request::builder().uri(path);
        if let Some(authorization) = authorization {
            builder = builder.header("Authorization", authorization);
        }
        builder
            .body(Body::Empty)
            .unwrap()
            .with_raw_http_path(path)
    }

    fn body_text(response: &Response<Body>) -> &str {
        match response.body() {
            Body::Text(text) => text,
            _ => panic!("expected a text body"),
        }
    }

    #[tokio::test]
    async fn function_handler_should_answer_the_health_check_path() {
        let shared_state = shared_state_with_credential_secret();

        let response = function_handler(shared_state, request("/hc/", None))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["Content-Type"],
            "application/json; charset=UTF-8",
        );
        assert_eq!(
            body_text(&response),
            r#"{"API_HOMEPAGE_PATH":"/v1/homepage","ENVIRONMENT":"production","GIT_COMMIT":"0123abc","VERSION":"1.2.3"}"#,
        );
    }

    #[tokio::test]
    async fn function_handler_should_answer_the_literal_health_check_path() {
        let shared_state = shared_state_with_credential_secret();

        let response = function_handler(shared_state, request("/hc", None))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["Content-Type"],
            "application/json; charset=UTF-8",
        );
    }

    #[tokio::test]
    async fn function_handler_should_answer_the_api_homepage_path() {
        let shared_state = shared_state_with_credential_secret();

        let response = function_handler(shared_state, request("/v1/homepage", None))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["Content-Type"],
            "text/html; charset=UTF-8",
        );
        assert_eq!(response.headers()["Cache-Control"], "max-age=300");
        let body = body_text(&response);
        assert!(body.contains("Network Demo"));
        assert!(body.contains("us-east-1"));
    }

    #[tokio::test]
    async fn function_handler_should_deny_requests_without_credentials() {
        let shared_state = shared_state_with_credential_secret();

        let response = function_handler(shared_state, request("/other", None))
            .await
            .unwrap();
        assert_eq!(response.status(), 401);
        assert_eq!(
            response.headers()["WWW-Authenticate"],
            "Basic realm=Please Authenticate",
        );
        assert_eq!(
            response.headers()["Content-Type"],
            "text/plain; charset=UTF-8",
        );
        assert_eq!(body_text(&response), "Access Denied");
    }

    #[tokio::test]
    async fn function_handler_should_deny_mismatched_credentials() {
        let shared_state = shared_state_with_credential_secret();

        // "u:wrong"
        let response = function_handler(
            shared_state,
            request("/other", Some("Basic dTp3cm9uZw==")),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), 401);
        assert_eq!(body_text(&response), "Access Denied");
    }

    #[tokio::test]
    async fn function_handler_should_deny_malformed_authorization_headers() {
        let shared_state = shared_state_with_credential_secret();

        let response = function_handler(
            shared_state,
            request("/other", Some("Basic %%%%")),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), 401);
    }

    #[tokio::test]
    async fn function_handler_should_serve_matching_credentials() {
        let shared_state = shared_state_with_credential_secret();

        // "u:p"
        let response = function_handler(shared_state, request("/other", Some("Basic dTpw")))
            .await
            .unwrap();
        assert_eq!(response.status(), 200);
        assert_eq!(
            response.headers()["Content-Type"],
            "text/html; charset=UTF-8",
        );
        assert_eq!(response.headers()["Cache-Control"], "max-age=300");
        assert!(body_text(&response).contains("Network Demo"));
    }

    #[tokio::test]
    async fn function_handler_should_deny_credentials_against_a_binary_secret() {
        let secrets = mock_client!(
            aws_sdk_secretsmanager,
            RuleMode::MatchAny,
            [
                &self::mocks::get_secret_value_binary(b"u:p"),
            ]
        );
        let shared_state = Arc::new(
            SharedStateBuilder::default()
                .secrets(secrets)
                .build()
                .unwrap(),
        );

        let response = function_handler(shared_state, request("/other", Some("Basic dTpw")))
            .await
            .unwrap();
        assert_eq!(response.status(), 401);
        assert_eq!(body_text(&response), "Access Denied");
    }

    #[tokio::test]
    async fn function_handler_should_answer_500_when_the_secret_is_missing() {
        let secrets = mock_client!(
            aws_sdk_secretsmanager,
            RuleMode::MatchAny,
            [
                &self::mocks::get_secret_value_resource_not_found(),
            ]
        );
        let shared_state = Arc::new(
            SharedStateBuilder::default()
                .secrets(secrets)
                .build()
                .unwrap(),
        );

        let response = function_handler(shared_state, request("/other", Some("Basic dTpw")))
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        assert_eq!(body_text(&response), "Internal Server Error");
    }

    #[tokio::test]
    async fn function_handler_should_answer_500_when_the_secret_cannot_be_decrypted() {
        let secrets = mock_client!(
            aws_sdk_secretsmanager,
            RuleMode::MatchAny,
            [
                &self::mocks::get_secret_value_decryption_failure(),
            ]
        );
        let shared_state = Arc::new(
            SharedStateBuilder::default()
                .secrets(secrets)
                .build()
                .unwrap(),
        );

        let response = function_handler(shared_state, request("/other", None))
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
        assert_eq!(body_text(&response), "Internal Server Error");
    }

    #[tokio::test]
    async fn function_handler_should_answer_500_without_a_secret_arn() {
        let secrets = mock_client!(
            aws_sdk_secretsmanager,
            RuleMode::MatchAny,
            [
                &self::mocks::get_secret_value_string(r#"{"name": "u", "pass": "p"}"#),
            ]
        );
        let mut config = test_config();
        config.secret_arn = None;
        let shared_state = Arc::new(
            SharedStateBuilder::default()
                .secrets(secrets)
                .config(config)
                .build()
                .unwrap(),
        );

        let response = function_handler(shared_state, request("/other", Some("Basic dTpw")))
            .await
            .unwrap();
        assert_eq!(response.status(), 500);
    }

    pub(crate) mod mocks {
        use aws_sdk_secretsmanager::{
            Client,
            error::ErrorMetadata,
            operation::get_secret_value::{GetSecretValueError, GetSecretValueOutput},
            primitives::Blob,
            types::error::{DecryptionFailure, ResourceNotFoundException},
        };
        use aws_smithy_mocks::{Rule, mock};

        pub(crate) fn get_secret_value_string(secret_string: &str) -> Rule {
            let secret_string = secret_string.to_string();
            mock!(Client::get_secret_value)
                .then_output(move || GetSecretValueOutput::builder()
                    .secret_string(secret_string.clone())
                    .build())
        }

        pub(crate) fn get_secret_value_binary(secret_binary: &[u8]) -> Rule {
            let secret_binary = secret_binary.to_vec();
            mock!(Client::get_secret_value)
                .then_output(move || GetSecretValueOutput::builder()
                    .secret_binary(Blob::new(secret_binary.clone()))
                    .build())
        }

        pub(crate) fn get_secret_value_resource_not_found() -> Rule {
            mock!(Client::get_secret_value)
                .then_error(|| GetSecretValueError::ResourceNotFoundException(
                    ResourceNotFoundException::builder()
                        .meta(ErrorMetadata::builder()
                            .code("ResourceNotFoundException")
                            .build())
                        .build(),
                ))
        }

        pub(crate) fn get_secret_value_decryption_failure() -> Rule {
            mock!(Client::get_secret_value)
                .then_error(|| GetSecretValueError::DecryptionFailure(
                    DecryptionFailure::builder()
                        .meta(ErrorMetadata::builder()
                            .code("DecryptionFailure")
                            .build())
                        .build(),
                ))
        }
    }
}
