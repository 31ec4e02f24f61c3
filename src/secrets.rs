//! Retrieves the expected credential pair from AWS Secrets Manager.

use tracing::{error, info, warn};

use crate::basic_auth::Credentials;
use crate::error::SecretStoreError;

/// Loads the credential pair that protects the homepage.
///
/// Issues a single `GetSecretValue` round trip with the reused client and
/// decodes the string payload, which must be a JSON object with `name` and
/// `pass` fields.
///
/// Returns `None` when the secret has no usable string payload. In
/// particular a binary-only secret yields `None`, so no request can ever
/// authenticate against one.
pub async fn load_expected_credentials(
    secrets: &aws_sdk_secretsmanager::Client,
    secret_id: &str,
) -> Result<Option<Credentials>, SecretStoreError> {
    let output = secrets
        .get_secret_value()
        .secret_id(secret_id)
        .send()
        .await
        .map_err(|e| {
            error!(?e, "getting credential secret");
            SecretStoreError::from(e)
        })?;
    if let Some(secret_string) = output.secret_string() {
        info!("decoding credential secret");
        Ok(Some(serde_json::from_str(secret_string)?))
    } else if output.secret_binary().is_some() {
        warn!("credential secret has a binary payload; no request can match it");
        Ok(None)
    } else {
        warn!("credential secret has no payload");
        Ok(None)
    }
}
