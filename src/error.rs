//! Secret store errors.

use aws_sdk_secretsmanager::operation::get_secret_value::GetSecretValueError;
use aws_smithy_runtime_api::client::result::SdkError;
use aws_smithy_types::error::metadata::ProvideErrorMetadata;
use std::fmt::Debug;
use thiserror::{Error as ThisError};

/// Error while retrieving the expected credential pair from the secret
/// store.
///
/// The first five variants mirror the distinguished Secrets Manager error
/// kinds. The dispatcher answers 500 for every variant; the kind only
/// shows up in the diagnostics.
#[derive(Debug, ThisError)]
pub enum SecretStoreError {
    /// The service could not decrypt the protected secret text with the
    /// configured KMS key.
    #[error("secret decryption failure: {0}")]
    DecryptionFailure(String),
    /// An error occurred on the server side.
    #[error("secret store internal error: {0}")]
    InternalError(String),
    /// A parameter value was invalid.
    #[error("invalid secret parameter: {0}")]
    InvalidParameter(String),
    /// A parameter value was not valid for the current state of the
    /// resource.
    #[error("invalid secret request: {0}")]
    InvalidRequest(String),
    /// The requested secret does not exist.
    #[error("secret not found: {0}")]
    NotFound(String),
    /// The secret payload was not the expected credential JSON.
    #[error("malformed credential secret: {0}")]
    MalformedSecret(#[from] serde_json::Error),
    /// Any other failure, including transport errors.
    #[error("secret store error: {0}")]
    Unhandled(lambda_runtime::Error),
}

impl<R> From<SdkError<GetSecretValueError, R>> for SecretStoreError
where
    R: Debug + Send + Sync + 'static,
{
    fn from(e: SdkError<GetSecretValueError, R>) -> Self {
        match e {
            SdkError::ServiceError(e) => {
                let e = e.into_err();
                let message = e
                    .message()
                    .unwrap_or("no message from the secret store")
                    .to_string();
                match e {
                    GetSecretValueError::DecryptionFailure(_) => {
                        Self::DecryptionFailure(message)
                    }
                    GetSecretValueError::InternalServiceError(_) => {
                        Self::InternalError(message)
                    }
                    GetSecretValueError::InvalidParameterException(_) => {
                        Self::InvalidParameter(message)
                    }
                    GetSecretValueError::InvalidRequestException(_) => {
                        Self::InvalidRequest(message)
                    }
                    GetSecretValueError::ResourceNotFoundException(_) => {
                        Self::NotFound(message)
                    }
                    e => Self::Unhandled(e.into()),
                }
            }
            e => Self::Unhandled(e.into()),
        }
    }
}
