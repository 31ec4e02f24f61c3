//! Basic authentication credential parsing.

use base64::{
    Engine as _,
    engine::general_purpose::{STANDARD as base64std},
};
use lambda_http::http::{HeaderMap, header::AUTHORIZATION};
use serde::Deserialize;
use std::fmt;

/// Credential pair of a user name and a password.
///
/// Two instances exist per request: the pair claimed by the caller in the
/// `Authorization` header and the pair expected by the secret store. They
/// match only on exact string equality of both fields.
#[derive(Clone, Deserialize, Eq, PartialEq)]
pub struct Credentials {
    /// User name.
    pub name: String,
    /// Password.
    pub pass: String,
}

// The password never goes to the logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("name", &self.name)
            .field("pass", &"<redacted>")
            .finish()
    }
}

/// Extracts the claimed credential pair from the `Authorization` header.
///
/// Follows the Basic scheme: the scheme token is matched case-insensitively
/// and the payload is the standard base64 encoding of `name:pass`. An
/// absent header, a different scheme, an undecodable payload, or a payload
/// without a `:` separator all mean "no credential" and yield `None`.
/// Empty names and passwords are legal.
pub fn parse_authorization(headers: &HeaderMap) -> Option<Credentials> {
    let header = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, payload) = header.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("Basic") {
        return None;
    }
    let decoded = base64std.decode(payload.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (name, pass) = decoded.split_once(':')?;
    Some(Credentials {
        name: name.to_string(),
        pass: pass.to_string(),
    })
}
