//! Session tokens issued by the external account directory

use serde::{Deserialize, Serialize};

/// Tokens returned by the account directory after a successful login.
///
/// This service never mints tokens itself; it validates them and passes
/// them through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionTokens {
    /// Bearer token for subsequent authenticated requests
    pub access_token: String,

    /// Token type, normally `bearer`
    pub token_type: String,

    /// Seconds until the access token expires
    pub expires_in: i64,
}
