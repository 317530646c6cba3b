//! Web3 feature-flag derivation.
//!
//! A booking page shows the web3 gate when the host user holds a
//! credential whose type contains `_web3` and whose key payload carries
//! `isWeb3Active: true`. Everything else -- no such credential, missing
//! field, wrong JSON type -- means the flag is off.

use serde_json::Value;

/// Derive the web3-active flag from `(app_type, key payload)` pairs.
///
/// Only the first `_web3` credential is consulted, matching the single
/// web3 integration a user can hold.
pub fn is_web3_active<'a, I>(credentials: I) -> bool
where
    I: IntoIterator<Item = (&'a str, &'a Value)>,
{
    credentials
        .into_iter()
        .find(|(app_type, _)| app_type.contains("_web3"))
        .and_then(|(_, key)| key.get("isWeb3Active").and_then(Value::as_bool))
        .unwrap_or(false)
}
