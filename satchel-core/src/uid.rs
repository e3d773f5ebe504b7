//! Identifier generation for new events, tasks and meetings.

use std::time::{SystemTime, UNIX_EPOCH};

/// Generate an identifier for a new calendar resource.
///
/// Combines a high-resolution timestamp with the caller's domain hint
/// (typically the account's mail domain) so identifiers stay traceable
/// to where they were minted. Uniqueness is probabilistic: there is no
/// registry, and the storage server remains the authority on
/// collisions. A caller whose server rejects a duplicate retries with
/// a freshly generated identifier.
pub fn new_uid(domain_hint: &str) -> String {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();

    format!("{}-{}@{}", now.as_nanos(), now.as_secs(), domain_hint)
}
