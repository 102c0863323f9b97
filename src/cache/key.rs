//! Cache key generation using SHA-256 hashes

use sha2::{Digest, Sha256};

use crate::client::ServiceCall;

/// Generate a deterministic cache key from a web-service call.
///
/// The key is a SHA-256 hash of the function name, token, site and sorted
/// extra parameters, so every field of the call participates in identity
/// and parameter order never does. Each field is length-prefixed so no
/// choice of field contents can shift bytes from one field into another.
pub fn cache_key(call: &ServiceCall) -> String {
    let mut hasher = Sha256::new();

    update_field(&mut hasher, &call.function);
    update_field(&mut hasher, &call.token);
    update_field(&mut hasher, &call.site);

    let mut sorted_params: Vec<_> = call.params.iter().collect();
    sorted_params.sort();

    for (k, v) in sorted_params {
        update_field(&mut hasher, k);
        update_field(&mut hasher, v);
    }

    format!("{:x}", hasher.finalize())
}

fn update_field(hasher: &mut Sha256, field: &str) {
    hasher.update((field.len() as u64).to_le_bytes());
    hasher.update(field.as_bytes());
}
