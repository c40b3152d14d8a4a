// hash.rs: content-hash identity for templates
use sha2::{Digest, Sha256};

/// Stable identity key for a template's text: SHA-256 over the UTF-8 bytes,
/// with the digest bytes run through SHA-256 once more before hex encoding,
/// i.e. `hex(sha256(sha256(text)))`.
///
/// The second pass is deliberate. Existing template stores were keyed with a
/// digest-of-digest scheme, and byte-for-byte parity with those keys requires
/// reproducing it. Changing this breaks deduplication against stored hashes.
pub fn template_hash(template_text: &str) -> String {
    let first = Sha256::digest(template_text.as_bytes());
    hex::encode(Sha256::digest(first))
}
