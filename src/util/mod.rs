//! Small helpers outside the request/response pipeline.

use uuid::Uuid;

/// Default length for [`generate_unique_id`].
pub const UNIQUE_ID_LEN: usize = 30;

/// Generates a random session id of `len` hexadecimal characters.
///
/// Session ids are deliberately caller-supplied so request resolution stays
/// deterministic; use this when a fresh one is needed for
/// `AiOptions::session_id`.
pub fn generate_unique_id(len: usize) -> String {
    let mut id = String::with_capacity(len + 32);
    while id.len() < len {
        id.push_str(&Uuid::new_v4().simple().to_string());
    }
    id.truncate(len);
    id
}
