//! Reverse-then-Base64 encoding and the identity transform.

use base64::{engine::general_purpose::STANDARD, Engine as _};

use super::{Transform, TransformError};

// ---------------------------------------------------------------------------
// ReverseBase64
// ---------------------------------------------------------------------------

/// Reverses the text by Unicode scalar value, then encodes the UTF-8 bytes
/// with the standard padded Base64 alphabet.
///
/// ```
/// use cipher_pad::transform::{ReverseBase64, Transform};
///
/// assert_eq!(ReverseBase64.apply("").unwrap(), "");
/// assert_eq!(ReverseBase64.apply("AB").unwrap(), "QkE=");
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseBase64;

impl ReverseBase64 {
    /// Undo [`apply`](Transform::apply): decode Base64, then un-reverse.
    ///
    /// # Errors
    ///
    /// - [`TransformError::Decode`] - `encoded` is not valid Base64.
    /// - [`TransformError::Utf8`]   - the decoded bytes are not UTF-8.
    pub fn invert(&self, encoded: &str) -> Result<String, TransformError> {
        let bytes = STANDARD
            .decode(encoded)
            .map_err(|e| TransformError::Decode(e.to_string()))?;
        let reversed = String::from_utf8(bytes).map_err(|e| TransformError::Utf8(e.to_string()))?;
        Ok(reverse(&reversed))
    }
}

impl Transform for ReverseBase64 {
    fn apply(&self, text: &str) -> Result<String, TransformError> {
        if text.is_empty() {
            return Ok(String::new());
        }
        Ok(STANDARD.encode(reverse(text).as_bytes()))
    }

    fn name(&self) -> &str {
        "reverse-base64"
    }
}

fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// Returns its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn apply(&self, text: &str) -> Result<String, TransformError> {
        Ok(text.to_owned())
    }

    fn name(&self) -> &str {
        "identity"
    }
}
