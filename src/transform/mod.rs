//! Text transformation plug-ins.
//!
//! The ordering queue treats the transformation as an opaque function from
//! text to text.  This module provides:
//! * [`Transform`] - object-safe trait implemented by every transformation.
//! * [`ReverseBase64`] - reverse the text, then Base64-encode its UTF-8 bytes.
//! * [`Identity`] - pass-through, handy for checking the queue in isolation.
//! * [`Delayed`] - wraps any transform with an artificial latency.
//! * [`build_transform`] - builds the configured chain from [`TransformConfig`].
//!
//! The encoding is cosmetic.  It is trivially reversible and is not a
//! security boundary.
//!
//! # Quick start
//!
//! ```
//! use cipher_pad::transform::{ReverseBase64, Transform};
//!
//! let t = ReverseBase64;
//! assert_eq!(t.apply("AB").unwrap(), "QkE=");
//! assert_eq!(t.invert("QkE=").unwrap(), "AB");
//! ```

pub mod delay;
pub mod encode;

use std::sync::Arc;
use std::time::Duration;

use thiserror::Error;

use crate::config::{TransformConfig, TransformKind};

pub use delay::Delayed;
pub use encode::{Identity, ReverseBase64};

// ---------------------------------------------------------------------------
// TransformError
// ---------------------------------------------------------------------------

/// Errors a transformation (or its inverse) can report.
#[derive(Debug, Clone, Error)]
pub enum TransformError {
    /// The input was not valid Base64.
    #[error("invalid Base64 input: {0}")]
    Decode(String),

    /// The decoded bytes were not valid UTF-8.
    #[error("decoded bytes are not valid UTF-8: {0}")]
    Utf8(String),

    /// The transformation failed for a collaborator-specific reason.
    #[error("transformation failed: {0}")]
    Failed(String),
}

// ---------------------------------------------------------------------------
// Transform trait
// ---------------------------------------------------------------------------

/// Object-safe, thread-safe text-to-text transformation.
///
/// Implementations must be `Send + Sync` so they can be held behind an
/// `Arc<dyn Transform>` and called from the worker thread.
///
/// # Contract
///
/// - Deterministic and free of side effects (apart from latency).
/// - `apply("")` returns `Ok("")`.
/// - May block; it only ever runs on the worker thread.
pub trait Transform: Send + Sync {
    /// Transform `text` and return the result.
    fn apply(&self, text: &str) -> Result<String, TransformError>;

    /// Short name used in log lines.
    fn name(&self) -> &str;
}

// Compile-time assertion: Box<dyn Transform> must be constructible.
const _: fn() = || {
    fn _assert_object_safe(_: Box<dyn Transform>) {}
};

impl<T: Transform + ?Sized> Transform for Arc<T> {
    fn apply(&self, text: &str) -> Result<String, TransformError> {
        (**self).apply(text)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

// ---------------------------------------------------------------------------
// build_transform
// ---------------------------------------------------------------------------

/// Build the transformation described by `config`.
///
/// A non-zero `delay_ms` wraps the chosen transform in [`Delayed`].
pub fn build_transform(config: &TransformConfig) -> Arc<dyn Transform> {
    let delay = Duration::from_millis(config.delay_ms);

    match (config.kind, delay.is_zero()) {
        (TransformKind::ReverseBase64, true) => Arc::new(ReverseBase64),
        (TransformKind::ReverseBase64, false) => Arc::new(Delayed::new(ReverseBase64, delay)),
        (TransformKind::Identity, true) => Arc::new(Identity),
        (TransformKind::Identity, false) => Arc::new(Delayed::new(Identity, delay)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_builds_delayed_reverse_base64() {
        let t = build_transform(&TransformConfig::default());
        assert_eq!(t.name(), "reverse-base64");
        assert_eq!(t.apply("AB").unwrap(), "QkE=");
    }

    #[test]
    fn zero_delay_identity_passes_text_through() {
        let config = TransformConfig {
            kind: TransformKind::Identity,
            delay_ms: 0,
        };
        let t = build_transform(&config);
        assert_eq!(t.apply("hello").unwrap(), "hello");
    }

    #[test]
    fn arc_forwards_to_inner_transform() {
        let t: Arc<dyn Transform> = Arc::new(ReverseBase64);
        let wrapped = Arc::new(t);
        assert_eq!(wrapped.apply("").unwrap(), "");
        assert_eq!(wrapped.name(), "reverse-base64");
    }

    #[test]
    fn transform_error_display_mentions_cause() {
        let e = TransformError::Failed("boom".into());
        assert!(e.to_string().contains("boom"));
    }
}
