//! cipher-pad: a two-pane editor that re-encodes its input on a
//! background worker while the window stays responsive.
//!
//! * [`transform`] - the text transformation plug-ins.
//! * [`queue`]     - single-worker FIFO queue and result hand-off.
//! * [`surface`]   - input text, output text and the queue between them.
//! * [`app`]       - the eframe window.
//! * [`config`]    - TOML settings.

pub mod app;
pub mod config;
pub mod queue;
pub mod surface;
pub mod transform;
