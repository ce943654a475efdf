//! Command handlers. Each one reads the session's preferences, optionally
//! calls an external service, and sends its replies to an [`Outbox`].
//!
//! [`Outbox`]: crate::common::Outbox

pub mod basic;
pub mod groups;
pub mod keywords;
pub mod preferences;
