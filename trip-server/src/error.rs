//! Error classification shared by the upstream clients.

use serde::Serialize;

/// The two user-facing failure classes.
///
/// Every client error maps to exactly one kind. The orchestrator turns the
/// kind into the message the user sees; the underlying cause is logged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Transport failure, non-2xx status, or a response that does not match
    /// the expected schema.
    Network,
    /// A place name matched zero or several places.
    Validation,
}
