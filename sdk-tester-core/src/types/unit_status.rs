//! Unit slot status

use serde::Serialize;

/// Observable state of a unit slot
///
/// `NotBuilt -> Building -> {Built, BuildFailed}`, `BuildFailed -> Building` on retry,
/// and any state `-> Released` when the owning screen unmounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "reason", rename_all = "camelCase")]
pub enum UnitStatus {
    NotBuilt,
    Building,
    Built,
    BuildFailed(String),
    Released,
}

impl UnitStatus {
    /// Whether a "create unit" control should accept input
    #[must_use]
    pub fn can_build(&self) -> bool {
        matches!(self, Self::NotBuilt | Self::BuildFailed(_))
    }
}
