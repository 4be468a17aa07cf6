//! Per-phase failure policy shared by `populate` and `fix-inventory`.
//!
//! Every API step returns a `Result`; [`settle`] applies the phase's policy
//! to it so the abort/continue decision lives in one table.

use std::fmt;

use shopseed_admin::AdminError;

/// A step of a run whose failures are handled uniformly.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Phase {
    Teardown,
    LocationResolution,
    ProductCreation,
    InventoryAssignment,
    CollectionCreation,
    CollectionLink,
    InventoryCorrection,
    ProductListing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FailurePolicy {
    /// Stop the run and exit non-zero.
    Abort,
    /// Log, count, and move on to the next entity.
    Continue,
}

impl Phase {
    pub(crate) const fn on_failure(self) -> FailurePolicy {
        match self {
            Phase::LocationResolution | Phase::ProductCreation | Phase::ProductListing => {
                FailurePolicy::Abort
            }
            Phase::Teardown
            | Phase::InventoryAssignment
            | Phase::CollectionCreation
            | Phase::CollectionLink
            | Phase::InventoryCorrection => FailurePolicy::Continue,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Phase::Teardown => "teardown",
            Phase::LocationResolution => "location resolution",
            Phase::ProductCreation => "product creation",
            Phase::InventoryAssignment => "inventory assignment",
            Phase::CollectionCreation => "collection creation",
            Phase::CollectionLink => "collection link",
            Phase::InventoryCorrection => "inventory correction",
            Phase::ProductListing => "product listing",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Applies `phase`'s failure policy to the outcome of one step on `subject`.
///
/// Returns `Ok(Some(value))` on success and `Ok(None)` for a failure the
/// phase tolerates (logged at warn). A failure in an aborting phase is logged
/// at error and returned with the phase and subject as context.
pub(crate) fn settle<T>(
    phase: Phase,
    subject: &str,
    result: Result<T, AdminError>,
) -> anyhow::Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) => match phase.on_failure() {
            FailurePolicy::Continue => {
                tracing::warn!(%phase, subject, error = %e, "step failed; continuing");
                Ok(None)
            }
            FailurePolicy::Abort => {
                tracing::error!(%phase, subject, error = %e, "step failed; aborting run");
                Err(anyhow::Error::new(e).context(format!("{phase} failed for {subject}")))
            }
        },
    }
}
