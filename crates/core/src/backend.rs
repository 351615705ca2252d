//! Mock Site-Data Backend
//!
//! There is no real project-management integration behind these tools; the
//! answers come from a small fixed data set matched by keyword. This module
//! makes that explicit: `SiteBackend` is the seam a real backend would plug
//! into, and `CannedSiteBackend` is the deterministic stand-in that ships.

use crate::lookup::LookupOutcome;
use async_trait::async_trait;

/// Fixed answer for project ids containing "45A".
pub const PROJECT_45A_UPDATE: &str = "Foundation complete. Brickwork starting today. On schedule.";
/// Fixed answer for cement availability.
pub const CEMENT_STATUS: &str = "Cement delivered yesterday. Available on-site.";
/// Fixed answer for brick delivery.
pub const BRICK_STATUS: &str = "Brick delivery scheduled tomorrow morning.";
/// Fixed answer for crew queries, independent of the work type asked about.
pub const CREW_UPDATE: &str = "15 workers on-site today. Both head masons present.";

/// Read-only source of site data for the four lookup tools.
///
/// Implementations must be cheap and infallible: the tools they back have no
/// error path beyond the `Unknown` outcome, and no state survives a call.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SiteBackend: Send + Sync {
    /// Latest construction progress for a project id.
    async fn project_status(&self, project_id: &str) -> LookupOutcome;

    /// Delivery and availability status for a construction material.
    async fn material_status(&self, material_type: &str) -> LookupOutcome;

    /// Status of the labor and mason crews on-site.
    async fn crew_status(&self, work_type: &str) -> LookupOutcome;

    /// Available visit slots for a client-preferred date.
    async fn visit_slots(&self, preferred_date: &str) -> LookupOutcome;
}

/// The shipping `SiteBackend`: keyword-substring matching over canned strings.
///
/// Matching is case-insensitive and unvalidated by design; anything that does
/// not hit a keyword falls out as `Unknown` rather than an error.
#[derive(Debug, Default, Clone, Copy)]
pub struct CannedSiteBackend;

#[async_trait]
impl SiteBackend for CannedSiteBackend {
    async fn project_status(&self, project_id: &str) -> LookupOutcome {
        if project_id.to_uppercase().contains("45A") {
            LookupOutcome::Known(PROJECT_45A_UPDATE.to_string())
        } else {
            LookupOutcome::Unknown {
                subject: project_id.to_string(),
            }
        }
    }

    async fn material_status(&self, material_type: &str) -> LookupOutcome {
        let normalized = material_type.to_lowercase();
        if normalized.contains("cement") {
            LookupOutcome::Known(CEMENT_STATUS.to_string())
        } else if normalized.contains("brick") {
            LookupOutcome::Known(BRICK_STATUS.to_string())
        } else {
            LookupOutcome::Unknown {
                subject: material_type.to_string(),
            }
        }
    }

    async fn crew_status(&self, _work_type: &str) -> LookupOutcome {
        LookupOutcome::Known(CREW_UPDATE.to_string())
    }

    async fn visit_slots(&self, preferred_date: &str) -> LookupOutcome {
        LookupOutcome::Known(format!(
            "11 AM slot for {} is available. Booked for you.",
            preferred_date
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn project_45a_matches_any_casing_and_padding() {
        let backend = CannedSiteBackend;
        for id in ["45A", "plot 45a", "Plot-45A East Wing", "45a"] {
            assert_eq!(
                backend.project_status(id).await,
                LookupOutcome::Known(PROJECT_45A_UPDATE.to_string()),
                "id {:?} should match",
                id
            );
        }
    }

    #[tokio::test]
    async fn unrecognized_project_is_unknown_with_subject() {
        let backend = CannedSiteBackend;
        assert_eq!(
            backend.project_status("plot 12B").await,
            LookupOutcome::Unknown {
                subject: "plot 12B".to_string()
            }
        );
    }

    #[tokio::test]
    async fn material_keywords_match_case_insensitively() {
        let backend = CannedSiteBackend;
        assert_eq!(
            backend.material_status("CEMENT bags").await,
            LookupOutcome::Known(CEMENT_STATUS.to_string())
        );
        assert_eq!(
            backend.material_status("Bricks").await,
            LookupOutcome::Known(BRICK_STATUS.to_string())
        );
        assert_eq!(
            backend.material_status("steel").await,
            LookupOutcome::Unknown {
                subject: "steel".to_string()
            }
        );
    }

    #[tokio::test]
    async fn crew_status_is_fixed_regardless_of_input() {
        let backend = CannedSiteBackend;
        for work_type in ["masons", "electrical", ""] {
            assert_eq!(
                backend.crew_status(work_type).await,
                LookupOutcome::Known(CREW_UPDATE.to_string())
            );
        }
    }

    #[tokio::test]
    async fn visit_slots_embed_the_date_verbatim() {
        let backend = CannedSiteBackend;
        assert_eq!(
            backend.visit_slots("Monday").await,
            LookupOutcome::Known(
                "11 AM slot for Monday is available. Booked for you.".to_string()
            )
        );
    }
}
