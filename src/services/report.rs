use crate::domain::constants::BOX_CAPACITY;
use crate::domain::models::{
    Inventory, ReasonCount, RejectedEntry, RejectedPart, RejectionBreakdown, Report,
};

/// Assemble the consolidated production report. Read-only.
pub fn build_report(inv: &Inventory) -> Report {
    let approved = inv.approved.len();
    let rejected = inv.rejected.len();
    let total_processed = approved + rejected;

    let approval_rate = if total_processed > 0 {
        approved as f64 / total_processed as f64 * 100.0
    } else {
        0.0
    };

    Report {
        total_processed,
        approved,
        rejected,
        approval_rate,
        sealed_boxes: inv.sealed_boxes.len(),
        open_box_count: inv.open_box.parts.len(),
        box_capacity: BOX_CAPACITY,
        rejections: (rejected > 0).then(|| breakdown(&inv.rejected)),
    }
}

// Histogram rows keep first-appearance order so repeated reports over
// the same inventory stay stable.
fn breakdown(rejected: &[RejectedPart]) -> RejectionBreakdown {
    let mut by_reason: Vec<ReasonCount> = Vec::new();
    for part in rejected {
        match by_reason.iter_mut().find(|row| row.reason == part.reason) {
            Some(row) => row.count += 1,
            None => by_reason.push(ReasonCount {
                reason: part.reason,
                count: 1,
                percentage: 0.0,
            }),
        }
    }

    let total = rejected.len() as f64;
    for row in &mut by_reason {
        row.percentage = row.count as f64 / total * 100.0;
    }

    let parts = rejected
        .iter()
        .map(|p| RejectedEntry {
            id: p.id,
            reason: p.reason,
        })
        .collect();

    RejectionBreakdown { by_reason, parts }
}
