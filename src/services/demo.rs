use crate::domain::models::{Inventory, Registration};
use crate::services::inventory::register;

/// Demonstration batch: (weight g, color, length cm) candidates that
/// exercise every outcome. The first ten approvals seal box 1; the
/// tail covers each rejection reason and both boundary approvals.
pub const DEMO_BATCH: [(f64, &str, f64); 21] = [
    (100.0, "azul", 15.0),
    (98.5, "verde", 12.5),
    (102.0, "azul", 18.0),
    (96.0, "verde", 14.0),
    (104.0, "azul", 16.5),
    (99.0, "verde", 11.0),
    (101.5, "azul", 19.0),
    (97.0, "verde", 13.5),
    (103.0, "azul", 17.0),
    (100.5, "verde", 15.5),
    (98.0, "azul", 12.0),
    (102.5, "verde", 14.5),
    (99.5, "azul", 16.0),
    (90.0, "azul", 15.0),
    (110.0, "verde", 12.0),
    (100.0, "vermelho", 15.0),
    (98.0, "amarelo", 14.0),
    (100.0, "azul", 8.0),
    (99.0, "verde", 25.0),
    (95.0, "verde", 10.0),
    (105.0, "azul", 20.0),
];

/// Feed the demonstration batch through the ordinary registration path.
pub fn run_demo(inv: &mut Inventory) -> Vec<Registration> {
    DEMO_BATCH
        .iter()
        .map(|&(weight, color, length)| register(inv, weight, color, length))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::run_demo;
    use crate::domain::models::{Inventory, Outcome, RejectReason};
    use crate::services::report::build_report;

    #[test]
    fn demo_batch_exercises_every_outcome() {
        let mut inv = Inventory::default();
        let regs = run_demo(&mut inv);

        assert_eq!(regs.len(), 21);
        assert_eq!(inv.approved.len(), 15);
        assert_eq!(inv.rejected.len(), 6);

        let reasons: Vec<_> = inv.rejected.iter().map(|p| p.reason).collect();
        assert_eq!(
            reasons,
            vec![
                RejectReason::WeightOutOfRange,
                RejectReason::WeightOutOfRange,
                RejectReason::InvalidColor,
                RejectReason::InvalidColor,
                RejectReason::LengthOutOfRange,
                RejectReason::LengthOutOfRange,
            ],
        );
    }

    #[test]
    fn demo_batch_seals_exactly_one_box() {
        let mut inv = Inventory::default();
        let regs = run_demo(&mut inv);

        assert_eq!(regs[9].sealed_box, Some(1));
        assert_eq!(inv.sealed_boxes.len(), 1);
        assert_eq!(inv.open_box.parts.len(), 5);
    }

    #[test]
    fn demo_ids_cover_the_whole_batch() {
        let mut inv = Inventory::default();
        let regs = run_demo(&mut inv);

        assert_eq!(regs[0].id, 1);
        assert_eq!(regs[20].id, 21);
        assert_eq!(regs[20].outcome, Outcome::Accepted);
        assert_eq!(inv.last_id, 21);
    }

    #[test]
    fn demo_report_matches_known_totals() {
        let mut inv = Inventory::default();
        run_demo(&mut inv);

        let report = build_report(&inv);
        assert_eq!(report.total_processed, 21);
        assert!((report.approval_rate - 100.0 * 15.0 / 21.0).abs() < 1e-9);
    }
}
