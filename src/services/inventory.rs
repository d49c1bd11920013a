use tracing::debug;

use crate::domain::models::{Inventory, Outcome, Part, PartId, Registration, RejectedPart};
use crate::services::{packing, validator};

/// Register one candidate part against the inventory.
///
/// Allocates the next identifier, runs the validator, then files the
/// part under approved (and into the open box) or rejected. Rejected
/// parts consume an identifier too: the counter advances once per
/// registration, whatever the outcome. Callers must parse the raw
/// measurements *before* calling; a malformed attempt never reaches
/// the allocator and therefore consumes nothing.
pub fn register(inv: &mut Inventory, weight: f64, color: &str, length: f64) -> Registration {
    let id = inv.next_id();
    inv.last_id = id;

    let outcome = validator::validate(weight, color, length);
    match outcome {
        Outcome::Accepted => {
            inv.approved.push(Part {
                id,
                weight,
                color: color.to_string(),
                length,
            });
            let sealed_box = packing::pack(inv, id);
            debug!(id, weight, color, length, "part approved");
            Registration {
                id,
                outcome,
                sealed_box,
            }
        }
        Outcome::Rejected(reason) => {
            inv.rejected.push(RejectedPart {
                id,
                weight,
                color: color.to_string(),
                length,
                reason,
            });
            debug!(id, weight, color, length, %reason, "part rejected");
            Registration {
                id,
                outcome,
                sealed_box: None,
            }
        }
    }
}

/// Remove a part by identifier from every structure that holds it.
///
/// Approved parts are searched first; a hit also clears the id from
/// whichever box holds it. Otherwise the rejected list is searched.
/// Returns whether anything was removed. Identifiers are never
/// renumbered and a sealed box that drops below capacity stays sealed.
pub fn remove(inv: &mut Inventory, id: PartId) -> bool {
    if let Some(pos) = inv.approved.iter().position(|p| p.id == id) {
        inv.approved.remove(pos);
        remove_from_boxes(inv, id);
        debug!(id, "approved part removed");
        return true;
    }
    if let Some(pos) = inv.rejected.iter().position(|p| p.id == id) {
        inv.rejected.remove(pos);
        debug!(id, "rejected part removed");
        return true;
    }
    false
}

// A given id lives in at most one box, so stop at the first match:
// open box first, then sealed boxes in sealing order.
fn remove_from_boxes(inv: &mut Inventory, id: PartId) {
    if let Some(pos) = inv.open_box.parts.iter().position(|p| *p == id) {
        inv.open_box.parts.remove(pos);
        return;
    }
    for sealed in &mut inv.sealed_boxes {
        if let Some(pos) = sealed.parts.iter().position(|p| *p == id) {
            sealed.parts.remove(pos);
            return;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{register, remove};
    use crate::domain::constants::BOX_CAPACITY;
    use crate::domain::models::{Inventory, Outcome, RejectReason};

    fn approve_n(inv: &mut Inventory, n: usize) {
        for _ in 0..n {
            let reg = register(inv, 100.0, "azul", 15.0);
            assert_eq!(reg.outcome, Outcome::Accepted);
        }
    }

    #[test]
    fn identifiers_start_at_one_and_increase() {
        let mut inv = Inventory::default();
        let a = register(&mut inv, 100.0, "azul", 15.0);
        let b = register(&mut inv, 98.5, "verde", 12.5);
        assert_eq!(a.id, 1);
        assert_eq!(b.id, 2);
    }

    #[test]
    fn rejected_parts_consume_identifiers_too() {
        let mut inv = Inventory::default();
        let a = register(&mut inv, 100.0, "azul", 15.0);
        let b = register(&mut inv, 200.0, "azul", 15.0);
        let c = register(&mut inv, 100.0, "verde", 15.0);
        assert_eq!(a.id, 1);
        assert_eq!(
            b.outcome,
            Outcome::Rejected(RejectReason::WeightOutOfRange),
        );
        assert_eq!(b.id, 2);
        assert_eq!(c.id, 3);
        assert_eq!(inv.approved.len(), 2);
        assert_eq!(inv.rejected.len(), 1);
    }

    #[test]
    fn rejected_part_never_enters_a_box() {
        let mut inv = Inventory::default();
        register(&mut inv, 200.0, "azul", 15.0);
        assert!(inv.open_box.parts.is_empty());
        assert!(inv.sealed_boxes.is_empty());
    }

    #[test]
    fn tenth_approval_seals_the_box() {
        let mut inv = Inventory::default();
        approve_n(&mut inv, BOX_CAPACITY - 1);
        assert!(inv.sealed_boxes.is_empty());

        let reg = register(&mut inv, 100.5, "verde", 15.5);
        assert_eq!(reg.sealed_box, Some(1));
        assert_eq!(inv.sealed_boxes.len(), 1);
        assert_eq!(inv.sealed_boxes[0].parts.len(), BOX_CAPACITY);
        assert!(inv.open_box.parts.is_empty());
    }

    #[test]
    fn every_boxed_id_is_also_in_the_approved_list() {
        let mut inv = Inventory::default();
        approve_n(&mut inv, BOX_CAPACITY + 3);
        register(&mut inv, 110.0, "azul", 15.0);

        let boxed = inv
            .sealed_boxes
            .iter()
            .flat_map(|b| b.parts.iter())
            .chain(inv.open_box.parts.iter());
        for id in boxed {
            assert!(inv.find_approved(*id).is_some());
        }
    }

    #[test]
    fn removal_from_open_box_keeps_counts_consistent() {
        let mut inv = Inventory::default();
        approve_n(&mut inv, 3);
        assert!(remove(&mut inv, 2));
        assert_eq!(inv.approved.len(), 2);
        assert_eq!(inv.open_box.parts, vec![1, 3]);
    }

    #[test]
    fn removal_from_sealed_box_leaves_it_under_capacity() {
        let mut inv = Inventory::default();
        approve_n(&mut inv, BOX_CAPACITY);
        assert!(remove(&mut inv, 3));
        // still sealed, now one short, never re-sealed or rebalanced
        assert_eq!(inv.sealed_boxes.len(), 1);
        assert_eq!(inv.sealed_boxes[0].parts.len(), BOX_CAPACITY - 1);
        assert!(inv.find_approved(3).is_none());
    }

    #[test]
    fn removal_of_rejected_part_works() {
        let mut inv = Inventory::default();
        register(&mut inv, 200.0, "azul", 15.0);
        assert!(remove(&mut inv, 1));
        assert!(inv.rejected.is_empty());
    }

    #[test]
    fn removal_of_unknown_id_changes_nothing() {
        let mut inv = Inventory::default();
        approve_n(&mut inv, 2);
        register(&mut inv, 200.0, "azul", 15.0);
        assert!(!remove(&mut inv, 42));
        assert_eq!(inv.approved.len(), 2);
        assert_eq!(inv.rejected.len(), 1);
        assert_eq!(inv.open_box.parts.len(), 2);
    }

    #[test]
    fn removal_never_renumbers_survivors() {
        let mut inv = Inventory::default();
        approve_n(&mut inv, 3);
        remove(&mut inv, 1);
        let next = register(&mut inv, 100.0, "azul", 15.0);
        assert_eq!(next.id, 4);
        assert_eq!(inv.approved.iter().map(|p| p.id).collect::<Vec<_>>(), vec![2, 3, 4]);
    }
}
