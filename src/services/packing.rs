use tracing::info;

use crate::domain::constants::BOX_CAPACITY;
use crate::domain::models::{Inventory, PartId};

/// Append an approved part to the open box; seal the box into the
/// sealed list once it reaches capacity and start a fresh one.
///
/// Sealing is synchronous with the approval that fills the box, so the
/// open box never holds `BOX_CAPACITY` parts between operations.
/// Returns the 1-based number of the box sealed by this append, if any.
pub fn pack(inv: &mut Inventory, id: PartId) -> Option<usize> {
    inv.open_box.parts.push(id);
    if inv.open_box.parts.len() < BOX_CAPACITY {
        return None;
    }

    let full = std::mem::take(&mut inv.open_box);
    inv.sealed_boxes.push(full);
    let box_number = inv.sealed_boxes.len();
    info!(box_number, capacity = BOX_CAPACITY, "storage box sealed");
    Some(box_number)
}
