use serde::Serialize;
use std::fmt;

/// Envelope for every `--json` output.
#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

/// Part identifier: positive, unique, monotonically assigned across
/// approved and rejected parts alike.
pub type PartId = u64;

/// A part that passed every quality criterion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Part {
    pub id: PartId,
    /// Grams.
    pub weight: f64,
    /// Normalized lowercase, member of `VALID_COLORS`.
    pub color: String,
    /// Centimeters.
    pub length: f64,
}

/// A part that failed inspection. Keeps its identifier and the first
/// failing criterion only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedPart {
    pub id: PartId,
    pub weight: f64,
    pub color: String,
    pub length: f64,
    pub reason: RejectReason,
}

/// First failing criterion, in fixed check order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RejectReason {
    #[serde(rename = "weight out of range")]
    WeightOutOfRange,
    #[serde(rename = "invalid color")]
    InvalidColor,
    #[serde(rename = "length out of range")]
    LengthOutOfRange,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RejectReason::WeightOutOfRange => "weight out of range",
            RejectReason::InvalidColor => "invalid color",
            RejectReason::LengthOutOfRange => "length out of range",
        };
        f.write_str(s)
    }
}

/// Inspection decision for one candidate part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "lowercase")]
pub enum Outcome {
    Accepted,
    Rejected(RejectReason),
}

/// What one registration attempt did to the inventory.
#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub id: PartId,
    #[serde(flatten)]
    pub outcome: Outcome,
    /// 1-based number of the box this registration sealed, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sealed_box: Option<usize>,
}

/// Ordered part identifiers in one storage box. The part records
/// themselves live only in `Inventory::approved`; boxes reference them
/// by id so the two views cannot drift apart.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct StorageBox {
    pub parts: Vec<PartId>,
}

/// Aggregate root for the whole inspection line. Owned by the command
/// layer and passed explicitly into every operation.
#[derive(Debug, Default)]
pub struct Inventory {
    /// Approved parts, insertion order.
    pub approved: Vec<Part>,
    /// Rejected parts, insertion order.
    pub rejected: Vec<RejectedPart>,
    /// The single in-progress box, `0..BOX_CAPACITY-1` parts between
    /// operations.
    pub open_box: StorageBox,
    /// Sealed boxes, oldest first. Exactly `BOX_CAPACITY` parts at
    /// sealing time; removal may shrink one afterwards.
    pub sealed_boxes: Vec<StorageBox>,
    /// Last identifier handed out; 0 before the first registration.
    pub last_id: PartId,
}

impl Inventory {
    /// Identifier the next parsed registration attempt will consume.
    /// Previewing does not allocate: a malformed attempt that never
    /// reaches `register` leaves the counter untouched.
    pub fn next_id(&self) -> PartId {
        self.last_id + 1
    }

    pub fn find_approved(&self, id: PartId) -> Option<&Part> {
        self.approved.iter().find(|p| p.id == id)
    }
}

/// Consolidated production report.
#[derive(Debug, Serialize)]
pub struct Report {
    pub total_processed: usize,
    pub approved: usize,
    pub rejected: usize,
    /// Percentage; 0.0 when nothing was processed.
    pub approval_rate: f64,
    pub sealed_boxes: usize,
    pub open_box_count: usize,
    pub box_capacity: usize,
    /// Present only when at least one part was rejected.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rejections: Option<RejectionBreakdown>,
}

#[derive(Debug, Serialize)]
pub struct RejectionBreakdown {
    /// One row per reason, ordered by first appearance.
    pub by_reason: Vec<ReasonCount>,
    /// Every rejected part, insertion order.
    pub parts: Vec<RejectedEntry>,
}

#[derive(Debug, Serialize)]
pub struct ReasonCount {
    pub reason: RejectReason,
    pub count: usize,
    /// Share of all rejected parts, percent.
    pub percentage: f64,
}

#[derive(Debug, Serialize)]
pub struct RejectedEntry {
    pub id: PartId,
    pub reason: RejectReason,
}

/// Payload of `partline demo --json`.
#[derive(Debug, Serialize)]
pub struct DemoRun {
    pub registrations: Vec<Registration>,
    pub report: Report,
}
