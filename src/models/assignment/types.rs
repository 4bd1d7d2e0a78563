use serde::{Deserialize, Serialize};

use super::board::{MoveOutcome, Placement};
use crate::models::camp::{Camp, Role, SlotGroup};

/// Assignment row as listed by the API, participant details joined in.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentDisplay {
    pub participant_id: i64,
    pub participant_name: String,
    pub role: Role,
    pub camp_id: Camp,
    pub slot_group: SlotGroup,
    pub position: usize,
    pub updated_at: String,
}

/// Move request. `campId: null` (or absent) sends the participant back to the
/// unassigned pool; otherwise slot group and position are required.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveRequest {
    pub participant_id: i64,
    pub camp_id: Option<Camp>,
    pub slot_group: Option<SlotGroup>,
    pub position: Option<usize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReorderItem {
    pub participant_id: i64,
    pub position: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangedPlacement {
    pub participant_id: i64,
    pub camp_id: Camp,
    pub slot_group: SlotGroup,
    pub position: usize,
}

/// Echo of a committed move: everything that changed, so the console can
/// reconcile without a refetch.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveResponse {
    pub changed: Vec<ChangedPlacement>,
    pub removed: Option<i64>,
}

impl MoveResponse {
    pub fn from_outcome(outcome: &MoveOutcome) -> Self {
        MoveResponse {
            changed: outcome
                .changed
                .iter()
                .map(|(id, p)| ChangedPlacement {
                    participant_id: *id,
                    camp_id: p.camp,
                    slot_group: p.group,
                    position: p.position,
                })
                .collect(),
            removed: outcome.removed,
        }
    }
}

/// One seat of the rendered board: a participant or an explicit empty slot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatView {
    pub participant_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CampView {
    pub camp_id: Camp,
    pub label: &'static str,
    /// Exactly 8 cells.
    pub leaders: Vec<Option<SeatView>>,
    /// Exactly 3 cells.
    pub supporters: Vec<Option<SeatView>>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub camps: Vec<CampView>,
    pub unassigned_leaders: Vec<SeatView>,
    pub unassigned_supporters: Vec<SeatView>,
}

/// Raw stored row, before it is checked against the participant set.
#[derive(Debug, Clone)]
pub struct StoredAssignment {
    pub participant_id: i64,
    pub camp: String,
    pub slot_group: String,
    pub position: i64,
}

impl StoredAssignment {
    pub fn placement(&self) -> Option<Placement> {
        Some(Placement {
            camp: Camp::parse(&self.camp)?,
            group: SlotGroup::parse(&self.slot_group)?,
            position: usize::try_from(self.position).ok()?,
        })
    }
}
