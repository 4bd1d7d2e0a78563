//! In-memory camp assignment board.
//!
//! The board owns the participant → (camp, slot-group, position) mapping and is
//! the only place move semantics live. A move is *planned* first (pure, no
//! mutation), persisted by the caller, and only then *applied* — a failed
//! persistence leaves the board exactly as it was. Handlers serialize all
//! mutations through one `Mutex<AssignmentBoard>`, so a second drag always
//! bases its plan on the first drag's applied result.

use std::collections::HashMap;
use std::fmt;

use crate::models::camp::{Camp, Role, SlotGroup};

pub type ParticipantId = i64;

/// Where a participant sits: one camp, one slot-group, one zero-based seat.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub camp: Camp,
    pub group: SlotGroup,
    pub position: usize,
}

/// Target of a move: a concrete seat, or back to the unassigned pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Unassigned,
    Seat {
        camp: Camp,
        group: SlotGroup,
        position: usize,
    },
}

/// Why a move was rejected. Rejections are no-ops: the board is untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    UnknownParticipant(ParticipantId),
    NotAssigned(ParticipantId),
    RoleMismatch { role: Role, group: SlotGroup },
    CapacityExceeded { camp: Camp, group: SlotGroup },
    PositionOutOfRange { group: SlotGroup, position: usize },
    DuplicatePosition { position: usize },
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::UnknownParticipant(id) => write!(f, "Unknown participant {id}"),
            MoveError::NotAssigned(id) => write!(f, "Participant {id} has no assignment"),
            MoveError::RoleMismatch { role, group } => write!(
                f,
                "A {} cannot be placed in the {} area",
                role.as_str(),
                group.as_str()
            ),
            MoveError::CapacityExceeded { camp, group } => write!(
                f,
                "The {} area of {} is already full",
                group.as_str(),
                camp.label()
            ),
            MoveError::PositionOutOfRange { group, position } => write!(
                f,
                "Position {position} is outside the {} area (capacity {})",
                group.as_str(),
                group.capacity()
            ),
            MoveError::DuplicatePosition { position } => {
                write!(f, "Position {position} given to more than one participant")
            }
        }
    }
}

impl std::error::Error for MoveError {}

/// The set of placement changes a planned operation produces. Applied to the
/// board only after the same changes have been committed to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    /// New placements, moved participant included.
    pub changed: Vec<(ParticipantId, Placement)>,
    /// Participant whose assignment is deleted outright.
    pub removed: Option<ParticipantId>,
}

impl MoveOutcome {
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty() && self.removed.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub struct AssignmentBoard {
    roles: HashMap<ParticipantId, Role>,
    placements: HashMap<ParticipantId, Placement>,
}

impl AssignmentBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a participant (or update its role after an edit). A role
    /// change drops any placement, since it could no longer be occupied.
    pub fn set_participant(&mut self, id: ParticipantId, role: Role) {
        let previous = self.roles.insert(id, role);
        if previous.is_some() && previous != Some(role) {
            self.placements.remove(&id);
        }
    }

    /// Forget a participant entirely, placement included.
    pub fn remove_participant(&mut self, id: ParticipantId) {
        self.roles.remove(&id);
        self.placements.remove(&id);
    }

    /// Seed a placement as loaded from the store. Rows referencing unknown
    /// participants are dropped by the caller; positions are not trusted
    /// until `normalize` has run.
    pub fn seed_placement(&mut self, id: ParticipantId, placement: Placement) {
        if self.roles.contains_key(&id) {
            self.placements.insert(id, placement);
        }
    }

    pub fn placement(&self, id: ParticipantId) -> Option<Placement> {
        self.placements.get(&id).copied()
    }

    pub fn role(&self, id: ParticipantId) -> Option<Role> {
        self.roles.get(&id).copied()
    }

    pub fn assigned_count(&self) -> usize {
        self.placements.len()
    }

    fn members(&self, camp: Camp, group: SlotGroup) -> Vec<(ParticipantId, Placement)> {
        let mut members: Vec<_> = self
            .placements
            .iter()
            .filter(|(_, p)| p.camp == camp && p.group == group)
            .map(|(id, p)| (*id, *p))
            .collect();
        members.sort_by_key(|(id, p)| (p.position, *id));
        members
    }

    pub fn occupancy(&self, camp: Camp, group: SlotGroup) -> usize {
        self.placements
            .values()
            .filter(|p| p.camp == camp && p.group == group)
            .count()
    }

    /// Rendering contract: a capacity-length row of seats, each either a
    /// participant or an empty slot. Valid once `normalize` has run.
    pub fn grid(&self, camp: Camp, group: SlotGroup) -> Vec<Option<ParticipantId>> {
        let mut cells = vec![None; group.capacity()];
        for (id, placement) in self.members(camp, group) {
            if placement.position < cells.len() && cells[placement.position].is_none() {
                cells[placement.position] = Some(id);
            }
        }
        cells
    }

    /// Participants with no placement, filtered by role — the "unassigned
    /// pool" of the console, in id order.
    pub fn unassigned(&self, role: Role) -> Vec<ParticipantId> {
        let mut ids: Vec<_> = self
            .roles
            .iter()
            .filter(|(id, r)| **r == role && !self.placements.contains_key(id))
            .map(|(id, _)| *id)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// Compact out-of-range or colliding stored positions into the first free
    /// seats, one group at a time. Runs once when the board is loaded; the
    /// returned changes must be written back to the store. After this the
    /// board invariants hold: positions unique and `< capacity` per group.
    pub fn normalize(&mut self) -> Vec<(ParticipantId, Placement)> {
        let mut changed = Vec::new();
        for camp in Camp::ALL {
            for group in [SlotGroup::Leader, SlotGroup::Supporter] {
                let capacity = group.capacity();
                let mut taken = vec![false; capacity];
                let mut displaced = Vec::new();
                for (id, placement) in self.members(camp, group) {
                    if placement.position < capacity && !taken[placement.position] {
                        taken[placement.position] = true;
                    } else {
                        displaced.push((id, placement));
                    }
                }
                for (id, mut placement) in displaced {
                    // occupancy never exceeds capacity, so a free seat exists
                    if let Some(free) = taken.iter().position(|t| !t) {
                        taken[free] = true;
                        placement.position = free;
                        self.placements.insert(id, placement);
                        changed.push((id, placement));
                    }
                }
            }
        }
        changed
    }

    /// Plan "move participant to destination" without mutating the board.
    ///
    /// Same-group move: seats strictly between the old and new position slide
    /// toward the hole the participant left. Arriving from elsewhere: seats at
    /// or after the target slide up one to open a gap; anyone pushed past the
    /// last seat is compacted back into the first free one.
    pub fn plan_move(
        &self,
        id: ParticipantId,
        dest: Destination,
    ) -> Result<MoveOutcome, MoveError> {
        let role = self
            .role(id)
            .ok_or(MoveError::UnknownParticipant(id))?;

        let (camp, group, position) = match dest {
            Destination::Unassigned => {
                let removed = self.placements.contains_key(&id).then_some(id);
                return Ok(MoveOutcome {
                    changed: Vec::new(),
                    removed,
                });
            }
            Destination::Seat {
                camp,
                group,
                position,
            } => (camp, group, position),
        };

        if !group.admits(role) {
            return Err(MoveError::RoleMismatch { role, group });
        }
        if position >= group.capacity() {
            return Err(MoveError::PositionOutOfRange { group, position });
        }

        let current = self.placement(id);
        let same_group = matches!(current, Some(p) if p.camp == camp && p.group == group);

        // A move within its own group never counts against capacity for itself.
        if !same_group && self.occupancy(camp, group) >= group.capacity() {
            return Err(MoveError::CapacityExceeded { camp, group });
        }

        let mut changed = Vec::new();

        if same_group {
            let old = current.expect("same_group implies placement").position;
            if old == position {
                return Ok(MoveOutcome::default());
            }
            for (other, mut placement) in self.members(camp, group) {
                if other == id {
                    continue;
                }
                let p = placement.position;
                if old < position && p > old && p <= position {
                    placement.position = p - 1;
                    changed.push((other, placement));
                } else if old > position && p >= position && p < old {
                    placement.position = p + 1;
                    changed.push((other, placement));
                }
            }
        } else {
            // Open a gap at the target seat.
            let capacity = group.capacity();
            let mut taken = vec![false; capacity + 1];
            let mut shifted = Vec::new();
            for (other, mut placement) in self.members(camp, group) {
                if placement.position >= position {
                    placement.position += 1;
                    shifted.push((other, placement));
                } else {
                    taken[placement.position] = true;
                }
            }
            taken[position] = true; // the seat being claimed
            // Seats pushed past the end fall back into the first free one.
            for (other, mut placement) in shifted {
                if placement.position >= capacity {
                    if let Some(free) = taken.iter().take(capacity).position(|t| !t) {
                        placement.position = free;
                    }
                }
                taken[placement.position] = true;
                changed.push((other, placement));
            }
        }

        changed.push((
            id,
            Placement {
                camp,
                group,
                position,
            },
        ));
        Ok(MoveOutcome {
            changed,
            removed: None,
        })
    }

    /// Plan an explicit batch reorder: new positions for already-assigned
    /// participants, each within its current (camp, slot-group). The batch is
    /// validated as a whole and rejected atomically on any violation.
    pub fn plan_reorder(
        &self,
        items: &[(ParticipantId, usize)],
    ) -> Result<MoveOutcome, MoveError> {
        let mut changed = Vec::new();
        let mut claimed: HashMap<(Camp, SlotGroup, usize), ParticipantId> = HashMap::new();

        for &(id, position) in items {
            if self.role(id).is_none() {
                return Err(MoveError::UnknownParticipant(id));
            }
            let mut placement = self.placement(id).ok_or(MoveError::NotAssigned(id))?;
            if position >= placement.group.capacity() {
                return Err(MoveError::PositionOutOfRange {
                    group: placement.group,
                    position,
                });
            }
            if claimed
                .insert((placement.camp, placement.group, position), id)
                .is_some()
            {
                return Err(MoveError::DuplicatePosition { position });
            }
            if placement.position != position {
                placement.position = position;
                changed.push((id, placement));
            }
        }

        // Untouched members must not collide with a newly claimed seat.
        let moved: Vec<ParticipantId> = items.iter().map(|(id, _)| *id).collect();
        for (id, placement) in &self.placements {
            if moved.contains(id) {
                continue;
            }
            if let Some(claimant) =
                claimed.get(&(placement.camp, placement.group, placement.position))
            {
                if claimant != id {
                    return Err(MoveError::DuplicatePosition {
                        position: placement.position,
                    });
                }
            }
        }

        Ok(MoveOutcome {
            changed,
            removed: None,
        })
    }

    /// Apply a committed outcome. Infallible by construction: outcomes come
    /// from `plan_move`/`plan_reorder` against this same board state.
    pub fn apply(&mut self, outcome: &MoveOutcome) {
        if let Some(id) = outcome.removed {
            self.placements.remove(&id);
        }
        for (id, placement) in &outcome.changed {
            self.placements.insert(*id, *placement);
        }
    }
}
