use serde::{Deserialize, Serialize};

/// The closed set of camps. Fixed client-side in the original console and
/// fixed here too — camps are not stored, only referenced by assignments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Camp {
    #[serde(rename = "camp1")]
    Camp1,
    #[serde(rename = "camp2")]
    Camp2,
    #[serde(rename = "camp3")]
    Camp3,
    #[serde(rename = "camp4")]
    Camp4,
    #[serde(rename = "camp5")]
    Camp5,
    #[serde(rename = "camp6")]
    Camp6,
}

impl Camp {
    pub const ALL: [Camp; 6] = [
        Camp::Camp1,
        Camp::Camp2,
        Camp::Camp3,
        Camp::Camp4,
        Camp::Camp5,
        Camp::Camp6,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Camp::Camp1 => "camp1",
            Camp::Camp2 => "camp2",
            Camp::Camp3 => "camp3",
            Camp::Camp4 => "camp4",
            Camp::Camp5 => "camp5",
            Camp::Camp6 => "camp6",
        }
    }

    /// Display name as shown in the console UI.
    pub fn label(&self) -> &'static str {
        match self {
            Camp::Camp1 => "Trại 1",
            Camp::Camp2 => "Trại 2",
            Camp::Camp3 => "Trại 3",
            Camp::Camp4 => "Trại 4",
            Camp::Camp5 => "Trại 5",
            Camp::Camp6 => "Trại 6",
        }
    }

    pub fn parse(s: &str) -> Option<Camp> {
        Camp::ALL.iter().copied().find(|c| c.as_str() == s)
    }
}

/// Participant role. Doubles as the slot-group a participant may occupy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "leader")]
    Leader,
    #[serde(rename = "supporter")]
    Supporter,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Leader => "leader",
            Role::Supporter => "supporter",
        }
    }

    pub fn parse(s: &str) -> Option<Role> {
        match s {
            "leader" => Some(Role::Leader),
            "supporter" => Some(Role::Supporter),
            _ => None,
        }
    }
}

/// The leader or supporter sub-area of one camp. Same value space as `Role`;
/// kept as its own type so "where a participant may sit" and "what a
/// participant is" stay distinct at the seams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotGroup {
    #[serde(rename = "leader")]
    Leader,
    #[serde(rename = "supporter")]
    Supporter,
}

impl SlotGroup {
    /// Fixed seat counts: 8 leaders, 3 supporters per camp.
    pub fn capacity(&self) -> usize {
        match self {
            SlotGroup::Leader => 8,
            SlotGroup::Supporter => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SlotGroup::Leader => "leader",
            SlotGroup::Supporter => "supporter",
        }
    }

    pub fn parse(s: &str) -> Option<SlotGroup> {
        match s {
            "leader" => Some(SlotGroup::Leader),
            "supporter" => Some(SlotGroup::Supporter),
            _ => None,
        }
    }

    pub fn admits(&self, role: Role) -> bool {
        matches!(
            (self, role),
            (SlotGroup::Leader, Role::Leader) | (SlotGroup::Supporter, Role::Supporter)
        )
    }
}

impl From<Role> for SlotGroup {
    fn from(role: Role) -> Self {
        match role {
            Role::Leader => SlotGroup::Leader,
            Role::Supporter => SlotGroup::Supporter,
        }
    }
}
