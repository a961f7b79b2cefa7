// Group module
// Squad membership model and invite tokens

use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GroupError {
    #[error("group name cannot be empty")]
    EmptyName,
}

/// A member of a squad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub display_name: String,
}

impl Member {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            display_name: display_name.into(),
        }
    }
}

/// A squad: the set of friends sharing one calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: Uuid,
    pub name: String,
    pub members: Vec<Member>,
}

impl Group {
    pub fn new(name: impl Into<String>) -> Result<Self, GroupError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(GroupError::EmptyName);
        }
        Ok(Self {
            id: Uuid::new_v4(),
            name,
            members: Vec::new(),
        })
    }

    /// Add a member. Joining twice is a no-op.
    pub fn add_member(&mut self, member: Member) {
        if !self.is_member(member.id) {
            self.members.push(member);
        }
    }

    /// Remove a member by id. Unknown ids are ignored.
    pub fn remove_member(&mut self, member_id: Uuid) {
        self.members.retain(|m| m.id != member_id);
    }

    pub fn is_member(&self, member_id: Uuid) -> bool {
        self.members.iter().any(|m| m.id == member_id)
    }
}

/// A shareable invitation to join a group, identified by a one-time token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InviteLink {
    pub token: Uuid,
    pub group_id: Uuid,
}

impl InviteLink {
    /// Mint a fresh invite token for the given group.
    pub fn generate(group_id: Uuid) -> Self {
        Self {
            token: Uuid::new_v4(),
            group_id,
        }
    }
}
