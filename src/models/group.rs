//! Group model

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GroupRole {
    Admin,
    Member,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMember {
    #[serde(rename = "groupMemberID", default, skip_serializing_if = "Option::is_none")]
    pub group_member_id: Option<i64>,
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub role: GroupRole,
}

/// Event reference held by a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupEvent {
    #[serde(rename = "eventID", default, skip_serializing_if = "Option::is_none")]
    pub event_id: Option<i64>,
    #[serde(rename = "globalEventID")]
    pub global_event_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "groupID")]
    pub group_id: i64,
    #[serde(rename = "groupName")]
    pub group_name: String,
    #[serde(rename = "isPrivate")]
    pub is_private: bool,
    #[serde(rename = "groupMembers", default)]
    pub group_members: Vec<GroupMember>,
    #[serde(default)]
    pub events: Vec<GroupEvent>,
    #[serde(rename = "memberCount", default)]
    pub member_count: u32,
}

/// Payload for creating or updating a group
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupRequest {
    #[serde(rename = "groupName")]
    pub group_name: String,
    #[serde(rename = "isPrivate")]
    pub is_private: bool,
    #[serde(rename = "groupMembers")]
    pub group_members: Vec<GroupMember>,
    pub events: Vec<GroupEvent>,
}

impl GroupRequest {
    /// New group whose creator is its first and only ADMIN
    pub fn new(group_name: impl Into<String>, is_private: bool, creator_id: impl Into<String>, creator_name: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            is_private,
            group_members: vec![GroupMember {
                group_member_id: None,
                user_id: creator_id.into(),
                user_name: creator_name.into(),
                role: GroupRole::Admin,
            }],
            events: Vec::new(),
        }
    }
}

impl From<&Group> for GroupRequest {
    fn from(group: &Group) -> Self {
        Self {
            group_name: group.group_name.clone(),
            is_private: group.is_private,
            group_members: group.group_members.clone(),
            events: group.events.clone(),
        }
    }
}

/// Payload for adding or updating a single group member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupMemberRequest {
    #[serde(rename = "userID")]
    pub user_id: String,
    #[serde(rename = "userName")]
    pub user_name: String,
    pub role: GroupRole,
}
