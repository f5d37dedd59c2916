//! Group member service
//!
//! Membership is managed through `/{groupId}/members` independently of the
//! group resource itself.

use std::sync::Arc;

use tracing::{debug, info};

use crate::models::group::{GroupMember, GroupMemberRequest};
use crate::services::auth::TokenProvider;
use crate::services::client::{to_body, ResourceClient};
use crate::services::response::decode;
use crate::services::transport::{HttpMethod, HttpTransport};
use crate::utils::errors::ApiResult;

#[derive(Clone)]
pub struct GroupMemberService {
    client: ResourceClient,
}

impl GroupMemberService {
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            client: ResourceClient::new("group_members", base_url, tokens, transport),
        }
    }

    pub async fn get_group_members(&self, group_id: i64) -> ApiResult<Vec<GroupMember>> {
        debug!(group_id = group_id, "Fetching group members");
        let url = self.client.url(&[&group_id.to_string(), "members"]);
        let payload = self
            .client
            .send("get_group_members", HttpMethod::Get, url, None)
            .await?;
        decode(payload)
    }

    pub async fn add_group_member(&self, group_id: i64, member: &GroupMemberRequest) -> ApiResult<GroupMember> {
        info!(group_id = group_id, user_id = %member.user_id, role = ?member.role, "Adding group member");
        let url = self.client.url(&[&group_id.to_string(), "members"]);
        let payload = self
            .client
            .send("add_group_member", HttpMethod::Post, url, Some(to_body(member)?))
            .await?;
        decode(payload)
    }

    /// Errors from the backend (e.g. unknown member) are returned as-is
    pub async fn remove_group_member(&self, group_id: i64, user_id: &str) -> ApiResult<()> {
        info!(group_id = group_id, user_id = user_id, "Removing group member");
        let url = self.client.url(&[&group_id.to_string(), "members", user_id]);
        self.client
            .send("remove_group_member", HttpMethod::Delete, url, None)
            .await?;
        Ok(())
    }

    pub async fn get_group_member(&self, group_id: i64, user_id: &str) -> ApiResult<GroupMember> {
        debug!(group_id = group_id, user_id = user_id, "Fetching group member");
        let url = self.client.url(&[&group_id.to_string(), "members", user_id]);
        let payload = self
            .client
            .send("get_group_member", HttpMethod::Get, url, None)
            .await?;
        decode(payload)
    }

    pub async fn update_group_member(
        &self,
        group_id: i64,
        user_id: &str,
        member: &GroupMemberRequest,
    ) -> ApiResult<GroupMember> {
        info!(group_id = group_id, user_id = user_id, role = ?member.role, "Updating group member");
        let url = self.client.url(&[&group_id.to_string(), "members", user_id]);
        let payload = self
            .client
            .send("update_group_member", HttpMethod::Put, url, Some(to_body(member)?))
            .await?;
        decode(payload)
    }
}
