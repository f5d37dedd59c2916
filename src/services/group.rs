//! Group service

use std::sync::Arc;

use tracing::{debug, info};

use crate::models::group::{Group, GroupRequest};
use crate::services::auth::TokenProvider;
use crate::services::client::{to_body, ResourceClient};
use crate::services::response::{classify_outcome, decode};
use crate::services::transport::{HttpMethod, HttpTransport};
use crate::utils::errors::{ApiError, ApiResult};

#[derive(Clone)]
pub struct GroupService {
    client: ResourceClient,
}

impl GroupService {
    pub fn new(
        base_url: impl Into<String>,
        tokens: Arc<dyn TokenProvider>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            client: ResourceClient::new("groups", base_url, tokens, transport),
        }
    }

    /// Create a group. A 409 means the name is taken and wins over the
    /// backend's conflict message.
    pub async fn create_group(&self, request: &GroupRequest) -> ApiResult<Group> {
        info!(group_name = %request.group_name, "Creating group");
        let body = to_body(request)?;
        let outcome = self
            .client
            .execute(HttpMethod::Post, self.client.url(&[]), Some(body))
            .await;

        let result = match outcome {
            Ok(outcome) if outcome.status() == Some(409) => Err(ApiError::GroupNameExists),
            Ok(outcome) => classify_outcome(outcome).and_then(decode),
            Err(e) => Err(e),
        };
        if let Err(e) = &result {
            self.client.log_failure("create_group", e);
        }
        result
    }

    pub async fn get_groups(&self) -> ApiResult<Vec<Group>> {
        debug!("Fetching all groups");
        let payload = self
            .client
            .send("get_groups", HttpMethod::Get, self.client.url(&[]), None)
            .await?;
        decode(payload)
    }

    pub async fn get_group(&self, group_id: i64) -> ApiResult<Group> {
        debug!(group_id = group_id, "Fetching group");
        let url = self.client.url(&[&group_id.to_string()]);
        let payload = self.client.send("get_group", HttpMethod::Get, url, None).await?;
        decode(payload)
    }

    pub async fn update_group(&self, group_id: i64, request: &GroupRequest) -> ApiResult<Group> {
        info!(group_id = group_id, group_name = %request.group_name, "Updating group");
        let url = self.client.url(&[&group_id.to_string()]);
        let payload = self
            .client
            .send("update_group", HttpMethod::Put, url, Some(to_body(request)?))
            .await?;
        decode(payload)
    }

    pub async fn delete_group(&self, group_id: i64) -> ApiResult<()> {
        info!(group_id = group_id, "Deleting group");
        let url = self.client.url(&[&group_id.to_string()]);
        self.client.send("delete_group", HttpMethod::Delete, url, None).await?;
        Ok(())
    }

    /// Groups the user belongs to
    pub async fn get_groups_by_user(&self, user_id: &str) -> ApiResult<Vec<Group>> {
        debug!(user_id = user_id, "Fetching groups for user");
        let url = self.client.url(&["user", user_id]);
        let payload = self
            .client
            .send("get_groups_by_user", HttpMethod::Get, url, None)
            .await?;
        decode(payload)
    }
}
