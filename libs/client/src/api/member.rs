use common::ClientResult;
use reqwest::Method;

use crate::http::AuthClient;
use crate::models::{Member, Point, PointType, UpdateProfile};

/// Profile and points of the logged-in member
#[derive(Clone)]
pub struct MemberApi {
    client: AuthClient,
}

impl MemberApi {
    pub fn new(client: AuthClient) -> Self {
        Self { client }
    }

    pub async fn my_profile(&self) -> ClientResult<Member> {
        Ok(self.client.get("member/my").await?.data)
    }

    pub async fn update_info(&self, update: &UpdateProfile) -> ClientResult<()> {
        self.client
            .execute(self.client.builder(Method::PATCH, "member/info").json(update))
            .await
    }

    pub async fn my_points(&self, point_type: PointType) -> ClientResult<Point> {
        let response = self
            .client
            .get_with_query("point/score/my", &[("type", point_type.as_str())])
            .await?;
        Ok(response.data)
    }
}
