use anyhow::Context;
use async_trait::async_trait;
use reqwest::StatusCode;

use crate::api::{
    CommentApi, CommentId, CommentPageData, ItemId, NewComment, SubmitCommentResponse,
    VoteDirection, VoteRequest, VoteResponse,
};

/// `CommentApi` talking to the site's JSON endpoints
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    host: String,
    token: Option<String>,
}

impl HttpApi {
    pub fn new(host: impl Into<String>) -> HttpApi {
        HttpApi {
            client: reqwest::Client::new(),
            host: host.into().trim_end_matches('/').to_string(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: Option<String>) -> HttpApi {
        self.token = token;
        self
    }

    fn post(&self, endpoint: &str) -> reqwest::RequestBuilder {
        let req = self
            .client
            .post(format!("{}/comments/{}", self.host, endpoint));
        match &self.token {
            Some(t) => req.bearer_auth(t),
            None => req,
        }
    }

    pub async fn fetch_comment_page(&self, id: &CommentId) -> anyhow::Result<CommentPageData> {
        let mut req = self
            .client
            .get(format!("{}/comments/get-comment-page-data", self.host))
            .query(&[("id", &id.0)]);
        if let Some(t) = &self.token {
            req = req.bearer_auth(t);
        }
        req.send()
            .await
            .with_context(|| format!("fetching comment {id}"))?
            .error_for_status()
            .with_context(|| format!("fetching comment {id}"))?
            .json()
            .await
            .with_context(|| format!("parsing comment {id}"))
    }

    async fn vote(
        &self,
        direction: VoteDirection,
        id: &CommentId,
        parent_item_id: &ItemId,
    ) -> anyhow::Result<VoteResponse> {
        let resp = self
            .post(direction.endpoint())
            .json(&VoteRequest {
                id: id.clone(),
                parent_item_id: parent_item_id.clone(),
            })
            .send()
            .await
            .with_context(|| format!("sending {} for comment {id}", direction.endpoint()))?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            return Ok(VoteResponse {
                auth_error: true,
                ..Default::default()
            });
        }
        resp.json()
            .await
            .with_context(|| format!("parsing {} response", direction.endpoint()))
    }
}

#[async_trait(?Send)]
impl CommentApi for HttpApi {
    async fn submit_comment(&self, comment: NewComment) -> anyhow::Result<SubmitCommentResponse> {
        let resp = self
            .post("add-new-comment")
            .json(&comment)
            .send()
            .await
            .context("submitting comment")?;
        if resp.status() == StatusCode::UNAUTHORIZED {
            return Ok(SubmitCommentResponse {
                auth_error: true,
                ..Default::default()
            });
        }
        resp.json().await.context("parsing comment submission response")
    }

    async fn upvote_comment(
        &self,
        id: &CommentId,
        parent_item_id: &ItemId,
    ) -> anyhow::Result<VoteResponse> {
        self.vote(VoteDirection::Up, id, parent_item_id).await
    }

    async fn downvote_comment(
        &self,
        id: &CommentId,
        parent_item_id: &ItemId,
    ) -> anyhow::Result<VoteResponse> {
        self.vote(VoteDirection::Down, id, parent_item_id).await
    }
}
