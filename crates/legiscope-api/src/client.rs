use std::path::Path;

use serde::de::DeserializeOwned;

use legiscope_types::{
    ActivityFeed, ActivityItem, ChatReply, Commission, CommissionList, CommissionSessions,
    HealthStatus, KomProfile, NewsFeed, NewsItem, Politician, PoliticianList, ProfileEnvelope,
    SaveReceipt, SessionsEnvelope, TranscriptEnvelope, UploadReceipt,
};

use crate::error::{Error, Result};

/// HTTP client for the Observatorio Politico backend.
///
/// One method per documented endpoint. Calls are independent awaited fetches:
/// no retries, no timeouts, no de-duplication of concurrent requests for the
/// same resource - exactly the dashboard's network model.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                body,
            });
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<T> {
        let response = self.http.get(self.url(path)).query(query).send().await?;
        Self::decode(response).await
    }

    /// `GET /api/health`
    pub async fn health(&self) -> Result<HealthStatus> {
        self.get_json("/api/health", &[]).await
    }

    /// `GET /api/commissions?group=&q=`
    pub async fn commissions(&self, group: &str, q: &str) -> Result<Vec<Commission>> {
        let list: CommissionList = self
            .get_json("/api/commissions", &[("group", group), ("q", q)])
            .await?;
        Ok(list.items)
    }

    /// `GET /api/commissions/{group}/{name}/sessions`
    pub async fn commission_sessions(
        &self,
        group: &str,
        commission_name: &str,
    ) -> Result<CommissionSessions> {
        let path = format!("/api/commissions/{}/{}/sessions", group, commission_name);
        let envelope: SessionsEnvelope = self.get_json(&path, &[]).await?;
        if !envelope.success {
            return Err(Error::Backend(
                envelope
                    .error
                    .unwrap_or_else(|| "session history unavailable".to_string()),
            ));
        }
        Ok(envelope.commission)
    }

    /// `GET /api/commissions/{group}/{name}/sessions/{sid}/transcript`
    pub async fn transcript(
        &self,
        group: &str,
        commission_name: &str,
        session_id: &str,
    ) -> Result<String> {
        let path = format!(
            "/api/commissions/{}/{}/sessions/{}/transcript",
            group, commission_name, session_id
        );
        let envelope: TranscriptEnvelope = self.get_json(&path, &[]).await?;
        if !envelope.success {
            return Err(Error::Backend(
                envelope
                    .error
                    .unwrap_or_else(|| "transcript unavailable".to_string()),
            ));
        }
        Ok(envelope.text)
    }

    /// `GET /api/politicians?q=`
    pub async fn politicians(&self, q: &str) -> Result<Vec<Politician>> {
        let list: PoliticianList = self.get_json("/api/politicians", &[("q", q)]).await?;
        Ok(list.politicians)
    }

    /// `GET /api/kom/{chamber}/{id}`
    ///
    /// Missing profiles come back as a success envelope with a skeleton
    /// profile, so callers always receive a usable (possibly empty) record.
    pub async fn kom_profile(&self, chamber: &str, id: &str) -> Result<KomProfile> {
        let path = format!("/api/kom/{}/{}", chamber, id);
        let envelope: ProfileEnvelope = self.get_json(&path, &[]).await?;
        if !envelope.success {
            return Err(Error::Backend(
                envelope
                    .error
                    .unwrap_or_else(|| "profile unavailable".to_string()),
            ));
        }
        Ok(envelope.profile)
    }

    /// `POST /api/kom/{chamber}/{id}` - persist the full draft atomically.
    pub async fn save_kom_profile(
        &self,
        chamber: &str,
        id: &str,
        profile: &KomProfile,
    ) -> Result<()> {
        let path = format!("/api/kom/{}/{}", chamber, id);
        let response = self.http.post(self.url(&path)).json(profile).send().await?;
        let receipt: SaveReceipt = Self::decode(response).await?;
        if !receipt.success {
            return Err(Error::Backend(
                receipt.error.unwrap_or_else(|| "save failed".to_string()),
            ));
        }
        Ok(())
    }

    /// `GET /api/activity?group=&status=&q=`
    pub async fn activity(
        &self,
        group: &str,
        status: &str,
        q: &str,
    ) -> Result<Vec<ActivityItem>> {
        let feed: ActivityFeed = self
            .get_json(
                "/api/activity",
                &[("group", group), ("status", status), ("q", q)],
            )
            .await?;
        Ok(feed.items)
    }

    /// `GET /api/news?source=&q=`
    pub async fn news(&self, source: &str, q: &str) -> Result<Vec<NewsItem>> {
        let feed: NewsFeed = self
            .get_json("/api/news", &[("source", source), ("q", q)])
            .await?;
        Ok(feed.items)
    }

    /// `POST /api/chat {message}` - ask the legislative agent.
    pub async fn chat(&self, message: &str) -> Result<String> {
        if legiscope_types::is_blank(message) {
            return Err(Error::InvalidInput("message is required".to_string()));
        }
        let body = serde_json::json!({ "message": message });
        let response = self
            .http
            .post(self.url("/api/chat"))
            .json(&body)
            .send()
            .await?;
        let reply: ChatReply = Self::decode(response).await?;
        if !reply.success {
            return Err(Error::Backend(
                reply.error.unwrap_or_else(|| "chat failed".to_string()),
            ));
        }
        Ok(reply.response)
    }

    /// `POST /api/upload` (multipart, field `file`).
    pub async fn upload(&self, path: &Path) -> Result<String> {
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload.bin".to_string());

        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
        let form = reqwest::multipart::Form::new().part("file", part);

        let response = self
            .http
            .post(self.url("/api/upload"))
            .multipart(form)
            .send()
            .await?;
        let receipt: UploadReceipt = Self::decode(response).await?;
        if !receipt.success {
            return Err(Error::Backend(
                receipt.error.unwrap_or_else(|| "upload failed".to_string()),
            ));
        }
        receipt
            .saved_as
            .ok_or_else(|| Error::Backend("upload succeeded without a saved name".to_string()))
    }
}
