//! HTTP client for the orchestrator API

use async_trait::async_trait;
use futures_util::stream;
use log::debug;
use reqwest::{header, Body, Client as HttpClient, StatusCode};
use serde::Serialize;
use tokio::io::AsyncReadExt;
use url::Url;
use uuid::Uuid;
use crate::error::{OrchestratorError, Result};
use crate::uplet::{UpletStatus, UpletType};
use super::config::ClientConfig;
use super::{
    Orchestrator, ResultReader, LEARN_RESULT_LABEL, LEARN_RESULT_ROUTE, PRED_RESULT_LABEL,
    PRED_RESULT_ROUTE, STATUS_UPDATE_LABEL, STATUS_UPDATE_ROUTE,
};

const BODY_CHUNK_SIZE: usize = 8 * 1024;

/// Status update payload
#[derive(Serialize, Debug)]
struct StatusUpdate<'a> {
    status: &'a str,
}

/// Wrapper around the orchestrator HTTP API
#[derive(Clone, Debug)]
pub struct OrchestratorApi {
    config: ClientConfig,
    http_client: HttpClient,
}

impl OrchestratorApi {
    /// Creates a new orchestrator API client
    ///
    /// # Arguments
    ///
    /// * `config` - Host and port of the orchestrator
    ///
    /// # Example
    ///
    /// ```rust
    /// use morpheo_orchestrator_client::orchestrator::{ClientConfig, OrchestratorApi};
    ///
    /// let api = OrchestratorApi::new(ClientConfig::new("localhost", 8080));
    /// assert_eq!(api.config().port(), 8080);
    /// ```
    pub fn new(config: ClientConfig) -> Self {
        Self::with_http_client(config, HttpClient::new())
    }

    /// Creates a client on top of a preconfigured `reqwest::Client`
    ///
    /// Timeouts and other transport settings belong to `http_client`; this
    /// client adds none of its own.
    ///
    /// # Arguments
    ///
    /// * `config` - Host and port of the orchestrator
    /// * `http_client` - The client every request is sent through
    ///
    /// # Example
    ///
    /// ```rust
    /// use morpheo_orchestrator_client::orchestrator::{ClientConfig, OrchestratorApi};
    /// use std::time::Duration;
    ///
    /// let http_client = reqwest::Client::builder()
    ///     .timeout(Duration::from_secs(10))
    ///     .build()?;
    /// let api = OrchestratorApi::with_http_client(ClientConfig::new("localhost", 8080), http_client);
    /// assert_eq!(api.config().host(), "localhost");
    /// # Ok::<(), reqwest::Error>(())
    /// ```
    pub fn with_http_client(config: ClientConfig, http_client: HttpClient) -> Self {
        Self { config, http_client }
    }

    /// Configuration every request URL is derived from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `http://{host}:{port}/update_status/{uplet_type}/{uplet_id}`
    pub(crate) fn status_update_url(&self, uplet_type: UpletType, uplet_id: Uuid) -> Result<Url> {
        let raw = format!(
            "{}{}/{}/{}",
            self.config.base_url(),
            STATUS_UPDATE_ROUTE,
            uplet_type,
            uplet_id
        );
        parse_url(STATUS_UPDATE_LABEL, raw)
    }

    /// `http://{host}:{port}{route}/{uplet_id}`
    pub(crate) fn result_url(&self, label: &'static str, route: &str, uplet_id: Uuid) -> Result<Url> {
        let raw = format!("{}{}/{}", self.config.base_url(), route, uplet_id);
        parse_url(label, raw)
    }

    async fn post_data(
        &self,
        label: &'static str,
        route: &str,
        uplet_id: Uuid,
        data: ResultReader,
    ) -> Result<()> {
        let url = self.result_url(label, route, uplet_id)?;
        self.post(label, url, reader_body(data)).await
    }

    /// Sends a single POST and accepts nothing but 200 OK
    async fn post(&self, label: &'static str, url: Url, body: Body) -> Result<()> {
        let target = url.to_string();
        debug!("[orchestrator-api] Sending {} POST request to {}", label, target);

        let request = self
            .http_client
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .build()
            .map_err(|source| OrchestratorError::RequestBuild {
                route: label,
                url: target.clone(),
                source,
            })?;

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|source| OrchestratorError::Transport {
                route: label,
                url: target.clone(),
                source,
            })?;

        if response.status() != StatusCode::OK {
            return Err(OrchestratorError::UnexpectedStatus {
                route: label,
                url: target,
                status: response.status(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl Orchestrator for OrchestratorApi {
    async fn update_uplet_status(&self, uplet_type: &str, status: &str, uplet_id: Uuid) -> Result<()> {
        let uplet_type = UpletType::parse(uplet_type)?;
        let status = UpletStatus::parse(status)?;

        let url = self.status_update_url(uplet_type, uplet_id)?;
        let payload = serde_json::to_vec(&StatusUpdate {
            status: status.as_str(),
        })?;

        self.post(STATUS_UPDATE_LABEL, url, Body::from(payload)).await
    }

    async fn post_learn_result(&self, learnuplet_id: Uuid, data: ResultReader) -> Result<()> {
        self.post_data(LEARN_RESULT_LABEL, LEARN_RESULT_ROUTE, learnuplet_id, data)
            .await
    }

    async fn post_pred_result(&self, preduplet_id: Uuid, data: ResultReader) -> Result<()> {
        self.post_data(PRED_RESULT_LABEL, PRED_RESULT_ROUTE, preduplet_id, data)
            .await
    }
}

fn parse_url(label: &'static str, raw: String) -> Result<Url> {
    Url::parse(&raw).map_err(|source| OrchestratorError::InvalidUrl {
        route: label,
        url: raw,
        source,
    })
}

/// Streams the reader as the request body, chunk by chunk, without
/// re-encoding it
fn reader_body(reader: ResultReader) -> Body {
    let chunks = stream::try_unfold(reader, |mut reader| async move {
        let mut buf = vec![0u8; BODY_CHUNK_SIZE];
        let read = reader.read(&mut buf).await?;
        if read == 0 {
            Ok::<_, std::io::Error>(None)
        } else {
            buf.truncate(read);
            Ok(Some((buf, reader)))
        }
    });
    Body::wrap_stream(chunks)
}
