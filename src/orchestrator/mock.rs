//! In-memory stand-in for the orchestrator API

use async_trait::async_trait;
use log::{info, warn};
use tokio::io::AsyncReadExt;
use uuid::Uuid;
use crate::error::{OrchestratorError, Result};
use super::{Orchestrator, ResultReader, LEARN_RESULT_LABEL, PRED_RESULT_LABEL, STATUS_UPDATE_LABEL};

/// Uplet the mock pretends does not exist unless told otherwise
pub const DEFAULT_UNEXISTING_UPLET: &str = "ea408171-0205-475e-8962-a02855767260";

/// Mocks the orchestrator API
///
/// Every call succeeds except those targeting the "unexisting" uplet, which
/// fail with `OrchestratorError::UpletNotFound`. Unlike `OrchestratorApi`,
/// uplet types and statuses are not validated. Errors while draining a
/// result are logged and do not fail the call.
#[derive(Debug, Clone)]
pub struct OrchestratorMock {
    unexisting_uplet: String,
}

impl OrchestratorMock {
    pub fn new() -> Self {
        Self {
            unexisting_uplet: DEFAULT_UNEXISTING_UPLET.to_string(),
        }
    }

    /// Creates a mock failing for another uplet
    ///
    /// # Arguments
    ///
    /// * `uplet_id` - The uplet reported as unexisting. It is stored in its
    ///   hyphenated lowercase form, the form incoming identifiers are
    ///   compared in.
    ///
    /// # Example
    ///
    /// ```rust
    /// use morpheo_orchestrator_client::orchestrator::OrchestratorMock;
    /// use uuid::Uuid;
    ///
    /// let id = Uuid::parse_str("A1A2A3A4-B1B2-C1C2-D1D2-D3D4D5D6D7D8").unwrap();
    /// let mock = OrchestratorMock::with_unexisting_uplet(id);
    /// assert_eq!(mock.unexisting_uplet(), "a1a2a3a4-b1b2-c1c2-d1d2-d3d4d5d6d7d8");
    /// ```
    pub fn with_unexisting_uplet(uplet_id: Uuid) -> Self {
        Self {
            unexisting_uplet: uplet_id.to_string(),
        }
    }

    pub fn unexisting_uplet(&self) -> &str {
        &self.unexisting_uplet
    }

    fn is_unexisting(&self, uplet_id: Uuid) -> bool {
        uplet_id.to_string() == self.unexisting_uplet
    }

    async fn receive_result(
        &self,
        label: &'static str,
        uplet_kind: &str,
        uplet_id: Uuid,
        mut data: ResultReader,
    ) -> Result<()> {
        if self.is_unexisting(uplet_id) {
            return Err(OrchestratorError::UpletNotFound {
                route: label,
                uplet_id,
            });
        }

        let mut buf = Vec::new();
        let drained = data.read_to_end(&mut buf).await;
        info!(
            "[orchestrator-mock] Received {} for {}-uplet {}: \n {}",
            label,
            uplet_kind,
            uplet_id,
            String::from_utf8_lossy(&buf)
        );
        if let Err(e) = drained {
            warn!("[orchestrator-mock] Error reading {} for {}: {}", label, uplet_id, e);
        }
        Ok(())
    }
}

impl Default for OrchestratorMock {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Orchestrator for OrchestratorMock {
    async fn update_uplet_status(&self, uplet_type: &str, status: &str, uplet_id: Uuid) -> Result<()> {
        if self.is_unexisting(uplet_id) {
            return Err(OrchestratorError::UpletNotFound {
                route: STATUS_UPDATE_LABEL,
                uplet_id,
            });
        }
        info!(
            "[orchestrator-mock] Received update status for {}-uplet {}. Status: {}",
            uplet_type, uplet_id, status
        );
        Ok(())
    }

    async fn post_learn_result(&self, learnuplet_id: Uuid, data: ResultReader) -> Result<()> {
        self.receive_result(LEARN_RESULT_LABEL, "learn", learnuplet_id, data)
            .await
    }

    async fn post_pred_result(&self, preduplet_id: Uuid, data: ResultReader) -> Result<()> {
        self.receive_result(PRED_RESULT_LABEL, "pred", preduplet_id, data)
            .await
    }
}
