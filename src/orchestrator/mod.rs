//! Orchestrator API functionality: the capability trait, its HTTP client and its mock

mod client;
mod config;
mod mock;

pub use client::OrchestratorApi;
pub use config::{ClientConfig, ENV_ORCHESTRATOR_HOST, ENV_ORCHESTRATOR_PORT};
pub use mock::{OrchestratorMock, DEFAULT_UNEXISTING_UPLET};

use async_trait::async_trait;
use tokio::io::AsyncRead;
use uuid::Uuid;
use crate::error::Result;
use crate::uplet::{UpletStatus, UpletType};

/// Orchestrator HTTP API routes
pub const STATUS_UPDATE_ROUTE: &str = "/update_status";
pub const LEARN_RESULT_ROUTE: &str = "/learndone";
pub const PRED_RESULT_ROUTE: &str = "/preddone";

/// Route labels used in logs and errors
pub(crate) const STATUS_UPDATE_LABEL: &str = "status update";
pub(crate) const LEARN_RESULT_LABEL: &str = "learn result";
pub(crate) const PRED_RESULT_LABEL: &str = "pred result";

/// JSON-formatted result document handed over to the orchestrator.
///
/// The call takes ownership and reads it to the end.
pub type ResultReader = Box<dyn AsyncRead + Send + Sync + Unpin>;

/// Wraps an in-memory document into a `ResultReader`
pub fn result_reader(data: impl Into<Vec<u8>>) -> ResultReader {
    Box::new(std::io::Cursor::new(data.into()))
}

/// Describes the orchestrator API a worker reports to
///
/// Implemented by `OrchestratorApi` over HTTP and by `OrchestratorMock` for
/// tests. Each call performs a single attempt; retrying is up to the caller.
#[async_trait]
pub trait Orchestrator: Send + Sync {
    /// Changes the status field of a learnuplet or preduplet
    ///
    /// # Arguments
    ///
    /// * `uplet_type` - One of `VALID_UPLET_TYPES` (`learn`, `pred`)
    /// * `status` - One of `VALID_STATUSES`
    /// * `uplet_id` - The uplet to update
    ///
    /// # Returns
    ///
    /// `Ok(())` once the orchestrator acknowledged the update with 200 OK
    ///
    /// # Example
    ///
    /// ```rust
    /// use morpheo_orchestrator_client::orchestrator::{Orchestrator, OrchestratorMock};
    /// use uuid::Uuid;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let orchestrator = OrchestratorMock::new();
    /// orchestrator.update_uplet_status("learn", "done", Uuid::new_v4()).await?;
    /// # Ok(())
    /// # }
    /// ```
    async fn update_uplet_status(&self, uplet_type: &str, status: &str, uplet_id: Uuid) -> Result<()>;

    /// Forwards a JSON-formatted learn result
    ///
    /// # Arguments
    ///
    /// * `learnuplet_id` - The learnuplet the result belongs to
    /// * `data` - The result document, read to the end and sent as is
    ///
    /// # Returns
    ///
    /// `Ok(())` once the orchestrator acknowledged the result with 200 OK
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use morpheo_orchestrator_client::orchestrator::{result_reader, ClientConfig, Orchestrator, OrchestratorApi};
    /// use uuid::Uuid;
    ///
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let api = OrchestratorApi::new(ClientConfig::new("localhost", 8080));
    /// api.post_learn_result(Uuid::new_v4(), result_reader(r#"{"perf": 0.92}"#)).await?;
    /// # Ok(())
    /// # }
    /// ```
    async fn post_learn_result(&self, learnuplet_id: Uuid, data: ResultReader) -> Result<()>;

    /// Forwards a JSON-formatted prediction result
    ///
    /// # Arguments
    ///
    /// * `preduplet_id` - The preduplet the result belongs to
    /// * `data` - The result document, read to the end and sent as is
    ///
    /// # Returns
    ///
    /// `Ok(())` once the orchestrator acknowledged the result with 200 OK
    async fn post_pred_result(&self, preduplet_id: Uuid, data: ResultReader) -> Result<()>;

    /// Typed variant of `update_uplet_status`
    ///
    /// # Arguments
    ///
    /// * `uplet_type` - The kind of uplet
    /// * `status` - The status to move it to
    /// * `uplet_id` - The uplet to update
    async fn report_status(&self, uplet_type: UpletType, status: UpletStatus, uplet_id: Uuid) -> Result<()> {
        self.update_uplet_status(uplet_type.as_str(), status.as_str(), uplet_id)
            .await
    }
}
