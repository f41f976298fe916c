//! # Morpheo Orchestrator Client
//!
//! This crate lets a compute worker report to the Morpheo orchestrator: it
//! moves learnuplets and preduplets through their statuses and forwards the
//! JSON documents holding their results.
//!
//! ## Features
//!
//! - **HTTP client**: `OrchestratorApi` posts to a configured host and port
//! - **Validation**: uplet types and statuses are checked before any request
//! - **Mock**: `OrchestratorMock` stands in for the orchestrator in tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use morpheo_orchestrator_client::orchestrator::{result_reader, ClientConfig, Orchestrator, OrchestratorApi};
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let api = OrchestratorApi::new(ClientConfig::new("localhost", 8080));
//!     let learnuplet = Uuid::new_v4();
//!
//!     api.update_uplet_status("learn", "pending", learnuplet).await?;
//!     api.post_learn_result(learnuplet, result_reader(r#"{"perf": 0.92}"#)).await?;
//!     api.update_uplet_status("learn", "done", learnuplet).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod orchestrator;
pub mod uplet;

pub use error::{OrchestratorError, Result};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::{OrchestratorError, Result};
    pub use crate::orchestrator::{
        result_reader, ClientConfig, Orchestrator, OrchestratorApi, OrchestratorMock, ResultReader,
    };
    pub use crate::uplet::{UpletStatus, UpletType, VALID_STATUSES, VALID_UPLET_TYPES};
}
