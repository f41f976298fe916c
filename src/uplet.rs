//! Uplet types and statuses accepted by the orchestrator

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use crate::error::OrchestratorError;

/// Uplet type constants
pub const UPLET_TYPE_LEARN: &str = "learn";
pub const UPLET_TYPE_PRED: &str = "pred";

/// Uplet status constants
pub const UPLET_STATUS_WAITING: &str = "waiting";
pub const UPLET_STATUS_PENDING: &str = "pending";
pub const UPLET_STATUS_TODO: &str = "todo";
pub const UPLET_STATUS_FAILED: &str = "failed";
pub const UPLET_STATUS_DONE: &str = "done";

/// Every uplet type the orchestrator knows about
pub const VALID_UPLET_TYPES: &[&str] = &[UPLET_TYPE_LEARN, UPLET_TYPE_PRED];

/// Every status an uplet can be moved to
pub const VALID_STATUSES: &[&str] = &[
    UPLET_STATUS_WAITING,
    UPLET_STATUS_PENDING,
    UPLET_STATUS_TODO,
    UPLET_STATUS_FAILED,
    UPLET_STATUS_DONE,
];

/// Kind of unit of work tracked by the orchestrator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpletType {
    Learn,
    Pred,
}

impl UpletType {
    /// Wire form used in URLs, e.g. `learn`
    pub fn as_str(&self) -> &'static str {
        match self {
            UpletType::Learn => UPLET_TYPE_LEARN,
            UpletType::Pred => UPLET_TYPE_PRED,
        }
    }

    /// Parses a raw uplet type, rejecting anything outside `VALID_UPLET_TYPES`
    pub fn parse(value: &str) -> Result<Self, OrchestratorError> {
        match value {
            UPLET_TYPE_LEARN => Ok(UpletType::Learn),
            UPLET_TYPE_PRED => Ok(UpletType::Pred),
            _ => Err(OrchestratorError::InvalidUpletType {
                value: value.to_string(),
                allowed: VALID_UPLET_TYPES,
            }),
        }
    }
}

impl FromStr for UpletType {
    type Err = OrchestratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UpletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifecycle status of an uplet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UpletStatus {
    Waiting,
    Pending,
    Todo,
    Failed,
    Done,
}

impl UpletStatus {
    /// Wire form sent in status updates, e.g. `done`
    pub fn as_str(&self) -> &'static str {
        match self {
            UpletStatus::Waiting => UPLET_STATUS_WAITING,
            UpletStatus::Pending => UPLET_STATUS_PENDING,
            UpletStatus::Todo => UPLET_STATUS_TODO,
            UpletStatus::Failed => UPLET_STATUS_FAILED,
            UpletStatus::Done => UPLET_STATUS_DONE,
        }
    }

    /// Parses a raw status, rejecting anything outside `VALID_STATUSES`
    pub fn parse(value: &str) -> Result<Self, OrchestratorError> {
        match value {
            UPLET_STATUS_WAITING => Ok(UpletStatus::Waiting),
            UPLET_STATUS_PENDING => Ok(UpletStatus::Pending),
            UPLET_STATUS_TODO => Ok(UpletStatus::Todo),
            UPLET_STATUS_FAILED => Ok(UpletStatus::Failed),
            UPLET_STATUS_DONE => Ok(UpletStatus::Done),
            _ => Err(OrchestratorError::InvalidStatus {
                value: value.to_string(),
                allowed: VALID_STATUSES,
            }),
        }
    }
}

impl FromStr for UpletStatus {
    type Err = OrchestratorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for UpletStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
