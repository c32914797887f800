use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use go_core::types::{DbId, EnumId, Timestamp};

/// Record of one ingestion run (or one failure inside a run).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CronJob {
    pub id: DbId,
    pub name: String,
    pub status: EnumId,
    pub message: String,
    pub num_result: i32,
    pub storing: Option<serde_json::Value>,
    pub backtrace: Option<String>,
    pub created_at: Timestamp,
}

/// Insert DTO used by the ingestion runner.
#[derive(Debug, Clone)]
pub struct NewCronJob {
    pub name: String,
    pub status: EnumId,
    pub message: String,
    pub num_result: i32,
    pub storing: Option<serde_json::Value>,
    pub backtrace: Option<String>,
}

impl NewCronJob {
    pub fn new(name: impl Into<String>, status: EnumId, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status,
            message: message.into(),
            num_result: 0,
            storing: None,
            backtrace: None,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CronJobListParams {
    pub name: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
