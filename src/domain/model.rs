use serde::{Deserialize, Serialize};

/// 一列 CSV 轉成的建立請求，也是 POST body 的 JSON 形狀
#[derive(Debug, Clone, Serialize)]
pub struct LinkRequest {
    pub slug: String,
    pub destination: String,
}

/// Outcome of one API call. `status == 0` means no HTTP exchange completed
/// (DNS failure, refused connection, timeout, unreadable body).
#[derive(Debug, Clone)]
pub struct LinkOutcome {
    pub success: bool,
    pub message: String,
    pub status: u16,
}

#[derive(Debug, Clone, Default)]
pub struct ImportSummary {
    pub success_count: u64,
    pub failed_count: u64,
}

/// One element of the `GET /api/links` response. Timestamps are UNIX seconds
/// as stored by the remote service.
#[derive(Debug, Clone, Deserialize)]
pub struct LinkRow {
    pub slug: String,
    pub destination: String,
    #[serde(default)]
    pub created_at: i64,
    #[serde(default)]
    pub updated_at: i64,
}
