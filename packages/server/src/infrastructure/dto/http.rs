//! HTTP response bodies.

use serde::{Deserialize, Serialize};

/// `GET /api/health`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
}

/// `GET /api/connections`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionsDto {
    pub count: usize,
    pub connections: Vec<ConnectionDetailDto>,
}

/// One registered connection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionDetailDto {
    pub id: String,
    /// RFC 3339, local offset
    pub connected_at: String,
}
