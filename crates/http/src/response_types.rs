//! Response types (Serialize)

use pokedex_service::SeedReport;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SeedResponse {
    pub message: String,
    pub inserted: usize,
}

impl From<SeedReport> for SeedResponse {
    fn from(report: SeedReport) -> Self {
        Self { message: report.message.to_owned(), inserted: report.inserted }
    }
}

#[derive(Debug, Serialize)]
#[non_exhaustive]
pub struct VersionResponse {
    pub version: &'static str,
}
