//! JSON report generation

use super::ScoreReport;
use crate::{CoreError, CoreResult};

pub fn generate(report: &ScoreReport) -> CoreResult<String> {
    serde_json::to_string_pretty(report)
        .map_err(|e| CoreError::Report(format!("JSON serialization failed: {}", e)))
}
