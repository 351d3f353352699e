//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for non-interactive high-score listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Aligned, colored table (default)
    #[default]
    Table,
    /// The stored records as JSON
    Json,
}
