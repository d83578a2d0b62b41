//! Output rendering for extracted repository metadata.
//!
//! Converts a [`RepositoryInfo`] into a plain-text report for terminals and
//! into JSON or TOML for machine consumption.

use crate::types::RepositoryInfo;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML serialization error: {0}")]
    Toml(#[from] toml::ser::Error),
}

/// Document wrapper so the record serializes under a `[repo]` table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepoReport {
    pub repo: RepositoryInfo,
}

/// Render a multi-line human-readable report.
pub fn render_text(info: &RepositoryInfo) -> String {
    let mut lines = Vec::new();

    if info.latest_commit.is_empty() {
        lines.push("latest commit: (none)".to_string());
    } else {
        lines.push(format!("latest commit: {}", info.latest_commit));
    }

    lines.push(format!("branches ({}):", info.branches.len()));
    for branch in &info.branches {
        lines.push(format!("  {}", branch));
    }

    lines.push(format!("authors ({}):", info.authors.len()));
    for author in &info.authors {
        lines.push(format!("  {}", author));
    }

    lines.join("\n")
}

/// Serialize to pretty-printed JSON.
pub fn to_json(info: &RepositoryInfo) -> Result<String, ReportError> {
    Ok(serde_json::to_string_pretty(info)?)
}

/// Serialize to a TOML document with the record under a `[repo]` table.
pub fn to_toml(info: &RepositoryInfo) -> Result<String, ReportError> {
    Ok(toml::to_string(&RepoReport { repo: info.clone() })?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn create_test_info() -> RepositoryInfo {
        RepositoryInfo {
            branches: vec!["main".to_string(), "dev".to_string()],
            latest_commit: "d9eda6b Fix cache warming".to_string(),
            authors: ["Alice".to_string(), "Bob".to_string()]
                .into_iter()
                .collect(),
        }
    }

    #[test]
    fn test_text_report_lists_fields() {
        let text = render_text(&create_test_info());
        assert!(text.contains("latest commit: d9eda6b Fix cache warming"));
        assert!(text.contains("branches (2):"));
        assert!(text.contains("  main"));
        assert!(text.contains("  dev"));
        assert!(text.contains("authors (2):"));
        assert!(text.contains("  Alice"));
    }

    #[test]
    fn test_text_report_empty_repository() {
        let info = RepositoryInfo {
            branches: Vec::new(),
            latest_commit: String::new(),
            authors: BTreeSet::new(),
        };
        let text = render_text(&info);
        assert!(text.contains("latest commit: (none)"));
        assert!(text.contains("branches (0):"));
    }

    #[test]
    fn test_json_round_trip() {
        let info = create_test_info();
        let json = to_json(&info).unwrap();
        let parsed: RepositoryInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, info);
    }

    #[test]
    fn test_toml_report_shape() {
        let toml_doc = to_toml(&create_test_info()).unwrap();
        assert!(toml_doc.contains("[repo]"));
        assert!(toml_doc.contains("branches"));
        assert!(toml_doc.contains("\"Alice\""));
    }
}
