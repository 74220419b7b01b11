// ============================================================================
// project.rs — Project name lookup in Cordova's config.xml
// ============================================================================
//
// Only the widget's <name> element is read. The iOS asset catalog lives in a
// directory named after the project, so nothing else is needed here.
// ============================================================================

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProjectConfigError {
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{0} has no <name> element")]
    MissingName(PathBuf),
}

pub fn project_name(config_path: &Path) -> Result<String, ProjectConfigError> {
    let content = fs::read_to_string(config_path).map_err(|source| ProjectConfigError::Io {
        path: config_path.to_path_buf(),
        source,
    })?;
    extract_name(&content).ok_or_else(|| ProjectConfigError::MissingName(config_path.to_path_buf()))
}

fn extract_name(xml: &str) -> Option<String> {
    let re = Regex::new(r"(?s)<name(?:\s[^>]*)?>(.*?)</name>").ok()?;
    let raw = re.captures(xml)?.get(1)?.as_str().trim();
    if raw.is_empty() {
        return None;
    }
    Some(unescape(raw))
}

fn unescape(s: &str) -> String {
    s.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&apos;", "'")
        .replace("&amp;", "&")
}
