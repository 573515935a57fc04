//! Turning command-line paths into extraction requests

use anyhow::{anyhow, Result};
use lextags_indexer::ExtractRequest;
use std::path::Path;

/// Build the request for `path`
///
/// Tags carry the file name as text, so a path that is not valid UTF-8 is
/// rejected here instead of being read under a mangled name.
pub fn extract_request(path: &Path) -> Result<ExtractRequest> {
    let file_path = path
        .to_str()
        .ok_or_else(|| anyhow!("Skipping {}: file name is not valid UTF-8", path.display()))?;
    Ok(ExtractRequest::new(file_path))
}
