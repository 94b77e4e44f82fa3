use std::path::Path;

use figma_tokens_core::{DesignTokens, ExtractedNode, FigmaFile};
use serde_json::Map;

pub mod error;
pub mod io;
pub mod summary;

pub use error::{Error, Result};

/// Primary document export.
pub const DATA_FILE: &str = "figma-data.json";
/// Optional node dump. Loaded when present, never consulted.
pub const NODES_FILE: &str = "figma-nodes.json";
pub const SYSTEM_FILE: &str = "design-system.json";
pub const TOKENS_FILE: &str = "design-tokens.json";

/// Extracts the root frame's design system from `dir` and writes
/// [`SYSTEM_FILE`] there. Writes `{}` when no frame qualifies as root.
pub fn extract_design_system(dir: &Path) -> Result<Option<ExtractedNode>> {
    let file: FigmaFile = io::read_json(&dir.join(DATA_FILE), true)?;
    if io::read_optional(&dir.join(NODES_FILE)).is_some() {
        log::debug!("loaded {NODES_FILE}");
    }

    let system = file.design_system();
    let path = dir.join(SYSTEM_FILE);
    match &system {
        Some(root) => io::write_json(&path, root)?,
        None => {
            log::warn!("no root frame found, writing an empty design system");
            io::write_json(&path, &Map::new())?
        }
    }
    Ok(system)
}

/// Extracts flat design tokens from every frame in `dir` and writes
/// [`TOKENS_FILE`] there.
pub fn extract_design_tokens(dir: &Path) -> Result<DesignTokens> {
    let file: FigmaFile = io::read_json(&dir.join(DATA_FILE), false)?;
    let tokens = DesignTokens::from_file(&file);
    io::write_json(&dir.join(TOKENS_FILE), &tokens)?;
    Ok(tokens)
}
