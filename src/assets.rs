//! Slider level packs.
//!
//! A pack is a JSON file with one entry per level, rows as strings using the
//! usual level characters (`#` wall, `.` empty, `P` player start, `G` goal,
//! anything else is a decorative glyph):
//!
//! ```json
//! { "levels": [ { "name": "corridor", "rows": ["############", "..."] } ] }
//! ```

use std::path::Path;

use anyhow::{anyhow, Context, Result};
use log::info;
use serde::Deserialize;

use crate::core::Level;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LevelPackFile {
    pub levels: Vec<LevelFile>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LevelFile {
    pub name: String,
    pub rows: Vec<String>,
}

/// Parse a level pack from JSON text
pub fn parse_level_pack(json: &str) -> Result<Vec<Level>> {
    let pack: LevelPackFile = serde_json::from_str(json).context("level pack is not valid JSON")?;
    if pack.levels.is_empty() {
        return Err(anyhow!("level pack has no levels"));
    }
    pack.levels
        .iter()
        .map(|file| Level::parse(&file.name, file.rows.as_slice()).map_err(anyhow::Error::from))
        .collect()
}

/// Read and parse a level pack
pub async fn load_level_pack(path: &Path) -> Result<Vec<Level>> {
    let json = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("read level pack {}", path.display()))?;
    let levels = parse_level_pack(&json)?;
    info!("loaded {} levels from {}", levels.len(), path.display());
    Ok(levels)
}

/// Load a pack at startup, before the terminal loop takes over
pub fn load_level_pack_blocking(path: &Path) -> Result<Vec<Level>> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("start runtime for level loading")?;
    rt.block_on(load_level_pack(path))
}

#[cfg(test)]
mod tests {
    use super::*;

    const PACK: &str = r####"{
        "levels": [
            { "name": "tiny", "rows": ["###", "#P.", "###"] }
        ]
    }"####;

    #[test]
    fn test_parse_pack() {
        let levels = parse_level_pack(PACK).unwrap();
        assert_eq!(levels.len(), 1);
        assert_eq!(levels[0].name(), "tiny");
        assert_eq!(levels[0].size(), 3);
    }

    #[test]
    fn test_pack_errors() {
        assert!(parse_level_pack("not json").is_err());
        assert!(parse_level_pack(r#"{ "levels": [] }"#).is_err());

        let err = parse_level_pack(r#"{ "levels": [ { "name": "nobody", "rows": ["..", ".."] } ] }"#)
            .unwrap_err();
        assert!(err.to_string().contains("nobody"), "{}", err);
    }

    #[test]
    fn test_rows_may_contain_hashes_and_quotes() {
        let json = "{\"levels\":[{\"name\":\"walled\",\"rows\":[\"####\",\"#P.#\",\"#..#\",\"####\"]}]}";
        let levels = parse_level_pack(json).unwrap();
        assert_eq!(levels[0].name(), "walled");
        assert_eq!(levels[0].size(), 4);
    }
}
