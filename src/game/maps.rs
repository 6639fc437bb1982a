//! The bundled level catalog: display text plus a type-code matrix per level,
//! embedded as JSON and validated through level construction at load time.

use serde::{Deserialize, Serialize};

use crate::game::level::{Level, LevelError};

const LEVELS_JSON: &str = include_str!("../../assets/levels.json");

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelDef {
    /// Text shown when the level starts.
    pub text: String,
    pub matrix: Vec<Vec<i32>>,
}

impl LevelDef {
    pub fn build(&self) -> Result<Level, LevelError> {
        Level::from_matrix(&self.matrix)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("level catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("bundled level {index} (\"{text}\") is invalid: {source}")]
    Invalid {
        index: usize,
        text: String,
        source: LevelError,
    },
}

/// Parse the embedded catalog and construct every level once, so a malformed
/// bundled matrix aborts startup instead of surfacing mid-game.
pub fn load_catalog() -> Result<Vec<LevelDef>, CatalogError> {
    let defs: Vec<LevelDef> = serde_json::from_str(LEVELS_JSON)?;
    for (index, def) in defs.iter().enumerate() {
        def.build().map_err(|source| CatalogError::Invalid {
            index,
            text: def.text.clone(),
            source,
        })?;
    }
    Ok(defs)
}
