use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::foundation::error::{WirecheckError, WirecheckResult};
use crate::scene::model::Structure;

impl Structure {
    /// Parse a structure document from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> WirecheckResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| WirecheckError::serde(format!("parse structure JSON: {e}")))
    }

    /// Parse a structure document from a JSON string.
    pub fn from_json_str(s: &str) -> WirecheckResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| WirecheckError::serde(format!("parse structure JSON: {e}")))
    }

    /// Parse a structure document from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> WirecheckResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            WirecheckError::serde(format!("open structure JSON '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Pretty-printed JSON encoding.
    pub fn to_json_pretty(&self) -> WirecheckResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| WirecheckError::serde(format!("encode structure JSON: {e}")))
    }
}
