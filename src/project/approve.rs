use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::foundation::error::{WirecheckError, WirecheckResult};
use crate::project::discover::Project;
use crate::scene::model::Structure;

impl Project {
    /// Copy the latest `v{n}.json` to `approved.json`, locked and stamped.
    ///
    /// The latest version must pass schema validation. The approved copy keeps the version
    /// label of its source.
    pub fn approve(&self, by: &str, now: DateTime<Utc>) -> WirecheckResult<PathBuf> {
        let latest = self.latest()?;
        let mut doc = Structure::from_path(&latest.path)?;
        doc.validate()?;
        if doc.version.is_empty() {
            doc.version = format!("v{}", latest.number);
        }
        doc.locked = true;
        doc.locked_at = Some(now.to_rfc3339_opts(SecondsFormat::Secs, true));
        doc.approved_by = Some(by.to_owned());

        let out = self.approved_path();
        std::fs::write(&out, doc.to_json_pretty()?)
            .map_err(|e| WirecheckError::project(format!("write {}: {e}", out.display())))?;
        tracing::info!(version = %doc.version, by, "approved");
        Ok(out)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/project/approve.rs"]
mod tests;
