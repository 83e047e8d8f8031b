//! YAML format support.
//!
//! Same document shape as JSON, in YAML syntax:
//!
//! ```yaml
//! - id: pkg
//!   kind: DataPkg
//!   name: Data
//!   relations:
//!     - name: ownedSignals
//!       cardinality: many
//!       role: containment
//!       targets: [sig]
//! - id: sig
//!   kind: Signal
//!   name: Brake
//!   owner: pkg
//! ```

use super::{InterchangeError, ModelDocument, ModelFormat};
use crate::model::Model;

/// YAML format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Yaml;

impl ModelFormat for Yaml {
    fn name(&self) -> &'static str {
        "YAML"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["yaml", "yml"]
    }

    fn mime_type(&self) -> &'static str {
        "application/x-yaml"
    }

    fn read(&self, input: &[u8]) -> Result<Model, InterchangeError> {
        let document: ModelDocument =
            serde_yaml::from_slice(input).map_err(|e| InterchangeError::yaml(e.to_string()))?;
        document.into_model()
    }

    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError> {
        serde_yaml::to_string(&ModelDocument::from_model(model))
            .map(String::into_bytes)
            .map_err(|e| InterchangeError::yaml(e.to_string()))
    }
}
