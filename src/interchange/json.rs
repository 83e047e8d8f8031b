//! JSON format support.
//!
//! ```json
//! [
//!   { "id": "pkg", "kind": "DataPkg", "name": "Data",
//!     "relations": [
//!       { "name": "ownedSignals", "cardinality": "many",
//!         "role": "containment", "targets": ["sig"] } ] },
//!   { "id": "sig", "kind": "Signal", "name": "Brake", "owner": "pkg" }
//! ]
//! ```

use super::{InterchangeError, ModelDocument, ModelFormat};
use crate::model::Model;

/// JSON format handler.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json;

impl ModelFormat for Json {
    fn name(&self) -> &'static str {
        "JSON"
    }

    fn extensions(&self) -> &'static [&'static str] {
        &["json"]
    }

    fn mime_type(&self) -> &'static str {
        "application/json"
    }

    fn read(&self, input: &[u8]) -> Result<Model, InterchangeError> {
        let document: ModelDocument =
            serde_json::from_slice(input).map_err(|e| InterchangeError::json(e.to_string()))?;
        document.into_model()
    }

    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError> {
        serde_json::to_vec_pretty(&ModelDocument::from_model(model))
            .map_err(|e| InterchangeError::json(e.to_string()))
    }
}
