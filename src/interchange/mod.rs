//! Model interchange formats.
//!
//! Both formats share one document shape, [`ModelDocument`]: a flat list of
//! element records whose containment relations are replayed on load.
//!
//! ```text
//! ┌──────────────┐     ┌──────────────┐
//! │  JSON File   │     │  YAML File   │
//! └──────┬───────┘     └──────┬───────┘
//!        │                    │
//!        ▼                    ▼
//! ┌──────────────────────────────────────────┐
//! │            ModelFormat trait             │
//! │  - read(&[u8]) -> Result<Model>          │
//! │  - write(&Model) -> Result<Vec<u8>>      │
//! └──────────────────────────────────────────┘
//!        │
//!        ▼
//! ┌──────────────────────────────────────────┐
//! │   ModelDocument  ⇄  Model (store)        │
//! └──────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use capella::interchange::{detect_format, ModelFormat};
//!
//! let path = std::path::Path::new("model.yaml");
//! let format = detect_format(path).ok_or("unsupported extension")?;
//! let model = format.read_path(path)?;
//! ```

mod document;
mod error;
mod format;
mod json;
mod yaml;

pub use document::{ElementRecord, ModelDocument, RelationRecord};
pub use error::InterchangeError;
pub use format::ModelFormat;
pub use json::Json;
pub use yaml::Yaml;

/// Supported file extensions for interchange formats.
pub fn supported_extensions() -> &'static [&'static str] {
    &["json", "yaml", "yml"]
}

/// Detect format from file extension.
pub fn detect_format(path: &std::path::Path) -> Option<Box<dyn ModelFormat>> {
    let ext = path.extension()?.to_str()?;
    match ext.to_lowercase().as_str() {
        "json" => Some(Box::new(Json)),
        "yaml" | "yml" => Some(Box::new(Yaml)),
        _ => None,
    }
}
