//! Common trait for model interchange formats.

use super::InterchangeError;
use crate::model::Model;

/// Trait for model document formats.
///
/// Implementations convert between the [`Model`] store and bytes. Reading
/// always produces a fresh store; writing never mutates the model.
pub trait ModelFormat: Send + Sync {
    /// Human-readable name of the format.
    fn name(&self) -> &'static str;

    /// File extension(s) for this format.
    fn extensions(&self) -> &'static [&'static str];

    /// MIME type for this format.
    fn mime_type(&self) -> &'static str;

    /// Read a model from bytes.
    fn read(&self, input: &[u8]) -> Result<Model, InterchangeError>;

    /// Write a model to bytes.
    fn write(&self, model: &Model) -> Result<Vec<u8>, InterchangeError>;

    /// Read a model from a file.
    fn read_path(&self, path: &std::path::Path) -> Result<Model, InterchangeError> {
        let bytes = std::fs::read(path)?;
        self.read(&bytes)
    }

    /// Write a model to a file, replacing it.
    fn write_path(&self, model: &Model, path: &std::path::Path) -> Result<(), InterchangeError> {
        let bytes = self.write(model)?;
        std::fs::write(path, bytes)?;
        Ok(())
    }
}
