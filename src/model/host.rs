//! Shared, live handle over a [`Model`].
//!
//! An editing layer writes through [`ModelHost::write`] while any number of
//! readers run queries against [`ModelHost::read`]. Nothing is cached between
//! reads, so each query observes the latest committed edit.
//!
//! ```ignore
//! let host = ModelHost::new(model);
//! let links = registry.execute(&*host.read(), &link_id, REALIZED_PHYSICAL_LINKS, &ctx)?;
//! host.write().remove(&link_id)?;
//! ```

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use std::sync::Arc;

use super::Model;

/// Cheaply clonable handle; clones share the same model.
#[derive(Clone, Debug, Default)]
pub struct ModelHost {
    model: Arc<RwLock<Model>>,
}

impl ModelHost {
    /// Wrap an already-constructed Model.
    pub fn new(model: Model) -> Self {
        Self {
            model: Arc::new(RwLock::new(model)),
        }
    }

    /// Shared read access. Pass `&*guard` wherever a `ModelGraphView` is expected.
    pub fn read(&self) -> RwLockReadGuard<'_, Model> {
        self.model.read()
    }

    /// Exclusive write access.
    pub fn write(&self) -> RwLockWriteGuard<'_, Model> {
        self.model.write()
    }

    /// Clone the current state of the model.
    pub fn snapshot(&self) -> Model {
        self.model.read().clone()
    }
}

impl From<Model> for ModelHost {
    fn from(model: Model) -> Self {
        Self::new(model)
    }
}
