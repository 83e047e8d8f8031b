//! Typed engineering model graph.
//!
//! The query layer never depends on this store directly; it reads through
//! [`ModelGraphView`]. The store exists so that tests, interchange formats,
//! and embedders without their own graph have a concrete implementation.
//!
//! ```text
//! ┌──────────────┐  add_child / link / remove   ┌──────────────────┐
//! │  ModelHost   │ ───────────────────────────▶ │      Model       │
//! │ RwLock<Model>│                              │ IndexMap<Id, El> │
//! └──────┬───────┘                              └────────┬─────────┘
//!        │ read()                                        │ impl
//!        ▼                                               ▼
//! ┌──────────────────────────────────────────────────────────────┐
//! │                  ModelGraphView trait                        │
//! │  kind_of / is_variant / relation / owner / contents / attr   │
//! └──────────────────────────────────────────────────────────────┘
//! ```

mod element;
mod error;
mod host;
mod id;
mod kind;
mod store;
mod view;

pub use element::{Attribute, Cardinality, Element, RelationRole, RelationSlot};
pub use error::ModelError;
pub use host::ModelHost;
pub use id::ElementId;
pub use kind::{Ancestry, ElementKind};
pub use store::Model;
pub use view::ModelGraphView;

/// Well-known relation names of the Capella metamodel.
pub mod relations {
    /// PhysicalLink → PhysicalLinkRealization (containment, many).
    pub const OWNED_PHYSICAL_LINK_REALIZATIONS: &str = "ownedPhysicalLinkRealizations";
    /// Trace → realized element (reference, single).
    pub const TARGET_ELEMENT: &str = "targetElement";
    /// Trace → realizing element (reference, single).
    pub const SOURCE_ELEMENT: &str = "sourceElement";
    /// Generalizable element → its supertypes (reference, many).
    pub const SUPER: &str = "super";
    /// SharedPkg → ReuseLinks that reuse it (reference, many).
    pub const REUSE_LINKS: &str = "reuseLinks";
    /// ReuseLink → reused SharedPkg (reference, single).
    pub const REUSED: &str = "reused";
    pub const OWNED_SHARED_PKGS: &str = "ownedSharedPkgs";
    pub const OWNED_ARCHITECTURES: &str = "ownedArchitectures";
    pub const OWNED_DATA_PKGS: &str = "ownedDataPkgs";
    pub const OWNED_SIGNALS: &str = "ownedSignals";
    pub const OWNED_CLASSES: &str = "ownedClasses";
    pub const OWNED_PHYSICAL_LINKS: &str = "ownedPhysicalLinks";
    pub const OWNED_COMPONENTS: &str = "ownedComponents";
    pub const OWNED_PORTS: &str = "ownedPorts";
    pub const OWNED_GENERALIZATIONS: &str = "ownedGeneralizations";
    pub const OWNED_TRACES: &str = "ownedTraces";
    pub const OWNED_REUSE_LINKS: &str = "ownedReuseLinks";
    /// PhysicalLink → connected ports (reference, many).
    pub const LINK_ENDS: &str = "linkEnds";
}
