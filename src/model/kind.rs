//! Element kinds and their single-inheritance hierarchy.

use std::str::FromStr;

use super::ModelError;

// ============================================================================
// ELEMENT KINDS
// ============================================================================

/// The metaclass of a model element.
///
/// A closed set of Capella metaclasses. Every kind has at most one direct
/// supertype, so the hierarchy is a tree rooted at [`ElementKind::ModelElement`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ElementKind {
    // Abstract roots
    ModelElement,
    CapellaElement,
    NamedElement,
    Namespace,

    // Structures
    Structure,
    ModellingArchitecture,
    Project,
    Library,
    SystemEngineering,
    Package,
    SharedPkg,
    DataPkg,

    // Classifiers
    Classifier,
    Class,
    CommunicationItem,
    Signal,
    ExchangeItem,
    Component,
    PhysicalComponent,

    // Ports and links
    Port,
    ComponentPort,
    PhysicalPort,
    PhysicalLink,

    // Relationships
    Relationship,
    AbstractTrace,
    PhysicalLinkRealization,
    ComponentRealization,
    Generalization,
    ReuseLink,
}

impl ElementKind {
    /// Every kind, supertypes before subtypes.
    pub const ALL: &'static [ElementKind] = &[
        Self::ModelElement,
        Self::CapellaElement,
        Self::NamedElement,
        Self::Namespace,
        Self::Structure,
        Self::ModellingArchitecture,
        Self::Project,
        Self::Library,
        Self::SystemEngineering,
        Self::Package,
        Self::SharedPkg,
        Self::DataPkg,
        Self::Classifier,
        Self::Class,
        Self::CommunicationItem,
        Self::Signal,
        Self::ExchangeItem,
        Self::Component,
        Self::PhysicalComponent,
        Self::Port,
        Self::ComponentPort,
        Self::PhysicalPort,
        Self::PhysicalLink,
        Self::Relationship,
        Self::AbstractTrace,
        Self::PhysicalLinkRealization,
        Self::ComponentRealization,
        Self::Generalization,
        Self::ReuseLink,
    ];

    /// The direct supertype, or `None` for the root kind.
    pub fn supertype(self) -> Option<ElementKind> {
        let parent = match self {
            Self::ModelElement => return None,
            Self::CapellaElement => Self::ModelElement,
            Self::NamedElement | Self::Relationship => Self::CapellaElement,
            Self::Namespace | Self::ExchangeItem | Self::Port | Self::PhysicalLink => {
                Self::NamedElement
            }
            Self::Structure | Self::Classifier => Self::Namespace,
            Self::ModellingArchitecture
            | Self::Project
            | Self::SystemEngineering
            | Self::Package => Self::Structure,
            Self::Library => Self::Project,
            Self::SharedPkg | Self::DataPkg => Self::Package,
            Self::Class | Self::CommunicationItem | Self::Component => Self::Classifier,
            Self::Signal => Self::CommunicationItem,
            Self::PhysicalComponent => Self::Component,
            Self::ComponentPort | Self::PhysicalPort => Self::Port,
            Self::AbstractTrace | Self::Generalization | Self::ReuseLink => Self::Relationship,
            Self::PhysicalLinkRealization | Self::ComponentRealization => Self::AbstractTrace,
        };
        Some(parent)
    }

    /// Iterate from this kind up to the root, most specific first.
    pub fn ancestry(self) -> Ancestry {
        Ancestry { next: Some(self) }
    }

    /// Returns true if this kind is `other` or one of its subtypes.
    pub fn is_a(self, other: ElementKind) -> bool {
        self.ancestry().any(|k| k == other)
    }

    /// Distance to the root kind (the root has depth 0).
    pub fn depth(self) -> usize {
        self.ancestry().count() - 1
    }

    /// Returns true for kinds that carry a name attribute.
    pub fn is_named(self) -> bool {
        self.is_a(Self::NamedElement)
    }

    /// Returns true for kinds that carry summary and description attributes.
    pub fn is_capella_element(self) -> bool {
        self.is_a(Self::CapellaElement)
    }

    /// The metaclass name.
    pub fn name(self) -> &'static str {
        match self {
            Self::ModelElement => "ModelElement",
            Self::CapellaElement => "CapellaElement",
            Self::NamedElement => "NamedElement",
            Self::Namespace => "Namespace",
            Self::Structure => "Structure",
            Self::ModellingArchitecture => "ModellingArchitecture",
            Self::Project => "Project",
            Self::Library => "Library",
            Self::SystemEngineering => "SystemEngineering",
            Self::Package => "Package",
            Self::SharedPkg => "SharedPkg",
            Self::DataPkg => "DataPkg",
            Self::Classifier => "Classifier",
            Self::Class => "Class",
            Self::CommunicationItem => "CommunicationItem",
            Self::Signal => "Signal",
            Self::ExchangeItem => "ExchangeItem",
            Self::Component => "Component",
            Self::PhysicalComponent => "PhysicalComponent",
            Self::Port => "Port",
            Self::ComponentPort => "ComponentPort",
            Self::PhysicalPort => "PhysicalPort",
            Self::PhysicalLink => "PhysicalLink",
            Self::Relationship => "Relationship",
            Self::AbstractTrace => "AbstractTrace",
            Self::PhysicalLinkRealization => "PhysicalLinkRealization",
            Self::ComponentRealization => "ComponentRealization",
            Self::Generalization => "Generalization",
            Self::ReuseLink => "ReuseLink",
        }
    }
}

impl std::fmt::Display for ElementKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|k| k.name() == s)
            .ok_or_else(|| ModelError::UnknownKind(s.to_string()))
    }
}

/// Iterator over a kind and its supertypes, most specific first.
#[derive(Clone, Debug)]
pub struct Ancestry {
    next: Option<ElementKind>,
}

impl Iterator for Ancestry {
    type Item = ElementKind;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.supertype();
        Some(current)
    }
}
