//! Data model for the DISHA project dashboard
//!
//! Provides the typed, read-only fixture layer:
//! - Project, budget and timeline documents
//! - Design options and their status
//! - Zones with BOQ, utilities and measurements
//! - Manufacturing records (cabinets) with parts, hardware and cut lists
//! - Document register
//! - [`DataStore`]: id-keyed maps validated once at load time
//!
//! Everything here is immutable for the session; mutation lives in the
//! state layer, which only ever references entities by id.

pub mod cabinet;
pub mod design;
pub mod documents;
pub mod error;
pub mod ids;
pub mod products;
pub mod project;
pub mod store;
pub mod zone;

pub use cabinet::{
    CabinetDimensions, CabinetKind, CutListEntry, HardwareItem, ManufacturingRecord, Part,
    PartDimensions,
};
pub use design::{DesignOption, OptionStatus};
pub use documents::{DocumentCategory, DocumentFile, DocumentStatus};
pub use error::StoreError;
pub use ids::{CabinetId, OptionId, PhaseId, ZoneId};
pub use products::{catalog_summary, CatalogSummary, Product, ProductCategory, ProductStatus};
pub use project::{format_lakhs, Budget, MilestoneStatus, ProjectInfo, TimelineMilestone};
pub use store::{DataStore, ProjectData};
pub use zone::{Appliance, Utilities, UtilityPoint, Zone, ZoneBoq, ZoneDimensions};
