//! The validated data store
//!
//! The original documents are loosely-typed JSON looked up by string id
//! at render time. Here the lookups are replaced by typed maps built and
//! validated once: every zone's cabinet reference must resolve to a
//! manufacturing record at load, and all later lookups return an explicit
//! `Option` instead of letting a missing entity propagate silently.

use crate::cabinet::ManufacturingRecord;
use crate::design::DesignOption;
use crate::documents::DocumentCategory;
use crate::error::StoreError;
use crate::ids::{CabinetId, OptionId, ZoneId};
use crate::products::{catalog_summary, CatalogSummary, ProductCategory};
use crate::project::{ProjectInfo, TimelineMilestone};
use crate::zone::Zone;
use indexmap::IndexMap;

/// Zones and manufacturing records scoped to one design option
#[derive(Debug, Clone, Default)]
pub struct ProjectData {
    /// Zones in presentation order
    pub zones: IndexMap<ZoneId, Zone>,
    /// Manufacturing records keyed by cabinet id
    pub manufacturing: IndexMap<CabinetId, ManufacturingRecord>,
}

impl ProjectData {
    /// Build from fixture lists, rejecting duplicates
    fn from_parts(
        option: &OptionId,
        zones: Vec<Zone>,
        records: Vec<ManufacturingRecord>,
    ) -> Result<Self, StoreError> {
        let mut manufacturing = IndexMap::with_capacity(records.len());
        for record in records {
            manufacturing.insert(record.id.clone(), record);
        }

        let mut zone_map = IndexMap::with_capacity(zones.len());
        for zone in zones {
            for cabinet in &zone.cabinets {
                if !manufacturing.contains_key(cabinet) {
                    return Err(StoreError::UnknownCabinet {
                        option: option.clone(),
                        zone: zone.id.clone(),
                        cabinet: cabinet.clone(),
                    });
                }
            }
            if zone_map.insert(zone.id.clone(), zone.clone()).is_some() {
                return Err(StoreError::DuplicateZone {
                    option: option.clone(),
                    zone: zone.id,
                });
            }
        }

        Ok(Self {
            zones: zone_map,
            manufacturing,
        })
    }

    /// Total cabinet count across all zones
    #[inline]
    #[must_use]
    pub fn cabinet_count(&self) -> usize {
        self.zones.values().map(|z| z.cabinets.len()).sum()
    }
}

/// Read-only store of every fixture document, keyed by id
#[derive(Debug, Clone, Default)]
pub struct DataStore {
    /// Engagement-level project record
    pub project: ProjectInfo,
    /// Design options in presentation order
    options: IndexMap<OptionId, DesignOption>,
    /// Per-option zones and manufacturing data
    data: IndexMap<OptionId, ProjectData>,
    /// Timeline milestones
    pub timeline: Vec<TimelineMilestone>,
    /// Document register
    pub documents: Vec<DocumentCategory>,
    /// Hardware product catalog
    pub products: Vec<ProductCategory>,
}

impl DataStore {
    /// Assemble and validate the store from parsed fixture documents
    ///
    /// Validation is the only place referential integrity is checked;
    /// afterwards every by-id accessor is a plain map lookup.
    pub fn new(
        project: ProjectInfo,
        options: Vec<DesignOption>,
        project_data: Vec<(OptionId, Vec<Zone>, Vec<ManufacturingRecord>)>,
        timeline: Vec<TimelineMilestone>,
        documents: Vec<DocumentCategory>,
    ) -> Result<Self, StoreError> {
        if options.is_empty() {
            return Err(StoreError::NoOptions);
        }

        let mut option_map = IndexMap::with_capacity(options.len());
        for option in options {
            let id = option.id.clone();
            if option_map.insert(id.clone(), option).is_some() {
                return Err(StoreError::DuplicateOption(id));
            }
        }

        let mut data = IndexMap::with_capacity(project_data.len());
        for (option_id, zones, records) in project_data {
            if !option_map.contains_key(&option_id) {
                return Err(StoreError::UnknownOption(option_id));
            }
            let parts = ProjectData::from_parts(&option_id, zones, records)?;
            data.insert(option_id, parts);
        }

        Ok(Self {
            project,
            options: option_map,
            data,
            timeline,
            documents,
            products: Vec::new(),
        })
    }

    /// Attach the hardware product catalog
    #[inline]
    #[must_use]
    pub fn with_products(mut self, products: Vec<ProductCategory>) -> Self {
        self.products = products;
        self
    }

    /// Header figures over the product catalog
    #[inline]
    #[must_use]
    pub fn catalog_summary(&self) -> CatalogSummary {
        catalog_summary(&self.products)
    }

    /// Design options in presentation order
    #[inline]
    pub fn options(&self) -> impl Iterator<Item = &DesignOption> {
        self.options.values()
    }

    /// Number of design options
    #[inline]
    #[must_use]
    pub fn option_count(&self) -> usize {
        self.options.len()
    }

    /// The default pre-selected option: the second in fixture order
    ///
    /// The dashboard deliberately opens on the second option (the one
    /// under active review), not the first.
    #[must_use]
    pub fn default_option(&self) -> &DesignOption {
        self.options
            .get_index(1)
            .or_else(|| self.options.get_index(0))
            .map(|(_, option)| option)
            .expect("store is validated non-empty at load")
    }

    /// Look up a design option
    #[inline]
    #[must_use]
    pub fn option(&self, id: &OptionId) -> Option<&DesignOption> {
        self.options.get(id)
    }

    /// Project data (zones + manufacturing) for an option
    #[inline]
    #[must_use]
    pub fn project_data(&self, id: &OptionId) -> Option<&ProjectData> {
        self.data.get(id)
    }

    /// Look up a zone within an option's scope
    #[inline]
    #[must_use]
    pub fn zone(&self, option: &OptionId, zone: &ZoneId) -> Option<&Zone> {
        self.data.get(option)?.zones.get(zone)
    }

    /// Look up a manufacturing record within an option's scope
    #[inline]
    #[must_use]
    pub fn manufacturing(&self, option: &OptionId, cabinet: &CabinetId) -> Option<&ManufacturingRecord> {
        self.data.get(option)?.manufacturing.get(cabinet)
    }

    /// Whether `zone` belongs to `option`'s zone set
    #[inline]
    #[must_use]
    pub fn zone_in_option(&self, option: &OptionId, zone: &ZoneId) -> bool {
        self.zone(option, zone).is_some()
    }
}
