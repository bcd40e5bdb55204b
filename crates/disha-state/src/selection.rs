//! Selection/navigation state machine
//!
//! The navigation state is a strict hierarchy: a design option is always
//! selected, a zone may be selected within it, and a cabinet may be
//! selected within the zone. The visible view level is always the
//! deepest non-null selection:
//!
//! `Overview` → `ZoneView` → `CabinetDetail`
//!
//! Selecting a new option resets zone and cabinet; selecting a new zone
//! resets the cabinet. Unknown ids surface as [`NavError`] rather than
//! the original's silent lookup miss.

use disha_model::{CabinetId, DataStore, OptionId, ZoneId};

/// Which page level is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum ViewLevel {
    /// Project overview: option grid + zone map
    Overview,
    /// Single zone: metrics, cabinets, utilities
    ZoneView,
    /// Single cabinet: tabbed manufacturing record
    CabinetDetail,
}

/// Navigation errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NavError {
    /// Option id not present in the store
    #[error("unknown design option: {0}")]
    UnknownOption(OptionId),

    /// Zone id not in the current option's zone set
    #[error("zone {zone} does not belong to option {option}")]
    ZoneNotInOption {
        /// Currently selected option
        option: OptionId,
        /// Rejected zone id
        zone: ZoneId,
    },

    /// Cabinet id not in the selected zone
    #[error("cabinet {cabinet} does not belong to zone {zone}")]
    CabinetNotInZone {
        /// Currently selected zone
        zone: ZoneId,
        /// Rejected cabinet id
        cabinet: CabinetId,
    },

    /// Cabinet selection attempted outside `ZoneView`
    #[error("no zone selected")]
    NoZoneSelected,

    /// Back-from-cabinet attempted outside `CabinetDetail`
    #[error("no cabinet selected")]
    NoCabinetSelected,
}

/// Current selection, one instance per session
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectionState {
    /// Selected design option (always set)
    pub option: OptionId,
    /// Selected zone, if any
    pub zone: Option<ZoneId>,
    /// Selected cabinet, if any (implies a zone)
    pub cabinet: Option<CabinetId>,
}

impl SelectionState {
    /// Initial state: overview of the store's default option
    #[must_use]
    pub fn initial(store: &DataStore) -> Self {
        Self {
            option: store.default_option().id.clone(),
            zone: None,
            cabinet: None,
        }
    }

    /// The view level implied by the deepest non-null selection
    #[inline]
    #[must_use]
    pub fn view(&self) -> ViewLevel {
        match (&self.zone, &self.cabinet) {
            (Some(_), Some(_)) => ViewLevel::CabinetDetail,
            (Some(_), None) => ViewLevel::ZoneView,
            (None, _) => ViewLevel::Overview,
        }
    }

    /// Switch design option; valid from any state
    ///
    /// Clears zone and cabinet and returns to the overview.
    pub fn select_option(&self, store: &DataStore, id: OptionId) -> Result<Self, NavError> {
        if store.option(&id).is_none() {
            return Err(NavError::UnknownOption(id));
        }
        tracing::debug!(option = %id, "design option selected");
        Ok(Self {
            option: id,
            zone: None,
            cabinet: None,
        })
    }

    /// Select a zone of the current option
    ///
    /// Clears any cabinet selection. The zone must belong to the current
    /// option's zone set.
    pub fn select_zone(&self, store: &DataStore, id: ZoneId) -> Result<Self, NavError> {
        if !store.zone_in_option(&self.option, &id) {
            return Err(NavError::ZoneNotInOption {
                option: self.option.clone(),
                zone: id,
            });
        }
        tracing::debug!(option = %self.option, zone = %id, "zone selected");
        Ok(Self {
            option: self.option.clone(),
            zone: Some(id),
            cabinet: None,
        })
    }

    /// Select a cabinet; valid only from `ZoneView`
    pub fn select_cabinet(&self, store: &DataStore, id: CabinetId) -> Result<Self, NavError> {
        let Some(zone_id) = &self.zone else {
            return Err(NavError::NoZoneSelected);
        };
        let zone = store
            .zone(&self.option, zone_id)
            .ok_or_else(|| NavError::ZoneNotInOption {
                option: self.option.clone(),
                zone: zone_id.clone(),
            })?;
        if !zone.cabinets.contains(&id) {
            return Err(NavError::CabinetNotInZone {
                zone: zone_id.clone(),
                cabinet: id,
            });
        }
        tracing::debug!(zone = %zone_id, cabinet = %id, "cabinet selected");
        Ok(Self {
            option: self.option.clone(),
            zone: self.zone.clone(),
            cabinet: Some(id),
        })
    }

    /// Return from cabinet detail to the zone view
    pub fn back_to_zone(&self) -> Result<Self, NavError> {
        if self.cabinet.is_none() {
            return Err(NavError::NoCabinetSelected);
        }
        Ok(Self {
            option: self.option.clone(),
            zone: self.zone.clone(),
            cabinet: None,
        })
    }

    /// Return to the overview; valid from any state
    #[must_use]
    pub fn back_to_overview(&self) -> Self {
        Self {
            option: self.option.clone(),
            zone: None,
            cabinet: None,
        }
    }
}
