//! Session state for the DISHA dashboard
//!
//! The two stateful pieces of the application:
//! - the selection/navigation hierarchy (design option ⊇ zone ⊇ cabinet)
//!   with its derived breadcrumb, and
//! - the design-workflow checklist with item-count-weighted progress
//!   roll-ups.
//!
//! Both are modelled as immutable snapshots updated through a pure
//! reducer over tagged [`Action`]s, so the roll-up invariants stay
//! independently testable and no hidden aliasing can desynchronise a
//! cached percentage from its leaves.

pub mod action;
pub mod breadcrumb;
pub mod checklist;
pub mod defaults;
pub mod external;
pub mod selection;

pub use action::{Action, ActionError, DashboardState};
pub use breadcrumb::{breadcrumb, Crumb, CrumbTarget};
pub use checklist::{Checklist, ChecklistItem, ChecklistPhase, ChecklistSection, Priority};
pub use external::{ExternalProject, ProjectLoadError};
pub use selection::{NavError, SelectionState, ViewLevel};
