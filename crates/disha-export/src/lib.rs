//! Export writers
//!
//! Pure formatting over a cabinet's manufacturing record and the
//! workflow checklist: a parts-schedule CSV, a hardware-schedule CSV, a
//! pretty-printed manufacturing package JSON and the progress report
//! JSON. By contract these perform no validation before formatting —
//! incomplete input yields incomplete (but never crashing) output.

pub mod package;
pub mod report;
pub mod schedule;

pub use package::{ManufacturingPackage, PackagedHardware, PackagedPart};
pub use report::ProgressReport;
pub use schedule::{hardware_csv, parts_csv};
