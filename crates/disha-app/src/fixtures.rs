//! Embedded fixture documents
//!
//! The JSON documents under `data/` compiled into the binary and parsed
//! into the validated [`DataStore`] once at startup.

use disha_model::{
    DataStore, DesignOption, DocumentCategory, ManufacturingRecord, OptionId, ProductCategory,
    ProjectInfo, StoreError, TimelineMilestone, Zone,
};
use indexmap::IndexMap;
use serde::Deserialize;

const PROJECT_INFO: &str = include_str!("../data/project-info.json");
const DESIGN_OPTIONS: &str = include_str!("../data/design-options.json");
const PROJECT_DATA: &str = include_str!("../data/project-data.json");
const TIMELINE: &str = include_str!("../data/timeline.json");
const DOCUMENTS: &str = include_str!("../data/documents.json");
const PRODUCTS: &str = include_str!("../data/hafele-products.json");

#[derive(Debug, Deserialize)]
struct OptionsDoc {
    options: Vec<DesignOption>,
}

#[derive(Debug, Deserialize)]
struct ProjectDataDoc {
    #[serde(flatten)]
    by_option: IndexMap<OptionId, OptionProjectData>,
}

#[derive(Debug, Deserialize)]
struct OptionProjectData {
    zones: Vec<Zone>,
    manufacturing: Vec<ManufacturingRecord>,
}

#[derive(Debug, Deserialize)]
struct TimelineDoc {
    milestones: Vec<TimelineMilestone>,
}

#[derive(Debug, Deserialize)]
struct DocumentsDoc {
    categories: Vec<DocumentCategory>,
}

#[derive(Debug, Deserialize)]
struct ProductsDoc {
    categories: Vec<ProductCategory>,
}

/// Parse and validate the embedded fixtures into a store
pub fn load() -> Result<DataStore, StoreError> {
    let project: ProjectInfo =
        serde_json::from_str(PROJECT_INFO).map_err(|e| StoreError::parse("project-info", e))?;
    let options: OptionsDoc =
        serde_json::from_str(DESIGN_OPTIONS).map_err(|e| StoreError::parse("design-options", e))?;
    let data: ProjectDataDoc =
        serde_json::from_str(PROJECT_DATA).map_err(|e| StoreError::parse("project-data", e))?;
    let timeline: TimelineDoc =
        serde_json::from_str(TIMELINE).map_err(|e| StoreError::parse("timeline", e))?;
    let documents: DocumentsDoc =
        serde_json::from_str(DOCUMENTS).map_err(|e| StoreError::parse("documents", e))?;
    let products: ProductsDoc =
        serde_json::from_str(PRODUCTS).map_err(|e| StoreError::parse("hafele-products", e))?;

    let project_data = data
        .by_option
        .into_iter()
        .map(|(id, parts)| (id, parts.zones, parts.manufacturing))
        .collect();

    let store = DataStore::new(
        project,
        options.options,
        project_data,
        timeline.milestones,
        documents.categories,
    )?
    .with_products(products.categories);
    tracing::info!(
        options = store.option_count(),
        milestones = store.timeline.len(),
        "fixtures loaded"
    );
    Ok(store)
}
