//! Hardware product catalog
//!
//! The Hafele selections proposed for the project, grouped by category,
//! with per-line quantities and totals.

use serde::{Deserialize, Serialize};

/// A catalog category (`Hinges & Lift Systems`, `Drawer Systems`, ...)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductCategory {
    /// Category identifier
    pub id: String,
    /// Category name
    pub name: String,
    /// Products in this category
    pub products: Vec<Product>,
}

/// One catalog line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Product identifier (article number)
    pub id: String,
    /// Product name
    pub name: String,
    /// Short description
    pub description: String,
    /// Selection status
    pub status: ProductStatus,
    /// Quantity proposed
    pub quantity: u32,
    /// Unit price in rupees
    pub unit_price: u64,
    /// Line total in rupees
    pub total_price: u64,
}

/// Selection status of a catalog line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    /// Approved by the client
    Selected,
    /// Still being evaluated
    #[serde(rename = "Under Review")]
    UnderReview,
}

/// Summary figures over the whole catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSummary {
    /// Total product lines
    pub total_products: usize,
    /// Lines the client has approved
    pub selected: usize,
    /// Sum of all line totals in rupees
    pub total_value: u64,
}

/// Roll the catalog up into its header figures
#[must_use]
pub fn catalog_summary(categories: &[ProductCategory]) -> CatalogSummary {
    let mut summary = CatalogSummary {
        total_products: 0,
        selected: 0,
        total_value: 0,
    };
    for category in categories {
        summary.total_products += category.products.len();
        summary.selected += category
            .products
            .iter()
            .filter(|p| p.status == ProductStatus::Selected)
            .count();
        summary.total_value += category.products.iter().map(|p| p.total_price).sum::<u64>();
    }
    summary
}
