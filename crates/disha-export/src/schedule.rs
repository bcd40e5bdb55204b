//! CSV schedules
//!
//! Column layout matches the manufacturing handoff sheets:
//! - parts: `Part ID,Name,Material,Finish,Dimensions,Quantity,Edge Banding`
//! - hardware: `Article,Name,Quantity,Specifications,Hafele Link`
//!
//! Free-text columns are double-quoted; embedded quotes are doubled.
//! The hardware specifications column carries the JSON-encoded map so a
//! spreadsheet keeps one row per article.

use disha_model::{HardwareItem, Part};

/// Search link for a Hafele article number
#[must_use]
pub fn hafele_link(article: &str) -> String {
    format!("https://www.hafele.com/in/en/search/?q={article}")
}

/// Render the parts schedule CSV
#[must_use]
pub fn parts_csv(parts: &[Part]) -> String {
    let mut out = String::from("Part ID,Name,Material,Finish,Dimensions,Quantity,Edge Banding\n");
    for part in parts {
        out.push_str(&format!(
            "{},{},{},{},{},{},{}\n",
            part.id,
            quote(&part.name),
            quote(&part.material),
            quote(&part.finish),
            part.dimensions,
            part.quantity,
            quote(&part.edge_banding.join(", ")),
        ));
    }
    out
}

/// Render the hardware schedule CSV
#[must_use]
pub fn hardware_csv(hardware: &[HardwareItem]) -> String {
    let mut out = String::from("Article,Name,Quantity,Specifications,Hafele Link\n");
    for item in hardware {
        let specs = serde_json::to_string(&item.specifications).unwrap_or_default();
        out.push_str(&format!(
            "{},{},{},{},{}\n",
            item.article,
            quote(&item.name),
            item.quantity,
            quote(&specs),
            hafele_link(&item.article),
        ));
    }
    out
}

/// Double-quote a field, doubling embedded quotes
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}
