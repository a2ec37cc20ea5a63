//! Field catalog: which columns are dimensions and which are measures

use serde::{Deserialize, Serialize};

/// Semantic type of a draggable field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Categorical, string-valued
    Dimension,
    /// Numeric
    Measure,
}

impl FieldType {
    /// Section heading in the field sidebar
    pub fn section_title(&self) -> &'static str {
        match self {
            FieldType::Dimension => "Dimensions",
            FieldType::Measure => "Measures",
        }
    }
}

/// Two disjoint lists of field names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldCatalog {
    pub dimensions: Vec<String>,
    pub measures: Vec<String>,
}

impl Default for FieldCatalog {
    fn default() -> Self {
        Self::sample()
    }
}

impl FieldCatalog {
    /// Catalog for the sample dataset
    pub fn sample() -> Self {
        Self {
            dimensions: vec!["name".into(), "region".into(), "category".into()],
            measures: vec!["sales".into(), "profit".into(), "customers".into()],
        }
    }

    /// Fields of the given type, in display order
    pub fn fields(&self, field_type: FieldType) -> &[String] {
        match field_type {
            FieldType::Dimension => &self.dimensions,
            FieldType::Measure => &self.measures,
        }
    }
}

/// Sidebar label for a field: first character upper-cased
pub fn display_label(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
