use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ProductStatus {
    #[default]
    Active,
    Inactive,
}

impl ProductStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::Active => "Active",
            ProductStatus::Inactive => "Inactive",
        }
    }
}

/// One row of the analytics table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: u64,
    pub name: String,
    pub category: String,
    pub sales: u64,
    pub revenue: u64,
    /// Period-over-period change, in percent.
    pub growth: f64,
    #[serde(default)]
    pub status: ProductStatus,
}
