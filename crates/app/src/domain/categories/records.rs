//! Category Records

use jiff::Timestamp;

use crate::{
    domain::{
        brands::records::{BrandId, BrandRecord},
        models::records::ModelRecord,
    },
    ids::TypedId,
};

/// Category Id
pub type CategoryId = TypedId<CategoryRecord>;

/// Category Record
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRecord {
    pub id: CategoryId,
    pub brand_id: BrandId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    /// Owning brand, without descendants.
    pub brand: Option<Box<BrandRecord>>,

    /// Attached models, `None` when descendants were not loaded.
    pub models: Option<Vec<ModelRecord>>,
}
