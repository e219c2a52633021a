//! Model Records

use jiff::Timestamp;

use crate::{
    domain::{
        categories::records::{CategoryId, CategoryRecord},
        products::records::ProductRecord,
    },
    ids::TypedId,
};

/// Model Id
pub type ModelId = TypedId<ModelRecord>;

/// Model Record
#[derive(Debug, Clone, PartialEq)]
pub struct ModelRecord {
    pub id: ModelId,
    pub category_id: CategoryId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    /// Owning category with its brand attached.
    pub category: Option<Box<CategoryRecord>>,

    /// Attached products, `None` when descendants were not loaded.
    pub products: Option<Vec<ProductRecord>>,
}
