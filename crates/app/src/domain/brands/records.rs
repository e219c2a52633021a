//! Brand Records

use jiff::Timestamp;

use crate::{domain::categories::records::CategoryRecord, ids::TypedId};

/// Brand Id
pub type BrandId = TypedId<BrandRecord>;

/// Brand Record
#[derive(Debug, Clone, PartialEq)]
pub struct BrandRecord {
    pub id: BrandId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,

    /// Attached categories, `None` when descendants were not loaded.
    pub categories: Option<Vec<CategoryRecord>>,
}
