//! Brand Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use inventory_app::domain::brands::records::BrandRecord;

use crate::categories::responses::CategoryResponse;

/// Brand with its descendants
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrandResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,

    /// Present when the requested depth reaches categories
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<CategoryResponse>>,
}

impl From<BrandRecord> for BrandResponse {
    fn from(brand: BrandRecord) -> Self {
        BrandResponse {
            id: brand.id.into_string(),
            name: brand.name,
            description: brand.description,
            created_at: brand.created_at.to_string(),
            updated_at: brand.updated_at.to_string(),
            categories: brand
                .categories
                .map(|categories| categories.into_iter().map(Into::into).collect()),
        }
    }
}

/// Brand as an ancestor of another record
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct BrandSummary {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<BrandRecord> for BrandSummary {
    fn from(brand: BrandRecord) -> Self {
        BrandSummary {
            id: brand.id.into_string(),
            name: brand.name,
            description: brand.description,
            created_at: brand.created_at.to_string(),
            updated_at: brand.updated_at.to_string(),
        }
    }
}
