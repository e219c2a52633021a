//! Category Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use inventory_app::domain::categories::records::CategoryRecord;

use crate::{brands::responses::BrandSummary, models::responses::ModelResponse};

/// Category with its brand and descendants
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategoryResponse {
    pub id: String,
    pub brand_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandSummary>,

    /// Present when the requested depth reaches models
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub models: Option<Vec<ModelResponse>>,
}

impl From<CategoryRecord> for CategoryResponse {
    fn from(category: CategoryRecord) -> Self {
        CategoryResponse {
            id: category.id.into_string(),
            brand_id: category.brand_id.into_string(),
            name: category.name,
            description: category.description,
            created_at: category.created_at.to_string(),
            updated_at: category.updated_at.to_string(),
            brand: category.brand.map(|brand| (*brand).into()),
            models: category
                .models
                .map(|models| models.into_iter().map(Into::into).collect()),
        }
    }
}

/// Category as an ancestor, with its brand
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CategorySummary {
    pub id: String,
    pub brand_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<BrandSummary>,
}

impl From<CategoryRecord> for CategorySummary {
    fn from(category: CategoryRecord) -> Self {
        CategorySummary {
            id: category.id.into_string(),
            brand_id: category.brand_id.into_string(),
            name: category.name,
            description: category.description,
            created_at: category.created_at.to_string(),
            updated_at: category.updated_at.to_string(),
            brand: category.brand.map(|brand| (*brand).into()),
        }
    }
}
