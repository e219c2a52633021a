//! Model Responses

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use inventory_app::domain::models::records::ModelRecord;

use crate::{categories::responses::CategorySummary, products::responses::ProductResponse};

/// Model with its ancestors and products
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModelResponse {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,

    /// Owning category with its brand
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummary>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub products: Option<Vec<ProductResponse>>,
}

impl From<ModelRecord> for ModelResponse {
    fn from(model: ModelRecord) -> Self {
        ModelResponse {
            id: model.id.into_string(),
            category_id: model.category_id.into_string(),
            name: model.name,
            description: model.description,
            created_at: model.created_at.to_string(),
            updated_at: model.updated_at.to_string(),
            category: model.category.map(|category| (*category).into()),
            products: model
                .products
                .map(|products| products.into_iter().map(Into::into).collect()),
        }
    }
}

/// Model as an ancestor of a product
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ModelSummary {
    pub id: String,
    pub category_id: String,
    pub name: String,
    pub description: Option<String>,
    pub created_at: String,
    pub updated_at: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<CategorySummary>,
}

impl From<ModelRecord> for ModelSummary {
    fn from(model: ModelRecord) -> Self {
        ModelSummary {
            id: model.id.into_string(),
            category_id: model.category_id.into_string(),
            name: model.name,
            description: model.description,
            created_at: model.created_at.to_string(),
            updated_at: model.updated_at.to_string(),
            category: model.category.map(|category| (*category).into()),
        }
    }
}
