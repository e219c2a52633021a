//! Attaches ancestors and descendants to catalog records.

use rustc_hash::FxHashMap;
use sqlx::{Postgres, Transaction};

use crate::{
    domain::{
        brands::records::BrandRecord, categories::records::CategoryRecord,
        models::records::ModelRecord, products::records::ProductRecord,
    },
    ids::TypedId,
};

use super::{Depth, repository::PgHierarchyRepository};

#[derive(Debug, Clone, Default)]
pub(crate) struct HierarchyLoader {
    repository: PgHierarchyRepository,
}

impl HierarchyLoader {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self {
            repository: PgHierarchyRepository::new(),
        }
    }

    /// Attach up to `depth` levels of categories, models and products.
    pub(crate) async fn attach_brand_descendants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        brands: &mut [BrandRecord],
        depth: Depth,
    ) -> Result<(), sqlx::Error> {
        let Some(next) = depth.descend() else {
            return Ok(());
        };

        if brands.is_empty() {
            return Ok(());
        }

        let mut categories = self
            .repository
            .list_categories_for_brands(tx, ids_of(brands, |brand| &brand.id))
            .await?;

        self.attach_category_descendants(tx, &mut categories, next)
            .await?;

        let mut by_brand = group_by(categories, |category| &category.brand_id);

        for brand in brands {
            brand.categories = Some(by_brand.remove(&brand.id).unwrap_or_default());
        }

        Ok(())
    }

    /// Attach up to `depth` levels of models and products.
    pub(crate) async fn attach_category_descendants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        categories: &mut [CategoryRecord],
        depth: Depth,
    ) -> Result<(), sqlx::Error> {
        let Some(next) = depth.descend() else {
            return Ok(());
        };

        if categories.is_empty() {
            return Ok(());
        }

        let mut models = self
            .repository
            .list_models_for_categories(tx, ids_of(categories, |category| &category.id))
            .await?;

        self.attach_model_descendants(tx, &mut models, next).await?;

        let mut by_category = group_by(models, |model| &model.category_id);

        for category in categories {
            category.models = Some(by_category.remove(&category.id).unwrap_or_default());
        }

        Ok(())
    }

    /// Attach products when `depth` allows at least one level.
    pub(crate) async fn attach_model_descendants(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        models: &mut [ModelRecord],
        depth: Depth,
    ) -> Result<(), sqlx::Error> {
        if depth.descend().is_none() || models.is_empty() {
            return Ok(());
        }

        let products = self
            .repository
            .list_products_for_models(tx, ids_of(models, |model| &model.id))
            .await?;

        let mut by_model = group_by(products, |product| &product.model_id);

        for model in models {
            model.products = Some(by_model.remove(&model.id).unwrap_or_default());
        }

        Ok(())
    }

    /// Attach each category's brand.
    pub(crate) async fn attach_category_ancestors(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        categories: &mut [CategoryRecord],
    ) -> Result<(), sqlx::Error> {
        if categories.is_empty() {
            return Ok(());
        }

        let brands = self
            .repository
            .get_brands_by_ids(tx, ids_of(categories, |category| &category.brand_id))
            .await?;

        let brands = index_by(brands, |brand| &brand.id);

        for category in categories {
            category.brand = brands.get(&category.brand_id).cloned().map(Box::new);
        }

        Ok(())
    }

    /// Attach each model's category, which in turn carries its brand.
    pub(crate) async fn attach_model_ancestors(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        models: &mut [ModelRecord],
    ) -> Result<(), sqlx::Error> {
        if models.is_empty() {
            return Ok(());
        }

        let mut categories = self
            .repository
            .get_categories_by_ids(tx, ids_of(models, |model| &model.category_id))
            .await?;

        self.attach_category_ancestors(tx, &mut categories).await?;

        let categories = index_by(categories, |category| &category.id);

        for model in models {
            model.category = categories.get(&model.category_id).cloned().map(Box::new);
        }

        Ok(())
    }

    /// Attach each product's model, category and brand.
    pub(crate) async fn attach_product_ancestors(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        products: &mut [ProductRecord],
    ) -> Result<(), sqlx::Error> {
        if products.is_empty() {
            return Ok(());
        }

        let mut models = self
            .repository
            .get_models_by_ids(tx, ids_of(products, |product| &product.model_id))
            .await?;

        self.attach_model_ancestors(tx, &mut models).await?;

        let models = index_by(models, |model| &model.id);

        for product in products {
            product.model = models.get(&product.model_id).cloned().map(Box::new);
        }

        Ok(())
    }

    /// Attach the sales and purchases that reference a product.
    pub(crate) async fn attach_product_history(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        product: &mut ProductRecord,
    ) -> Result<(), sqlx::Error> {
        let sales = self
            .repository
            .list_sales_for_product(tx, &product.id)
            .await?;

        let purchases = self
            .repository
            .list_purchases_for_product(tx, &product.id)
            .await?;

        product.sales = Some(sales);
        product.purchases = Some(purchases);

        Ok(())
    }
}

/// Distinct ids for an `= ANY($1)` lookup.
fn ids_of<R, K>(records: &[R], id: impl Fn(&R) -> &TypedId<K>) -> Vec<String> {
    let mut ids: Vec<String> = records
        .iter()
        .map(|record| id(record).as_str().to_owned())
        .collect();

    ids.sort_unstable();
    ids.dedup();

    ids
}

/// Group children under their parent id, preserving query order.
fn group_by<R, K>(
    records: Vec<R>,
    parent: impl Fn(&R) -> &TypedId<K>,
) -> FxHashMap<TypedId<K>, Vec<R>> {
    let mut grouped: FxHashMap<TypedId<K>, Vec<R>> = FxHashMap::default();

    for record in records {
        grouped
            .entry(parent(&record).clone())
            .or_default()
            .push(record);
    }

    grouped
}

fn index_by<R, K>(records: Vec<R>, id: impl Fn(&R) -> &TypedId<K>) -> FxHashMap<TypedId<K>, R> {
    records
        .into_iter()
        .map(|record| (id(&record).clone(), record))
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::{brands::records::BrandId, categories::records::CategoryId};

    use super::*;

    fn make_category(id: &str, brand: &str) -> CategoryRecord {
        CategoryRecord {
            id: CategoryId::from(id),
            brand_id: BrandId::from(brand),
            name: format!("Category {id}"),
            description: None,
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
            brand: None,
            models: None,
        }
    }

    #[test]
    fn ids_of_deduplicates_parent_ids() {
        let categories = vec![
            make_category("c1", "b2"),
            make_category("c2", "b1"),
            make_category("c3", "b2"),
        ];

        let ids = ids_of(&categories, |category| &category.brand_id);

        assert_eq!(ids, vec!["b1".to_owned(), "b2".to_owned()]);
    }

    #[test]
    fn group_by_keeps_children_in_query_order() {
        let categories = vec![
            make_category("c1", "b1"),
            make_category("c2", "b2"),
            make_category("c3", "b1"),
        ];

        let grouped = group_by(categories, |category| &category.brand_id);

        let b1: Vec<&str> = grouped
            .get("b1")
            .map(|children| children.iter().map(|c| c.id.as_str()).collect())
            .unwrap_or_default();

        assert_eq!(b1, vec!["c1", "c3"]);
        assert_eq!(grouped.get("b2").map(Vec::len), Some(1));
        assert!(grouped.get("b3").is_none(), "unknown parent has no group");
    }

    #[test]
    fn index_by_keys_records_by_id() {
        let index = index_by(vec![make_category("c1", "b1")], |category| &category.id);

        assert_eq!(index.get("c1").map(|c| c.brand_id.as_str()), Some("b1"));
    }
}
