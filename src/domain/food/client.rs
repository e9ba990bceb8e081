//! Foods sub-client — catalog fetch, search, categories.

use crate::client::FoodiesClient;
use crate::domain::food::FoodItem;
use crate::error::SdkError;
use crate::shared::FoodId;

/// Sub-client for catalog operations.
pub struct Foods<'a> {
    pub(crate) client: &'a FoodiesClient,
}

impl<'a> Foods<'a> {
    /// Fetch the full catalog and replace the session snapshot.
    pub async fn refresh_catalog(&self) -> Result<Vec<FoodItem>, SdkError> {
        match self.client.http.get_foods().await {
            Ok(raw) => {
                let items: Vec<FoodItem> = raw.into_iter().map(Into::into).collect();
                self.client.session.write().await.catalog = items.clone();
                Ok(items)
            }
            Err(e) => Err(self.client.gateway_failure(e, "Could not load foods")),
        }
    }

    pub async fn get(&self, id: &FoodId) -> Result<FoodItem, SdkError> {
        match self.client.http.get_food_by_id(id).await {
            Ok(raw) => Ok(raw.into()),
            Err(e) => Err(self.client.gateway_failure(e, "Could not load food details")),
        }
    }

    pub async fn search(&self, query: &str) -> Result<Vec<FoodItem>, SdkError> {
        match self.client.http.search_foods(query).await {
            Ok(raw) => Ok(raw.into_iter().map(Into::into).collect()),
            Err(e) => Err(self.client.gateway_failure(e, "Search failed")),
        }
    }

    pub async fn by_category(&self, category: &str) -> Result<Vec<FoodItem>, SdkError> {
        match self.client.http.get_foods_by_category(category).await {
            Ok(raw) => Ok(raw.into_iter().map(Into::into).collect()),
            Err(e) => Err(self.client.gateway_failure(e, "Could not load category")),
        }
    }

    pub async fn categories(&self) -> Result<Vec<String>, SdkError> {
        match self.client.http.get_food_categories().await {
            Ok(categories) => Ok(categories),
            Err(e) => Err(self.client.gateway_failure(e, "Could not load categories")),
        }
    }
}
