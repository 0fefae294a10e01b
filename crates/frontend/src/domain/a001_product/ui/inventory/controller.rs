use super::state::{FormSubmission, InventoryState, SellError, StateStore};
use crate::domain::a001_product::api::ProductApi;
use crate::shared::date_utils::now_display;
use crate::shared::dialogs::alert;
use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::a002_stock_transaction::aggregate::Transaction;
use leptos::task::spawn_local;

/// Handlers of the inventory page
///
/// Each handler awaits its requests in order and finishes with a refetch, so
/// the product list is always the server's snapshot. Request failures are
/// logged and otherwise ignored.
#[derive(Clone)]
pub struct InventoryController<A, S> {
    api: A,
    store: S,
}

impl<A: ProductApi, S: StateStore> InventoryController<A, S> {
    pub fn new(api: A, store: S) -> Self {
        Self { api, store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Replace the product cache with a fresh normalized list.
    /// On failure the previous cache stays.
    pub async fn fetch_products(&self) {
        match self.api.list_products().await {
            Ok(records) => {
                let products: Vec<Product> = records.into_iter().map(Into::into).collect();
                log::debug!("Loaded {} products", products.len());
                self.store.write(|s| s.replace_products(products));
            }
            Err(e) => log::error!("Error fetching products: {}", e),
        }
    }

    /// Create or update from the form, then refetch and reset the form.
    pub async fn add_or_update_product(&self) {
        match self.store.read(InventoryState::form_submission) {
            FormSubmission::Create(new_product) => {
                match self.api.create_product(&new_product).await {
                    Ok(()) => log::debug!("Created product {}", new_product.name),
                    Err(e) => log::warn!("Failed to create product {}: {}", new_product.name, e),
                }
            }
            FormSubmission::Update(product) => match self.api.update_product(&product).await {
                Ok(()) => log::debug!("Updated product {}", product.id),
                Err(e) => log::warn!("Failed to update product {}: {}", product.id, e),
            },
            FormSubmission::StaleIndex(index) => {
                log::warn!("Product at index {} is gone, nothing to update", index)
            }
        }

        self.fetch_products().await;
        self.store.write(InventoryState::reset_fields);
    }

    pub fn edit_product(&self, index: usize) {
        self.store.write(|s| {
            if !s.begin_edit(index) {
                log::warn!("No product at index {} to edit", index);
            }
        });
    }

    /// Delete the product at `index`, then refetch. Out-of-range is a no-op.
    pub async fn delete_product(&self, index: usize) {
        let Some(id) = self.store.read(|s| s.product_id_at(index)) else {
            log::warn!("No product at index {} to delete", index);
            return;
        };

        match self.api.delete_product(&id).await {
            Ok(()) => log::debug!("Deleted product {}", id),
            Err(e) => log::warn!("Failed to delete product {}: {}", id, e),
        }
        self.fetch_products().await;
    }

    pub fn select_product(&self, id: ProductId) {
        self.store.write(|s| s.select_product(id));
    }

    pub fn reset_fields(&self) {
        self.store.write(InventoryState::reset_fields);
    }

    /// Sell the entered quantity of the selected product.
    ///
    /// The new stock level is computed here from the cached quantity and sent
    /// as a full update, so two sales racing each other can both pass the
    /// check. Preventing that needs an atomic decrement on the server.
    ///
    /// Validation errors leave the state untouched and send nothing. A failed
    /// update records no transaction but still closes the sell form and refetches.
    pub async fn sell_stock(&self) -> Result<(), SellError> {
        let plan = match self.store.read(InventoryState::plan_sale) {
            Ok(plan) => plan,
            Err(SellError::NoSelection) => {
                self.store.write(|s| s.selected_product_id = None);
                return Err(SellError::NoSelection);
            }
            Err(e) => return Err(e),
        };

        let transaction = match self.api.update_product(&plan.updated).await {
            Ok(()) => {
                log::debug!(
                    "Sold {} of product {}, {} left",
                    plan.quantity,
                    plan.product.id,
                    plan.updated.quantity
                );
                Some(Transaction::sale(&plan.product, plan.quantity, now_display()))
            }
            Err(e) => {
                log::warn!("Failed to update stock of product {}: {}", plan.product.id, e);
                None
            }
        };

        self.store.write(|s| s.finish_sale(transaction));
        self.fetch_products().await;
        Ok(())
    }
}

// Fire-and-forget wrappers for event handlers.
impl<A, S> InventoryController<A, S>
where
    A: ProductApi + Clone + 'static,
    S: StateStore + Clone + 'static,
{
    pub fn fetch_command(&self) {
        let this = self.clone();
        spawn_local(async move { this.fetch_products().await });
    }

    pub fn save_command(&self) {
        let this = self.clone();
        spawn_local(async move { this.add_or_update_product().await });
    }

    pub fn delete_command(&self, index: usize) {
        let this = self.clone();
        spawn_local(async move { this.delete_product(index).await });
    }

    pub fn sell_command(&self) {
        let this = self.clone();
        spawn_local(async move {
            if let Err(e) = this.sell_stock().await {
                alert(&e.to_string());
            }
        });
    }
}
