use contracts::domain::a001_product::aggregate::{NewProduct, Product, ProductId};
use contracts::domain::a002_stock_transaction::aggregate::Transaction;
use contracts::shared::numeric::{parse_decimal_prefix, parse_integer_prefix};
use leptos::prelude::*;

/// Draft product fields as typed by the user
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub name: String,
    pub description: String,
    pub category: String,
    pub price: String,
    pub quantity: String,
}

impl ProductForm {
    pub fn from_product(p: &Product) -> Self {
        Self {
            name: p.name.clone(),
            description: p.description.clone(),
            category: p.category.clone(),
            price: p.price.to_string(),
            quantity: p.quantity.to_string(),
        }
    }

    /// Payload with price and quantity coerced, 0 when a field does not parse
    pub fn to_new_product(&self) -> NewProduct {
        NewProduct {
            name: self.name.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            price: parse_decimal_prefix(&self.price).unwrap_or(0.0),
            quantity: parse_integer_prefix(&self.quantity).unwrap_or(0),
        }
    }
}

/// What submitting the product form should do
#[derive(Clone, Debug, PartialEq)]
pub enum FormSubmission {
    Create(NewProduct),
    Update(Product),
    /// The editing index points past the end of the current list.
    StaleIndex(usize),
}

/// Why a sale was refused. `Display` is the text shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SellError {
    #[error("Please select a product to sell.")]
    NoSelection,
    #[error("Please enter a valid quantity to sell.")]
    InvalidQuantity,
    #[error("Cannot sell more than available stock")]
    InsufficientStock { requested: i64, available: i64 },
}

/// A validated sale, ready to be sent
#[derive(Clone, Debug, PartialEq)]
pub struct SalePlan {
    /// Product as cached when the sale was checked.
    pub product: Product,
    pub quantity: i64,
    /// Full product body for the update request.
    pub updated: Product,
}

/// Everything the inventory page shows and edits
#[derive(Clone, Debug, Default)]
pub struct InventoryState {
    /// Last normalized snapshot from `GET /products`.
    pub products: Vec<Product>,
    pub form: ProductForm,
    /// `Some` while the form edits an existing product.
    pub editing_index: Option<usize>,
    pub selected_product_id: Option<ProductId>,
    pub sell_quantity: String,
    pub transactions: Vec<Transaction>,
}

impl InventoryState {
    pub fn is_editing(&self) -> bool {
        self.editing_index.is_some()
    }

    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.products = products;
    }

    pub fn product_id_at(&self, index: usize) -> Option<ProductId> {
        self.products.get(index).map(|p| p.id.clone())
    }

    pub fn form_submission(&self) -> FormSubmission {
        let fields = self.form.to_new_product();
        match self.editing_index {
            None => FormSubmission::Create(fields),
            Some(index) => match self.products.get(index) {
                Some(existing) => FormSubmission::Update(existing.with_fields(fields)),
                None => FormSubmission::StaleIndex(index),
            },
        }
    }

    /// Load the product at `index` into the form. Returns false if there is none.
    pub fn begin_edit(&mut self, index: usize) -> bool {
        match self.products.get(index) {
            Some(p) => {
                self.form = ProductForm::from_product(p);
                self.editing_index = Some(index);
                true
            }
            None => false,
        }
    }

    pub fn reset_fields(&mut self) {
        self.form = ProductForm::default();
        self.editing_index = None;
    }

    pub fn select_product(&mut self, id: ProductId) {
        self.selected_product_id = Some(id);
        self.sell_quantity.clear();
    }

    pub fn is_selected(&self, id: &ProductId) -> bool {
        self.selected_product_id.as_ref() == Some(id)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        let id = self.selected_product_id.as_ref()?;
        self.products.iter().find(|p| &p.id == id)
    }

    /// Check the sell form against the cached stock.
    pub fn plan_sale(&self) -> Result<SalePlan, SellError> {
        let product = self.selected_product().ok_or(SellError::NoSelection)?;
        let quantity = parse_integer_prefix(&self.sell_quantity)
            .filter(|q| *q > 0)
            .ok_or(SellError::InvalidQuantity)?;
        if quantity > product.quantity {
            return Err(SellError::InsufficientStock {
                requested: quantity,
                available: product.quantity,
            });
        }

        Ok(SalePlan {
            product: product.clone(),
            quantity,
            updated: product.with_quantity(product.quantity - quantity),
        })
    }

    /// Close the sell form, logging the transaction if the sale went through.
    pub fn finish_sale(&mut self, transaction: Option<Transaction>) {
        if let Some(tx) = transaction {
            self.transactions.push(tx);
        }
        self.sell_quantity.clear();
        self.selected_product_id = None;
    }
}

/// Single owner of [`InventoryState`]
///
/// `write` is the notify step: views observing the store re-render after it.
pub trait StateStore {
    fn read<R>(&self, f: impl FnOnce(&InventoryState) -> R) -> R;
    fn write(&self, f: impl FnOnce(&mut InventoryState));
}

impl StateStore for RwSignal<InventoryState> {
    fn read<R>(&self, f: impl FnOnce(&InventoryState) -> R) -> R {
        self.with_untracked(f)
    }

    fn write(&self, f: impl FnOnce(&mut InventoryState)) {
        self.update(f);
    }
}

pub fn create_state() -> RwSignal<InventoryState> {
    RwSignal::new(InventoryState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Map;

    fn product(id: i64, name: &str, price: f64, quantity: i64) -> Product {
        Product {
            id: ProductId::Number(id),
            name: name.to_string(),
            description: format!("{} description", name),
            category: "General".to_string(),
            price,
            quantity,
            extra: Map::new(),
        }
    }

    fn state_with_products() -> InventoryState {
        InventoryState {
            products: vec![
                product(1, "Pen", 1.5, 10),
                product(2, "Pad", 3.0, 4),
                product(3, "Ink", 5.0, 7),
            ],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_numeric_fields_submit_zero() {
        let mut state = InventoryState::default();
        state.form.name = "Stapler".to_string();

        assert_eq!(
            state.form_submission(),
            FormSubmission::Create(NewProduct {
                name: "Stapler".to_string(),
                price: 0.0,
                quantity: 0,
                ..Default::default()
            })
        );
    }

    #[test]
    fn test_begin_edit_copies_product_into_form() {
        let mut state = state_with_products();

        assert!(state.begin_edit(2));
        assert!(state.is_editing());
        assert_eq!(state.form.name, "Ink");
        assert_eq!(state.form.price, "5");
        assert_eq!(state.form.quantity, "7");
    }

    #[test]
    fn test_begin_edit_out_of_range_is_noop() {
        let mut state = state_with_products();

        assert!(!state.begin_edit(9));
        assert_eq!(state.editing_index, None);
        assert_eq!(state.form, ProductForm::default());
    }

    #[test]
    fn test_edit_submission_targets_product_at_index() {
        let mut state = state_with_products();
        state.begin_edit(1);
        state.form.price = "3.25".to_string();

        match state.form_submission() {
            FormSubmission::Update(p) => {
                assert_eq!(p.id, ProductId::Number(2));
                assert_eq!(p.price, 3.25);
                assert_eq!(p.quantity, 4);
            }
            other => panic!("expected update, got {:?}", other),
        }
    }

    #[test]
    fn test_stale_editing_index() {
        let mut state = state_with_products();
        state.begin_edit(2);
        state.products.truncate(1);

        assert_eq!(state.form_submission(), FormSubmission::StaleIndex(2));
    }

    #[test]
    fn test_reset_fields() {
        let mut state = state_with_products();
        state.begin_edit(0);
        state.reset_fields();

        assert_eq!(state.form, ProductForm::default());
        assert!(!state.is_editing());
    }

    #[test]
    fn test_select_product_clears_sell_quantity() {
        let mut state = state_with_products();
        state.sell_quantity = "5".to_string();
        state.select_product(ProductId::Number(2));

        assert!(state.is_selected(&ProductId::Number(2)));
        assert_eq!(state.sell_quantity, "");
        assert_eq!(state.selected_product().map(|p| p.name.as_str()), Some("Pad"));
    }

    #[test]
    fn test_plan_sale_requires_selection() {
        let mut state = state_with_products();
        state.sell_quantity = "1".to_string();
        assert_eq!(state.plan_sale(), Err(SellError::NoSelection));

        state.selected_product_id = Some(ProductId::Number(99));
        assert_eq!(state.plan_sale(), Err(SellError::NoSelection));
    }

    #[test]
    fn test_plan_sale_rejects_bad_quantity() {
        let mut state = state_with_products();
        state.select_product(ProductId::Number(1));

        for input in ["", "abc", "0", "-3"] {
            state.sell_quantity = input.to_string();
            assert_eq!(state.plan_sale(), Err(SellError::InvalidQuantity), "{input}");
        }
    }

    #[test]
    fn test_plan_sale_rejects_more_than_stock() {
        let mut state = state_with_products();
        state.select_product(ProductId::Number(2));
        state.sell_quantity = "5".to_string();

        let err = state.plan_sale().unwrap_err();
        assert_eq!(
            err,
            SellError::InsufficientStock {
                requested: 5,
                available: 4
            }
        );
        assert_eq!(err.to_string(), "Cannot sell more than available stock");
    }

    #[test]
    fn test_plan_sale_decrements_quantity() {
        let mut state = state_with_products();
        state.select_product(ProductId::Number(2));
        state.sell_quantity = "4".to_string();

        let plan = state.plan_sale().unwrap();
        assert_eq!(plan.quantity, 4);
        assert_eq!(plan.updated.quantity, 0);
        assert_eq!(plan.updated.name, "Pad");
        assert_eq!(plan.product.quantity, 4);
    }

    #[test]
    fn test_finish_sale_clears_selection() {
        let mut state = state_with_products();
        state.select_product(ProductId::Number(1));
        state.sell_quantity = "2".to_string();
        let tx = Transaction::sale(&state.products[0], 2, "now".to_string());

        state.finish_sale(Some(tx));
        assert_eq!(state.transactions.len(), 1);
        assert_eq!(state.selected_product_id, None);
        assert_eq!(state.sell_quantity, "");

        state.finish_sale(None);
        assert_eq!(state.transactions.len(), 1);
    }
}
