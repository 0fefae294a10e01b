use super::controller::InventoryController;
use super::state::{create_state, InventoryState, ProductForm};
use crate::domain::a001_product::api::HttpProductApi;
use crate::shared::api_utils::ApiConfig;
use crate::shared::components::ui::{FormInput, RowRadio};
use crate::shared::number_format::format_money;
use contracts::domain::a001_product::aggregate::Product;
use contracts::domain::a002_stock_transaction::aggregate::Transaction;
use leptos::prelude::*;
use thaw::*;

type Controller = InventoryController<HttpProductApi, RwSignal<InventoryState>>;

#[component]
pub fn InventoryPage() -> impl IntoView {
    let config = use_context::<ApiConfig>().unwrap_or_default();
    let state = create_state();
    let controller: Controller = InventoryController::new(HttpProductApi::new(config), state);

    // Initial load on mount
    controller.fetch_command();

    let refresh = controller.clone();

    view! {
        <div class="page inventory-container">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Inventory"</h1>
                    <Badge>
                        {move || state.with(|s| s.products.len()).to_string()}
                    </Badge>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| refresh.fetch_command()
                    >
                        "Refresh"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                <ProductFormSection controller=controller.clone() />
                <ProductTable controller=controller.clone() />
                <SellStockSection controller=controller.clone() />
                <TransactionTable transactions=Signal::derive(move || state.with(|s| s.transactions.clone())) />
            </div>
        </div>
    }
}

/// Binds one draft form field to an input.
fn form_field(
    state: RwSignal<InventoryState>,
    get: fn(&ProductForm) -> String,
    set: fn(&mut ProductForm, String),
) -> (Signal<String>, Callback<String>) {
    (
        Signal::derive(move || state.with(|s| get(&s.form))),
        Callback::new(move |value: String| state.update(|s| set(&mut s.form, value))),
    )
}

#[component]
fn ProductFormSection(controller: Controller) -> impl IntoView {
    let state = *controller.store();
    let is_editing = move || state.with(|s| s.is_editing());
    let title = move || if is_editing() { "Update Product" } else { "Add Product" };

    let (name, on_name) = form_field(state, |f| f.name.clone(), |f, v| f.name = v);
    let (description, on_description) =
        form_field(state, |f| f.description.clone(), |f, v| f.description = v);
    let (category, on_category) = form_field(state, |f| f.category.clone(), |f, v| f.category = v);
    let (price, on_price) = form_field(state, |f| f.price.clone(), |f, v| f.price = v);
    let (quantity, on_quantity) = form_field(state, |f| f.quantity.clone(), |f, v| f.quantity = v);

    let save = controller.clone();
    let cancel = controller.clone();

    view! {
        <div class="details-form product-form">
            <h3>{title}</h3>
            <FormInput value=name on_input=on_name placeholder="Product Name" />
            <FormInput value=description on_input=on_description placeholder="Product Description" />
            <FormInput value=category on_input=on_category placeholder="Product Category" />
            <FormInput value=price on_input=on_price input_type="number" placeholder="Product Price" />
            <FormInput value=quantity on_input=on_quantity input_type="number" placeholder="Initial Quantity" />

            <div class="details-actions">
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| save.save_command()
                >
                    {title}
                </Button>
                <Show when=is_editing>
                    {
                        let cancel = cancel.clone();
                        view! {
                            <Button
                                appearance=ButtonAppearance::Secondary
                                on_click=move |_| cancel.reset_fields()
                            >
                                "Cancel"
                            </Button>
                        }
                    }
                </Show>
            </div>
        </div>
    }
}

#[component]
fn ProductTable(controller: Controller) -> impl IntoView {
    let products = products_memo(*controller.store());

    view! {
        <h3>"Products"</h3>
        <div class="product-list">
            <Show
                when=move || products.with(|p| !p.is_empty())
                fallback=|| view! { <p>"No products available. Please add a product."</p> }
            >
                {
                    let controller = controller.clone();
                    view! {
                        <Table class="product-table" attr:style="width: 100%;">
                            <TableHeader>
                                <TableRow>
                                    <TableHeaderCell>"Select"</TableHeaderCell>
                                    <TableHeaderCell>"Product Name"</TableHeaderCell>
                                    <TableHeaderCell>"Description"</TableHeaderCell>
                                    <TableHeaderCell>"Category"</TableHeaderCell>
                                    <TableHeaderCell>"Price"</TableHeaderCell>
                                    <TableHeaderCell>"Quantity"</TableHeaderCell>
                                    <TableHeaderCell>"Actions"</TableHeaderCell>
                                </TableRow>
                            </TableHeader>
                            <TableBody>
                                <ProductRows controller=controller.clone() products=products />
                            </TableBody>
                        </Table>
                    }
                }
            </Show>
        </div>
    }
}

/// Product list alone, so form and sell-field edits do not touch the rows.
fn products_memo(state: RwSignal<InventoryState>) -> Memo<Vec<Product>> {
    Memo::new(move |_| state.with(|s| s.products.clone()))
}

#[component]
fn ProductRows(controller: Controller, products: Memo<Vec<Product>>) -> impl IntoView {
    // Edit and delete address products by position in the current snapshot.
    move || {
        let controller = controller.clone();
        products
            .get()
            .into_iter()
            .enumerate()
            .map(move |(index, product)| {
                view! {
                    <ProductRow
                        controller=controller.clone()
                        index=index
                        product=product
                    />
                }
            })
            .collect_view()
    }
}

#[component]
fn ProductRow(controller: Controller, index: usize, product: Product) -> impl IntoView {
    let state = *controller.store();
    let id = product.id.clone();
    let is_selected = Signal::derive({
        let id = id.clone();
        move || state.with(|s| s.is_selected(&id))
    });

    let select = controller.clone();
    let edit = controller.clone();
    let delete = controller.clone();

    view! {
        <TableRow>
            <TableCell>
                <RowRadio
                    name="product"
                    checked=is_selected
                    on_select=Callback::new(move |_| select.select_product(id.clone()))
                />
            </TableCell>
            <TableCell><TableCellLayout truncate=true>{product.name.clone()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout truncate=true>{product.description.clone()}</TableCellLayout></TableCell>
            <TableCell><TableCellLayout>{product.category.clone()}</TableCellLayout></TableCell>
            <TableCell class="text-right">{format_money(product.price)}</TableCell>
            <TableCell class="text-right">{product.quantity}</TableCell>
            <TableCell>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| edit.edit_product(index)
                >
                    "Edit"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| delete.delete_command(index)
                >
                    "Delete"
                </Button>
            </TableCell>
        </TableRow>
    }
}

#[component]
fn SellStockSection(controller: Controller) -> impl IntoView {
    let state = *controller.store();
    let sell_quantity = Signal::derive(move || state.with(|s| s.sell_quantity.clone()));
    let on_sell_quantity = Callback::new(move |value: String| state.update(|s| s.sell_quantity = value));
    let selected_name = move || {
        state.with(|s| {
            s.selected_product()
                .map(|p| format!("Selected: {} ({} in stock)", p.name, p.quantity))
        })
    };

    view! {
        <h3>"Manage Stock"</h3>
        <div class="sell-stock">
            <h4>"Sell Stock"</h4>
            {move || selected_name().map(|text| view! { <div class="sell-stock__selected">{text}</div> })}
            <FormInput
                value=sell_quantity
                on_input=on_sell_quantity
                input_type="number"
                placeholder="Quantity to Sell"
            />
            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| controller.sell_command()
            >
                "Sell Stock"
            </Button>
        </div>
    }
}

#[component]
fn TransactionTable(#[prop(into)] transactions: Signal<Vec<Transaction>>) -> impl IntoView {
    view! {
        <h3>"Stock Transactions"</h3>
        <div class="transaction-list">
            <Show
                when=move || transactions.with(|t| !t.is_empty())
                fallback=|| view! { <p>"No stock transactions available."</p> }
            >
                <Table class="transaction-table" attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell>"Product Name"</TableHeaderCell>
                            <TableHeaderCell>"Quantity"</TableHeaderCell>
                            <TableHeaderCell>"Unit Price"</TableHeaderCell>
                            <TableHeaderCell>"Total"</TableHeaderCell>
                            <TableHeaderCell>"Date"</TableHeaderCell>
                            <TableHeaderCell>"Type"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=move || transactions.get()
                            key=|tx| tx.id
                            children=move |tx| {
                                view! {
                                    <TableRow>
                                        <TableCell><TableCellLayout truncate=true>{tx.product_name.clone()}</TableCellLayout></TableCell>
                                        <TableCell class="text-right">{tx.quantity}</TableCell>
                                        <TableCell class="text-right">{format_money(tx.price)}</TableCell>
                                        <TableCell class="text-right">{format_money(tx.total)}</TableCell>
                                        <TableCell>{tx.date.clone()}</TableCell>
                                        <TableCell>{tx.kind.as_str()}</TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </Show>
        </div>
    }
}
