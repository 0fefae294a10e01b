use crate::domain::a001_product::ui::inventory::InventoryPage;
use crate::shared::api_utils::ApiConfig;
use leptos::prelude::*;

/// Products API location the app talks to.
pub fn api_config() -> ApiConfig {
    ApiConfig::default()
}

#[component]
pub fn App() -> impl IntoView {
    // Provide the products API location to the whole app via context.
    provide_context(api_config());

    view! {
        <InventoryPage />
    }
}
