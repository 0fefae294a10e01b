use leptos::prelude::*;

/// Bare radio button for picking a single table row
#[component]
pub fn RowRadio(
    /// Name attribute (for grouping)
    #[prop(into)]
    name: String,
    /// Whether this row is the selected one
    #[prop(into)]
    checked: Signal<bool>,
    /// Fired when the user picks this row
    on_select: Callback<()>,
) -> impl IntoView {
    view! {
        <input
            type="radio"
            class="form__radio"
            name=name
            prop:checked=move || checked.get()
            on:change=move |_| on_select.run(())
        />
    }
}
