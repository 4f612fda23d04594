use crate::a11y;
use crate::pages::vault::VaultPage;
use yew::prelude::*;

/// Top-level component mounting the single vault puzzle screen.
#[function_component(App)]
pub fn app() -> Html {
    html! {
        <>
            <style>{ a11y::visible_focus_css() }</style>
            <VaultPage />
        </>
    }
}
