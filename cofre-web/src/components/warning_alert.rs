use crate::i18n::t;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub visible: bool,
}

/// Inline non-blocking warning shown when a digit is typed before any
/// scenario is selected.
#[function_component(WarningAlert)]
pub fn warning_alert(props: &Props) -> Html {
    if !props.visible {
        return Html::default();
    }

    html! {
        <div class="alert alert--warning" role="alert" data-testid="selection-warning">
            { t("vault.warning") }
        </div>
    }
}
