use crate::i18n::t;
use cofre_core::Scenario;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub selected: Option<Scenario>,
    /// Paint the buttons with the missing-selection warning styling.
    #[prop_or_default]
    pub highlight_missing: bool,
    pub on_select: Callback<Scenario>,
}

const fn scenario_glyph(scenario: Scenario) -> &'static str {
    match scenario {
        Scenario::Cidade => "🏙",
        Scenario::Floresta => "🌲",
        Scenario::Mar => "🌊",
    }
}

/// Three mutually exclusive scenario buttons. Exactly one can be active;
/// picking any of them resets the puzzle upstream.
#[function_component(ScenarioPicker)]
pub fn scenario_picker(props: &Props) -> Html {
    let warn = props.highlight_missing && props.selected.is_none();
    let buttons = Scenario::ALL.iter().map(|&scenario| {
        let is_selected = props.selected == Some(scenario);
        let onclick = {
            let cb = props.on_select.clone();
            Callback::from(move |_| cb.emit(scenario))
        };
        html! {
            <button
                type="button"
                role="radio"
                aria-checked={is_selected.to_string()}
                class={classes!(
                    "scenario-btn",
                    is_selected.then_some("scenario-btn--selected"),
                    warn.then_some("scenario-btn--warn"),
                )}
                {onclick}
                data-testid={format!("scenario-{scenario}")}
            >
                <span class="scenario-btn__glyph" aria-hidden="true">{ scenario_glyph(scenario) }</span>
                <span>{ t(&format!("scenario.{scenario}")) }</span>
            </button>
        }
    });

    html! {
        <div class="scenario-picker" role="radiogroup" aria-label={t("scenario.legend")}>
            { for buttons }
        </div>
    }
}
