use crate::a11y;
use crate::components::feedback_overlay::FeedbackOverlay;
use crate::components::pin_cell::PinCell;
use crate::components::scenario_picker::ScenarioPicker;
use crate::components::warning_alert::WarningAlert;
use crate::dom;
use crate::i18n::t;
use cofre_core::{EditOutcome, Outcome, PIN_LEN, Scenario, VaultConfig, VaultState};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VaultPageProps {
    /// Code table for the puzzle. Tests inject fixtures here; the app shell
    /// falls back to the shipped table.
    #[prop_or_else(VaultConfig::default_config)]
    pub config: VaultConfig,
}

fn announce_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Success => a11y::set_status(&t("overlay.success.title")),
        Outcome::Error => a11y::set_status(&t("overlay.error.title")),
        Outcome::Idle => {}
    }
}

/// The single puzzle screen: PIN grid on top, scenario picker below, with
/// the feedback overlay layered over everything on completion.
#[function_component(VaultPage)]
pub fn vault_page(props: &VaultPageProps) -> Html {
    let state = {
        let config = props.config.clone();
        use_state(move || VaultState::new(config))
    };

    let on_select = {
        let state = state.clone();
        Callback::from(move |scenario: Scenario| {
            let mut next = (*state).clone();
            next.select_scenario(scenario);
            state.set(next);
            dom::focus_pin_slot(0);
        })
    };

    let on_digit = {
        let state = state.clone();
        Callback::from(move |(index, raw): (usize, String)| {
            let mut next = (*state).clone();
            match next.edit_digit(index, &raw) {
                EditOutcome::Rejected => a11y::set_status(&t("vault.warning")),
                EditOutcome::Stored { advance_to } => {
                    if let Some(slot) = advance_to {
                        dom::focus_pin_slot(slot);
                    }
                    announce_outcome(next.outcome());
                }
            }
            state.set(next);
        })
    };

    let on_backspace = {
        let state = state.clone();
        Callback::from(move |index: usize| {
            if let Some(prev) = state.backspace(index) {
                dom::focus_pin_slot(prev);
            }
        })
    };

    let on_dismiss = {
        let state = state.clone();
        Callback::from(move |()| {
            let mut next = (*state).clone();
            if next.dismiss_overlay() {
                dom::focus_pin_slot(0);
            }
            state.set(next);
        })
    };

    let cells = (0..PIN_LEN).map(|index| {
        html! {
            <PinCell
                key={index}
                index={index}
                value={AttrValue::from(state.pin().slot(index).to_string())}
                hint={state.digit_hint(index)}
                inactive={state.selected().is_none()}
                on_digit={on_digit.clone()}
                on_backspace={on_backspace.clone()}
            />
        }
    });

    html! {
        <div class="vault-page" data-testid="vault-page">
            <main class="vault-page__entry">
                <h1>{ t("vault.entry_heading") }</h1>
                <div class="pin-grid" role="group" aria-label={t("vault.entry_heading")}>
                    { for cells }
                </div>
                <WarningAlert visible={state.show_warning()} />
            </main>
            <footer class="vault-page__scenarios">
                <p class="muted">{ t("vault.instruction") }</p>
                <ScenarioPicker
                    selected={state.selected()}
                    highlight_missing={state.show_warning()}
                    on_select={on_select}
                />
            </footer>
            <div id="vault-helper" class="sr-only" aria-live="polite" />
            <FeedbackOverlay
                open={state.overlay_open()}
                outcome={state.outcome()}
                on_dismiss={on_dismiss}
            />
        </div>
    }
}
