use crate::i18n::t;
use cofre_core::DigitHint;
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub index: usize,
    pub value: AttrValue,
    pub hint: DigitHint,
    #[prop_or_default]
    pub inactive: bool,
    pub on_digit: Callback<(usize, String)>,
    pub on_backspace: Callback<usize>,
}

/// One single-character numeric cell of the PIN grid, addressable by its
/// positional id for focus control.
#[function_component(PinCell)]
pub fn pin_cell(props: &Props) -> Html {
    let oninput = {
        let cb = props.on_digit.clone();
        let index = props.index;
        Callback::from(move |e: InputEvent| {
            if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
                cb.emit((index, input.value()));
            }
        })
    };

    let onkeydown = {
        let cb = props.on_backspace.clone();
        let index = props.index;
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Backspace" {
                cb.emit(index);
            }
        })
    };

    let hint_class = match props.hint {
        DigitHint::Match => Some("pin-cell--match"),
        DigitHint::Mismatch => Some("pin-cell--mismatch"),
        DigitHint::Empty => None,
    };

    html! {
        <input
            id={crate::dom::pin_slot_id(props.index)}
            class={classes!(
                "pin-cell",
                hint_class,
                props.inactive.then_some("pin-cell--inactive"),
            )}
            type="text"
            inputmode="numeric"
            pattern="[0-9]*"
            maxlength="1"
            autocomplete="off"
            aria-label={format!("{} {}", t("vault.digit_label"), props.index + 1)}
            aria-disabled={props.inactive.to_string()}
            data-testid={format!("pin-cell-{}", props.index)}
            value={props.value.clone()}
            {oninput}
            {onkeydown}
        />
    }
}
