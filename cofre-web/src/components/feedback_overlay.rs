use crate::i18n::t;
use cofre_core::Outcome;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    pub open: bool,
    pub outcome: Outcome,
    pub on_dismiss: Callback<()>,
}

/// Full-screen feedback panel shown when a complete code has been judged.
/// Dismissed by clicking anywhere on it or pressing Escape.
#[function_component(FeedbackOverlay)]
pub fn feedback_overlay(props: &Props) -> Html {
    if !props.open {
        return Html::default();
    }
    let (variant, glyph, title_key, body_key) = match props.outcome {
        Outcome::Success => (
            "overlay--success",
            "✔",
            "overlay.success.title",
            "overlay.success.body",
        ),
        Outcome::Error => (
            "overlay--error",
            "✖",
            "overlay.error.title",
            "overlay.error.body",
        ),
        Outcome::Idle => return Html::default(),
    };

    let onclick = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |_| cb.emit(()))
    };
    let onkeydown = {
        let cb = props.on_dismiss.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                e.prevent_default();
                cb.emit(());
            }
        })
    };

    html! {
        <div
            class={classes!("overlay", variant)}
            role="dialog"
            aria-modal="true"
            aria-label={t(title_key)}
            tabindex="-1"
            data-testid="feedback-overlay"
            {onclick}
            {onkeydown}
        >
            <div class="overlay__content">
                <span class="overlay__glyph" aria-hidden="true">{ glyph }</span>
                <h2>{ t(title_key) }</h2>
                <p>{ t(body_key) }</p>
                <p class="overlay__hint">{ t("overlay.dismiss") }</p>
            </div>
        </div>
    }
}
