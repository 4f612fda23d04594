use cofre_core::VaultConfig;
use cofre_web::dom;
use cofre_web::pages::vault::{VaultPage, VaultPageProps};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{EventTarget, HtmlElement, HtmlInputElement, InputEvent, InputEventInit};

wasm_bindgen_test::wasm_bindgen_test_configure!(run_in_browser);

fn mount_default() {
    let doc = dom::document();
    doc.body().unwrap().set_inner_html("");
    let root = doc.create_element("div").unwrap();
    root.set_id("app");
    doc.body().unwrap().append_child(&root).unwrap();
    yew::Renderer::<VaultPage>::with_root_and_props(
        root,
        VaultPageProps {
            config: VaultConfig::default_config(),
        },
    )
    .render();
}

fn click(testid: &str) {
    let el = dom::document()
        .query_selector(&format!("[data-testid='{testid}']"))
        .unwrap()
        .expect("element exists");
    el.dyn_ref::<HtmlElement>().unwrap().click();
}

fn type_digit(index: usize, digit: &str) {
    let input: HtmlInputElement = dom::document()
        .get_element_by_id(&dom::pin_slot_id(index))
        .expect("cell exists")
        .dyn_into()
        .unwrap();
    input.set_value(digit);
    let event =
        InputEvent::new_with_event_init_dict("input", InputEventInit::new().bubbles(true))
            .unwrap();
    let target: EventTarget = input.into();
    let _ = target.dispatch_event(&event);
}

#[wasm_bindgen_test]
fn typing_a_digit_moves_focus_to_the_next_cell() {
    mount_default();
    click("scenario-cidade");
    type_digit(0, "1");
    let active = dom::document().active_element().map(|el| el.id());
    assert_eq!(active.as_deref(), Some("pin-1"));
}

#[wasm_bindgen_test]
fn wrong_complete_code_opens_the_error_overlay() {
    mount_default();
    click("scenario-cidade");
    for index in 0..5 {
        type_digit(index, "9");
    }
    let overlay = dom::document().query_selector(".overlay--error").unwrap();
    assert!(overlay.is_some());
}

#[wasm_bindgen_test]
fn dismissing_the_error_overlay_empties_the_grid() {
    mount_default();
    click("scenario-mar");
    for index in 0..5 {
        type_digit(index, "0");
    }
    click("feedback-overlay");
    assert!(
        dom::document()
            .query_selector(".overlay--error")
            .unwrap()
            .is_none()
    );
    let first: HtmlInputElement = dom::document()
        .get_element_by_id("pin-0")
        .unwrap()
        .dyn_into()
        .unwrap();
    assert_eq!(first.value(), "");
}

#[wasm_bindgen_test]
fn typing_before_selection_raises_the_inline_warning() {
    mount_default();
    type_digit(0, "7");
    let warning = dom::document()
        .query_selector("[data-testid='selection-warning']")
        .unwrap();
    assert!(warning.is_some());
    let first: HtmlInputElement = dom::document()
        .get_element_by_id("pin-0")
        .unwrap()
        .dyn_into()
        .unwrap();
    // The rejected keystroke never lands in the buffer; the re-render
    // restores the empty controlled value.
    assert_eq!(first.value(), "");
}
