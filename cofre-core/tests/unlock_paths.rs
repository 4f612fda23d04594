use cofre_core::{
    DigitHint, EditOutcome, Outcome, PIN_LEN, Scenario, VaultConfig, VaultState,
};
use std::collections::BTreeMap;

fn fixture_config() -> VaultConfig {
    let codes = BTreeMap::from([
        (Scenario::Cidade, "40182".to_string()),
        (Scenario::Floresta, "90817".to_string()),
        (Scenario::Mar, "55555".to_string()),
    ]);
    VaultConfig::new(codes).expect("fixture config is valid")
}

fn enter_code(state: &mut VaultState, code: &str) {
    for (index, digit) in code.chars().enumerate() {
        let _ = state.edit_digit(index, &digit.to_string());
    }
}

#[test]
fn exact_code_succeeds_for_every_scenario() {
    let config = fixture_config();
    for scenario in Scenario::ALL {
        let mut state = VaultState::new(config.clone());
        state.select_scenario(scenario);
        let code = config.expected(scenario).expect("code present").to_string();
        enter_code(&mut state, &code);
        assert_eq!(state.outcome(), Outcome::Success, "scenario {scenario}");
        assert!(state.overlay_open(), "scenario {scenario}");
    }
}

#[test]
fn complete_wrong_code_settles_as_error_with_overlay() {
    let mut state = VaultState::new(fixture_config());
    state.select_scenario(Scenario::Floresta);
    enter_code(&mut state, "12345");
    assert_eq!(state.outcome(), Outcome::Error);
    assert!(state.overlay_open());
}

#[test]
fn typing_before_selection_warns_and_leaves_buffer_untouched() {
    let mut state = VaultState::new(fixture_config());
    assert_eq!(state.edit_digit(0, "9"), EditOutcome::Rejected);
    assert!(state.show_warning());
    for index in 0..PIN_LEN {
        assert_eq!(state.pin().slot(index), "");
    }
    assert_eq!(state.outcome(), Outcome::Idle);
    assert!(!state.overlay_open());
}

#[test]
fn dismissing_an_error_overlay_clears_the_buffer_for_retry() {
    let mut state = VaultState::new(fixture_config());
    state.select_scenario(Scenario::Cidade);
    enter_code(&mut state, "00001");
    assert_eq!(state.outcome(), Outcome::Error);

    assert!(state.dismiss_overlay());
    assert!(!state.overlay_open());
    assert_eq!(state.outcome(), Outcome::Idle);
    for index in 0..PIN_LEN {
        assert_eq!(state.pin().slot(index), "");
    }
    // Scenario and its code survive the reset.
    assert_eq!(state.selected(), Some(Scenario::Cidade));
    enter_code(&mut state, "40182");
    assert_eq!(state.outcome(), Outcome::Success);
}

#[test]
fn dismissing_a_success_overlay_is_terminal() {
    let mut state = VaultState::new(fixture_config());
    state.select_scenario(Scenario::Mar);
    enter_code(&mut state, "55555");
    assert_eq!(state.outcome(), Outcome::Success);

    assert!(!state.dismiss_overlay());
    assert!(!state.overlay_open());
    assert_eq!(state.outcome(), Outcome::Success);
    assert_eq!(state.pin().joined(), "55555");
}

#[test]
fn switching_scenarios_resets_buffer_and_outcome_from_any_state() {
    let mut state = VaultState::new(fixture_config());
    state.select_scenario(Scenario::Cidade);
    enter_code(&mut state, "40182");
    assert_eq!(state.outcome(), Outcome::Success);

    state.select_scenario(Scenario::Mar);
    assert_eq!(state.outcome(), Outcome::Idle);
    assert!(!state.overlay_open());
    assert_eq!(state.pin().joined(), "");
    assert_eq!(state.selected(), Some(Scenario::Mar));
}

#[test]
fn sea_scenario_accepts_its_shipped_code() {
    let mut state = VaultState::new(VaultConfig::default_config());
    state.select_scenario(Scenario::Mar);
    for (index, digit) in ["1", "4", "3", "8", "6"].iter().enumerate() {
        let _ = state.edit_digit(index, digit);
    }
    assert_eq!(state.outcome(), Outcome::Success);
    assert!(state.overlay_open());
}

#[test]
fn city_scenario_rejects_all_zeros() {
    let mut state = VaultState::new(VaultConfig::default_config());
    state.select_scenario(Scenario::Cidade);
    enter_code(&mut state, "00000");
    assert_eq!(state.outcome(), Outcome::Error);
    assert!(state.overlay_open());

    assert!(state.dismiss_overlay());
    assert_eq!(state.pin().joined(), "");
}

#[test]
fn hints_follow_each_keystroke_without_blocking_entry() {
    let mut state = VaultState::new(fixture_config());
    state.select_scenario(Scenario::Mar);
    let _ = state.edit_digit(0, "5");
    let _ = state.edit_digit(1, "0");
    assert_eq!(state.digit_hint(0), DigitHint::Match);
    assert_eq!(state.digit_hint(1), DigitHint::Mismatch);
    assert_eq!(state.digit_hint(2), DigitHint::Empty);
    // A mismatching hint never prevents completion.
    let _ = state.edit_digit(2, "5");
    let _ = state.edit_digit(3, "5");
    let _ = state.edit_digit(4, "5");
    assert_eq!(state.outcome(), Outcome::Error);
}
