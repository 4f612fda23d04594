use serde_json::Value;

const STRINGS_DATA: &str = include_str!("../i18n/pt.json");

thread_local! {
    static BUNDLE: Value = load_bundle();
}

fn load_bundle() -> Value {
    serde_json::from_str(STRINGS_DATA).unwrap_or_else(|err| {
        log::error!("string bundle failed to parse: {err}");
        Value::Object(serde_json::Map::new())
    })
}

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    let mut current = obj;
    for part in key.split('.') {
        current = current.get(part)?;
    }
    Some(current)
}

/// Look up a UI string by dotted key.
///
/// Unknown keys fall back to the key itself so a missing entry is visible
/// in the rendered page instead of a blank.
#[must_use]
pub fn t(key: &str) -> String {
    BUNDLE.with(|bundle| {
        get_nested_value(bundle, key)
            .and_then(Value::as_str)
            .map_or_else(|| key.to_string(), std::string::ToString::to_string)
    })
}
