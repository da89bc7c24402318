//! Replaying adapters that serve recorded interactions.

pub mod clock;
pub mod http;
pub mod prompt;

pub use clock::ReplayingClock;
pub use http::ReplayingHttpTransport;
pub use prompt::ReplayingPrompt;

use std::sync::Mutex;

use crate::cassette::replayer::CassetteReplayer;

/// Pull the next recorded output for `port::method`.
pub(crate) fn next_output(
    replayer: &Mutex<CassetteReplayer>,
    port: &str,
    method: &str,
) -> serde_json::Value {
    let mut replayer = replayer.lock().expect("replayer lock poisoned");
    replayer.next_interaction(port, method).output
}

/// Extracts a Result from a cassette output recorded by `record_result`.
///
/// Expects `{"ok": <value>}` or `{"err": "message"}`; a bare value is treated
/// as `ok` so hand-written cassettes can stay short.
pub(crate) fn extract_result<T: serde::de::DeserializeOwned>(
    output: serde_json::Value,
    context: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    if let Some(err) = output.get("err") {
        let msg = err.as_str().unwrap_or("unknown error").to_string();
        return Err(msg.into());
    }
    let value = match output {
        serde_json::Value::Object(mut map) if map.contains_key("ok") => {
            map.remove("ok").unwrap_or_default()
        }
        other => other,
    };
    serde_json::from_value(value)
        .map_err(|e| format!("{context}: failed to deserialize: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extract_ok_err_and_bare_values() {
        let ok: bool = extract_result(json!({"ok": true}), "test").unwrap();
        assert!(ok);
        let bare: bool = extract_result(json!(false), "test").unwrap();
        assert!(!bare);
        let err = extract_result::<bool>(json!({"err": "no tty"}), "test").unwrap_err();
        assert_eq!(err.to_string(), "no tty");
    }

    #[test]
    fn shape_mismatch_names_context() {
        let err = extract_result::<bool>(json!({"ok": "yes"}), "prompt::confirm").unwrap_err();
        assert!(err.to_string().starts_with("prompt::confirm: failed to deserialize"));
    }
}
