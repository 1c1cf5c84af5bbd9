//! Backend health check
//!
//! A fire-and-forget greeting to the optional backend root. The reply is only
//! logged; nothing in the game waits on it or reacts to a failure.

use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum HealthError {
    #[error("no browser window")]
    NoWindow,

    #[error("request failed: {0}")]
    Js(String),

    #[error("backend answered with HTTP {0}")]
    Status(u16),

    #[error("unexpected reply: {0}")]
    Decode(#[from] serde_json::Error),
}

/// `GET /api/` reply
#[derive(Debug, Clone, Deserialize)]
pub struct Greeting {
    pub message: String,
}

pub fn parse_greeting(body: &str) -> Result<Greeting, HealthError> {
    Ok(serde_json::from_str(body)?)
}

/// Log the outcome of a greeting
pub fn log_greeting(result: Result<Greeting, HealthError>) {
    match result {
        Ok(greeting) => log::info!("Backend says: {}", greeting.message),
        Err(e) => {
            log::info!("Backend not reachable yet or /api/ misconfigured.");
            log::debug!("Health check error: {}", e);
        }
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_greeting(url: &str) -> Result<Greeting, HealthError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let js = |e: wasm_bindgen::JsValue| HealthError::Js(format!("{e:?}"));

    let window = web_sys::window().ok_or(HealthError::NoWindow)?;
    let response: web_sys::Response = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(js)?
        .dyn_into()
        .map_err(js)?;
    if !response.ok() {
        return Err(HealthError::Status(response.status()));
    }
    let body = JsFuture::from(response.text().map_err(js)?)
        .await
        .map_err(js)?
        .as_string()
        .unwrap_or_default();
    parse_greeting(&body)
}

/// Start the greeting in the background
#[cfg(target_arch = "wasm32")]
pub fn spawn(url: String) {
    wasm_bindgen_futures::spawn_local(async move {
        log_greeting(fetch_greeting(&url).await);
    });
}

/// Native builds have no HTTP client; the check is skipped
#[cfg(not(target_arch = "wasm32"))]
pub fn spawn(url: String) {
    log::debug!("Skipping backend health check for {}", url);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_greeting() {
        let greeting = parse_greeting(r#"{"message":"Hello World"}"#).unwrap();
        assert_eq!(greeting.message, "Hello World");
    }

    #[test]
    fn test_parse_greeting_rejects_other_shapes() {
        assert!(matches!(
            parse_greeting(r#"{"msg":"hi"}"#),
            Err(HealthError::Decode(_))
        ));
        assert!(parse_greeting("<html>").is_err());
    }
}
