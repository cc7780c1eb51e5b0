use log::{info, warn};
use serde_json::Value;
use wasm_bindgen::{JsCast, JsValue};

/// Receives named events. Fire and forget.
pub trait AnalyticsSink {
    fn track(&self, event: &str, params: &Value);
}

/// Forwards events to `window.gtag('event', name, params)`.
pub struct GtagSink {
    gtag: js_sys::Function,
}

impl GtagSink {
    /// Returns a sink only when the page actually loaded a `gtag` function.
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let gtag = js_sys::Reflect::get(&window, &JsValue::from_str("gtag")).ok()?;
        gtag.dyn_into::<js_sys::Function>().ok().map(|gtag| Self { gtag })
    }
}

impl AnalyticsSink for GtagSink {
    fn track(&self, event: &str, params: &Value) {
        let params = match js_sys::JSON::parse(&params.to_string()) {
            Ok(params) => params,
            Err(_) => {
                warn!("Dropping analytics event {}: params not serializable", event);
                return;
            }
        };
        if let Err(e) = self.gtag.call3(
            &JsValue::NULL,
            &JsValue::from_str("event"),
            &JsValue::from_str(event),
            &params,
        ) {
            warn!("gtag call failed for {}: {:?}", event, e);
        }
    }
}

/// Writes events to the console log. Used when no tracker is on the page.
#[derive(Debug, Default)]
pub struct LogSink;

impl AnalyticsSink for LogSink {
    fn track(&self, event: &str, params: &Value) {
        info!("analytics event {} {}", event, params);
    }
}
