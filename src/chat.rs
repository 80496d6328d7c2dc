// Voiceflow chat widget embed. The script tag is a scoped resource:
// injected on mount, removed on unmount, guarded against double injection.
// The widget global is reached through Reflect so the rest of the page
// never depends on the real script being present.

use js_sys::{Function, Object, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlScriptElement};

pub const SCRIPT_URL: &str = "https://cdn.voiceflow.com/widget-next/bundle.mjs";
pub const SCRIPT_ELEMENT_ID: &str = "worldsim-chat-widget-script";

const PROJECT_ID: &str = "69a10ff387c29b7a7f15e3d8";
const RUNTIME_URL: &str = "https://general-runtime.voiceflow.com";
const VOICE_URL: &str = "https://runtime-api.voiceflow.com";
const VERSION_ID: &str = "production";

pub struct ChatWidget {
    script: Option<HtmlScriptElement>,
    onload: Option<Closure<dyn FnMut()>>,
}

impl ChatWidget {
    /// Appends the widget script to the body. Idempotent: a second inject
    /// while the tag is still in the document injects nothing and returns
    /// a handle that owns nothing.
    pub fn inject(document: &Document) -> Result<ChatWidget, JsValue> {
        if document.get_element_by_id(SCRIPT_ELEMENT_ID).is_some() {
            return Ok(ChatWidget {
                script: None,
                onload: None,
            });
        }
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;
        let script = document
            .create_element("script")?
            .dyn_into::<HtmlScriptElement>()?;
        script.set_id(SCRIPT_ELEMENT_ID);
        script.set_type("text/javascript");
        script.set_src(SCRIPT_URL);

        let onload = Closure::wrap(Box::new(initialize_from_global) as Box<dyn FnMut()>);
        script.set_onload(Some(onload.as_ref().unchecked_ref()));

        body.append_child(&script)?;
        Ok(ChatWidget {
            script: Some(script),
            onload: Some(onload),
        })
    }

    /// Detaches the script tag this handle injected, if any.
    pub fn remove(&mut self) {
        if let Some(script) = self.script.take() {
            // Removing the tag does not cancel an in-flight load; unhook
            // the handler before its closure is dropped so a late load
            // event finds nothing to call.
            script.set_onload(None);
            script.remove();
        }
        self.onload = None;
    }
}

impl Drop for ChatWidget {
    fn drop(&mut self) {
        self.remove();
    }
}

/// Calls `window.voiceflow.chat.load(config)`. If the script loaded but the
/// expected global is absent anywhere along the chain, initialization is
/// silently skipped.
pub fn initialize_from_global() {
    let window = match web_sys::window() {
        Some(window) => window,
        None => return,
    };
    let chat = match chat_namespace(window.as_ref()) {
        Some(chat) => chat,
        None => return,
    };
    let load = Reflect::get(&chat, &JsValue::from_str("load"))
        .ok()
        .and_then(|value| value.dyn_into::<Function>().ok());
    if let (Some(load), Ok(config)) = (load, load_config()) {
        let _ = load.call1(&chat, &config);
    }
}

fn chat_namespace(window: &JsValue) -> Option<JsValue> {
    let voiceflow = Reflect::get(window, &JsValue::from_str("voiceflow")).ok()?;
    if voiceflow.is_undefined() || voiceflow.is_null() {
        return None;
    }
    let chat = Reflect::get(&voiceflow, &JsValue::from_str("chat")).ok()?;
    if chat.is_undefined() || chat.is_null() {
        return None;
    }
    Some(chat)
}

/// The static configuration object the widget's `load` entry point expects.
pub fn load_config() -> Result<JsValue, JsValue> {
    let config = Object::new();
    let verify = Object::new();
    Reflect::set(&verify, &"projectID".into(), &PROJECT_ID.into())?;
    Reflect::set(&config, &"verify".into(), &verify)?;
    Reflect::set(&config, &"url".into(), &RUNTIME_URL.into())?;
    Reflect::set(&config, &"versionID".into(), &VERSION_ID.into())?;
    let voice = Object::new();
    Reflect::set(&voice, &"url".into(), &VOICE_URL.into())?;
    Reflect::set(&config, &"voice".into(), &voice)?;
    Ok(config.into())
}
