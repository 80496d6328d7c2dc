//! Browser-side end-to-end checks for the mounted page.
//!
//! Run with `wasm-pack test --headless --firefox` (or `--chrome`).

#![cfg(target_arch = "wasm32")]

use std::cell::Cell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, HtmlElement};

use worldsim_web::background::AnimatedBackground;
use worldsim_web::chat;
use worldsim_web::page;
use worldsim_web::App;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        web_sys::window()
            .unwrap()
            .request_animation_frame(&resolve)
            .unwrap();
    });
    JsFuture::from(promise).await.unwrap();
}

#[wasm_bindgen_test]
fn mount_renders_shell() {
    let app = App::mount().unwrap();
    let document = document();

    assert_eq!(document.query_selector_all("nav").unwrap().length(), 1);

    let h1 = document.query_selector("h1").unwrap().unwrap();
    assert!(h1.text_content().unwrap().contains("WORLDSIM"));

    let cards = document.query_selector_all("a.simulation-card").unwrap();
    assert_eq!(cards.length(), 3);
    for (i, sim) in page::SIMULATIONS.iter().enumerate() {
        let card = cards
            .get(i as u32)
            .unwrap()
            .dyn_into::<Element>()
            .unwrap();
        assert_eq!(card.get_attribute("target").unwrap(), "_blank");
        assert_eq!(card.get_attribute("rel").unwrap(), "noopener noreferrer");
        assert_eq!(card.get_attribute("href").unwrap(), sim.url);
    }

    assert_eq!(document.query_selector_all("footer").unwrap().length(), 1);
    assert!(document
        .query_selector("canvas.animated-background")
        .unwrap()
        .is_some());

    app.unmount();
    assert!(document.query_selector(".worldsim-app").unwrap().is_none());
    assert!(document
        .query_selector("canvas.animated-background")
        .unwrap()
        .is_none());
}

#[wasm_bindgen_test]
fn assistant_button_toggles_panel() {
    let app = App::mount().unwrap();
    let document = document();

    let panel = document.get_element_by_id(page::CHAT_PANEL_ID).unwrap();
    assert!(!panel.class_list().contains("open"));
    assert!(panel
        .text_content()
        .unwrap()
        .contains("Chat widget loading..."));

    let button = document
        .get_element_by_id(page::ASSISTANT_BUTTON_ID)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap();
    button.click();
    assert!(panel.class_list().contains("open"));
    button.click();
    assert!(!panel.class_list().contains("open"));

    app.unmount();
}

#[wasm_bindgen_test]
async fn detach_stops_frame_callbacks() {
    let document = document();
    let body = document.body().unwrap();
    let mut background = AnimatedBackground::attach(&document, body.as_ref()).unwrap();

    next_frame().await;
    next_frame().await;
    next_frame().await;
    assert!(background.frames_rendered() > 0);

    let canvas = background.canvas().clone();
    background.detach();
    let frozen = background.frames_rendered();
    next_frame().await;
    next_frame().await;
    assert_eq!(background.frames_rendered(), frozen);
    assert!(document
        .query_selector("canvas.animated-background")
        .unwrap()
        .is_none());

    // The resize listener must be gone too: a resize event after detach
    // may not refit the canvas to the window.
    canvas.set_width(123);
    canvas.set_height(45);
    let resize = web_sys::Event::new("resize").unwrap();
    web_sys::window().unwrap().dispatch_event(&resize).unwrap();
    next_frame().await;
    assert_eq!(canvas.width(), 123);
    assert_eq!(canvas.height(), 45);
}

#[wasm_bindgen_test]
fn removed_widget_ignores_late_load_event() {
    let document = document();
    let mut widget = chat::ChatWidget::inject(&document).unwrap();
    let script = document.get_element_by_id(chat::SCRIPT_ELEMENT_ID).unwrap();

    widget.remove();

    // A load that completes after removal must find no handler; firing
    // the event against the detached tag must not throw.
    let load = web_sys::Event::new("load").unwrap();
    script.dispatch_event(&load).unwrap();
}

#[wasm_bindgen_test]
fn chat_injection_is_idempotent() {
    let document = document();
    let mut first = chat::ChatWidget::inject(&document).unwrap();
    let mut second = chat::ChatWidget::inject(&document).unwrap();

    let selector = format!("script#{}", chat::SCRIPT_ELEMENT_ID);
    assert_eq!(document.query_selector_all(&selector).unwrap().length(), 1);

    // The second handle owns nothing, so removing it leaves the tag alone.
    second.remove();
    assert!(document.get_element_by_id(chat::SCRIPT_ELEMENT_ID).is_some());

    first.remove();
    assert!(document.get_element_by_id(chat::SCRIPT_ELEMENT_ID).is_none());
}

#[wasm_bindgen_test]
fn widget_config_matches_embed_contract() {
    let config = chat::load_config().unwrap();

    let verify = js_sys::Reflect::get(&config, &"verify".into()).unwrap();
    let project = js_sys::Reflect::get(&verify, &"projectID".into()).unwrap();
    assert_eq!(project.as_string().unwrap(), "69a10ff387c29b7a7f15e3d8");

    let url = js_sys::Reflect::get(&config, &"url".into()).unwrap();
    assert_eq!(
        url.as_string().unwrap(),
        "https://general-runtime.voiceflow.com"
    );

    let version = js_sys::Reflect::get(&config, &"versionID".into()).unwrap();
    assert_eq!(version.as_string().unwrap(), "production");

    let voice = js_sys::Reflect::get(&config, &"voice".into()).unwrap();
    let voice_url = js_sys::Reflect::get(&voice, &"url".into()).unwrap();
    assert_eq!(
        voice_url.as_string().unwrap(),
        "https://runtime-api.voiceflow.com"
    );
}

#[wasm_bindgen_test]
fn widget_initialization_skips_when_global_missing() {
    let global = js_sys::global();
    let _ = js_sys::Reflect::delete_property(&global, &"voiceflow".into());

    // Must be a silent no-op, not a panic.
    chat::initialize_from_global();
}

#[wasm_bindgen_test]
fn widget_initialization_calls_load_entry_point() {
    let global = js_sys::global();
    let calls = Rc::new(Cell::new(0u32));

    let load = {
        let calls = calls.clone();
        Closure::wrap(Box::new(move |_config: JsValue| {
            calls.set(calls.get() + 1);
        }) as Box<dyn FnMut(JsValue)>)
    };
    let chat_obj = js_sys::Object::new();
    js_sys::Reflect::set(&chat_obj, &"load".into(), load.as_ref()).unwrap();
    let voiceflow = js_sys::Object::new();
    js_sys::Reflect::set(&voiceflow, &"chat".into(), &chat_obj).unwrap();
    js_sys::Reflect::set(&global, &"voiceflow".into(), &voiceflow).unwrap();

    chat::initialize_from_global();
    assert_eq!(calls.get(), 1);

    let _ = js_sys::Reflect::delete_property(&global, &"voiceflow".into());
}
