mod utils;

pub mod background;
pub mod chat;
pub mod color;
pub mod page;
pub mod particle;
pub mod renderer;

use background::AnimatedBackground;
use chat::ChatWidget;
use page::PageShell;
use wasm_bindgen::prelude::*;
use web_sys::console;

#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen]
pub fn initialize() {
    utils::set_panic_hook();
}

/// Handle to a mounted page, returned to the host so it can unmount later.
#[wasm_bindgen]
pub struct App {
    background: AnimatedBackground,
    shell: PageShell,
    chat: ChatWidget,
}

#[wasm_bindgen]
impl App {
    /// Builds the page under `document.body`: the animated background
    /// canvas first, then the static shell on top, then the chat widget
    /// script. Re-mounting is safe; the id-guarded pieces (stylesheet,
    /// widget script) are reused rather than duplicated.
    pub fn mount() -> Result<App, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("no document"))?;
        let body = document
            .body()
            .ok_or_else(|| JsValue::from_str("document has no body"))?;

        let background = AnimatedBackground::attach(&document, body.as_ref())?;
        let shell = PageShell::build(&document, body.as_ref())?;
        let chat = ChatWidget::inject(&document)?;

        console::log_1(&"WORLDSIM mounted".into());

        Ok(App {
            background,
            shell,
            chat,
        })
    }

    /// Tears everything down in reverse order of mount.
    pub fn unmount(mut self) {
        self.chat.remove();
        self.shell.detach();
        self.background.detach();
    }

    /// Frames the background has rendered so far.
    pub fn frames_rendered(&self) -> u32 {
        self.background.frames_rendered() as u32
    }
}
