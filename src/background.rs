// Full-viewport canvas behind the page content, redrawn through
// requestAnimationFrame. Owns the particle field, the frame scheduling,
// and the window resize listener; all three are released on detach.

use crate::particle::ParticleField;
use crate::renderer::CanvasRenderer;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlCanvasElement};

type FrameClosure = Closure<dyn FnMut()>;

pub struct AnimatedBackground {
    canvas: HtmlCanvasElement,
    running: Rc<Cell<bool>>,
    frame_id: Rc<Cell<Option<i32>>>,
    frames_rendered: Rc<Cell<u64>>,
    // The animation closure reschedules itself through this shared slot;
    // detach empties it to break the Rc cycle.
    animate: Rc<RefCell<Option<FrameClosure>>>,
    resize: Option<Closure<dyn FnMut()>>,
}

impl AnimatedBackground {
    /// Creates the canvas under `parent`, fills it with a fresh particle
    /// field, and starts the frame loop. If the 2d context cannot be
    /// acquired the background stays attached but renders nothing.
    pub fn attach(document: &Document, parent: &Element) -> Result<AnimatedBackground, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
        let canvas = document
            .create_element("canvas")?
            .dyn_into::<HtmlCanvasElement>()?;
        canvas.set_class_name("animated-background");
        parent.append_child(&canvas)?;

        let running = Rc::new(Cell::new(true));
        let frame_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let frames_rendered = Rc::new(Cell::new(0u64));
        let animate: Rc<RefCell<Option<FrameClosure>>> = Rc::new(RefCell::new(None));

        let mut background = AnimatedBackground {
            canvas: canvas.clone(),
            running: running.clone(),
            frame_id: frame_id.clone(),
            frames_rendered: frames_rendered.clone(),
            animate: animate.clone(),
            resize: None,
        };

        let renderer = match CanvasRenderer::new(canvas) {
            Some(renderer) => Rc::new(renderer),
            None => {
                // No 2d context: leave the blank canvas in place, never
                // schedule a frame.
                running.set(false);
                return Ok(background);
            }
        };
        renderer.fit_to_window(&window);

        let resize = {
            let renderer = renderer.clone();
            Closure::wrap(Box::new(move || {
                if let Some(window) = web_sys::window() {
                    renderer.fit_to_window(&window);
                }
            }) as Box<dyn FnMut()>)
        };
        window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())?;
        background.resize = Some(resize);

        let mut field = ParticleField::new(
            renderer.width(),
            renderer.height(),
            &mut rand::thread_rng(),
        );

        let scheduler = animate.clone();
        *animate.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            if !running.get() {
                return;
            }
            // The wrap bounds follow the canvas, which follows the window.
            field.set_bounds(renderer.width(), renderer.height());
            field.step();
            if renderer.render(&field).is_err() {
                running.set(false);
                return;
            }
            frames_rendered.set(frames_rendered.get() + 1);
            if let Some(handle) = scheduler.borrow().as_ref() {
                frame_id.set(request_frame(handle));
            }
        }) as Box<dyn FnMut()>));

        if let Some(handle) = background.animate.borrow().as_ref() {
            background.frame_id.set(request_frame(handle));
        }

        Ok(background)
    }

    pub fn canvas(&self) -> &HtmlCanvasElement {
        &self.canvas
    }

    /// Frames drawn so far; stops advancing once detached.
    pub fn frames_rendered(&self) -> u64 {
        self.frames_rendered.get()
    }

    /// Stops the frame loop, removes the resize listener, and takes the
    /// canvas out of the DOM. Safe to call more than once.
    pub fn detach(&mut self) {
        self.running.set(false);
        if let Some(id) = self.frame_id.take() {
            if let Some(window) = web_sys::window() {
                let _ = window.cancel_animation_frame(id);
            }
        }
        if let Some(resize) = self.resize.take() {
            if let Some(window) = web_sys::window() {
                let _ = window
                    .remove_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());
            }
        }
        self.animate.borrow_mut().take();
        self.canvas.remove();
    }
}

impl Drop for AnimatedBackground {
    fn drop(&mut self) {
        self.detach();
    }
}

fn request_frame(f: &FrameClosure) -> Option<i32> {
    web_sys::window()?
        .request_animation_frame(f.as_ref().unchecked_ref())
        .ok()
}
