use std::cell::Cell;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::window;
use yew::prelude::*;

const SCROLL_EVENTS: [&str; 2] = ["scroll", "resize"];

/// How far the document has been scrolled, 0 at the top and 1 at the bottom.
/// Zero when the document is not taller than the viewport.
pub fn scroll_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 || !scroll_y.is_finite() {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

fn read_scroll_progress() -> Option<f64> {
    let window = window()?;
    let scroll_y = window.scroll_y().ok()?;
    let viewport_height = window.inner_height().ok()?.as_f64()?;
    let scroll_height = window.document()?.document_element()?.scroll_height() as f64;
    Some(scroll_progress(scroll_y, scroll_height, viewport_height))
}

/// Shared cell holding the latest scroll progress. The scroll listener is the
/// only writer; readers such as the frame loop just call `get`.
#[derive(Clone, Debug, Default)]
pub struct ScrollProgress(Rc<Cell<f64>>);

impl ScrollProgress {
    pub fn get(&self) -> f64 {
        self.0.get()
    }

    fn set(&self, progress: f64) {
        self.0.set(progress);
    }
}

impl PartialEq for ScrollProgress {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Tracks document scroll progress without re-rendering the component.
#[hook]
pub fn use_scroll_progress() -> ScrollProgress {
    let progress = use_state(ScrollProgress::default);

    {
        let progress = (*progress).clone();
        use_effect_with_deps(
            move |_| {
                let window = window();
                let writer = progress.clone();
                let callback = Closure::<dyn FnMut()>::new(move || {
                    if let Some(value) = read_scroll_progress() {
                        writer.set(value);
                    }
                });

                if let Some(window) = &window {
                    for event in SCROLL_EVENTS {
                        if let Err(err) = window
                            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
                        {
                            warn!("Failed to listen for {}: {:?}", event, err);
                        }
                    }
                }

                // Initial read so a restored scroll position is picked up.
                if let Some(value) = read_scroll_progress() {
                    progress.set(value);
                }

                move || {
                    if let Some(window) = window {
                        for event in SCROLL_EVENTS {
                            let _ = window.remove_event_listener_with_callback(
                                event,
                                callback.as_ref().unchecked_ref(),
                            );
                        }
                    }
                }
            },
            (),
        );
    }

    (*progress).clone()
}
