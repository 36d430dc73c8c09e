use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo_render::{request_animation_frame, AnimationFrame};
use log::{debug, warn};
use web_sys::HtmlCanvasElement;
use yew::prelude::*;
use yew_hooks::prelude::use_window_size;

use crate::config::scene::STAR_COUNT;
use crate::scene::camera::CameraPose;
use crate::scene::canvas::{resize_drawing_buffer, FrameRenderer, SceneError};
use crate::scene::geometry::SceneGeometry;
use crate::scene::scroll::{use_scroll_progress, ScrollProgress};
use crate::scene::stars::{place_stars, StarPlacement};

/// The stars of one mounted scene and the wireframe built from them.
#[derive(Debug, PartialEq)]
pub struct StarField {
    pub stars: Vec<StarPlacement>,
    pub geometry: SceneGeometry,
}

/// Places `count` stars on the first render and returns the same field on
/// every later render of the component.
#[hook]
pub fn use_star_field(count: usize) -> Rc<StarField> {
    let field = use_state(move || {
        let stars = place_stars(count, &mut rand::thread_rng());
        debug!("Placed {} background stars", stars.len());
        let geometry = SceneGeometry::build(&stars);
        Rc::new(StarField { stars, geometry })
    });
    Rc::clone(&*field)
}

/// Redraws the scene once per display refresh until stopped.
struct FrameLoop {
    renderer: FrameRenderer,
    field: Rc<StarField>,
    scroll: ScrollProgress,
    started_at: Cell<Option<f64>>,
    reported_failure: Cell<bool>,
    pending: RefCell<Option<AnimationFrame>>,
}

impl FrameLoop {
    fn start(renderer: FrameRenderer, field: Rc<StarField>, scroll: ScrollProgress) -> Rc<Self> {
        let frame_loop = Rc::new(FrameLoop {
            renderer,
            field,
            scroll,
            started_at: Cell::new(None),
            reported_failure: Cell::new(false),
            pending: RefCell::new(None),
        });
        frame_loop.schedule();
        frame_loop
    }

    fn schedule(self: &Rc<Self>) {
        let this = Rc::clone(self);
        let frame = request_animation_frame(move |timestamp| {
            this.tick(timestamp);
            this.schedule();
        });
        *self.pending.borrow_mut() = Some(frame);
    }

    fn tick(&self, timestamp: f64) {
        let started_at = match self.started_at.get() {
            Some(started_at) => started_at,
            None => {
                self.started_at.set(Some(timestamp));
                timestamp
            }
        };

        // Time always advances, so the pose is rebuilt every frame.
        let pose = CameraPose::at(self.scroll.get(), timestamp - started_at);
        if let Err(err) = self.renderer.draw(&self.field.geometry, &pose) {
            if !self.reported_failure.replace(true) {
                warn!("Background frame failed: {}", err);
            }
        }
    }

    /// Cancels the pending frame, which also releases the loop's self reference.
    fn stop(&self) {
        self.pending.borrow_mut().take();
    }
}

#[derive(Properties, PartialEq)]
pub struct BackgroundSceneProps {
    #[prop_or(STAR_COUNT)]
    pub star_count: usize,
}

#[function_component(BackgroundScene)]
pub fn background_scene(props: &BackgroundSceneProps) -> Html {
    let canvas_ref = use_node_ref();
    let available = use_state(|| true);
    let scroll = use_scroll_progress();
    let (window_width, window_height) = use_window_size();

    let field = use_star_field(props.star_count);

    {
        let canvas_ref = canvas_ref.clone();
        use_effect_with_deps(
            move |(width, height)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    resize_drawing_buffer(&canvas, *width, *height);
                }
                || ()
            },
            (window_width, window_height),
        );
    }

    {
        let canvas_ref = canvas_ref.clone();
        let available = available.clone();
        let field = Rc::clone(&field);
        use_effect_with_deps(
            move |_| {
                let attached = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or(SceneError::CanvasMissing)
                    .and_then(FrameRenderer::attach);

                let frame_loop = match attached {
                    Ok(renderer) => {
                        debug!("Background scene attached");
                        Some(FrameLoop::start(renderer, field, scroll))
                    }
                    Err(err) => {
                        warn!("Background scene disabled: {}", err);
                        available.set(false);
                        None
                    }
                };

                move || {
                    if let Some(frame_loop) = frame_loop {
                        frame_loop.stop();
                    }
                }
            },
            (),
        );
    }

    if !*available {
        return html! {};
    }

    html! {
        <canvas ref={canvas_ref} class="background-scene" aria-hidden="true" />
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use futures::executor::block_on;
    use yew::suspense::{Suspense, Suspension};
    use yew::LocalServerRenderer;

    use super::*;

    type Renders = Rc<RefCell<Vec<Rc<StarField>>>>;

    #[derive(Properties, Clone)]
    struct HostProps {
        count: usize,
        renders: Renders,
    }

    impl PartialEq for HostProps {
        fn eq(&self, other: &Self) -> bool {
            self.count == other.count && Rc::ptr_eq(&self.renders, &other.renders)
        }
    }

    /// Records the field it sees, and suspends its first render so the
    /// renderer has to render it a second time.
    #[function_component(StarFieldHost)]
    fn star_field_host(props: &HostProps) -> HtmlResult {
        let field = use_star_field(props.count);
        let first_render = use_mut_ref(|| true);
        props.renders.borrow_mut().push(Rc::clone(&field));

        if first_render.replace(false) {
            let (suspension, resume) = Suspension::new();
            drop(resume);
            return Err(suspension.into());
        }
        Ok(html! { <span>{ field.stars.len() }</span> })
    }

    #[function_component(SuspendedHost)]
    fn suspended_host(props: &HostProps) -> Html {
        html! {
            <Suspense fallback={html! {}}>
                <StarFieldHost ..props.clone() />
            </Suspense>
        }
    }

    #[test]
    fn star_field_survives_rerender() {
        let renders: Renders = Rc::default();
        let props = HostProps { count: 12, renders: Rc::clone(&renders) };
        let html = block_on(LocalServerRenderer::<SuspendedHost>::with_props(props).render());

        assert!(html.contains("<span>12</span>"), "{html}");
        let renders = renders.borrow();
        assert!(renders.len() >= 2, "rendered {} times", renders.len());
        let first = &renders[0];
        assert_eq!(first.stars.len(), 12);
        for later in &renders[1..] {
            assert!(Rc::ptr_eq(first, later));
            assert_eq!(first.stars, later.stars);
        }
    }
}
