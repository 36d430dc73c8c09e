use std::cell::Cell;
use std::fmt::Write;
use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

use crate::config::motion::*;

/// Opacity and vertical offset of an animated element.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionPose {
    pub opacity: f64,
    pub y: f64,
}

impl MotionPose {
    pub const REST: MotionPose = MotionPose { opacity: 1.0, y: 0.0 };

    fn css(&self) -> String {
        format!("opacity: {}; transform: translateY({}px);", round3(self.opacity), round3(self.y))
    }

    fn lerp(&self, to: &MotionPose, t: f64) -> MotionPose {
        MotionPose {
            opacity: self.opacity + (to.opacity - self.opacity) * t,
            y: self.y + (to.y - self.y) * t,
        }
    }
}

fn round3(value: f64) -> f64 {
    let rounded = (value * 1000.0).round() / 1000.0;
    // Avoid printing "-0".
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Damped harmonic spring released from rest at full displacement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl Spring {
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Remaining displacement after `t` seconds, 1 at release and 0 at rest.
    pub fn displacement(&self, t: f64) -> f64 {
        let omega = (self.stiffness / self.mass).sqrt();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-9 {
            (-omega * t).exp() * (1.0 + omega * t)
        } else if zeta < 1.0 {
            let damped = omega * (1.0 - zeta * zeta).sqrt();
            (-zeta * omega * t).exp()
                * ((damped * t).cos() + zeta * omega / damped * (damped * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -omega * (zeta - root);
            let r2 = -omega * (zeta + root);
            (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Fraction of the way from start to target after `t` seconds.
    pub fn progress(&self, t: f64) -> f64 {
        1.0 - self.displacement(t)
    }

    /// Seconds until the displacement stays within `tolerance` for good.
    /// Capped at ten seconds.
    pub fn settle_time(&self, tolerance: f64) -> f64 {
        const STEP: f64 = 0.001;
        const LIMIT: usize = 10_000;
        let last_outside = (0..=LIMIT)
            .rev()
            .find(|&i| self.displacement(i as f64 * STEP).abs() > tolerance);
        match last_outside {
            Some(i) => ((i + 1).min(LIMIT)) as f64 * STEP,
            None => 0.0,
        }
    }
}

pub const SETTLE_TOLERANCE: f64 = 0.005;
const SPRING_KEYFRAMES: usize = 20;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    Tween { duration: f64, easing: &'static str },
    Spring(Spring),
}

impl Transition {
    pub fn duration(&self) -> f64 {
        match self {
            Transition::Tween { duration, .. } => *duration,
            Transition::Spring(spring) => spring.settle_time(SETTLE_TOLERANCE),
        }
    }

    fn timing_function(&self) -> &'static str {
        match self {
            Transition::Tween { easing, .. } => *easing,
            // The spring curve is baked into the keyframes.
            Transition::Spring(_) => "linear",
        }
    }
}

/// Hidden and shown poses of an element plus how it moves between them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Variants {
    pub name: &'static str,
    pub hidden: MotionPose,
    pub show: MotionPose,
    pub transition: Transition,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Hidden,
    Show,
}

impl Phase {
    pub fn when(shown: bool) -> Self {
        if shown {
            Phase::Show
        } else {
            Phase::Hidden
        }
    }
}

impl Variants {
    /// CSS `@keyframes` rule for the hidden → shown animation.
    pub fn keyframes(&self) -> String {
        let mut css = format!("@keyframes {} {{ ", self.name);
        match self.transition {
            Transition::Tween { .. } => {
                let _ = write!(css, "0% {{ {} }} 100% {{ {} }} ", self.hidden.css(), self.show.css());
            }
            Transition::Spring(spring) => {
                let duration = self.transition.duration();
                for step in 0..=SPRING_KEYFRAMES {
                    let fraction = step as f64 / SPRING_KEYFRAMES as f64;
                    let pose = if step == SPRING_KEYFRAMES {
                        self.show
                    } else {
                        self.hidden.lerp(&self.show, spring.progress(fraction * duration))
                    };
                    let _ = write!(css, "{}% {{ {} }} ", round3(fraction * 100.0), pose.css());
                }
            }
        }
        css.push('}');
        css
    }

    /// Inline style for an element in `phase`, starting `delay` seconds after
    /// it is shown.
    pub fn style(&self, phase: Phase, delay: f64) -> String {
        match phase {
            Phase::Hidden => self.hidden.css(),
            Phase::Show => format!(
                "{} animation: {} {}s {} {}s both;",
                self.show.css(),
                self.name,
                round3(self.transition.duration()),
                self.transition.timing_function(),
                round3(delay),
            ),
        }
    }
}

/// Delays for the animated children of a container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stagger {
    pub delay_children: f64,
    pub stagger_children: f64,
}

impl Stagger {
    pub fn delay(&self, index: usize) -> f64 {
        self.delay_children + self.stagger_children * index as f64
    }
}

pub const CONTAINER: Variants = Variants {
    name: "motion-container",
    hidden: MotionPose { opacity: 0.0, y: 0.0 },
    show: MotionPose::REST,
    transition: Transition::Tween { duration: CONTAINER_FADE_SECS, easing: "ease-out" },
};

pub const CONTAINER_STAGGER: Stagger = Stagger {
    delay_children: DELAY_CHILDREN_SECS,
    stagger_children: STAGGER_CHILDREN_SECS,
};

pub const ITEM: Variants = Variants {
    name: "motion-item",
    hidden: MotionPose { opacity: 0.0, y: ITEM_OFFSET_PX },
    show: MotionPose::REST,
    transition: Transition::Spring(Spring {
        stiffness: SPRING_STIFFNESS,
        damping: SPRING_DAMPING,
        mass: SPRING_MASS,
    }),
};

pub const DROPDOWN: Variants = Variants {
    name: "motion-slide-in",
    hidden: MotionPose { opacity: 0.0, y: DROPDOWN_OFFSET_PX },
    show: MotionPose::REST,
    transition: Transition::Tween { duration: DROPDOWN_SECS, easing: "ease-out" },
};

pub const FOOTER: Variants = Variants {
    name: "motion-rise",
    hidden: MotionPose { opacity: 0.0, y: FOOTER_OFFSET_PX },
    show: MotionPose::REST,
    transition: Transition::Tween { duration: FOOTER_SECS, easing: "ease-out" },
};

/// Keyframes for every variant, emitted once at the app root.
#[function_component(MotionStyles)]
pub fn motion_styles() -> Html {
    let css = use_memo(
        |_| {
            [CONTAINER, ITEM, DROPDOWN, FOOTER]
                .iter()
                .map(Variants::keyframes)
                .collect::<Vec<_>>()
                .join("\n")
        },
        (),
    );

    html! { <style>{ (*css).clone() }</style> }
}

/// Whether an intersection report counts as "in view".
pub fn entry_is_visible(is_intersecting: bool, ratio: f64, threshold: f64) -> bool {
    is_intersecting && ratio >= threshold
}

/// Fire-once visibility latch: the first visible report sticks and later
/// reports are ignored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealLatch {
    revealed: bool,
}

impl RevealLatch {
    /// Feeds one visibility report and returns whether the element is in view.
    pub fn observe(&mut self, visible: bool) -> bool {
        self.revealed |= visible;
        self.revealed
    }

    /// Visibility cannot be observed, so the content is shown outright.
    pub fn reveal_unobserved(&mut self) -> bool {
        self.observe(true)
    }

    pub fn in_view(&self) -> bool {
        self.revealed
    }
}

/// A live observer; disconnects when dropped.
struct Observation {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

fn observe(
    element: &Element,
    threshold: f64,
    in_view: UseStateSetter<bool>,
) -> Option<Observation> {
    let latch = Rc::new(Cell::new(RevealLatch::default()));
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let mut state = latch.get();
                let visible = entry_is_visible(entry.is_intersecting(), entry.intersection_ratio(), threshold);
                in_view.set(state.observe(visible));
                latch.set(state);
                if state.in_view() {
                    observer.disconnect();
                    break;
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));
    let observer = match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => observer,
        Err(err) => {
            warn!("IntersectionObserver unavailable: {:?}", err);
            return None;
        }
    };
    observer.observe(element);

    Some(Observation { observer, _callback: callback })
}

/// Reports whether `node` has been on screen past `threshold`. Once true it
/// stays true. Without a working observer the content is shown at once.
#[hook]
pub fn use_in_view(node: NodeRef, threshold: f64) -> bool {
    let in_view = use_state_eq(|| false);

    {
        let setter = in_view.setter();
        use_effect_with_deps(
            move |(node, threshold)| {
                let observation = node
                    .cast::<Element>()
                    .and_then(|element| observe(&element, *threshold, setter.clone()));
                if observation.is_none() {
                    setter.set(RevealLatch::default().reveal_unobserved());
                }
                move || drop(observation)
            },
            (node, threshold),
        );
    }

    *in_view
}

#[cfg(test)]
mod tests {
    use super::*;

    const ITEM_SPRING: Spring = Spring { stiffness: 100.0, damping: 20.0, mass: 1.0 };

    #[test]
    fn item_spring_is_critically_damped() {
        assert!((ITEM_SPRING.damping_ratio() - 1.0).abs() < 1e-12);
        assert_eq!(ITEM_SPRING.displacement(0.0), 1.0);
        // (1 + 10t)e^(-10t) at t = 0.1
        assert!((ITEM_SPRING.displacement(0.1) - 2.0 * (-1.0_f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn springs_start_at_rest_and_settle() {
        for damping in [5.0, 20.0, 40.0] {
            let spring = Spring { stiffness: 100.0, damping, mass: 1.0 };
            assert!((spring.displacement(0.0) - 1.0).abs() < 1e-12, "damping {damping}");
            // Zero initial velocity.
            let slope = (spring.displacement(1e-6) - 1.0) / 1e-6;
            assert!(slope.abs() < 1e-3, "damping {damping}");
            assert!(spring.displacement(10.0).abs() < 1e-3, "damping {damping}");
        }
    }

    #[test]
    fn critically_damped_never_overshoots() {
        for i in 0..2000 {
            let p = ITEM_SPRING.progress(i as f64 * 0.001);
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn underdamped_spring_overshoots() {
        let bouncy = Spring { stiffness: 100.0, damping: 4.0, mass: 1.0 };
        assert!((0..2000).any(|i| bouncy.progress(i as f64 * 0.001) > 1.0));
        assert!(bouncy.settle_time(SETTLE_TOLERANCE) > ITEM_SPRING.settle_time(SETTLE_TOLERANCE));
    }

    #[test]
    fn item_settle_time() {
        let settle = ITEM_SPRING.settle_time(SETTLE_TOLERANCE);
        assert!(settle > 0.6 && settle < 0.8, "settle {settle}");
        assert!(ITEM_SPRING.displacement(settle) <= SETTLE_TOLERANCE);
    }

    #[test]
    fn stagger_delays() {
        assert!((CONTAINER_STAGGER.delay(0) - 0.8).abs() < 1e-12);
        assert!((CONTAINER_STAGGER.delay(1) - 1.2).abs() < 1e-12);
        assert!((CONTAINER_STAGGER.delay(2) - 1.6).abs() < 1e-12);
    }

    #[test]
    fn hidden_style_has_no_animation() {
        let style = ITEM.style(Phase::Hidden, 0.8);
        assert_eq!(style, "opacity: 0; transform: translateY(20px);");
    }

    #[test]
    fn shown_style_names_keyframes_and_delay() {
        let style = FOOTER.style(Phase::Show, 0.0);
        assert_eq!(
            style,
            "opacity: 1; transform: translateY(0px); animation: motion-rise 0.5s ease-out 0s both;"
        );
        let item = ITEM.style(Phase::Show, 1.2);
        assert!(item.contains("animation: motion-item "));
        assert!(item.ends_with(" linear 1.2s both;"));
    }

    #[test]
    fn spring_keyframes_run_from_hidden_to_rest() {
        let css = ITEM.keyframes();
        assert!(css.starts_with("@keyframes motion-item { 0% { opacity: 0; transform: translateY(20px); }"));
        assert!(css.ends_with("100% { opacity: 1; transform: translateY(0px); } }"));
        assert_eq!(css.matches('%').count(), SPRING_KEYFRAMES + 1);
    }

    #[test]
    fn tween_keyframes() {
        assert_eq!(
            DROPDOWN.keyframes(),
            "@keyframes motion-slide-in { 0% { opacity: 0; transform: translateY(-10px); } \
             100% { opacity: 1; transform: translateY(0px); } }"
        );
    }

    #[test]
    fn visibility_needs_threshold() {
        assert!(entry_is_visible(true, 0.5, 0.5));
        assert!(!entry_is_visible(true, 0.49, 0.5));
        assert!(!entry_is_visible(false, 0.9, 0.5));
    }

    #[test]
    fn fire_once_latch_ignores_scroll_out_and_back() {
        let mut latch = RevealLatch::default();
        let reports = [false, true, false, true, false];
        let mut reveals = 0;
        let mut shown = false;
        for visible in reports {
            let now = latch.observe(visible);
            if now && !shown {
                reveals += 1;
            }
            shown = now;
        }
        assert_eq!(reveals, 1);
        assert!(latch.in_view());
    }

    #[test]
    fn latch_before_reveal() {
        let mut latch = RevealLatch::default();
        assert!(!latch.observe(false));
        assert!(!latch.in_view());
    }

    #[test]
    fn unobservable_content_is_shown() {
        let mut latch = RevealLatch::default();
        assert!(latch.reveal_unobserved());
        assert!(latch.observe(false));
    }
}
