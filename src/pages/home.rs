use web_sys::window;
use yew::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::config::motion::REVEAL_THRESHOLD;
use crate::config::{theme, SectionCopy, COMPANY_NAME, FOOTER_LINKS, OUR_APPROACH, OUR_DIFFERENTIALS, PAGE_TITLE, WHO_WE_ARE};
use crate::motion::{use_in_view, Phase, CONTAINER, CONTAINER_STAGGER, ITEM};
use crate::scene::background::BackgroundScene;

/// Which children of a section take part in the staggered reveal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Reveal {
    /// Only the body animates; the heading appears with the section.
    Body,
    HeadingAndBody,
    /// The section fades in as a whole.
    None,
}

impl Reveal {
    /// Stagger slots of the heading and body, in that order.
    pub fn slots(self) -> (Option<usize>, Option<usize>) {
        match self {
            Reveal::Body => (None, Some(0)),
            Reveal::HeadingAndBody => (Some(0), Some(1)),
            Reveal::None => (None, None),
        }
    }
}

fn item_style(phase: Phase, slot: Option<usize>) -> Option<String> {
    slot.map(|index| ITEM.style(phase, CONTAINER_STAGGER.delay(index)))
}

#[derive(Properties, PartialEq)]
pub struct SectionProps {
    pub heading: &'static str,
    pub body: &'static str,
    pub phase: Phase,
    pub reveal: Reveal,
    #[prop_or_default]
    pub node_ref: NodeRef,
}

impl SectionProps {
    fn from_copy(copy: &SectionCopy, phase: Phase, reveal: Reveal, node_ref: NodeRef) -> Self {
        SectionProps { heading: copy.heading, body: copy.body, phase, reveal, node_ref }
    }
}

#[function_component(Section)]
pub fn section(props: &SectionProps) -> Html {
    let (heading_slot, body_slot) = props.reveal.slots();

    html! {
        <section
            ref={props.node_ref.clone()}
            class="home-section"
            style={CONTAINER.style(props.phase, 0.0)}
        >
            <h2 class="home-section-heading" style={item_style(props.phase, heading_slot)}>
                {props.heading}
            </h2>
            <p class="home-section-body" style={item_style(props.phase, body_slot)}>
                {props.body}
            </p>
        </section>
    }
}

#[function_component(Home)]
pub fn home() -> Html {
    let differentials_ref = use_node_ref();
    let differentials_in_view = use_in_view(differentials_ref.clone(), REVEAL_THRESHOLD);

    use_effect_with_deps(
        move |_| {
            if let Some(document) = window().and_then(|w| w.document()) {
                document.set_title(PAGE_TITLE);
            }
            || ()
        },
        (),
    );

    let who_we_are = SectionProps::from_copy(&WHO_WE_ARE, Phase::Show, Reveal::Body, NodeRef::default());
    let differentials = SectionProps::from_copy(
        &OUR_DIFFERENTIALS,
        Phase::when(differentials_in_view),
        Reveal::HeadingAndBody,
        differentials_ref,
    );
    let approach = SectionProps::from_copy(&OUR_APPROACH, Phase::Show, Reveal::None, NodeRef::default());

    html! {
        <div class="home-page">
            <Header />
            <main class="home-main">
                <Section ..who_we_are />
                <Section ..differentials />
                <Section ..approach />
                <div class="scene-layer">
                    <BackgroundScene />
                </div>
            </main>
            <Footer company_name={COMPANY_NAME} links={FOOTER_LINKS.to_vec()} />
            <style>
                {format!(r#"
                    body {{
                        margin: 0;
                        background: {page};
                        font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                    }}
                    .home-page {{
                        min-height: 100vh;
                        background: {page};
                    }}
                    .home-main {{
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        min-height: 100vh;
                        padding: 2.5rem;
                        text-align: center;
                        background: {page};
                    }}
                    .home-section {{
                        position: relative;
                        z-index: 1;
                        flex: 1;
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        min-height: 100vh;
                        max-width: 960px;
                    }}
                    .home-section-heading {{
                        margin: 0 0 1.5rem;
                        font-size: 3rem;
                        font-weight: 600;
                        color: #fff;
                    }}
                    .home-section-body {{
                        margin: 0;
                        font-size: 1.25rem;
                        line-height: 1.75rem;
                        color: #fff;
                    }}
                    .scene-layer {{
                        position: fixed;
                        top: 0;
                        right: 0;
                        bottom: 0;
                        left: 0;
                        z-index: 0;
                        opacity: 0.5;
                        pointer-events: none;
                    }}
                    .background-scene {{
                        display: block;
                        width: 100%;
                        height: 100%;
                        image-rendering: pixelated;
                    }}
                    @media (max-width: 768px) {{
                        .home-section-heading {{
                            font-size: 2.25rem;
                        }}
                    }}
                "#, page = theme::PAGE_BACKGROUND)}
            </style>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stagger_slots() {
        assert_eq!(Reveal::Body.slots(), (None, Some(0)));
        assert_eq!(Reveal::HeadingAndBody.slots(), (Some(0), Some(1)));
        assert_eq!(Reveal::None.slots(), (None, None));
    }

    #[test]
    fn unstaggered_children_have_no_style() {
        assert_eq!(item_style(Phase::Show, None), None);
    }

    #[test]
    fn body_waits_for_heading() {
        let heading = item_style(Phase::Show, Some(0)).unwrap();
        let body = item_style(Phase::Show, Some(1)).unwrap();
        assert!(heading.ends_with(" 0.8s both;"), "{heading}");
        assert!(body.ends_with(" 1.2s both;"), "{body}");
    }

    #[test]
    fn hidden_section_children_stay_hidden() {
        let body = item_style(Phase::Hidden, Some(1)).unwrap();
        assert!(body.starts_with("opacity: 0;"));
        assert!(!body.contains("animation"));
    }
}
