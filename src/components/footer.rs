use chrono::Datelike;
use yew::prelude::*;

use crate::config::{theme, LinkItem};
use crate::motion::{Phase, FOOTER};

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    pub company_name: AttrValue,
    pub links: Vec<LinkItem>,
}

pub fn copyright_line(year: i32, company_name: &str) -> String {
    format!("© {} {}. All rights reserved.", year, company_name)
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let FooterProps { company_name, links } = props;

    // Not cached: follows the clock across a year boundary.
    let year = chrono::Local::now().year();

    html! {
        <footer class="site-footer" style={FOOTER.style(Phase::Show, 0.0)}>
            <div class="site-footer-inner">
                <div class="site-footer-row">
                    <div class="site-footer-name">{company_name.clone()}</div>
                    <ul class="site-footer-links">
                        { for links.iter().enumerate().map(|(index, link)| html! {
                            <li key={index}>
                                <a href={link.href}>{link.title}</a>
                            </li>
                        }) }
                    </ul>
                </div>
                <div class="site-footer-copyright">
                    {copyright_line(year, company_name)}
                </div>
            </div>
            <style>
                {format!(r#"
                    .site-footer {{
                        position: relative;
                        background: {brand};
                        color: #fff;
                        padding: 1.5rem 1rem;
                    }}
                    .site-footer-inner {{
                        max-width: 1200px;
                        margin: 0 auto;
                    }}
                    .site-footer-row {{
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: space-between;
                        align-items: center;
                    }}
                    .site-footer-name {{
                        font-size: 1.125rem;
                        font-weight: 600;
                    }}
                    .site-footer-links {{
                        display: flex;
                        gap: 1.5rem;
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }}
                    .site-footer-links a {{
                        color: #fff;
                        font-size: 0.875rem;
                        font-weight: 500;
                        text-decoration: none;
                    }}
                    .site-footer-links a:hover {{
                        color: #d1d5db;
                    }}
                    .site-footer-copyright {{
                        margin-top: 1.5rem;
                        text-align: center;
                        font-size: 0.875rem;
                        color: #9ca3af;
                    }}
                    @media (max-width: 768px) {{
                        .site-footer-links {{
                            margin-top: 1.5rem;
                        }}
                    }}
                "#, brand = theme::BRAND_RED)}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use yew::LocalServerRenderer;

    use crate::config::{COMPANY_NAME, FOOTER_LINKS};

    #[test]
    fn copyright_uses_year_and_company() {
        assert_eq!(copyright_line(2031, "Red Fox"), "© 2031 Red Fox. All rights reserved.");
    }

    fn render(props: FooterProps) -> String {
        block_on(LocalServerRenderer::<Footer>::with_props(props).render())
    }

    #[test]
    fn renders_every_link_in_order() {
        let html = render(FooterProps {
            company_name: COMPANY_NAME.into(),
            links: FOOTER_LINKS.to_vec(),
        });

        assert_eq!(html.matches("<a ").count(), FOOTER_LINKS.len());
        let positions: Vec<usize> = [
            r#"<a href="/">Home</a>"#,
            r#"<a href="/about">About</a>"#,
            r#"<a href="/contact">Contact</a>"#,
        ]
        .iter()
        .map(|anchor| html.find(anchor).unwrap_or_else(|| panic!("missing {anchor} in {html}")))
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]), "{positions:?}");
    }

    #[test]
    fn renders_copyright_for_current_year() {
        let html = render(FooterProps { company_name: "Red Fox".into(), links: Vec::new() });

        assert!(!html.contains("<a "));
        let year = chrono::Local::now().year();
        assert!(html.contains(&copyright_line(year, "Red Fox")), "{html}");
    }

    #[test]
    fn footer_props_compare_by_content() {
        let a = FooterProps { company_name: "Red Fox".into(), links: FOOTER_LINKS.to_vec() };
        let b = FooterProps { company_name: "Red Fox".into(), links: FOOTER_LINKS.to_vec() };
        assert!(a == b);
        let c = FooterProps { company_name: "Red Fox".into(), links: FOOTER_LINKS[..2].to_vec() };
        assert!(a != c);
    }
}
