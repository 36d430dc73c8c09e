use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::footer::Footer;
use crate::components::header::Header;
use crate::config::{theme, COMPANY_NAME, FOOTER_LINKS};
use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="not-found-page">
            <Header />
            <main class="not-found">
                <h2>{"Page not found"}</h2>
                <p>{"The page you are looking for does not exist."}</p>
                <Link<Route> to={Route::Home} classes="not-found-link">
                    {"Back to home"}
                </Link<Route>>
            </main>
            <Footer company_name={COMPANY_NAME} links={FOOTER_LINKS.to_vec()} />
            <style>
                {format!(r#"
                    body {{
                        margin: 0;
                    }}
                    .not-found {{
                        display: flex;
                        flex-direction: column;
                        justify-content: center;
                        align-items: center;
                        min-height: 100vh;
                        color: #fff;
                        text-align: center;
                        background: {gradient};
                    }}
                    .not-found h2 {{
                        font-size: 3rem;
                        margin: 0 0 1rem;
                    }}
                    .not-found-link {{
                        margin-top: 2rem;
                        padding: 0.75rem 1.5rem;
                        background: {accent};
                        color: #000;
                        text-decoration: none;
                        border-radius: 0.25rem;
                    }}
                "#, gradient = theme::BLACK_LIGHTRED_GRADIENT, accent = theme::ACCENT)}
            </style>
        </div>
    }
}
