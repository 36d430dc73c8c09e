use std::rc::Rc;

use yew::prelude::*;

use crate::config::{theme, Dropdown, NavMenu, COMPANY_NAME, NAV_MENUS};
use crate::motion::{Phase, DROPDOWN};

/// Which dropdown panels are open. Each flag only changes on hover events of
/// its own trigger.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropdownState {
    pub products: bool,
    pub solutions: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HoverAction {
    Enter(Dropdown),
    Leave(Dropdown),
}

impl DropdownState {
    pub fn is_open(&self, dropdown: Dropdown) -> bool {
        match dropdown {
            Dropdown::Products => self.products,
            Dropdown::Solutions => self.solutions,
        }
    }

    fn flag(&mut self, dropdown: Dropdown) -> &mut bool {
        match dropdown {
            Dropdown::Products => &mut self.products,
            Dropdown::Solutions => &mut self.solutions,
        }
    }
}

impl Reducible for DropdownState {
    type Action = HoverAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = *self;
        match action {
            HoverAction::Enter(dropdown) => *next.flag(dropdown) = true,
            HoverAction::Leave(dropdown) => *next.flag(dropdown) = false,
        }
        Rc::new(next)
    }
}

#[derive(Properties, PartialEq)]
struct NavTriggerProps {
    menu: NavMenu,
    open: bool,
    on_hover: Callback<HoverAction>,
}

#[function_component(NavTrigger)]
fn nav_trigger(props: &NavTriggerProps) -> Html {
    let NavTriggerProps { menu, open, on_hover } = props;
    let dropdown = menu.dropdown;

    let onmouseenter = on_hover.reform(move |_: MouseEvent| HoverAction::Enter(dropdown));
    let onmouseleave = on_hover.reform(move |_: MouseEvent| HoverAction::Leave(dropdown));

    html! {
        <div class="nav-trigger" {onmouseenter} {onmouseleave}>
            <a href={menu.href} class="nav-trigger-link">
                <p>{menu.label}</p>
            </a>
            {
                if *open {
                    html! {
                        <div class="nav-dropdown" style={DROPDOWN.style(Phase::Show, 0.0)}>
                            <h3>{menu.heading}</h3>
                            <ul>
                                { for menu.items.iter().map(|item| html! { <li>{*item}</li> }) }
                            </ul>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let dropdowns = use_reducer(DropdownState::default);

    let on_hover = {
        let dropdowns = dropdowns.clone();
        Callback::from(move |action: HoverAction| dropdowns.dispatch(action))
    };

    html! {
        <header class="site-header">
            <div class="site-header-inner">
                <nav class="site-nav">
                    <h1 class="site-title">{COMPANY_NAME}</h1>
                    { for NAV_MENUS.iter().map(|menu| html! {
                        <NavTrigger
                            key={menu.label}
                            menu={*menu}
                            open={dropdowns.is_open(menu.dropdown)}
                            on_hover={on_hover.clone()}
                        />
                    }) }
                </nav>
            </div>
            <style>
                {format!(r#"
                    .site-header {{
                        position: fixed;
                        top: 0;
                        left: 0;
                        width: 100%;
                        background: {brand};
                        color: #fff;
                        z-index: 10;
                    }}
                    .site-header-inner {{
                        margin: 0 0.5rem;
                        padding: 0.75rem 1rem;
                    }}
                    .site-nav {{
                        display: flex;
                        align-items: center;
                    }}
                    .site-title {{
                        margin: 0 1rem;
                        font-size: 1.125rem;
                        font-weight: 700;
                    }}
                    .nav-trigger {{
                        position: relative;
                        margin-right: 1rem;
                    }}
                    .nav-trigger-link {{
                        color: inherit;
                        text-decoration: none;
                    }}
                    .nav-trigger-link:hover {{
                        color: {accent};
                    }}
                    .nav-trigger p {{
                        margin: 0;
                    }}
                    .nav-dropdown {{
                        position: absolute;
                        left: 0;
                        margin-top: 0.5rem;
                        width: 12rem;
                        padding: 1rem;
                        background: #000;
                        color: #fff;
                    }}
                    .nav-dropdown h3 {{
                        margin: 0 0 0.5rem;
                        font-size: 1.125rem;
                        font-weight: 600;
                    }}
                    .nav-dropdown ul {{
                        list-style: none;
                        margin: 0;
                        padding: 0;
                    }}
                "#, brand = theme::BRAND_RED, accent = theme::ACCENT)}
            </style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: DropdownState, actions: &[HoverAction]) -> DropdownState {
        let state = actions
            .iter()
            .fold(Rc::new(state), |state, action| state.reduce(*action));
        *state
    }

    #[test]
    fn starts_closed() {
        let state = DropdownState::default();
        assert!(!state.is_open(Dropdown::Products));
        assert!(!state.is_open(Dropdown::Solutions));
    }

    #[test]
    fn hovering_products_opens_only_products() {
        let state = apply(DropdownState::default(), &[HoverAction::Enter(Dropdown::Products)]);
        assert!(state.is_open(Dropdown::Products));
        assert!(!state.is_open(Dropdown::Solutions));

        let state = apply(state, &[HoverAction::Leave(Dropdown::Products)]);
        assert_eq!(state, DropdownState::default());
    }

    #[test]
    fn flags_toggle_independently_in_any_order() {
        use Dropdown::*;
        use HoverAction::*;

        let state = apply(DropdownState::default(), &[Enter(Solutions), Enter(Products)]);
        assert_eq!(state, DropdownState { products: true, solutions: true });

        let state = apply(state, &[Leave(Solutions)]);
        assert_eq!(state, DropdownState { products: true, solutions: false });

        let state = apply(state, &[Leave(Products), Enter(Solutions)]);
        assert_eq!(state, DropdownState { products: false, solutions: true });
    }

    #[test]
    fn leave_without_enter_is_harmless() {
        let state = apply(
            DropdownState { products: true, solutions: false },
            &[HoverAction::Leave(Dropdown::Solutions)],
        );
        assert_eq!(state, DropdownState { products: true, solutions: false });
    }

    #[test]
    fn every_dropdown_has_a_menu() {
        for dropdown in [Dropdown::Products, Dropdown::Solutions] {
            assert_eq!(NAV_MENUS.iter().filter(|menu| menu.dropdown == dropdown).count(), 1);
        }
    }
}
