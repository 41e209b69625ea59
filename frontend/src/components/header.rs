use log::error;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config::HeaderConfig;
use crate::nav::menu::MenuController;
use crate::nav::scroll::ScrollMonitor;
use crate::nav::sections::SectionAnchor;
use crate::nav::viewport::BrowserViewport;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    #[prop_or_default]
    pub config: HeaderConfig,
}

#[derive(Properties, PartialEq)]
struct NavLinksProps {
    nav_class: &'static str,
    on_navigate: Callback<SectionAnchor>,
}

#[function_component(NavLinks)]
fn nav_links(props: &NavLinksProps) -> Html {
    html! {
        <nav class={props.nav_class}>
            { for SectionAnchor::MENU.iter().map(|anchor| {
                let anchor = *anchor;
                let onclick = props.on_navigate.reform(move |e: MouseEvent| {
                    e.prevent_default();
                    anchor
                });
                html! {
                    <button key={anchor.id()} class="nav-link" {onclick}>
                        {anchor.label()}
                    </button>
                }
            }) }
            <button class="download-button">{"Download App"}</button>
        </nav>
    }
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let config = props.config;
    let menu = use_state(|| MenuController::new(config.scroll_mode));
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |threshold| {
                let monitor = BrowserViewport::current().and_then(|viewport| {
                    ScrollMonitor::attach(&viewport, *threshold, move |past| is_scrolled.set(past))
                });
                if let Err(err) = &monitor {
                    error!("Header scroll monitor unavailable: {}", err);
                }
                move || drop(monitor)
            },
            config.scroll_threshold,
        );
    }

    let toggle_menu = {
        let menu = menu.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let mut next = *menu;
            next.toggle_open();
            menu.set(next);
        })
    };

    let on_navigate = {
        let menu = menu.clone();
        Callback::from(move |anchor: SectionAnchor| match BrowserViewport::current() {
            Ok(viewport) => {
                let mut next = *menu;
                next.activate(&viewport, anchor.id());
                menu.set(next);
            }
            Err(err) => error!("Cannot navigate to {}: {}", anchor.id(), err),
        })
    };

    html! {
        <header class={classes!("site-header", (*is_scrolled).then(|| "scrolled"))}>
            <div class="header-content">
                <div class="brand">
                    <div class="brand-mark">{"S"}</div>
                    <span class="brand-name">{"SnapClass"}</span>
                </div>

                <NavLinks nav_class="desktop-nav" on_navigate={on_navigate.clone()} />

                <button
                    class={classes!("burger-menu", menu.is_open().then(|| "open"))}
                    aria-label="Toggle navigation"
                    onclick={toggle_menu}
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>

            {
                if menu.is_open() {
                    html! { <NavLinks nav_class="mobile-nav" on_navigate={on_navigate} /> }
                } else {
                    html! {}
                }
            }

            <style>
                {r#"
                .site-header {
                    position: fixed;
                    top: 0;
                    left: 0;
                    right: 0;
                    z-index: 50;
                    background: transparent;
                    transition: all 0.3s ease;
                }

                .site-header.scrolled {
                    background: rgba(255, 255, 255, 0.95);
                    backdrop-filter: blur(4px);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .header-content {
                    max-width: 80rem;
                    margin: 0 auto;
                    padding: 1rem 2rem;
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                }

                .brand {
                    display: flex;
                    align-items: center;
                    gap: 0.5rem;
                }

                .brand-mark {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.5rem;
                    background: linear-gradient(to right, #9333ea, #a855f7);
                    color: #fff;
                    font-weight: 700;
                    font-size: 0.875rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }

                .brand-name {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #111827;
                }

                .desktop-nav {
                    display: flex;
                    align-items: center;
                    gap: 2rem;
                }

                .nav-link {
                    background: none;
                    border: none;
                    color: #374151;
                    font-size: 1rem;
                    cursor: pointer;
                    transition: color 0.2s;
                }

                .nav-link:hover {
                    color: #9333ea;
                }

                .download-button {
                    background: linear-gradient(to right, #9333ea, #a855f7);
                    color: #fff;
                    border: none;
                    padding: 0.5rem 1.5rem;
                    border-radius: 9999px;
                    cursor: pointer;
                    transition: all 0.2s;
                }

                .download-button:hover {
                    transform: scale(1.05);
                    box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                }

                .burger-menu {
                    display: none;
                    flex-direction: column;
                    gap: 5px;
                    background: none;
                    border: none;
                    cursor: pointer;
                    padding: 0.25rem;
                }

                .burger-menu span {
                    display: block;
                    width: 24px;
                    height: 2px;
                    background: #111827;
                    transition: transform 0.2s, opacity 0.2s;
                }

                .burger-menu.open span:nth-child(1) {
                    transform: translateY(7px) rotate(45deg);
                }

                .burger-menu.open span:nth-child(2) {
                    opacity: 0;
                }

                .burger-menu.open span:nth-child(3) {
                    transform: translateY(-7px) rotate(-45deg);
                }

                .mobile-nav {
                    display: none;
                }

                @media (max-width: 768px) {
                    .desktop-nav {
                        display: none;
                    }

                    .burger-menu {
                        display: flex;
                    }

                    .mobile-nav {
                        position: absolute;
                        top: 100%;
                        left: 0;
                        right: 0;
                        display: flex;
                        flex-direction: column;
                        align-items: flex-start;
                        gap: 1rem;
                        padding: 1rem;
                        background: #fff;
                        border-top: 1px solid #e5e7eb;
                        box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
                    }

                    .mobile-nav .download-button {
                        align-self: stretch;
                    }
                }
                "#}
            </style>
        </header>
    }
}
