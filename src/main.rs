use std::rc::Rc;

use log::{error, info};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod content;
mod reveal;
mod components {
    pub mod fade_up;
    pub mod footer;
}
mod pages {
    pub mod landing;
}

use content::{Brand, Nav as NavContent, SiteContent};
use pages::landing::Landing;
use reveal::SharedObserver;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Landing /> }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! {
                <div class="not-found">
                    <h1>{"Page not found"}</h1>
                    <Link<Route> to={Route::Home} classes="nav-link">
                        {"Back to the launchpad"}
                    </Link<Route>>
                </div>
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NavProps {
    pub brand: Brand,
    pub nav: NavContent,
}

#[function_component(Nav)]
pub fn nav(props: &NavProps) -> Html {
    let NavProps { brand, nav } = props;
    let menu_open = use_state(|| false);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| {
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <header class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="brand">
                    <img src={brand.logo.clone()} alt={format!("{} Logo", brand.name)} width="40" height="40" />
                    <span class="brand-name">{ &brand.name }</span>
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <nav class={menu_class}>
                    { for nav.links.iter().map(|link| html! {
                        <a href={link.href.clone()} class="nav-link" onclick={close_menu.clone()}>
                            { &link.label }
                        </a>
                    }) }
                    <button class="nav-wallet-button" onclick={close_menu.clone()}>
                        { &nav.connect_wallet }
                    </button>
                </nav>
            </div>
        </header>
    }
}

fn load_content() -> Result<Rc<SiteContent>, String> {
    SiteContent::embedded().map(Rc::new).map_err(|err| {
        error!("Failed to load page content: {}", err);
        err.to_string()
    })
}

#[function_component]
fn App() -> Html {
    let content = use_memo(|_| load_content(), ());
    let observer = use_state(SharedObserver::default);

    let body = match &*content {
        Ok(content) => html! {
            <ContextProvider<SharedObserver> context={(*observer).clone()}>
                <ContextProvider<Rc<SiteContent>> context={content.clone()}>
                    <BrowserRouter>
                        <Nav brand={content.brand.clone()} nav={content.nav.clone()} />
                        <Switch<Route> render={switch} />
                    </BrowserRouter>
                </ContextProvider<Rc<SiteContent>>>
            </ContextProvider<SharedObserver>>
        },
        Err(message) => html! {
            <div class="content-error">
                <p>{"This page could not be loaded."}</p>
                <pre>{ message }</pre>
            </div>
        },
    };

    html! {
        <>
            { body }
            <style>
                {r#"
                    * {
                        box-sizing: border-box;
                    }
                    body {
                        margin: 0;
                        min-height: 100vh;
                        background: black;
                        color: white;
                        font-family: system-ui, -apple-system, "Segoe UI", sans-serif;
                    }
                    .top-nav {
                        height: 80px;
                        padding: 0 2rem;
                    }
                    .nav-content {
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                        height: 100%;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: white;
                        text-decoration: none;
                    }
                    .brand-name {
                        font-size: 1.25rem;
                        font-weight: 700;
                    }
                    .nav-right {
                        display: flex;
                        align-items: center;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: white;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .nav-link:hover {
                        color: #d1d5db;
                    }
                    .nav-wallet-button {
                        padding: 0.5rem 1.5rem;
                        border: none;
                        border-radius: 9999px;
                        background: white;
                        color: black;
                        cursor: pointer;
                        transition: background 0.2s;
                    }
                    .nav-wallet-button:hover {
                        background: #e5e7eb;
                    }
                    .burger-menu {
                        display: none;
                        flex-direction: column;
                        gap: 4px;
                        background: none;
                        border: none;
                        cursor: pointer;
                    }
                    .burger-menu span {
                        width: 24px;
                        height: 2px;
                        background: white;
                    }
                    .not-found,
                    .content-error {
                        padding: 6rem 2rem;
                        text-align: center;
                    }

                    @media (max-width: 768px) {
                        .burger-menu {
                            display: flex;
                        }
                        .nav-right {
                            display: none;
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                            flex-direction: column;
                            position: absolute;
                            top: 80px;
                            left: 0;
                            right: 0;
                            padding: 1.5rem;
                            background: #0a0a0a;
                            z-index: 10;
                        }
                    }
                "#}
            </style>
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
