use log::{info, Level};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod config;
mod scroll;
mod components {
    pub mod contact_form;
    pub mod hero_slider;
    pub mod lazy_image;
    pub mod observe;
    pub mod reveal;
    pub mod scroll_top;
    pub mod stat_counter;
}
mod pages {
    pub mod home;
}

use components::scroll_top::ScrollTop;
use pages::home::Home;

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
            html! { <Home /> }
        }
        Route::NotFound => {
            // single-page site, every section lives on the home page
            info!("Unknown route, rendering Home page");
            html! { <Home /> }
        }
    }
}

fn section_link(id: &'static str, menu_open: UseStateHandle<bool>) -> Callback<MouseEvent> {
    Callback::from(move |e: MouseEvent| {
        e.prevent_default();
        scroll::scroll_to_section(id);
        menu_open.set(false);
    })
}

#[function_component(Nav)]
pub fn nav() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window().unwrap();

                let scroll_callback = Closure::wrap(Box::new({
                    let is_scrolled = is_scrolled.clone();
                    move || {
                        if let Some(win) = web_sys::window() {
                            if let Ok(scroll_y) = win.scroll_y() {
                                is_scrolled.set(scroll_y > config::NAV_ELEVATE_AT_PX);
                            }
                        }
                    }
                }) as Box<dyn FnMut()>);

                window
                    .add_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    )
                    .unwrap();

                move || {
                    let _ = window.remove_event_listener_with_callback(
                        "scroll",
                        scroll_callback.as_ref().unchecked_ref(),
                    );
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class={classes!("top-nav", (*is_scrolled).then(|| "elevated"))}>
            <style>
                {r#"
                    body {
                        margin: 0;
                        font-family: 'Segoe UI', Roboto, Helvetica, Arial, sans-serif;
                        color: #1a1a2e;
                        background: #fff;
                    }
                    .top-nav {
                        position: fixed;
                        top: 0;
                        left: 0;
                        right: 0;
                        height: 80px;
                        z-index: 100;
                        background: rgba(255, 255, 255, 0.96);
                        transition: box-shadow 0.3s ease;
                    }
                    .top-nav.elevated {
                        box-shadow: 0 4px 20px rgba(26, 26, 46, 0.15);
                    }
                    .nav-content {
                        max-width: 1100px;
                        height: 100%;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .nav-logo {
                        font-size: 1.5rem;
                        font-weight: bold;
                        color: #1a1a2e;
                        text-decoration: none;
                    }
                    .nav-right {
                        display: flex;
                        gap: 2rem;
                    }
                    .nav-link {
                        color: #1a1a2e;
                        text-decoration: none;
                        font-size: 1.05rem;
                    }
                    .nav-link:hover {
                        color: #C9A961;
                    }
                    .burger-menu {
                        display: none;
                        background: none;
                        border: none;
                        font-size: 1.6rem;
                        color: #1a1a2e;
                        cursor: pointer;
                    }
                    .burger-menu .hidden {
                        display: none;
                    }
                    @media (max-width: 768px) {
                        .burger-menu {
                            display: block;
                        }
                        .nav-right {
                            display: none;
                            position: absolute;
                            top: 80px;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            gap: 0;
                            background: #fff;
                            box-shadow: 0 8px 20px rgba(26, 26, 46, 0.15);
                        }
                        .nav-right.mobile-menu-open {
                            display: flex;
                        }
                        .nav-right .nav-link {
                            padding: 1rem 1.5rem;
                            border-bottom: 1px solid rgba(26, 26, 46, 0.08);
                        }
                    }
                "#}
            </style>
            <div class="nav-content">
                <a href="#home" class="nav-logo" onclick={section_link("home", menu_open.clone())}>
                    {"CCA"}
                </a>
                <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                    <span class={classes!("menu-icon", (*menu_open).then(|| "hidden"))}>{"☰"}</span>
                    <span class={classes!("close-icon", (!*menu_open).then(|| "hidden"))}>{"✕"}</span>
                </button>
                <div class={menu_class}>
                    <a href="#courses" class="nav-link" onclick={section_link("courses", menu_open.clone())}>
                        {"Courses"}
                    </a>
                    <a href="#about" class="nav-link" onclick={section_link("about", menu_open.clone())}>
                        {"About"}
                    </a>
                    <a href="#contact" class="nav-link" onclick={section_link("contact", menu_open.clone())}>
                        {"Contact"}
                    </a>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={switch} />
            <ScrollTop />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    gloo_console::log!("🎓 CCA - Career Counselling Advisor");
    yew::Renderer::<App>::new().render();
}
