use std::rc::Rc;

use log::{info, Level};
use web_sys::MouseEvent;
use yew::prelude::*;
use yew_router::prelude::*;

mod catalog;
mod config;
mod inquiry;
mod components {
    pub mod feature_carousel;
}
mod pages {
    pub mod home;
    pub mod not_found;
    pub mod service_detail;
}

use catalog::Catalog;
use pages::{home::Home, not_found::NotFound, service_detail::ServiceDetail};

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/services/:service_id/:subservice_id")]
    ServiceDetail {
        service_id: String,
        subservice_id: String,
    },
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, catalog: Rc<Catalog>) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home catalog={catalog} /> }
        }
        Route::ServiceDetail {
            service_id,
            subservice_id,
        } => {
            info!("Rendering ServiceDetail page");
            html! {
                <ServiceDetail
                    service_id={service_id}
                    subservice_id={subservice_id}
                    catalog={catalog}
                />
            }
        }
        Route::NotFound => {
            info!("Rendering NotFound page");
            html! { <NotFound /> }
        }
    }
}

#[function_component(Nav)]
pub fn nav() -> Html {
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
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
        })
    };

    let menu_class = if *menu_open {
        "nav-right mobile-menu-open"
    } else {
        "nav-right"
    };

    html! {
        <nav class="top-nav">
            <div class="nav-content">
                <Link<Route> to={Route::Home} classes="nav-logo">
                    {"servicefront"}
                </Link<Route>>

                <button class="burger-menu" onclick={toggle_menu}>
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
                <div class={menu_class}>
                    <div onclick={close_menu}>
                        <Link<Route> to={Route::Home} classes="nav-link">
                            {"Services"}
                        </Link<Route>>
                    </div>
                </div>
            </div>
        </nav>
    }
}

#[function_component]
fn App() -> Html {
    // The catalog is built once and injected into every page through the
    // router's render closure.
    let catalog = use_memo(|_| Catalog::builtin(), ());

    let render = {
        let catalog = catalog.clone();
        Callback::from(move |route: Route| switch(route, catalog.clone()))
    };

    html! {
        <BrowserRouter>
            <Nav />
            <Switch<Route> render={render} />
        </BrowserRouter>
    }
}

fn main() {
    console_error_panic_hook::set_once();

    console_log::init_with_level(Level::Info).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
