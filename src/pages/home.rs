use std::rc::Rc;

use yew::prelude::*;
use yew_router::prelude::*;

use crate::catalog::Catalog;
use crate::Route;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub catalog: Rc<Catalog>,
}

/// Landing page: a hero plus the full catalog, every subservice linking into
/// its detail page.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div class="home-page">
            <style>
                {r#".home-page {
                    min-height: 100vh;
                    background: #f9fafb;
                }
                .home-hero {
                    padding: 6rem 1rem 4rem;
                    text-align: center;
                    background: #111827;
                    color: #fff;
                }
                .home-hero h1 {
                    font-size: 2.5rem;
                    margin-bottom: 1rem;
                }
                .home-hero p {
                    color: rgba(255, 255, 255, 0.8);
                    max-width: 540px;
                    margin: 0 auto;
                }
                .services-grid {
                    max-width: 1100px;
                    margin: 0 auto;
                    padding: 3rem 1rem;
                    display: grid;
                    grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
                    gap: 1.5rem;
                }
                .service-card {
                    background: #fff;
                    border-radius: 12px;
                    padding: 1.5rem;
                    box-shadow: 0 1px 3px rgba(0, 0, 0, 0.08);
                }
                .service-card h2 {
                    font-size: 1.25rem;
                    color: #1f2937;
                    margin-bottom: 1rem;
                }
                .subservice-link {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    padding: 0.75rem 1rem;
                    margin-bottom: 0.5rem;
                    border: 1px solid #e5e7eb;
                    border-radius: 8px;
                    color: #374151;
                    text-decoration: none;
                    transition: border-color 0.2s;
                }
                .subservice-link:hover {
                    border-color: #2563eb;
                    color: #2563eb;
                }"#}
            </style>

            <section class="home-hero">
                <h1>{"Services that move your business forward"}</h1>
                <p>{"Pick a service below to see what's included and get a free quote within the hour."}</p>
            </section>

            <section class="services-grid">
                {
                    props.catalog.services().iter().map(|service| {
                        html! {
                            <div key={service.id} class="service-card">
                                <h2>{&service.name}</h2>
                                {
                                    service.subservices.iter().map(|subservice| {
                                        html! {
                                            <Link<Route>
                                                key={subservice.id}
                                                classes="subservice-link"
                                                to={Route::ServiceDetail {
                                                    service_id: service.id.to_string(),
                                                    subservice_id: subservice.id.to_string(),
                                                }}
                                            >
                                                <span>{&subservice.name}</span>
                                                <span>{"→"}</span>
                                            </Link<Route>>
                                        }
                                    }).collect::<Html>()
                                }
                            </div>
                        }
                    }).collect::<Html>()
                }
            </section>
        </div>
    }
}
