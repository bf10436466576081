use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Fallback view for unknown routes and for detail pages whose ids do not
/// resolve in the catalog. One recovery action: back to the home page.
#[function_component(NotFound)]
pub fn not_found() -> Html {
    let navigator = use_navigator().unwrap();

    let go_home = Callback::from(move |_| {
        navigator.push(&Route::Home);
    });

    html! {
        <div class="not-found-page">
            <style>
                {r#".not-found-page {
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    padding: 2rem;
                    background: #f9fafb;
                }
                .not-found-panel {
                    text-align: center;
                    max-width: 420px;
                }
                .not-found-icon {
                    width: 80px;
                    height: 80px;
                    margin: 0 auto 1.5rem;
                    background: #fee2e2;
                    border-radius: 50%;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                }
                .not-found-panel h1 {
                    font-size: 1.5rem;
                    color: #1f2937;
                    margin-bottom: 0.75rem;
                }
                .not-found-panel p {
                    color: #6b7280;
                    margin-bottom: 2rem;
                }
                .not-found-panel button {
                    padding: 0.75rem 2rem;
                    background: #111827;
                    color: #fff;
                    border: none;
                    border-radius: 8px;
                    font-weight: 500;
                    cursor: pointer;
                }"#}
            </style>
            <div class="not-found-panel">
                <div class="not-found-icon">{"⚠️"}</div>
                <h1>{"Service Not Found"}</h1>
                <p>{"The requested service could not be found."}</p>
                <button onclick={go_home}>{"Go Home"}</button>
            </div>
        </div>
    }
}
