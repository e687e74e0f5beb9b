use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::components::Nav;
use crate::pages::HomePage;
use crate::state::ViewState;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The view state is owned by the root view and handed to children
    // as a prop. Initialization is synchronous, so the product section
    // never renders from a partially loaded catalog.
    let state = ViewState::new();
    state.initialize();

    view! {
        <Stylesheet id="leptos" href="/pkg/furnico.css"/>
        <Title text="FurniCo - Modern Furniture"/>
        <Meta name="description" content="Minimalist, handcrafted furniture designed for comfort and style"/>

        <Router>
            <div class="site" class:dark=move || state.dark_mode.get()>
                <Nav state=state/>
                <main>
                    <Routes fallback=|| view! { <h1>"404 - Page Not Found"</h1> }>
                        <Route path=path!("/") view=move || view! { <HomePage state=state/> }/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
