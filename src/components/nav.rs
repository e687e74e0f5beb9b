use leptos::prelude::*;

use crate::components::AnchorLink;
use crate::state::ViewState;

#[component]
pub fn Nav(state: ViewState) -> impl IntoView {
    view! {
        <nav class="main-nav">
            <div class="nav-brand">
                <AnchorLink href="#hero">"FurniCo"</AnchorLink>
            </div>

            <div class="nav-links">
                <AnchorLink href="#hero">"Home"</AnchorLink>
                <AnchorLink href="#products">"Products"</AnchorLink>
                <AnchorLink href="#about">"About"</AnchorLink>
                <AnchorLink href="#newsletter">"Contact"</AnchorLink>
                <button
                    class="btn btn-small mode-toggle"
                    on:click=move |_| state.toggle_dark_mode()
                >
                    {move || if state.dark_mode.get() { "Light Mode" } else { "Dark Mode" }}
                </button>
            </div>
        </nav>
    }
}
