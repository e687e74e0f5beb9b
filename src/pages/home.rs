use leptos::html;
use leptos::prelude::*;

use crate::components::{ProductCard, Reveal};
use crate::motion::hero_frame;
use crate::state::ViewState;

#[component]
pub fn HomePage(state: ViewState) -> impl IntoView {
    view! {
        <Hero/>
        <ProductShowcase state=state/>
        <About/>
        <Newsletter/>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let progress = RwSignal::new(0.0_f64);
    let section_ref = NodeRef::<html::Section>::new();

    // Sample hero progress from absolute geometry on every scroll and
    // resize event, so sparse or irregular event delivery still lands
    // on the right frame.
    Effect::new(move |_| {
        #[cfg(feature = "hydrate")]
        {
            use leptos::ev;

            use crate::motion::section_progress;

            let sample = move || {
                let Some(section) = section_ref.get_untracked() else {
                    return;
                };
                let viewport = window()
                    .inner_height()
                    .ok()
                    .and_then(|h| h.as_f64())
                    .unwrap_or(0.0);
                let rect = section.get_bounding_client_rect();
                progress.set(section_progress(rect.top(), rect.height(), viewport));
            };
            sample();
            window_event_listener(ev::scroll, move |_| sample());
            window_event_listener(ev::resize, move |_| sample());
        }
    });

    let frame = Memo::new(move |_| hero_frame(progress.get()));

    view! {
        <section id="hero" class="hero" node_ref=section_ref>
            <div class="hero-pin">
                <div
                    class="hero-layer hero-backdrop"
                    style:transform=move || frame.get().background_transform()
                ></div>
                <img
                    class="hero-layer hero-image"
                    src="https://source.unsplash.com/1600x900/?furniture,interior"
                    alt="Furniture showroom"
                    style:transform=move || frame.get().foreground_transform()
                />
                <div
                    class="hero-layer hero-copy"
                    style:transform=move || frame.get().text_transform()
                >
                    <h1>"Modern Furniture"</h1>
                    <p class="subtitle">
                        "Elevate your space with minimalist, handcrafted furniture designed for comfort and style."
                    </p>
                </div>
                <div class="hero-overlay" style:clip-path=move || frame.get().clip_path()></div>
            </div>
        </section>
    }
}

#[component]
fn ProductShowcase(state: ViewState) -> impl IntoView {
    view! {
        <section id="products" class="products">
            {move || {
                state
                    .products
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, product)| view! { <ProductCard product=product index=index/> })
                    .collect_view()
            }}
        </section>
    }
}

#[component]
fn About() -> impl IntoView {
    view! {
        <section id="about" class="about">
            <Reveal>
                <img
                    class="about-image"
                    src="https://source.unsplash.com/400x300/?furniture"
                    alt="About us"
                />
            </Reveal>
            <Reveal>
                <div class="about-copy">
                    <h2>"About Our Craft"</h2>
                    <p>
                        "We blend modern aesthetics with time-honored craftsmanship to create stunning furniture pieces. Every item is a work of art."
                    </p>
                </div>
            </Reveal>
        </section>
    }
}

#[component]
fn Newsletter() -> impl IntoView {
    view! {
        <section id="newsletter" class="newsletter">
            <Reveal>
                <h2>"Stay Updated"</h2>
                <p>"Subscribe to our newsletter for the latest arrivals and offers."</p>
                // Display-only for now: the subscribe button has no
                // submission handler.
                <div class="newsletter-form">
                    <input type="email" placeholder="Enter your email"/>
                    <button class="btn btn-primary">"Subscribe"</button>
                </div>
            </Reveal>
        </section>
    }
}
