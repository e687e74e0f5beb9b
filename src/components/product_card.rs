use leptos::prelude::*;

use crate::components::Reveal;
use crate::models::{resolve_image, Product};

#[component]
pub fn ProductCard(product: Product, index: usize) -> impl IntoView {
    // One-shot image fallback: the first load failure flips the flag,
    // after which further error events no longer change the reference.
    let failed = RwSignal::new(false);
    let delay_ms = (index as u32) * 200;

    let Product {
        name,
        description,
        image_ref,
    } = product;

    let alt = name.clone();
    let src = {
        let name = name.clone();
        move || resolve_image(&image_ref, &name, failed.get())
    };

    view! {
        <Reveal delay_ms=delay_ms>
            <article class="product-card">
                <img
                    class="product-image"
                    src=src
                    alt=alt
                    on:error=move |_| failed.set(true)
                />
                <h3>{name}</h3>
                <p>{description}</p>
            </article>
        </Reveal>
    }
}
