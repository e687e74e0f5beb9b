use leptos::html;
use leptos::prelude::*;

use crate::motion::RevealPhase;

/// Wraps a block that enters hidden and offset, then settles the first
/// time it intersects the viewport. The transition fires once; scrolling
/// back out never hides the block again.
#[component]
pub fn Reveal(
    /// Root margin handed to the IntersectionObserver, so sections can
    /// trigger slightly before or after their edge crosses the viewport.
    #[prop(default = "0px 0px -10% 0px")]
    margin: &'static str,
    /// Transition delay in milliseconds, for staggered grids.
    #[prop(default = 0)]
    delay_ms: u32,
    children: Children,
) -> impl IntoView {
    let phase = RwSignal::new(RevealPhase::Unrevealed);
    let node_ref = NodeRef::<html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        use send_wrapper::SendWrapper;
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::JsCast;

        let installed = StoredValue::new(false);
        Effect::new(move |_| {
            let Some(element) = node_ref.get() else {
                return;
            };
            if installed.get_value() {
                return;
            }
            installed.set_value(true);

            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    let intersecting = entries.iter().any(|entry| {
                        entry
                            .dyn_into::<web_sys::IntersectionObserverEntry>()
                            .map(|entry| entry.is_intersecting())
                            .unwrap_or(false)
                    });
                    if intersecting {
                        phase.update(|p| *p = p.on_intersection(true));
                        // One-shot: stop observing after the first hit.
                        observer.disconnect();
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_root_margin(margin);
            let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) else {
                return;
            };
            observer.observe(&element);

            let guard = SendWrapper::new((observer, callback));
            on_cleanup(move || {
                let (observer, callback) = guard.take();
                observer.disconnect();
                drop(callback);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = margin;
    }

    view! {
        <div
            class="reveal"
            class:revealed=move || phase.get().is_revealed()
            style:transition-delay=move || format!("{delay_ms}ms")
            node_ref=node_ref
        >
            {children()}
        </div>
    }
}
