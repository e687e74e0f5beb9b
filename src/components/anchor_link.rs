use leptos::prelude::*;

/// In-page link that replaces the default fragment jump with a smooth
/// scroll to the target section, if it exists. Default navigation is
/// always suppressed; a missing target is a silent no-op.
#[component]
pub fn AnchorLink(href: &'static str, children: Children) -> impl IntoView {
    view! {
        <a
            href=href
            on:click=move |ev| {
                ev.prevent_default();
                scroll_to_fragment(href);
            }
        >
            {children()}
        </a>
    }
}

/// Extract the element id a fragment href points at. Non-fragment hrefs
/// and the bare "#" carry no target.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

fn scroll_to_fragment(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(id) = fragment_target(href) else {
            return;
        };
        if let Some(target) = document().get_element_by_id(id) {
            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_hrefs_resolve_to_element_ids() {
        assert_eq!(fragment_target("#products"), Some("products"));
        assert_eq!(fragment_target("#does-not-exist"), Some("does-not-exist"));
    }

    #[test]
    fn non_fragment_hrefs_have_no_target() {
        assert_eq!(fragment_target("#"), None);
        assert_eq!(fragment_target("/about"), None);
        assert_eq!(fragment_target("https://example.com/#products"), None);
    }
}
