use leptos::prelude::*;

use crate::models::{catalog, Product};

/// Page-session view state, created by the root view and passed down to
/// the components that read or mutate it. Signals are arena-backed, so
/// the struct is `Copy` and cheap to hand out as a prop.
#[derive(Clone, Copy)]
pub struct ViewState {
    pub dark_mode: RwSignal<bool>,
    pub products: RwSignal<Vec<Product>>,
}

impl ViewState {
    pub fn new() -> Self {
        Self {
            dark_mode: RwSignal::new(false),
            products: RwSignal::new(Vec::new()),
        }
    }

    /// Populate `products` from the compiled-in catalog. Idempotent:
    /// re-running replaces the list with the same sequence.
    pub fn initialize(&self) {
        self.products.set(catalog().to_vec());
    }

    pub fn toggle_dark_mode(&self) {
        self.dark_mode.update(|dark| *dark = !*dark);
    }
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}
