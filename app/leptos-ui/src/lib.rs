use leptos::prelude::*;

pub mod capabilities;
pub mod components;
pub mod style_registry;

pub use components::ProgressSpinner;
pub use style_registry::{provide_spinner_styles, use_spinner_styles, StyleRegistry};

use halo_core::SpinnerMode;
use wasm_bindgen::prelude::*;

/// Demo page: a determinate spinner driven by a slider next to an
/// indeterminate one.
#[component]
pub fn App() -> impl IntoView {
    provide_spinner_styles();

    let (value, set_value) = signal(10.0_f64);

    view! {
        <div class="demo">
            <ProgressSpinner value=value />
            <ProgressSpinner
                mode=SpinnerMode::Indeterminate
                color="#e91e63".to_string()
                diameter=48.0
                stroke_width=6.0
            />
            <input
                type="range"
                min="0"
                max="100"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    set_value.set(event_target_value(&ev).parse().unwrap_or(0.0));
                }
            />
            <span>{move || format!("{}%", value.get())}</span>
        </div>
    }
}

#[wasm_bindgen(start)]
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
