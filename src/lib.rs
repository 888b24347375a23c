mod app;
mod components;
mod drafts;
mod model;
mod outline;
mod pages;
mod seed;
mod state;
mod tree;

pub use app::App;

use leptos::prelude::*;

// Needed for `#[wasm_bindgen(start)]` on the wasm entrypoint.
#[cfg(all(target_arch = "wasm32", not(test)))]
use wasm_bindgen::prelude::wasm_bindgen;

// WASM-only tests (run with `cargo test --target wasm32-unknown-unknown` + wasm-bindgen-test-runner)
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn set_seed_global(value: &wasm_bindgen::JsValue) {
        let window = web_sys::window().expect("window");
        js_sys::Reflect::set(window.as_ref(), &crate::seed::SEED_GLOBAL.into(), value)
            .expect("should set seed global");
    }

    #[wasm_bindgen_test]
    fn test_seed_override_via_window_global() {
        let json = r#"{"name":"Override","children":[{"name":"Child"}]}"#;
        set_seed_global(&json.into());

        let seed = crate::seed::load_seed();
        assert_eq!(seed.name, "Override");
        assert_eq!(seed.children.as_ref().map(|kids| kids.len()), Some(1));

        set_seed_global(&wasm_bindgen::JsValue::UNDEFINED);
    }

    #[wasm_bindgen_test]
    fn test_unparsable_seed_override_falls_back_to_bundled() {
        set_seed_global(&"not json".into());

        let seed = crate::seed::load_seed();
        assert_eq!(seed.name, "Root");

        set_seed_global(&wasm_bindgen::JsValue::UNDEFINED);
    }
}

// Only register the WASM start function for normal builds (not for tests),
// otherwise wasm-bindgen-test will end up with multiple entry symbols.
#[cfg_attr(all(target_arch = "wasm32", not(test)), wasm_bindgen(start))]
pub fn main() {
    console_error_panic_hook::set_once();
    mount_to_body(App);
}
