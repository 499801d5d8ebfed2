use cfg_if::cfg_if;
pub mod components;
pub mod routes;

// wasm-bindgen needs the entry point in the lib target.
cfg_if! {
    if #[cfg(feature = "hydrate")] {
        use leptos::mount::hydrate_body;
        use wasm_bindgen::prelude::wasm_bindgen;
        use tracing_web::MakeWebConsoleWriter;
        use tracing_subscriber::prelude::*;
        use crate::routes::app::App;

        #[wasm_bindgen]
        pub fn hydrate() {
            let fmt_layer = tracing_subscriber::fmt::layer()
                .with_ansi(false) // Only partially supported across browsers
                .without_time()   // std::time is not available in browsers
                .with_writer(MakeWebConsoleWriter::new());

            tracing_subscriber::registry()
                .with(fmt_layer)
                .init();
            hydrate_body(App);
        }
    }
}
