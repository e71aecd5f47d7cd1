//! Costume party signup board - browser frontend
//!
//! Fetches the signup sheet from `/data` and renders it into the host
//! page's table.

pub mod api;
#[cfg(target_arch = "wasm32")]
pub mod dom;
pub mod error;
pub mod render;

pub use api::SignupRow;
pub use error::{BoardError, Result};

/// Fetch the signup sheet and redraw the table
///
/// Failures are reported to the browser console; the table keeps whatever
/// content it had before the failing step.
#[cfg(target_arch = "wasm32")]
pub async fn refresh() {
    if let Err(e) = fetch_and_render().await {
        web_sys::console::error_1(&format!("Error fetching data: {e}").into());
    }
}

#[cfg(target_arch = "wasm32")]
async fn fetch_and_render() -> Result<()> {
    let rows = api::fetch_rows().await?;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| BoardError::Dom("no document in this environment".to_string()))?;
    let tbody = dom::target_element(&document)?;

    dom::render_rows(&document, &tbody, &rows)
}

/// Entry point: renders once the page's structural content is ready
#[cfg(target_arch = "wasm32")]
pub fn boot() {
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::spawn_local;

    console_error_panic_hook::set_once();

    let document = web_sys::window()
        .and_then(|w| w.document())
        .expect("could not access document");

    // A wasm module loaded as a deferred script may start after
    // DOMContentLoaded already fired; only listen while still loading.
    if document.ready_state() == "loading" {
        let once = Closure::once(move |_: web_sys::Event| spawn_local(refresh()));
        document
            .add_event_listener_with_callback("DOMContentLoaded", once.as_ref().unchecked_ref())
            .expect("could not attach DOMContentLoaded listener");
        once.forget();
    } else {
        spawn_local(refresh());
    }
}
