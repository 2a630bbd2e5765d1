use dioxus_logger::tracing::info;
use dioxus_logger::tracing::Level;

fn main() {
    // surface rust panics in the browser console
    #[cfg(target_arch = "wasm32")]
    console_error_panic_hook::set_once();

    dioxus_logger::init(Level::INFO).expect("failed to init logger");
    info!("launching editor toolbar (web)");
    dioxus::launch(ui::App);
}
