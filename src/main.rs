#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release

#[allow(unused_imports)]
use updown_graph::{Cli, run_app, rounds_api};

// --- WASM SPECIFIC CODE ---
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

// Even though we use 'start', the compiler still wants a main() function
// because this file is compiled as a binary.
#[cfg(target_arch = "wasm32")]
fn main() {}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), wasm_bindgen::JsValue> {
    // A. Init Logging
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    log::info!("Up/Down graph starting in WASM mode...");

    let web_options = eframe::WebOptions::default();

    // B. Page-relative API: the widget is served by the round service itself
    let args = Cli {
        api_base: String::new(),
        ..Default::default()
    };
    let api = rounds_api(&args).map_err(|e| JsValue::from_str(&e.to_string()))?;

    // C. Find the canvas element by ID
    let window = web_sys::window().ok_or("no global `window` exists")?;
    let document = window.document().ok_or("should have a document on window")?;
    let canvas = document
        .get_element_by_id("the_canvas_id")
        .ok_or("Failed to find canvas with id 'the_canvas_id'")?
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .map_err(|_| "the_canvas_id was not a valid HtmlCanvasElement")?;

    eframe::WebRunner::new()
        .start(
            canvas,
            web_options,
            Box::new(move |cc| Ok(run_app(cc, api, None))),
        )
        .await
}

// --- NATIVE SPECIFIC CODE ---
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result {
    use clap::Parser;
    use eframe::NativeOptions;
    use tokio::runtime::Runtime;
    use updown_graph::config::GRAPH;
    use updown_graph::ui::config::UI_TEXT;

    // A. Init Logging
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    // B. Parse Args
    let args = Cli::parse();
    #[cfg(debug_assertions)]
    log::info!("Parsed arguments: {:?}", args);

    // C. Runtime for the round service requests; entered for the app's lifetime
    let rt = Runtime::new().expect("Failed to create Tokio runtime");
    let _guard = rt.enter();

    let api = match rounds_api(&args) {
        Ok(api) => api,
        Err(e) => {
            log::error!("Failed to set up round service client: {:#}", e);
            std::process::exit(1);
        }
    };
    log::info!("Using {}", api.signature());

    // D. Run Native App
    let options = NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([960.0, GRAPH.canvas_height + 140.0]),
        ..Default::default()
    };

    let seed = args.seed;
    eframe::run_native(
        UI_TEXT.window_title,
        options,
        Box::new(move |cc| Ok(run_app(cc, api, seed))),
    )
}
