#![cfg(target_arch = "wasm32")]
use drift_core::{input_channel, FrameDriver, MotionConfig, Viewport};
use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

mod dom;
mod events;
mod frame;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("drift-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    // wasm start can re-enter on hot reload; only wire one loop
    static STARTED: AtomicBool = AtomicBool::new(false);
    if STARTED.swap(true, Ordering::SeqCst) {
        log::warn!("[init] already started; ignoring");
        return Ok(());
    }

    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    let canvas_el = document
        .get_element_by_id("app-canvas")
        .ok_or_else(|| anyhow::anyhow!("missing #app-canvas"))?;
    let canvas: web::HtmlCanvasElement = canvas_el
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!(format!("{:?}", e)))?;

    // Maintain canvas internal pixel size to match CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&canvas);
    let viewport = Viewport::new(canvas.width(), canvas.height());

    let (input, inbox) = input_channel();
    let driver = FrameDriver::new(MotionConfig::default(), viewport, inbox)?;
    events::wire_input_handlers(&canvas, input);

    // Avoid grabbing a 2D context here to allow WebGPU to acquire the canvas
    let gpu = frame::init_gpu(&canvas).await;
    if gpu.is_none() {
        log::warn!("[init] running without a renderer");
    }
    log::info!("[init] {}x{} canvas ready", viewport.width, viewport.height);

    frame::start_loop(frame::FrameContext { driver, gpu });
    Ok(())
}
