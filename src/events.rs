use crate::dom;
use drift_core::InputSender;
use glam::Vec2;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Pixels per line/page when the browser reports wheel deltas in those units
const WHEEL_LINE_PX: f64 = 100.0;

/// Pointer position in the canvas backing store's pixel space.
#[inline]
pub fn pointer_canvas_px(ev: &web::MouseEvent, canvas: &web::HtmlCanvasElement) -> Vec2 {
    let rect = canvas.get_bounding_client_rect();
    let x_css = ev.client_x() as f32 - rect.left() as f32;
    let y_css = ev.client_y() as f32 - rect.top() as f32;
    let w = rect.width() as f32;
    let h = rect.height() as f32;
    if w > 0.0 && h > 0.0 {
        let sx = (x_css / w) * canvas.width() as f32;
        let sy = (y_css / h) * canvas.height() as f32;
        Vec2::new(sx, sy)
    } else {
        Vec2::ZERO
    }
}

/// Wheel delta normalized to pixels, positive = scroll down.
#[inline]
pub fn wheel_delta_px(ev: &web::WheelEvent, canvas: &web::HtmlCanvasElement) -> f32 {
    let dy = ev.delta_y();
    let px = match ev.delta_mode() {
        web::WheelEvent::DOM_DELTA_LINE => dy * WHEEL_LINE_PX,
        web::WheelEvent::DOM_DELTA_PAGE => dy * canvas.height() as f64,
        _ => dy,
    };
    px as f32
}

pub fn wire_input_handlers(canvas: &web::HtmlCanvasElement, input: InputSender) {
    wire_wheel(canvas, input.clone());
    wire_pointermove(canvas, input.clone());
    wire_resize(canvas, input);
}

fn wire_wheel(canvas: &web::HtmlCanvasElement, input: InputSender) {
    let canvas_for_wheel = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::WheelEvent| {
        input.wheel(wheel_delta_px(&ev, &canvas_for_wheel));
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("wheel", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_pointermove(canvas: &web::HtmlCanvasElement, input: InputSender) {
    let canvas_for_move = canvas.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::PointerEvent| {
        let pos = pointer_canvas_px(&ev, &canvas_for_move);
        input.pointer_moved(pos.x, pos.y);
    }) as Box<dyn FnMut(_)>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("pointermove", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}

fn wire_resize(canvas: &web::HtmlCanvasElement, input: InputSender) {
    let canvas_resize = canvas.clone();
    let closure = Closure::wrap(Box::new(move || {
        dom::sync_canvas_backing_size(&canvas_resize);
        input.resized(canvas_resize.width(), canvas_resize.height());
    }) as Box<dyn FnMut()>);
    if let Some(wnd) = web::window() {
        _ = wnd.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    }
    closure.forget();
}
