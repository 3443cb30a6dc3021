use std::sync::Arc;

use drift_core::{input_channel, FrameDriver, FrameSink, InputSender, MotionConfig, Viewport};
use drift_render::GpuState;
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

// Browsers report roughly this many pixels per wheel notch
const PIXELS_PER_WHEEL_LINE: f32 = 100.0;

/// Convert a winit wheel delta into browser-style pixels, positive = scroll down.
fn wheel_delta_px(delta: MouseScrollDelta) -> f32 {
    match delta {
        MouseScrollDelta::LineDelta(_, y) => -y * PIXELS_PER_WHEEL_LINE,
        MouseScrollDelta::PixelDelta(pos) => -(pos.y as f32),
    }
}

fn forward_window_event(input: &InputSender, event: &WindowEvent) {
    match event {
        WindowEvent::Resized(size) => input.resized(size.width, size.height),
        WindowEvent::CursorMoved { position, .. } => {
            input.pointer_moved(position.x as f32, position.y as f32)
        }
        WindowEvent::MouseWheel { delta, .. } => input.wheel(wheel_delta_px(*delta)),
        _ => {}
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = Arc::new(
        WindowBuilder::new()
            .with_title("drift (native)")
            .build(&event_loop)?,
    );
    let size = window.inner_size();

    let (input, inbox) = input_channel();
    let mut driver = FrameDriver::new(
        MotionConfig::default(),
        Viewport::new(size.width, size.height),
        inbox,
    )?;

    let instance = wgpu::Instance::default();
    let surface = instance.create_surface(Arc::clone(&window))?;
    let mut gpu = pollster::block_on(GpuState::new(&instance, surface, size.width, size.height))?;
    log::info!("drift-native started at {}x{}", size.width, size.height);

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent {
            event: WindowEvent::CloseRequested,
            ..
        } => elwt.exit(),
        Event::WindowEvent { event, .. } => forward_window_event(&input, &event),
        Event::AboutToWait => {
            let snapshot = driver.tick();
            match gpu.present(&snapshot) {
                Ok(_) => window.request_redraw(),
                Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => gpu.reconfigure(),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("GPU out of memory; exiting");
                    elwt.exit()
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
