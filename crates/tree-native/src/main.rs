mod input;
mod render;

use anyhow::Context;
use winit::{
    event::*,
    event_loop::EventLoop,
    keyboard::{Key, NamedKey},
    window::WindowBuilder,
};

use input::{nearest_index_by_uvx, photo_screen_xs, PointerHand};
use render::GpuState;
use tree_core::{FrameClock, Mode, Scene, SceneConfig};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = SceneConfig::default();
    let mut scene = Scene::build(&config).context("invalid scene configuration")?;

    let event_loop = EventLoop::new().context("creating event loop")?;
    let window = WindowBuilder::new()
        .with_title("Gesture Tree (native)")
        .build(&event_loop)
        .context("creating window")?;

    let mut gpu = pollster::block_on(GpuState::new(&window, scene.instance_count()))?;
    let mut hand = PointerHand::default();
    let mut clock = FrameClock::new();
    log::info!("[keys] C = chaos, F = formed, Space = enlarge photo, hold mouse = open hand");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::Resized(size) => gpu.resize(size),
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::CursorMoved { position, .. } => {
                hand.set_cursor(position.x, gpu.width());
            }
            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => hand.open = state == ElementState::Pressed,
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => match logical_key {
                Key::Named(NamedKey::Escape) => elwt.exit(),
                Key::Named(NamedKey::Space) => {
                    let xs = photo_screen_xs(&scene, gpu.camera.view_proj());
                    if let Some(i) = nearest_index_by_uvx(&xs, hand.uv_x) {
                        scene.photos.toggle_enlarged(i);
                    }
                }
                Key::Character(c) => match c.as_str() {
                    "c" | "C" => scene.force_mode(Mode::Chaos),
                    "f" | "F" => scene.force_mode(Mode::Formed),
                    _ => {}
                },
                _ => {}
            },
            _ => {}
        },
        Event::AboutToWait => {
            let dt = clock.tick();
            scene.pump_gesture(&mut hand, clock.elapsed_sec());
            scene.tick(dt);
            match gpu.render(&scene) {
                Ok(_) => gpu.window.request_redraw(),
                Err(wgpu::SurfaceError::Lost) => gpu.resize(gpu.window.inner_size()),
                Err(wgpu::SurfaceError::OutOfMemory) => {
                    log::error!("render error: out of GPU memory");
                    elwt.exit();
                }
                Err(e) => log::warn!("render error: {:?}", e),
            }
        }
        _ => {}
    })?;
    Ok(())
}
