use std::error::Error;
use std::path::PathBuf;

use rastrum::colors;
use rastrum::config::EngineConfig;
use rastrum::render::RenderTarget;
use rastrum::window::{FrameLimiter, Key, Window, WindowEvent};
use rastrum::{Engine, Mesh, Texture};

const MESH_DISTANCE: f32 = 5.0;
const GRID_SPACING: u32 = 50;
/// Radians per second.
const ROTATE_SPEED: f32 = 1.5;
/// World units per second.
const MOVE_SPEED: f32 = 4.0;

#[derive(Debug, Default)]
struct Args {
    model: Option<PathBuf>,
    texture: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = std::env::args().skip(1);

    while let Some(arg) = iter.next() {
        if arg == "--config" {
            let path = iter.next().ok_or("--config needs a file argument")?;
            args.config = Some(path.into());
        } else if args.model.is_none() {
            args.model = Some(arg.into());
        } else if args.texture.is_none() {
            args.texture = Some(arg.into());
        } else {
            return Err(format!("unexpected argument: {arg}"));
        }
    }
    Ok(args)
}

fn handle_key(key: Key, engine: &mut Engine) {
    let mode = engine.draw_mode_mut();
    match key {
        Key::Num1 => mode.toggle_vertex_points(),
        Key::Num2 => mode.toggle_wireframe(),
        Key::Num3 => mode.toggle_solid(),
        Key::Num4 => mode.toggle_backface_cull(),
        Key::Num5 => mode.toggle_textured(),
        Key::G => {
            let spacing = if engine.grid_spacing() == 0 { GRID_SPACING } else { 0 };
            engine.set_grid_spacing(spacing);
        }
        _ => return,
    }
    log::debug!("draw mode: {:?}", engine.draw_mode());
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = parse_args()?;
    let config = match &args.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };

    let mut mesh = match &args.model {
        Some(path) => Mesh::from_obj(path)?,
        None => Mesh::cube(),
    };
    mesh.transform.set_position_xyz(0.0, 0.0, MESH_DISTANCE);

    let texture = match &args.texture {
        Some(path) => Texture::from_file(path)?,
        None => Texture::checkerboard(64, 8, colors::WHITE, colors::GRID),
    };

    let mut engine = Engine::new(&config)?;
    let mut window = Window::new("rastrum", config.width, config.height)?;
    let mut target = RenderTarget::new(config.width, config.height);
    let mut limiter = FrameLimiter::new(&window);

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(width, height) => {
                    window.resize(width, height)?;
                    target.resize(width, height);
                    engine.resize(width, height);
                }
                WindowEvent::KeyDown(key) => handle_key(key, &mut engine),
            }
        }

        let dt = limiter.wait_and_get_delta(&window) as f32 / 1000.0;
        let input = window.input_state();

        mesh.transform
            .rotate_x(input.axis(Key::Down, Key::Up) * ROTATE_SPEED * dt)
            .rotate_y(input.axis(Key::Right, Key::Left) * ROTATE_SPEED * dt);

        let camera = engine.camera_mut();
        camera.move_forward(input.axis(Key::S, Key::W) * MOVE_SPEED * dt);
        camera.rotate_yaw(input.axis(Key::A, Key::D) * ROTATE_SPEED * dt);
        camera.rotate_pitch(input.axis(Key::R, Key::F) * ROTATE_SPEED * dt);

        let mut framebuffer = target.as_framebuffer();
        if let Err(e) = engine.render_frame(&mesh, Some(&texture), &mut framebuffer) {
            log::error!("frame aborted: {e}");
            return Err(e.into());
        }

        window.present(target.as_bytes())?;
    }

    Ok(())
}
