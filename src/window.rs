use sdl2::event::Event;
use sdl2::keyboard::{Keycode, Scancode};
use sdl2::pixels::PixelFormatEnum;
use sdl2::rect::Rect;

pub const WINDOW_WIDTH: u32 = 800;
pub const WINDOW_HEIGHT: u32 = 600;
pub const FPS: u64 = 60;
pub const FRAME_TARGET_TIME: f64 = 1000.0 / FPS as f64;

/// Keys the demo reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    G,
    Up,
    Down,
    Left,
    Right,
    W,
    S,
    A,
    D,
    R,
    F,
}

impl Key {
    const ALL: [Key; 16] = [
        Key::Num1,
        Key::Num2,
        Key::Num3,
        Key::Num4,
        Key::Num5,
        Key::G,
        Key::Up,
        Key::Down,
        Key::Left,
        Key::Right,
        Key::W,
        Key::S,
        Key::A,
        Key::D,
        Key::R,
        Key::F,
    ];

    fn from_keycode(keycode: Keycode) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.keycode() == keycode)
    }

    fn keycode(self) -> Keycode {
        match self {
            Key::Num1 => Keycode::Num1,
            Key::Num2 => Keycode::Num2,
            Key::Num3 => Keycode::Num3,
            Key::Num4 => Keycode::Num4,
            Key::Num5 => Keycode::Num5,
            Key::G => Keycode::G,
            Key::Up => Keycode::Up,
            Key::Down => Keycode::Down,
            Key::Left => Keycode::Left,
            Key::Right => Keycode::Right,
            Key::W => Keycode::W,
            Key::S => Keycode::S,
            Key::A => Keycode::A,
            Key::D => Keycode::D,
            Key::R => Keycode::R,
            Key::F => Keycode::F,
        }
    }

    fn scancode(self) -> Option<Scancode> {
        Scancode::from_keycode(self.keycode())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowEvent {
    Quit,
    Resize(u32, u32),
    /// Initial press only; auto-repeat is filtered out.
    KeyDown(Key),
}

/// Snapshot of the keys held down this frame, for continuous movement.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputState {
    held: [bool; Key::ALL.len()],
}

impl InputState {
    pub fn is_down(&self, key: Key) -> bool {
        Key::ALL
            .iter()
            .position(|&k| k == key)
            .is_some_and(|i| self.held[i])
    }

    /// +1 when only `positive` is held, -1 when only `negative` is.
    pub fn axis(&self, negative: Key, positive: Key) -> f32 {
        match (self.is_down(negative), self.is_down(positive)) {
            (false, true) => 1.0,
            (true, false) => -1.0,
            _ => 0.0,
        }
    }
}

pub struct FrameLimiter {
    previous_frame_time: u64,
}

impl FrameLimiter {
    pub fn new(window: &Window) -> Self {
        Self {
            previous_frame_time: window.timer().ticks64(),
        }
    }

    /// Waits if necessary to maintain frame rate and returns the delta time in milliseconds.
    /// Delta time represents the time elapsed since the last call to this method.
    pub fn wait_and_get_delta(&mut self, window: &Window) -> u64 {
        let mut current_time = window.timer().ticks64();
        let mut delta_time = current_time.saturating_sub(self.previous_frame_time);

        if delta_time < FRAME_TARGET_TIME as u64 {
            let time_to_wait = (FRAME_TARGET_TIME as u64) - delta_time;
            std::thread::sleep(std::time::Duration::from_millis(time_to_wait));
            current_time = window.timer().ticks64();
            delta_time = current_time.saturating_sub(self.previous_frame_time);
        }

        self.previous_frame_time = current_time;
        delta_time
    }
}

pub struct Window {
    canvas: sdl2::render::Canvas<sdl2::video::Window>,
    // Declared before texture_creator so it is dropped first.
    texture: sdl2::render::Texture<'static>,
    texture_creator: Box<sdl2::render::TextureCreator<sdl2::video::WindowContext>>,
    event_pump: sdl2::EventPump,
    timer_subsystem: sdl2::TimerSubsystem,
    width: u32,
    height: u32,
}

impl Window {
    pub fn new(title: &str, width: u32, height: u32) -> Result<Self, String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;
        let timer_subsystem = sdl_context.timer()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let canvas = window.into_canvas().build().map_err(|e| e.to_string())?;
        let texture_creator = Box::new(canvas.texture_creator());
        let event_pump = sdl_context.event_pump()?;

        // SAFETY: texture_creator is heap-allocated and lives as long as Window.
        // texture is dropped before texture_creator by struct field order.
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(texture_creator.as_ref() as *const _) };
        let texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;

        log::info!("opened {width}x{height} window");

        Ok(Self {
            canvas,
            texture,
            texture_creator,
            event_pump,
            timer_subsystem,
            width,
            height,
        })
    }

    /// Drains the SDL event queue. Escape maps to [`WindowEvent::Quit`].
    pub fn poll_events(&mut self) -> Vec<WindowEvent> {
        let mut events = Vec::new();
        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. }
                | Event::KeyDown {
                    keycode: Some(Keycode::Escape),
                    ..
                } => events.push(WindowEvent::Quit),
                Event::Window {
                    win_event: sdl2::event::WindowEvent::Resized(w, h),
                    ..
                } => events.push(WindowEvent::Resize(w.max(1) as u32, h.max(1) as u32)),
                Event::KeyDown {
                    keycode: Some(keycode),
                    repeat: false,
                    ..
                } => {
                    if let Some(key) = Key::from_keycode(keycode) {
                        events.push(WindowEvent::KeyDown(key));
                    }
                }
                _ => {}
            }
        }
        events
    }

    pub fn input_state(&self) -> InputState {
        let keyboard = self.event_pump.keyboard_state();
        let mut state = InputState::default();
        for (held, key) in state.held.iter_mut().zip(Key::ALL) {
            *held = key
                .scancode()
                .is_some_and(|scancode| keyboard.is_scancode_pressed(scancode));
        }
        state
    }

    /// Uploads a packed ARGB8888 frame and shows it.
    pub fn present(&mut self, buffer: &[u8]) -> Result<(), String> {
        self.texture
            .update(None, buffer, (self.width * 4) as usize)
            .map_err(|e| e.to_string())?;

        self.canvas.clear();
        self.canvas
            .copy(&self.texture, None, Some(Rect::new(0, 0, self.width, self.height)))?;
        self.canvas.present();
        Ok(())
    }

    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), String> {
        self.width = width;
        self.height = height;
        // SAFETY: Same as in new() - texture_creator outlives texture
        let texture_creator_ref: &'static sdl2::render::TextureCreator<sdl2::video::WindowContext> =
            unsafe { &*(self.texture_creator.as_ref() as *const _) };
        self.texture = texture_creator_ref
            .create_texture_streaming(PixelFormatEnum::ARGB8888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn timer(&self) -> &sdl2::TimerSubsystem {
        &self.timer_subsystem
    }
}
