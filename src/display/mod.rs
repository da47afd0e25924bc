//! SDL2 window presenter
//!
//! Owns the window and blits a finished `Bitmap` to it once per frame.
//! The bitmap is only borrowed for the duration of `present`.

use sdl2::event::{Event, WindowEvent};
use sdl2::keyboard::Keycode;
use sdl2::pixels::PixelFormatEnum;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::video::{Window, WindowContext};
use sdl2::EventPump;
use softraster::Bitmap;

pub struct Display {
    canvas: Canvas<Window>,
    event_pump: EventPump,
}

pub struct RenderTarget<'a> {
    texture: Texture<'a>,
    width: u32,
    height: u32,
}

#[derive(Debug, Clone)]
pub enum InputEvent {
    Quit,
    KeyDown(Keycode),
    Resized { width: u32, height: u32 },
}

impl Display {
    /// Create a resizable window
    /// vsync=true: locked to monitor refresh (typically 60fps)
    /// vsync=false: uncapped framerate for performance testing
    pub fn with_options(
        title: &str,
        width: u32,
        height: u32,
        vsync: bool,
    ) -> Result<(Self, TextureCreator<WindowContext>), String> {
        let sdl_context = sdl2::init()?;
        let video_subsystem = sdl_context.video()?;

        let window = video_subsystem
            .window(title, width, height)
            .position_centered()
            .resizable()
            .build()
            .map_err(|e| e.to_string())?;

        let mut canvas_builder = window.into_canvas().accelerated();
        if vsync {
            canvas_builder = canvas_builder.present_vsync();
        }
        let canvas = canvas_builder.build().map_err(|e| e.to_string())?;

        let texture_creator = canvas.texture_creator();
        let event_pump = sdl_context.event_pump()?;

        Ok((Self { canvas, event_pump }, texture_creator))
    }

    /// Upload the bitmap and stretch it over the whole window
    pub fn present(&mut self, target: &mut RenderTarget, bitmap: &Bitmap) -> Result<(), String> {
        if bitmap.width() != target.width || bitmap.height() != target.height {
            return Err(format!(
                "bitmap is {}x{} but render target is {}x{}",
                bitmap.width(),
                bitmap.height(),
                target.width,
                target.height
            ));
        }

        target
            .texture
            .update(None, bitmap.as_bytes(), bitmap.pitch())
            .map_err(|e| e.to_string())?;

        self.canvas.copy(&target.texture, None, None)?;
        self.canvas.present();
        Ok(())
    }

    pub fn poll_events(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        for event in self.event_pump.poll_iter() {
            match event {
                Event::Quit { .. } => events.push(InputEvent::Quit),
                Event::KeyDown {
                    keycode: Some(k), ..
                } => events.push(InputEvent::KeyDown(k)),
                Event::Window {
                    win_event: WindowEvent::SizeChanged(w, h),
                    ..
                } if w > 0 && h > 0 => events.push(InputEvent::Resized {
                    width: w as u32,
                    height: h as u32,
                }),
                _ => {},
            }
        }

        events
    }
}

impl<'a> RenderTarget<'a> {
    /// Streaming texture in native BGRX order, matching `Bitmap::as_bytes`
    pub fn with_size(
        texture_creator: &'a TextureCreator<WindowContext>,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = texture_creator
            .create_texture_streaming(PixelFormatEnum::RGB888, width, height)
            .map_err(|e| e.to_string())?;
        Ok(Self {
            texture,
            width,
            height,
        })
    }
}
