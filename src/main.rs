mod demos;
mod display;
mod util;

use std::path::Path;

use display::{Display, InputEvent, RenderTarget};
use log::{debug, info, warn};
use sdl2::keyboard::Keycode;
use softraster::config::DEFAULT_CONFIG_PATH;
use softraster::{Bitmap, Config, Renderer};
use util::FrameClock;

/// Command line overrides applied on top of the config file
#[derive(Debug, Default)]
struct Args {
    config_path: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
    no_vsync: bool,
}

fn print_help() {
    println!("Usage: softraster-demo [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --config PATH             Load settings from PATH (default: {})", DEFAULT_CONFIG_PATH);
    println!("  --width W, -w W           Set window width");
    println!("  --height H, -h H          Set window height");
    println!("  --resolution WxH, -r WxH  Set resolution (e.g., 1280x720)");
    println!("  --no-vsync                Disable VSync for uncapped framerate");
    println!("  --help                    Show this help message");
    println!();
    println!("Controls:");
    println!("  1-3     - Select demo");
    println!("  F       - Toggle FPS logging");
    println!("  Escape  - Quit");
}

/// Parse command line arguments
fn parse_args() -> Args {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = Args::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--no-vsync" => parsed.no_vsync = true,
            "--config" => {
                if i + 1 < args.len() {
                    parsed.config_path = Some(args[i + 1].clone());
                    i += 1;
                }
            },
            "--width" | "-w" => {
                if i + 1 < args.len() {
                    if let Ok(w) = args[i + 1].parse::<u32>() {
                        parsed.width = Some(w);
                    }
                    i += 1;
                }
            },
            "--height" | "-h" => {
                if i + 1 < args.len() {
                    if let Ok(h) = args[i + 1].parse::<u32>() {
                        parsed.height = Some(h);
                    }
                    i += 1;
                }
            },
            "--resolution" | "-r" => {
                if i + 1 < args.len() {
                    // Parse WxH format (e.g., 1920x1080)
                    let parts: Vec<&str> = args[i + 1].split('x').collect();
                    if parts.len() == 2 {
                        if let (Ok(w), Ok(h)) = (parts[0].parse::<u32>(), parts[1].parse::<u32>()) {
                            parsed.width = Some(w);
                            parsed.height = Some(h);
                        }
                    }
                    i += 1;
                }
            },
            "--help" => {
                print_help();
                std::process::exit(0);
            },
            other => warn!("Ignoring unknown argument '{}'", other),
        }
        i += 1;
    }

    parsed
}

/// Load the config file (explicit path or the default one) and apply overrides
fn load_config(args: &Args) -> Config {
    let path = args.config_path.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);
    let mut config = if args.config_path.is_some() || Path::new(path).exists() {
        match Config::load(path) {
            Ok(config) => {
                info!("Loaded config from {}", path);
                config
            },
            Err(e) => {
                warn!("Failed to load {}: {}; using defaults", path, e);
                Config::default()
            },
        }
    } else {
        info!("No {} found; using defaults", path);
        Config::default()
    };

    if let Some(w) = args.width {
        config.width = w;
    }
    if let Some(h) = args.height {
        config.height = h;
    }
    if args.no_vsync {
        config.vsync = false;
    }
    config
}

fn main() -> Result<(), String> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let args = parse_args();
    let config = load_config(&args);

    let (mut display, texture_creator) =
        Display::with_options(&config.title, config.width, config.height, config.vsync)?;
    let mut target = RenderTarget::with_size(&texture_creator, config.width, config.height)?;
    let mut bitmap = Bitmap::with_size(config.width, config.height);
    let mut renderer = Renderer::new();

    // Rolling 60 frame window for the FPS report
    let mut clock = FrameClock::new(60);
    let mut log_fps = false;

    let mut demos = demos::all();
    let mut current = config.demo.min(demos.len() - 1);

    info!("Resolution: {}x{}", config.width, config.height);
    info!("VSync: {}", if config.vsync { "ON" } else { "OFF" });
    info!("Demo: {}", demos[current].name());

    'main: loop {
        let dt = clock.tick();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit | InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::F) => log_fps = !log_fps,
                InputEvent::KeyDown(key) => {
                    let selected = match key {
                        Keycode::Num1 => Some(0),
                        Keycode::Num2 => Some(1),
                        Keycode::Num3 => Some(2),
                        _ => None,
                    };
                    if let Some(idx) = selected.filter(|&idx| idx < demos.len()) {
                        current = idx;
                        info!("Demo: {}", demos[current].name());
                    }
                },
                InputEvent::Resized { width, height } => {
                    // Contents are discarded; the frame below redraws everything
                    debug!("Window resized to {}x{}", width, height);
                    bitmap.resize(width, height);
                    target = RenderTarget::with_size(&texture_creator, width, height)?;
                },
            }
        }

        let demo = &mut demos[current];
        demo.update(dt, bitmap.width(), bitmap.height());

        renderer.clear_screen(config.clear_color);
        demo.draw(&mut renderer);
        renderer.render(&mut bitmap);

        display.present(&mut target, &bitmap)?;

        if let Some(stats) = clock.report().filter(|_| log_fps) {
            info!(
                "FPS {} avg  {} min  {} max  {}ms",
                stats.avg_fps as u32,
                stats.min_fps as u32,
                stats.max_fps as u32,
                stats.avg_frame_ms as u32
            );
        }
    }

    Ok(())
}
