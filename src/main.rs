use doomfire::cli::{self, Parsed};
use doomfire::display::{Display, InputEvent, RenderTarget};
use doomfire::util::FpsCounter;
use doomfire::FireGame;
use sdl2::keyboard::Keycode;

const TITLE: &str = "Doom Fire";

fn main() {
    env_logger::init();

    let opts = match cli::parse_args(std::env::args().skip(1)) {
        Parsed::Run(opts) => opts,
        Parsed::Help => {
            println!("{}", cli::usage());
            return;
        },
    };

    if let Err(e) = run(&opts) {
        log::error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

fn run(opts: &cli::Options) -> Result<(), String> {
    let (mut display, texture_creator) =
        Display::with_options(TITLE, opts.window_size(), opts.vsync)?;

    let (grid_w, grid_h) = opts
        .grid
        .unwrap_or_else(|| opts.grid_for_window(display.width(), display.height()));
    let mut game = FireGame::new(grid_w, grid_h).map_err(|e| e.to_string())?;
    let mut target = RenderTarget::with_size(&texture_creator, grid_w, grid_h)?;

    log::info!(
        "Window {}x{}, fire {}x{} cells, vsync {}",
        display.width(),
        display.height(),
        grid_w,
        grid_h,
        if opts.vsync { "on" } else { "off" }
    );

    // FPS counter with 60 sample rolling average
    let mut fps_counter = FpsCounter::new(60);
    let mut show_fps = false;
    let mut since_report = 0.0;

    'main: loop {
        let (dt, avg_fps) = fps_counter.tick();

        for event in display.poll_events() {
            match event {
                InputEvent::Quit => break 'main,
                InputEvent::KeyDown(Keycode::Escape) => break 'main,
                InputEvent::KeyDown(Keycode::F) => {
                    show_fps = !show_fps;
                    if !show_fps {
                        display.set_title(TITLE)?;
                    }
                },
                InputEvent::KeyDown(_) => {},
                InputEvent::Resized { width, height } => {
                    let (w, h) = opts.grid_for_window(width, height);
                    let before = game.dimensions();
                    match game.layout(w, h) {
                        Ok(dims) if dims != before => {
                            target = RenderTarget::with_size(&texture_creator, dims.0, dims.1)?;
                            log::info!("Resized to {}x{} cells", dims.0, dims.1);
                        },
                        Ok(_) => {},
                        Err(e) => log::warn!("Keeping {}x{} fire: {}", before.0, before.1, e),
                    }
                },
            }
        }

        game.advance(dt);

        since_report += dt;
        if since_report >= 1.0 {
            since_report = 0.0;
            let (min_fps, max_fps) = fps_counter.min_max_fps();
            log::debug!(
                "FPS {:.0} avg  {:.0} min  {:.0} max  {:.1}ms",
                avg_fps,
                min_fps,
                max_fps,
                fps_counter.avg_frame_time_ms()
            );
            if show_fps {
                display.set_title(&format!("{} - {:.0} fps", TITLE, avg_fps))?;
            }
        }

        display.present(&mut target, game.draw())?;
    }

    log::info!("Exiting");
    Ok(())
}
