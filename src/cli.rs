//! Command line options

/// Window pixels per fire cell
pub const DEFAULT_SCALE: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// Fire grid size in cells; derived from the desktop when absent
    pub grid: Option<(u32, u32)>,
    pub scale: u32,
    pub vsync: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            grid: None,
            scale: DEFAULT_SCALE,
            vsync: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Parsed {
    Run(Options),
    Help,
}

impl Options {
    /// Window size in pixels for the requested grid, if any
    pub fn window_size(&self) -> Option<(u32, u32)> {
        self.grid
            .map(|(w, h)| (w.saturating_mul(self.scale), h.saturating_mul(self.scale)))
    }

    /// Grid that fills a window of the given size
    pub fn grid_for_window(&self, width: u32, height: u32) -> (u32, u32) {
        ((width / self.scale).max(1), (height / self.scale).max(1))
    }
}

/// Parse arguments (without the program name)
///
/// Unknown flags and malformed values are skipped with a warning, leaving
/// the default in place.
pub fn parse_args<I, S>(args: I) -> Parsed
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let args: Vec<S> = args.into_iter().collect();
    let mut opts = Options::default();
    let mut width = None;
    let mut height = None;

    let mut i = 0;
    while i < args.len() {
        let arg: &str = args[i].as_ref();
        // A following flag is never taken as this flag's value
        let value: Option<&str> = args
            .get(i + 1)
            .map(|s| s.as_ref())
            .filter(|v: &&str| !v.starts_with('-'));
        if value.is_some() && takes_value(arg) {
            i += 1;
        }
        match arg {
            "--no-vsync" => opts.vsync = false,
            "--width" | "-w" => width = positive_value(arg, value).or(width),
            "--height" | "-h" => height = positive_value(arg, value).or(height),
            "--resolution" | "-r" => {
                // WxH format (e.g., 320x200)
                if let Some((w, h)) = value.and_then(parse_resolution) {
                    width = Some(w);
                    height = Some(h);
                } else {
                    log::warn!("Ignoring malformed resolution {:?} for {}", value, arg);
                }
            },
            "--scale" | "-s" => opts.scale = positive_value(arg, value).unwrap_or(opts.scale),
            "--help" => return Parsed::Help,
            other => log::warn!("Ignoring unknown argument {:?}", other),
        }
        i += 1;
    }

    opts.grid = match (width, height) {
        (Some(w), Some(h)) => Some((w, h)),
        (Some(w), None) => Some((w, (w / 8).saturating_mul(5).max(1))),
        (None, Some(h)) => Some(((h / 5).saturating_mul(8).max(1), h)),
        (None, None) => None,
    };
    Parsed::Run(opts)
}

fn takes_value(flag: &str) -> bool {
    matches!(
        flag,
        "--width" | "-w" | "--height" | "-h" | "--resolution" | "-r" | "--scale" | "-s"
    )
}

fn positive_value(flag: &str, value: Option<&str>) -> Option<u32> {
    let parsed = value.and_then(parse_positive);
    if parsed.is_none() {
        log::warn!("Ignoring {} {:?}: expected a positive integer", flag, value);
    }
    parsed
}

fn parse_positive(s: &str) -> Option<u32> {
    s.parse::<u32>().ok().filter(|&v| v > 0)
}

fn parse_resolution(s: &str) -> Option<(u32, u32)> {
    let (w, h) = s.split_once('x')?;
    Some((parse_positive(w)?, parse_positive(h)?))
}

pub fn usage() -> String {
    format!(
        "Usage: doomfire [OPTIONS]

Options:
  --width W, -w W           Fire width in cells (default: half the desktop)
  --height H, -h H          Fire height in cells
  --resolution WxH, -r WxH  Fire size in cells (e.g., 320x200)
  --scale N, -s N           Window pixels per cell (default: {})
  --no-vsync                Disable VSync for uncapped framerate
  --help                    Show this help message

Keys: F toggles the FPS readout, Escape quits.
Set RUST_LOG=debug for more output.",
        DEFAULT_SCALE
    )
}
