use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    collections::HashMap,
    io,
    path::PathBuf,
    sync::atomic::{AtomicBool, Ordering},
    time::Duration,
};
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};

/// Terminal timeline demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to <tmp>/chirptui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl, ^D/U, gg/G)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Start in light or dark mode (overrides config)
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Start with an empty timeline instead of the sample posts
    #[arg(long)]
    empty: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for ThemeMode {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => ThemeMode::Light,
            ThemeArg::Dark => ThemeMode::Dark,
        }
    }
}

// Global flag for debug mode
static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

mod app;
mod handlers;
mod ui;
mod utils;

use chirptui::config::{Config, ConfigError, ProfileConfig};
use chirptui::feed::{seed, FeedEvent, FeedStore, PostId};
use chirptui::{logic, model, ThemeMode};

fn log_debug(msg: &str) {
    // Only log if debug mode is enabled
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open(utils::get_debug_log_path())
    {
        let _ = writeln!(
            file,
            "{} {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            msg
        );
    }
}

#[derive(Clone, Debug)]
pub struct ImageMetadata {
    pub dimensions: Option<(u32, u32)>,
    pub format: Option<String>,
    pub file_size: u64,
}

pub enum ImagePreviewState {
    Loading,
    Ready {
        protocol: ratatui_image::protocol::StatefulProtocol,
        metadata: ImageMetadata,
    },
    /// Nothing to show; the placeholder is drawn with this note
    Unavailable { reason: String },
}

impl std::fmt::Debug for ImagePreviewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImagePreviewState::Loading => write!(f, "ImagePreviewState::Loading"),
            ImagePreviewState::Ready { metadata, .. } => f
                .debug_struct("ImagePreviewState::Ready")
                .field("metadata", metadata)
                .field("protocol", &"<StatefulProtocol>")
                .finish(),
            ImagePreviewState::Unavailable { reason } => f
                .debug_struct("ImagePreviewState::Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

pub struct App {
    pub model: model::Model,

    feed: FeedStore,
    feed_rx: UnboundedReceiver<FeedEvent>,
    profile: ProfileConfig,
    assets_dir: Option<PathBuf>,

    image_picker: Option<ratatui_image::picker::Picker>,
    image_update_tx: UnboundedSender<(PostId, ImagePreviewState)>,
    image_update_rx: UnboundedReceiver<(PostId, ImagePreviewState)>,

    /// Attachment previews by post (ImagePreviewState is not Clone, so kept out of Model)
    image_state_map: HashMap<PostId, ImagePreviewState>,
}

impl App {
    fn new(config: Config, start_empty: bool) -> Self {
        let author = config.profile.author();
        let mut feed = if start_empty {
            FeedStore::empty(author)
        } else {
            FeedStore::with_posts(author, seed::sample_posts())
        };
        let feed_rx = feed.subscribe();
        log_debug(&format!("Feed initialized with {} posts", feed.len()));

        let (image_update_tx, image_update_rx) = tokio::sync::mpsc::unbounded_channel();

        let (image_picker, image_font_size) = if config.image_preview_enabled {
            let mut picker = match ratatui_image::picker::Picker::from_query_stdio() {
                Ok(p) => p,
                Err(e) => {
                    log_debug(&format!("Image preview: Failed to detect terminal: {}", e));
                    ratatui_image::picker::Picker::from_fontsize((8, 16))
                }
            };

            let font_size = picker.font_size();
            log_debug(&format!("Image font size: {}x{}", font_size.0, font_size.1));

            match config.image_protocol.to_lowercase().as_str() {
                "auto" => log_debug("Image preview: Auto-detected protocol"),
                "iterm2" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Iterm2)
                }
                "kitty" => picker.set_protocol_type(ratatui_image::picker::ProtocolType::Kitty),
                "sixel" => picker.set_protocol_type(ratatui_image::picker::ProtocolType::Sixel),
                "halfblocks" => {
                    picker.set_protocol_type(ratatui_image::picker::ProtocolType::Halfblocks)
                }
                unknown => log_debug(&format!(
                    "Image preview: Unknown protocol '{}', using auto-detect",
                    unknown
                )),
            }

            (Some(picker), Some(font_size))
        } else {
            log_debug("Image preview disabled in config");
            (None, None)
        };

        let mut model = model::Model::new(config.vim_mode, config.theme);
        model.ui.image_font_size = image_font_size;
        model.navigation.selected = logic::navigation::first_selection(feed.len());

        App {
            model,
            feed,
            feed_rx,
            profile: config.profile,
            assets_dir: config.assets_dir,
            image_picker,
            image_update_tx,
            image_update_rx,
            image_state_map: HashMap::new(),
        }
    }

    /// Handle keyboard input
    /// Delegated to handlers::keyboard module
    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        handlers::handle_key(self, key)
    }

    /// Apply store notifications queued since the last frame
    fn drain_feed_events(&mut self) {
        while let Ok(event) = self.feed_rx.try_recv() {
            log_debug(&format!("Feed event: {:?}", event));
            self.model.apply_feed_event(&event, self.feed.len());
        }
    }

    /// Store background image loads; stale results for closed popups are kept for reuse
    fn drain_image_updates(&mut self) {
        while let Ok((post_id, image_state)) = self.image_update_rx.try_recv() {
            log_debug(&format!("Image state for post {}: {:?}", post_id, image_state));
            self.image_state_map.insert(post_id, image_state);
        }
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `Ok(None)` when no config file exists; defaults are used then.
fn get_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>, ConfigError> {
    // If CLI argument provided, it must exist
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        return Err(ConfigError::NotFound(p));
    }

    // Try ~/.config/chirptui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("chirptui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    // Fallback to ./config.yaml
    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    let mut config = match get_config_path(args.config)? {
        Some(path) => {
            log_debug(&format!("Loading config from: {:?}", path));
            Config::load(&path)?
        }
        None => {
            log_debug("No config file found, using defaults");
            Config::default()
        }
    };

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(theme) = args.theme {
        config.theme = theme.into();
    }

    let mut app = App::new(config, args.empty);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Return result after cleanup
    result
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    loop {
        // Image protocols can leave graphics behind when a popup closes
        if app.model.ui.graphics_cleanup_frames > 0 {
            terminal.clear()?;
            app.model.ui.graphics_cleanup_frames -= 1;
        }

        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        if app.model.ui.should_dismiss_toast() {
            app.model.dismiss_toast();
        }

        if app.model.ui.should_quit {
            log_debug("Quitting");
            break;
        }

        app.drain_feed_events();
        app.drain_image_updates();

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                // Windows reports releases too
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key)?;
                }
            }
        }
    }

    Ok(())
}
