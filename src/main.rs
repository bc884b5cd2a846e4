//! Easeplot - A terminal visualizer for animation easing curves.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use crossterm::{
    event::{
        self, DisableFocusChange, EnableFocusChange, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use easeplot::{
    app::{App, Mode},
    config::Config,
    curve::Curve,
    driver::SamplingDriver,
    graph::{AxisRange, GraphSurface},
    ui,
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "easeplot")]
#[command(about = "Visualize animation easing curves in the terminal", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Curve selected at startup
    #[arg(long, short, default_value = "accelerate-decelerate", value_parser = parse_curve)]
    curve: Curve,

    /// Start in graph mode instead of show mode
    #[arg(long)]
    graph: bool,

    /// Enable logging to specified file
    #[arg(long, global = true)]
    log: Option<PathBuf>,

    /// Milliseconds between two sampling batches
    #[arg(long, global = true)]
    interval_ms: Option<u64>,

    /// Sampling steps per batch
    #[arg(long, global = true)]
    batch: Option<usize>,

    /// Vertical plot range as MIN,MAX, symmetric about zero (e.g. -2,2)
    #[arg(long, global = true, allow_hyphen_values = true, value_parser = parse_y_range)]
    y_range: Option<AxisRange>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the available curve names
    List,
    /// Sample a curve without a terminal UI and print the raster as text
    Plot {
        /// Curve to plot
        #[arg(long, short, value_parser = parse_curve)]
        curve: Curve,

        /// Raster width in pixels
        #[arg(long, default_value_t = 60)]
        width: usize,

        /// Raster height in pixels
        #[arg(long, default_value_t = 30)]
        height: usize,
    },
}

fn parse_curve(s: &str) -> std::result::Result<Curve, String> {
    s.parse::<Curve>().map_err(|e| e.to_string())
}

fn parse_y_range(s: &str) -> std::result::Result<AxisRange, String> {
    let (min, max) = s
        .split_once(',')
        .ok_or_else(|| format!("expected MIN,MAX, got '{}'", s))?;
    let min: f32 = min.trim().parse().map_err(|e| format!("bad MIN: {}", e))?;
    let max: f32 = max.trim().parse().map_err(|e| format!("bad MAX: {}", e))?;
    AxisRange::symmetric(min, max).map_err(|e| e.to_string())
}

impl Args {
    fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(ms) = self.interval_ms {
            config.sampler.tick_interval = Duration::from_millis(ms);
        }
        if let Some(batch) = self.batch {
            config.sampler.batch_size = batch;
        }
        if let Some(range) = self.y_range {
            config.graph.domain = range;
        }
        config
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Set up logging if --log option is provided
    if let Some(log_path) = &args.log {
        let file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(log_path)
            .with_context(|| format!("Failed to open log file {}", log_path.display()))?;
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        let subscriber = FmtSubscriber::builder()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
        tracing::info!("Starting Easeplot");
    }

    let config = args.config();
    match args.command {
        Some(Command::List) => {
            for curve in Curve::ALL {
                println!("{}", curve);
            }
        },
        Some(Command::Plot {
            curve,
            width,
            height,
        }) => plot(&config, curve, width, height)?,
        None => {
            let mode = if args.graph { Mode::Graph } else { Mode::Show };
            run_tui(App::new(config, mode, args.curve))?;
        },
    }

    tracing::info!("Easeplot exited");
    Ok(())
}

/// Sample a curve into an off-screen raster and print it.
fn plot(config: &Config, curve: Curve, width: usize, height: usize) -> Result<()> {
    let mut surface = GraphSurface::with_config(width, height, &config.graph)?;
    let mut driver = SamplingDriver::new(&config.sampler);
    driver.start(curve, &mut surface)?;
    let plotted = driver.run_to_completion(&mut surface);
    tracing::info!(curve = curve.name(), plotted, "Headless plot complete");
    print!("{}", surface.raster());
    Ok(())
}

fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableFocusChange)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableFocusChange, LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }
    Ok(())
}

fn sync_graph_size<B: ratatui::backend::Backend>(
    terminal: &Terminal<B>,
    app: &mut App,
    now: Instant,
) -> Result<()> {
    let size = terminal.size()?;
    let layout = ui::ScreenLayout::new(Rect::new(0, 0, size.width, size.height));
    let (width, height) = layout.graph_pixels();
    app.set_graph_size(width, height, now);
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    let now = Instant::now();
    sync_graph_size(terminal, &mut app, now)?;
    app.update(now);
    let mut redraw = true;

    loop {
        if redraw {
            terminal.draw(|f| ui::draw(f, &app, Instant::now()))?;
            redraw = false;
        }

        if event::poll(app.poll_timeout(Instant::now()))? {
            let now = Instant::now();
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key(&mut app, key.modifiers, key.code, now);
                    redraw = true;
                },
                Event::Resize(_, _) => {
                    sync_graph_size(terminal, &mut app, now)?;
                    redraw = true;
                },
                Event::FocusLost => {
                    app.pause();
                    redraw = true;
                },
                Event::FocusGained => {
                    app.resume(now);
                    redraw = true;
                },
                _ => {},
            }
        }

        if app.should_quit {
            return Ok(());
        }

        redraw |= app.on_tick(Instant::now());
    }
}

fn handle_key(app: &mut App, modifiers: KeyModifiers, code: KeyCode, now: Instant) {
    match (modifiers, code) {
        (KeyModifiers::NONE, KeyCode::Char('q'))
        | (KeyModifiers::NONE, KeyCode::Esc)
        | (KeyModifiers::CONTROL, KeyCode::Char('c')) => app.quit(),

        (KeyModifiers::NONE, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => {
            app.next_curve(now);
        },
        (KeyModifiers::NONE, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => {
            app.prev_curve(now);
        },

        (KeyModifiers::NONE, KeyCode::Tab) | (KeyModifiers::NONE, KeyCode::Char('m')) => {
            app.toggle_mode(now);
        },
        (KeyModifiers::NONE, KeyCode::Char('s')) => app.set_mode(Mode::Show, now),
        (KeyModifiers::NONE, KeyCode::Char('g')) => app.set_mode(Mode::Graph, now),

        (KeyModifiers::NONE, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('r')) => {
            app.replay(now);
        },

        (KeyModifiers::NONE, KeyCode::Char('y')) => app.copy_samples(),
        (KeyModifiers::SHIFT, KeyCode::Char('T')) => app.cycle_theme(),
        (KeyModifiers::SHIFT, KeyCode::Char('?')) => {
            app.status =
                "Help: j/k=curve, Tab=mode, r=replay, y=copy samples, T=theme, q=quit".to_string();
        },

        _ => {},
    }
}
