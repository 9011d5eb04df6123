mod app;
mod render;
mod theme;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use maze_core::{GeneratorConfig, Session};
use std::io::{self, Write};
use std::time::{Duration, Instant};
use theme::ThemeKind;

/// Navigate procedurally generated mazes; every win makes the next one
/// harder.
#[derive(Parser)]
#[command(name = "maze")]
struct Args {
    /// Grid height in cells, border included
    #[arg(long, default_value_t = 7)]
    rows: usize,
    /// Grid width in cells, border included
    #[arg(long, default_value_t = 7)]
    cols: usize,
    /// Starting obstacle difficulty
    #[arg(long, default_value_t = 5)]
    difficulty: u32,
    /// RNG seed for reproducible mazes
    #[arg(long)]
    seed: Option<u64>,
    /// Color theme
    #[arg(long, value_enum, default_value_t = ThemeKind::Dark)]
    theme: ThemeKind,
}

fn main() -> io::Result<()> {
    let args = Args::parse();

    let config = GeneratorConfig {
        rows: args.rows,
        cols: args.cols,
        difficulty: args.difficulty,
        ..GeneratorConfig::default()
    };
    let session = match args.seed {
        Some(seed) => Session::with_seed(config, seed),
        None => Session::new(config),
    };
    let session = match session {
        Ok(session) => session,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };
    let mut app = App::new(session, args.theme);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    // Run the app
    let result = run_app(&mut stdout, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(stdout, LeaveAlternateScreen)?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
    }

    Ok(())
}

fn run_app(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let tick_rate = Duration::from_millis(50);
    let mut last_tick = Instant::now();

    loop {
        // Render
        render::render(stdout, app)?;
        stdout.flush()?;

        // Handle input with timeout for timer updates
        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                // Handle Ctrl+C
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                    break;
                }

                match app.handle_key(key).map_err(io::Error::other)? {
                    app::AppAction::Continue => {}
                    app::AppAction::Quit => break,
                }
            }
        }

        // Tick the win-transition and message timers
        if last_tick.elapsed() >= tick_rate {
            app.tick().map_err(io::Error::other)?;
            last_tick = Instant::now();
        }
    }

    Ok(())
}
