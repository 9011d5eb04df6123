use crate::app::App;
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Color, Print, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use maze_core::{Cell, Position};
use std::io;

/// Each maze cell is drawn two terminal columns wide so it reads roughly
/// square.
const CELL_WIDTH: u16 = 2;

pub fn render(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;

    execute!(stdout, Hide, Clear(ClearType::All))?;

    let grid = app.session.grid();
    let grid_width = grid.cols() as u16 * CELL_WIDTH;
    let grid_height = grid.rows() as u16;

    // Center the grid, leaving room for the info panel on the right.
    let total_width = grid_width + 22;
    let start_x = term_width.saturating_sub(total_width) / 2;
    let start_y = term_height.saturating_sub(grid_height + 4) / 2;

    render_grid(stdout, app, start_x, start_y)?;
    render_info_panel(stdout, app, start_x + grid_width + 3, start_y)?;
    render_controls(stdout, app, start_x, start_y + grid_height + 2)?;

    if app.transitioning() {
        render_win_banner(stdout, app, start_x, start_y, grid_width, grid_height)?;
    } else if let Some(ref msg) = app.message {
        render_message(stdout, app, msg, start_x, start_y + grid_height + 1)?;
    }

    execute!(stdout, Show)?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let grid = app.session.grid();
    let player = app.session.player();

    for row in 0..grid.rows() {
        execute!(stdout, MoveTo(x, y + row as u16))?;
        for col in 0..grid.cols() {
            let pos = Position::new(row, col);
            let bg = match grid.get(pos) {
                Some(Cell::Wall) => theme.wall,
                Some(Cell::Start) => theme.start,
                Some(Cell::Goal) => theme.goal,
                _ => theme.floor,
            };
            if pos == player {
                execute!(
                    stdout,
                    SetBackgroundColor(bg),
                    SetForegroundColor(theme.player),
                    Print("()")
                )?;
            } else {
                execute!(stdout, SetBackgroundColor(bg), Print("  "))?;
            }
        }
        execute!(stdout, SetBackgroundColor(theme.bg))?;
    }
    Ok(())
}

fn render_info_panel(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let session = &app.session;

    execute!(
        stdout,
        SetBackgroundColor(theme.bg),
        MoveTo(x, y),
        SetForegroundColor(theme.fg),
        Print(format!("Level: {}", session.level())),
        MoveTo(x, y + 1),
        SetForegroundColor(theme.info),
        Print(format!("Difficulty: {}", session.difficulty())),
        MoveTo(x, y + 3),
        SetForegroundColor(theme.info),
        Print("Reach the red cell")
    )?;
    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App, x: u16, y: u16) -> io::Result<()> {
    let theme = &app.theme;
    let bindings: [(&str, &str); 4] = [
        ("arrows/hjkl", "move"),
        ("n", "new maze"),
        ("t", "theme"),
        ("q", "quit"),
    ];

    execute!(stdout, SetBackgroundColor(theme.bg), MoveTo(x, y))?;
    for (key, action) in bindings {
        execute!(
            stdout,
            SetForegroundColor(theme.key),
            Print(key),
            SetForegroundColor(theme.info),
            Print(format!(" {action}  "))
        )?;
    }
    Ok(())
}

fn render_win_banner(
    stdout: &mut io::Stdout,
    app: &App,
    grid_x: u16,
    grid_y: u16,
    grid_width: u16,
    grid_height: u16,
) -> io::Result<()> {
    let theme = &app.theme;
    let banner = " You win! ";
    let x = grid_x + grid_width.saturating_sub(banner.len() as u16) / 2;
    let y = grid_y + grid_height / 2;

    execute!(
        stdout,
        MoveTo(x, y),
        SetBackgroundColor(Color::Black),
        SetForegroundColor(theme.success),
        Print(banner),
        SetBackgroundColor(theme.bg),
        MoveTo(grid_x, grid_y + grid_height + 1),
        SetForegroundColor(theme.info),
        Print(format!("Level {} incoming...", app.session.level() + 1))
    )?;
    Ok(())
}

fn render_message(
    stdout: &mut io::Stdout,
    app: &App,
    msg: &str,
    x: u16,
    y: u16,
) -> io::Result<()> {
    execute!(
        stdout,
        SetBackgroundColor(app.theme.bg),
        MoveTo(x, y),
        SetForegroundColor(app.theme.info),
        Print(msg)
    )?;
    Ok(())
}
