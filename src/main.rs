// hanoitty: Tower of Hanoi solution replayed in the terminal

use std::io;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use hanoitty::config::Config;
use hanoitty::puzzle::{Peg, Tower, solver};
use hanoitty::ui::App;
use hanoitty::ui::app::{TARGET_PEG, restore_then};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::parse();
    log::info!("starting with {:?}", config);

    // Record the full solution up front; the UI replays it one move per tick
    let mut tower = Tower::new(config.discs)?;
    solver::solve(&mut tower, Peg::A, TARGET_PEG, Peg::B)?;
    log::info!("recorded {} moves", tower.pending_len());

    if config.headless {
        for (i, mv) in tower.drain_moves().enumerate() {
            println!("{:>4}. {}", i + 1, mv);
        }
        print!("{}", tower);
        return Ok(());
    }

    let mut app = App::new(tower, config.interval())?;

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal before any error leaves main
    let res = restore_then(res, || -> io::Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()
    });
    log::info!("replayed {} of {} moves", app.replay.replayed(), app.total_moves);

    res?;
    Ok(())
}
