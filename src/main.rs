use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use chrono::Local;
use marketmaker::{Game, SaveManager, TRADE_LOT};

enum Event {
    Command(String),
    Tick,
}

const TICK_RATE: Duration = Duration::from_secs(2);

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let save_dir = save_dir()?;
    let saves = SaveManager::new(&save_dir);
    let had_save = saves.exists();
    let mut game = Game::new(saves);
    if had_save {
        game.load_game();
        println!("resumed saved game from {}", save_dir.display());
    }

    let result = run(&mut game);
    game.save();
    result
}

fn save_dir() -> Result<PathBuf> {
    let dir = dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("marketmaker");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

fn run(game: &mut Game) -> Result<()> {
    let (tx, rx) = mpsc::channel();

    let input_tx = tx.clone();
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if input_tx.send(Event::Command(line)).is_err() {
                break;
            }
        }
    });

    thread::spawn(move || {
        loop {
            if tx.send(Event::Tick).is_err() {
                break;
            }
            thread::sleep(TICK_RATE);
        }
    });

    println!("commands: buy, sell, port, tech, upgrade <id>, news, save, new, quit");
    loop {
        match rx.recv()? {
            Event::Tick => {
                game.tick();
                report_tick(game);
            }
            Event::Command(line) => {
                if !handle_command(game, line.trim()) {
                    break;
                }
            }
        }
    }

    Ok(())
}

fn report_tick(game: &Game) {
    let state = game.state();
    if let Some(close) = state.last_close() {
        println!(
            "[{}] candle #{} close {:.3} (growth {:.2})",
            Local::now().format("%H:%M:%S"),
            state.historical_candle_count,
            close,
            state.current_growth_rate
        );
    }
    // News that fired this tick carries the pre-increment candle count.
    for item in state
        .news_feed
        .iter()
        .filter(|item| item.timestamp + 1 == state.historical_candle_count)
    {
        println!("  NEWS: {}", item.headline);
    }
}

fn handle_command(game: &mut Game, line: &str) -> bool {
    let mut parts = line.split_whitespace();
    match parts.next() {
        Some("buy") => {
            if game.buy() {
                println!("bought {} coins", TRADE_LOT);
            } else {
                println!("not enough cash");
            }
        }
        Some("sell") => {
            if game.sell() {
                println!("sold {} coins", TRADE_LOT);
            } else {
                println!("not enough coins");
            }
        }
        Some("port") => {
            let state = game.state();
            let price = state.last_close().unwrap_or(0.0);
            println!(
                "cash {:.2} | coins {} | holdings value {:.2}",
                state.player_portfolio.cash,
                state.player_portfolio.coins,
                state.player_portfolio.coins as f64 * price
            );
        }
        Some("tech") => {
            let mut upgrades: Vec<_> = game.upgrade_catalog().collect();
            upgrades.sort_by(|a, b| a.id.cmp(b.id));
            for upgrade in upgrades {
                let owned = game.state().purchased_upgrade_ids.contains(upgrade.id);
                println!(
                    "[{}] {:<24} {:>12.0}  {}",
                    if owned { "x" } else { " " },
                    upgrade.id,
                    upgrade.cost,
                    upgrade.name
                );
            }
        }
        Some("upgrade") => match parts.next() {
            Some(id) => {
                if game.purchase_upgrade(id) {
                    println!("purchased {id}");
                } else {
                    println!("cannot purchase {id}");
                }
            }
            None => println!("usage: upgrade <id>"),
        },
        Some("news") => {
            for item in game.state().news_feed.iter().take(10) {
                println!("#{:<6} {}", item.timestamp, item.headline);
            }
        }
        Some("save") => {
            game.save();
            println!("saved");
        }
        Some("new") => {
            game.new_game();
            println!("started a new game");
        }
        Some("quit") | Some("exit") | Some("q") => return false,
        Some(other) => println!("unknown command: {other}"),
        None => {}
    }
    true
}
