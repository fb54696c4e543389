use std::io::{self, BufRead};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;

use anyhow::Context;
use chrono::Datelike;
use insightful_core::{update, AppState, Msg};
use insightful_logging::engine_info;

use super::config::{config_path, load_config};
use super::effects::EffectRunner;
use super::input::{parse_command, Command, HELP};
use super::ui::constants::TICK_INTERVAL;
use super::ui::render::render;

pub fn run_app() -> anyhow::Result<()> {
    let path = config_path();
    let config = load_config(&path).with_context(|| format!("loading config {path:?}"))?;
    insightful_logging::initialize(
        config.log_destination,
        config.level_filter(),
        &config.log_file,
    );
    engine_info!("Starting with settings {:?}", config.settings);

    let (inbox_tx, inbox_rx) = mpsc::channel::<Command>();
    let runner = EffectRunner::new(config.engine.clone(), inbox_tx.clone())
        .context("starting engine")?;

    // Terminal input runs on its own thread so engine events keep flowing.
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if let Some(command) = parse_command(&line) {
                if inbox_tx.send(command).is_err() {
                    break;
                }
            }
        }
        let _ = inbox_tx.send(Command::Quit);
    });

    let year = chrono::Utc::now().year();
    let mut state = dispatch(AppState::with_settings(config.settings), Msg::PageLoaded, &runner);
    println!("{HELP}\n");

    loop {
        match inbox_rx.recv_timeout(TICK_INTERVAL) {
            Ok(Command::Msg(msg)) => state = dispatch(state, msg, &runner),
            Ok(Command::Help) => println!("{HELP}"),
            Ok(Command::Unknown(line)) => println!("Unknown command: {line} (try `help`)"),
            Ok(Command::Quit) | Err(RecvTimeoutError::Disconnected) => break,
            Err(RecvTimeoutError::Timeout) => state = dispatch(state, Msg::Tick, &runner),
        }

        for msg in runner.poll_events() {
            state = dispatch(state, msg, &runner);
        }

        if state.consume_dirty() {
            println!("{}", render(&state.view(), year));
        }
    }

    engine_info!("Shutting down");
    Ok(())
}

fn dispatch(state: AppState, msg: Msg, runner: &EffectRunner) -> AppState {
    let (next, effects) = update(state, msg);
    runner.enqueue(effects);
    next
}
