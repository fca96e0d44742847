//! Terminal front end.
//!
//! One device, passed around the table. Each screen renders the current
//! state, waits for the holder's input and hands the matching event to the
//! engine.

use anyhow::{bail, Result};
use clap::Parser;
use colored::*;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;
use dialoguer::{Confirm, Input, Select};
use insider::clock::DiscussionClock;
use insider::core::{GameConfig, GameRng, GameState, Phase, PlayerId, Role, DISCUSSION_SECONDS};
use insider::rules::GameEngine;
use insider::words::{Language, WordBank};
use log::{info, LevelFilter};
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

const BAR_WIDTH: usize = 30;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Seed for a reproducible game
    #[arg(long)]
    seed: Option<u64>,

    /// Word list to play with (english or malayalam)
    #[arg(long, default_value = "english")]
    language: Language,

    /// JSON word bank replacing the built-in lists
    #[arg(long)]
    words: Option<PathBuf>,

    /// Length of the discussion countdown
    #[arg(long, default_value_t = DISCUSSION_SECONDS)]
    discussion_seconds: u32,

    /// Log verbosity on stderr
    #[arg(long, default_value = "warn")]
    log_level: LevelFilter,
}

enum Choice {
    PlayAgain,
    SamePlayers,
    Quit,
}

fn main() -> Result<()> {
    let args = Args::parse();
    log(args.log_level)?;

    let bank = match &args.words {
        Some(path) => WordBank::from_path(path)?,
        None => WordBank::builtin(),
    };
    let rng = args.seed.map(GameRng::new).unwrap_or_else(GameRng::from_entropy);
    info!("session seed {}", rng.seed());
    let config = GameConfig::new()
        .with_language(args.language)
        .with_discussion_seconds(args.discussion_seconds);
    let mut engine = GameEngine::new(config, bank, rng);
    let mut state = GameState::new();

    loop {
        state = match state.phase {
            Phase::Intro => {
                intro()?;
                engine.start(&state)?
            }
            Phase::Setup => {
                let names = roster(engine.config().min_players)?;
                let language = language(state.language)?;
                engine.start_game(&state, &names, language)?
            }
            Phase::Assignment => {
                assignment(&state)?;
                engine.confirm_assignment(&state)?
            }
            Phase::Gameplay => {
                clue(&state)?;
                engine.advance_turn(&state)?
            }
            Phase::Discussion => {
                discussion(engine.config().discussion_seconds)?;
                engine.begin_voting(&state)?
            }
            Phase::Voting => {
                let candidate = ballot(&state)?;
                engine.cast_vote(&state, candidate)?
            }
            Phase::Reveal => {
                reveal(&state)?;
                engine.continue_after_reveal(&state)?
            }
            Phase::GameOver => match game_over(&state)? {
                Choice::PlayAgain => engine.play_again(&state)?,
                Choice::SamePlayers => engine.restart_with_same_players(&state)?,
                Choice::Quit => return Ok(()),
            },
        };
    }
}

/// Terminal logger on stderr, no location/target/thread noise.
fn log(level: LevelFilter) -> Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )?;
    Ok(())
}

fn clear() {
    print!("\x1B[2J\x1B[1;1H");
    let _ = std::io::stdout().flush();
}

fn intro() -> Result<()> {
    clear();
    println!("{}", "INSIDER".bold().magenta());
    println!("Everyone gets the same secret word except one player, who only knows the category.");
    println!("Give clues, talk it over, and vote out the insider before they blend in.\n");
    Confirm::new().with_prompt("Start").default(true).interact()?;
    Ok(())
}

fn roster(min_players: usize) -> Result<Vec<String>> {
    clear();
    println!("{}", "Assemble the crew".bold());
    println!("Enter one name at a time. Leave the name empty when everyone is in.\n");

    let mut names: Vec<String> = Vec::new();
    loop {
        let name: String = Input::new()
            .with_prompt(format!("Player {}", names.len() + 1))
            .allow_empty(true)
            .interact_text()?;
        let name = name.trim().to_string();

        if !name.is_empty() {
            if names.contains(&name) {
                println!("{}", format!("{} is already playing", name).red());
            } else {
                names.push(name);
            }
            continue;
        }
        if names.is_empty() {
            println!("{}", format!("Need at least {} players", min_players).red());
            continue;
        }

        println!("\nCrew: {}", names.join(", ").bold());
        let ready = names.len() >= min_players;
        let mut items = vec!["Add a name", "Remove a name"];
        if ready {
            items.insert(0, "Start game");
        } else {
            let missing = min_players - names.len();
            println!("{}", format!("Need {} more player{}", missing, if missing > 1 { "s" } else { "" }).red());
        }
        let selection = Select::new().items(&items).default(0).interact()?;
        match items[selection] {
            "Start game" => return Ok(names),
            "Remove a name" => {
                let removed = Select::new()
                    .with_prompt("Remove who")
                    .items(&names)
                    .default(names.len() - 1)
                    .interact()?;
                let name = names.remove(removed);
                println!("{}", format!("{} left the crew", name).yellow());
            }
            _ => {}
        }
    }
}

fn language(current: Language) -> Result<Language> {
    let items: Vec<String> = Language::ALL.iter().map(ToString::to_string).collect();
    let default = Language::ALL.iter().position(|&l| l == current).unwrap_or(0);
    let selection = Select::new()
        .with_prompt("Word list")
        .items(&items)
        .default(default)
        .interact()?;
    Ok(Language::ALL[selection])
}

fn assignment(state: &GameState) -> Result<()> {
    let Some(player) = state.current_player() else {
        return Ok(());
    };
    clear();
    println!("Pass the device to {}", player.name.bold());
    Confirm::new()
        .with_prompt(format!("{}, ready to see your word?", player.name))
        .default(true)
        .interact()?;
    println!("\nYour word is {}\n", player.word.bold().cyan());
    Confirm::new().with_prompt("Hide it and pass on").default(true).interact()?;
    clear();
    Ok(())
}

fn clue(state: &GameState) -> Result<()> {
    let Some(player) = state.current_player() else {
        return Ok(());
    };
    clear();
    println!("{}", format!("Clue round {}", state.round_number).bold());
    println!("{}, give a one-word clue.\n", player.name.bold());
    Confirm::new().with_prompt("Done").default(true).interact()?;
    Ok(())
}

/// Run the countdown; Enter or Space ends it early. Expiry goes straight to the vote.
fn discussion(seconds: u32) -> Result<()> {
    clear();
    println!("{}", "Discussion".bold());
    println!("Find the insider. Press Enter to skip to the vote.\n");

    let mut clock = DiscussionClock::new(seconds);
    terminal::enable_raw_mode()?;
    let outcome = clock.run(skip_requested, draw);
    terminal::disable_raw_mode()?;
    outcome?;

    println!("\n{}", "Time to vote.".yellow());
    std::thread::sleep(Duration::from_millis(800));
    Ok(())
}

fn draw(clock: &DiscussionClock) {
    let time = clock.to_string();
    let bar = clock.bar(BAR_WIDTH);
    if clock.is_urgent() {
        print!("\r{} {}   ", time.red().bold(), bar.red());
    } else {
        print!("\r{} {}   ", time.normal(), bar.cyan());
    }
    let _ = std::io::stdout().flush();
}

/// Poll the keyboard for up to `timeout`. Other keys are ignored; Ctrl-C quits.
fn skip_requested(timeout: Duration) -> Result<bool> {
    let deadline = Instant::now() + timeout;
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() || !event::poll(left)? {
            return Ok(false);
        }
        let TermEvent::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => return Ok(true),
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => bail!("interrupted"),
            _ => {}
        }
    }
}

fn ballot(state: &GameState) -> Result<PlayerId> {
    let voter = state.current_player().map(|p| p.name.clone()).unwrap_or_default();
    let candidates = state.candidates();
    clear();
    println!("Pass the device to {}", voter.bold());
    let names: Vec<&str> = candidates.iter().map(|p| p.name.as_str()).collect();
    let selection = Select::new()
        .with_prompt(format!("{}, who is the insider?", voter))
        .items(&names)
        .default(0)
        .interact()?;
    Ok(candidates[selection].id)
}

fn reveal(state: &GameState) -> Result<()> {
    let Some(player) = state.eliminated_player() else {
        return Ok(());
    };
    clear();
    println!("{} was voted out.", player.name.bold());
    match player.role {
        Role::Insider => println!("{}", "They were the INSIDER!".red().bold()),
        Role::Innocent => println!("{}", "They were innocent.".green()),
    }
    println!();
    Confirm::new().with_prompt("Continue").default(true).interact()?;
    Ok(())
}

fn game_over(state: &GameState) -> Result<Choice> {
    clear();
    match state.winner {
        Some(Role::Innocent) => println!("{}", "INNOCENTS WIN".green().bold()),
        Some(Role::Insider) => println!("{}", "INSIDER WINS".red().bold()),
        None => {}
    }
    if let Some(insider) = state.insider() {
        println!("The insider was {}", insider.name.bold());
    }
    if let Some(pair) = &state.word_pair {
        println!("Category: {}   Word: {}\n", pair.general.cyan(), pair.specific.cyan().bold());
    }

    let selection = Select::new()
        .items(&["Same players", "New players", "Quit"])
        .default(0)
        .interact()?;
    Ok(match selection {
        0 => Choice::SamePlayers,
        1 => Choice::PlayAgain,
        _ => Choice::Quit,
    })
}
