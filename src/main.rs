//! Interactive terminal client. All game logic lives in the library;
//! this binary only relays requests and prints events.

/// Connect the stars. Claim the sky.
#[derive(Parser, Debug)]
#[command(name = "constellation", version, about)]
struct Args {
    /// stars on the board (presets: 15 quick, 25 medium, 35 long)
    #[arg(long, default_value_t = 25)]
    stars: usize,
    /// machine opponent difficulty; omit for a local two-player game
    #[arg(long, value_enum)]
    difficulty: Option<Tier>,
    /// seed for a reproducible session
    #[arg(long)]
    seed: Option<u64>,
    /// board width in units
    #[arg(long, default_value_t = 800.0)]
    width: f64,
    /// board height in units
    #[arg(long, default_value_t = 600.0)]
    height: f64,
    /// dump the final board as json
    #[arg(long)]
    json: bool,
}

/// prints every engine event to the terminal
struct Printer;

impl Observer for Printer {
    fn notify(&mut self, event: &Event) {
        match event {
            Event::PhaseChanged(phase) => println!("{}", format!("== {phase} ==").white()),
            Event::SegmentAdded(segment) => {
                println!("{} draws {}", paint(segment.owner), segment)
            }
            Event::TrianglesClaimed(triangles, owner) => {
                for triangle in triangles {
                    println!("{} {} {}", paint(*owner), "claims".bold(), triangle);
                }
            }
            Event::ScoresChanged(scores) => {
                println!("   {} {}", scores[0].to_string().blue(), scores[1].to_string().magenta())
            }
            Event::MoveRejected(a, b) => {
                println!("{}", format!("segment *{a}--*{b} rejected").red())
            }
            Event::GameOver(scores) => {
                println!("{}", format!("GAME OVER  {} - {}", scores[0], scores[1]).green())
            }
        }
    }
}

fn paint(player: Player) -> colored::ColoredString {
    match player {
        Player::One => player.to_string().blue(),
        Player::Two => player.to_string().magenta(),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    constellation::log();
    let opponent = match args.difficulty {
        Some(tier) => Opponent::Bot(tier),
        None => Opponent::Human,
    };
    let mut engine = Engine::new(args.seed);
    engine.observe(Box::new(Printer));
    engine.request_start(args.stars, args.width, args.height, opponent);
    loop {
        if engine.machine_turn() {
            // pacing so the machine appears to think
            std::thread::sleep(std::time::Duration::from_millis(300));
            engine.step();
            continue;
        }
        match engine.game().phase() {
            Phase::Rolling => {
                let player = engine.game().current();
                let pick = Select::new()
                    .with_prompt(format!("{} to roll", paint(player)))
                    .items(&["Roll the dice", "Quit to menu"])
                    .default(0)
                    .interact()?;
                match pick {
                    0 => {
                        if let Some(value) = engine.request_roll() {
                            println!("   rolled {value}");
                        }
                    }
                    _ => {
                        engine.request_reset();
                        break;
                    }
                }
            }
            Phase::Playing => {
                let moves = engine.game().legal_moves();
                let labels = moves
                    .iter()
                    .map(|(a, b)| format!("*{a} -- *{b}"))
                    .collect::<Vec<String>>();
                let player = engine.game().current();
                let left = engine.game().moves_left();
                let pick = Select::new()
                    .with_prompt(format!("{} to draw, {left} left", paint(player)))
                    .items(labels.as_slice())
                    .default(0)
                    .max_length(12)
                    .interact()?;
                let (a, b) = moves[pick];
                engine.request_move(a, b);
            }
            _ => break,
        }
    }
    if engine.game().phase() == Phase::GameOver {
        let scores = engine.game().scores();
        match engine.game().leader() {
            Some(winner) => println!(
                "{} wins {} - {}",
                paint(winner),
                scores[0],
                scores[1]
            ),
            None => println!("a draw, {} - {}", scores[0], scores[1]),
        }
        if args.json {
            println!("{}", serde_json::to_string_pretty(engine.game())?);
        }
    }
    Ok(())
}

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use constellation::gameplay::Engine;
use constellation::gameplay::Event;
use constellation::gameplay::Observer;
use constellation::gameplay::Phase;
use constellation::gameplay::Player;
use constellation::players::Opponent;
use constellation::players::Tier;
use dialoguer::Select;
