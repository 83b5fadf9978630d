use anyhow::Result;
use clap::Parser;
use square_dash::{Cell, GameRng, MoveOutcome, Phase, RulesEngine, Session, ViewModel};
use std::io::{self, BufRead, Write};
use std::time::{SystemTime, UNIX_EPOCH};

#[derive(Parser, Debug)]
#[command(author, version, about = "Square Dash: reach the exit before the walls crush you", long_about = None)]
struct Args {
    /// Session seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Let the computer play this many moves instead of reading input
    #[arg(long)]
    autoplay: Option<u32>,
}

fn glyph(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => "▢ ",
        Cell::Wall => "▣ ",
        Cell::Obstacle => "🟥",
        Cell::Pulse => "🟧",
        Cell::Exit => "🟩",
        Cell::Player => "🟦",
    }
}

fn print_view(view: &ViewModel) {
    println!();
    println!("Turn: {} | Lives: {}", view.turn, view.lives);
    if view.pulses_active {
        println!("WARNING: Obstacles are pulsing!");
    }
    if view.arena_shrinking {
        println!("The arena is shrinking!");
    }
    for row in view.cells() {
        let line: String = row.into_iter().map(glyph).collect();
        println!("{}", line);
    }
    if !view.message.is_empty() {
        println!("{}", view.message);
    }
}

fn print_rules() {
    println!("Square Dash");
    println!("===========");
    println!("🟦 = player, 🟥 = obstacle, 🟧 = pulse, 🟩 = exit, ▢ = empty, ▣ = wall");
    println!("Type \"move N\", \"move S\", \"move E\", or \"move W\" to move.");
    println!("You slide 2 tiles in that direction. Obstacles pulse on even turns.");
    println!("The arena shrinks every 5 turns. Crashing costs a life and resets the level.");
    println!("Type 'start' to begin, 'quit' to exit.");
}

fn autoplay(session: &mut Session, moves: u32, seed: u64) {
    // Session games fork from `seed`; the picker stays off those streams.
    let mut picker = GameRng::new(!seed);
    session.start();
    print_view(&session.view());

    for _ in 0..moves {
        let Some(game) = session.game() else { break };
        if game.phase.is_terminal() {
            break;
        }

        let safe = session.engine().safe_directions(game);
        let options = if safe.is_empty() {
            session.engine().legal_directions(game)
        } else {
            safe
        };
        let Some(&direction) = picker.choose(&options) else { break };

        println!("\n> move {}", direction);
        let outcome = session.press(direction);
        if let MoveOutcome::Crashed { cause, .. } | MoveOutcome::Eliminated { cause } = outcome {
            println!("Hit the {}.", cause);
        }
        print_view(&session.view());
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let seed = match args.seed {
        Some(seed) => seed,
        None => SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs(),
    };
    log::info!("session seed {}", seed);

    let mut session = Session::new(seed);

    if let Some(moves) = args.autoplay {
        autoplay(&mut session, moves, seed);
        return Ok(());
    }

    print_rules();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        let prompt = match session.phase() {
            Phase::NotStarted => "start> ",
            Phase::Playing => "move> ",
            Phase::GameOver | Phase::Victory => "play again? (start/quit)> ",
        };
        print!("{}", prompt);
        io::stdout().flush()?;

        let Some(line) = lines.next() else { break };
        let line = line?;
        let input = line.trim();

        match input.to_lowercase().as_str() {
            "quit" | "exit" => {
                println!("Thanks for playing!");
                break;
            }
            "start" if session.can_start() => {
                session.start();
            }
            _ if session.phase() == Phase::Playing => {
                session.submit(input);
            }
            _ => {
                println!("Type 'start' to play or 'quit' to exit.");
                continue;
            }
        }

        print_view(&session.view());
    }

    Ok(())
}
