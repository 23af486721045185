//! Showdown Evaluation Binary
//!
//! Scores one or more hands under a chosen poker variant and marks
//! the winners of each half of the pot.
//!
//! ```text
//! eval AcAs Kh4d --board 5c8s9h
//! eval --game l 7c5c4c3c2c
//! eval --game kansas-city-lowball 7c5c4c3c2c
//! ```

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use rbp_cardset::cards::Hand;
use rbp_cardset::games::Game;
use rbp_cardset::games::Split;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// h holdem, o omaha/8, O omaha, r razz, s stud, e stud/8,
    /// q stud hi/lo unqualified, d draw, l lowball A-5, k kansas city 2-7,
    /// t triple draw 2-7, T triple draw A-5, b badugi, 3 three-card poker
    #[arg(short, long, default_value = "h")]
    game: String,
    /// community cards shared by every hand
    #[arg(short, long, default_value = "")]
    board: String,
    /// log lookup table construction
    #[arg(short, long)]
    verbose: bool,
    /// pocket cards, one argument per player
    #[arg(required = true)]
    hands: Vec<String>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    rbp_cardset::log(match args.verbose {
        true => log::LevelFilter::Debug,
        false => log::LevelFilter::Info,
    });
    let game = args
        .game
        .parse::<Game>()
        .map_err(anyhow::Error::msg)
        .context("parsing --game")?;
    let board = args
        .board
        .parse::<Hand>()
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("parsing board {:?}", args.board))?;
    let splits = args
        .hands
        .iter()
        .map(|hand| -> anyhow::Result<Split> {
            let pocket = hand
                .parse::<Hand>()
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("parsing hand {:?}", hand))?;
            game.check(&pocket, &board)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("evaluating hand {:?}", hand))?;
            Ok(game.evaluate(pocket, board))
        })
        .collect::<anyhow::Result<Vec<Split>>>()?;
    log::debug!("{:<32}{:<32}", "evaluated hands", splits.len());
    let best_high = splits.iter().filter_map(|s| s.high).max();
    let best_low = splits.iter().filter_map(|s| s.low).max();
    for (hand, split) in args.hands.iter().zip(splits.iter()) {
        let wins = (split.high.is_some() && split.high == best_high)
            || (split.low.is_some() && split.low == best_low);
        let line = format!("{:>10}: {}", hand, split);
        match wins {
            true => println!("{}", line.green().bold()),
            false => println!("{}", line),
        }
    }
    Ok(())
}
