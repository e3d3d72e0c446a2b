//! yb: CLI for scoring Yatzy hands and totalling scorecards.
//!
//! Subcommands:
//! - score
//! - card
//! - categories

mod card_io;
mod hand;

use std::env;
use std::path::PathBuf;
use std::process;

use serde::Serialize;
use yb_core::{
    grand_total, lower_section_total, score_hand, scores_for_dice, upper_section_bonus,
    upper_section_total, Category, Section, CATEGORY_INFO,
};

/// One row of `yb score` output.
#[derive(Serialize)]
struct ScoreRow {
    category: &'static str,
    name: &'static str,
    score: i32,
}

/// Totals for `yb card` output.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct CardTotals {
    upper_total: i32,
    upper_bonus: i32,
    lower_total: i32,
    total: i32,
}

fn cmd_score(args: &[String]) {
    let mut dice_arg: Option<String> = None;
    let mut category_arg: Option<String> = None;
    let mut json = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yb score

USAGE:
    yb score --dice A,B,C,D,E [--category NAME] [--json]

OPTIONS:
    --dice A,B,C,D,E    The hand to score: five die values in 1..=6
    --category NAME     Score a single category (wire name, e.g. threeOfAKind)
    --json              Emit JSON instead of a table
"#
                );
                return;
            }
            "--dice" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --dice");
                    process::exit(1);
                }
                dice_arg = Some(args[i + 1].clone());
                i += 2;
            }
            "--category" => {
                if i + 1 >= args.len() {
                    eprintln!("Missing value for --category");
                    process::exit(1);
                }
                category_arg = Some(args[i + 1].clone());
                i += 2;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown option for `yb score`: {}", other);
                eprintln!("Run `yb score --help` for usage.");
                process::exit(1);
            }
        }
    }

    let dice_arg = match dice_arg {
        Some(d) => d,
        None => {
            eprintln!("Missing required option --dice");
            process::exit(1);
        }
    };
    let dice = hand::parse_hand(&dice_arg).unwrap_or_else(|e| {
        eprintln!("Invalid --dice value: {}", e);
        process::exit(1);
    });

    if let Some(cat_str) = category_arg {
        let cat: Category = cat_str.parse().unwrap_or_else(|e| {
            eprintln!("{}", e);
            process::exit(1);
        });
        let score = score_hand(cat, dice);
        if json {
            let row = ScoreRow {
                category: cat.id(),
                name: cat.display_name(),
                score,
            };
            println!("{}", serde_json::to_string(&row).unwrap());
        } else {
            println!("{}: {}", cat.display_name(), score);
        }
        return;
    }

    let table = scores_for_dice(dice);
    if json {
        let rows: Vec<ScoreRow> = Category::ALL
            .iter()
            .map(|&cat| ScoreRow {
                category: cat.id(),
                name: cat.display_name(),
                score: table[cat.index()],
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows).unwrap());
    } else {
        for cat in Category::ALL {
            println!("{:<16} {:>3}", cat.display_name(), table[cat.index()]);
        }
    }
}

fn cmd_card(args: &[String]) {
    let mut path: Option<PathBuf> = None;
    let mut json = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yb card

USAGE:
    yb card PATH [--json]

ARGS:
    PATH    YAML scorecard snapshot (map of category wire name to score)

OPTIONS:
    --json    Emit JSON instead of a table
"#
                );
                return;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            other => {
                if other.starts_with('-') || path.is_some() {
                    eprintln!("Unknown option for `yb card`: {}", other);
                    eprintln!("Run `yb card --help` for usage.");
                    process::exit(1);
                }
                path = Some(PathBuf::from(other));
                i += 1;
            }
        }
    }

    let path = match path {
        Some(p) => p,
        None => {
            eprintln!("Missing scorecard PATH");
            process::exit(1);
        }
    };
    let card = card_io::load_card(&path).unwrap_or_else(|e| {
        eprintln!("Failed to load {}: {}", path.display(), e);
        process::exit(1);
    });

    let totals = CardTotals {
        upper_total: upper_section_total(&card),
        upper_bonus: upper_section_bonus(&card),
        lower_total: lower_section_total(&card),
        total: grand_total(&card),
    };

    if json {
        println!("{}", serde_json::to_string(&totals).unwrap());
    } else {
        println!("Upper section  {:>4}", totals.upper_total);
        println!("Upper bonus    {:>4}", totals.upper_bonus);
        println!("Lower section  {:>4}", totals.lower_total);
        println!("Total          {:>4}", totals.total);
    }
}

fn cmd_categories(args: &[String]) {
    let mut json = false;

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                println!(
                    r#"yb categories

USAGE:
    yb categories [--json]

OPTIONS:
    --json    Emit the metadata table as JSON
"#
                );
                return;
            }
            "--json" => {
                json = true;
                i += 1;
            }
            other => {
                eprintln!("Unknown option for `yb categories`: {}", other);
                eprintln!("Run `yb categories --help` for usage.");
                process::exit(1);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&CATEGORY_INFO).unwrap());
    } else {
        for info in &CATEGORY_INFO {
            let section = match info.section {
                Section::Upper => "Upper",
                Section::Lower => "Lower",
            };
            println!("{:<16} {:<6} {}", info.name, section, info.description);
        }
    }
}

fn print_usage() {
    println!(
        r#"yb: score Yatzy hands and total scorecards

USAGE:
    yb <SUBCOMMAND>

SUBCOMMANDS:
    score         Score a 5-dice hand (one category or all 13)
    card          Total a scorecard snapshot (sections, bonus, grand total)
    categories    Print the category metadata table
"#
    );
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("score") => cmd_score(&args[1..]),
        Some("card") => cmd_card(&args[1..]),
        Some("categories") => cmd_categories(&args[1..]),
        Some("--help") | Some("-h") | None => print_usage(),
        Some(other) => {
            eprintln!("Unknown subcommand: {}", other);
            eprintln!("Run `yb --help` for usage.");
            process::exit(1);
        }
    }
}
