//! Display functions for command results

use super::formatters::{colored_guess, colored_percentage, create_progress_bar};
use crate::commands::{SimulationResult, SolveResult};
use colored::Colorize;

/// Print the result of solving a word
pub fn print_solve_result(result: &SolveResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        result.target.to_uppercase().bright_yellow().bold()
    );
    if !result.in_corpus {
        println!("{}", "(not in the word list)".bright_black());
    }
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in result.guesses.iter().enumerate() {
        let turn = i + 1;
        println!(
            "\nTurn {}: {}  {}",
            turn,
            colored_guess(&step.word, step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            if step.candidates_after > 0 {
                let reduction = step.candidates_before as f64 / step.candidates_after as f64;
                println!("  Reduction:  {reduction:.1}x");
            }
        }
    }

    println!();
    if result.success {
        println!(
            "{}",
            format!("✅ Solved in {} guesses!", result.guesses.len())
                .green()
                .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Failed to solve in {} guesses", result.guesses.len())
                .red()
                .bold()
        );
    }
}

/// Print the aggregate of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    let report = &result.report;

    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "SIMULATION:".bright_cyan().bold(),
        result.label.bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Results:".bright_cyan().bold());
    println!("   Games played:     {}", report.games);
    println!(
        "   Games won:        {} {}",
        report.won,
        format!("({})", colored_percentage(report.win_rate()))
    );
    println!("   Games lost:       {}", report.lost);
    match report.average_turns_to_win() {
        Some(average) => println!(
            "   Avg turns (won):  {}",
            format!("{average:.2}").bright_yellow().bold()
        ),
        None => println!("   Avg turns (won):  {}", "n/a".bright_black()),
    }
    println!("   Turn budget:      {}", result.config.max_turns);
    if result.config.boards > 1 {
        println!("   Boards:           {}", result.config.boards);
    }
    println!("   Seed:             {}", result.seed);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if report.won == 0 {
        return;
    }

    println!("\n📈 {}", "Turns to win:".bright_cyan().bold());
    let max_count = report.distribution.values().copied().max().unwrap_or(1);
    for (&turns, &count) in &report.distribution {
        let pct = count as f64 / report.won as f64 * 100.0;
        let bar = create_progress_bar(count as f64, max_count as f64, 40);
        println!("   {turns:2}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
