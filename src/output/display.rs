//! Display functions for command results

use super::formatters::{action_label, money, percent, probability_bar};
use crate::commands::{AnalysisReport, SimulationStatistics};
use crate::engine::{Recommendation, RiskLevel, WheelProbabilities};
use colored::Colorize;

/// Print a recommendation with its reasoning trail
pub fn print_recommendation(recommendation: &Recommendation) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {}",
        "RECOMMENDATION:".bright_cyan().bold(),
        action_label(recommendation.action).bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let risk = match recommendation.risk.risk_level {
        RiskLevel::Low => "LOW".green(),
        RiskLevel::Medium => "MEDIUM".yellow(),
        RiskLevel::High => "HIGH".red(),
    };
    println!("\nRisk level: {}", risk.bold());
    println!("Position:   {}", recommendation.risk.position);

    println!("\n💰 {}", "Expected values:".bright_cyan().bold());
    println!("   Spin:   {:>8}", money(recommendation.spin.expected_value));
    println!(
        "   Vowel:  {:>8}{}",
        money(recommendation.vowel.expected_value),
        if recommendation.vowel.can_afford {
            String::new()
        } else {
            " (cannot afford)".bright_black().to_string()
        }
    );
    println!(
        "   Solve:  {:>8}",
        money(recommendation.solve.expected_value)
    );

    if !recommendation.suggested_consonants.is_empty() {
        let letters: Vec<String> = recommendation
            .suggested_consonants
            .iter()
            .map(|score| format!("{} ({})", score.letter, percent(score.probability)))
            .collect();
        println!("\nConsonants: {}", letters.join(", ").bright_white());
    }
    if let Some(vowel) = &recommendation.suggested_vowel {
        println!(
            "Vowel:      {} ({})",
            vowel.letter.to_string().bright_white(),
            percent(vowel.probability)
        );
    }

    println!("\n📊 {}", "Reasoning:".bright_cyan().bold());
    for (index, reason) in recommendation.reasoning.iter().enumerate() {
        println!("   {}. {reason}", index + 1);
    }
    println!();
}

/// Print the full intermediate breakdown for a snapshot
pub fn print_analysis(report: &AnalysisReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "STRATEGY ANALYSIS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    print_wheel_statistics(&report.wheel);

    println!("\n🔤 {}", "Letter rankings:".bright_cyan().bold());
    println!("   Consonants:");
    for score in report.letters.consonants.iter().take(5) {
        println!(
            "      {} [{}] {}",
            score.letter,
            probability_bar(score.probability, 20).green(),
            percent(score.probability)
        );
    }
    println!("   Vowels:");
    for score in report.letters.vowels.iter().take(5) {
        println!(
            "      {} [{}] {}",
            score.letter,
            probability_bar(score.probability, 20).green(),
            percent(score.probability)
        );
    }

    println!("\n🧩 {}", "Solve estimate:".bright_cyan().bold());
    println!(
        "   Completion: {}",
        percent(report.likelihood.completion_ratio)
    );
    println!(
        "   Likelihood: [{}] {}",
        probability_bar(report.likelihood.probability, 20).green(),
        percent(report.likelihood.probability)
    );

    println!("\n⚖️  {}", "Risk:".bright_cyan().bold());
    println!("   Level:            {}", report.risk.risk_level);
    println!("   Position:         {}", report.risk.position);
    println!("   Potential loss:   {}", money(report.risk.potential_loss));
    println!(
        "   Risk/reward:      {:.2}",
        report.risk.risk_reward_ratio
    );
    println!("   Hint:             {}", report.risk.hint);

    print_recommendation(&report.recommendation);
}

/// Print the probability model for a wheel
pub fn print_wheel_statistics(wheel: &WheelProbabilities) {
    println!("\n🎡 {}", "Wheel statistics:".bright_cyan().bold());
    println!(
        "   Bankrupt:  [{}] {}",
        probability_bar(wheel.bankrupt_probability, 20).red(),
        percent(wheel.bankrupt_probability)
    );
    println!(
        "   Lose turn: [{}] {}",
        probability_bar(wheel.lose_turn_probability, 20).yellow(),
        percent(wheel.lose_turn_probability)
    );
    println!(
        "   Money:     [{}] {}",
        probability_bar(wheel.money_probability, 20).green(),
        percent(wheel.money_probability)
    );
    println!(
        "   Values:    {} - {} (average {})",
        money(f64::from(wheel.min_money_value)),
        money(f64::from(wheel.max_money_value)),
        money(wheel.average_money_value)
    );
}

/// Print aggregate statistics for a simulation sweep
pub fn print_simulation(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {}", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Overview:".bright_cyan().bold());
    println!("   Games played:     {}", stats.games);
    println!("   Average turns:    {:.1}", stats.average_turns);
    println!(
        "   Unfinished:       {}",
        if stats.unfinished_rounds == 0 {
            "0".green().to_string()
        } else {
            stats.unfinished_rounds.to_string().yellow().to_string()
        }
    );

    println!("\n🏆 {}", "Per seat:".bright_cyan().bold());
    for (seat, wins) in stats.wins.iter().enumerate() {
        let share = *wins as f64 / stats.games as f64;
        println!(
            "   Seat {seat}: {} wins [{}] {} | avg winnings {}",
            format!("{wins:4}").bright_yellow(),
            probability_bar(share, 20).green(),
            percent(share),
            money(stats.average_winnings[seat])
        );
    }

    println!("\n🎯 {}", "Actions taken:".bright_cyan().bold());
    let total_actions: usize = stats.spins + stats.vowel_buys + stats.solve_attempts;
    let action_line = |label: &str, count: usize| {
        let share = if total_actions == 0 {
            0.0
        } else {
            count as f64 / total_actions as f64
        };
        println!("   {label:<14} {count:6} ({})", percent(share));
    };
    action_line("Spins:", stats.spins);
    action_line("Vowel buys:", stats.vowel_buys);
    action_line("Solve tries:", stats.solve_attempts);
    println!();
}
