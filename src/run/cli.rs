use anyhow::Result;

use crate::categorize::Categorizer;
use crate::ledger::Ledger;
use crate::ui::util::{format_amount, format_percent};

pub(crate) fn as_cli(args: &[String]) -> Result<()> {
    match args[0].as_str() {
        "categorize" | "c" => cli_categorize(&args[1..]),
        "summary" | "s" => cli_summary(&args[1..]),
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("finsmart {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("FinSmart — budgets, spending and savings goals in the terminal");
    println!();
    println!("Usage: finsmart [options] [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  categorize <description...>   Show the category a description maps to");
    println!("  summary [<desc> <amount>]...  Print totals, budgets and goals for the given spends");
    println!("    --goal <name> <target> <deadline>");
    println!("                                Add a savings goal (repeatable)");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Options:");
    println!("  --dark, --light               Initial display mode (default: light)");
    println!("  --chart <bars|shares>         Initial chart style (default: bars)");
    println!("  --log <path>                  Write TUI logs to a file");
}

fn cli_categorize(args: &[String]) -> Result<()> {
    if args.is_empty() {
        anyhow::bail!("Usage: finsmart categorize <description...>");
    }

    let description = args.join(" ");
    match Categorizer::standard().explain(&description) {
        Some((category, keyword)) => println!("{category}  (matched \"{keyword}\")"),
        None => println!("Other  (no keyword matched)"),
    }
    Ok(())
}

fn cli_summary(args: &[String]) -> Result<()> {
    let (ledger, warnings) = build_ledger(args)?;
    for warning in &warnings {
        eprintln!("Warning: {warning}");
    }

    let summary = ledger.summary();
    println!("FinSmart — {}", chrono::Local::now().format("%Y-%m-%d"));
    println!("{}", "─".repeat(40));
    println!("  Total Budget: {}", format_amount(summary.total_budget));
    println!("  Total Spent:  {}", format_amount(summary.total_spent));
    println!("  Remaining:    {}", format_amount(summary.remaining_budget));
    println!("  Total Txns:   {}", ledger.transactions().len());

    let spending = ledger.spending_by_category();
    if !spending.is_empty() {
        println!();
        println!("Spending by Category:");
        for share in &spending {
            println!("  {:<20} {}", share.category.as_str(), format_amount(share.value));
        }
    }

    println!();
    println!("Budget Overview:");
    for status in ledger.budget_overview() {
        println!(
            "  {:<20} {:>10} / {:<10} {} left",
            status.category.as_str(),
            format_amount(status.spent),
            format_amount(status.total),
            format_amount(status.remaining)
        );
    }

    if !ledger.goals().is_empty() {
        println!();
        println!("Goals:");
        for goal in ledger.goals() {
            println!(
                "  {:<20} {} of {} ({}, {}) by {}",
                goal.name,
                format_amount(goal.saved),
                format_amount(goal.target),
                format_percent(goal.progress()),
                goal.tier(),
                goal.deadline
            );
        }
    }

    Ok(())
}

/// Feed `<desc> <amount>` pairs and `--goal <name> <target> <deadline>`
/// triples into a fresh ledger. Rejected inputs come back as warnings;
/// malformed argument lists are errors.
fn build_ledger(args: &[String]) -> Result<(Ledger, Vec<String>)> {
    let mut ledger = Ledger::new();
    let mut warnings = Vec::new();
    let mut rest = args;

    while let Some(first) = rest.first() {
        if first == "--goal" {
            let [_, name, target, deadline, ..] = rest else {
                anyhow::bail!("Usage: --goal <name> <target> <deadline>");
            };
            if let Err(rejection) = ledger.add_goal(name, target, deadline) {
                warnings.push(format!("goal '{name}' not added: {rejection}"));
            }
            rest = &rest[4..];
        } else {
            let [description, amount, ..] = rest else {
                anyhow::bail!("Missing amount for '{first}'. Usage: summary [<desc> <amount>]...");
            };
            if let Err(rejection) = ledger.add_transaction(description, amount) {
                warnings.push(format!("'{description}' not added: {rejection}"));
            }
            rest = &rest[2..];
        }
    }

    Ok((ledger, warnings))
}
