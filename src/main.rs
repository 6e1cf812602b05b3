use clap::Parser;
use console::style;

use passforge::{generate_candidates, PasswordCandidate, Strength};

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate password candidates and score their strength", long_about = None)]
struct Args {
    /// Desired password length (clamped to 6-32)
    #[arg(short, long, default_value_t = 12)]
    length: usize,

    /// Emit the candidate list as JSON instead of styled text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp_secs()
        .init();

    let args = Args::parse();
    log::info!("requested length: {}", args.length);

    let candidates = generate_candidates(args.length)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&candidates)?);
        return Ok(());
    }

    println!("🔑 Password candidates (length {}):", candidates[0].text.chars().count());
    println!();
    for candidate in &candidates {
        print_candidate(candidate);
    }

    Ok(())
}

fn print_candidate(candidate: &PasswordCandidate) {
    let strength = match candidate.strength.strength {
        Strength::Strong => style("strong").green().bold(),
        Strength::Medium => style("medium").yellow(),
        Strength::Weak => style("weak").red(),
    };

    println!(
        "  {:<14} {}  [{} · score {}]",
        candidate.strategy.label(),
        style(&candidate.text).bold(),
        strength,
        candidate.strength.score,
    );
    for detail in &candidate.strength.details {
        println!("      {} {}", style("·").dim(), style(detail).dim());
    }
    println!();
}
