use std::env;

use anyhow::{anyhow, Context, Result};
use quickcreate::workspace::{config_file_path, load_or_default, save, PickerConfig};

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let config_path = config_file_path()?;
    let mut config = load_or_default()?;
    let changed = apply_overrides(&mut config, &args) || !config_path.exists();

    if changed {
        save(&config)?;
        println!("Picker settings recorded at {}", config_path.display());
    } else {
        println!("Picker settings already configured.");
    }
    Ok(())
}

#[derive(Default)]
struct CliArgs {
    max_depth: Option<usize>,
    match_limit: Option<usize>,
    browse_entries: Option<bool>,
    disable_log: bool,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut parsed = CliArgs::default();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--max-depth" => {
                    let value = args.next().context("Expected a number after --max-depth")?;
                    parsed.max_depth = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid --max-depth value '{value}'"))?,
                    );
                }
                "--match-limit" => {
                    let value = args
                        .next()
                        .context("Expected a number after --match-limit")?;
                    parsed.match_limit = Some(
                        value
                            .parse()
                            .with_context(|| format!("Invalid --match-limit value '{value}'"))?,
                    );
                }
                "--browse" => parsed.browse_entries = Some(true),
                "--no-browse" => parsed.browse_entries = Some(false),
                "--no-log" => parsed.disable_log = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                other => {
                    return Err(anyhow!(
                        "Unknown argument '{other}'. Run with --help for usage instructions."
                    ));
                }
            }
        }
        Ok(parsed)
    }
}

fn print_usage() {
    println!("quickcreate setup");
    println!("Records picker preferences in config.toml.");
    println!("Usage: cargo run --bin setup -- [options]");
    println!("Options:");
    println!("  --max-depth <n>     Folder discovery depth (default: 10)");
    println!("  --match-limit <n>   Matching folders listed per name (default: 10)");
    println!("  --browse            List typed directory contents as suggestions");
    println!("  --no-browse         Only offer the create record for typed paths");
    println!("  --no-log            Stop writing the activity log");
}

fn apply_overrides(config: &mut PickerConfig, args: &CliArgs) -> bool {
    let mut changed = false;
    if let Some(depth) = args.max_depth {
        changed |= replace(&mut config.enumeration.max_depth, depth);
    }
    if let Some(limit) = args.match_limit {
        changed |= replace(&mut config.suggestions.match_limit, limit);
    }
    if let Some(browse) = args.browse_entries {
        changed |= replace(&mut config.suggestions.browse_entries, browse);
    }
    if args.disable_log {
        changed |= replace(&mut config.logging.enabled, false);
    }
    changed
}

fn replace<T: PartialEq>(slot: &mut T, value: T) -> bool {
    if *slot == value {
        return false;
    }
    *slot = value;
    true
}
