use std::env;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::{anyhow, bail, Context, Result};
use quickcreate::paths::resolve_against;
use quickcreate::workspace::load_or_default;
use quickcreate::{
    run_create_command, ActivityLog, ConfirmChoice, HostSurface, LocalFs, PickerEvent,
    PickerEvents, SessionOutcome, SuggestionKind, SuggestionRecord, WorkspaceContext,
};

fn main() -> Result<()> {
    let args = CliArgs::parse()?;
    let config = load_or_default()?;
    let log = match config.activity_log_path()? {
        Some(path) => ActivityLog::new(path),
        None => ActivityLog::disabled(),
    };

    let cwd = env::current_dir().context("Unable to determine the current directory")?;
    let root = args.root.unwrap_or_else(|| cwd.clone());
    let context = WorkspaceContext::new(
        Some(absolute(&cwd, &root)),
        args.active.map(|active| absolute(&cwd, &active)),
    );

    let mut host = TerminalHost;
    let mut events = StdinEvents;
    match run_create_command(&context, config, LocalFs, &mut host, &mut events, log) {
        Some(SessionOutcome::Completed(_)) => Ok(()),
        Some(SessionOutcome::Dismissed) => {
            println!("Nothing created.");
            Ok(())
        }
        None => std::process::exit(1),
    }
}

struct CliArgs {
    root: Option<PathBuf>,
    active: Option<PathBuf>,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut root = None;
        let mut active = None;
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--root" => {
                    let value = args.next().context("Expected a directory after --root")?;
                    root = Some(PathBuf::from(value));
                }
                "--active" => {
                    let value = args.next().context("Expected a file path after --active")?;
                    active = Some(PathBuf::from(value));
                }
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
        Ok(Self { root, active })
    }
}

fn print_usage() {
    println!("quickcreate: create a file or folder from one path input");
    println!("Usage: quickcreate [--root <dir>] [--active <file>]");
    println!("Options:");
    println!("  --root <dir>      Workspace root (default: current directory)");
    println!("  --active <file>   Document treated as open in the editor");
    println!("While picking:");
    println!("  <text>   replace the input (a trailing dot-extension means file)");
    println!("  :<n>     accept suggestion n");
    println!("  :        accept the typed text");
    println!("  :q       dismiss");
}

fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    resolve_against(cwd, &path.to_string_lossy())
}

/// Line-oriented picker over stdin.
struct StdinEvents;

impl PickerEvents for StdinEvents {
    fn next_event(&mut self, input: &str, suggestions: &[SuggestionRecord]) -> PickerEvent {
        render(input, suggestions);
        loop {
            print!("> ");
            let _ = io::stdout().flush();
            let Some(line) = read_line() else {
                return PickerEvent::Dismiss;
            };
            let Some(command) = line.strip_prefix(':') else {
                return PickerEvent::InputChanged(line);
            };
            match command {
                "" => return PickerEvent::Accept(None),
                "q" => return PickerEvent::Dismiss,
                index => match index.trim().parse::<usize>() {
                    Ok(index) => return PickerEvent::Accept(Some(index)),
                    Err(_) => eprintln!("Expected :<number>, : or :q"),
                },
            }
        }
    }
}

fn render(input: &str, suggestions: &[SuggestionRecord]) {
    println!();
    println!("input: {input:?}");
    for (index, record) in suggestions.iter().enumerate() {
        if record.kind == SuggestionKind::Separator {
            println!("     --- {} ---", record.label);
            continue;
        }
        match &record.description {
            Some(description) => println!("{index:>4} {}  ({description})", record.label),
            None => println!("{index:>4} {}", record.label),
        }
    }
}

fn read_line() -> Option<String> {
    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => None,
        Ok(_) => Some(line.trim_end_matches(['\r', '\n']).to_string()),
    }
}

/// Host surface backed by the terminal and `$VISUAL`/`$EDITOR`.
struct TerminalHost;

impl HostSurface for TerminalHost {
    fn confirm(&mut self, message: &str) -> ConfirmChoice {
        print!("{message} [y/N] ");
        let _ = io::stdout().flush();
        match read_line() {
            None => ConfirmChoice::Dismissed,
            Some(answer) => match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => ConfirmChoice::Yes,
                "" => ConfirmChoice::Dismissed,
                _ => ConfirmChoice::No,
            },
        }
    }

    fn notify(&mut self, message: &str) {
        println!("{message}");
    }

    fn warn(&mut self, message: &str) {
        eprintln!("warning: {message}");
    }

    fn error(&mut self, message: &str) {
        eprintln!("{message}");
    }

    fn open_document(&mut self, path: &Path) -> Result<()> {
        let editor = env::var("VISUAL")
            .or_else(|_| env::var("EDITOR"))
            .ok()
            .filter(|value| !value.trim().is_empty());
        let Some(editor) = editor else {
            println!("Open {}", path.display());
            return Ok(());
        };
        let mut parts = editor.split_whitespace();
        let program = parts.next().context("Editor command is empty")?;
        let status = Command::new(program)
            .args(parts)
            .arg(path)
            .status()
            .with_context(|| format!("Failed to launch editor '{program}'"))?;
        if !status.success() {
            bail!("Editor '{program}' exited with {status}");
        }
        Ok(())
    }

    fn reveal(&mut self, path: &Path) -> Result<()> {
        println!("Revealed {}", path.display());
        Ok(())
    }
}
