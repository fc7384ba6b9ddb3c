use clap::{Parser, Subcommand};
use colored::Colorize;
use quranshare_common::{AppState, Config, Language, ReaderId, SectionId};
use quranshare_runtime::{Runtime, RuntimeError};
use std::path::{Path, PathBuf};
use tracing::debug;

mod console;
mod render;

/// QuranShare - split the pages of each juz between a group of readers

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory containing quranshare.toml
    #[arg(short, long, default_value = ".")]
    config: PathBuf,
    /// State file to use instead of the one named in the config
    #[arg(short, long)]
    state: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every section and its page range
    Sections,
    /// Set the number of readers (0-20), keeping names of existing readers
    Readers { count: usize },
    /// Name a reader
    Name { id: ReaderId, name: String },
    /// Split every section between the readers
    Calculate,
    /// Choose the section shown by `table` and `share`
    Select { section: SectionId },
    /// Show each reader's pages for the selected section
    Table,
    /// Print the text to paste into a chat, or write it to a file
    Share {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Switch the language: ms (Melayu) or en (English)
    Language { language: Language },
    /// Start an interactive session
    Console,
}

fn main() {
    let log_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(log_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Args::parse();

    let config = match Config::load_or_default(&cli.config) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };
    let state_path = cli.state.unwrap_or_else(|| config.state_file.clone());
    debug!(path = %state_path.display(), "using state file");

    let state = match load_state(&config, &state_path) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let mut runtime = Runtime::new(state);

    if let Commands::Console = cli.command {
        console::Console::start(&mut runtime, &state_path);
        return;
    }

    if let Err(err) = run_command(cli.command, &mut runtime) {
        eprintln!("{}", err);
        std::process::exit(1);
    }

    if let Err(err) = runtime.state().save(&state_path) {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

/// Saved state, or a fresh state in the configured language when no state
/// file has been written yet.
fn load_state(config: &Config, path: &Path) -> quranshare_common::Result<AppState> {
    AppState::load_or(path, AppState::with_language(config.default_language))
}

fn run_command(command: Commands, runtime: &mut Runtime) -> Result<(), RuntimeError> {
    match command {
        Commands::Sections => render::print_sections(runtime),
        Commands::Readers { count } => {
            runtime.set_reader_count(count)?;
            render::print_readers(runtime);
        }
        Commands::Name { id, name } => {
            runtime.set_reader_name(id, name)?;
            render::print_readers(runtime);
        }
        Commands::Calculate => {
            runtime.calculate()?;
            render::print_table(runtime)?;
            render::print_share_hint(runtime);
        }
        Commands::Select { section } => {
            runtime.select_section(section)?;
            if runtime.is_displaying() {
                render::print_table(runtime)?;
            }
        }
        Commands::Table => render::print_table(runtime)?,
        Commands::Share { output } => {
            let text = runtime.share_text()?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &text).map_err(|source| {
                        RuntimeError::State(quranshare_common::Error::Io { path, source })
                    })?;
                }
                None => {
                    print!("{}", text);
                    eprintln!("{}", runtime.translate("copy_note").dimmed());
                }
            }
        }
        Commands::Language { language } => {
            runtime.set_language(language);
            render::print_language(runtime);
        }
        Commands::Console => unreachable!("console runs its own loop"),
    }

    Ok(())
}
