mod cli;
mod config;
mod display;
mod error;
mod logging;
mod models;
mod renderer;
mod state;
mod tracker;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

use tracker::Operation;

#[derive(Parser)]
#[command(name = "dt", version)]
#[command(about = "Track where the day goes, one block at a time", long_about = None)]
#[command(disable_help_subcommand = true)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Without a command, show every entry and the todo list
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Track(TrackCommand),
    /// Create the data file
    Init,
    /// Configuration commands
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
    /// Print usage
    #[command(visible_alias = "h")]
    Help,
    #[command(external_subcommand)]
    Other(Vec<String>),
}

/// Commands that load the data file, apply one operation and save it
#[derive(Subcommand)]
enum TrackCommand {
    /// Add blocks to an entry ('a' adds one block to a, '3b' adds three to b)
    #[command(visible_alias = "a")]
    Add {
        #[arg(value_name = "[N]LETTER")]
        block: String,
    },
    /// Subtract blocks from an entry
    #[command(visible_alias = "s")]
    Subtract {
        #[arg(value_name = "[N]LETTER")]
        block: String,
    },
    /// Credit the time since the logged time to an entry
    #[command(visible_alias = "u")]
    Update { letter: String },
    /// Set the logged time (e.g. 8:00am)
    #[command(visible_alias = "t")]
    Time { time: String },
    /// Set the block size in minutes (only while nothing is logged)
    #[command(visible_alias = "b")]
    Blocksize { minutes: String },
    /// Set the logged time to the current time
    #[command(visible_alias = "st")]
    Start,
    /// Reset all entries to 0 and rewind the logged time
    #[command(visible_alias = "r")]
    Reset,
    /// Add a new entry
    #[command(visible_alias = "n")]
    New { name: String },
    /// Rename an entry
    #[command(visible_aliases = ["m", "rename"])]
    Mv { letter: String, name: String },
    /// Delete an entry
    #[command(visible_alias = "d")]
    Delete { letter: String },
    /// Add a new todo
    Todo { content: String },
    /// Reword a todo
    #[command(visible_alias = "todo-rename")]
    Tm { letter: String, content: String },
    /// Swap two todos
    #[command(visible_alias = "todo-swap")]
    Tr { first: String, second: String },
    /// Check off a todo
    #[command(visible_alias = "c")]
    Checkoff { letter: String },
    /// Show a summary for the day
    #[command(visible_alias = "sum")]
    Summary,
    /// Show all entries and todos
    All,
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Initialize the configuration file
    Init {
        /// Path where to create the config file
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

impl From<TrackCommand> for Operation {
    fn from(command: TrackCommand) -> Self {
        match command {
            TrackCommand::Add { block } => Operation::Add(block),
            TrackCommand::Subtract { block } => Operation::Subtract(block),
            TrackCommand::Update { letter } => Operation::Update(letter),
            TrackCommand::Time { time } => Operation::SetTime(time),
            TrackCommand::Blocksize { minutes } => Operation::SetBlockSize(minutes),
            TrackCommand::Start => Operation::Start,
            TrackCommand::Reset => Operation::Reset,
            TrackCommand::New { name } => Operation::NewEntry(name),
            TrackCommand::Mv { letter, name } => Operation::RenameEntry {
                label: letter,
                name,
            },
            TrackCommand::Delete { letter } => Operation::DeleteEntry(letter),
            TrackCommand::Todo { content } => Operation::NewTodo(content),
            TrackCommand::Tm { letter, content } => Operation::RenameTodo {
                label: letter,
                content,
            },
            TrackCommand::Tr { first, second } => Operation::SwapTodos(first, second),
            TrackCommand::Checkoff { letter } => Operation::CheckOff(letter),
            TrackCommand::Summary => Operation::Summary,
            TrackCommand::All => Operation::All,
        }
    }
}

fn main() {
    logging::enable_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        None => cli::track::run(cli.config, Operation::All),
        Some(Commands::Help) => Cli::command()
            .print_help()
            .map_err(error::TrackerError::from),
        Some(Commands::Init) => cli::init::run(cli.config),
        Some(Commands::Config { command }) => match command {
            ConfigCommands::Init { path } => cli::config::init(path),
        },
        Some(Commands::Track(command)) => cli::track::run(cli.config, command.into()),
        Some(Commands::Other(args)) => {
            tracing::warn!(command = ?args.first(), "unknown command, showing summary");
            cli::track::run(cli.config, Operation::Summary)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
