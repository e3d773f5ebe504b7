mod commands;
mod config;
mod render;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "satchel")]
#[command(about = "Inspect iCalendar files and manage meeting invitations")]
struct Cli {
    /// Print machine-readable JSON instead of formatted output
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the event or task stored in an .ics file
    Show {
        /// Path to the .ics file
        file: PathBuf,
    },
    /// Create, answer and cancel meeting invitations
    #[command(subcommand)]
    Invite(InviteCommands),
    /// Inspect or change the satchel configuration
    #[command(subcommand)]
    Config(ConfigCommands),
}

#[derive(Subcommand)]
enum InviteCommands {
    /// Create a new invitation (an iTIP REQUEST)
    New {
        /// Meeting title
        summary: String,

        /// Start date/time (e.g. "2026-03-20T15:00" or "tomorrow 3pm")
        #[arg(short, long)]
        start: String,

        /// End date/time
        #[arg(short, long, conflicts_with = "duration")]
        end: Option<String>,

        /// Meeting length (e.g. "45m", "2h"), defaults to 1 hour
        #[arg(short, long)]
        duration: Option<String>,

        /// Attendee as EMAIL or EMAIL:NAME, repeatable
        #[arg(short, long = "attendee")]
        attendees: Vec<String>,

        /// Organizer email, falls back to the configured address
        #[arg(long)]
        from: Option<String>,

        /// Meeting location
        #[arg(short, long)]
        location: Option<String>,

        /// Longer description
        #[arg(long)]
        description: Option<String>,

        /// Write the invitation here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Read an invitation and show its details
    Parse {
        /// Path to the invitation .ics file
        file: PathBuf,
    },
    /// Answer an invitation (an iTIP REPLY)
    Reply {
        /// Path to the invitation being answered
        file: PathBuf,

        /// Your answer: accept, decline or tentative
        #[arg(short, long)]
        response: String,

        /// Reply as this attendee, falls back to the configured address
        #[arg(long = "as")]
        as_email: Option<String>,

        /// Free-text note for the organizer
        #[arg(short, long)]
        comment: Option<String>,

        /// Write the reply here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Call a meeting off (an iTIP CANCEL)
    Cancel {
        /// Path to the invitation being cancelled
        file: PathBuf,

        /// Write the cancellation here instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

#[derive(Subcommand)]
enum ConfigCommands {
    /// Print the config file location
    Path,
    /// Set a config value (keys: from, organizer-name)
    Set { key: String, value: String },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { file } => commands::show::run(&file, cli.json),
        Commands::Invite(invite) => match invite {
            InviteCommands::New {
                summary,
                start,
                end,
                duration,
                attendees,
                from,
                location,
                description,
                out,
            } => commands::invite::run_new(
                summary,
                &start,
                end.as_deref(),
                duration.as_deref(),
                &attendees,
                from,
                location,
                description,
                out.as_deref(),
            ),
            InviteCommands::Parse { file } => commands::invite::run_parse(&file, cli.json),
            InviteCommands::Reply {
                file,
                response,
                as_email,
                comment,
                out,
            } => commands::invite::run_reply(&file, &response, as_email, comment, out.as_deref()),
            InviteCommands::Cancel { file, out } => {
                commands::invite::run_cancel(&file, out.as_deref())
            }
        },
        Commands::Config(config) => match config {
            ConfigCommands::Path => commands::config::run_path(),
            ConfigCommands::Set { key, value } => commands::config::run_set(&key, &value),
        },
    }
}
