use std::io::{self, Write};
use std::process::ExitCode;

use clap::{Args, CommandFactory, Parser, Subcommand};
use tracing::debug;

use super::actions::{self, MessageListOptions, SetupValues};
use crate::client::VoyagerClient;
use crate::credentials;
use crate::error::LkError;
use crate::utils::get_credentials_path;

#[derive(Parser)]
#[command(name = "lk")]
#[command(version)]
#[command(about = "LinkedIn CLI: profile and inbox access with browser session cookies", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Profile commands
    Profile {
        #[command(subcommand)]
        command: Option<ProfileCommands>,
    },
    /// Message commands
    Message {
        #[command(subcommand)]
        command: Option<MessageCommands>,
    },
    /// Authentication commands
    Auth {
        #[command(subcommand)]
        command: Option<AuthCommands>,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommands {
    /// Get your profile
    Me(OutputArgs),
}

#[derive(Subcommand)]
pub enum MessageCommands {
    /// List conversations
    List(ListArgs),
}

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Set up credentials
    #[command(visible_alias = "login")]
    Setup(SetupArgs),
    /// Check authentication status
    Status,
}

#[derive(Args, Debug)]
pub struct OutputArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,

    /// Only unread conversations
    #[arg(long)]
    pub unread: bool,
}

#[derive(Args, Debug)]
pub struct SetupArgs {
    /// li_at cookie value (prompted for when omitted)
    #[arg(long = "li-at", value_name = "VALUE")]
    pub li_at: Option<String>,

    /// JSESSIONID cookie value (prompted for when omitted)
    #[arg(long, value_name = "VALUE")]
    pub jsessionid: Option<String>,
}

/// Parse arguments, run the command, and map failures to a JSON error document
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match execute(cli.command, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("command failed: {:?}", e);
            // Nothing useful is left to do if stdout itself is gone
            let _ = actions::write_json(&mut out, &e.to_document());
            ExitCode::FAILURE
        }
    }
}

fn execute<W: Write>(command: Option<Commands>, out: &mut W) -> Result<(), LkError> {
    match command {
        Some(Commands::Profile { command: Some(ProfileCommands::Me(args)) }) => {
            actions::profile_me(&connect()?, args.json, out)
        }
        Some(Commands::Message { command: Some(MessageCommands::List(args)) }) => {
            let options = MessageListOptions { json: args.json, unread_only: args.unread };
            actions::message_list(&connect()?, options, out)
        }
        Some(Commands::Auth { command: Some(AuthCommands::Setup(args)) }) => {
            let path = get_credentials_path().map_err(|e| LkError::Storage(format!("{:#}", e)))?;
            let values = SetupValues { li_at: args.li_at, jsessionid: args.jsessionid };
            actions::auth_setup(values, &path, &mut io::stdin().lock(), out)
        }
        Some(Commands::Auth { command: Some(AuthCommands::Status) }) => {
            let client = credentials::resolve().map(|creds| VoyagerClient::new(&creds)).transpose()?;
            actions::auth_status(client.as_ref(), out)
        }
        Some(Commands::Profile { command: None }) => write_help(out, Some("profile")),
        Some(Commands::Message { command: None }) => write_help(out, Some("message")),
        Some(Commands::Auth { command: None }) => write_help(out, Some("auth")),
        None => write_help(out, None),
    }
}

/// Resolve credentials and build the upstream client from them
fn connect() -> Result<VoyagerClient, LkError> {
    let credentials = credentials::resolve().ok_or(LkError::CredentialsAbsent)?;
    debug!(?credentials, "resolved credentials");
    VoyagerClient::new(&credentials)
}

/// Help for the top level or for one command group
fn write_help<W: Write>(out: &mut W, group: Option<&str>) -> Result<(), LkError> {
    let mut command = Cli::command();
    command.build();

    let help = match group.and_then(|name| command.find_subcommand_mut(name)) {
        Some(subcommand) => subcommand.render_help(),
        None => command.render_help(),
    };
    write!(out, "{}", help)?;
    Ok(())
}
