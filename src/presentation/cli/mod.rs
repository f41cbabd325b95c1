pub mod cleanup;
pub mod login;
pub mod seed;

use anyhow::Result;
use clap::{Parser, Subcommand};
use serde::Serialize;

use crate::HarnessConfig;
use cleanup::CleanupCommands;
use login::LoginCommand;
use seed::SeedCommands;

#[derive(Debug, Parser)]
#[command(author, version, about = "Seed, sign in, and clean up test data for the book review app", long_about = None)]
pub struct Cli {
    #[command(flatten)]
    pub config: HarnessConfig,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Create test entities in the application's database
    Seed {
        #[command(subcommand)]
        command: SeedCommands,
    },

    /// Delete test entities by natural key
    Cleanup {
        #[command(subcommand)]
        command: CleanupCommands,
    },

    /// Run the credential sign-in handshake and print the session
    Login(LoginCommand),
}

pub(crate) fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
