use anyhow::Result;
use clap::{Args, Subcommand};
use serde_json::json;

use super::print_json;
use crate::Store;
use crate::builders::{BookBuilder, UserBuilder};
use crate::domain::ids::BookId;

#[derive(Debug, Subcommand)]
pub enum CleanupCommands {
    /// Delete one user by email
    User(CleanupUserCommand),
    /// Delete one book by id
    Book(CleanupBookCommand),
    /// Delete every book
    Books,
}

#[derive(Debug, Args)]
pub struct CleanupUserCommand {
    #[arg(long)]
    pub email: String,
}

#[derive(Debug, Args)]
pub struct CleanupBookCommand {
    #[arg(long)]
    pub id: String,
}

pub async fn run(store: &Store, cmd: CleanupCommands) -> Result<()> {
    match cmd {
        CleanupCommands::User(c) => {
            UserBuilder::delete(store, &c.email).await?;
            print_json(&json!({ "deleted": "user", "email": c.email }))
        }
        CleanupCommands::Book(c) => {
            BookBuilder::delete(store, &BookId::new(c.id.clone())).await?;
            print_json(&json!({ "deleted": "book", "id": c.id }))
        }
        CleanupCommands::Books => {
            let deleted = BookBuilder::delete_all(store).await?;
            print_json(&json!({ "deleted": "books", "count": deleted }))
        }
    }
}
