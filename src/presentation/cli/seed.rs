use anyhow::Result;
use clap::{Args, Subcommand};

use super::print_json;
use crate::Store;
use crate::builders::{BookBuilder, UserBuilder};

#[derive(Debug, Subcommand)]
pub enum SeedCommands {
    /// Create a user with a profile; prints the plaintext password
    User(SeedUserCommand),
    /// Create a book together with a new owning user
    Book(SeedBookCommand),
}

pub async fn run(store: &Store, cmd: SeedCommands) -> Result<()> {
    match cmd {
        SeedCommands::User(c) => seed_user(store, c).await,
        SeedCommands::Book(c) => seed_book(store, c).await,
    }
}

#[derive(Debug, Args)]
pub struct SeedUserCommand {
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub name: Option<String>,
}

impl SeedUserCommand {
    fn builder(self) -> UserBuilder {
        let mut builder = UserBuilder::a_user();
        if let Some(email) = self.email {
            builder = builder.with_email(email);
        }
        if let Some(password) = self.password {
            builder = builder.with_password(password);
        }
        if let Some(name) = self.name {
            builder = builder.with_name(name);
        }
        builder
    }
}

#[derive(Debug, Args)]
pub struct SeedBookCommand {
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
}

impl SeedBookCommand {
    fn builder(self) -> BookBuilder {
        let mut builder = BookBuilder::a_book();
        if let Some(title) = self.title {
            builder = builder.with_title(title);
        }
        if let Some(description) = self.description {
            builder = builder.with_description(description);
        }
        builder
    }
}

async fn seed_user(store: &Store, cmd: SeedUserCommand) -> Result<()> {
    let user = cmd.builder().create(store).await?;
    print_json(&user)
}

async fn seed_book(store: &Store, cmd: SeedBookCommand) -> Result<()> {
    let book = cmd.builder().create(store).await?;
    print_json(&book)
}
