use anyhow::Result;
use clap::Args;
use serde_json::json;

use super::print_json;
use crate::infrastructure::session::{Credentials, SessionClient};

#[derive(Debug, Args)]
pub struct LoginCommand {
    #[arg(long)]
    pub email: String,
    #[arg(long, env = "BOOKREVIEW_LOGIN_PASSWORD")]
    pub password: String,
}

pub async fn run(sessions: &SessionClient, cmd: LoginCommand) -> Result<()> {
    let established = sessions
        .establish(&Credentials::new(cmd.email, cmd.password))
        .await?;

    let cookie_names: Vec<&str> = established
        .cookies
        .iter()
        .map(|cookie| cookie.name.as_str())
        .collect();

    print_json(&json!({
        "session": established.session,
        "cookies": cookie_names,
    }))
}
