//! Slash commands understood by the bot.

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Avatar bot commands:")]
pub enum Command {
    #[command(description = "reset and show usage.")]
    Start,
    #[command(description = "show usage.")]
    Help,
    #[command(description = "create an avatar: /avatar <name>.")]
    Avatar(String),
}

/// Parses `text` as a command addressed to this bot (`/cmd` or `/cmd@bot_username`).
/// A bare `/avatar` yields `Avatar("")` so the caller can show a usage hint.
pub fn parse_command(text: &str, bot_username: Option<&str>) -> Option<Command> {
    let username = bot_username.unwrap_or("");
    match Command::parse(text, username) {
        Ok(cmd) => Some(cmd),
        Err(_) => {
            let head = text.split_whitespace().next()?;
            let (name, mention) = match head.split_once('@') {
                Some((n, m)) => (n, Some(m)),
                None => (head, None),
            };
            let addressed_to_us = mention.map_or(true, |m| m.eq_ignore_ascii_case(username));
            (addressed_to_us && name.eq_ignore_ascii_case("/avatar"))
                .then(|| Command::Avatar(String::new()))
        }
    }
}
