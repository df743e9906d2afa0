//! Bot configuration: BaseConfig (Telegram + log) + AvatarConfig (render size, palette length).

mod avatar;
mod base;
mod bot_config;


pub use avatar::AvatarConfig;
pub use base::BaseConfig;
pub use bot_config::BotConfig;
