//! BotConfig: BaseConfig + AvatarConfig. Use load() for env-based loading.

use anyhow::Result;

use super::{AvatarConfig, BaseConfig};

pub struct BotConfig {
    pub base: BaseConfig,
    pub avatar: AvatarConfig,
}

impl BotConfig {
    /// Load full config from environment variables. If `token` is provided it overrides BOT_TOKEN.
    /// Call validate() after load to check config before init.
    pub fn load(token: Option<String>) -> Result<Self> {
        let base = BaseConfig::load(token)?;
        let avatar = AvatarConfig::from_env()?;
        Ok(Self { base, avatar })
    }

    /// Validate config. Call after load() to fail fast before init.
    pub fn validate(&self) -> Result<()> {
        self.base.validate()?;
        self.avatar.validate()
    }

    pub fn base(&self) -> &BaseConfig {
        &self.base
    }
    pub fn avatar(&self) -> &AvatarConfig {
        &self.avatar
    }

    pub fn bot_token(&self) -> &str {
        &self.base.bot_token
    }
    pub fn log_file(&self) -> &str {
        &self.base.log_file
    }
    pub fn telegram_api_url(&self) -> Option<&str> {
        self.base.telegram_api_url.as_deref()
    }
    pub fn avatar_size(&self) -> u32 {
        self.avatar.size
    }
    pub fn palette_size(&self) -> usize {
        self.avatar.palette_size
    }
}
