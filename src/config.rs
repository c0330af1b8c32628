// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use knus::Decode;
use miette::{IntoDiagnostic, Result, bail};
use tokio::fs::read_to_string;
use tracing::level_filters::LevelFilter;

pub async fn parse_config(config_path: &str) -> Result<ConfigDocument> {
	let config_file_contents = read_to_string(config_path).await.into_diagnostic()?;
	let config: ConfigDocument = knus::parse(config_path, &config_file_contents)?;
	config.validate()?;
	Ok(config)
}

#[derive(Debug, Decode)]
pub struct ConfigDocument {
	#[knus(child)]
	pub discord: DiscordConfig,
	#[knus(child)]
	pub database: DatabaseConfig,
	#[knus(child, default)]
	pub logging: LoggingConfig,
}

#[derive(Debug, Decode)]
pub struct DiscordConfig {
	#[knus(child, unwrap(argument))]
	pub token: String,
	/// User ID of the bot owner; owner-only commands check against this.
	#[knus(child, unwrap(argument))]
	pub owner: u64,
	/// Guild that receives commands not published globally.
	#[knus(child, unwrap(argument))]
	pub guild: Option<u64>,
}

#[derive(Debug, Decode)]
pub struct DatabaseConfig {
	#[knus(child, unwrap(argument))]
	pub uri: String,
	#[knus(child, unwrap(argument))]
	pub name: String,
}

#[derive(Debug, Decode, Default)]
pub struct LoggingConfig {
	#[knus(child, unwrap(argument))]
	pub level: Option<String>,
	#[knus(child, unwrap(argument))]
	pub directory: Option<String>,
}

impl ConfigDocument {
	fn validate(&self) -> Result<()> {
		if self.discord.token.is_empty() {
			bail!("The Discord token must not be empty");
		}
		if self.discord.owner == 0 {
			bail!("The owner must be a nonzero Discord user ID");
		}
		if self.discord.guild == Some(0) {
			bail!("The guild, when provided, must be a nonzero Discord guild ID");
		}
		if !self.database.uri.starts_with("mongodb://") && !self.database.uri.starts_with("mongodb+srv://") {
			bail!("The database URI must use the mongodb or mongodb+srv scheme");
		}
		if self.database.name.is_empty() {
			bail!("The database name must not be empty");
		}
		if let Some(level) = &self.logging.level {
			// Same type set_up_logging parses, so validation and the logging
			// layer accept exactly the same values.
			if level.parse::<LevelFilter>().is_err() {
				bail!("The logging level must be one of error, warn, info, debug, trace, or off");
			}
		}
		Ok(())
	}
}
