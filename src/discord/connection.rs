// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::commands::command_manifest;
use super::context::ClientContext;
use super::event::EventBinder;
use super::events::event_manifest;
use super::loader::{LoadContext, load_commands, load_events};
use super::registry::CommandRegistry;
use crate::config::ConfigDocument;
use chrono::Utc;
use miette::IntoDiagnostic;
use mongodb::Database;
use std::sync::Arc;
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt};
use twilight_http::client::Client;
use twilight_model::gateway::event::Event;
use twilight_model::id::Id;

pub fn set_up_client(config: &ConfigDocument) -> Arc<Client> {
	Arc::new(Client::new(config.discord.token.clone()))
}

/// Loads and publishes all handlers, then runs the gateway loop. Handler
/// registration finishes before the first event is consumed, so dispatch never
/// races the loader.
pub async fn run_bot(config: Arc<ConfigDocument>, database: Database, http_client: Arc<Client>) -> miette::Result<()> {
	let intents = Intents::GUILDS | Intents::GUILD_MESSAGES | Intents::DIRECT_MESSAGES;
	let mut shard = Shard::new(ShardId::ONE, config.discord.token.clone(), intents);

	let application_id = {
		let application_response = http_client.current_user_application().await.into_diagnostic()?;
		application_response.model().await.into_diagnostic()?.id
	};

	let context = Arc::new(ClientContext {
		http: Arc::clone(&http_client),
		application_id,
		owner: Id::new(config.discord.owner),
		config: Arc::clone(&config),
		database,
		started_at: Utc::now(),
	});

	let commands = Arc::new(load_commands(&context, command_manifest())?);
	publish_commands(&context, &commands).await?;

	let load_context = LoadContext {
		client: Arc::clone(&context),
		commands,
	};
	let binder = Arc::new(load_events(&load_context, event_manifest())?);

	while let Some(event) = shard.next_event(EventTypeFlags::all()).await {
		let event = match event {
			Ok(event) => event,
			Err(error) => {
				tracing::warn!(source = ?error, "error receiving event");
				continue;
			}
		};
		tokio::spawn(handle_event(event, Arc::clone(&binder)));
	}

	Ok(())
}

/// Pushes command definitions to Discord: global commands globally, the rest
/// to the configured development guild.
async fn publish_commands(context: &ClientContext, commands: &CommandRegistry) -> miette::Result<()> {
	let interaction_client = context.http.interaction(context.application_id);
	let (global_commands, guild_commands) = commands.definitions();

	interaction_client
		.set_global_commands(&global_commands)
		.await
		.into_diagnostic()?;
	tracing::info!(count = global_commands.len(), "Published global commands");

	if guild_commands.is_empty() {
		return Ok(());
	}
	match context.config.discord.guild {
		Some(guild) => {
			interaction_client
				.set_guild_commands(Id::new(guild), &guild_commands)
				.await
				.into_diagnostic()?;
			tracing::info!(count = guild_commands.len(), guild, "Published guild commands");
		}
		None => {
			tracing::warn!(
				count = guild_commands.len(),
				"No guild is configured; skipping publication of non-global commands"
			);
		}
	}
	Ok(())
}

async fn handle_event(event: Event, binder: Arc<EventBinder>) {
	tracing::debug!("Incoming gateway message: {:?}", event);
	binder.dispatch(&event).await;
}
