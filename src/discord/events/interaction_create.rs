// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::context::ClientContext;
use crate::discord::dispatch::{self, AccessRequest};
use crate::discord::event::GatewayEvent;
use crate::discord::invocation::Invocation;
use crate::discord::loader::LoadContext;
use crate::discord::registry::CommandRegistry;
use crate::discord::responses;
use async_trait::async_trait;
use std::sync::Arc;
use twilight_model::application::interaction::application_command::CommandData;
use twilight_model::application::interaction::{InteractionData, InteractionType};
use twilight_model::gateway::event::{Event, EventType};
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::guild::Permissions;

/// Routes every inbound interaction to the command registry: command
/// invocations go through the authorization-and-execute pipeline, autocomplete
/// queries go straight to the command's suggestion responder, and anything
/// else (components, modals, pings) is not this handler's concern.
pub struct InteractionCreateEvent {
	context: Arc<ClientContext>,
	commands: Arc<CommandRegistry>,
}

pub fn factory(load_context: &LoadContext) -> miette::Result<Box<dyn GatewayEvent>> {
	Ok(Box::new(InteractionCreateEvent {
		context: Arc::clone(&load_context.client),
		commands: Arc::clone(&load_context.commands),
	}))
}

#[async_trait]
impl GatewayEvent for InteractionCreateEvent {
	fn event_type(&self) -> EventType {
		EventType::InteractionCreate
	}

	async fn handle(&self, event: &Event) -> miette::Result<()> {
		let Event::InteractionCreate(interaction) = event else {
			return Ok(());
		};
		let Some(InteractionData::ApplicationCommand(command_data)) = &interaction.data else {
			return Ok(());
		};
		match interaction.kind {
			InteractionType::ApplicationCommand => self.route_command(interaction, command_data).await,
			InteractionType::ApplicationCommandAutocomplete => {
				self.route_autocomplete(interaction, command_data).await
			}
			_ => Ok(()),
		}
	}
}

impl InteractionCreateEvent {
	async fn route_command(
		&self,
		interaction: &InteractionCreate,
		command_data: &CommandData,
	) -> miette::Result<()> {
		let invocation = Invocation::new(interaction, &self.context.http, self.context.application_id);

		let Some(command) = self.commands.get(&command_data.name) else {
			invocation
				.reply_ephemeral(&responses::unknown_command_message(&command_data.name))
				.await?;
			return Ok(());
		};

		let request = AccessRequest {
			invoker: interaction.author_id(),
			owner: self.context.owner,
			permissions: member_permissions(interaction),
			guild: interaction.guild_id,
			channel: interaction.channel.as_ref().map(|channel| channel.id),
		};

		if let Err(error) = dispatch::execute(command, &invocation, &request).await {
			tracing::error!(source = ?error, command = %command_data.name, "An error occurred while executing a command");
			let message = responses::command_failure_message(&command_data.name);
			// Exactly one user-visible acknowledgment must go out: a follow-up
			// when the command already responded or deferred, the initial
			// reply otherwise.
			if invocation.acknowledged() {
				invocation.follow_up_ephemeral(&message).await?;
			} else {
				invocation.reply_ephemeral(&message).await?;
			}
		}
		Ok(())
	}

	async fn route_autocomplete(
		&self,
		interaction: &InteractionCreate,
		command_data: &CommandData,
	) -> miette::Result<()> {
		let invocation = Invocation::new(interaction, &self.context.http, self.context.application_id);
		match self.commands.get(&command_data.name) {
			Some(command) => command.autocomplete(&invocation).await,
			// An unknown name shouldn't error noisily while the user is still
			// typing; an empty suggestion list is the correct answer.
			None => invocation.respond_with_suggestions(Vec::new()).await,
		}
	}
}

fn member_permissions(interaction: &InteractionCreate) -> Permissions {
	interaction
		.member
		.as_ref()
		.and_then(|member| member.permissions)
		.unwrap_or_else(Permissions::empty)
}
