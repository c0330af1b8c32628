// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use miette::IntoDiagnostic;
use std::sync::atomic::{AtomicBool, Ordering};
use twilight_http::client::Client;
use twilight_model::application::command::CommandOptionChoice;
use twilight_model::channel::message::MessageFlags;
use twilight_model::gateway::payload::incoming::InteractionCreate;
use twilight_model::http::interaction::{InteractionResponse, InteractionResponseType};
use twilight_model::id::Id;
use twilight_model::id::marker::ApplicationMarker;
use twilight_util::builder::InteractionResponseDataBuilder;

/// One in-flight interaction and the reply surface for it.
///
/// Tracks whether an initial response has already been sent so the router can
/// pick between a reply and a follow-up when reporting a failure. Discord
/// rejects a second initial response, so exactly one path must be taken.
pub struct Invocation<'a> {
	interaction: &'a InteractionCreate,
	http: &'a Client,
	application_id: Id<ApplicationMarker>,
	acknowledged: AtomicBool,
}

impl<'a> Invocation<'a> {
	pub fn new(interaction: &'a InteractionCreate, http: &'a Client, application_id: Id<ApplicationMarker>) -> Self {
		Self {
			interaction,
			http,
			application_id,
			acknowledged: AtomicBool::new(false),
		}
	}

	/// Whether an initial response (message or deferral) has been sent.
	pub fn acknowledged(&self) -> bool {
		self.acknowledged.load(Ordering::SeqCst)
	}

	/// Sends the initial response, visible to everyone in the channel.
	pub async fn reply(&self, content: &str) -> miette::Result<()> {
		self.respond_with_message(content, MessageFlags::empty()).await
	}

	/// Sends the initial response, visible only to the invoker.
	pub async fn reply_ephemeral(&self, content: &str) -> miette::Result<()> {
		self.respond_with_message(content, MessageFlags::EPHEMERAL).await
	}

	/// Defers the initial response so a slow command can follow up later.
	pub async fn defer_ephemeral(&self) -> miette::Result<()> {
		let data = InteractionResponseDataBuilder::new().flags(MessageFlags::EPHEMERAL).build();
		let response = InteractionResponse {
			kind: InteractionResponseType::DeferredChannelMessageWithSource,
			data: Some(data),
		};
		self.create_response(&response).await
	}

	/// Sends an ephemeral follow-up to an already-acknowledged interaction.
	pub async fn follow_up_ephemeral(&self, content: &str) -> miette::Result<()> {
		self.http
			.interaction(self.application_id)
			.create_followup(&self.interaction.token)
			.content(content)
			.flags(MessageFlags::EPHEMERAL)
			.await
			.into_diagnostic()?;
		Ok(())
	}

	/// Answers an autocomplete interaction with the given suggestions.
	pub async fn respond_with_suggestions(&self, suggestions: Vec<CommandOptionChoice>) -> miette::Result<()> {
		let data = InteractionResponseDataBuilder::new().choices(suggestions).build();
		let response = InteractionResponse {
			kind: InteractionResponseType::ApplicationCommandAutocompleteResult,
			data: Some(data),
		};
		self.create_response(&response).await
	}

	async fn respond_with_message(&self, content: &str, flags: MessageFlags) -> miette::Result<()> {
		let mut data = InteractionResponseDataBuilder::new().content(content);
		if !flags.is_empty() {
			data = data.flags(flags);
		}
		let response = InteractionResponse {
			kind: InteractionResponseType::ChannelMessageWithSource,
			data: Some(data.build()),
		};
		self.create_response(&response).await
	}

	async fn create_response(&self, response: &InteractionResponse) -> miette::Result<()> {
		self.http
			.interaction(self.application_id)
			.create_response(self.interaction.id, &self.interaction.token, response)
			.await
			.into_diagnostic()?;
		self.acknowledged.store(true, Ordering::SeqCst);
		Ok(())
	}
}
