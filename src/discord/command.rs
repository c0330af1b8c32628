// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::context::ClientContext;
use super::invocation::Invocation;
use async_trait::async_trait;
use std::sync::Arc;
use twilight_model::application::command::{Command as CommandModel, CommandType};
use twilight_model::guild::Permissions;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker};
use twilight_util::builder::command::CommandBuilder;

/// Constructor for one command, listed in the command manifest. A factory that
/// fails is logged and skipped by the loader without affecting other entries.
pub type CommandFactory = fn(Arc<ClientContext>) -> miette::Result<Box<dyn Command>>;

/// One invocable action with its authorization metadata.
///
/// The metadata methods all have unrestricted defaults; a command overrides
/// only the restrictions it wants. Restriction checks run in the dispatch
/// module before `run` is ever called.
#[async_trait]
pub trait Command: Send + Sync {
	/// Name the command is registered and dispatched under. Must be unique
	/// across the registry and must not be empty.
	fn name(&self) -> &str;

	/// Human-readable summary shown in the platform's command picker.
	fn description(&self) -> &str;

	/// Definition pushed to Discord by the publication step.
	fn definition(&self) -> CommandModel {
		CommandBuilder::new(self.name(), self.description(), CommandType::ChatInput).build()
	}

	/// Restricts the command to the configured bot owner.
	fn owner_only(&self) -> bool {
		false
	}

	/// Permissions the invoker must hold. Empty means unrestricted.
	fn required_permissions(&self) -> Permissions {
		Permissions::empty()
	}

	/// Guilds the command may be invoked from. Empty means unrestricted.
	fn allowed_guilds(&self) -> &[Id<GuildMarker>] {
		&[]
	}

	/// Channels the command may be invoked from. Empty means unrestricted.
	fn allowed_channels(&self) -> &[Id<ChannelMarker>] {
		&[]
	}

	/// Whether the command is published globally rather than to the
	/// development guild. Affects publication scope only, never dispatch.
	fn is_global(&self) -> bool {
		false
	}

	/// Command-specific logic. Runs only after the authorization chain passes.
	async fn run(&self, invocation: &Invocation<'_>) -> miette::Result<()>;

	/// Suggestion responder for autocomplete interactions. Suggestions have no
	/// side effects, so no authorization applies to this path.
	async fn autocomplete(&self, invocation: &Invocation<'_>) -> miette::Result<()> {
		invocation.respond_with_suggestions(Vec::new()).await
	}
}
