// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::command::Command;
use super::invocation::Invocation;
use super::responses;
use twilight_model::guild::Permissions;
use twilight_model::id::Id;
use twilight_model::id::marker::{ChannelMarker, GuildMarker, UserMarker};

/// Identity and origin of one command invocation, gathered before the
/// authorization chain runs.
pub struct AccessRequest {
	pub invoker: Option<Id<UserMarker>>,
	pub owner: Id<UserMarker>,
	pub permissions: Permissions,
	pub guild: Option<Id<GuildMarker>>,
	pub channel: Option<Id<ChannelMarker>>,
}

#[derive(Debug, Eq, PartialEq)]
pub enum AccessDecision {
	Allowed,
	Denied(DenialReason),
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DenialReason {
	NotOwner,
	MissingPermissions,
	GuildNotAllowed,
	ChannelNotAllowed,
}

impl DenialReason {
	pub fn user_message(self) -> &'static str {
		match self {
			Self::NotOwner => responses::OWNER_ONLY_DENIAL,
			Self::MissingPermissions => responses::MISSING_PERMISSIONS_DENIAL,
			Self::GuildNotAllowed => responses::GUILD_DENIAL,
			Self::ChannelNotAllowed => responses::CHANNEL_DENIAL,
		}
	}
}

/// Runs the authorization chain for one invocation of a command.
///
/// The checks run in a fixed order (owner, permissions, guild, channel) and
/// the first failing check wins; later checks are never evaluated. The chain
/// is synchronous and does no I/O.
pub fn authorize(command: &dyn Command, request: &AccessRequest) -> AccessDecision {
	if command.owner_only() && request.invoker != Some(request.owner) {
		return AccessDecision::Denied(DenialReason::NotOwner);
	}

	let required_permissions = command.required_permissions();
	if !required_permissions.is_empty() && !request.permissions.contains(required_permissions) {
		return AccessDecision::Denied(DenialReason::MissingPermissions);
	}

	let allowed_guilds = command.allowed_guilds();
	if !allowed_guilds.is_empty() && !request.guild.is_some_and(|guild| allowed_guilds.contains(&guild)) {
		return AccessDecision::Denied(DenialReason::GuildNotAllowed);
	}

	let allowed_channels = command.allowed_channels();
	if !allowed_channels.is_empty() && !request.channel.is_some_and(|channel| allowed_channels.contains(&channel)) {
		return AccessDecision::Denied(DenialReason::ChannelNotAllowed);
	}

	AccessDecision::Allowed
}

/// Authorizes and runs a command. A denial is a normal outcome reported to the
/// invoker as an ephemeral message; only failures raised by the command's own
/// logic (or by sending the denial) propagate to the caller.
pub async fn execute(
	command: &dyn Command,
	invocation: &Invocation<'_>,
	request: &AccessRequest,
) -> miette::Result<()> {
	match authorize(command, request) {
		AccessDecision::Allowed => command.run(invocation).await,
		AccessDecision::Denied(reason) => invocation.reply_ephemeral(reason.user_message()).await,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use async_trait::async_trait;
	use miette::bail;
	use std::sync::Arc;
	use std::sync::atomic::{AtomicUsize, Ordering};
	use twilight_model::gateway::payload::incoming::InteractionCreate;

	struct RestrictedCommand {
		owner_only: bool,
		required_permissions: Permissions,
		allowed_guilds: Vec<Id<GuildMarker>>,
		allowed_channels: Vec<Id<ChannelMarker>>,
	}

	impl Default for RestrictedCommand {
		fn default() -> Self {
			Self {
				owner_only: false,
				required_permissions: Permissions::empty(),
				allowed_guilds: Vec::new(),
				allowed_channels: Vec::new(),
			}
		}
	}

	#[async_trait]
	impl Command for RestrictedCommand {
		fn name(&self) -> &str {
			"restricted"
		}

		fn description(&self) -> &str {
			"test command"
		}

		fn owner_only(&self) -> bool {
			self.owner_only
		}

		fn required_permissions(&self) -> Permissions {
			self.required_permissions
		}

		fn allowed_guilds(&self) -> &[Id<GuildMarker>] {
			&self.allowed_guilds
		}

		fn allowed_channels(&self) -> &[Id<ChannelMarker>] {
			&self.allowed_channels
		}

		async fn run(&self, _invocation: &Invocation<'_>) -> miette::Result<()> {
			Ok(())
		}
	}

	const OWNER: u64 = 100;
	const INVOKER: u64 = 200;

	fn request() -> AccessRequest {
		AccessRequest {
			invoker: Some(Id::new(INVOKER)),
			owner: Id::new(OWNER),
			permissions: Permissions::empty(),
			guild: None,
			channel: None,
		}
	}

	struct CountingCommand {
		owner_only: bool,
		fails: bool,
		calls: Arc<AtomicUsize>,
	}

	impl CountingCommand {
		fn new(owner_only: bool, fails: bool) -> (Self, Arc<AtomicUsize>) {
			let calls = Arc::new(AtomicUsize::new(0));
			let command = Self {
				owner_only,
				fails,
				calls: Arc::clone(&calls),
			};
			(command, calls)
		}
	}

	#[async_trait]
	impl Command for CountingCommand {
		fn name(&self) -> &str {
			"counting"
		}

		fn description(&self) -> &str {
			"test command"
		}

		fn owner_only(&self) -> bool {
			self.owner_only
		}

		async fn run(&self, _invocation: &Invocation<'_>) -> miette::Result<()> {
			self.calls.fetch_add(1, Ordering::SeqCst);
			if self.fails {
				bail!("run failure");
			}
			Ok(())
		}
	}

	// The deserialized form avoids spelling out every interaction field; the
	// HTTP client never sends anything on the paths these tests take.
	fn test_interaction() -> InteractionCreate {
		serde_json::from_str(
			r#"{"application_id":"1","authorizing_integration_owners":{},"data":{"id":"3","name":"counting","type":1},"id":"2","type":2,"token":"interaction-token"}"#,
		)
			.expect("interaction deserializes")
	}

	#[test]
	fn unrestricted_command_is_allowed_from_anywhere() {
		let command = RestrictedCommand::default();
		assert_eq!(authorize(&command, &request()), AccessDecision::Allowed);

		let anonymous = AccessRequest {
			invoker: None,
			..request()
		};
		assert_eq!(authorize(&command, &anonymous), AccessDecision::Allowed);
	}

	#[test]
	fn owner_only_command_rejects_non_owner() {
		let command = RestrictedCommand {
			owner_only: true,
			..Default::default()
		};
		assert_eq!(
			authorize(&command, &request()),
			AccessDecision::Denied(DenialReason::NotOwner)
		);
	}

	#[test]
	fn owner_only_command_allows_the_owner() {
		let command = RestrictedCommand {
			owner_only: true,
			..Default::default()
		};
		let owner_request = AccessRequest {
			invoker: Some(Id::new(OWNER)),
			..request()
		};
		assert_eq!(authorize(&command, &owner_request), AccessDecision::Allowed);
	}

	#[test]
	fn missing_permissions_are_rejected() {
		let command = RestrictedCommand {
			required_permissions: Permissions::KICK_MEMBERS | Permissions::BAN_MEMBERS,
			..Default::default()
		};
		let partial = AccessRequest {
			permissions: Permissions::KICK_MEMBERS,
			..request()
		};
		assert_eq!(
			authorize(&command, &partial),
			AccessDecision::Denied(DenialReason::MissingPermissions)
		);
	}

	#[test]
	fn superset_of_required_permissions_is_allowed() {
		let command = RestrictedCommand {
			required_permissions: Permissions::KICK_MEMBERS,
			..Default::default()
		};
		let full = AccessRequest {
			permissions: Permissions::KICK_MEMBERS | Permissions::MANAGE_GUILD,
			..request()
		};
		assert_eq!(authorize(&command, &full), AccessDecision::Allowed);
	}

	#[test]
	fn guild_allow_list_rejects_other_guilds() {
		let command = RestrictedCommand {
			allowed_guilds: vec![Id::new(1)],
			..Default::default()
		};
		let other_guild = AccessRequest {
			guild: Some(Id::new(2)),
			..request()
		};
		assert_eq!(
			authorize(&command, &other_guild),
			AccessDecision::Denied(DenialReason::GuildNotAllowed)
		);

		let listed_guild = AccessRequest {
			guild: Some(Id::new(1)),
			..request()
		};
		assert_eq!(authorize(&command, &listed_guild), AccessDecision::Allowed);
	}

	#[test]
	fn guild_allow_list_rejects_invocations_outside_any_guild() {
		let command = RestrictedCommand {
			allowed_guilds: vec![Id::new(1)],
			..Default::default()
		};
		assert_eq!(
			authorize(&command, &request()),
			AccessDecision::Denied(DenialReason::GuildNotAllowed)
		);
	}

	#[test]
	fn channel_allow_list_rejects_other_channels() {
		let command = RestrictedCommand {
			allowed_channels: vec![Id::new(7)],
			..Default::default()
		};
		let other_channel = AccessRequest {
			channel: Some(Id::new(8)),
			..request()
		};
		assert_eq!(
			authorize(&command, &other_channel),
			AccessDecision::Denied(DenialReason::ChannelNotAllowed)
		);

		let listed_channel = AccessRequest {
			channel: Some(Id::new(7)),
			..request()
		};
		assert_eq!(authorize(&command, &listed_channel), AccessDecision::Allowed);
	}

	#[test]
	fn owner_check_runs_before_guild_check() {
		let command = RestrictedCommand {
			owner_only: true,
			allowed_guilds: vec![Id::new(1)],
			..Default::default()
		};
		let non_owner_wrong_guild = AccessRequest {
			guild: Some(Id::new(2)),
			..request()
		};
		assert_eq!(
			authorize(&command, &non_owner_wrong_guild),
			AccessDecision::Denied(DenialReason::NotOwner)
		);
	}

	#[test]
	fn permission_check_runs_before_channel_check() {
		let command = RestrictedCommand {
			required_permissions: Permissions::MANAGE_GUILD,
			allowed_channels: vec![Id::new(7)],
			..Default::default()
		};
		let wrong_everything = AccessRequest {
			channel: Some(Id::new(8)),
			..request()
		};
		assert_eq!(
			authorize(&command, &wrong_everything),
			AccessDecision::Denied(DenialReason::MissingPermissions)
		);
	}

	#[tokio::test]
	async fn execute_runs_an_allowed_command_exactly_once() {
		let (command, calls) = CountingCommand::new(false, false);
		let http = twilight_http::client::Client::new(String::from("test-token"));
		let interaction = test_interaction();
		let invocation = Invocation::new(&interaction, &http, Id::new(1));

		let result = execute(&command, &invocation, &request()).await;

		assert!(result.is_ok());
		assert_eq!(calls.load(Ordering::SeqCst), 1);
		assert!(!invocation.acknowledged());
	}

	#[tokio::test]
	async fn execute_propagates_run_failures() {
		let (command, calls) = CountingCommand::new(false, true);
		let http = twilight_http::client::Client::new(String::from("test-token"));
		let interaction = test_interaction();
		let invocation = Invocation::new(&interaction, &http, Id::new(1));

		let result = execute(&command, &invocation, &request()).await;

		assert!(result.is_err());
		assert_eq!(calls.load(Ordering::SeqCst), 1);
		// The router picks its failure reply path from this flag, so a failed
		// run must leave the interaction unacknowledged.
		assert!(!invocation.acknowledged());
	}

	#[tokio::test]
	async fn execute_never_runs_a_denied_command() {
		let (command, calls) = CountingCommand::new(true, false);
		let http = twilight_http::client::Client::new(String::from("test-token"));
		let interaction = test_interaction();
		let invocation = Invocation::new(&interaction, &http, Id::new(1));

		// The denial reply has no live gateway to go to; only the run count
		// matters here.
		let _ = execute(&command, &invocation, &request()).await;

		assert_eq!(calls.load(Ordering::SeqCst), 0);
	}
}
