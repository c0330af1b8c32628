// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::command::Command;
use crate::discord::context::ClientContext;
use crate::discord::invocation::Invocation;
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

/// Owner-only diagnostic published to the development guild.
pub struct StatusCommand {
	context: Arc<ClientContext>,
}

pub fn factory(context: Arc<ClientContext>) -> miette::Result<Box<dyn Command>> {
	Ok(Box::new(StatusCommand { context }))
}

#[async_trait]
impl Command for StatusCommand {
	fn name(&self) -> &str {
		"status"
	}

	fn description(&self) -> &str {
		"Reports bot diagnostics"
	}

	fn owner_only(&self) -> bool {
		true
	}

	async fn run(&self, invocation: &Invocation<'_>) -> miette::Result<()> {
		// Deferred so gathering diagnostics can take longer than the initial
		// response window without losing the interaction.
		invocation.defer_ephemeral().await?;
		let uptime = Utc::now() - self.context.started_at;
		let message = format!(
			"Online since {} ({} minutes).",
			self.context.started_at.format("%Y-%m-%d %H:%M:%S UTC"),
			uptime.num_minutes()
		);
		invocation.follow_up_ephemeral(&message).await
	}
}
