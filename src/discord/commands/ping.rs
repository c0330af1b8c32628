// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::command::Command;
use crate::discord::context::ClientContext;
use crate::discord::invocation::Invocation;
use async_trait::async_trait;
use std::sync::Arc;

pub struct PingCommand;

pub fn factory(_context: Arc<ClientContext>) -> miette::Result<Box<dyn Command>> {
	Ok(Box::new(PingCommand))
}

#[async_trait]
impl Command for PingCommand {
	fn name(&self) -> &str {
		"ping"
	}

	fn description(&self) -> &str {
		"Checks that the bot is responding"
	}

	fn is_global(&self) -> bool {
		true
	}

	async fn run(&self, invocation: &Invocation<'_>) -> miette::Result<()> {
		invocation.reply("Pong!").await
	}
}
