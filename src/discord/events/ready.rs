// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::event::GatewayEvent;
use crate::discord::loader::LoadContext;
use async_trait::async_trait;
use twilight_model::gateway::event::{Event, EventType};

/// Logs the session once the gateway reports it established.
pub struct ReadyEvent;

pub fn factory(_context: &LoadContext) -> miette::Result<Box<dyn GatewayEvent>> {
	Ok(Box::new(ReadyEvent))
}

#[async_trait]
impl GatewayEvent for ReadyEvent {
	fn event_type(&self) -> EventType {
		EventType::Ready
	}

	fn once(&self) -> bool {
		true
	}

	async fn handle(&self, event: &Event) -> miette::Result<()> {
		let Event::Ready(ready) = event else {
			return Ok(());
		};
		tracing::info!(user = %ready.user.name, "Discord gateway session is ready");
		Ok(())
	}
}
