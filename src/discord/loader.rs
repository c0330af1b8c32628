// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::command::CommandFactory;
use super::context::ClientContext;
use super::event::{EventBinder, GatewayEvent};
use super::registry::CommandRegistry;
use miette::bail;
use std::sync::Arc;

/// Constructor for one event handler, listed in the event manifest.
pub type EventFactory = fn(&LoadContext) -> miette::Result<Box<dyn GatewayEvent>>;

/// Everything available to event factories at load time. Commands are loaded
/// before events, so event handlers can hold the finished command registry.
pub struct LoadContext {
	pub client: Arc<ClientContext>,
	pub commands: Arc<CommandRegistry>,
}

/// Builds the command registry from the manifest.
///
/// A factory that fails, or a command that declares an empty name, is logged
/// and skipped without affecting the rest of the manifest. An empty manifest
/// means the bot could never do anything, so it aborts startup.
pub fn load_commands(context: &Arc<ClientContext>, manifest: &[CommandFactory]) -> miette::Result<CommandRegistry> {
	if manifest.is_empty() {
		bail!("The command manifest is empty; no commands could be registered");
	}

	let mut registry = CommandRegistry::new();
	for factory in manifest {
		let command = match factory(Arc::clone(context)) {
			Ok(command) => command,
			Err(error) => {
				tracing::error!(source = ?error, "Skipping a command that failed to construct");
				continue;
			}
		};
		if command.name().is_empty() {
			tracing::error!("Skipping a command that declares an empty name");
			continue;
		}
		let name = command.name().to_string();
		registry.set(command);
		tracing::info!(command = %name, "Loaded command");
	}
	Ok(registry)
}

/// Binds every event handler in the manifest. Follows the same skip-on-failure
/// policy as command loading.
pub fn load_events(context: &LoadContext, manifest: &[EventFactory]) -> miette::Result<EventBinder> {
	if manifest.is_empty() {
		bail!("The event manifest is empty; no event handlers could be bound");
	}

	let mut binder = EventBinder::new();
	for factory in manifest {
		let handler = match factory(context) {
			Ok(handler) => handler,
			Err(error) => {
				tracing::error!(source = ?error, "Skipping an event handler that failed to construct");
				continue;
			}
		};
		let event_type = handler.event_type();
		let once = handler.once();
		binder.bind(handler);
		tracing::info!(event_type = ?event_type, once, "Bound event handler");
	}
	Ok(binder)
}
