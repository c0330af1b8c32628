// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::command::Command;
use std::collections::HashMap;
use twilight_model::application::command::Command as CommandModel;

/// Lookup table from command name to command. Built once by the loader during
/// startup; the dispatch path only ever reads it.
#[derive(Default)]
pub struct CommandRegistry {
	commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers a command under its declared name. A duplicate name replaces
	/// the earlier entry; last-loaded wins.
	pub fn set(&mut self, command: Box<dyn Command>) {
		let name = command.name().to_string();
		if self.commands.contains_key(&name) {
			tracing::warn!(command = %name, "Duplicate command name; the later registration replaces the earlier one");
		}
		self.commands.insert(name, command);
	}

	pub fn get(&self, name: &str) -> Option<&dyn Command> {
		self.commands.get(name).map(|command| command.as_ref())
	}

	pub fn values(&self) -> impl Iterator<Item = &dyn Command> {
		self.commands.values().map(|command| command.as_ref())
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}

	/// Command definitions for the publication step, split into those pushed
	/// globally and those pushed to the development guild.
	pub fn definitions(&self) -> (Vec<CommandModel>, Vec<CommandModel>) {
		let mut global_commands = Vec::new();
		let mut guild_commands = Vec::new();
		for command in self.values() {
			if command.is_global() {
				global_commands.push(command.definition());
			} else {
				guild_commands.push(command.definition());
			}
		}
		(global_commands, guild_commands)
	}
}
