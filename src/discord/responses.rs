// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub const OWNER_ONLY_DENIAL: &str = "You do not have permission to use this command.";
pub const MISSING_PERMISSIONS_DENIAL: &str = "You do not have the required permissions to run this command.";
pub const GUILD_DENIAL: &str = "This command is not allowed in this guild.";
pub const CHANNEL_DENIAL: &str = "This command is not allowed in this channel.";

pub fn unknown_command_message(command_name: &str) -> String {
	format!(
		"There was an error while executing the /{} command! (command doesn't exist)",
		command_name
	)
}

pub fn command_failure_message(command_name: &str) -> String {
	format!("There was an error while executing the /{} command!", command_name)
}
