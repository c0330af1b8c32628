// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::command::CommandFactory;

mod ping;
mod status;

/// Every command the loader registers at startup. New commands are added here
/// and nowhere else.
pub fn command_manifest() -> &'static [CommandFactory] {
	&[ping::factory, status::factory]
}
