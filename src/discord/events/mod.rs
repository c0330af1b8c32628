// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::discord::loader::EventFactory;

mod interaction_create;
mod ready;

/// Every event handler the bot binds at startup. New handlers are added here
/// and nowhere else.
pub fn event_manifest() -> &'static [EventFactory] {
	&[ready::factory, interaction_create::factory]
}
