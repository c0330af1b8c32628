// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ConfigDocument;
use chrono::{DateTime, Utc};
use mongodb::Database;
use std::sync::Arc;
use twilight_http::client::Client;
use twilight_model::id::Id;
use twilight_model::id::marker::{ApplicationMarker, UserMarker};

/// Shared state handed to every command and event handler when it's
/// constructed. There is exactly one per process; handlers read from it and
/// make calls through it but never replace anything in it.
pub struct ClientContext {
	pub http: Arc<Client>,
	pub application_id: Id<ApplicationMarker>,
	pub owner: Id<UserMarker>,
	pub config: Arc<ConfigDocument>,
	pub database: Database,
	pub started_at: DateTime<Utc>,
}
