// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ConfigDocument;
use miette::{IntoDiagnostic, Result};
use mongodb::bson::doc;
use mongodb::{Client, Database};

/// Connects to the configured MongoDB database. The driver connects lazily, so
/// a ping is issued here to surface connection problems at startup rather than
/// on the first command that touches the store.
pub async fn connect_db(config: &ConfigDocument) -> Result<Database> {
	tracing::info!(database = %config.database.name, "Connecting to MongoDB");
	let client = Client::with_uri_str(&config.database.uri).await.into_diagnostic()?;
	let database = client.database(&config.database.name);
	database.run_command(doc! { "ping": 1 }).await.into_diagnostic()?;
	tracing::info!(database = %config.database.name, "Connected to MongoDB");
	Ok(database)
}
