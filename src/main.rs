// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use skyward_herald::{config, database, discord, logging};
use std::sync::Arc;

#[tokio::main]
async fn main() -> miette::Result<()> {
	let config = Arc::new(config::parse_config("config.kdl").await?);
	let _logging_guard = logging::set_up_logging(&config)?;

	// Order matters: the store connection, then all handler registration,
	// must complete before the gateway starts delivering interactions.
	let database = database::connect_db(&config).await?;

	let http_client = discord::set_up_client(&config);
	discord::run_bot(config, database, http_client).await
}
