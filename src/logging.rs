// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::config::ConfigDocument;
use miette::{IntoDiagnostic, Result};
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::Layer;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Sets up log output to the console and to a daily-rotated file in the
/// configured log directory. The returned guard must be held for the life of
/// the process so buffered file output is flushed on shutdown.
pub fn set_up_logging(config: &ConfigDocument) -> Result<WorkerGuard> {
	let level = match &config.logging.level {
		Some(level) => level.parse::<LevelFilter>().into_diagnostic()?,
		None => LevelFilter::INFO,
	};
	let directory = config.logging.directory.as_deref().unwrap_or("logs");

	let file_appender = tracing_appender::rolling::daily(directory, "skyward-herald.log");
	let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

	tracing_subscriber::registry()
		.with(fmt::layer().with_filter(level))
		.with(fmt::layer().with_writer(file_writer).with_ansi(false).with_filter(level))
		.try_init()
		.into_diagnostic()?;

	Ok(guard)
}
