// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use twilight_model::gateway::event::{Event, EventType};

/// One subscription to a gateway event.
#[async_trait]
pub trait GatewayEvent: Send + Sync {
	/// Gateway event this handler is bound to.
	fn event_type(&self) -> EventType;

	/// One-shot handlers stop receiving the event after their first firing.
	fn once(&self) -> bool {
		false
	}

	async fn handle(&self, event: &Event) -> miette::Result<()>;
}

struct Binding {
	event_type: EventType,
	once: bool,
	fired: AtomicBool,
	handler: Box<dyn GatewayEvent>,
}

/// Holds every bound event handler and delivers gateway events to them.
/// Bindings are added only during startup loading; dispatch afterward needs no
/// locking beyond the per-binding fired flag.
#[derive(Default)]
pub struct EventBinder {
	bindings: Vec<Binding>,
}

impl EventBinder {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn bind(&mut self, handler: Box<dyn GatewayEvent>) {
		let event_type = handler.event_type();
		let once = handler.once();
		self.bindings.push(Binding {
			event_type,
			once,
			fired: AtomicBool::new(false),
			handler,
		});
	}

	pub fn len(&self) -> usize {
		self.bindings.len()
	}

	pub fn is_empty(&self) -> bool {
		self.bindings.is_empty()
	}

	/// Invokes every binding attached to the event's type. A handler that
	/// fails is logged and does not stop delivery to the remaining bindings.
	pub async fn dispatch(&self, event: &Event) {
		let kind = event.kind();
		for binding in self.bindings.iter().filter(|binding| binding.event_type == kind) {
			if binding.once && binding.fired.swap(true, Ordering::SeqCst) {
				continue;
			}
			if let Err(error) = binding.handler.handle(event).await {
				tracing::error!(source = ?error, event_type = ?kind, "An error occurred handling a gateway event");
			}
		}
	}
}
