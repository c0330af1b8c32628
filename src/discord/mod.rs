// © 2025 ElementalAlchemist and the Dainsleif Mains Development Team
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod command;
pub mod commands;
pub mod connection;
pub mod context;
pub mod dispatch;
pub mod event;
pub mod events;
pub mod invocation;
pub mod loader;
pub mod registry;
pub mod responses;

pub use connection::{run_bot, set_up_client};
