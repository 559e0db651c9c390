//! Application lifecycle.
//!
//! The host delivers [`HostEvent`]s through a [`HostEventSource`]; the
//! [`ApplicationController`] turns them into renderer construction and
//! teardown and draws between polls.

mod app;
mod controller;

pub use app::{AppControl, HostEvent, HostEventSource};
pub use controller::{ApplicationController, ControllerState};
