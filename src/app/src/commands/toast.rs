//! Toast command definitions.
//!
//! These types define the interface between the Core and the Shell for
//! transient user notifications. The shell decides how a toast looks and how
//! long it stays; the core only hands over the text.

use crux_core::{capability::Operation, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Notifications the Shell needs to show
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ToastOperation {
    Success { message: String },
}

impl Operation for ToastOperation {
    type Output = ();
}

/// Command-based Toast API
pub struct Toast<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Toast<Effect, Event>
where
    Effect: Send + From<crux_core::Request<ToastOperation>> + 'static,
    Event: Send + 'static,
{
    /// Show a success notification; nothing is sent back to the core
    pub fn success(message: impl Into<String>) -> Command<Effect, Event> {
        Command::notify_shell(ToastOperation::Success {
            message: message.into(),
        })
        .into()
    }
}
