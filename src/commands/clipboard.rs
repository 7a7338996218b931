//! Clipboard command definitions.
//!
//! These types define the interface between the Core and the Shell for
//! clipboard access. The core only ever writes; reads stay with the shell.

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform for the clipboard
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClipboardOperation {
    Write { text: String },
}

// The output from clipboard operations (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum ClipboardResult {
    Written,
    Failed { message: String },
}

impl Operation for ClipboardOperation {
    type Output = ClipboardResult;
}

/// Command-based clipboard API
pub struct Clipboard<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> Clipboard<Effect, Event>
where
    Effect: Send + From<crux_core::Request<ClipboardOperation>> + 'static,
    Event: Send + 'static,
{
    /// Write text to the system clipboard
    pub fn write(text: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(ClipboardOperation::Write { text: text.into() })
    }
}

/// Request builder for clipboard operations
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: ClipboardOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<ClipboardOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: ClipboardOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Build the request into a Command RequestBuilder
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = ClipboardResult>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
