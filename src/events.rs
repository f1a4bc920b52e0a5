//! Event emission toward a caller-supplied handler.
//!
//! Dispatch is synchronous and fire-and-forget: the handler runs once per
//! emitted event and nothing is returned from it.

use crate::error::{ContractError, Result};
use crate::spec::ComponentSpec;

use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmittedEvent {
    pub component: String,
    pub event: String,
    pub payload: Value,
}

pub trait EventHandler {
    fn handle(&mut self, event: &EmittedEvent);
}

impl<F> EventHandler for F
where
    F: FnMut(&EmittedEvent),
{
    fn handle(&mut self, event: &EmittedEvent) {
        self(event)
    }
}

/// Binds one component contract to a handler.
pub struct Emitter<'a, H: EventHandler> {
    spec: &'a ComponentSpec,
    handler: H,
}

impl<'a, H: EventHandler> Emitter<'a, H> {
    pub fn new(spec: &'a ComponentSpec, handler: H) -> Self {
        Self { spec, handler }
    }

    /// Dispatch `event` if the component declares it.
    ///
    /// Payloads are passed as-is; the contract only describes their shape.
    pub fn emit(&mut self, event: &str, payload: Value) -> Result<()> {
        let Some(declared) = self.spec.event(event) else {
            return Err(ContractError::UnknownEvent {
                component: self.spec.name.clone(),
                event: event.to_string(),
            });
        };

        tracing::debug!(
            component = %self.spec.name,
            event,
            payload_shape = %declared.payload,
            "emit"
        );

        self.handler.handle(&EmittedEvent {
            component: self.spec.name.clone(),
            event: declared.name.clone(),
            payload,
        });
        Ok(())
    }
}
