//! Host bridge capabilities
//!
//! The host may provide any subset of the bridge functions, or no bridge at
//! all. Every call reports whether it reached the host.

use std::fmt;

use serde_json::Value;

type CallToolFn = Box<dyn Fn(&str, Value)>;
type PayloadFn = Box<dyn Fn(Value)>;

/// Result of invoking a bridge capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BridgeOutcome {
    /// The host function was present and invoked
    Dispatched,
    /// No bridge, or the bridge lacks this function
    Unavailable,
}

impl BridgeOutcome {
    pub fn is_dispatched(self) -> bool {
        self == BridgeOutcome::Dispatched
    }
}

/// Functions and data the host exposes to a widget
#[derive(Default)]
pub struct HostBridge {
    call_tool: Option<CallToolFn>,
    post_message: Option<PayloadFn>,
    set_widget_state: Option<PayloadFn>,
    structured_content: Option<Value>,
}

impl HostBridge {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_call_tool(mut self, f: impl Fn(&str, Value) + 'static) -> Self {
        self.call_tool = Some(Box::new(f));
        self
    }

    pub fn with_post_message(mut self, f: impl Fn(Value) + 'static) -> Self {
        self.post_message = Some(Box::new(f));
        self
    }

    pub fn with_set_widget_state(mut self, f: impl Fn(Value) + 'static) -> Self {
        self.set_widget_state = Some(Box::new(f));
        self
    }

    pub fn with_structured_content(mut self, content: Value) -> Self {
        self.structured_content = Some(content);
        self
    }

    /// Tool output the host attached to this render, if any
    pub fn structured_content(&self) -> Option<&Value> {
        self.structured_content.as_ref()
    }
}

impl fmt::Debug for HostBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostBridge")
            .field("call_tool", &self.call_tool.is_some())
            .field("post_message", &self.post_message.is_some())
            .field("set_widget_state", &self.set_widget_state.is_some())
            .field("structured_content", &self.structured_content)
            .finish()
    }
}

/// Everything a widget may receive from its host
#[derive(Debug, Default)]
pub struct HostEnvironment {
    global_props: Option<Value>,
    bridge: Option<HostBridge>,
}

impl HostEnvironment {
    /// No props, no bridge
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn with_global_props(mut self, props: Value) -> Self {
        self.global_props = Some(props);
        self
    }

    pub fn with_bridge(mut self, bridge: HostBridge) -> Self {
        self.bridge = Some(bridge);
        self
    }

    pub fn global_props(&self) -> Option<&Value> {
        self.global_props.as_ref()
    }

    pub fn bridge(&self) -> Option<&HostBridge> {
        self.bridge.as_ref()
    }

    pub fn structured_content(&self) -> Option<&Value> {
        self.bridge.as_ref().and_then(HostBridge::structured_content)
    }

    pub fn call_tool(&self, name: &str, args: Value) -> BridgeOutcome {
        match self.bridge.as_ref().and_then(|b| b.call_tool.as_ref()) {
            Some(f) => {
                f(name, args);
                BridgeOutcome::Dispatched
            }
            None => BridgeOutcome::Unavailable,
        }
    }

    pub fn post_message(&self, payload: Value) -> BridgeOutcome {
        match self.bridge.as_ref().and_then(|b| b.post_message.as_ref()) {
            Some(f) => {
                f(payload);
                BridgeOutcome::Dispatched
            }
            None => BridgeOutcome::Unavailable,
        }
    }

    pub fn set_widget_state(&self, state: Value) -> BridgeOutcome {
        match self
            .bridge
            .as_ref()
            .and_then(|b| b.set_widget_state.as_ref())
        {
            Some(f) => {
                f(state);
                BridgeOutcome::Dispatched
            }
            None => BridgeOutcome::Unavailable,
        }
    }
}
