use gloo_timers::callback::Interval;
use serde::Serialize;
use tgforward_client_core::DashboardConfig;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::Closure;

/// An attached DOM listener. Dropping the handle detaches it.
pub(crate) struct ListenerHandle {
    target: web_sys::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web_sys::Event)>,
}

impl ListenerHandle {
    pub(crate) fn attach(
        target: &web_sys::EventTarget,
        event: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, String> {
        let callback = Closure::<dyn FnMut(web_sys::Event)>::wrap(Box::new(handler));
        target
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|_| format!("failed to attach {event} listener"))?;
        Ok(Self {
            target: target.clone(),
            event,
            callback,
        })
    }
}

impl Drop for ListenerHandle {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Behavior {
    FormGuard,
    ChatInput,
    ChatSuggestions,
    ConfirmGuard,
}

/// Everything one page load wires up. Dropping the context detaches every
/// listener and stops status polling.
pub(crate) struct PageContext {
    pub(crate) config: DashboardConfig,
    pub(crate) bindings: Vec<(Behavior, web_sys::Element)>,
    pub(crate) listeners: Vec<ListenerHandle>,
    pub(crate) status_poll: Option<Interval>,
}

impl PageContext {
    pub(crate) fn new(config: DashboardConfig) -> Self {
        Self {
            config,
            bindings: Vec::new(),
            listeners: Vec::new(),
            status_poll: None,
        }
    }

    pub(crate) fn is_bound(&self, behavior: Behavior, element: &web_sys::Element) -> bool {
        self.bindings
            .iter()
            .any(|(bound, existing)| *bound == behavior && existing == element)
    }

    /// Records the binding, or returns false when the element already has it.
    pub(crate) fn bind(&mut self, behavior: Behavior, element: &web_sys::Element) -> bool {
        if self.is_bound(behavior, element) {
            return false;
        }
        self.bindings.push((behavior, element.clone()));
        true
    }

    pub(crate) fn bound_count(&self, behavior: Behavior) -> usize {
        self.bindings
            .iter()
            .filter(|(bound, _)| *bound == behavior)
            .count()
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub(crate) struct PageDiagnostics {
    pub(crate) mounted: bool,
    pub(crate) forms: usize,
    pub(crate) chat_fields: usize,
    pub(crate) suggestion_fields: usize,
    pub(crate) confirm_links: usize,
    pub(crate) tooltips: usize,
    pub(crate) alerts_scheduled: usize,
    pub(crate) polling: bool,
    pub(crate) polls_started: u64,
    pub(crate) polls_failed: u64,
    pub(crate) rows_patched: u64,
    pub(crate) last_poll_error: Option<String>,
}
