#![allow(clippy::needless_pass_by_value)]

#[cfg(target_arch = "wasm32")]
mod wasm_constants;
#[cfg(target_arch = "wasm32")]
mod wasm_state;

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use gloo_net::http::Request;
    use gloo_timers::callback::{Interval, Timeout};
    use tgforward_client_core::suggestions::{
        append_suggestion, chat_suggestions, should_offer_suggestions,
    };
    use tgforward_client_core::{
        DashboardConfig, SubmitDecision, TaskStatusBatch, TaskStatusError, TaskStatusSnapshot,
        ToastKind, clean_chat_lines, confirmed_navigation, decide_submit, decode_task_statuses,
        rows_to_patch, validate_chat_lines,
    };
    use wasm_bindgen::JsCast;
    use wasm_bindgen::prelude::*;
    use wasm_bindgen_futures::{JsFuture, spawn_local};
    use web_sys::{
        Document, Element, HtmlAnchorElement, HtmlButtonElement, HtmlElement, HtmlFormElement,
        HtmlTextAreaElement,
    };

    use crate::wasm_constants::*;
    use crate::wasm_state::{Behavior, ListenerHandle, PageContext, PageDiagnostics};

    mod chat_input;
    mod confirm;
    mod dom;
    mod feedback;
    mod forms;
    mod lifecycle;
    mod poller;

    use chat_input::*;
    use confirm::*;
    use dom::*;
    use feedback::*;
    use forms::*;
    use lifecycle::*;
    use poller::*;

    thread_local! {
        static PAGE: RefCell<Option<PageContext>> = const { RefCell::new(None) };
        static CONFIG: RefCell<DashboardConfig> = RefCell::new(DashboardConfig::default());
        static DIAGNOSTICS: RefCell<PageDiagnostics> = RefCell::new(PageDiagnostics::default());
    }

    #[wasm_bindgen(start)]
    pub fn start() {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::default());
        if let Err(error) = mount_when_ready() {
            log::error!("dashboard behaviors failed to start: {error}");
        }
    }

    #[wasm_bindgen]
    pub fn page_state_json() -> String {
        DIAGNOSTICS.with(|state| {
            serde_json::to_string(&*state.borrow()).unwrap_or_else(|_| "{}".to_string())
        })
    }

    /// Wires the page again after `unmount`. A mounted page is left as is.
    #[wasm_bindgen]
    pub fn mount_page() -> Result<(), JsValue> {
        document()
            .and_then(|document| mount(&document))
            .map_err(|error| JsValue::from_str(&error))
    }

    /// Detaches every listener and stops status polling. Must not be called
    /// from inside one of the page's own event handlers.
    #[wasm_bindgen]
    pub fn unmount() {
        let context = PAGE.with(|page| page.borrow_mut().take());
        drop(context);
        DIAGNOSTICS.with(|state| *state.borrow_mut() = PageDiagnostics::default());
    }

    #[wasm_bindgen]
    pub fn copy_to_clipboard(text: String) {
        spawn_local(async move {
            copy_text(text).await;
        });
    }

    #[wasm_bindgen]
    pub fn show_toast(message: String, kind: Option<String>) {
        let kind = kind.as_deref().map(ToastKind::parse).unwrap_or_default();
        if let Err(error) = present_toast(&message, kind) {
            log::error!("failed to show toast: {error}");
        }
    }

    #[wasm_bindgen]
    pub fn register_form(form: HtmlFormElement) -> Result<(), JsValue> {
        with_page(|context| guard_form(context, form)).map_err(|error| JsValue::from_str(&error))
    }

    #[wasm_bindgen]
    pub fn register_chat_field(field: HtmlTextAreaElement) -> Result<(), JsValue> {
        with_page(|context| watch_chat_field(context, field))
            .map_err(|error| JsValue::from_str(&error))
    }

    #[wasm_bindgen]
    pub fn register_confirm_link(link: HtmlAnchorElement) -> Result<(), JsValue> {
        with_page(|context| guard_confirm_link(context, link))
            .map_err(|error| JsValue::from_str(&error))
    }

    #[wasm_bindgen]
    pub fn attach_chat_suggestions(field: HtmlTextAreaElement) -> Result<(), JsValue> {
        with_page(|context| offer_chat_suggestions(context, field))
            .map_err(|error| JsValue::from_str(&error))
    }

    #[wasm_bindgen]
    pub fn refresh_task_statuses() {
        spawn_local(poll_task_statuses());
    }

    fn with_page<T>(f: impl FnOnce(&mut PageContext) -> Result<T, String>) -> Result<T, String> {
        PAGE.with(|page| {
            let mut page = page.borrow_mut();
            let context = page
                .as_mut()
                .ok_or_else(|| "dashboard behaviors are not mounted".to_string())?;
            let result = f(context);
            refresh_binding_counts(context);
            result
        })
    }

    fn current_config() -> DashboardConfig {
        CONFIG.with(|config| config.borrow().clone())
    }
}
