use super::*;

pub(super) fn mount_when_ready() -> Result<(), String> {
    let document = document()?;
    if document.ready_state() != "loading" {
        return mount(&document);
    }
    let ready = Closure::once_into_js(move || {
        let result = dom::document().and_then(|document| mount(&document));
        if let Err(error) = result {
            log::error!("dashboard behaviors failed to start: {error}");
        }
    });
    document
        .add_event_listener_with_callback("DOMContentLoaded", ready.unchecked_ref())
        .map_err(|_| "failed to wait for DOMContentLoaded".to_string())
}

pub(super) fn mount(document: &Document) -> Result<(), String> {
    if PAGE.with(|page| page.borrow().is_some()) {
        return Ok(());
    }

    let config = load_config();
    CONFIG.with(|slot| *slot.borrow_mut() = config.clone());
    inject_styles(document)?;

    let mut context = PageContext::new(config);
    let tooltips = init_tooltips(&context, document);
    let alerts_scheduled = schedule_alert_auto_hide(&context, document);
    guard_forms(&mut context, document);
    watch_chat_fields(&mut context, document);
    guard_confirm_links(&mut context, document);
    start_status_polling(&mut context, document);

    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.mounted = true;
        state.tooltips = tooltips;
        state.alerts_scheduled = alerts_scheduled;
    });
    refresh_binding_counts(&context);
    log::debug!(
        "dashboard mounted: {} forms, {} chat fields, {} confirm links",
        context.bound_count(Behavior::FormGuard),
        context.bound_count(Behavior::ChatInput),
        context.bound_count(Behavior::ConfirmGuard),
    );

    PAGE.with(|page| *page.borrow_mut() = Some(context));
    Ok(())
}

pub(super) fn refresh_binding_counts(context: &PageContext) {
    DIAGNOSTICS.with(|state| {
        let mut state = state.borrow_mut();
        state.forms = context.bound_count(Behavior::FormGuard);
        state.chat_fields = context.bound_count(Behavior::ChatInput);
        state.suggestion_fields = context.bound_count(Behavior::ChatSuggestions);
        state.confirm_links = context.bound_count(Behavior::ConfirmGuard);
    });
}

/// Reads `window.__TGF_DASHBOARD_CONFIG__`, given either as a JSON string or
/// a plain object. Anything unusable falls back to the defaults.
pub(super) fn load_config() -> DashboardConfig {
    let Some(window) = web_sys::window() else {
        return DashboardConfig::default();
    };
    let Ok(value) = js_sys::Reflect::get(&window, &JsValue::from_str(CONFIG_GLOBAL)) else {
        return DashboardConfig::default();
    };
    if value.is_undefined() || value.is_null() {
        return DashboardConfig::default();
    }
    let raw = match value.as_string() {
        Some(raw) => raw,
        None => match js_sys::JSON::stringify(&value).ok().and_then(|raw| raw.as_string()) {
            Some(raw) => raw,
            None => {
                log::warn!("{CONFIG_GLOBAL} is not serializable; using defaults");
                return DashboardConfig::default();
            }
        },
    };
    DashboardConfig::from_json(&raw).unwrap_or_else(|error| {
        log::warn!("{CONFIG_GLOBAL} ignored: {error}");
        DashboardConfig::default()
    })
}

fn inject_styles(document: &Document) -> Result<(), String> {
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        return Ok(());
    }
    let head = document
        .head()
        .ok_or_else(|| "document head is unavailable".to_string())?;
    let style = document
        .create_element("style")
        .map_err(|_| "failed to create style element".to_string())?;
    style.set_id(STYLE_ELEMENT_ID);
    style.set_text_content(Some(DASHBOARD_STYLES));
    head.append_child(&style)
        .map_err(|_| "failed to append style element".to_string())?;
    Ok(())
}
