use super::*;

pub(super) fn init_tooltips(context: &PageContext, document: &Document) -> usize {
    let elements = query_document(document, &context.config.markers.tooltip_selector);
    if elements.is_empty() {
        return 0;
    }
    let Some(constructor) = bootstrap_constructor("Tooltip") else {
        log::warn!("bootstrap is not loaded; skipping {} tooltips", elements.len());
        return 0;
    };
    elements
        .iter()
        .filter(|element| match construct_with_element(&constructor, element) {
            Ok(_) => true,
            Err(error) => {
                log::warn!("tooltip init failed: {error}");
                false
            }
        })
        .count()
}

/// Schedules every non-error alert to close. Error alerts stay until the
/// user dismisses them.
pub(super) fn schedule_alert_auto_hide(context: &PageContext, document: &Document) -> usize {
    let markers = &context.config.markers;
    let delay_ms = context.config.timings.alert_hide_ms;
    let mut scheduled = 0;
    for alert in query_document(document, &markers.alert_selector) {
        if alert.class_list().contains(&markers.error_alert_class) {
            continue;
        }
        run_later(delay_ms, move || close_alert(&alert));
        scheduled += 1;
    }
    scheduled
}

fn close_alert(alert: &Element) {
    let closed = bootstrap_constructor("Alert")
        .and_then(|constructor| construct_with_element(&constructor, alert).ok())
        .and_then(|instance| {
            let close = js_sys::Reflect::get(&instance, &JsValue::from_str("close")).ok()?;
            let close = close.dyn_into::<js_sys::Function>().ok()?;
            close.call0(&instance).ok()
        })
        .is_some();
    if !closed {
        alert.remove();
    }
}

pub(super) fn present_toast(message: &str, kind: ToastKind) -> Result<(), String> {
    let document = document()?;
    let body = document
        .body()
        .ok_or_else(|| "document body is unavailable".to_string())?;

    let toast = create_html_element(&document, "div")?;
    toast.set_class_name(&kind.class_name());
    apply_style(&toast, &TOAST_STYLE)?;
    toast.set_text_content(Some(message));

    let close_button = document
        .create_element("button")
        .map_err(|_| "failed to create toast close button".to_string())?;
    close_button
        .set_attribute("type", "button")
        .map_err(|_| "failed to configure toast close button".to_string())?;
    close_button.set_class_name("btn-close");
    toast
        .append_child(&close_button)
        .map_err(|_| "failed to append toast close button".to_string())?;

    let dismissed = toast.clone();
    let close_listener = ListenerHandle::attach(&close_button, "click", move |_event| {
        dismissed.remove();
    })?;

    body.append_child(&toast)
        .map_err(|_| "failed to append toast".to_string())?;

    let dismiss_ms = current_config().timings.toast_dismiss_ms;
    run_later(dismiss_ms, move || {
        if toast.parent_element().is_some() {
            toast.remove();
        }
        drop(close_listener);
    });
    Ok(())
}

pub(super) async fn copy_text(text: String) {
    let strings = current_config().strings;
    let (message, kind) = match write_clipboard(&text).await {
        Ok(()) => (strings.copy_succeeded, ToastKind::Success),
        Err(error) => {
            log::error!("could not copy text: {error}");
            (strings.copy_failed, ToastKind::Error)
        }
    };
    if let Err(error) = present_toast(&message, kind) {
        log::error!("failed to show toast: {error}");
    }
}

async fn write_clipboard(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or_else(|| "window is unavailable".to_string())?;
    let promise = window.navigator().clipboard().write_text(text);
    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|error| format!("{error:?}"))
}
