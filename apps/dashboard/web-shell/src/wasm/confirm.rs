use super::*;

pub(super) fn guard_confirm_links(context: &mut PageContext, document: &Document) {
    let selector = context.config.markers.confirm_link_selector();
    for element in query_document(document, &selector) {
        let Ok(link) = element.dyn_into::<HtmlAnchorElement>() else {
            continue;
        };
        if let Err(error) = guard_confirm_link(context, link) {
            log::warn!("skipping confirm link: {error}");
        }
    }
}

pub(super) fn guard_confirm_link(
    context: &mut PageContext,
    link: HtmlAnchorElement,
) -> Result<(), String> {
    if !context.bind(Behavior::ConfirmGuard, &link) {
        return Ok(());
    }
    // The inline handler would prompt a second time.
    link.remove_attribute(INLINE_CLICK_ATTRIBUTE)
        .map_err(|_| "failed to strip inline click handler".to_string())?;

    let guarded = link.clone();
    let listener = ListenerHandle::attach(&link, "click", move |event| {
        event.prevent_default();
        confirm_then_navigate(&guarded);
    })?;
    context.listeners.push(listener);
    Ok(())
}

fn confirm_then_navigate(link: &HtmlAnchorElement) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let default_message = current_config().strings.confirm_destructive;
    let message = link
        .get_attribute(CONFIRM_MESSAGE_ATTRIBUTE)
        .filter(|custom| !custom.trim().is_empty())
        .unwrap_or(default_message);
    let accepted = window.confirm_with_message(&message).unwrap_or(false);
    let href = link.href();
    if let Some(target) = confirmed_navigation(accepted, &href) {
        if let Err(error) = window.location().set_href(target) {
            log::error!("failed to navigate to {target}: {error:?}");
        }
    }
}
