use super::*;
use tgforward_client_core::guards::VALIDATED_FORM_CLASS;

pub(super) fn guard_forms(context: &mut PageContext, document: &Document) {
    let selector = context.config.markers.form_selector.clone();
    for element in query_document(document, &selector) {
        let Ok(form) = element.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        if let Err(error) = guard_form(context, form) {
            log::warn!("skipping form guard: {error}");
        }
    }
}

pub(super) fn guard_form(context: &mut PageContext, form: HtmlFormElement) -> Result<(), String> {
    if !context.bind(Behavior::FormGuard, &form) {
        return Ok(());
    }
    let guarded = form.clone();
    let listener = ListenerHandle::attach(&form, "submit", move |event| {
        handle_submit(&guarded, &event);
    })?;
    context.listeners.push(listener);
    Ok(())
}

fn handle_submit(form: &HtmlFormElement, event: &web_sys::Event) {
    let config = current_config();
    match decide_submit(form.check_validity(), &config.strings, &config.timings) {
        SubmitDecision::Blocked => {
            event.prevent_default();
            event.stop_propagation();
        }
        SubmitDecision::Busy {
            busy_html,
            restore_after_ms,
        } => {
            if let Some(button) = submit_button(form, &config.markers.submit_button_selector) {
                let original_html = button.inner_html();
                button.set_inner_html(&busy_html);
                button.set_disabled(true);
                run_later(restore_after_ms, move || {
                    button.set_inner_html(&original_html);
                    button.set_disabled(false);
                });
            }
        }
    }
    let _ = form.class_list().add_1(VALIDATED_FORM_CLASS);
}

fn submit_button(form: &HtmlFormElement, selector: &str) -> Option<HtmlButtonElement> {
    first_within(form, selector)?.dyn_into::<HtmlButtonElement>().ok()
}
