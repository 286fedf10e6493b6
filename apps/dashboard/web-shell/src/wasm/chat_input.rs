use super::*;

pub(super) fn watch_chat_fields(context: &mut PageContext, document: &Document) {
    let selector = context.config.markers.chat_field_selector();
    for element in query_document(document, &selector) {
        let Ok(field) = element.dyn_into::<HtmlTextAreaElement>() else {
            continue;
        };
        if let Err(error) = watch_chat_field(context, field) {
            log::warn!("skipping chat field: {error}");
        }
    }
}

pub(super) fn watch_chat_field(
    context: &mut PageContext,
    field: HtmlTextAreaElement,
) -> Result<(), String> {
    if !context.bind(Behavior::ChatInput, &field) {
        return Ok(());
    }

    let typed = field.clone();
    let input = ListenerHandle::attach(&field, "input", move |_event| {
        render_chat_feedback(&typed);
    })?;
    context.listeners.push(input);

    let pasted = field.clone();
    let paste = ListenerHandle::attach(&field, "paste", move |_event| {
        let delay_ms = current_config().timings.paste_cleanup_delay_ms;
        let field = pasted.clone();
        run_later(delay_ms, move || {
            field.set_value(&clean_chat_lines(&field.value()));
            render_chat_feedback(&field);
        });
    })?;
    context.listeners.push(paste);
    Ok(())
}

pub(super) fn render_chat_feedback(field: &HtmlTextAreaElement) {
    let config = current_config();
    let feedback = validate_chat_lines(&field.value()).feedback(&config.strings);

    let classes = field.class_list();
    for class in feedback.classes_to_remove() {
        let _ = classes.remove_1(class);
    }
    if let Some(class) = feedback.class_to_add() {
        let _ = classes.add_1(class);
    }

    match feedback_element(field) {
        Ok(element) => element.set_text_content(Some(feedback.message())),
        Err(error) => log::warn!("chat field feedback unavailable: {error}"),
    }
}

fn feedback_element(field: &HtmlTextAreaElement) -> Result<Element, String> {
    let parent = field
        .parent_element()
        .ok_or_else(|| "chat field has no parent element".to_string())?;
    if let Some(existing) = first_within(&parent, &format!(".{FEEDBACK_CLASS}")) {
        return Ok(existing);
    }
    let document = document()?;
    let element = document
        .create_element("div")
        .map_err(|_| "failed to create feedback element".to_string())?;
    element.set_class_name(FEEDBACK_CLASS);
    parent
        .append_child(&element)
        .map_err(|_| "failed to append feedback element".to_string())?;
    Ok(element)
}

struct SuggestionPanel {
    panel: HtmlElement,
    item_listeners: Vec<ListenerHandle>,
}

pub(super) fn offer_chat_suggestions(
    context: &mut PageContext,
    field: HtmlTextAreaElement,
) -> Result<(), String> {
    if !context.bind(Behavior::ChatSuggestions, &field) {
        return Ok(());
    }
    let document = document()?;
    let parent = field
        .parent_element()
        .ok_or_else(|| "chat field has no parent element".to_string())?
        .dyn_into::<HtmlElement>()
        .map_err(|_| "chat field parent is not HtmlElement".to_string())?;

    let panel = create_html_element(&document, "div")?;
    panel.set_class_name(SUGGESTIONS_CLASS);
    apply_style(&panel, &SUGGESTION_PANEL_STYLE)?;
    apply_style(&panel, &[("display", "none")])?;
    apply_style(&parent, &[("position", "relative")])?;
    parent
        .append_child(&panel)
        .map_err(|_| "failed to append suggestion panel".to_string())?;

    let state = Rc::new(RefCell::new(SuggestionPanel {
        panel,
        item_listeners: Vec::new(),
    }));

    let focused = field.clone();
    let focus_state = Rc::clone(&state);
    let focus = ListenerHandle::attach(&field, "focus", move |_event| {
        if !should_offer_suggestions(&focused.value()) {
            return;
        }
        if let Err(error) = show_suggestions(&focus_state, &focused) {
            log::warn!("failed to show chat suggestions: {error}");
        }
    })?;
    context.listeners.push(focus);

    let blur_state = Rc::clone(&state);
    let blur = ListenerHandle::attach(&field, "blur", move |_event| {
        let delay_ms = current_config().timings.suggestion_blur_delay_ms;
        let panel = blur_state.borrow().panel.clone();
        run_later(delay_ms, move || {
            let _ = apply_style(&panel, &[("display", "none")]);
        });
    })?;
    context.listeners.push(blur);
    Ok(())
}

fn show_suggestions(
    state: &Rc<RefCell<SuggestionPanel>>,
    field: &HtmlTextAreaElement,
) -> Result<(), String> {
    let document = document()?;
    let strings = current_config().strings;
    let mut state = state.borrow_mut();
    state.item_listeners.clear();
    state.panel.set_inner_html("");

    for suggestion in chat_suggestions(&strings) {
        let item = create_html_element(&document, "div")?;
        apply_style(&item, &SUGGESTION_ITEM_STYLE)?;

        let title = document
            .create_element("strong")
            .map_err(|_| "failed to create suggestion title".to_string())?;
        title.set_text_content(Some(suggestion.text));
        let description = create_html_element(&document, "small")?;
        description.set_text_content(Some(suggestion.description.as_str()));
        apply_style(&description, &[("color", "#666"), ("display", "block")])?;
        item.append_child(&title)
            .map_err(|_| "failed to build suggestion item".to_string())?;
        item.append_child(&description)
            .map_err(|_| "failed to build suggestion item".to_string())?;

        let target = field.clone();
        let panel = state.panel.clone();
        let text = suggestion.text;
        let listener = ListenerHandle::attach(&item, "click", move |_event| {
            target.set_value(&append_suggestion(&target.value(), text));
            let _ = apply_style(&panel, &[("display", "none")]);
            let _ = target.focus();
        })?;
        state.item_listeners.push(listener);

        state
            .panel
            .append_child(&item)
            .map_err(|_| "failed to append suggestion item".to_string())?;
    }

    apply_style(&state.panel, &[("display", "block")])
}
