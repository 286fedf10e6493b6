use super::*;

pub(super) fn start_status_polling(context: &mut PageContext, document: &Document) {
    let markers = &context.config.markers;
    let table_present = document
        .query_selector(&markers.task_table_selector)
        .ok()
        .flatten()
        .is_some();
    if !table_present || context.status_poll.is_some() {
        return;
    }
    let interval_ms = context.config.timings.poll_interval_ms;
    context.status_poll = Some(Interval::new(interval_ms, || {
        spawn_local(poll_task_statuses());
    }));
    DIAGNOSTICS.with(|state| state.borrow_mut().polling = true);
    log::debug!("task status polling every {interval_ms}ms");
}

pub(super) async fn poll_task_statuses() {
    DIAGNOSTICS.with(|state| state.borrow_mut().polls_started += 1);
    let config = current_config();
    match fetch_task_statuses(&config.status_endpoint).await {
        Ok(batch) => {
            for skipped in &batch.skipped {
                log::warn!("skipping task status: {skipped}");
            }
            let patched = match document() {
                Ok(document) => apply_task_statuses(&document, &batch.tasks, &config),
                Err(error) => {
                    log::error!("error updating task statuses: {error}");
                    0
                }
            };
            DIAGNOSTICS.with(|state| {
                let mut state = state.borrow_mut();
                state.rows_patched += patched as u64;
                state.last_poll_error = None;
            });
        }
        Err(error) => {
            log::error!("error updating task statuses: {error}");
            DIAGNOSTICS.with(|state| {
                let mut state = state.borrow_mut();
                state.polls_failed += 1;
                state.last_poll_error = Some(error.to_string());
            });
        }
    }
}

async fn fetch_task_statuses(endpoint: &str) -> Result<TaskStatusBatch, TaskStatusError> {
    let response = Request::get(endpoint)
        .send()
        .await
        .map_err(|error| TaskStatusError::Network(error.to_string()))?;
    let status = response.status();
    let raw = response
        .text()
        .await
        .map_err(|error| TaskStatusError::Network(error.to_string()))?;
    decode_task_statuses(status, &raw)
}

/// Patches every row that is on the page and returns how many were found.
pub(super) fn apply_task_statuses(
    document: &Document,
    tasks: &[TaskStatusSnapshot],
    config: &DashboardConfig,
) -> usize {
    let markers = &config.markers;
    let rows = query_document(document, &markers.task_row_selector);
    let row_ids: Vec<Option<String>> = rows
        .iter()
        .map(|row| row.get_attribute(&markers.task_id_attribute))
        .collect();
    let plan = rows_to_patch(tasks, &row_ids);
    for (index, task) in &plan {
        if let Some(row) = rows.get(*index) {
            patch_task_row(row, task, config);
        }
    }
    plan.len()
}

fn patch_task_row(row: &Element, task: &TaskStatusSnapshot, config: &DashboardConfig) {
    let presentation = task.presentation(&config.strings);

    if let Some(badge) = first_within(row, &config.markers.status_badge_selector) {
        badge.set_class_name(presentation.badge_class);
        badge.set_inner_html(&presentation.badge_html);
    }

    if let Some(toggle) = first_within(row, &config.markers.toggle_link_selector) {
        toggle.set_class_name(presentation.toggle_class);
        let _ = toggle.set_attribute("title", &presentation.toggle_title);
        toggle.set_inner_html(presentation.toggle_html);
    }
}
