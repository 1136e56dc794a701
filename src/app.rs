use std::collections::{BTreeMap, HashMap};

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::domain::entities::edit::{CellKey, EditModeSet};
use crate::domain::entities::row::{Row, RowId};
use crate::domain::entities::schema::{Column, ColumnId, ColumnType, TableData};
use crate::domain::entities::sort::SortKey;
use crate::domain::entities::staging::StagingBuffer;
use crate::domain::entities::value::{CellValue, UNSET_CHOICE};
use crate::infra::json::{load_table_data, DEMO_TABLE_DATA};
use crate::ui::state::app_state::{dispatch, leave_cell_event, AppState};
use crate::ui::state::table_state::{TableEvent, TableState};
use crate::ui::style::{
    dropdown_panel_style, error_style, modal_backdrop_style, modal_panel_style,
    root_container_style, table_body_cell_style, table_container_style,
    table_header_cell_style, toolbar_style,
};
use crate::usecase::services::query_service::sort_indicator;

#[component]
pub fn App() -> Element {
    let table_data = match load_table_data(DEMO_TABLE_DATA) {
        Ok(table_data) => table_data,
        Err(err) => {
            let message = format!("{err:#}");
            warn!(%message, "failed to load table data");
            return rsx! {
                div {
                    p { "Failed to load table data: {message}" }
                }
            };
        }
    };

    rsx! {
        EditableTable { table_data }
    }
}

#[component]
pub fn EditableTable(table_data: TableData) -> Element {
    let AppState {
        table,
        cell_drafts,
        mut new_row_inputs,
        show_column_filter,
        mut status,
    } = AppState::new(table_data);

    let snapshot = table.read().clone();
    let all_columns = snapshot.columns().to_vec();
    let visible_columns: Vec<Column> = snapshot.visible_columns().into_iter().cloned().collect();
    let sorted_rows: Vec<Row> = snapshot.sorted_rows().into_iter().cloned().collect();
    let edit_mode = snapshot.edit_mode().clone();
    let sort_key = snapshot.sort_key().cloned();
    let staging = snapshot.staging().clone();
    let add_row_open = snapshot.add_row_open();
    let status_message = status();

    rsx! {
        div {
            style: "{root_container_style()}",
            div {
                style: "{toolbar_style()}",
                ColumnFilter {
                    columns: all_columns.clone(),
                    open: show_column_filter,
                    on_toggle: move |(column_id, visible): (ColumnId, bool)| {
                        dispatch(table, TableEvent::ToggleColumn { column_id, visible });
                    }
                }
                button {
                    onclick: move |_| {
                        new_row_inputs.write().clear();
                        status.set(String::new());
                        dispatch(table, TableEvent::OpenNewRow);
                    },
                    "Add Row"
                }
            }

            if !status_message.is_empty() {
                div { style: "{error_style()}", "{status_message}" }
            }

            if add_row_open {
                AddRowModal {
                    columns: all_columns.clone(),
                    staging: staging.clone(),
                    inputs: new_row_inputs,
                    on_stage: move |(column_id, raw): (ColumnId, String)| {
                        new_row_inputs.write().insert(column_id.clone(), raw.clone());
                        dispatch(table, TableEvent::StageInput { column_id, raw });
                    },
                    on_save: move |_| {
                        dispatch(table, TableEvent::CommitNewRow);
                        if !table.read().add_row_open() {
                            new_row_inputs.write().clear();
                        }
                    },
                    on_close: move |_| {
                        new_row_inputs.write().clear();
                        dispatch(table, TableEvent::CancelNewRow);
                    }
                }
            }

            div {
                style: "{table_container_style()}",
                table { style: "border-collapse: collapse; width: 100%; background: #fff;",
                    TableHeader {
                        columns: visible_columns.clone(),
                        sort_key: sort_key.clone(),
                        on_sort: move |column_id: ColumnId| {
                            dispatch(table, TableEvent::RequestSort(column_id));
                        }
                    }
                    TableBody {
                        columns: visible_columns.clone(),
                        rows: sorted_rows.clone(),
                        edit_mode: edit_mode.clone(),
                        table,
                        drafts: cell_drafts,
                        status,
                    }
                }
            }
        }
    }
}

#[component]
fn ColumnFilter(
    columns: Vec<Column>,
    mut open: Signal<bool>,
    on_toggle: EventHandler<(ColumnId, bool)>,
) -> Element {
    let is_open = open();

    rsx! {
        div {
            style: "position: relative; display: inline-flex; align-items: center;",
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                onclick: move |event| {
                    event.stop_propagation();
                    open.set(!open());
                },
                "Filter Columns"
            }

            if is_open {
                div {
                    style: "{dropdown_panel_style()}",
                    onclick: move |event| event.stop_propagation(),
                    {columns.iter().map(|column| {
                        let checked = !column.hidden;
                        let column_id = column.id.clone();
                        let title = column.title.clone();
                        rsx!(
                            label {
                                key: "{column.id}",
                                style: "display: flex; align-items: center; gap: 8px; padding: 6px 4px; cursor: pointer;",
                                input {
                                    r#type: "checkbox",
                                    checked: checked,
                                    onclick: move |_| {
                                        on_toggle.call((column_id.clone(), !checked));
                                    }
                                }
                                span { "{title}" }
                            }
                        )
                    })}
                }
            }
        }
    }
}

#[component]
fn TableHeader(
    columns: Vec<Column>,
    sort_key: Option<SortKey>,
    on_sort: EventHandler<ColumnId>,
) -> Element {
    rsx! {
        thead {
            tr {
                {columns.iter().map(|column| {
                    let column_id = column.id.clone();
                    let indicator = sort_indicator(sort_key.as_ref(), &column.id).symbol();
                    let title = column.title.clone();
                    let style = table_header_cell_style(column.width);
                    rsx!(
                        th {
                            key: "{column.id}",
                            style: "{style}",
                            onclick: move |_| on_sort.call(column_id.clone()),
                            "{title} {indicator}"
                        }
                    )
                })}
            }
        }
    }
}

#[component]
fn TableBody(
    columns: Vec<Column>,
    rows: Vec<Row>,
    edit_mode: EditModeSet,
    table: Signal<TableState>,
    drafts: Signal<BTreeMap<CellKey, String>>,
    status: Signal<String>,
) -> Element {
    rsx! {
        tbody {
            {rows.iter().map(|row| {
                let row_id = row.id.clone();
                rsx!(
                    tr {
                        key: "{row_id}",
                        {columns.iter().map(|column| {
                            let key = CellKey::new(row.id.clone(), column.id.clone());
                            let editing = edit_mode.contains(&key);
                            rsx!(
                                EditableCell {
                                    key: "{row.id}-{column.id}",
                                    column: column.clone(),
                                    row_id: row.id.clone(),
                                    value: row.value(&column.id).clone(),
                                    editing,
                                    table,
                                    drafts,
                                    status,
                                }
                            )
                        })}
                    }
                )
            })}
        }
    }
}

fn commit_input(
    table: Signal<TableState>,
    mut drafts: Signal<BTreeMap<CellKey, String>>,
    mut status: Signal<String>,
    column: &Column,
    key: &CellKey,
    raw: &str,
) {
    match CellValue::from_input(column, raw) {
        Ok(value) => {
            drafts.write().remove(key);
            status.set(String::new());
            dispatch(
                table,
                TableEvent::CommitCell {
                    key: key.clone(),
                    value,
                },
            );
        }
        Err(err) => {
            status.set(err.to_string());
        }
    }
}

/// Blur and Enter both commit the current draft; Escape drops it.
fn commit_draft(
    table: Signal<TableState>,
    mut drafts: Signal<BTreeMap<CellKey, String>>,
    mut status: Signal<String>,
    column: &Column,
    key: &CellKey,
) {
    let draft = drafts.read().get(key).cloned();
    match leave_cell_event(column, key.clone(), draft.as_deref()) {
        Ok(event) => {
            drafts.write().remove(key);
            status.set(String::new());
            dispatch(table, event);
        }
        Err(err) => {
            status.set(err.to_string());
        }
    }
}

fn cancel_draft(table: Signal<TableState>, mut drafts: Signal<BTreeMap<CellKey, String>>, key: &CellKey) {
    drafts.write().remove(key);
    dispatch(table, TableEvent::CancelEdit(key.clone()));
}

#[component]
fn EditableCell(
    column: Column,
    row_id: RowId,
    value: CellValue,
    editing: bool,
    table: Signal<TableState>,
    mut drafts: Signal<BTreeMap<CellKey, String>>,
    status: Signal<String>,
) -> Element {
    let key = CellKey::new(row_id, column.id.clone());

    if !editing {
        let formatted = value.display(column.column_type);
        let initial = value.input_value();
        return rsx! {
            td {
                style: "{table_body_cell_style()}",
                ondoubleclick: move |_| {
                    drafts.write().insert(key.clone(), initial.clone());
                    dispatch(table, TableEvent::RequestEdit(key.clone()));
                },
                span { "{formatted}" }
            }
        };
    }

    match column.column_type {
        ColumnType::Boolean => {
            let checked = value.as_bool();
            let column_for_blur = column.clone();
            let key_for_blur = key.clone();
            let key_for_keys = key.clone();
            rsx! {
                td {
                    style: "{table_body_cell_style()}",
                    input {
                        r#type: "checkbox",
                        checked: checked,
                        autofocus: true,
                        onblur: move |_| {
                            commit_draft(table, drafts, status, &column_for_blur, &key_for_blur);
                        },
                        onkeydown: move |event| {
                            if event.key() == Key::Escape {
                                cancel_draft(table, drafts, &key_for_keys);
                            }
                        },
                        onclick: move |_| {
                            drafts.write().remove(&key);
                            dispatch(
                                table,
                                TableEvent::CommitCell {
                                    key: key.clone(),
                                    value: CellValue::Bool(!checked),
                                },
                            );
                        }
                    }
                }
            }
        }
        ColumnType::Select => {
            let current = drafts
                .read()
                .get(&key)
                .cloned()
                .filter(|draft| !draft.is_empty())
                .unwrap_or_else(|| UNSET_CHOICE.to_string());
            let options = column.options.clone();
            let column_for_change = column.clone();
            let key_for_change = key.clone();
            let column_for_blur = column.clone();
            let key_for_blur = key.clone();
            let column_for_keys = column.clone();
            let key_for_keys = key.clone();
            rsx! {
                td {
                    style: "{table_body_cell_style()}",
                    select {
                        value: "{current}",
                        onchange: move |event| {
                            commit_input(table, drafts, status, &column_for_change, &key_for_change, &event.value());
                        },
                        onblur: move |_| {
                            commit_draft(table, drafts, status, &column_for_blur, &key_for_blur);
                        },
                        onkeydown: move |event| {
                            if event.key() == Key::Enter {
                                commit_draft(table, drafts, status, &column_for_keys, &key_for_keys);
                            } else if event.key() == Key::Escape {
                                cancel_draft(table, drafts, &key_for_keys);
                            }
                        },
                        option { value: "{UNSET_CHOICE}", selected: current == UNSET_CHOICE, "Select..." }
                        {options.iter().map(|option| {
                            let option = option.clone();
                            let selected = option == current;
                            rsx!(
                                option { key: "{option}", value: "{option}", selected: selected, "{option}" }
                            )
                        })}
                    }
                }
            }
        }
        ColumnType::Text | ColumnType::Number => {
            let input_type = if column.column_type == ColumnType::Number {
                "number"
            } else {
                "text"
            };
            let draft = drafts.read().get(&key).cloned().unwrap_or_default();
            let key_for_input = key.clone();
            let column_for_blur = column.clone();
            let key_for_blur = key.clone();
            let column_for_keys = column.clone();
            let key_for_keys = key.clone();
            rsx! {
                td {
                    style: "{table_body_cell_style()}",
                    input {
                        r#type: input_type,
                        value: "{draft}",
                        autofocus: true,
                        oninput: move |event| {
                            drafts.write().insert(key_for_input.clone(), event.value());
                        },
                        onblur: move |_| {
                            commit_draft(table, drafts, status, &column_for_blur, &key_for_blur);
                        },
                        onkeydown: move |event| {
                            if event.key() == Key::Enter {
                                commit_draft(table, drafts, status, &column_for_keys, &key_for_keys);
                            } else if event.key() == Key::Escape {
                                cancel_draft(table, drafts, &key_for_keys);
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn AddRowModal(
    columns: Vec<Column>,
    staging: StagingBuffer,
    inputs: Signal<HashMap<ColumnId, String>>,
    on_stage: EventHandler<(ColumnId, String)>,
    on_save: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let error_message = staging.error_message().unwrap_or_default();
    let raw_inputs = inputs();

    rsx! {
        div {
            style: "{modal_backdrop_style()}",
            div {
                style: "{modal_panel_style()}",
                div { style: "margin-bottom: 8px; font-weight: 600;", "Add New Row" }
                div { style: "display: grid; grid-template-columns: 120px 1fr; gap: 6px;",
                    {columns.iter().map(|column| {
                        let column_id = column.id.clone();
                        let title = column.title.clone();
                        let staged = staging.value(&column.id).clone();
                        let field = match column.column_type {
                            ColumnType::Boolean => {
                                let checked = staged.as_bool();
                                rsx!(
                                    input {
                                        r#type: "checkbox",
                                        checked: checked,
                                        onclick: move |_| {
                                            on_stage.call((column_id.clone(), (!checked).to_string()));
                                        }
                                    }
                                )
                            }
                            ColumnType::Select => {
                                let current = match &staged {
                                    CellValue::Choice(choice) => choice.clone(),
                                    _ => UNSET_CHOICE.to_string(),
                                };
                                let options = column.options.clone();
                                rsx!(
                                    select {
                                        value: "{current}",
                                        onchange: move |event| {
                                            on_stage.call((column_id.clone(), event.value()));
                                        },
                                        option { value: "{UNSET_CHOICE}", selected: current == UNSET_CHOICE, "Select..." }
                                        {options.iter().map(|option| {
                                            let option = option.clone();
                                            let selected = option == current;
                                            rsx!(
                                                option { key: "{option}", value: "{option}", selected: selected, "{option}" }
                                            )
                                        })}
                                    }
                                )
                            }
                            ColumnType::Text | ColumnType::Number => {
                                let input_type = if column.column_type == ColumnType::Number {
                                    "number"
                                } else {
                                    "text"
                                };
                                let raw = raw_inputs
                                    .get(&column.id)
                                    .cloned()
                                    .unwrap_or_else(|| staged.input_value());
                                rsx!(
                                    input {
                                        r#type: input_type,
                                        value: "{raw}",
                                        oninput: move |event| {
                                            on_stage.call((column_id.clone(), event.value()));
                                        }
                                    }
                                )
                            }
                        };
                        rsx!(
                            div {
                                key: "{column.id}",
                                style: "display: contents;",
                                label { "{title}" }
                                {field}
                            }
                        )
                    })}
                }
                if !error_message.is_empty() {
                    div { style: "{error_style()}", "{error_message}" }
                }
                div { style: "display: flex; gap: 8px; justify-content: flex-end; margin-top: 12px;",
                    button {
                        onclick: move |_| on_close.call(()),
                        "Close"
                    }
                    button {
                        onclick: move |_| on_save.call(()),
                        "Save"
                    }
                }
            }
        }
    }
}
