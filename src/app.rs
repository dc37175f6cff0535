use std::sync::Arc;

use dioxus::prelude::*;
use rfd::{FileDialog, MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::config::settings::Settings;
use crate::infra::clock::SystemClock;
use crate::ui::record_grid::RecordGrid;
use crate::ui::state::app_state::AppState;
use crate::ui::state::session_view::SessionView;
use crate::usecase::services::export_service::ExportService;
use crate::usecase::services::import_service::{
    ImportService, DATASET_EXTENSIONS, LOG_EXTENSIONS,
};
use crate::usecase::services::traversal_service::TraversalEngine;

fn confirm(title: &str, description: &str) -> bool {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(title)
        .set_description(description)
        .set_buttons(MessageButtons::YesNo)
        .show()
        == MessageDialogResult::Yes
}

fn has_recorded_progress(engine: &Signal<Option<TraversalEngine>>) -> bool {
    engine
        .read()
        .as_ref()
        .is_some_and(|session| !session.log().is_empty())
}

fn download_log(engine: Signal<Option<TraversalEngine>>, mut status: Signal<String>) {
    let guard = engine.read();
    let Some(session) = guard.as_ref() else {
        return;
    };

    let Some(target) = FileDialog::new()
        .add_filter("CSV", &["csv"])
        .set_file_name(ExportService::file_name(session))
        .save_file()
    else {
        *status.write() = "Download cancelled".to_string();
        return;
    };

    *status.write() = match ExportService::save(session, &target) {
        Ok(entries) => format!("Saved {entries} log entries to {}", target.display()),
        Err(err) => {
            tracing::error!("log export failed: {err:#}");
            format!("Download failed: {err:#}")
        }
    };
}

#[component]
pub fn App() -> Element {
    let settings = use_context::<Settings>();
    let AppState {
        mut engine,
        mut status,
        mut skip_reason,
        mut skip_warning,
    } = AppState::new();

    let key_column = settings.key_column.clone();
    let remark_policy = settings.remark_policy;
    let import_service = use_hook(move || {
        Arc::new(ImportService::new(
            key_column,
            remark_policy,
            Arc::new(SystemClock),
        ))
    });
    let import_for_open = import_service.clone();
    let import_for_resume = import_service.clone();

    let view = engine
        .read()
        .as_ref()
        .map(|session| SessionView::capture(session, settings.grid_group_size));
    let has_session = view.is_some();

    rsx! {
        div {
            style: "font-family: sans-serif; padding: 12px;",
            h2 { "Record Review" }
            nav {
                style: "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;",
                button {
                    onclick: move |_| {
                        if has_recorded_progress(&engine)
                            && !confirm(
                                "Open dataset",
                                "Progress that has not been downloaded will be lost. Continue?",
                            )
                        {
                            return;
                        }

                        let Some(file_path) = FileDialog::new()
                            .add_filter("Dataset", &DATASET_EXTENSIONS)
                            .pick_file() else {
                            *status.write() = "Open cancelled".to_string();
                            return;
                        };

                        *status.write() = format!("Loading {}", file_path.display());

                        match import_for_open.open_session(&file_path) {
                            Ok(session) => {
                                let rows = session.dataset().len();
                                *engine.write() = Some(session);
                                *skip_reason.write() = String::new();
                                *skip_warning.write() = None;
                                *status.write() = format!("Loaded {rows} records from {}", file_path.display());
                            }
                            Err(err) => {
                                tracing::error!("failed to open dataset: {err:#}");
                                *status.write() = format!("Failed to open dataset: {err:#}");
                            }
                        }
                    },
                    "Open dataset"
                }
                button {
                    disabled: !has_session,
                    onclick: move |_| {
                        if engine.read().is_none() {
                            *status.write() = "Open a dataset first".to_string();
                            return;
                        }
                        if has_recorded_progress(&engine)
                            && !confirm(
                                "Resume from log",
                                "Current progress will be replaced by the log contents. Continue?",
                            )
                        {
                            return;
                        }

                        let Some(log_path) = FileDialog::new()
                            .add_filter("Log", &LOG_EXTENSIONS)
                            .pick_file() else {
                            *status.write() = "Resume cancelled".to_string();
                            return;
                        };

                        match import_for_resume.load_resume_log(&log_path) {
                            Some(entries) => {
                                let count = entries.len();
                                if let Some(session) = engine.write().as_mut() {
                                    session.replay_log(entries);
                                }
                                *skip_reason.write() = String::new();
                                *skip_warning.write() = None;
                                *status.write() = format!("Progress resumed from log ({count} entries)");
                            }
                            None => {
                                *status.write() = "Log file not recognized, progress unchanged".to_string();
                            }
                        }
                    },
                    "Resume from log"
                }
                span { " {status}" }
            }
            hr {}
            if let Some(view) = view {
                SessionPanel {
                    view,
                    engine,
                    status,
                    skip_reason,
                    skip_warning,
                    group_size: settings.grid_group_size,
                    highlighted_rows: settings.highlighted_rows,
                }
            } else {
                p { "Open a spreadsheet to start reviewing records." }
            }
        }
    }
}

#[component]
fn SessionPanel(
    view: SessionView,
    mut engine: Signal<Option<TraversalEngine>>,
    status: Signal<String>,
    mut skip_reason: Signal<String>,
    mut skip_warning: Signal<Option<String>>,
    group_size: usize,
    highlighted_rows: usize,
) -> Element {
    let key_label = match (&view.current_key, view.current_key_synthetic) {
        (Some(key), true) => format!("Key {key} (row number)"),
        (Some(key), false) => format!("Key {key}"),
        (None, _) => String::new(),
    };

    rsx! {
        h3 { "{view.dataset_name} | Summary: Total {view.total} | Done {view.done} | Skipped {view.skipped}" }
        if view.synthetic_keys {
            p {
                style: "color: #B26A00;",
                "Identifier column not found. Records are keyed by row number, so resuming against a reordered file will misattribute progress."
            }
        }
        hr {}
        if view.complete {
            div {
                style: "padding: 12px; background-color: #E8F5E9; border: 1px solid #66BB6A; font-weight: bold;",
                "Job completed successfully!"
            }
            button {
                style: "margin-top: 12px;",
                onclick: move |_| download_log(engine, status),
                "Download log file ({view.log_entries} entries)"
            }
        } else {
            h4 { "Record {view.position} / {view.total} | {key_label}" }
            RecordGrid {
                rows: view.grid.clone(),
                group_size,
                highlighted_rows,
            }
            hr {}
            div {
                style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; align-items: start;",
                button {
                    onclick: move |_| {
                        if let Some(session) = engine.write().as_mut() {
                            session.advance_backward();
                        }
                        *skip_reason.write() = String::new();
                        *skip_warning.write() = None;
                    },
                    "Previous record"
                }
                button {
                    onclick: move |_| {
                        if let Some(session) = engine.write().as_mut() {
                            session.mark_current_done();
                        }
                        *skip_reason.write() = String::new();
                        *skip_warning.write() = None;
                    },
                    "Mark as done"
                }
                div {
                    label { "Reason (for skip): " }
                    input {
                        value: "{skip_reason}",
                        oninput: move |event| {
                            *skip_reason.write() = event.value();
                        },
                    }
                    button {
                        onclick: move |_| {
                            let reason = skip_reason();
                            let result = engine
                                .write()
                                .as_mut()
                                .map(|session| session.mark_current_skipped(&reason));
                            match result {
                                Some(Err(err)) => {
                                    *skip_warning.write() = Some(err.to_string());
                                }
                                _ => {
                                    *skip_reason.write() = String::new();
                                    *skip_warning.write() = None;
                                }
                            }
                        },
                        "Skip record"
                    }
                    if let Some(warning) = skip_warning() {
                        p { style: "color: #C62828;", "{warning}" }
                    }
                }
            }
            hr {}
            button {
                onclick: move |_| download_log(engine, status),
                "Download current progress ({view.log_entries} entries)"
            }
        }
    }
}
