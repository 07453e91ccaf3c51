//! Data file upload component.
//!
//! Handles table selection, file selection, upload to the backend and
//! the server-side processing trigger. All outcomes are reported through
//! a single human-readable status line.

use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::services::{process_data, upload_file};
use crate::types::{require_selected_file, TableName};
use crate::BACKEND_URL;

#[component]
pub fn UploadSection() -> impl IntoView {
    let (selected_file, set_selected_file) = create_signal(None::<File>);
    let (table_name, set_table_name) = create_signal(TableName::default());
    let (status, set_status) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let on_table_change = move |ev: Event| {
        // The select is a closed set; anything else is ignored.
        if let Ok(table) = event_target_value(&ev).parse::<TableName>() {
            set_table_name.set(table);
        }
    };

    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        let file = input.files().and_then(|files| files.get(0));
        set_selected_file.set(file);
    };

    let on_upload = move |_| {
        set_error.set(None);

        let file = match require_selected_file(selected_file.get()) {
            Ok(file) => file,
            Err(e) => {
                log::warn!("⚠️ Upload rejected: {}", e);
                set_error.set(Some(e.to_string()));
                return;
            }
        };

        let table = table_name.get();
        spawn_local(async move {
            set_status.set("Uploading...".to_string());
            log::info!("📤 Uploading {} to table {}", file.name(), table);

            match upload_file(file, table, BACKEND_URL).await {
                Ok(response) => {
                    log::info!("✅ Upload done, {} records processed", response.processed);
                    set_status.set(response.status_line());
                }
                Err(e) => {
                    log::error!("❌ Upload failed: {}", e);
                    set_status.set(format!("Upload failed: {}", e));
                }
            }
        });
    };

    let on_process = move |_| {
        set_error.set(None);

        spawn_local(async move {
            set_status.set("Processing data...".to_string());
            log::info!("⚙️ Triggering server-side processing");

            match process_data(BACKEND_URL).await {
                Ok(response) => {
                    log::info!("✅ Processing done: {}", response.message);
                    set_status.set(response.status_line());
                }
                Err(e) => {
                    log::error!("❌ Processing failed: {}", e);
                    set_status.set(format!("Processing failed: {}", e));
                }
            }
        });
    };

    view! {
        <div class="widget upload-widget">
            <h2>"Upload Data File"</h2>

            <div class="form-row">
                <label for="tableSelect">"Select Table: "</label>
                <select
                    id="tableSelect"
                    prop:value=move || table_name.get().as_str()
                    on:change=on_table_change
                >
                    {TableName::ALL
                        .iter()
                        .map(|table| {
                            view! {
                                <option value=table.as_str()>{table.label()}</option>
                            }
                        })
                        .collect_view()}
                </select>
            </div>

            <div class="form-row">
                <input type="file" id="fileInput" on:change=on_file_change/>
            </div>

            <div class="form-row">
                <button class="btn" on:click=on_upload>
                    "Upload"
                </button>
                <button class="btn" on:click=on_process>
                    "Process Data"
                </button>
            </div>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || !status.get().is_empty()
                fallback=|| view! { }
            >
                <div class="status-box">
                    {move || status.get()}
                </div>
            </Show>
        </div>
    }
}
