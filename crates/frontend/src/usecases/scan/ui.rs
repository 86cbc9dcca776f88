use super::model::{simulate_scan, ScanRecord, ScanStatus, SCAN_LOG_CAP};
use crate::domain::packages::data::sample_packages;
use crate::shared::components::status_badge::status_badge;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use contracts::domain::package::{Package, PackageStatus};
use contracts::shared::listview::{apply, ListViewState};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

fn package_status_tone(status: PackageStatus) -> &'static str {
    match status {
        PackageStatus::ReadyForPickup => "accent",
        PackageStatus::Processing => "warning",
        PackageStatus::InTransit => "info",
        PackageStatus::Delivered => "success",
    }
}

fn local_time_label() -> String {
    js_sys::Date::new_0()
        .to_locale_time_string("en-US")
        .into()
}

#[component]
pub fn ScanPackagesPage() -> impl IntoView {
    let (code, set_code) = signal(String::new());
    let (is_scanning, set_is_scanning) = signal(false);
    let (log, set_log) = signal::<Vec<ScanRecord>>(Vec::new());

    // Bumped on unmount; an in-flight scan that settles after the bump
    // belongs to a dead page and is dropped.
    let generation = StoredValue::new(0u32);
    on_cleanup(move || generation.update_value(|g| *g += 1));

    let scan = move || {
        if is_scanning.get_untracked() {
            return;
        }
        let scanned_code = code.get_untracked().trim().to_string();
        set_is_scanning.set(true);
        let started_in = generation.get_value();
        spawn_local(async move {
            let outcome = simulate_scan(scanned_code.clone()).await;
            if generation.get_value() != started_in {
                return;
            }
            let (status, message) = match outcome {
                Ok(message) => (ScanStatus::Success, message),
                Err(message) => (ScanStatus::Failure, message),
            };
            let record = ScanRecord {
                id: uuid::Uuid::new_v4().to_string(),
                code: scanned_code,
                status,
                message,
                timestamp: local_time_label(),
            };
            set_log.update(|log| {
                log.insert(0, record);
                log.truncate(SCAN_LOG_CAP);
            });
            set_is_scanning.set(false);
            set_code.set(String::new());
        });
    };

    let search_state = RwSignal::new(ListViewState::new());
    let packages = StoredValue::new(sample_packages());
    let visible_packages = move || apply(&packages.get_value(), &search_state.get());

    view! {
        <div class="content">
            <div class="header">
                <div>
                    <h2>"Scan Packages"</h2>
                    <p class="header__description">"Scan package barcodes to update their status"</p>
                </div>
            </div>

            <div class="scan-station">
                <div class="toolbar">
                    <div class="search-input">
                        {icon("scan")}
                        <input
                            type="text"
                            placeholder="Scan or type a package code..."
                            prop:value=move || code.get()
                            prop:disabled=move || is_scanning.get()
                            on:input=move |ev| set_code.set(event_target_value(&ev))
                            on:keydown=move |ev| {
                                if ev.key() == "Enter" {
                                    scan();
                                }
                            }
                        />
                    </div>
                    <button
                        class="button button--primary"
                        prop:disabled=move || is_scanning.get()
                        on:click=move |_| scan()
                    >
                        {move || if is_scanning.get() { "Scanning..." } else { "Scan" }}
                    </button>
                </div>

                <div class="scan-log">
                    <h3>"Recent scans"</h3>
                    {move || {
                        let records = log.get();
                        if records.is_empty() {
                            view! {
                                <div class="empty-state">
                                    {icon("scan")}
                                    <p>"Scan results will appear here."</p>
                                </div>
                            }
                            .into_any()
                        } else {
                            records
                                .into_iter()
                                .map(|record| {
                                    let failed = record.status == ScanStatus::Failure;
                                    view! {
                                        <div
                                            class="scan-log__entry"
                                            class:scan-log__entry--failed=failed
                                        >
                                            {if failed {
                                                icon("alert-triangle")
                                            } else {
                                                icon("check-circle")
                                            }}
                                            <div class="scan-log__body">
                                                <div>{record.message.clone()}</div>
                                                <div class="scan-log__meta">{record.timestamp.clone()}</div>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }
                    }}
                </div>
            </div>

            <div class="scan-packages">
                <h3>"Packages"</h3>
                <div class="toolbar">
                    <SearchInput
                        on_change=Callback::new(move |query: String| {
                            search_state.update(|s| s.set_search(query));
                        })
                        placeholder="Search packages..."
                    />
                </div>
                <div class="table-container">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell">"Package ID"</th>
                                <th class="table__header-cell">"Order"</th>
                                <th class="table__header-cell">"Destination"</th>
                                <th class="table__header-cell">"Status"</th>
                            </tr>
                        </thead>
                        <tbody>
                            {move || {
                                let rows = visible_packages();
                                if rows.is_empty() {
                                    view! {
                                        <tr>
                                            <td colspan="4" class="table__empty">
                                                "No packages found matching your search."
                                            </td>
                                        </tr>
                                    }
                                    .into_any()
                                } else {
                                    rows.into_iter()
                                        .map(|package: Package| {
                                            view! {
                                                <tr class="table__row">
                                                    <td class="table__cell table__cell--id">{package.id.clone()}</td>
                                                    <td class="table__cell">{package.order_id.clone()}</td>
                                                    <td class="table__cell">{package.destination.clone()}</td>
                                                    <td class="table__cell">
                                                        {status_badge(
                                                            package.status.label(),
                                                            package_status_tone(package.status),
                                                        )}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()
                                        .into_any()
                                }
                            }}
                        </tbody>
                    </table>
                </div>
            </div>
        </div>
    }
}
