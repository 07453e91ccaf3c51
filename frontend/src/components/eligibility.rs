//! Insurance eligibility lookup component.
//!
//! Four search fields, one lookup request per click, and a verdict panel
//! rendered from the first matching record. Failed or empty lookups are
//! shown as a synthesized ineligible verdict.

use leptos::*;
use web_sys::Event;

use crate::services::check_eligibility;
use crate::types::{EligibilityRecord, SearchQuery};
use crate::BACKEND_URL;

#[component]
pub fn EligibilitySection() -> impl IntoView {
    let (query, set_query) = create_signal(SearchQuery::default());
    let (result, set_result) = create_signal(None::<EligibilityRecord>);
    let (is_loading, set_is_loading) = create_signal(false);
    let (error, set_error) = create_signal(None::<String>);

    // Field-level merge: each input rewrites only its own field.
    let on_name_input = move |ev: Event| {
        set_query.update(|q| q.name = event_target_value(&ev));
    };
    let on_flight_id_input = move |ev: Event| {
        set_query.update(|q| q.flight_id = event_target_value(&ev));
    };
    let on_baggage_input = move |ev: Event| {
        set_query.update(|q| q.baggage = event_target_value(&ev));
    };
    let on_date_input = move |ev: Event| {
        set_query.update(|q| q.date = event_target_value(&ev));
    };

    let on_search = move |_| {
        set_error.set(None);

        let current = query.get();
        if let Err(e) = current.validate() {
            log::warn!("⚠️ Search rejected: {}", e);
            set_error.set(Some(e.to_string()));
            return;
        }

        spawn_local(async move {
            set_is_loading.set(true);
            log::info!(
                "🔎 Checking eligibility (name: {:?}, flightID: {:?})",
                current.name,
                current.flight_id
            );

            let verdict = match check_eligibility(&current, BACKEND_URL).await {
                Ok(records) => EligibilityRecord::from_results(records),
                Err(e) => {
                    log::error!("❌ Search error: {}", e);
                    EligibilityRecord::search_error()
                }
            };

            set_result.set(Some(verdict));
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="widget eligibility-widget">
            <h2>"Insurance Eligibility Check"</h2>

            <div class="form-row">
                <input
                    type="text"
                    placeholder="Passenger Name"
                    prop:value=move || query.get().name
                    on:input=on_name_input
                />
                <input
                    type="text"
                    placeholder="Flight ID"
                    prop:value=move || query.get().flight_id
                    on:input=on_flight_id_input
                />
            </div>

            <div class="form-row">
                <input
                    type="text"
                    placeholder="Baggage Status"
                    prop:value=move || query.get().baggage
                    on:input=on_baggage_input
                />
                <input
                    type="date"
                    prop:value=move || query.get().date
                    on:input=on_date_input
                />
            </div>

            <button
                class="btn btn-primary"
                on:click=on_search
                disabled=move || is_loading.get()
            >
                {move || if is_loading.get() { "Searching..." } else { "Search" }}
            </button>

            <Show
                when=move || error.get().is_some()
                fallback=|| view! { }
            >
                <div class="error-message">
                    {move || error.get().unwrap_or_default()}
                </div>
            </Show>

            <Show
                when=move || result.get().is_some()
                fallback=|| view! { }
            >
                <div
                    class="result-panel"
                    class:eligible=move || result.get().map(|r| r.is_eligible).unwrap_or(false)
                >
                    <h3>"Insurance Eligibility Result"</h3>
                    {move || {
                        result.get().map(|record| {
                            if record.is_eligible {
                                view! {
                                    <div>
                                        <p class="verdict verdict-eligible">
                                            "✅ Customer is ELIGIBLE for Insurance"
                                        </p>
                                        {record
                                            .flight_key
                                            .map(|key| view! { <p>"Flight: " {key}</p> })}
                                        {record
                                            .passenger_key
                                            .map(|key| view! { <p>"Passenger ID: " {key}</p> })}
                                    </div>
                                }
                                    .into_view()
                            } else {
                                // The message field stays unrendered here on
                                // purpose; only the boolean drives the verdict.
                                view! {
                                    <p class="verdict verdict-ineligible">
                                        "❌ Customer is NOT ELIGIBLE for Insurance"
                                    </p>
                                }
                                    .into_view()
                            }
                        })
                    }}
                </div>
            </Show>
        </div>
    }
}
