//! Stats block shown at the top of each panel body.

use crate::model::{StatsModel, Visibility};
use leptos::prelude::*;

/// Job and value counts, with optional detail lists.
#[component]
pub fn StatsBlock(stats: StatsModel) -> impl IntoView {
    let StatsModel {
        job_count,
        job_names,
        valued_job_count,
        job_values,
    } = stats;

    view! {
        <div class="stats">
            {job_count.map(move |count| view! { <JobStats count=count names=job_names /> })}
            {valued_job_count.map(move |count| view! { <ValueStats count=count values=job_values /> })}
        </div>
    }
}

#[component]
fn JobStats(count: usize, names: Option<Vec<String>>) -> impl IntoView {
    let label = format!("{} jobs have this item", count);

    match names {
        Some(names) => view! {
            <div class="job-stats">
                <p class="stat-line clickable" data-role="toggle">{label}</p>
                <ul class="job-list" style={Visibility::Hidden.style()}>
                    {names.into_iter().map(|name| view! { <li>{name}</li> }).collect_view()}
                </ul>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="job-stats">
                <p class="stat-line">{label}</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ValueStats(count: usize, values: Option<Vec<(String, Vec<String>)>>) -> impl IntoView {
    let label = format!("{} jobs have values", count);

    match values {
        Some(values) => view! {
            <div class="value-stats">
                <p class="stat-line clickable" data-role="toggle">{label}</p>
                <ul class="value-list" style={Visibility::Hidden.style()}>
                    {values
                        .into_iter()
                        .map(|(job, job_values)| {
                            view! {
                                <li>
                                    <p class="value-job">{job}</p>
                                    <ul>
                                        {job_values
                                            .into_iter()
                                            .map(|value| view! { <li>{value}</li> })
                                            .collect_view()}
                                    </ul>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_any(),
        None => view! {
            <div class="value-stats">
                <p class="stat-line">{label}</p>
            </div>
        }
        .into_any(),
    }
}
