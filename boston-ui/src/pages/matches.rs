//! Matches Page
//!
//! Full list of matches, earliest kick-off first.

use leptos::*;

use crate::api;
use crate::components::{Loading, StatusBadge};
use crate::state::global::{format_date_time, GlobalState};

/// Matches page component
#[component]
pub fn Matches() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch matches and teams on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            let (teams, matches) = futures::join!(api::fetch_teams(), api::fetch_matches());
            match teams {
                Ok(teams) => state.teams.set(teams),
                Err(e) => state.show_error(&e),
            }
            match matches {
                Ok(matches) => state.matches.set(matches),
                Err(e) => state.show_error(&e),
            }

            state.loading.set(false);
        });
    });

    let state_for_rows = state.clone();

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Matchs"</h1>
                <p class="text-gray-400 mt-1">"Tous les matchs du championnat"</p>
            </div>

            {move || {
                if state.loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                let matches = state_for_rows.matches.get();
                if matches.is_empty() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400">"Aucun match programmé pour le moment"</p>
                        </div>
                    }.into_view();
                }

                let state = state_for_rows.clone();
                view! {
                    <div class="space-y-3">
                        {matches.into_iter().map(|m| {
                            let home = state.team_name(&m.home_team_id);
                            let away = state.team_name(&m.away_team_id);
                            view! {
                                <div class="bg-gray-800 rounded-xl p-4 border border-gray-700">
                                    <div class="flex items-center justify-between">
                                        <div class="flex items-center space-x-4">
                                            <span class="font-semibold">{home}</span>
                                            <span class="text-2xl font-bold text-primary-400">{m.score_display()}</span>
                                            <span class="font-semibold">{away}</span>
                                        </div>
                                        <StatusBadge status=m.status.clone() />
                                    </div>
                                    <div class="flex items-center space-x-4 mt-2 text-sm text-gray-400">
                                        <span>"📅 "{format_date_time(&m.match_date)}</span>
                                        <span>"📍 "{m.venue.clone()}</span>
                                        {m.referee.clone().map(|r| view! {
                                            <span>"🟨 Arbitre: "{r}</span>
                                        })}
                                    </div>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}
