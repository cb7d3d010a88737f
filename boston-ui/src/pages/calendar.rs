//! Calendar Page
//!
//! Month grid with matches placed on their kick-off day.

use leptos::*;

use crate::api;
use crate::calendar::{matches_on, month_grid, MonthCursor, WEEKDAY_HEADERS};
use crate::state::global::{format_time, GlobalState};

/// Calendar page component
#[component]
pub fn Calendar() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (cursor, set_cursor) = create_signal(MonthCursor::now());

    // Fetch matches and teams on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            let (teams, matches) = futures::join!(api::fetch_teams(), api::fetch_matches());
            match teams {
                Ok(teams) => state.teams.set(teams),
                Err(e) => state.show_error(&e),
            }
            match matches {
                Ok(matches) => state.matches.set(matches),
                Err(e) => state.show_error(&e),
            }
        });
    });

    let state_for_grid = state.clone();

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Calendrier"</h1>
                <p class="text-gray-400 mt-1">"Les matchs du mois"</p>
            </div>

            // Month navigation
            <div class="flex items-center justify-between bg-gray-800 rounded-xl p-4">
                <button
                    on:click=move |_| set_cursor.update(|c| *c = c.prev())
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                >
                    "← Mois précédent"
                </button>
                <h2 class="text-xl font-semibold">{move || cursor.get().label()}</h2>
                <button
                    on:click=move |_| set_cursor.update(|c| *c = c.next())
                    class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                >
                    "Mois suivant →"
                </button>
            </div>

            // Grid
            <div class="bg-gray-800 rounded-xl p-4">
                <div class="grid grid-cols-7 gap-2 mb-2">
                    {WEEKDAY_HEADERS.iter().map(|day| view! {
                        <div class="text-center text-gray-400 text-sm font-medium py-2">{*day}</div>
                    }).collect_view()}
                </div>

                <div class="grid grid-cols-7 gap-2">
                    {move || {
                        let current = cursor.get();
                        let matches = state_for_grid.matches.get();
                        let state = state_for_grid.clone();

                        month_grid(current).into_iter().map(|cell| {
                            match cell {
                                None => view! {
                                    <div class="min-h-[80px]" />
                                }.into_view(),
                                Some(day) => {
                                    let day_matches = matches_on(&matches, current, day);
                                    let state = state.clone();
                                    view! {
                                        <div class="min-h-[80px] bg-gray-900 rounded-lg p-2 border border-gray-700">
                                            <div class="text-gray-400 text-xs">{day}</div>
                                            {day_matches.into_iter().map(|m| {
                                                let home = state.team_name(&m.home_team_id);
                                                let away = state.team_name(&m.away_team_id);
                                                view! {
                                                    <div class="bg-primary-900/60 rounded px-1 py-0.5 mt-1 text-xs" title=m.venue.clone()>
                                                        <div class="truncate">{home}" - "{away}</div>
                                                        <div class="text-gray-400">{format_time(&m.match_date)}</div>
                                                    </div>
                                                }
                                            }).collect_view()}
                                        </div>
                                    }.into_view()
                                }
                            }
                        }).collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
