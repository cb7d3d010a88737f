//! Home Page
//!
//! Public landing page: summary counts, next matches and latest news.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::{StatCard, StatusBadge};
use crate::state::global::{format_date, format_date_time, GlobalState};

/// Home page component
#[component]
pub fn Home() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch initial data on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);

            let (stats, teams, matches, news) = futures::join!(
                api::fetch_dashboard(),
                api::fetch_teams(),
                api::fetch_matches(),
                api::fetch_news(),
            );
            match stats {
                Ok(stats) => state.dashboard.set(Some(stats)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Dashboard: {}", e).into());
                }
            }
            match teams {
                Ok(teams) => state.teams.set(teams),
                Err(e) => {
                    web_sys::console::error_1(&format!("Teams: {}", e).into());
                }
            }
            match matches {
                Ok(matches) => state.matches.set(matches),
                Err(e) => {
                    web_sys::console::error_1(&format!("Matches: {}", e).into());
                }
            }
            match news {
                Ok(news) => state.news.set(news),
                Err(e) => {
                    web_sys::console::error_1(&format!("News: {}", e).into());
                }
            }

            state.loading.set(false);
        });
    });

    let dashboard = state.dashboard;
    let teams_count = Signal::derive(move || {
        dashboard.get().map(|d| d.teams_count).unwrap_or(0)
    });
    let matches_count = Signal::derive(move || {
        dashboard.get().map(|d| d.matches_count).unwrap_or(0)
    });
    let finished_matches = Signal::derive(move || {
        dashboard.get().map(|d| d.finished_matches).unwrap_or(0)
    });
    let upcoming_matches = Signal::derive(move || {
        dashboard.get().map(|d| d.upcoming_matches).unwrap_or(0)
    });

    view! {
        <div class="space-y-8">
            // Hero
            <section class="bg-gradient-to-r from-primary-700 to-primary-900 rounded-xl p-8 text-center">
                <h1 class="text-4xl font-bold">"Championnat BOSTON"</h1>
                <p class="text-gray-200 mt-2">"Suivez les matchs, le classement et les actualités du championnat local"</p>
            </section>

            // Summary counts
            <section class="grid grid-cols-2 md:grid-cols-4 gap-4">
                <StatCard label="Équipes" icon="🛡️" value=teams_count />
                <StatCard label="Matchs" icon="⚽" value=matches_count />
                <StatCard label="Matchs joués" icon="✅" value=finished_matches />
                <StatCard label="Matchs à venir" icon="📅" value=upcoming_matches />
            </section>

            // Two column layout for matches and news
            <div class="grid md:grid-cols-2 gap-8">
                <UpcomingMatches />
                <LatestNews />
            </div>
        </div>
    }
}

/// The next three scheduled matches
#[component]
fn UpcomingMatches() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let state_for_rows = state.clone();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Prochains matchs"</h2>
                <A href="/matches" class="text-primary-400 text-sm hover:underline">"Tous les matchs"</A>
            </div>

            <div class="space-y-2">
                {move || {
                    let upcoming: Vec<_> = state_for_rows.matches.get()
                        .into_iter()
                        .filter(|m| m.status == "scheduled")
                        .take(3)
                        .collect();

                    if upcoming.is_empty() {
                        return view! {
                            <p class="text-gray-400 text-sm">"Aucun match programmé"</p>
                        }.into_view();
                    }

                    let state = state_for_rows.clone();
                    upcoming.into_iter().map(|m| {
                        let home = state.team_name(&m.home_team_id);
                        let away = state.team_name(&m.away_team_id);
                        view! {
                            <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                <div>
                                    <span class="font-medium">{home}" - "{away}</span>
                                    <span class="text-gray-400 text-sm ml-2">{format_date_time(&m.match_date)}</span>
                                </div>
                                <StatusBadge status=m.status.clone() />
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </section>
    }
}

/// The three most recent articles
#[component]
fn LatestNews() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <div class="flex items-center justify-between mb-4">
                <h2 class="text-xl font-semibold">"Dernières actualités"</h2>
                <A href="/news" class="text-primary-400 text-sm hover:underline">"Toutes les actualités"</A>
            </div>

            <div class="space-y-2">
                {move || {
                    let latest: Vec<_> = state.news.get().into_iter().take(3).collect();

                    if latest.is_empty() {
                        return view! {
                            <p class="text-gray-400 text-sm">"Aucune actualité"</p>
                        }.into_view();
                    }

                    latest.into_iter().map(|article| {
                        let href = format!("/news/{}", article.id);
                        view! {
                            <A href=href class="block py-2 border-b border-gray-700 last:border-0 hover:bg-gray-700/50 rounded px-2 -mx-2">
                                <div class="font-medium">{article.title.clone()}</div>
                                <div class="text-gray-400 text-sm">
                                    {article.author.clone()}" · "{format_date(&article.created_at)}
                                </div>
                            </A>
                        }
                    }).collect_view()
                }}
            </div>
        </section>
    }
}
