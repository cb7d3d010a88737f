//! Admin Page
//!
//! Management panel: teams, matches, news and score entry.

use leptos::*;

use crate::api;
use crate::components::StatusBadge;
use crate::state::global::{format_date_time, GlobalState};

#[derive(Clone, Copy, PartialEq, Eq)]
enum AdminTab {
    Teams,
    Matches,
    News,
    Scores,
}

/// Admin page component
#[component]
pub fn Admin() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let (tab, set_tab) = create_signal(AdminTab::Teams);

    // Fetch everything the tabs need on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            let (teams, matches, news) =
                futures::join!(api::fetch_teams(), api::fetch_matches(), api::fetch_news());
            match teams {
                Ok(teams) => state.teams.set(teams),
                Err(e) => state.show_error(&e),
            }
            match matches {
                Ok(matches) => state.matches.set(matches),
                Err(e) => state.show_error(&e),
            }
            match news {
                Ok(news) => state.news.set(news),
                Err(e) => state.show_error(&e),
            }
        });
    });

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Administration"</h1>
                <p class="text-gray-400 mt-1">"Gestion du championnat"</p>
            </div>

            // Tabs
            <div class="flex space-x-1 bg-gray-800 rounded-xl p-1 w-fit">
                <TabButton label="Équipes" active=Signal::derive(move || tab.get() == AdminTab::Teams)
                    on_click=move || set_tab.set(AdminTab::Teams) />
                <TabButton label="Matchs" active=Signal::derive(move || tab.get() == AdminTab::Matches)
                    on_click=move || set_tab.set(AdminTab::Matches) />
                <TabButton label="Actualités" active=Signal::derive(move || tab.get() == AdminTab::News)
                    on_click=move || set_tab.set(AdminTab::News) />
                <TabButton label="Scores" active=Signal::derive(move || tab.get() == AdminTab::Scores)
                    on_click=move || set_tab.set(AdminTab::Scores) />
            </div>

            {move || match tab.get() {
                AdminTab::Teams => view! { <TeamsAdmin /> }.into_view(),
                AdminTab::Matches => view! { <MatchesAdmin /> }.into_view(),
                AdminTab::News => view! { <NewsAdmin /> }.into_view(),
                AdminTab::Scores => view! { <ScoresAdmin /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn TabButton(
    label: &'static str,
    #[prop(into)]
    active: Signal<bool>,
    on_click: impl Fn() + 'static,
) -> impl IntoView {
    view! {
        <button
            on:click=move |_| on_click()
            class=move || {
                if active.get() {
                    "px-4 py-2 rounded-lg bg-primary-600 text-white font-medium"
                } else {
                    "px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
                }
            }
        >
            {label}
        </button>
    }
}

fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Team creation form and list
#[component]
fn TeamsAdmin() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (name, set_name) = create_signal(String::new());
    let (city, set_city) = create_signal(String::new());
    let (logo_url, set_logo_url) = create_signal(String::new());
    let (founded_year, set_founded_year) = create_signal(String::new());
    let (players_count, set_players_count) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let n = name.get();
        let c = city.get();

        if n.trim().is_empty() || c.trim().is_empty() {
            state_for_submit.show_error("Le nom et la ville sont obligatoires");
            return;
        }

        let logo = Some(logo_url.get()).filter(|s| !s.trim().is_empty());
        let year = founded_year.get().trim().parse::<i32>().ok();
        let players = players_count.get().trim().parse::<u32>().ok();

        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            match api::create_team(&n, &c, logo, year, players).await {
                Ok(_) => {
                    if let Ok(teams) = api::fetch_teams().await {
                        state.teams.set(teams);
                    }
                    state.show_success("Équipe créée avec succès");
                    set_name.set(String::new());
                    set_city.set(String::new());
                    set_logo_url.set(String::new());
                    set_founded_year.set(String::new());
                    set_players_count.set(String::new());
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let state_for_list = state.clone();

    view! {
        <div class="grid md:grid-cols-2 gap-8">
            // Creation form
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Nouvelle équipe"</h2>
                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Nom *"</label>
                        <input
                            type="text"
                            placeholder="ex: FC Boston Nord"
                            prop:value=move || name.get()
                            on:input=move |ev| set_name.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Ville *"</label>
                        <input
                            type="text"
                            placeholder="ex: Boston"
                            prop:value=move || city.get()
                            on:input=move |ev| set_city.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Logo (URL)"</label>
                        <input
                            type="url"
                            prop:value=move || logo_url.get()
                            on:input=move |ev| set_logo_url.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Année de fondation"</label>
                        <input
                            type="number"
                            placeholder="ex: 1998"
                            prop:value=move || founded_year.get()
                            on:input=move |ev| set_founded_year.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Nombre de joueurs"</label>
                        <input
                            type="number"
                            min=0
                            placeholder="ex: 18"
                            prop:value=move || players_count.get()
                            on:input=move |ev| set_players_count.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Création..." } else { "Créer l'équipe" }}
                    </button>
                </form>
            </section>

            // Team list
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Équipes inscrites"</h2>
                <div class="space-y-2">
                    {move || {
                        let teams = state_for_list.teams.get();
                        if teams.is_empty() {
                            return view! {
                                <p class="text-gray-400 text-sm">"Aucune équipe inscrite"</p>
                            }.into_view();
                        }

                        let state = state_for_list.clone();
                        teams.into_iter().map(|team| {
                            let state = state.clone();
                            let id = team.id.clone();
                            let on_delete = move |_| {
                                if !confirm("Supprimer cette équipe ?") {
                                    return;
                                }
                                let state = state.clone();
                                let id = id.clone();
                                spawn_local(async move {
                                    match api::delete_team(&id).await {
                                        Ok(msg) => {
                                            if let Ok(teams) = api::fetch_teams().await {
                                                state.teams.set(teams);
                                            }
                                            state.show_success(&msg);
                                        }
                                        Err(e) => state.show_error(&e),
                                    }
                                });
                            };

                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <div>
                                        <span class="font-medium">{team.name.clone()}</span>
                                        <span class="text-gray-400 text-sm ml-2">{team.city.clone()}</span>
                                        <span class="text-gray-500 text-sm ml-2">{team.players_count}" joueurs"</span>
                                    </div>
                                    <button
                                        on:click=on_delete
                                        class="text-red-400 hover:text-red-300 text-sm"
                                    >
                                        "Supprimer"
                                    </button>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}

/// Match scheduling form and list
#[component]
fn MatchesAdmin() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (home_id, set_home_id) = create_signal(String::new());
    let (away_id, set_away_id) = create_signal(String::new());
    let (date, set_date) = create_signal(String::new());
    let (venue, set_venue) = create_signal(String::new());
    let (referee, set_referee) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let h = home_id.get();
        let a = away_id.get();
        let d = date.get();
        let v = venue.get();

        if h.is_empty() || a.is_empty() || d.is_empty() || v.trim().is_empty() {
            state_for_submit.show_error("Équipes, date et lieu sont obligatoires");
            return;
        }

        let r = Some(referee.get()).filter(|s| !s.trim().is_empty());

        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            match api::create_match(&h, &a, &d, &v, r).await {
                Ok(_) => {
                    // Refetch to keep the server's date ordering
                    if let Ok(matches) = api::fetch_matches().await {
                        state.matches.set(matches);
                    }
                    state.show_success("Match programmé avec succès");
                    set_date.set(String::new());
                    set_venue.set(String::new());
                    set_referee.set(String::new());
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let state_for_home = state.clone();
    let state_for_away = state.clone();
    let state_for_list = state.clone();

    view! {
        <div class="grid md:grid-cols-2 gap-8">
            // Scheduling form
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Nouveau match"</h2>
                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Équipe à domicile *"</label>
                        <select
                            on:change=move |ev| set_home_id.set(event_target_value(&ev))
                            prop:value=move || home_id.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="">"Choisir une équipe"</option>
                            {move || state_for_home.teams.get().into_iter().map(|t| view! {
                                <option value=t.id.clone()>{t.name.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Équipe à l'extérieur *"</label>
                        <select
                            on:change=move |ev| set_away_id.set(event_target_value(&ev))
                            prop:value=move || away_id.get()
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        >
                            <option value="">"Choisir une équipe"</option>
                            {move || state_for_away.teams.get().into_iter().map(|t| view! {
                                <option value=t.id.clone()>{t.name.clone()}</option>
                            }).collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Date et heure *"</label>
                        <input
                            type="datetime-local"
                            prop:value=move || date.get()
                            on:input=move |ev| set_date.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Lieu *"</label>
                        <input
                            type="text"
                            placeholder="ex: Stade Municipal"
                            prop:value=move || venue.get()
                            on:input=move |ev| set_venue.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Arbitre"</label>
                        <input
                            type="text"
                            prop:value=move || referee.get()
                            on:input=move |ev| set_referee.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Programmation..." } else { "Programmer le match" }}
                    </button>
                </form>
            </section>

            // Match list
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Matchs programmés"</h2>
                <div class="space-y-2">
                    {move || {
                        let matches = state_for_list.matches.get();
                        if matches.is_empty() {
                            return view! {
                                <p class="text-gray-400 text-sm">"Aucun match programmé"</p>
                            }.into_view();
                        }

                        let state = state_for_list.clone();
                        matches.into_iter().map(|m| {
                            let home = state.team_name(&m.home_team_id);
                            let away = state.team_name(&m.away_team_id);
                            let state = state.clone();
                            let id = m.id.clone();
                            let on_delete = move |_| {
                                if !confirm("Supprimer ce match ?") {
                                    return;
                                }
                                let state = state.clone();
                                let id = id.clone();
                                spawn_local(async move {
                                    match api::delete_match(&id).await {
                                        Ok(msg) => {
                                            if let Ok(matches) = api::fetch_matches().await {
                                                state.matches.set(matches);
                                            }
                                            state.show_success(&msg);
                                        }
                                        Err(e) => state.show_error(&e),
                                    }
                                });
                            };

                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <div>
                                        <span class="font-medium">{home}" - "{away}</span>
                                        <span class="text-gray-400 text-sm ml-2">{format_date_time(&m.match_date)}</span>
                                    </div>
                                    <div class="flex items-center space-x-3">
                                        <StatusBadge status=m.status.clone() />
                                        <button
                                            on:click=on_delete
                                            class="text-red-400 hover:text-red-300 text-sm"
                                        >
                                            "Supprimer"
                                        </button>
                                    </div>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}

/// News publishing form and list
#[component]
fn NewsAdmin() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (title, set_title) = create_signal(String::new());
    let (content, set_content) = create_signal(String::new());
    let (author, set_author) = create_signal(String::new());
    let (image_url, set_image_url) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let state_for_submit = state.clone();
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let t = title.get();
        let c = content.get();
        let a = author.get();

        if t.trim().is_empty() || c.trim().is_empty() || a.trim().is_empty() {
            state_for_submit.show_error("Titre, contenu et auteur sont obligatoires");
            return;
        }

        let image = Some(image_url.get()).filter(|s| !s.trim().is_empty());

        set_submitting.set(true);

        let state = state_for_submit.clone();
        spawn_local(async move {
            match api::create_news(&t, &c, &a, image).await {
                Ok(_) => {
                    if let Ok(news) = api::fetch_news().await {
                        state.news.set(news);
                    }
                    state.show_success("Article publié avec succès");
                    set_title.set(String::new());
                    set_content.set(String::new());
                    set_author.set(String::new());
                    set_image_url.set(String::new());
                }
                Err(e) => state.show_error(&e),
            }
            set_submitting.set(false);
        });
    };

    let state_for_list = state.clone();

    view! {
        <div class="grid md:grid-cols-2 gap-8">
            // Publishing form
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Nouvel article"</h2>
                <form on:submit=on_submit class="space-y-4">
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Titre *"</label>
                        <input
                            type="text"
                            prop:value=move || title.get()
                            on:input=move |ev| set_title.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Contenu *"</label>
                        <textarea
                            rows=6
                            prop:value=move || content.get()
                            on:input=move |ev| set_content.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Auteur *"</label>
                        <input
                            type="text"
                            prop:value=move || author.get()
                            on:input=move |ev| set_author.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <div>
                        <label class="block text-sm text-gray-400 mb-2">"Image (URL)"</label>
                        <input
                            type="url"
                            prop:value=move || image_url.get()
                            on:input=move |ev| set_image_url.set(event_target_value(&ev))
                            class="w-full bg-gray-700 rounded-lg px-4 py-3
                                   border border-gray-600 focus:border-primary-500 focus:outline-none"
                        />
                    </div>
                    <button
                        type="submit"
                        disabled=move || submitting.get()
                        class="w-full px-4 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                               rounded-lg font-medium transition-colors"
                    >
                        {move || if submitting.get() { "Publication..." } else { "Publier l'article" }}
                    </button>
                </form>
            </section>

            // Article list
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Articles publiés"</h2>
                <div class="space-y-2">
                    {move || {
                        let news = state_for_list.news.get();
                        if news.is_empty() {
                            return view! {
                                <p class="text-gray-400 text-sm">"Aucun article publié"</p>
                            }.into_view();
                        }

                        let state = state_for_list.clone();
                        news.into_iter().map(|article| {
                            let state = state.clone();
                            let id = article.id.clone();
                            let on_delete = move |_| {
                                if !confirm("Supprimer cet article ?") {
                                    return;
                                }
                                let state = state.clone();
                                let id = id.clone();
                                spawn_local(async move {
                                    match api::delete_news(&id).await {
                                        Ok(msg) => {
                                            if let Ok(news) = api::fetch_news().await {
                                                state.news.set(news);
                                            }
                                            state.show_success(&msg);
                                        }
                                        Err(e) => state.show_error(&e),
                                    }
                                });
                            };

                            view! {
                                <div class="flex items-center justify-between py-2 border-b border-gray-700 last:border-0">
                                    <div>
                                        <span class="font-medium">{article.title.clone()}</span>
                                        <span class="text-gray-400 text-sm ml-2">{article.author.clone()}</span>
                                    </div>
                                    <button
                                        on:click=on_delete
                                        class="text-red-400 hover:text-red-300 text-sm"
                                    >
                                        "Supprimer"
                                    </button>
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </section>
        </div>
    }
}

/// Score entry for matches that are not finished yet
#[component]
fn ScoresAdmin() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let state_for_list = state.clone();

    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"Saisie des scores"</h2>
            <div class="space-y-3">
                {move || {
                    let pending: Vec<_> = state_for_list.matches.get()
                        .into_iter()
                        .filter(|m| m.status == "scheduled" || m.status == "live")
                        .collect();

                    if pending.is_empty() {
                        return view! {
                            <p class="text-gray-400 text-sm">"Aucun match en attente de score"</p>
                        }.into_view();
                    }

                    let state = state_for_list.clone();
                    pending.into_iter().map(|m| {
                        view! { <ScoreRow m=m state=state.clone() /> }
                    }).collect_view()
                }}
            </div>
        </section>
    }
}

/// One editable score line
#[component]
fn ScoreRow(m: crate::state::global::Match, state: GlobalState) -> impl IntoView {
    let home = state.team_name(&m.home_team_id);
    let away = state.team_name(&m.away_team_id);
    let match_id = m.id.clone();

    let (home_score, set_home_score) = create_signal(String::new());
    let (away_score, set_away_score) = create_signal(String::new());
    let (saving, set_saving) = create_signal(false);

    let on_save = move |_| {
        let h = home_score.get();
        let a = away_score.get();

        let (h, a) = match (h.trim().parse::<u32>(), a.trim().parse::<u32>()) {
            (Ok(h), Ok(a)) => (h, a),
            _ => {
                state.show_error("Les deux scores sont obligatoires");
                return;
            }
        };

        set_saving.set(true);

        let state = state.clone();
        let match_id = match_id.clone();
        spawn_local(async move {
            match api::record_score(&match_id, h, a).await {
                Ok(updated) => {
                    state.matches.update(|v| {
                        if let Some(slot) = v.iter_mut().find(|x| x.id == updated.id) {
                            *slot = updated;
                        }
                    });
                    state.show_success("Score enregistré avec succès");
                }
                Err(e) => state.show_error(&e),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="flex items-center justify-between bg-gray-900 rounded-lg p-3 border border-gray-700">
            <div>
                <span class="font-medium">{home}" - "{away}</span>
                <span class="text-gray-400 text-sm ml-2">{format_date_time(&m.match_date)}</span>
            </div>
            <div class="flex items-center space-x-2">
                <input
                    type="number"
                    min=0
                    placeholder="0"
                    prop:value=move || home_score.get()
                    on:input=move |ev| set_home_score.set(event_target_value(&ev))
                    class="w-16 bg-gray-700 rounded-lg px-2 py-2 text-center
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <span class="text-gray-400">"-"</span>
                <input
                    type="number"
                    min=0
                    placeholder="0"
                    prop:value=move || away_score.get()
                    on:input=move |ev| set_away_score.set(event_target_value(&ev))
                    class="w-16 bg-gray-700 rounded-lg px-2 py-2 text-center
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
                <button
                    on:click=on_save
                    disabled=move || saving.get()
                    class="px-4 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg text-sm font-medium transition-colors"
                >
                    {move || if saving.get() { "..." } else { "Enregistrer" }}
                </button>
            </div>
        </div>
    }
}
