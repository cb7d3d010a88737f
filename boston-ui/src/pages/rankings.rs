//! Rankings Page
//!
//! Standings table in the order returned by the API.

use leptos::*;

use crate::api;
use crate::components::Loading;
use crate::state::global::GlobalState;

/// Rankings page component
#[component]
pub fn Rankings() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch rankings on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::fetch_rankings().await {
                Ok(rankings) => state.rankings.set(rankings),
                Err(e) => state.show_error(&e),
            }
            state.loading.set(false);
        });
    });

    let rankings_signal = state.rankings;

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Classement"</h1>
                <p class="text-gray-400 mt-1">"3 points par victoire, 1 point par match nul"</p>
            </div>

            {move || {
                if state.loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                let rankings = rankings_signal.get();
                if rankings.is_empty() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400">"Aucune équipe inscrite pour le moment"</p>
                        </div>
                    }.into_view();
                }

                let total = rankings.len();
                view! {
                    <div class="bg-gray-800 rounded-xl overflow-hidden border border-gray-700">
                        <table class="w-full text-sm">
                            <thead class="bg-gray-700 text-gray-300">
                                <tr>
                                    <th class="px-4 py-3 text-left">"Pos"</th>
                                    <th class="px-4 py-3 text-left">"Équipe"</th>
                                    <th class="px-4 py-3 text-center">"Pts"</th>
                                    <th class="px-4 py-3 text-center">"J"</th>
                                    <th class="px-4 py-3 text-center">"G"</th>
                                    <th class="px-4 py-3 text-center">"N"</th>
                                    <th class="px-4 py-3 text-center">"P"</th>
                                    <th class="px-4 py-3 text-center">"BP"</th>
                                    <th class="px-4 py-3 text-center">"BC"</th>
                                    <th class="px-4 py-3 text-center">"Diff"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rankings.into_iter().map(|row| {
                                    let row_class = position_class(row.position as usize, total);
                                    let diff = if row.goal_difference > 0 {
                                        format!("+{}", row.goal_difference)
                                    } else {
                                        row.goal_difference.to_string()
                                    };
                                    view! {
                                        <tr class=format!("border-t border-gray-700 {}", row_class)>
                                            <td class="px-4 py-3">
                                                <span class=format!(
                                                    "inline-flex items-center justify-center w-7 h-7 rounded-full font-bold {}",
                                                    position_badge_class(row.position as usize),
                                                )>
                                                    {row.position}
                                                </span>
                                            </td>
                                            <td class="px-4 py-3 font-medium">{row.team_name}</td>
                                            <td class="px-4 py-3 text-center font-bold">{row.points}</td>
                                            <td class="px-4 py-3 text-center">{row.played}</td>
                                            <td class="px-4 py-3 text-center">{row.won}</td>
                                            <td class="px-4 py-3 text-center">{row.drawn}</td>
                                            <td class="px-4 py-3 text-center">{row.lost}</td>
                                            <td class="px-4 py-3 text-center">{row.goals_for}</td>
                                            <td class="px-4 py-3 text-center">{row.goals_against}</td>
                                            <td class="px-4 py-3 text-center">{diff}</td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// Gold, silver and bronze circles for the podium places
fn position_badge_class(position: usize) -> &'static str {
    match position {
        1 => "bg-yellow-500 text-gray-900",
        2 => "bg-gray-300 text-gray-900",
        3 => "bg-amber-600 text-gray-900",
        _ => "text-gray-200",
    }
}

/// Highlight promotion and relegation places once the table is big enough
fn position_class(position: usize, total: usize) -> &'static str {
    if total < 6 {
        return "";
    }
    if position <= 3 {
        "bg-green-900/30"
    } else if position > total - 3 {
        "bg-red-900/30"
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_highlight_for_small_tables() {
        assert_eq!(position_class(1, 5), "");
        assert_eq!(position_class(5, 5), "");
    }

    #[test]
    fn test_podium_badges() {
        assert_eq!(position_badge_class(1), "bg-yellow-500 text-gray-900");
        assert_eq!(position_badge_class(2), "bg-gray-300 text-gray-900");
        assert_eq!(position_badge_class(3), "bg-amber-600 text-gray-900");
        assert_eq!(position_badge_class(4), "text-gray-200");
    }

    #[test]
    fn test_highlight_zones() {
        assert_eq!(position_class(1, 8), "bg-green-900/30");
        assert_eq!(position_class(3, 8), "bg-green-900/30");
        assert_eq!(position_class(4, 8), "");
        assert_eq!(position_class(5, 8), "");
        assert_eq!(position_class(6, 8), "bg-red-900/30");
        assert_eq!(position_class(8, 8), "bg-red-900/30");
    }
}
