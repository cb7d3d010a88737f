//! News Pages
//!
//! Published article list and the single-article view.

use leptos::*;
use leptos_router::*;

use crate::api;
use crate::components::Loading;
use crate::state::global::{format_date, GlobalState, NewsArticle};

/// News list page
#[component]
pub fn News() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Fetch published articles on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);
            match api::fetch_news().await {
                Ok(news) => state.news.set(news),
                Err(e) => state.show_error(&e),
            }
            state.loading.set(false);
        });
    });

    let news_signal = state.news;

    view! {
        <div class="space-y-8">
            <div>
                <h1 class="text-3xl font-bold">"Actualités"</h1>
                <p class="text-gray-400 mt-1">"Toute l'actualité du championnat"</p>
            </div>

            {move || {
                if state.loading.get() {
                    return view! { <Loading /> }.into_view();
                }

                let news = news_signal.get();
                if news.is_empty() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400">"Aucune actualité pour le moment"</p>
                        </div>
                    }.into_view();
                }

                view! {
                    <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-4">
                        {news.into_iter().map(|article| view! {
                            <NewsCard article=article />
                        }).collect_view()}
                    </div>
                }.into_view()
            }}
        </div>
    }
}

/// One article card in the list
#[component]
fn NewsCard(article: NewsArticle) -> impl IntoView {
    let href = format!("/news/{}", article.id);
    let preview: String = article.content.chars().take(140).collect();
    let truncated = article.content.chars().count() > 140;

    view! {
        <A href=href class="block bg-gray-800 rounded-xl border border-gray-700 hover:border-gray-600 transition-colors overflow-hidden">
            {article.image_url.clone().map(|url| view! {
                <img src=url alt=article.title.clone() class="w-full h-40 object-cover" />
            })}
            <div class="p-4">
                <h3 class="font-semibold text-lg">{article.title.clone()}</h3>
                <p class="text-gray-400 text-sm mt-2">
                    {preview}{if truncated { "…" } else { "" }}
                </p>
                <div class="text-gray-500 text-xs mt-3">
                    {article.author.clone()}" · "{format_date(&article.created_at)}
                </div>
            </div>
        </A>
    }
}

/// Single article page
#[component]
pub fn NewsDetail() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let params = use_params_map();
    let (article, set_article) = create_signal::<Option<NewsArticle>>(None);
    let (not_found, set_not_found) = create_signal(false);

    create_effect(move |_| {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        if id.is_empty() {
            return;
        }
        let state = state.clone();
        spawn_local(async move {
            match api::fetch_news_article(&id).await {
                Ok(a) => set_article.set(Some(a)),
                Err(e) => {
                    set_not_found.set(true);
                    state.show_error(&e);
                }
            }
        });
    });

    view! {
        <div class="max-w-3xl mx-auto space-y-6">
            <A href="/news" class="text-primary-400 text-sm hover:underline">"← Retour aux actualités"</A>

            {move || {
                if not_found.get() {
                    return view! {
                        <div class="text-center py-12">
                            <p class="text-gray-400">"Article non trouvé"</p>
                        </div>
                    }.into_view();
                }

                match article.get() {
                    None => view! { <Loading /> }.into_view(),
                    Some(article) => view! {
                        <article class="bg-gray-800 rounded-xl border border-gray-700 overflow-hidden">
                            {article.image_url.clone().map(|url| view! {
                                <img src=url alt=article.title.clone() class="w-full h-64 object-cover" />
                            })}
                            <div class="p-6">
                                <h1 class="text-3xl font-bold">{article.title.clone()}</h1>
                                <div class="text-gray-400 text-sm mt-2">
                                    "Par "{article.author.clone()}" · "{format_date(&article.created_at)}
                                </div>
                                <div class="mt-6 text-gray-200 whitespace-pre-line leading-relaxed">
                                    {article.content.clone()}
                                </div>
                            </div>
                        </article>
                    }.into_view(),
                }
            }}
        </div>
    }
}
