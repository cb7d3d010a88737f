//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::{Nav, Toast};
use crate::pages::{Admin, Calendar, Home, Matches, News, NewsDetail, Rankings};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Provide global state to all components
    provide_global_state();

    view! {
        <Router>
            <div class="min-h-screen bg-gray-900 text-white flex flex-col">
                // Navigation header
                <Nav />

                // Main content area
                <main class="flex-1 container mx-auto px-4 py-8 pb-24">
                    <Routes>
                        <Route path="/" view=Home />
                        <Route path="/matches" view=Matches />
                        <Route path="/rankings" view=Rankings />
                        <Route path="/calendar" view=Calendar />
                        <Route path="/news" view=News />
                        <Route path="/news/:id" view=NewsDetail />
                        <Route path="/admin" view=Admin />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                // Footer
                <Footer />

                // Toast notifications
                <Toast />
            </div>
        </Router>
    }
}

/// Footer with league identity
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="bg-gray-800 border-t border-gray-700 py-4 px-4 mt-8">
            <div class="container mx-auto flex items-center justify-between text-sm text-gray-400">
                <span>"⚽ Championnat BOSTON"</span>
                <span>"Le championnat local de football"</span>
            </div>
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center min-h-[60vh] text-center">
            <div class="text-6xl mb-4">"⚽"</div>
            <h1 class="text-3xl font-bold mb-2">"Page non trouvée"</h1>
            <p class="text-gray-400 mb-6">"La page que vous cherchez n'existe pas."</p>
            <A
                href="/"
                class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg font-medium transition-colors"
            >
                "Retour à l'accueil"
            </A>
        </div>
    }
}
