//! Main application component

use crate::components::*;
use crate::pages::*;
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="site" href="/assets/site.css"/>
        <Router>
            <div class="min-h-screen bg-white">
                <SiteNav/>
                <main>
                    <Routes>
                        <Route path="/" view=HomePage/>
                        <Route path="/tools" view=ToolsIndexPage/>
                        <Route path="/tools/compare" view=ComparisonsIndexPage/>
                        <Route path="/tools/compare/:slug" view=ComparisonPageView/>
                        <Route path="/tools/:slug" view=ToolPage/>
                        <Route path="/*any" view=NotFound/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
