use desktop_host_web::build_host_services;
use desktop_runtime::{desktop_config, DesktopProvider, DesktopShell};
use leptos::*;
use leptos_meta::*;
use leptos_router::*;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Desktop" />
        <Meta name="description" content="A CMS-driven desktop-style portfolio." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=DesktopEntry />
                    <Route path="/*any" view=DesktopEntry />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
pub fn DesktopEntry() -> impl IntoView {
    let host_services = build_host_services(&desktop_config().cms);

    view! {
        <DesktopProvider host_services>
            <DesktopShell />
        </DesktopProvider>
    }
}
