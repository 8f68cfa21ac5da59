use dioxus::prelude::*;
use vintrack_core::{follow_session, observe_session, NavigationShell, PageMode, Session};

use crate::context::SignInPending;
use crate::pages::{Dashboard, Landing};
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the shell and session context, and switches
/// between the landing page and the dashboard. There is no router: the page
/// is whatever the shell says, so a lost session always lands on the
/// landing page.
#[component]
pub fn App() -> Element {
    let startup = use_hook(crate::startup);

    let mut shell: Signal<NavigationShell> = use_signal(NavigationShell::new);
    let mut session: Signal<Option<Session>> = use_signal(|| None);
    let pending: Signal<SignInPending> = use_signal(SignInPending::default);

    use_context_provider(|| shell);
    use_context_provider(|| ReadOnlySignal::new(session));
    use_context_provider(|| pending);
    use_context_provider(|| startup.provider.clone());
    use_context_provider(|| startup.config.clone());

    // Session subscription for the lifetime of the app. Dropping this future
    // on unmount drops the stream, which releases the subscription.
    let provider = startup.provider.clone();
    use_future(move || {
        let provider = provider.clone();
        async move {
            let stream = observe_session(provider.as_ref()).await;
            follow_session(stream, move |next| {
                shell.write().apply_session(next.as_ref());
                session.set(next);
            })
            .await;
        }
    });

    let page = shell.read().page_mode();

    rsx! {
        style { {GLOBAL_STYLES} }
        match page {
            PageMode::Landing => rsx! { Landing {} },
            PageMode::Application => rsx! { Dashboard {} },
        }
    }
}
