use yew::prelude::*;

use super::{Dashboard, LoginForm, TopBar};
use crate::hooks::{use_session, SessionPhase};

#[function_component(App)]
pub fn app() -> Html {
    let session = use_session();

    let user = match &session.phase {
        SessionPhase::Authenticated(user) => Some(user.clone()),
        _ => None,
    };

    html! {
        <div class="app">
            <header class="hero">
                <span class="badge">{"Base44"}</span>
                <h1>{"Sales Monitor for Admins, GMs & AMs"}</h1>
                <p>{"Role-based dashboards to track targets, pipeline, and customer progress in real time."}</p>
            </header>

            <main class="panel">
                <TopBar user={user} on_logout={session.logout.clone()} />
                {
                    match &session.phase {
                        SessionPhase::Checking => html! {
                            <div class="session-checking">{"Restoring session…"}</div>
                        },
                        SessionPhase::Anonymous => html! {
                            <>
                                <h2>{"Sign in to your dashboard"}</h2>
                                <LoginForm on_token={session.on_token.clone()} />
                            </>
                        },
                        SessionPhase::Authenticated(user) => html! {
                            <Dashboard
                                user={user.clone()}
                                token={session.token.clone().unwrap_or_default()}
                            />
                        },
                    }
                }
            </main>
        </div>
    }
}
