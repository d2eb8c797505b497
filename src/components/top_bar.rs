use yew::prelude::*;

use crate::models::User;

#[derive(Properties, PartialEq)]
pub struct TopBarProps {
    pub user: Option<User>,
    pub on_logout: Callback<()>,
}

#[function_component(TopBar)]
pub fn top_bar(props: &TopBarProps) -> Html {
    let on_logout = {
        let on_logout = props.on_logout.clone();
        Callback::from(move |_: MouseEvent| on_logout.emit(()))
    };

    html! {
        <div class="top-bar">
            <div class="brand">
                <div class="brand-logo">{"B"}</div>
                <div>
                    <p class="brand-title">{"Base44 – Sales Monitor"}</p>
                    <p class="brand-subtitle">{"Real-time targets & customer progress"}</p>
                </div>
            </div>
            {
                if let Some(user) = &props.user {
                    html! {
                        <div class="user-info">
                            <span>{ format!("{} • {}", user.name, user.role.label()) }</span>
                            <button onclick={on_logout}>{"Logout"}</button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
