use yew::prelude::*;

use super::StatCard;
use crate::hooks::use_dashboard;
use crate::models::User;
use crate::viewmodels::{features_for_role, DashboardViewModel};

#[derive(Properties, PartialEq)]
pub struct DashboardProps {
    pub user: User,
    pub token: String,
}

#[function_component(Dashboard)]
pub fn dashboard(props: &DashboardProps) -> Html {
    let handle = use_dashboard(props.token.clone());

    if handle.loading {
        return html! { <div class="dashboard-loading">{"Loading dashboard…"}</div> };
    }

    // Derivación pura: se recalcula en cada render desde los datos actuales
    let vm = DashboardViewModel::derive(&handle.data);
    let features = features_for_role(&props.user.role);

    html! {
        <div class="dashboard">
            <div class="stat-grid">
                <StatCard
                    title="Total Target"
                    value={vm.total_target_display()}
                    accent=true
                />
                <StatCard title="Pipeline Value" value={vm.pipeline_display()} />
                <StatCard
                    title="Active Customers"
                    value={vm.active_customers.to_string()}
                />
            </div>

            <div class="quick-view">
                <div class="quick-view-header">
                    <h3>{"Quick View"}</h3>
                    <span class="role-badge">{ props.user.role.label() }</span>
                </div>
                <ul>
                    { for features.iter().map(|feature| html! { <li>{ *feature }</li> }) }
                </ul>
            </div>
        </div>
    }
}
