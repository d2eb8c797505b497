use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatCardProps {
    pub title: AttrValue,
    pub value: AttrValue,
    #[prop_or_default]
    pub accent: bool,
}

#[function_component(StatCard)]
pub fn stat_card(props: &StatCardProps) -> Html {
    let class = if props.accent {
        "stat-card stat-card-accent"
    } else {
        "stat-card"
    };

    html! {
        <div class={class}>
            <p class="stat-title">{ props.title.clone() }</p>
            <p class="stat-value">{ props.value.clone() }</p>
        </div>
    }
}
