use urbi_core::model::PublishStatus;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct StatusBadgeProps {
    pub status: PublishStatus,
}

/// Coloured publish-status chip.
#[function_component(StatusBadge)]
pub fn status_badge(props: &StatusBadgeProps) -> Html {
    html! {
        <span
            class={classes!("status-badge", props.status.as_str())}
            style={format!("background-color: {};", props.status.color())}
        >
            { props.status.label() }
        </span>
    }
}
