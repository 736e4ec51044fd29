//! Session guard for protected views

use super::context::use_is_authenticated;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RequireSessionProps {
    pub children: Children,
    /// Rendered instead of the children while anonymous, usually a login form
    #[prop_or_default]
    pub fallback: Html,
}

/// Shows its children only while the session holds a token
#[function_component(RequireSession)]
pub fn require_session(props: &RequireSessionProps) -> Html {
    if use_is_authenticated() {
        html! { <>{ props.children.clone() }</> }
    } else {
        props.fallback.clone()
    }
}
