use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct RouteFilterProps {
    /// Sorted route IDs with at least one active vehicle.
    pub routes: Vec<String>,
    /// `None` shows every route.
    pub selected: Option<String>,
    pub on_select: Callback<Option<String>>,
}

#[function_component(RouteFilter)]
pub fn route_filter(props: &RouteFilterProps) -> Html {
    let base = "padding:4px 12px; font-size:13px; border-radius:14px; cursor:pointer;";
    let idle = format!("{base} background:transparent; border:1px solid #30363d; color:#8b949e;");
    let active =
        format!("{base} background:var(--primary-color); border:1px solid transparent; color:#fff; font-weight:600;");

    let button = |label: &str, value: Option<String>| {
        let style = if props.selected == value { &active } else { &idle };
        let cb = props.on_select.clone();
        let onclick = Callback::from(move |_| cb.emit(value.clone()));
        html! { <button {onclick} style={style.clone()}>{ label }</button> }
    };

    html! {
        <div style="display:flex; flex-wrap:wrap; gap:6px; padding:12px 20px;">
            { button("All", None) }
            { for props.routes.iter().map(|r| button(r, Some(r.clone()))) }
        </div>
    }
}
