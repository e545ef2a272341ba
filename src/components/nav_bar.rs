use yew::prelude::*;

// Primary navigation. The anchors point at the server-rendered pages; the
// one matching the current location gets highlighted after first render
// (see crate::nav).
#[function_component(NavBar)]
pub fn nav_bar() -> Html {
    let link_style = "color:#8b949e; text-decoration:none; font-size:15px;";
    html! {
        <nav style="display:flex; align-items:center; gap:18px; padding:12px 20px; background:rgba(22,27,34,0.95); border-bottom:1px solid #30363d;">
            <span style="font-weight:700; font-size:17px; color:var(--primary-color);">{"🚆 RTD Transit Tracker"}</span>
            <a class="nav-link" href="/" style={link_style}>{"Live Vehicles"}</a>
            <a class="nav-link" href="/map" style={link_style}>{"Map"}</a>
            <a class="nav-link" href="/routes" style={link_style}>{"Route Planner"}</a>
            <a class="nav-link" href="/about" style={link_style}>{"About"}</a>
        </nav>
    }
}
