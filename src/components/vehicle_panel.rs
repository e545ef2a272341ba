use crate::model::Vehicle;
use crate::util::{format_speed, format_time};
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct VehiclePanelProps {
    /// Already filtered to the selected route.
    pub vehicles: Vec<Vehicle>,
    /// Total active vehicles across all routes, from the API envelope.
    pub total: usize,
    /// Number of distinct routes with active vehicles.
    pub route_count: usize,
}

fn cell(text: String) -> Html {
    html! { <td style="padding:6px 12px; border-bottom:1px solid #21262d; font-size:13px; font-variant-numeric:tabular-nums;">{ text }</td> }
}

fn vehicle_row(v: &Vehicle) -> Html {
    let position = match (v.latitude, v.longitude) {
        (Some(lat), Some(lon)) => format!("{lat:.4}, {lon:.4}"),
        _ => "-".to_string(),
    };
    html! {
        <tr>
            { cell(v.vehicle_id.clone().unwrap_or_else(|| "?".to_string())) }
            { cell(v.route_id.clone().unwrap_or_else(|| "-".to_string())) }
            { cell(position) }
            { cell(format_speed(v.speed)) }
            { cell(v.timestamp.map(|t| format_time(t as f64)).unwrap_or_else(|| "-".to_string())) }
        </tr>
    }
}

#[function_component(VehiclePanel)]
pub fn vehicle_panel(props: &VehiclePanelProps) -> Html {
    let th = "padding:6px 12px; text-align:left; font-size:12px; color:#8b949e; border-bottom:1px solid #30363d;";
    html! {
        <div style="margin:0 20px 20px; background:rgba(22,27,34,0.9); border:1px solid #30363d; border-radius:8px; overflow:hidden;">
            <div style="padding:10px 12px; font-size:14px; font-weight:600;">
                { format!("{} active vehicles on {} routes", props.total, props.route_count) }
            </div>
            <table style="width:100%; border-collapse:collapse;">
                <thead>
                    <tr>
                        <th style={th}>{"Vehicle"}</th>
                        <th style={th}>{"Route"}</th>
                        <th style={th}>{"Position"}</th>
                        <th style={th}>{"Speed"}</th>
                        <th style={th}>{"Updated"}</th>
                    </tr>
                </thead>
                <tbody>
                    if props.vehicles.is_empty() {
                        <tr><td colspan="5" style="padding:16px; text-align:center; color:#8b949e;">{"No vehicles on this route right now"}</td></tr>
                    } else {
                        { for props.vehicles.iter().map(vehicle_row) }
                    }
                </tbody>
            </table>
        </div>
    }
}
