use super::{nav_bar::NavBar, route_filter::RouteFilter, vehicle_panel::VehiclePanel};
use crate::api::fetch_vehicles;
use crate::model::VehiclesResponse;
use crate::nav::highlight_active_nav;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

const FILTER_STORAGE_KEY: &str = "rtd_route_filter";
const REFRESH_MS: i32 = 30_000;

#[derive(Clone, PartialEq)]
enum FetchState {
    Loading,
    Loaded(VehiclesResponse),
    Failed(String),
}

#[function_component(App)]
pub fn app() -> Html {
    let data = use_state(|| FetchState::Loading);
    let selected = use_state(|| None::<String>);
    // Bumped by the refresh interval to re-run the fetch effect.
    let refresh = use_state(|| 0u32);

    // One-shot setup after first render: highlight the active nav link and
    // restore the persisted route filter.
    {
        let selected = selected.clone();
        use_effect_with((), move |_| {
            highlight_active_nav();
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    if let Ok(Some(route)) = store.get_item(FILTER_STORAGE_KEY) {
                        if !route.is_empty() {
                            selected.set(Some(route));
                        }
                    }
                }
            }
            || ()
        });
    }

    // Fetch on mount and on every refresh tick.
    {
        let data = data.clone();
        use_effect_with(*refresh, move |_| {
            spawn_local(async move {
                match fetch_vehicles().await {
                    Ok(resp) => data.set(FetchState::Loaded(resp)),
                    Err(e) => {
                        web_sys::console::warn_1(&JsValue::from_str(&e));
                        data.set(FetchState::Failed(e));
                    }
                }
            });
            || ()
        });
    }

    // Refresh interval, cleared on unmount.
    {
        let refresh = refresh.clone();
        use_effect_with((), move |_| {
            let mut ticks = 0u32;
            let tick_cb = Closure::wrap(Box::new(move || {
                ticks += 1;
                refresh.set(ticks);
            }) as Box<dyn FnMut()>);
            let window = web_sys::window().expect("no global `window` exists");
            let interval_id = window
                .set_interval_with_callback_and_timeout_and_arguments_0(
                    tick_cb.as_ref().unchecked_ref(),
                    REFRESH_MS,
                )
                .unwrap();
            move || {
                if let Some(win) = web_sys::window() {
                    win.clear_interval_with_handle(interval_id);
                }
                drop(tick_cb);
            }
        });
    }

    // Persist the route filter whenever it changes.
    {
        let selected_value = (*selected).clone();
        use_effect_with(selected_value.clone(), move |_| {
            if let Some(win) = web_sys::window() {
                if let Ok(Some(store)) = win.local_storage() {
                    let _ = match &selected_value {
                        Some(route) => store.set_item(FILTER_STORAGE_KEY, route),
                        None => store.remove_item(FILTER_STORAGE_KEY),
                    };
                }
            }
            || ()
        });
    }

    let on_select = {
        let selected = selected.clone();
        Callback::from(move |route: Option<String>| selected.set(route))
    };

    let content = match &*data {
        FetchState::Loading => html! {
            <div style="padding:40px; text-align:center; color:#8b949e;">{"Loading vehicles…"}</div>
        },
        FetchState::Failed(e) => html! {
            <div style="margin:20px; padding:16px; border:1px solid #f85149; border-radius:8px; color:#f85149;">
                { format!("Could not load vehicle data: {e}") }
            </div>
        },
        FetchState::Loaded(resp) => {
            let filter = (*selected).clone();
            let vehicles: Vec<_> = resp
                .vehicles
                .iter()
                .filter(|v| v.on_route(filter.as_deref()))
                .cloned()
                .collect();
            html! {
                <>
                    <RouteFilter
                        routes={resp.routes.clone()}
                        selected={filter}
                        on_select={on_select.clone()}
                    />
                    <VehiclePanel
                        vehicles={vehicles}
                        total={resp.count}
                        route_count={resp.route_counts.len()}
                    />
                </>
            }
        }
    };

    html! {
        <div style="min-height:100vh; background:#0d1117; color:#e6edf3;">
            <NavBar />
            { content }
        </div>
    }
}
