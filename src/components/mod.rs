pub mod app;
pub mod nav_bar;
pub mod route_filter;
pub mod vehicle_panel;
