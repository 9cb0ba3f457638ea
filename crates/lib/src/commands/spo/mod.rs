pub mod app_uninstall;
pub mod hubsite_disconnect;
pub mod set;
pub mod sitescript_set;
