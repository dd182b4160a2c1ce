pub mod app_reducer;
pub mod todos_reducer;
pub mod visibility_filter_reducer;
