pub mod api_utils;
pub mod format_utils;
pub mod icons;
