mod loading;
pub mod tabs;
mod ui_config;
mod ui_text;
mod utils;

pub(crate) use loading::render_loading;
pub(crate) use ui_config::UI_CONFIG;
pub(crate) use ui_text::UI_TEXT;
pub(crate) use utils::metric;
