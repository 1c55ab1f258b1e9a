mod status_bar;
mod title;

pub use status_bar::StatusBarWidget;
pub use title::{title_line, TitleWidget};
