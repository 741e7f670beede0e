pub mod render;
pub mod tab_bar;

mod escape;

pub use render::render_attachment;
pub use tab_bar::{render_tab_bar, render_viewer_panel};
