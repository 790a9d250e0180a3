pub mod prompts;
pub mod render;

pub use prompts::{acknowledge_error, collect_profile_edits, main_menu, MenuAction};
pub use render::{
    display_bmi, display_charts, display_error, display_loading, display_panel,
    display_recommendations,
};
