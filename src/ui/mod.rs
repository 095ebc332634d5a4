pub mod layout;
mod menu;
mod practice;
mod summary;

pub use layout::{calculate_practice_chunks, calculate_summary_chunks};
pub use menu::draw_menu;
pub use practice::{draw_practice, draw_quit_confirmation};
pub use summary::draw_summary;
