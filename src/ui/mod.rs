pub mod feedback;
pub mod menu;
