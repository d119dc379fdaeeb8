//! Presentational controls. No business logic lives here; the page passes in
//! state and callbacks.

mod button;
mod comic_image;
mod header;
mod image;
mod input;
mod tooltip;

pub use button::Button;
pub use comic_image::{use_image_phase, ComicImage};
pub use header::Header;
pub use image::Image;
pub use input::SearchInput;
pub use tooltip::{tooltip_position, Bounds, Tooltip};

/// Join class fragments with single spaces, skipping empty ones.
pub fn class_names(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
