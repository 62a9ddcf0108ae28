use log::Level;

/// Height of the fixed nav bar. A section is current when this line crosses it.
pub const NAV_OFFSET: f64 = 100.0;

/// How close the viewport bottom must be to the document bottom to pin `contact`.
pub const BOTTOM_TOLERANCE: f64 = 100.0;

pub const HERO_TITLE_DELAY_MS: u32 = 500;
pub const HERO_SUBTITLE_DELAY_MS: u32 = 700;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Directory trunk copies next to `index.html` (`rel="copy-dir"`).
pub const ASSET_DIR: &str = "assets";

pub fn get_asset_base() -> String {
    format!("/{}", ASSET_DIR)
}

pub fn hero_image_url() -> String {
    format!("{}/heroimage.jpeg", get_asset_base())
}

pub fn placeholder_url(width: u32, height: u32) -> String {
    format!("/api/placeholder/{}/{}", width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_image_lives_under_asset_base() {
        let url = hero_image_url();
        assert!(url.starts_with(&get_asset_base()));
        assert!(url.ends_with("/heroimage.jpeg"));
    }

    #[test]
    fn hero_image_is_served_from_copied_assets() {
        assert_eq!(hero_image_url(), "/assets/heroimage.jpeg");
    }

    #[test]
    fn index_html_copies_asset_dir() {
        let index = include_str!("../index.html");
        let copy_dir = format!("<link data-trunk rel=\"copy-dir\" href=\"{}\" />", ASSET_DIR);
        assert!(index.contains(&copy_dir), "index.html must copy `{}`", ASSET_DIR);
    }

    #[test]
    fn placeholder_encodes_dimensions() {
        assert_eq!(placeholder_url(400, 300), "/api/placeholder/400/300");
    }
}
