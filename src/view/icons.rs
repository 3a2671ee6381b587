//! src/view/icons.rs
//! ============================================================================
//! # Result Icons (Nerd Fonts)
//!
//! Maps the server's `icon_class` hint (Font Awesome class names) onto Nerd
//! Font glyphs, falling back on the directory flag.

pub const FOLDER_ICON: &str = "";
pub const FILE_ICON: &str = "";
pub const IMAGE_ICON: &str = "";
pub const VIDEO_ICON: &str = "";
pub const AUDIO_ICON: &str = "";
pub const ARCHIVE_ICON: &str = "";
pub const CODE_ICON: &str = "";
pub const DOCUMENT_ICON: &str = "";

pub fn for_entry(icon_class: Option<&str>, is_directory: bool) -> &'static str {
    if is_directory {
        return FOLDER_ICON;
    }
    match icon_class.unwrap_or_default() {
        c if c.contains("image") => IMAGE_ICON,
        c if c.contains("video") => VIDEO_ICON,
        c if c.contains("audio") || c.contains("music") => AUDIO_ICON,
        c if c.contains("archive") || c.contains("zipper") => ARCHIVE_ICON,
        c if c.contains("code") => CODE_ICON,
        c if c.contains("pdf") || c.contains("word") || c.contains("text") => DOCUMENT_ICON,
        _ => FILE_ICON,
    }
}
