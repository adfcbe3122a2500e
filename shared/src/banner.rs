//! Static content of the page banner.

pub const APP_NAME: &str = "Ancient Text Search Engine";

pub const TITLE: &str = "Search Engine";
pub const SUBTITLE: &str = "Explore ancient texts and biblical parallels";

pub const HEADER_CLASS: &str = "bg-light";
pub const CONTAINER_CLASS: &str = "container text-center";
pub const TITLE_CLASS: &str = "display-4 fw-bold";
pub const SUBTITLE_CLASS: &str = "lead text-muted";
