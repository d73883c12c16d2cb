// Panel geometry
pub const OPENED_SIDEBAR_WIDTH: &str = "240px";
pub const CLOSED_SIDEBAR_WIDTH: &str = "72px";

// Toggle button straddles the panel edge when open, floats beside it when closed
pub const TOGGLE_LEFT_OPENED: &str = "calc(100% - 12px)";
pub const TOGGLE_LEFT_CLOSED: &str = "calc(100% + 12px)";
pub const TOGGLE_ROTATION_OPENED: &str = "180deg";
pub const TOGGLE_ROTATION_CLOSED: &str = "0deg";

pub const DEFAULT_BRAND: &str = "TensorFlow";

pub const FONT_AWESOME_CSS: &str =
    "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css";

// Launcher configuration sources
pub const ENV_CONFIG_PATH: &str = "SIDEBAR_CONFIG";
pub const ENV_COLOR: &str = "SIDEBAR_COLOR";
