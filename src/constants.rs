// Page wiring constants: the ids/classes bootstrap expects in the markup
// and the attributes it reads off them. Animation tuning lives in
// `core/constants.rs`.

// Elements
pub const ROOT_ID: &str = "keychain";
pub const CURSOR_ID: &str = "cursor";
pub const YEAR_ID: &str = "y";
pub const TAG_SELECTOR: &str = ".tag";
pub const ARM_SELECTOR: &str = ".arm";
pub const RING_HOOK_SELECTOR: &str = ".ring-hook";
pub const TAG_HOOK_SELECTOR: &str = ".hook";
pub const ANCHOR_LINK_SELECTOR: &str = "a[href^='#']";
pub const CAROUSEL_SELECTOR: &str = ".visual-carousel";

// Attributes
pub const ATTR_ID: &str = "data-id";
pub const ATTR_ROTATION: &str = "data-rot";
pub const ATTR_DEPTH: &str = "data-depth";
pub const ATTR_ARM_TARGET: &str = "data-target";
pub const ATTR_SLIDE: &str = "data-slide";

// Gloss highlight custom properties, px relative to the tag's own rect.
pub const HIGHLIGHT_X_PROP: &str = "--hlx";
pub const HIGHLIGHT_Y_PROP: &str = "--hly";

// Carousel navigation
pub const CAROUSEL_GOTO_EVENT: &str = "carousel:goto";
// Anchor that lands inside the carousel's own section; slide dispatch
// waits for the scroll to settle before firing.
pub const CAROUSEL_ANCHOR: &str = "#visual";
pub const SLIDE_SETTLE_DELAY_MS: i32 = 220;
