pub mod use_header_state;
pub mod use_site_config;
pub mod use_viewport;

pub use use_header_state::{use_header_state, HeaderHandle};
pub use use_site_config::{use_site_config, use_site_config_provider};
pub use use_viewport::use_viewport_width;
