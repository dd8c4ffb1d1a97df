pub mod apply_button;
pub mod header;
pub mod language_toggle;
pub mod nav_links;
pub mod social_links;

pub use apply_button::ApplyButton;
pub use header::{MobileMenu, NavigationHeader};
pub use language_toggle::LanguageToggle;
pub use nav_links::NavLinks;
pub use social_links::SocialLinks;
