pub mod icons;
pub mod navigation;

pub use navigation::NavigationHeader;
