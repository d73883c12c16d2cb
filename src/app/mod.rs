pub mod components;
pub mod layouts;
pub mod pages;

pub use layouts::Sidebar;
pub use pages::App;
