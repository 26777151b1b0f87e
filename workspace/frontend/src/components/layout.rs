mod navbar;
mod page;
mod sidebar;

pub use page::Layout;
