// Standalone components
pub mod access_restricted;
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form;
pub mod page_header;

// Primitive wrappers
pub mod avatar;
pub mod dialog;
pub mod dropdown_menu;
pub mod progress;
pub mod tabs;
pub mod toast;

// Provides its own context
pub mod sidebar;

pub use access_restricted::*;
pub use avatar::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use dropdown_menu::*;
pub use form::*;
pub use page_header::*;
pub use progress::*;
pub use sidebar::*;
pub use tabs::*;
pub use toast::*;
