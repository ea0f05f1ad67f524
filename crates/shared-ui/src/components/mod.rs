// Standalone widgets
pub mod alert;
pub mod badge;
pub mod button;
pub mod card;
pub mod data_table;
pub mod form_select;
pub mod page_header;
pub mod pagination;
pub mod skeleton;
pub mod stat_card;
pub mod text_field;
pub mod textarea;

// Primitive wrappers
pub mod dialog;
pub mod dropdown_menu;
pub mod tabs;
pub mod toast;

pub use alert::*;
pub use badge::*;
pub use button::*;
pub use card::*;
pub use data_table::*;
pub use dialog::*;
pub use dropdown_menu::*;
pub use form_select::*;
pub use page_header::*;
pub use pagination::*;
pub use skeleton::*;
pub use stat_card::*;
pub use tabs::*;
pub use text_field::*;
pub use textarea::*;
pub use toast::*;
