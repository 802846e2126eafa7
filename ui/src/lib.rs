//! Shared UI crate for detreport: report views, their components and the
//! logic that feeds them. Platform shells only add routing and styling.

pub mod core;
pub mod i18n;
pub mod views;

pub mod components {
    // Localized application navbar (components/app_navbar.rs)
    pub mod app_navbar;
    pub use app_navbar::register_nav;
    pub use app_navbar::AppNavbar;
    pub use app_navbar::NavBuilder;

    mod message;
    pub use message::{Message, MessageKind};

    mod page;
    pub use page::Page;

    mod server_settings;
    pub use server_settings::ServerSettingsPanel;

    mod spinner;
    pub use spinner::Spinner;

    mod task_card;
    pub use task_card::TaskCard;
}
