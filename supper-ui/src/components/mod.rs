//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod error_banner;
pub mod icons;
pub mod ideas_panel;
pub mod main_header;
pub mod meal_image;
pub mod notice_toast;
pub mod preference_form;
pub mod select;
pub mod sign_in;
pub mod text_input;

pub use app_layout::{AppLayoutView, PageCard};
pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use error_banner::ErrorBanner;
pub use icons::{
    AlertTriangleIcon, DownloadIcon, ImageIcon, LoaderIcon, LogOutIcon, ShareIcon, XIcon,
};
pub use ideas_panel::IdeasPanelView;
pub use main_header::MainHeaderView;
pub use meal_image::MealImageView;
pub use notice_toast::NoticeToast;
pub use preference_form::PreferenceFormView;
pub use select::Select;
pub use sign_in::{ProviderOption, SignInView};
pub use text_input::{FormField, TextInput, TextInputType};
