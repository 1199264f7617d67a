pub mod boot;
pub mod config;
pub mod contact;
pub mod dom;
pub mod effects;
pub mod gallery;
pub mod images;
pub mod links;
pub mod nav;
pub mod notify;
pub mod observe;
pub mod reveal;
pub mod stats;
pub mod storage;

pub use boot::run;
pub use config::{DeviceClass, SiteConfig};
pub use notify::{NoticeKind, NotifyHost};
