//! folio-site-core
//!
//! Page logic for the portfolio site that has rules worth testing, kept free
//! of any rendering toolkit: routing, theme, scroll progress, the toast bus,
//! the contact form submission, the resume viewer and the error report.

pub mod boundary;
pub mod config;
pub mod contact;
pub mod error;
pub mod nav;
pub mod resume;
pub mod routes;
pub mod scroll;
pub mod theme;
pub mod toast;

pub use boundary::ErrorReport;
pub use config::SiteConfig;
pub use contact::{
    submit, ContactConfig, ContactForm, ContactRequest, FormTransport, SubmissionOutcome,
};
pub use error::{ContactError, SiteError, ToastError, TransportError};
pub use nav::{NavItem, NavMenu, Section, NAV_ITEMS};
pub use resume::{ResumeAsset, ResumeLinks, ResumeModal, ViewerMode};
pub use routes::{NotFoundPage, Route};
pub use scroll::scroll_progress;
pub use theme::{GlyphPalette, ResolvedTheme, Theme};
pub use toast::{NewToast, Toast, ToastAction, ToastBus, ToastId, ToastState, ToastVariant};

#[cfg(feature = "http")]
pub use contact::HttpTransport;
