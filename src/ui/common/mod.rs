//! Common reusable UI components shared by the drawers and page sections.

pub mod drawer;
pub mod form;
pub mod spinner;

pub use drawer::Drawer;
pub use form::{FormField, GroupedSelectField, SelectField, TextAreaField};
pub use spinner::{InlineSpinner, Spinner};
