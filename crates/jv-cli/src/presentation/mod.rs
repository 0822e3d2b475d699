//! # Presentation Layer
//!
//! Console output for every report, in an adaptation of the
//! **MVVM (Model-View-ViewModel)** pattern.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json --> stdout
//!  (Controller)     (Converter)        (Data)          (Driver)   ==(Text)==> [ View ] --> stdout
//! ```
//!
//! ## Directory Guide
//!
//! * `view_models/`: `Serialize` structs holding raw data (numbers stay numbers).
//!   They are the `--format json` contract.
//! * `presenters/`: pure functions from engine results to view models.
//! * `views/`: `fmt::Display` layouts over view models. All text formatting
//!   (previews, cost, pluralization) happens here through `formatters`.
//! * `renderers/`: switches between JSON and text; styles the badge and tips
//!   when stdout is a terminal.
//! * `formatters/`: small string helpers shared by views.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel};
