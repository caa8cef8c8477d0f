//! # Presentation Layer
//!
//! Everything between a computed result and the bytes written to stdout.
//! It follows an adaptation of the **MVVM (Model-View-ViewModel)** pattern.
//!
//! ## Data Flow
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> [ serde_json ] --> Output
//!  (Controller)     (Converter)        (Data)          (Driver)   ==(Text)==> [ View ] --> Output
//!                                                                               (Layout)
//! ```
//!
//! ## Rules
//!
//! ### 1. Raw Data in ViewModels
//! **ViewModels carry numbers, not formatted strings.**
//! * Bad: `struct Vm { capacity: "25.95 billion" }`
//! * Good: `struct Vm { max_params_billions: f64 }`
//! * JSON output is an API. Rounding happens in Views only.
//!
//! ### 2. ViewMode is Density
//! * **Minimal:** bare numbers/names, one per line. (For pipes/scripts)
//! * **Standard:** the sentence or table a person wants. (Default)
//! * **Verbose:** every intermediate: bytes per parameter, the overhead breakdown.
//!
//! ### 3. JSON ignores ViewMode
//! `--format json` always dumps the complete ViewModel.
//!
//! ### 4. Views never compute
//! Feasibility is decided in the engine and carried as a flag. Views only
//! choose how to show it.

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{
    CommandResultViewModel, CreateView, Guidance, StatusBadge, StatusLevel, ViewMode,
};
