//! # Dokan Forms
//!
//! State and validation for the shop registration form.
//!
//! - [`FormState`] holds the five field values, which fields were touched,
//!   and the current field → message error map.
//! - [`engine`] evaluates rules in two modes: incremental live validation
//!   and full submit-time validation. Both share [`rules::validate_field`].
//! - [`LiveValidator`] drives live validation behind a trailing-edge
//!   debounce and hands accepted forms to a [`SubmissionSink`].
//!
//! ## Example
//!
//! ```rust
//! use dokan_forms::{engine, Field, FormState};
//!
//! let mut form = FormState::new();
//! form.set_value(Field::Phone, "01712345678");
//! assert_eq!(form.value(Field::Phone), "017 12 34 56 78");
//!
//! engine::validate_live(&mut form, Field::Phone);
//! assert!(form.error(Field::Phone).is_none());
//! assert_eq!(engine::completed_fields(&form), 1);
//! ```

pub mod config;
pub mod engine;
pub mod field;
pub mod live;
pub mod rules;
pub mod state;
pub mod submit;
pub mod view;

pub use config::{Config, FormConfig, ThemeConfig};
pub use field::Field;
pub use live::{LiveValidator, ValidationSnapshot};
pub use state::FormState;
pub use submit::{Registration, SubmissionSink, SubmitOutcome};
pub use view::FormView;
