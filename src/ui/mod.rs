pub mod boundary;
pub mod form;
pub mod prompt;
pub mod table;

pub use boundary::run_with_boundary;
pub use form::{FormInput, validated};
pub use prompt::{DialoguerPrompter, NonInteractive, Prompter};
pub use table::{Table, render_list};
