pub mod progress_spinner;

pub use progress_spinner::ProgressSpinner;
