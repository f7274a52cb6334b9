pub mod formatter;

pub use formatter::{
    format_all_history, format_bar, format_history, format_json, format_questions, format_result,
    format_submission, should_use_colors,
};
