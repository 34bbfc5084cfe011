//! Shared utilities

pub mod logging;

pub use logging::{
    create_main_progress_bar, finish_progress_bar, log_operation_complete, log_operation_start,
};
