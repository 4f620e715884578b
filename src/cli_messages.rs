//! CLI command messaging system
//!
//! Consistent console output for `set-backend`, `reset` and failed runs.

const INFO_TAG: &str = "\x1b[1;33m[INFO]\x1b[0m";
const ERROR_TAG: &str = "\x1b[1;31m[ERROR]\x1b[0m";
const SUCCESS_TAG: &str = "\x1b[1;32m[SUCCESS]\x1b[0m";

/// One console line: tag, title and optional tab-separated details.
fn format_line(tag: &str, title: &str, details: &str) -> String {
    if details.is_empty() {
        format!("{} {}", tag, title)
    } else {
        format!("{} {}\t {}", tag, title, details)
    }
}

pub fn print_info(title: &str, details: &str) {
    println!("{}", format_line(INFO_TAG, title, details));
}

/// Errors go to stderr so headless output on stdout stays parseable.
pub fn print_error(title: &str, details: Option<&str>) {
    eprintln!("{}", format_line(ERROR_TAG, title, ""));
    if let Some(details) = details {
        eprintln!("{} Details: {}", ERROR_TAG, details);
    }
}

pub fn print_success(title: &str, details: &str) {
    println!("{}", format_line(SUCCESS_TAG, title, details));
}

#[macro_export]
macro_rules! print_cmd_info {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_info($title, &format!($($details)*))
    };
}

#[macro_export]
macro_rules! print_cmd_error {
    ($title:expr) => {
        $crate::cli_messages::print_error($title, None)
    };
    ($title:expr, $details:expr) => {
        $crate::cli_messages::print_error($title, Some($details))
    };
}

#[macro_export]
macro_rules! print_cmd_success {
    ($title:expr, $($details:tt)*) => {
        $crate::cli_messages::print_success($title, &format!($($details)*))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line() {
        assert_eq!(
            format_line(INFO_TAG, "Backend saved", "http://pi.local:8000"),
            "\x1b[1;33m[INFO]\x1b[0m Backend saved\t http://pi.local:8000"
        );
        assert_eq!(
            format_line(SUCCESS_TAG, "Done", ""),
            "\x1b[1;32m[SUCCESS]\x1b[0m Done"
        );
    }
}
