//! Shared utility functions for the analytics dashboard crates.

/// Date utility functions
pub mod dates {
    use chrono::{Datelike, Local};

    /// Calendar year of the local clock at the moment of the call.
    ///
    /// On `wasm32` this reads the browser clock (chrono `wasmbind`).
    pub fn current_year() -> i32 {
        Local::now().year()
    }

    /// Footer copyright line, e.g. "© 2024 E-commerce Analytics. All rights reserved."
    pub fn copyright_line(year: i32, owner: &str) -> String {
        format!("© {} {}. All rights reserved.", year, owner)
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_current_year_matches_clock() {
            assert_eq!(current_year(), Local::now().date_naive().year());
        }

        #[test]
        fn test_copyright_line() {
            assert_eq!(
                copyright_line(2024, "E-commerce Analytics"),
                "© 2024 E-commerce Analytics. All rights reserved."
            );
        }
    }
}
