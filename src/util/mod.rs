//! Utility functions shared by the feed entities.
//!
//! - **Dates**: RFC-822 formatting of Unix timestamps
//! - **Weekdays**: strict parsing and naming for `<skipDays>` entries
//! - **Text**: removal of characters XML 1.0 cannot carry
//!
//! # Examples
//!
//! ```
//! use chrono::FixedOffset;
//! use rssgen::util::format_rfc822;
//!
//! let jst = FixedOffset::east_opt(9 * 3600).unwrap();
//! assert_eq!(
//!     format_rfc822(1345546237, &jst).as_deref(),
//!     Some("Tue, 21 Aug 2012 19:50:37 +0900")
//! );
//! ```

mod date;
mod text;

pub use date::{format_rfc822, parse_weekday, weekday_name};
pub use text::strip_control_chars;
