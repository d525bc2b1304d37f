//! Scrapers for the static writing pages.
//!
//! Article pages on the site come in two structural variants, and a page
//! gives no hint up front about which one it uses. Extraction therefore runs
//! in two steps:
//!
//! 1. **Detection** ([`layout`]): try the more specific templated layout
//!    first, then fall back to the older flat layout. First match wins.
//! 2. **Extraction** ([`writing`]): pull the title and body for the detected
//!    layout, fall back to a file-name title, and escape the body.
//!
//! # Supported Layouts
//!
//! | Layout | Body container | Title source |
//! |--------|----------------|--------------|
//! | Content body | `<div class="content-body">` closed right before `</main>` | `<h1 class="page-title">` anywhere on the page |
//! | Main content | `<main class="content">` | First `<h1>` inside `<main>`, removed from the body |
//!
//! Both use regular expressions rather than a tag-tree parser. That is enough
//! for the handful of hand-maintained pages this runs against.

pub mod layout;
pub mod writing;
