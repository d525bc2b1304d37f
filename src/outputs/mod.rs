//! Output generation for the generated script and the console transcript.
//!
//! # Submodules
//!
//! - [`script`]: Renders extracted articles into `writing-content.js`
//! - [`console`]: Glyph-prefixed progress lines for the person running the sync
//!
//! # Output Structure
//!
//! ```text
//! site/
//! ├── writing/               # source pages (read only)
//! │   ├── culture.html
//! │   └── ...
//! └── js/
//!     └── writing-content.js # regenerated on every run
//! ```

pub mod console;
pub mod script;
