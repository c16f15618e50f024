//! # TUI Components
//!
//! Components receive their data and the active [`Theme`](super::theme::Theme)
//! as props and render into a given area:
//!
//! - `Spinner`: moon-phase loading indicator (Loading phase)
//! - `RelayTable`: bordered relay table with help footer (Ready phase)
//!
//! ```text
//! components/
//! ├── mod.rs          (this file)
//! ├── spinner.rs      (Loading indicator)
//! └── relay_table.rs  (Table + footer)
//! ```

pub mod relay_table;
pub mod spinner;

pub use relay_table::RelayTable;
pub use spinner::Spinner;
