//! Browser front end
//!
//! The page is modelled as a [`DomElement`] tree so rendering and click
//! handling run under plain `cargo test`; feature `wasm` mounts the same tree
//! into a real document.

#[cfg(feature = "wasm")]
mod browser;
mod calculator;
mod dom;
mod driver;
mod page;

#[cfg(feature = "wasm")]
pub use browser::{start, BrowserCalculator};
pub use calculator::WebCalculator;
pub use dom::{DomElement, DomEvent, DomSink, MockDom};
pub use driver::WebDriver;
pub use page::{build_page, ids, ACTIVE_OPERATOR_CLASS, PAGE_TITLE, STYLESHEET};
