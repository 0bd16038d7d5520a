//! # sdk-tester-plugin
//!
//! Rust-side abstraction over the native advertising SDK plugin.
//!
//! The plugin exposes three kinds of objects:
//!
//! | Object | Trait | Lifetime |
//! |--------|-------|----------|
//! | SDK entry point | [`AdSdk`] | process |
//! | Classic page | [`ClassicPage`] | one screen mount, released by id |
//! | Classic unit | [`ClassicUnit`] | built asynchronously from a page |
//!
//! Units report back through a [`ClassicListener`].
//!
//! [`SimulatedSdk`] is an in-process implementation that records every call. It
//! backs the test suites and lets the tester run without a device.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use sdk_tester_plugin::{AdSdk, ClassicListener, PlacementParams, SimulatedSdk};
//!
//! struct Quiet;
//! impl ClassicListener for Quiet {}
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let sdk = SimulatedSdk::new();
//!     sdk.init("sdk-tester-rnd")?;
//!
//!     let page = sdk.get_classic_page("https://www.example.com", "article");
//!     let unit = page
//!         .build_unit(&PlacementParams::mid_article_widget(), Arc::new(Quiet))
//!         .await?;
//!     unit.fetch_content()?;
//!
//!     if let Some(id) = page.page_id() {
//!         sdk.remove_classic_page(&id)?;
//!     }
//!     Ok(())
//! }
//! ```

mod error;
mod simulated;
mod traits;
mod types;

pub use error::{PluginError, Result};
pub use simulated::{PageCall, SdkCall, SimulatedSdk, UnitCall};
pub use traits::{AdSdk, ClassicListener, ClassicPage, ClassicUnit};
pub use types::{
    ExtraProperties, ItemClick, PageId, PlacementParams, PlacementType, Platform, SdkLogLevel,
};
