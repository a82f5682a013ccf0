#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::multiple_crate_versions)]
//! Progressive UI enhancements for server-rendered, hypermedia-driven pages.
//!
//! Six independent routines wire themselves onto conventional markup: the
//! mobile menu toggle, lazy image loading, animated counters, form
//! validation hints, smooth anchor scrolling, and dismissible alerts. Each
//! initializer takes a document, skips anything already wired, and returns
//! a disposable handle so hosts can tear the hooks down after replacing a
//! DOM subtree.

pub mod logic;

#[cfg(target_arch = "wasm32")]
mod bind;
#[cfg(target_arch = "wasm32")]
mod boot;
#[cfg(target_arch = "wasm32")]
mod viewport;
#[cfg(target_arch = "wasm32")]
mod wire;

#[cfg(target_arch = "wasm32")]
pub use bind::{Binding, Bindings};
#[cfg(target_arch = "wasm32")]
pub use boot::{Enhancements, boot};
#[cfg(target_arch = "wasm32")]
pub use wire::{
    init_alert_dismiss, init_all, init_counters, init_form_validation, init_lazy_images,
    init_mobile_menu, init_smooth_scroll,
};
