//! Bilingual (English/French) single-page personal profile site.
//!
//! The core is the content-rendering pipeline: a validated, language-keyed
//! content model ([`content`]) and a renderer ([`render`]) that resolves a
//! locale into an ordered list of typed [`render::Section`] descriptors. The
//! HTML collaborator ([`html`]) and the HTTP surface ([`server`]) sit on top
//! and own everything pixel- and transport-shaped.

pub mod assets;
pub mod config;
pub mod content;
pub mod html;
pub mod render;
pub mod server;
