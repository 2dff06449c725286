//! Core domain types for Marquee.
//!
//! Page content (testimonials, statistics, copy) and the pure animation
//! primitives shared by the engine and the renderer. No IO, no async.

#![allow(clippy::missing_errors_doc)]

mod content;
pub mod ui;

pub use content::{
    ContentError, CtaCopy, Feature, FeatureIcon, FooterColumn, FooterLink, HeroCopy, NavLink,
    PageContent, Rating, Statistic, Testimonial,
};
