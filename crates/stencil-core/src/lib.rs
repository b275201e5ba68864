//! Stencil Core Types and Definitions
//!
//! This crate provides the foundational types for compiling BPMN diagrams
//! into Visio page geometry. It includes:
//!
//! - **Colors**: Color handling with CSS color support ([`color::Color`])
//! - **Geometry**: Basic geometric types and rounding ([`geometry`] module)
//! - **Model**: The typed diagram model handed to the compiler ([`model`] module)
//! - **Draw**: Outline paths, markers, connector curves and the emitted shape
//!   primitives ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod model;
