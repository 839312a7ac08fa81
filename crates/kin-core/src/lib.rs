//! Core types and storage for the kintree genealogical graph.
//!
//! Provides the entity model ([`person::Person`], [`person::FamilyEdge`]),
//! the relation catalog, the consistency engine that saturates one-sided
//! edges into a bidirectional multigraph, and the [`tree::Tree`] container
//! with its query and mutation surface.

pub mod config;
pub mod consistency;
pub mod error;
pub mod person;
pub mod schema;
pub mod storage;
pub mod tree;
