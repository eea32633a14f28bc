//! Technology leadership advisor personas
//!
//! Two personas share a small toolbox:
//! - [`agent::cto::CtoAgent`] keeps a portfolio of technology trends and
//!   strategic goals, assesses trends and ranks weighted decision options.
//! - [`agent::principal::PrincipalEngineer`] keeps a technology catalog and
//!   system designs, scores technology fit and reviews code.
//!
//! Both personas persist their full state as pretty-printed JSON through
//! [`state::Persistent`].

pub mod agent;
pub mod catalog;
pub mod config;
pub mod decision;
pub mod design;
pub mod review;
pub mod scoring;
pub mod state;

mod timestamp;
