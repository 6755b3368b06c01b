//! Expression tree traversal visualiser.
//!
//! Builds the fixed tree for `(5 × 10) / ((3 − 8) + 5)`, computes its
//! preorder, inorder and postorder traversals and plays them back step by
//! step in the terminal.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;
