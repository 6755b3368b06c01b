//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueEnum, ValueHint};

use crate::domain::TraversalKind;

/// Animate preorder, inorder and postorder traversals of (5 × 10) / ((3 − 8) + 5)
#[derive(Parser, Debug)]
#[command(name = "exprwalk")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output: -d info, -dd debug, -ddd trace
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Config file (layered on top of the global config)
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Pause between traversal steps in milliseconds
    #[arg(long, global = true)]
    pub delay: Option<u64>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the expression tree with node ids
    Tree,

    /// Animate one traversal
    Traverse {
        /// Traversal order
        #[arg(value_enum)]
        kind: KindArg,
        /// Print the final state only
        #[arg(long)]
        no_animate: bool,
    },

    /// Print all three notations
    All,

    /// Evaluate the expression
    Eval,

    /// Interactive mode: p/i/o start a traversal, r resets, q quits
    Play,

    /// Show effective settings
    Config,

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum KindArg {
    #[value(alias = "pre", alias = "prefix")]
    Preorder,
    #[value(alias = "in", alias = "infix")]
    Inorder,
    #[value(alias = "post", alias = "postfix")]
    Postorder,
}

impl From<KindArg> for TraversalKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::Preorder => TraversalKind::Preorder,
            KindArg::Inorder => TraversalKind::Inorder,
            KindArg::Postorder => TraversalKind::Postorder,
        }
    }
}
