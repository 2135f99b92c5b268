//! An ordered set of unique keys implemented with an AVL tree.
//!
//! Every subtree position is either empty (height 0) or a node owning two
//! child positions. Insertion and removal restore balance with rotations on
//! the way back up, so the height stays within about 1.44·log2(n) and every
//! operation is O(log n).
//!
//! ```
//! use avl_index::Tree;
//!
//! let mut tree = Tree::new();
//! for key in 0..10 {
//!     tree.insert(key);
//! }
//! assert_eq!(tree.height(), 4);
//! assert!(tree.contains(&7));
//! assert!(tree.check_balanced() && tree.check_ordering());
//! ```

mod check;
pub mod driver;
mod error;
mod print;
mod tree;

pub use error::{ConfigError, InvariantError};
pub use print::Dump;
pub use tree::{Iter, Tree};
