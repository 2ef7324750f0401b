//! Abstract syntax tree produced by the Core Erlang parser.
//!
//! Every node is a plain owned value built bottom-up during a single parse
//! call. Optional `( node -| [...] )` annotations are carried by
//! [`Annotated`], which wraps the node types wherever the grammar allows the
//! annotation syntax.

mod annotated;
mod expr;
mod literal;
mod module;
mod pattern;

pub use annotated::Annotated;
pub use expr::{Alt, BitString, Expr, Exprs, FunDef, Lambda, MapExpr, TimeOut};
pub use literal::{Atom, Const, FunName, List, Literal, Var};
pub use module::Module;
pub use pattern::{Alias, MapKey, Pats, Pattern};
