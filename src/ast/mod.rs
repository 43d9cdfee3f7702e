/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the expression tree
///
/// Submodules:
/// - ast: Core AST definitions shared by every node
/// - expressions: The expression node variants and their constructors
pub mod ast;
pub mod expressions;
