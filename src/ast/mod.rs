/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The program root and the statement/expression sum types
/// - expressions: Definitions for the expression node structs
/// - statements: Definitions for the statement node structs
pub mod ast;
pub mod expressions;
pub mod statements;
