//! AST traits - Common interfaces for uniform node access

/// Common interface for all AST nodes
pub trait AstNode {
    /// Node type name used by the tree and tag renderers
    fn node_type(&self) -> &'static str;

    /// Short label shown next to the node type
    fn display_label(&self) -> String;
}
