use std::fmt;

/// Line/column location of a node in the source it was read from.
///
/// Trees built by hand have no location; those display as `<unknown>`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    pub fn is_known(&self) -> bool {
        self.line != 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_known() {
            write!(f, "{}:{}", self.line, self.column)
        } else {
            write!(f, "<unknown>")
        }
    }
}

/// Kind tag of a [`SyntaxNode`].
///
/// Names match the node types of the SCSS parser this tree layout comes from
/// (`typeSelector`, `declarationDelimiter`, ...); see [`NodeKind::name`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Stylesheet,
    Ruleset,
    Selector,
    Block,
    Declaration,
    Property,
    Value,
    Ident,
    Class,
    TypeSelector,
    Dimension,
    Number,
    Variable,
    Space,
    DeclarationDelimiter,
    PropertyDelimiter,
    /// Separator between selector alternatives (`,`).
    Delimiter,
    Comment,
    Id,
    /// Any node type an external parser produced that has no variant here.
    Other(String),
}

impl NodeKind {
    pub fn name(&self) -> &str {
        match self {
            NodeKind::Stylesheet => "stylesheet",
            NodeKind::Ruleset => "ruleset",
            NodeKind::Selector => "selector",
            NodeKind::Block => "block",
            NodeKind::Declaration => "declaration",
            NodeKind::Property => "property",
            NodeKind::Value => "value",
            NodeKind::Ident => "ident",
            NodeKind::Class => "class",
            NodeKind::TypeSelector => "typeSelector",
            NodeKind::Dimension => "dimension",
            NodeKind::Number => "number",
            NodeKind::Variable => "variable",
            NodeKind::Space => "space",
            NodeKind::DeclarationDelimiter => "declarationDelimiter",
            NodeKind::PropertyDelimiter => "propertyDelimiter",
            NodeKind::Delimiter => "delimiter",
            NodeKind::Comment => "multilineComment",
            NodeKind::Id => "id",
            NodeKind::Other(name) => name,
        }
    }

    /// Maps a parser node type name to its kind. Unknown names become
    /// [`NodeKind::Other`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "stylesheet" => NodeKind::Stylesheet,
            "ruleset" => NodeKind::Ruleset,
            "selector" => NodeKind::Selector,
            "block" => NodeKind::Block,
            "declaration" => NodeKind::Declaration,
            "property" => NodeKind::Property,
            "value" => NodeKind::Value,
            "ident" => NodeKind::Ident,
            "class" => NodeKind::Class,
            "typeSelector" => NodeKind::TypeSelector,
            "dimension" => NodeKind::Dimension,
            "number" => NodeKind::Number,
            "variable" => NodeKind::Variable,
            "space" => NodeKind::Space,
            "declarationDelimiter" => NodeKind::DeclarationDelimiter,
            "propertyDelimiter" => NodeKind::PropertyDelimiter,
            "delimiter" => NodeKind::Delimiter,
            "multilineComment" => NodeKind::Comment,
            "id" => NodeKind::Id,
            other => NodeKind::Other(other.to_string()),
        }
    }

    /// Whitespace and delimiters carry no meaning once the tree is built.
    pub fn is_insignificant(&self) -> bool {
        matches!(
            self,
            NodeKind::Space | NodeKind::DeclarationDelimiter | NodeKind::PropertyDelimiter
        )
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NodeContent {
    Text(String),
    Children(Vec<SyntaxNode>),
}

/// A node of the dialect's syntax tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SyntaxNode {
    kind: NodeKind,
    content: NodeContent,
    start: Position,
}

impl SyntaxNode {
    /// Creates a node with a literal payload (`ident`, `number`, `space`, ...).
    pub fn leaf(kind: NodeKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            content: NodeContent::Text(text.into()),
            start: Position::default(),
        }
    }

    /// Creates a node holding child nodes in document order.
    pub fn branch(kind: NodeKind, children: Vec<SyntaxNode>) -> Self {
        Self {
            kind,
            content: NodeContent::Children(children),
            start: Position::default(),
        }
    }

    pub fn at(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn content(&self) -> &NodeContent {
        &self.content
    }

    pub fn start(&self) -> Position {
        self.start
    }

    /// Literal payload, or `None` for branch nodes.
    pub fn text(&self) -> Option<&str> {
        match &self.content {
            NodeContent::Text(text) => Some(text),
            NodeContent::Children(_) => None,
        }
    }

    /// Child nodes; empty for leaf nodes.
    pub fn children(&self) -> &[SyntaxNode] {
        match &self.content {
            NodeContent::Children(children) => children,
            NodeContent::Text(_) => &[],
        }
    }

    /// Mutable access to the child list, `None` for leaf nodes.
    pub fn children_mut(&mut self) -> Option<&mut Vec<SyntaxNode>> {
        match &mut self.content {
            NodeContent::Children(children) => Some(children),
            NodeContent::Text(_) => None,
        }
    }

    pub fn into_children(self) -> Vec<SyntaxNode> {
        match self.content {
            NodeContent::Children(children) => children,
            NodeContent::Text(_) => Vec::new(),
        }
    }
}
