//! Reader for the nestcss dialect.
//!
//! Produces a [`SyntaxNode`] tree for the subset of the dialect the compiler
//! understands:
//!
//! ```scss
//! $accent: blue;
//! $gap: 4px;
//!
//! .card, section {
//!     color: $accent;
//!     .title { margin: $gap; }
//! }
//! ```
//!
//! Whitespace, `:` and `;` are kept as `space`, `propertyDelimiter` and
//! `declarationDelimiter` nodes; run [`normalize`](crate::normalize) before
//! handing the tree to a compiler. Constructs outside the subset (`#id`
//! selectors, comments) still produce nodes so the compiler can report them
//! with a location.

use crate::error::SyntaxError;
use crate::node::{NodeKind, Position, SyntaxNode};
use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_until, take_while},
    character::complete::{char, digit1, multispace1, satisfy},
    combinator::{cut, opt, recognize},
    multi::many0,
    sequence::{pair, tuple},
};

/// Reads dialect source into a `stylesheet` node.
pub fn parse(source: &str) -> Result<SyntaxNode, SyntaxError> {
    let reader = Reader::new(source);
    let (rest, children) = match many0(|i| reader.top_level_item(i))(source) {
        Ok(parsed) => parsed,
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => {
            return Err(reader.unexpected(e.input));
        }
        Err(nom::Err::Incomplete(_)) => return Err(reader.unexpected(source)),
    };

    if !rest.is_empty() {
        return Err(reader.unexpected(rest));
    }

    Ok(SyntaxNode::branch(NodeKind::Stylesheet, children).at(Position::new(1, 1)))
}

struct Reader<'s> {
    source: &'s str,
    lines: Vec<LineStart>,
}

/// Byte offset where a source line begins.
#[derive(Clone, Copy)]
struct LineStart {
    offset: usize,
    /// Byte columns equal char columns on this line.
    ascii: bool,
}

impl<'s> Reader<'s> {
    fn new(source: &'s str) -> Self {
        let mut lines = Vec::new();
        let mut offset = 0;
        for line in source.split_inclusive('\n') {
            lines.push(LineStart {
                offset,
                ascii: line.is_ascii(),
            });
            offset += line.len();
        }
        if source.is_empty() || source.ends_with('\n') {
            lines.push(LineStart {
                offset,
                ascii: true,
            });
        }
        Self { source, lines }
    }

    /// Location of `rest` within the source. `rest` is always a suffix of it.
    ///
    /// Runs for every node built, backtracked ones included; keep it off the
    /// consumed input.
    fn position(&self, rest: &str) -> Position {
        let offset = self.source.len() - rest.len();
        let index = self
            .lines
            .partition_point(|line| line.offset <= offset)
            .saturating_sub(1);
        let line = self.lines[index];
        let column = if line.ascii {
            offset - line.offset + 1
        } else {
            self.source[line.offset..offset].chars().count() + 1
        };
        Position::new(index + 1, column)
    }

    fn unexpected(&self, rest: &str) -> SyntaxError {
        let found: String = rest.lines().next().unwrap_or("").chars().take(24).collect();
        SyntaxError::UnexpectedInput {
            at: self.position(rest),
            found,
        }
    }

    fn top_level_item(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        alt((
            |i| self.space(i),
            |i| self.comment(i),
            |i| self.declaration(i),
            |i| self.ruleset(i),
            |i| self.declaration_delimiter(i),
        ))(input)
    }

    fn ruleset(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (input, selector) = self.selector(input)?;
        let (input, space) = opt(|i| self.space(i))(input)?;
        let (input, block) = self.block(input)?;

        let mut children = vec![selector];
        children.extend(space);
        children.push(block);
        Ok((input, SyntaxNode::branch(NodeKind::Ruleset, children).at(at)))
    }

    /// Comma-separated selector alternatives.
    fn selector(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (input, first) = self.simple_selector(input)?;
        let (input, rest) = many0(tuple((
            opt(|i| self.space(i)),
            |i| self.leaf(i, NodeKind::Delimiter, ","),
            opt(|i| self.space(i)),
            |i| self.simple_selector(i),
        )))(input)?;

        let mut children = vec![first];
        for (before, delimiter, after, alternative) in rest {
            children.extend(before);
            children.push(delimiter);
            children.extend(after);
            children.push(alternative);
        }
        Ok((input, SyntaxNode::branch(NodeKind::Selector, children).at(at)))
    }

    fn simple_selector(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        if let Ok((rest, _)) = char::<_, nom::error::Error<&str>>('.')(input) {
            let (rest, name) = self.ident(rest)?;
            return Ok((rest, SyntaxNode::branch(NodeKind::Class, vec![name]).at(at)));
        }
        if let Ok((rest, _)) = char::<_, nom::error::Error<&str>>('#')(input) {
            let (rest, name) = self.ident(rest)?;
            return Ok((rest, SyntaxNode::branch(NodeKind::Id, vec![name]).at(at)));
        }
        let (rest, name) = self.ident(input)?;
        Ok((rest, SyntaxNode::branch(NodeKind::TypeSelector, vec![name]).at(at)))
    }

    fn block(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (input, _) = char('{')(input)?;
        // Past `{` errors point at the item that stopped the block.
        let (input, children) = many0(|i| self.block_item(i))(input)?;
        let (input, _) = cut(char('}'))(input)?;
        Ok((input, SyntaxNode::branch(NodeKind::Block, children).at(at)))
    }

    fn block_item(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        // Declarations first: `div {` fails at the missing `:` and falls
        // through to a nested ruleset.
        alt((
            |i| self.space(i),
            |i| self.comment(i),
            |i| self.declaration(i),
            |i| self.ruleset(i),
            |i| self.declaration_delimiter(i),
        ))(input)
    }

    fn declaration(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (input, property) = self.property(input)?;
        let (input, before) = opt(|i| self.space(i))(input)?;
        let (input, delimiter) = self.leaf(input, NodeKind::PropertyDelimiter, ":")?;
        let (input, after) = opt(|i| self.space(i))(input)?;
        let (input, value) = self.value(input)?;

        let mut children = vec![property];
        children.extend(before);
        children.push(delimiter);
        children.extend(after);
        children.push(value);
        Ok((input, SyntaxNode::branch(NodeKind::Declaration, children).at(at)))
    }

    fn property(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (input, name) = alt((|i| self.variable(i), |i| self.ident(i)))(input)?;
        Ok((input, SyntaxNode::branch(NodeKind::Property, vec![name]).at(at)))
    }

    fn value(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (input, term) = alt((
            |i| self.variable(i),
            |i| self.dimension(i),
            |i| self.number(i),
            |i| self.ident(i),
        ))(input)?;
        Ok((input, SyntaxNode::branch(NodeKind::Value, vec![term]).at(at)))
    }

    fn variable(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (input, _) = char('$')(input)?;
        let (input, name) = alt((|i| self.dimension(i), |i| self.ident(i)))(input)?;
        Ok((input, SyntaxNode::branch(NodeKind::Variable, vec![name]).at(at)))
    }

    fn dimension(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (input, number) = self.number(input)?;
        let (input, unit) = self.ident(input)?;
        Ok((input, SyntaxNode::branch(NodeKind::Dimension, vec![number, unit]).at(at)))
    }

    fn number(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (rest, text) = recognize(tuple((
            opt(char('-')),
            digit1,
            opt(pair(char('.'), digit1)),
        )))(input)?;
        Ok((rest, SyntaxNode::leaf(NodeKind::Number, text).at(at)))
    }

    fn ident(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (rest, text) = recognize(pair(
            satisfy(|c| c.is_alphabetic() || c == '_' || c == '-'),
            take_while(|c: char| c.is_alphanumeric() || c == '_' || c == '-'),
        ))(input)?;
        Ok((rest, SyntaxNode::leaf(NodeKind::Ident, text).at(at)))
    }

    fn space(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (rest, text) = multispace1(input)?;
        Ok((rest, SyntaxNode::leaf(NodeKind::Space, text).at(at)))
    }

    fn comment(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (rest, (_, text, _)) = tuple((tag("/*"), take_until("*/"), tag("*/")))(input)?;
        Ok((rest, SyntaxNode::leaf(NodeKind::Comment, text).at(at)))
    }

    fn declaration_delimiter(&self, input: &'s str) -> IResult<&'s str, SyntaxNode> {
        self.leaf(input, NodeKind::DeclarationDelimiter, ";")
    }

    fn leaf(
        &self,
        input: &'s str,
        kind: NodeKind,
        literal: &'static str,
    ) -> IResult<&'s str, SyntaxNode> {
        let at = self.position(input);
        let (rest, text) = tag(literal)(input)?;
        Ok((rest, SyntaxNode::leaf(kind, text).at(at)))
    }
}
