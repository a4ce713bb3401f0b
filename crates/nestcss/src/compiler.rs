//! Translation of a dialect syntax tree into a [`Program`].
//!
//! ## Steps
//!
//! 1. The tree is normalized (whitespace and delimiters removed).
//! 2. Top-level `$name: value` declarations are pulled out into the variable
//!    initializer, in source order. A repeated name keeps the last value.
//! 3. Every remaining top-level ruleset becomes a [`RuleUnit`]. Inside a
//!    block, declarations and nested rulesets are grouped separately; the
//!    relative order within each group is kept.
//!
//! ## Value flattening
//!
//! | node                | string     |
//! |---------------------|------------|
//! | `ident`             | `red`      |
//! | `number`            | `0`        |
//! | `dimension`         | `10px`     |
//! | `variable`          | `$color`   |
//!
//! Any node the compiler has no rule for aborts compilation; nothing is
//! returned for the parts that did translate.

use crate::error::CompileError;
use crate::ir::{Declarations, Program, RuleUnit, SelectorGroup};
use crate::variables::{VARIABLE_SIGIL, Variables};
use nestcss_syntax::{NodeKind, SyntaxNode, normalize};

/// Compiles a `stylesheet` node into a program.
pub fn compile(mut stylesheet: SyntaxNode) -> Result<Program, CompileError> {
    if stylesheet.kind() != &NodeKind::Stylesheet {
        return Err(unsupported(&stylesheet, "as the stylesheet root"));
    }
    normalize(&mut stylesheet);

    let mut variables = Variables::new();
    let mut units = Vec::new();

    for node in stylesheet.into_children() {
        if node.kind() == &NodeKind::Declaration {
            let (name, value) = compile_variable_definition(&node)?;
            variables.set(name, value);
        } else {
            units.push(compile_top_level(&node)?);
        }
    }

    log::debug!(
        "COMPILE: {} variable(s), {} top-level unit(s)",
        variables.len(),
        units.len()
    );

    Ok(Program::new(variables, units))
}

/// Anything at the top level that is not a variable definition.
fn compile_top_level(node: &SyntaxNode) -> Result<RuleUnit, CompileError> {
    match node.kind() {
        NodeKind::Ruleset => compile_ruleset(node),
        NodeKind::Stylesheet
        | NodeKind::Selector
        | NodeKind::Block
        | NodeKind::Declaration
        | NodeKind::Property
        | NodeKind::Value
        | NodeKind::Ident
        | NodeKind::Class
        | NodeKind::TypeSelector
        | NodeKind::Dimension
        | NodeKind::Number
        | NodeKind::Variable
        | NodeKind::Space
        | NodeKind::DeclarationDelimiter
        | NodeKind::PropertyDelimiter
        | NodeKind::Delimiter
        | NodeKind::Comment
        | NodeKind::Id
        | NodeKind::Other(_) => Err(unsupported(node, "at the top level")),
    }
}

fn compile_variable_definition(node: &SyntaxNode) -> Result<(String, String), CompileError> {
    let (property, value) = declaration_parts(node)?;
    let name = match property.children() {
        [variable] if variable.kind() == &NodeKind::Variable => variable_name(variable)?,
        _ => {
            return Err(unsupported(
                node,
                "at the top level (only variable definitions are allowed)",
            ));
        }
    };
    Ok((name, value_string(value)?))
}

fn compile_ruleset(node: &SyntaxNode) -> Result<RuleUnit, CompileError> {
    let [selector, block] = node.children() else {
        return Err(malformed(node, "expected a selector followed by a block"));
    };
    if selector.kind() != &NodeKind::Selector {
        return Err(unsupported(selector, "in place of a ruleset selector"));
    }
    if block.kind() != &NodeKind::Block {
        return Err(unsupported(block, "in place of a ruleset block"));
    }

    let selector_group = compile_selector(selector)?;
    let (local_declarations, nested_units) = compile_block(block)?;

    log::trace!(
        "COMPILE: ruleset {:?} -> {} declaration(s), {} nested",
        selector_group,
        local_declarations.len(),
        nested_units.len()
    );

    Ok(RuleUnit {
        selector_group,
        local_declarations,
        nested_units,
    })
}

/// Flattens selector alternatives: `.name` for classes, concatenated
/// identifiers for type selectors.
fn compile_selector(node: &SyntaxNode) -> Result<SelectorGroup, CompileError> {
    let mut group = SelectorGroup::new();
    for child in node.children() {
        match child.kind() {
            NodeKind::Class => group.push(format!(".{}", ident_text(child)?)),
            NodeKind::TypeSelector => group.push(ident_text(child)?),
            // Separator between alternatives
            NodeKind::Delimiter => {}
            other => {
                return Err(CompileError::MalformedSelector {
                    kind: other.clone(),
                    at: child.start(),
                });
            }
        }
    }

    if group.is_empty() {
        return Err(malformed(node, "selector has no alternatives"));
    }
    Ok(group)
}

/// Splits a block into its declarations and nested rule units.
fn compile_block(node: &SyntaxNode) -> Result<(Declarations, Vec<RuleUnit>), CompileError> {
    let mut declarations = Declarations::new();
    let mut nested = Vec::new();

    for child in node.children() {
        match child.kind() {
            NodeKind::Declaration => {
                let (property, value) = declaration_parts(child)?;
                declarations.insert(property_name(property)?, value_string(value)?);
            }
            NodeKind::Ruleset => nested.push(compile_ruleset(child)?),
            _ => return Err(unsupported(child, "inside a block")),
        }
    }

    Ok((declarations, nested))
}

fn declaration_parts(node: &SyntaxNode) -> Result<(&SyntaxNode, &SyntaxNode), CompileError> {
    match node.children() {
        [property, value]
            if property.kind() == &NodeKind::Property && value.kind() == &NodeKind::Value =>
        {
            Ok((property, value))
        }
        _ => Err(malformed(node, "expected a property followed by a value")),
    }
}

fn property_name(node: &SyntaxNode) -> Result<String, CompileError> {
    let mut name = String::new();
    for child in node.children() {
        match child.kind() {
            NodeKind::Ident => name.push_str(leaf_text(child)?),
            // Variables are only defined at the top level
            NodeKind::Variable => {
                return Err(unsupported(child, "as a property name inside a block"));
            }
            _ => return Err(unsupported(child, "in a property name")),
        }
    }
    if name.is_empty() {
        return Err(malformed(node, "empty property name"));
    }
    Ok(name)
}

fn value_string(node: &SyntaxNode) -> Result<String, CompileError> {
    let [term] = node.children() else {
        return Err(malformed(node, "a value must hold exactly one term"));
    };
    match term.kind() {
        NodeKind::Ident | NodeKind::Number => Ok(leaf_text(term)?.to_string()),
        NodeKind::Dimension => dimension_string(term),
        NodeKind::Variable => variable_name(term),
        _ => Err(unsupported(term, "as a declaration value")),
    }
}

/// `$` followed by the flattened name; `$1px` style names concatenate too.
fn variable_name(node: &SyntaxNode) -> Result<String, CompileError> {
    let name = match node.children() {
        [name] if name.kind() == &NodeKind::Ident => leaf_text(name)?.to_string(),
        [name] if name.kind() == &NodeKind::Dimension => dimension_string(name)?,
        _ => return Err(malformed(node, "expected an identifier or dimension name")),
    };
    Ok(format!("{VARIABLE_SIGIL}{name}"))
}

fn dimension_string(node: &SyntaxNode) -> Result<String, CompileError> {
    match node.children() {
        [number, unit] => Ok(format!("{}{}", leaf_text(number)?, leaf_text(unit)?)),
        _ => Err(malformed(node, "expected a number followed by a unit")),
    }
}

/// Concatenated text of a node's `ident` children.
fn ident_text(node: &SyntaxNode) -> Result<String, CompileError> {
    let mut text = String::new();
    for child in node.children() {
        if child.kind() != &NodeKind::Ident {
            return Err(CompileError::MalformedSelector {
                kind: child.kind().clone(),
                at: child.start(),
            });
        }
        text.push_str(leaf_text(child)?);
    }
    if text.is_empty() {
        return Err(malformed(node, "missing identifier"));
    }
    Ok(text)
}

fn leaf_text(node: &SyntaxNode) -> Result<&str, CompileError> {
    node.text()
        .ok_or_else(|| malformed(node, "expected a literal, found child nodes"))
}

fn unsupported(node: &SyntaxNode, context: &'static str) -> CompileError {
    CompileError::UnsupportedConstruct {
        kind: node.kind().clone(),
        context,
        at: node.start(),
    }
}

fn malformed(node: &SyntaxNode, reason: &'static str) -> CompileError {
    CompileError::MalformedNode {
        kind: node.kind().clone(),
        reason,
        at: node.start(),
    }
}
