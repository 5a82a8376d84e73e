//! Built-in declaration directive
//!
//! Parses C and C++ declaration strings into signature subtrees: a lexer
//! pass splits the declaration into tokens, a small descent over the token
//! stream extracts the qualified name, parameters and initializer, and the
//! node construction step assembles the host signature structure.
//!
//! This is deliberately not a full language parser. It recovers exactly the
//! structure the overlay needs to splice against: the qualifier prefix (so
//! it can be stripped from display), the declarator name, and the
//! surrounding tokens verbatim.

use logos::Logos;

use crate::target::{tags, TargetNode};

use super::directive::DeclarationDirective;
use super::error::DomainError;

/// Tokens of the declaration grammar.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
enum DeclToken {
    #[token("::")]
    Scope,
    #[token("(")]
    OpenParen,
    #[token(")")]
    CloseParen,
    #[token(",")]
    Comma,
    #[token("=")]
    Equals,
    #[token(":")]
    Colon,
    #[regex(r"[A-Za-z_][A-Za-z0-9_]*")]
    Ident,
    #[regex(r"[0-9][0-9A-Za-z_.']*")]
    Number,
    #[regex(r"[ \t]+")]
    Space,
    // Any other single character: pointers, references, brackets, ...
    #[regex(r"[^A-Za-z0-9_ \t(),=:]")]
    Punct,
}

fn lex(declaration: &str) -> Vec<(DeclToken, &str)> {
    let mut lexer = DeclToken::lexer(declaration);
    let mut tokens = Vec::new();
    while let Some(result) = lexer.next() {
        let slice = lexer.slice();
        match result {
            Ok(token) => tokens.push((token, slice)),
            Err(()) => tokens.push((DeclToken::Punct, slice)),
        }
    }
    tokens
}

/// Concatenate token slices back into source text.
fn raw(tokens: &[(DeclToken, &str)]) -> String {
    tokens.iter().map(|(_, slice)| *slice).collect()
}

/// The pieces of a parsed declaration.
pub(crate) struct ParsedDeclaration {
    /// `template <...>` prefix, when present.
    pub template_prefix: Option<String>,
    /// Children of the declarator line, in signature order.
    pub declarator: Vec<TargetNode>,
    /// The unqualified declarator name.
    pub name: String,
}

/// Parse a declaration string. Errors carry a human-readable reason.
pub(crate) fn parse_declaration(declaration: &str) -> Result<ParsedDeclaration, String> {
    let trimmed = declaration.trim();
    if trimmed.is_empty() {
        return Err("declaration is empty".to_string());
    }

    let (template_prefix, rest) = split_template_prefix(trimmed)?;
    let tokens = lex(rest);

    // First top-level '(' or '=' decides the declaration shape.
    let mut depth = 0usize;
    let mut open_paren = None;
    let mut equals = None;
    for (index, (token, _)) in tokens.iter().enumerate() {
        match token {
            DeclToken::OpenParen => {
                if depth == 0 && open_paren.is_none() {
                    open_paren = Some(index);
                }
                depth += 1;
            }
            DeclToken::CloseParen => depth = depth.saturating_sub(1),
            DeclToken::Equals if depth == 0 && equals.is_none() => equals = Some(index),
            _ => {}
        }
    }

    let mut children = Vec::new();
    let name;

    match open_paren {
        Some(open) if equals.map_or(true, |e| open < e) => {
            // Function-shaped: head ( params ) trailing
            let close = matching_close(&tokens, open)
                .ok_or_else(|| "unbalanced parentheses".to_string())?;
            name = push_head(&tokens[..open], &mut children)?;
            children.push(parameter_list(&tokens[open + 1..close]));
            let trailing = raw(&tokens[close + 1..]);
            if !trailing.trim().is_empty() {
                children.push(TargetNode::text(format!(" {}", trailing.trim())));
            }
        }
        _ => {
            // Object-shaped: head [= initializer]
            let head_end = equals.unwrap_or(tokens.len());
            name = push_head(&tokens[..head_end], &mut children)?;
            if equals.is_some() {
                let initializer = raw(&tokens[head_end..]);
                children.push(TargetNode::text(format!(" {}", initializer.trim())));
            }
        }
    }

    Ok(ParsedDeclaration {
        template_prefix,
        declarator: children,
        name,
    })
}

/// Split a leading `template <...>` prefix off the declaration.
fn split_template_prefix(declaration: &str) -> Result<(Option<String>, &str), String> {
    let Some(after) = declaration.strip_prefix("template") else {
        return Ok((None, declaration));
    };
    let after_ws = after.trim_start();
    if !after_ws.starts_with('<') {
        return Ok((None, declaration));
    }

    let mut depth = 0usize;
    for (offset, ch) in declaration.char_indices() {
        match ch {
            '<' => depth += 1,
            '>' => {
                depth -= 1;
                if depth == 0 {
                    let prefix = declaration[..=offset].to_string();
                    return Ok((Some(prefix), declaration[offset + 1..].trim_start()));
                }
            }
            _ => {}
        }
    }
    Err("unbalanced template parameter list".to_string())
}

fn matching_close(tokens: &[(DeclToken, &str)], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (index, (token, _)) in tokens.iter().enumerate().skip(open) {
        match token {
            DeclToken::OpenParen => depth += 1,
            DeclToken::CloseParen => {
                depth -= 1;
                if depth == 0 {
                    return Some(index);
                }
            }
            _ => {}
        }
    }
    None
}

/// Render the head (everything before parameters/initializer) into prefix
/// text, qualifier and name nodes. Returns the unqualified name.
fn push_head(
    head: &[(DeclToken, &str)],
    children: &mut Vec<TargetNode>,
) -> Result<String, String> {
    let last_ident = head
        .iter()
        .rposition(|(token, _)| *token == DeclToken::Ident)
        .ok_or_else(|| "no declarator name found".to_string())?;

    // Walk the qualified chain backwards: Ident (:: Ident)*
    let mut chain_start = last_ident;
    while chain_start >= 2
        && head[chain_start - 1].0 == DeclToken::Scope
        && head[chain_start - 2].0 == DeclToken::Ident
    {
        chain_start -= 2;
    }

    let prefix = raw(&head[..chain_start]);
    let prefix = prefix.trim();
    if !prefix.is_empty() {
        children.push(TargetNode::text(prefix.to_string()));
        children.push(
            TargetNode::element(tags::DESC_SIG_SPACE)
                .with_children(vec![TargetNode::text(" ")]),
        );
    }

    if chain_start < last_ident {
        let qualifier = raw(&head[chain_start..last_ident]);
        children.push(
            TargetNode::element(tags::DESC_ADDNAME)
                .with_children(vec![TargetNode::text(qualifier)]),
        );
    }

    let name = head[last_ident].1.to_string();
    children.push(
        TargetNode::element(tags::DESC_NAME).with_children(vec![TargetNode::text(name.clone())]),
    );
    Ok(name)
}

/// Build the parameter list node from the tokens between the parens.
fn parameter_list(params: &[(DeclToken, &str)]) -> TargetNode {
    let mut list = TargetNode::element(tags::DESC_PARAMETERLIST);
    let mut start = 0;
    let mut depth = 0usize;

    let push_param = |list: &mut TargetNode, slice: &[(DeclToken, &str)]| {
        let text = raw(slice);
        let text = text.trim();
        if !text.is_empty() {
            list.push_child(
                TargetNode::element(tags::DESC_PARAMETER)
                    .with_children(vec![TargetNode::text(text.to_string())]),
            );
        }
    };

    for (index, (token, _)) in params.iter().enumerate() {
        match token {
            DeclToken::OpenParen => depth += 1,
            DeclToken::CloseParen => depth = depth.saturating_sub(1),
            DeclToken::Comma if depth == 0 => {
                push_param(&mut list, &params[start..index]);
                start = index + 1;
            }
            _ => {}
        }
    }
    push_param(&mut list, &params[start..]);
    list
}

/// Render a `template <...>` prefix as a signature line.
fn template_line(prefix: &str) -> TargetNode {
    let rest = prefix.strip_prefix("template").unwrap_or(prefix);
    TargetNode::element(tags::DESC_SIGNATURE_LINE).with_children(vec![
        TargetNode::element(tags::DESC_SIG_KEYWORD)
            .with_children(vec![TargetNode::text("template")]),
        TargetNode::text(rest.to_string()),
    ])
}

/// The built-in directive handler for the `c` and `cpp` domains.
///
/// Returns the host's two-node entry shape: an index node followed by the
/// declaration wrapper with an empty content container.
pub struct BuiltinDeclarationDirective;

impl DeclarationDirective for BuiltinDeclarationDirective {
    fn run(
        &self,
        directive_name: &str,
        declaration: &str,
    ) -> Result<Vec<TargetNode>, DomainError> {
        let (domain, native_kind) =
            directive_name
                .split_once(':')
                .ok_or_else(|| DomainError::MalformedDeclaration {
                    declaration: declaration.to_string(),
                    reason: format!("invalid directive name '{directive_name}'"),
                })?;

        let parsed =
            parse_declaration(declaration).map_err(|reason| DomainError::MalformedDeclaration {
                declaration: declaration.to_string(),
                reason,
            })?;

        let mut signature = TargetNode::element(tags::DESC_SIGNATURE);
        match &parsed.template_prefix {
            Some(prefix) => {
                signature.push_child(template_line(prefix));
                signature.push_child(
                    TargetNode::element(tags::DESC_SIGNATURE_LINE)
                        .with_children(parsed.declarator),
                );
            }
            None => {
                for child in parsed.declarator {
                    signature.push_child(child);
                }
            }
        }

        let desc = TargetNode::element(tags::DESC)
            .with_attribute("domain", domain)
            .with_attribute("objtype", native_kind)
            .with_children(vec![signature, TargetNode::element(tags::DESC_CONTENT)]);

        Ok(vec![TargetNode::element(tags::INDEX), desc])
    }
}
