//! Tokenizing layer of the declaration parser.
//!
//! Splits `INPUT[...]` text into its bracket groups and reads the body into
//! raw, unvalidated parts. Positions are character offsets into the
//! original declaration text.

use crate::error::{MetabindError, Result};

const PREFIX: &str = "INPUT";

/// An argument as written, before schema validation.
#[derive(Debug, Clone, PartialEq)]
pub struct RawArgument {
    pub name: String,
    pub value: Option<String>,
    pub position: usize,
}

/// The body of a declaration, before schema validation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawBody {
    pub type_name: Option<(String, usize)>,
    pub arguments: Vec<RawArgument>,
    pub bind_target: Option<String>,
}

/// A declaration split into its optional template group and its body group.
#[derive(Debug, Clone, PartialEq)]
pub struct RawDeclaration {
    pub template: Option<String>,
    pub body: RawBody,
}

/// Split `INPUT[template][body]` or `INPUT[body]` and read the body.
pub fn read_declaration(text: &str) -> Result<RawDeclaration> {
    let chars: Vec<char> = text.chars().collect();
    let mut cursor = Cursor::new(&chars, 0);
    cursor.skip_ws();

    let start = cursor.pos;
    for expected in PREFIX.chars() {
        if cursor.bump() != Some(expected) {
            return Err(MetabindError::syntax_at(
                "declaration must start with 'INPUT['",
                start,
                cursor.snippet_from(start),
            ));
        }
    }

    let mut groups = Vec::new();
    loop {
        cursor.skip_ws();
        match cursor.peek() {
            Some('[') => groups.push(cursor.bracket_group()?),
            None => break,
            Some(_) => {
                return Err(cursor.error("unexpected text after closing ']'"));
            }
        }
    }

    let (template, body) = match groups.len() {
        0 => {
            return Err(MetabindError::syntax_at(
                "declaration must start with 'INPUT['",
                start,
                cursor.snippet_from(start),
            ))
        }
        1 => (None, groups.remove(0)),
        2 => {
            let body = groups.remove(1);
            let (tpl_start, tpl_end) = groups.remove(0);
            let name: String = chars[tpl_start..tpl_end].iter().collect();
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(MetabindError::syntax_at("empty template name", tpl_start, ""));
            }
            (Some(name), body)
        }
        _ => {
            return Err(MetabindError::syntax(
                "too many bracket groups, expected INPUT[template][declaration] at most",
            ))
        }
    };

    let (body_start, body_end) = body;
    let body = read_body(&chars[..body_end], body_start)?;
    Ok(RawDeclaration { template, body })
}

/// Read `TYPE? ( "(" args ")" )? ( ":" target )?` from `chars[start..]`.
fn read_body(chars: &[char], start: usize) -> Result<RawBody> {
    let mut cursor = Cursor::new(chars, start);
    let mut body = RawBody::default();

    cursor.skip_ws();
    if cursor.at_end() {
        return Err(MetabindError::syntax_at("empty declaration", start, ""));
    }

    let type_pos = cursor.pos;
    if let Some(name) = cursor.ident() {
        body.type_name = Some((name, type_pos));
    }

    cursor.skip_ws();
    if cursor.eat('(') {
        body.arguments = read_arguments(&mut cursor)?;
    }

    cursor.skip_ws();
    if cursor.eat(':') {
        let target = cursor.rest().trim().to_string();
        if target.is_empty() {
            return Err(cursor.error("empty bind target after ':'"));
        }
        body.bind_target = Some(target);
    } else if !cursor.at_end() {
        return Err(cursor.error("unexpected character"));
    }

    Ok(body)
}

fn read_arguments(cursor: &mut Cursor<'_>) -> Result<Vec<RawArgument>> {
    let mut arguments = Vec::new();
    cursor.skip_ws();
    if cursor.eat(')') {
        return Ok(arguments);
    }

    loop {
        cursor.skip_ws();
        let position = cursor.pos;
        let name = cursor
            .ident()
            .ok_or_else(|| cursor.error("expected argument name"))?;

        cursor.skip_ws();
        let value = if cursor.eat('(') {
            let value = cursor.value()?;
            cursor.skip_ws();
            if !cursor.eat(')') {
                return Err(cursor.error("expected ')' after argument value"));
            }
            Some(value)
        } else {
            None
        };

        arguments.push(RawArgument {
            name,
            value,
            position,
        });

        cursor.skip_ws();
        if cursor.eat(',') {
            continue;
        }
        if cursor.eat(')') {
            break;
        }
        return Err(cursor.error("expected ',' or ')' in argument list"));
    }

    Ok(arguments)
}

/// Character cursor over a slice of the declaration.
struct Cursor<'a> {
    chars: &'a [char],
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(chars: &'a [char], pos: usize) -> Self {
        Self { chars, pos }
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn eat(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn at_end(&self) -> bool {
        self.pos >= self.chars.len()
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    fn ident(&mut self) -> Option<String> {
        let start = self.pos;
        match self.peek() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
            _ => return None,
        }
        while self
            .peek()
            .is_some_and(|c| c.is_ascii_alphanumeric() || c == '_')
        {
            self.pos += 1;
        }
        Some(self.chars[start..self.pos].iter().collect())
    }

    /// Read an argument value: a quoted string or raw text up to the
    /// matching `)`. Leaves the cursor on that `)`.
    fn value(&mut self) -> Result<String> {
        self.skip_ws();
        if self.eat('"') {
            return self.quoted();
        }

        let start = self.pos;
        let mut depth = 0usize;
        loop {
            match self.peek() {
                None => return Err(self.error_at("unterminated argument value", start)),
                Some(')') if depth == 0 => break,
                Some(')') => depth -= 1,
                Some('(') => depth += 1,
                Some(_) => {}
            }
            self.pos += 1;
        }
        let raw: String = self.chars[start..self.pos].iter().collect();
        Ok(raw.trim().to_string())
    }

    fn quoted(&mut self) -> Result<String> {
        let start = self.pos - 1;
        let mut out = String::new();
        loop {
            match self.bump() {
                None => return Err(self.error_at("unterminated string", start)),
                Some('"') => return Ok(out),
                Some('\\') => match self.bump() {
                    Some(c @ ('"' | '\\')) => out.push(c),
                    Some(c) => {
                        out.push('\\');
                        out.push(c);
                    }
                    None => return Err(self.error_at("unterminated string", start)),
                },
                Some(c) => out.push(c),
            }
        }
    }

    /// Consume a balanced `[...]` group, respecting quotes. Returns the
    /// character range of its contents.
    fn bracket_group(&mut self) -> Result<(usize, usize)> {
        let open = self.pos;
        self.pos += 1;
        let start = self.pos;
        let mut depth = 0usize;
        let mut in_string = false;
        loop {
            let Some(c) = self.bump() else {
                return Err(self.error_at("missing closing ']'", open));
            };
            if in_string {
                match c {
                    '\\' => {
                        self.bump();
                    }
                    '"' => in_string = false,
                    _ => {}
                }
                continue;
            }
            match c {
                '"' => in_string = true,
                '[' => depth += 1,
                ']' if depth == 0 => return Ok((start, self.pos - 1)),
                ']' => depth -= 1,
                _ => {}
            }
        }
    }

    fn rest(&mut self) -> String {
        let rest: String = self.chars[self.pos..].iter().collect();
        self.pos = self.chars.len();
        rest
    }

    fn snippet_from(&self, start: usize) -> String {
        let end = (start + 12).min(self.chars.len());
        self.chars[start.min(end)..end].iter().collect()
    }

    fn error(&self, message: &str) -> MetabindError {
        self.error_at(message, self.pos)
    }

    fn error_at(&self, message: &str, position: usize) -> MetabindError {
        MetabindError::syntax_at(message, position, self.snippet_from(position))
    }
}
