//! Class/base scanner for Python source.
//!
//! Scene discovery only needs class headers, so instead of a full Python
//! grammar the scanner tracks just enough lexical state (comments, string
//! literals, bracket depth) to find every `class` statement in document
//! order and read its direct base list. Nothing else in the file is
//! interpreted.

use scenecast_model::{BaseRef, ClassDecl, SourceModule};

/// Scan failure.
///
/// A malformed class header or an unterminated literal aborts the scan
/// and the whole file is treated as unparsable, matching how a real
/// parser would reject it.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("unterminated string literal starting on line {line}")]
    UnterminatedString { line: usize },

    #[error("unclosed base list for class `{class}` starting on line {line}")]
    UnclosedBaseList { class: String, line: usize },

    #[error("malformed class declaration on line {line}")]
    MalformedClassHeader { line: usize },
}

/// Scan one script into its document-ordered class declarations.
///
/// Nested classes are picked up wherever their header appears, so they
/// land after their enclosing class in the result.
pub fn scan_module(source: &str) -> Result<SourceModule, ScanError> {
    Scanner::new(source).run()
}

struct Scanner {
    chars: Vec<char>,
    pos: usize,
    line: usize,
    /// Bracket nesting depth; `class` is only a statement at depth 0.
    depth: usize,
    /// Whether code was already seen on the current logical statement.
    line_has_code: bool,
    classes: Vec<ClassDecl>,
}

impl Scanner {
    fn new(source: &str) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            line: 1,
            depth: 0,
            line_has_code: false,
            classes: Vec::new(),
        }
    }

    fn run(mut self) -> Result<SourceModule, ScanError> {
        while let Some(c) = self.peek() {
            match c {
                '#' => self.skip_comment(),
                '\'' | '"' => {
                    self.line_has_code = true;
                    self.skip_string()?;
                }
                '(' | '[' | '{' => {
                    self.depth += 1;
                    self.line_has_code = true;
                    self.bump();
                }
                ')' | ']' | '}' => {
                    self.depth = self.depth.saturating_sub(1);
                    self.line_has_code = true;
                    self.bump();
                }
                '\n' | ';' => {
                    self.line_has_code = false;
                    self.bump();
                }
                c if c.is_whitespace() => {
                    self.bump();
                }
                c if is_ident_start(c) => {
                    let at_statement_start = !self.line_has_code && self.depth == 0;
                    let word = self.read_ident();
                    self.line_has_code = true;
                    if word == "class" && at_statement_start {
                        let decl = self.read_class_header()?;
                        self.classes.push(decl);
                    }
                }
                _ => {
                    self.line_has_code = true;
                    self.bump();
                }
            }
        }
        Ok(SourceModule {
            classes: self.classes,
        })
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.chars.get(self.pos + offset).copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn skip_comment(&mut self) {
        while let Some(c) = self.peek() {
            if c == '\n' {
                break;
            }
            self.bump();
        }
    }

    /// Consume a string literal starting at the current quote character.
    /// Handles single- and triple-quoted forms and backslash escapes.
    fn skip_string(&mut self) -> Result<(), ScanError> {
        let start_line = self.line;
        let quote = match self.bump() {
            Some(q) => q,
            None => return Ok(()),
        };

        let triple = self.peek() == Some(quote) && self.peek_at(1) == Some(quote);
        if triple {
            self.bump();
            self.bump();
            loop {
                match self.peek() {
                    None => return Err(ScanError::UnterminatedString { line: start_line }),
                    Some('\\') => {
                        self.bump();
                        self.bump();
                    }
                    Some(c) if c == quote
                        && self.peek_at(1) == Some(quote)
                        && self.peek_at(2) == Some(quote) =>
                    {
                        self.bump();
                        self.bump();
                        self.bump();
                        return Ok(());
                    }
                    Some(_) => {
                        self.bump();
                    }
                }
            }
        }

        loop {
            match self.peek() {
                None => return Err(ScanError::UnterminatedString { line: start_line }),
                Some('\\') => {
                    self.bump();
                    self.bump();
                }
                Some('\n') => return Err(ScanError::UnterminatedString { line: start_line }),
                Some(c) => {
                    self.bump();
                    if c == quote {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn read_ident(&mut self) -> String {
        let mut ident = String::new();
        while let Some(c) = self.peek() {
            if ident.is_empty() && !is_ident_start(c) {
                break;
            }
            if !ident.is_empty() && !is_ident_continue(c) {
                break;
            }
            ident.push(c);
            self.bump();
        }
        ident
    }

    /// Skip spaces, tabs, and backslash-newline continuations.
    fn skip_inline_ws(&mut self) {
        loop {
            match self.peek() {
                Some(' ') | Some('\t') => {
                    self.bump();
                }
                Some('\\') if self.peek_at(1) == Some('\n') => {
                    self.bump();
                    self.bump();
                }
                _ => break,
            }
        }
    }

    /// Parse the remainder of a class header; the `class` keyword was just
    /// consumed. Leaves the scanner positioned after the `:`.
    fn read_class_header(&mut self) -> Result<ClassDecl, ScanError> {
        let header_line = self.line;
        self.skip_inline_ws();

        let name = self.read_ident();
        if name.is_empty() {
            return Err(ScanError::MalformedClassHeader { line: header_line });
        }

        self.skip_inline_ws();

        // PEP 695 type-parameter list: `class Stack[T](Base):`
        if self.peek() == Some('[') {
            self.skip_bracket_group(&name, header_line)?;
            self.skip_inline_ws();
        }

        let mut bases = Vec::new();
        if self.peek() == Some('(') {
            for segment in self.read_base_list(&name, header_line)? {
                if let Some(base) = parse_base_ref(&segment) {
                    bases.push(base);
                }
            }
            self.skip_inline_ws();
        }

        if self.peek() != Some(':') {
            return Err(ScanError::MalformedClassHeader { line: header_line });
        }
        self.bump();

        Ok(ClassDecl { name, bases })
    }

    /// Consume a balanced `[...]` group, discarding its contents.
    fn skip_bracket_group(&mut self, class: &str, header_line: usize) -> Result<(), ScanError> {
        self.bump();
        let mut depth = 1usize;
        loop {
            match self.peek() {
                None => {
                    return Err(ScanError::UnclosedBaseList {
                        class: class.to_string(),
                        line: header_line,
                    })
                }
                Some('#') => self.skip_comment(),
                Some('\'') | Some('"') => self.skip_string()?,
                Some('[') | Some('(') | Some('{') => {
                    depth += 1;
                    self.bump();
                }
                Some(']') | Some(')') | Some('}') => {
                    depth -= 1;
                    self.bump();
                    if depth == 0 {
                        return Ok(());
                    }
                }
                Some(_) => {
                    self.bump();
                }
            }
        }
    }

    /// Consume the parenthesized base list and return the raw text of each
    /// top-level comma-separated segment. Newlines and comments inside the
    /// parentheses are tolerated, as Python allows.
    fn read_base_list(
        &mut self,
        class: &str,
        header_line: usize,
    ) -> Result<Vec<String>, ScanError> {
        self.bump();
        let mut depth = 1usize;
        let mut current = String::new();
        let mut segments = Vec::new();
        loop {
            match self.peek() {
                None => {
                    return Err(ScanError::UnclosedBaseList {
                        class: class.to_string(),
                        line: header_line,
                    })
                }
                Some('#') => self.skip_comment(),
                Some('\'') | Some('"') => {
                    // Keep the quote as a marker so the segment can never
                    // read as a plain identifier.
                    current.push('"');
                    self.skip_string()?;
                }
                Some('(') | Some('[') | Some('{') => {
                    depth += 1;
                    current.push(self.bump().unwrap_or_default());
                }
                Some(')') | Some(']') | Some('}') => {
                    depth -= 1;
                    if depth == 0 {
                        self.bump();
                        segments.push(current);
                        return Ok(segments);
                    }
                    current.push(self.bump().unwrap_or_default());
                }
                Some(',') if depth == 1 => {
                    self.bump();
                    segments.push(std::mem::take(&mut current));
                }
                Some('\n') => {
                    self.bump();
                    current.push(' ');
                }
                Some(_) => {
                    current.push(self.bump().unwrap_or_default());
                }
            }
        }
    }
}

/// Interpret one base-list segment as a base reference.
///
/// Only a bare identifier or a single `alias.identifier` access survive;
/// calls, subscripts, longer attribute chains, and keyword arguments
/// (`metaclass=...`) resolve to `None` and are ignored.
fn parse_base_ref(segment: &str) -> Option<BaseRef> {
    let text = segment.trim();
    if text.is_empty() {
        return None;
    }

    if let Some((alias, name)) = text.split_once('.') {
        let alias = alias.trim();
        let name = name.trim();
        if is_identifier(alias) && is_identifier(name) {
            return Some(BaseRef::qualified(alias, name));
        }
        return None;
    }

    if is_identifier(text) {
        return Some(BaseRef::simple(text));
    }
    None
}

fn is_identifier(text: &str) -> bool {
    let mut chars = text.chars();
    match chars.next() {
        Some(c) if is_ident_start(c) => chars.all(is_ident_continue),
        _ => false,
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
