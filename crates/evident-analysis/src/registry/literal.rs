//! Recursive-descent scanner for list and string literals.
//!
//! Understands just enough of JS/TS/JSON literal syntax to pull tokens out
//! of a bracketed list: quoted strings at the list's top level, `name:`
//! values of objects inside the list, nested lists (flattened), and line or
//! block comments. Anything else is skipped. Unterminated input yields the
//! tokens read so far.

/// Byte cursor over the source. All structural characters are ASCII, so
/// byte positions always land on char boundaries.
struct Cursor<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.src[self.pos..].chars().nth(offset)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.src.len()
    }

    /// Skip whitespace and comments.
    fn skip_trivia(&mut self) {
        loop {
            match (self.peek(), self.peek_at(1)) {
                (Some(c), _) if c.is_whitespace() => {
                    self.bump();
                }
                (Some('/'), Some('/')) => {
                    while let Some(c) = self.bump() {
                        if c == '\n' {
                            break;
                        }
                    }
                }
                (Some('/'), Some('*')) => {
                    self.pos += 2;
                    match self.src[self.pos..].find("*/") {
                        Some(end) => self.pos += end + 2,
                        None => self.pos = self.src.len(),
                    }
                }
                _ => return,
            }
        }
    }

    /// Read a quoted string starting at the opening quote. Handles `\`
    /// escapes for the quote character, `\n`, `\t` and `\\`.
    fn read_string(&mut self) -> Option<String> {
        let quote = self.bump()?;
        let mut out = String::new();
        while let Some(c) = self.bump() {
            match c {
                '\\' => match self.bump() {
                    Some('n') => out.push('\n'),
                    Some('t') => out.push('\t'),
                    Some(other) => out.push(other),
                    None => break,
                },
                c if c == quote => return Some(out),
                c => out.push(c),
            }
        }
        None
    }

    fn read_identifier(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c.is_alphanumeric() || c == '_' || c == '$' {
                self.bump();
            } else {
                break;
            }
        }
        self.src[start..self.pos].to_string()
    }

    /// Skip one value of any shape (string, list, object, bare token).
    fn skip_value(&mut self) {
        self.skip_trivia();
        match self.peek() {
            Some(c) if is_quote(c) => {
                self.read_string();
            }
            Some('[') => {
                self.list();
            }
            Some('{') => {
                self.object();
            }
            _ => {
                while let Some(c) = self.peek() {
                    if matches!(c, ',' | ']' | '}' | ')') || c.is_whitespace() {
                        break;
                    }
                    self.bump();
                }
            }
        }
    }

    /// `[` items `]` → tokens. Cursor must be on `[`.
    fn list(&mut self) -> Vec<String> {
        let mut tokens = Vec::new();
        self.bump();
        loop {
            self.skip_trivia();
            match self.peek() {
                None => return tokens,
                Some(']') => {
                    self.bump();
                    return tokens;
                }
                Some(',') => {
                    self.bump();
                }
                Some(c) if is_quote(c) => {
                    if let Some(s) = self.read_string() {
                        tokens.push(s);
                    }
                }
                Some('[') => tokens.extend(self.list()),
                Some('{') => {
                    if let Some(name) = self.object() {
                        tokens.push(name);
                    }
                }
                Some(_) => {
                    let before = self.pos;
                    self.skip_value();
                    if self.pos == before {
                        self.bump();
                    }
                }
            }
        }
    }

    /// `{` members `}` → value of the `name` member, if any. Cursor must be
    /// on `{`. Nested objects and lists are skipped whole.
    fn object(&mut self) -> Option<String> {
        let mut name = None;
        self.bump();
        loop {
            self.skip_trivia();
            let key = match self.peek() {
                None => return name,
                Some('}') => {
                    self.bump();
                    return name;
                }
                Some(',') => {
                    self.bump();
                    continue;
                }
                Some(c) if is_quote(c) => self.read_string(),
                Some(c) if c.is_alphabetic() || c == '_' || c == '$' => Some(self.read_identifier()),
                Some(_) => {
                    let before = self.pos;
                    self.skip_value();
                    if self.pos == before {
                        self.bump();
                    }
                    continue;
                }
            };
            self.skip_trivia();
            if self.peek() != Some(':') {
                continue;
            }
            self.bump();
            self.skip_trivia();
            if key.as_deref() == Some("name") && self.peek().is_some_and(is_quote) {
                if let Some(value) = self.read_string() {
                    name.get_or_insert(value);
                }
            } else {
                self.skip_value();
            }
        }
    }
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\'' | '`')
}

/// Tokens of the list literal starting at the first `[` in `src`.
///
/// Returns an empty list when `src` holds no `[`.
pub fn read_list(src: &str) -> Vec<String> {
    let Some(start) = src.find('[') else {
        return Vec::new();
    };
    let mut cursor = Cursor::new(&src[start..]);
    cursor.list()
}

/// The quoted string at the start of `src` (after optional whitespace).
pub fn read_quoted(src: &str) -> Option<String> {
    let mut cursor = Cursor::new(src);
    cursor.skip_trivia();
    if cursor.at_end() || !cursor.peek().is_some_and(is_quote) {
        return None;
    }
    cursor.read_string()
}
