//! Single-string command lines built from argument lists, and back.
//!
//! Quoting is deliberately narrow: a token containing whitespace is wrapped in
//! double quotes and nothing else is escaped. Embedded quotes, backslashes and
//! other shell metacharacters are written as-is, which is enough for encoder
//! flag values and Windows paths.

/// Upper bound on a serialized command line, in bytes
pub const MAX_CMD: usize = 65536;

fn needs_quotes(token: &str) -> bool {
    token.chars().any(char::is_whitespace)
}

/// Bounded command-line buffer.
///
/// Tokens are appended whole or not at all. Once one token is refused every
/// later token is refused too, so a truncated line is always a prefix of the
/// untruncated one.
#[derive(Debug, Clone)]
pub struct CommandLine {
    buf: String,
    limit: usize,
    truncated: bool,
}

impl Default for CommandLine {
    fn default() -> Self {
        Self::with_limit(MAX_CMD)
    }
}

impl CommandLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            buf: String::new(),
            limit,
            truncated: false,
        }
    }

    /// Append one token, quoting it if needed. Returns false if it was dropped.
    pub fn push(&mut self, token: &str) -> bool {
        if self.truncated {
            return false;
        }

        let quoted = needs_quotes(token);
        let separator = usize::from(!self.buf.is_empty());
        let needed = separator + token.len() + if quoted { 2 } else { 0 };

        if self.buf.len() + needed > self.limit {
            self.truncated = true;
            return false;
        }

        if separator == 1 {
            self.buf.push(' ');
        }
        if quoted {
            self.buf.push('"');
            self.buf.push_str(token);
            self.buf.push('"');
        } else {
            self.buf.push_str(token);
        }
        true
    }

    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            if !self.push(token.as_ref()) {
                break;
            }
        }
    }

    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn into_string(self) -> String {
        self.buf
    }
}

/// Join `args` into one command-line string within `MAX_CMD`
pub fn serialize<S: AsRef<str>>(args: &[S]) -> String {
    let mut line = CommandLine::new();
    line.extend(args);
    line.into_string()
}

/// Like `serialize`, with `program` as the leading token
pub fn serialize_with_program<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    let mut line = CommandLine::new();
    line.push(program);
    line.extend(args);
    line.into_string()
}

/// Split a command line on whitespace, keeping double-quoted runs together.
///
/// Inverse of `serialize` for tokens that are non-empty and contain no `"`.
pub fn split(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut in_token = false;

    for c in line.chars() {
        match c {
            '"' => {
                in_quotes = !in_quotes;
                in_token = true;
            }
            c if c.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            c => {
                current.push(c);
                in_token = true;
            }
        }
    }

    if in_token {
        tokens.push(current);
    }
    tokens
}
