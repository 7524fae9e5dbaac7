use super::Column;

/// Finds the longest numeric literal at the start of `s`.
/// Anything after the literal is ignored.
pub fn scan(s: &str) -> Option<LiteralSpan<'_>> {
    scan_literal(s).ok()
}

/// Like `scan` but on failure reports the columns that were inspected
/// before giving up.
pub fn scan_literal(s: &str) -> Result<LiteralSpan<'_>, Column> {
    BasicScanner::new(s).literal()
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Radix {
    Decimal,
    Hexadecimal,
    Octal,
}

/// Floating precision requested by an exponent marker or type suffix.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum Precision {
    Single,
    Double,
}

#[derive(Debug, PartialEq, Clone)]
pub struct Exponent<'a> {
    pub precision: Precision,
    /// Optional sign and at least one digit.
    pub digits: &'a str,
}

#[derive(Debug, PartialEq, Clone)]
pub struct LiteralSpan<'a> {
    pub negative: bool,
    pub radix: Radix,
    pub digits: &'a str,
    pub fraction: Option<&'a str>,
    pub exponent: Option<Exponent<'a>>,
    pub suffix: Option<Precision>,
    pub column: Column,
}

fn is_basic_whitespace(c: u8) -> bool {
    c == b' ' || c == b'\t' || c == b'\r' || c == b'\n'
}

fn is_basic_digit(c: u8) -> bool {
    c.is_ascii_digit()
}

fn is_basic_hex_digit(c: u8) -> bool {
    c.is_ascii_hexdigit()
}

fn is_basic_octal_digit(c: u8) -> bool {
    (b'0'..=b'7').contains(&c)
}

struct BasicScanner<'a> {
    s: &'a str,
    pos: usize,
}

impl<'a> BasicScanner<'a> {
    fn new(s: &'a str) -> BasicScanner<'a> {
        BasicScanner { s, pos: 0 }
    }

    fn peek(&self) -> Option<u8> {
        self.s.as_bytes().get(self.pos).copied()
    }

    fn eat(&mut self, pred: impl Fn(u8) -> bool) -> bool {
        match self.peek() {
            Some(c) if pred(c) => {
                self.pos += 1;
                true
            }
            _ => false,
        }
    }

    fn run(&mut self, pred: impl Fn(u8) -> bool) -> &'a str {
        let start = self.pos;
        while self.eat(&pred) {}
        &self.s[start..self.pos]
    }

    fn literal(&mut self) -> Result<LiteralSpan<'a>, Column> {
        self.run(is_basic_whitespace);
        let start = self.pos;
        if self.eat(|c| c == b'&') {
            return self.radix(start);
        }
        self.decimal(start)
    }

    fn radix(&mut self, start: usize) -> Result<LiteralSpan<'a>, Column> {
        let (radix, digits) = if self.eat(|c| c.eq_ignore_ascii_case(&b'H')) {
            (Radix::Hexadecimal, self.run(is_basic_hex_digit))
        } else {
            self.eat(|c| c.eq_ignore_ascii_case(&b'O'));
            (Radix::Octal, self.run(is_basic_octal_digit))
        };
        if digits.is_empty() {
            return Err(start..self.pos);
        }
        Ok(LiteralSpan {
            negative: false,
            radix,
            digits,
            fraction: None,
            exponent: None,
            suffix: None,
            column: start..self.pos,
        })
    }

    fn decimal(&mut self, start: usize) -> Result<LiteralSpan<'a>, Column> {
        let negative = self.peek() == Some(b'-');
        self.eat(|c| c == b'+' || c == b'-');
        let digits = self.run(is_basic_digit);
        let fraction = if self.eat(|c| c == b'.') {
            Some(self.run(is_basic_digit))
        } else {
            None
        };
        if digits.is_empty() && fraction.map_or(true, str::is_empty) {
            return Err(start..self.pos);
        }
        let exponent = self.exponent();
        let suffix = match self.peek() {
            Some(b'!') => Some(Precision::Single),
            Some(b'#') => Some(Precision::Double),
            _ => None,
        };
        if suffix.is_some() {
            self.pos += 1;
        }
        Ok(LiteralSpan {
            negative,
            radix: Radix::Decimal,
            digits,
            fraction,
            exponent,
            suffix,
            column: start..self.pos,
        })
    }

    fn exponent(&mut self) -> Option<Exponent<'a>> {
        let mark = self.pos;
        let precision = match self.peek() {
            Some(b'E') | Some(b'e') => Precision::Single,
            Some(b'D') | Some(b'd') => Precision::Double,
            _ => return None,
        };
        self.pos += 1;
        let begin = self.pos;
        self.eat(|c| c == b'+' || c == b'-');
        if self.run(is_basic_digit).is_empty() {
            self.pos = mark;
            return None;
        }
        Some(Exponent {
            precision,
            digits: &self.s[begin..self.pos],
        })
    }
}
