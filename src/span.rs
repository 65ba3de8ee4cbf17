use derive_more::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[display(fmt = "[{}:{}]", start, end)]
pub struct Span {
    // half-open byte range
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn empty(at: usize) -> Self {
        Span { start: at, end: at }
    }

    pub fn str_from_source<'a>(&self, input: &'a str) -> &'a str {
        &input[self.start..self.end]
    }

    /// 1-based row and column of the first byte of the span.
    pub fn to_start_row_col(self, input: &str) -> (usize, usize) {
        let mut row = 1;
        let mut col = 1;
        let prefix = input.get(..self.start).unwrap_or(input);
        for c in prefix.chars() {
            match c {
                '\n' => {
                    row += 1;
                    col = 1;
                }
                _ => {
                    col += 1;
                }
            }
        }
        (row, col)
    }
}
