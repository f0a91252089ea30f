/// Assignment operator written between key and value when serializing.
/// Both are always accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Separator {
    #[default]
    Equals,
    Colon,
}

impl Separator {
    pub fn as_char(self) -> char {
        match self {
            Separator::Equals => '=',
            Separator::Colon => ':',
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Report leftover unparseable input as a syntax error instead of
    /// silently dropping it.
    pub strict: bool,
    pub separator: Separator,
}
