/// One entry of an encoded token stream.
///
/// A literal run is still eligible for substitution; a reference is an
/// opaque, length-1 token pointing into the [`Model`](crate::Model).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token<T> {
    /// A run of input symbols that no substitution has touched yet.
    Literal(Vec<T>),

    /// A reference to a model entry.
    Reference(u32),
}

impl<T> Token<T> {
    /// Returns the literal run, if this is one.
    pub fn as_literal(&self) -> Option<&[T]> {
        match self {
            Token::Literal(run) => Some(run),
            Token::Reference(_) => None,
        }
    }

    /// Returns the model id, if this is a reference.
    pub fn as_reference(&self) -> Option<u32> {
        match self {
            Token::Literal(_) => None,
            Token::Reference(id) => Some(*id),
        }
    }

    pub fn is_literal(&self) -> bool {
        matches!(self, Token::Literal(_))
    }
}
