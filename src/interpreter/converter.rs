use crate::{
    ast::Operator,
    error::ParseError,
    interpreter::token::{Token, TokenKind},
    util::{sequence::Sequence, stack::Stack},
};

/// Result type used by the infix-to-postfix converter.
pub type ParseResult<T> = Result<T, ParseError>;

/// Reorders infix tokens into postfix (reverse Polish) order.
///
/// This is the shunting-yard algorithm. Operands and identifiers go straight
/// to the output; operators wait on a stack until an operator that binds
/// less tightly arrives. Functions wait on the same stack until the
/// parenthesis that closes their argument, and are emitted right after it.
///
/// | Operator | Precedence | Associativity |
/// |----------|------------|---------------|
/// | `^`      | 4          | right         |
/// | `*` `/`  | 3          | left          |
/// | `+` `-`  | 2          | left          |
///
/// # Parameters
/// - `tokens`: Infix tokens, as produced by the tokenizer.
///
/// # Returns
/// The same tokens in postfix order, with parentheses removed.
///
/// # Errors
/// - [`ParseError::UnbalancedParentheses`] if a `)` has no matching `(` or a
///   `(` is never closed.
/// - [`ParseError::UnexpectedAssignment`] if an `=` is present; assignments
///   are split off before conversion.
/// - [`ParseError::UnknownOperator`] for an operator token with an unknown
///   symbol.
///
/// # Example
/// ```
/// use treecalc::interpreter::{converter::to_postfix, lexer::tokenize, serializer::tokens_to_line};
///
/// let postfix = to_postfix(&tokenize("2+3*4").unwrap()).unwrap();
/// assert_eq!(tokens_to_line(&postfix), "2 3 4 * +");
///
/// let postfix = to_postfix(&tokenize("sqrt(a+b)^2").unwrap()).unwrap();
/// assert_eq!(tokens_to_line(&postfix), "a b + sqrt 2 ^");
///
/// assert!(to_postfix(&tokenize("(1+2").unwrap()).is_err());
/// ```
pub fn to_postfix(tokens: &Sequence<Token>) -> ParseResult<Sequence<Token>> {
    let mut output = Sequence::new();
    let mut pending: Stack<Token> = Stack::new();

    for token in tokens {
        match token.kind {
            TokenKind::Operand | TokenKind::Identifier => output.push_back(token.clone()),
            TokenKind::Function | TokenKind::LeftParen => pending.push(token.clone()),
            TokenKind::Operator => {
                let incoming = incoming_operator(token)?;
                while let Some(stacked) = pending.pop_if(|top| {
                                                    top.as_operator()
                                                       .is_some_and(|op| yields_to(op, incoming))
                                                }) {
                    output.push_back(stacked);
                }
                pending.push(token.clone());
            },
            TokenKind::RightParen => {
                close_group(&mut pending, &mut output)?;
                if let Some(function) = pending.pop_if(|top| top.kind == TokenKind::Function) {
                    output.push_back(function);
                }
            },
        }
    }

    while let Some(token) = pending.pop() {
        if token.is_paren() {
            return Err(ParseError::UnbalancedParentheses);
        }
        output.push_back(token);
    }

    Ok(output)
}

/// Validates an operator token on its way into the converter.
fn incoming_operator(token: &Token) -> ParseResult<Operator> {
    match token.as_operator() {
        Some(Operator::Assign) => Err(ParseError::UnexpectedAssignment),
        Some(op) => Ok(op),
        None => Err(ParseError::UnknownOperator { symbol: token.text.clone() }),
    }
}

/// Returns `true` if `stacked` must be emitted before `incoming` is pushed.
const fn yields_to(stacked: Operator, incoming: Operator) -> bool {
    let (above, below) = (stacked.precedence(), incoming.precedence());
    above > below || (above == below && !incoming.is_right_associative())
}

/// Moves pending tokens to the output up to the innermost open `(`, which is
/// discarded.
fn close_group(pending: &mut Stack<Token>, output: &mut Sequence<Token>) -> ParseResult<()> {
    loop {
        match pending.pop() {
            Some(token) if token.kind == TokenKind::LeftParen => return Ok(()),
            Some(token) => output.push_back(token),
            None => return Err(ParseError::UnbalancedParentheses),
        }
    }
}
