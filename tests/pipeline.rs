use treecalc::{
    compile,
    error::{BuildError, CalcError, EvalError, ParseError, TokenizeError},
    evaluate,
    interpreter::{
        converter::to_postfix,
        lexer::tokenize,
        serializer::tokens_to_line,
        token::{Token, TokenKind},
        tree::ExprTree,
    },
    util::sequence::Sequence,
};

fn no_variables(name: &str) -> Result<f64, EvalError> {
    Err(EvalError::UndefinedVariable { name: name.to_string() })
}

fn eval(src: &str) -> Result<f64, CalcError> {
    evaluate(src, &no_variables)
}

fn assert_value(src: &str, expected: f64) {
    match eval(src) {
        Ok(value) => assert!((value - expected).abs() < 1e-9,
                             "'{src}' evaluated to {value}, expected {expected}"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn postfix_line(src: &str) -> String {
    let infix = tokenize(src).unwrap_or_else(|e| panic!("'{src}' failed to tokenize: {e}"));
    let postfix = to_postfix(&infix).unwrap_or_else(|e| panic!("'{src}' failed to convert: {e}"));
    tokens_to_line(&postfix)
}

fn seq(tokens: &[Token]) -> Sequence<Token> {
    tokens.iter().cloned().collect()
}

#[test]
fn tokenizer_needs_no_spaces() {
    assert_eq!(tokens_to_line(&tokenize("12.5*(x_1-3)").unwrap()), "12.5 * ( x_1 - 3 )");
    assert_eq!(tokens_to_line(&tokenize("  2 +\t3  ").unwrap()), "2 + 3");
    assert!(tokenize("").unwrap().is_empty());
    assert!(tokenize("   ").unwrap().is_empty());
}

#[test]
fn tokenizer_classifies_words() {
    let tokens = tokenize("sqrt + sqrtx + _a9").unwrap();
    let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds,
               vec![TokenKind::Function,
                    TokenKind::Operator,
                    TokenKind::Identifier,
                    TokenKind::Operator,
                    TokenKind::Identifier]);
}

#[test]
fn tokenizer_keeps_signs_separate() {
    let tokens = tokenize("-4").unwrap();
    assert_eq!(tokens, seq(&[Token::operator('-'), Token::operand("4")]));

    let tokens = tokenize("2*-3").unwrap();
    assert_eq!(tokens_to_line(&tokens), "2 * - 3");
}

#[test]
fn tokenizer_emits_assignment_operator() {
    let tokens = tokenize("x = 1").unwrap();
    assert_eq!(tokens.iter().nth(1), Some(&Token::operator('=')));
}

#[test]
fn tokenizer_number_grammar() {
    assert_eq!(tokenize("7.").unwrap(), seq(&[Token::operand("7.")]));
    assert_eq!(tokenize("1.2.3"),
               Err(TokenizeError::InvalidCharacter { character: '.',
                                                     position:  3, }));
    assert_eq!(tokenize(".5"),
               Err(TokenizeError::InvalidCharacter { character: '.',
                                                     position:  0, }));
}

#[test]
fn tokenizer_rejects_unknown_characters() {
    assert_eq!(tokenize("2 % 3"),
               Err(TokenizeError::InvalidCharacter { character: '%',
                                                     position:  2, }));
    assert!(matches!(tokenize("1 + é"),
                     Err(TokenizeError::InvalidCharacter { character: 'é', .. })));
}

#[test]
fn precedence_orders_postfix() {
    assert_eq!(postfix_line("2+3*4"), "2 3 4 * +");
    assert_eq!(postfix_line("2*3+4"), "2 3 * 4 +");
    assert_eq!(postfix_line("8-4-2"), "8 4 - 2 -");
    assert_eq!(postfix_line("8/4/2"), "8 4 / 2 /");
    assert_eq!(postfix_line("2^3^2"), "2 3 2 ^ ^");
    assert_eq!(postfix_line("2*3^2"), "2 3 2 ^ *");
    assert_eq!(postfix_line("(2+3)*4"), "2 3 + 4 *");
}

#[test]
fn functions_attach_to_their_group() {
    assert_eq!(postfix_line("sqrt(9)"), "9 sqrt");
    assert_eq!(postfix_line("sqrt(x+1)*2"), "x 1 + sqrt 2 *");
    assert_eq!(postfix_line("sqrt(sqrt(16))"), "16 sqrt sqrt");
    assert_eq!(postfix_line("1+sqrt(4)^2"), "1 4 sqrt 2 ^ +");
}

#[test]
fn unbalanced_parentheses_fail_conversion() {
    for src in ["(1+2", "1+2)", ")(", "((1)", "sqrt(4"] {
        assert!(matches!(compile(src), Err(CalcError::Parse(ParseError::UnbalancedParentheses))),
                "'{src}' should fail with unbalanced parentheses");
    }
}

#[test]
fn unknown_operator_tokens_fail_conversion() {
    let tokens = seq(&[Token::operand("7"), Token::new("%", TokenKind::Operator), Token::operand("2")]);
    assert_eq!(to_postfix(&tokens), Err(ParseError::UnknownOperator { symbol: "%".into() }));
}

#[test]
fn assignment_is_not_an_expression_operator() {
    assert!(matches!(compile("x = 1"), Err(CalcError::Parse(ParseError::UnexpectedAssignment))));
}

#[test]
fn evaluates_arithmetic() {
    assert_value("2+3*4", 14.0);
    assert_value("(2+3)*4", 20.0);
    assert_value("2^3^2", 512.0);
    assert_value("(2^3)^2", 64.0);
    assert_value("10-4-3", 3.0);
    assert_value("100/10/5", 2.0);
    assert_value("sqrt(9)", 3.0);
    assert_value("sqrt(2)^2", 2.0);
    assert_value("1.5*4", 6.0);
    assert_value("((((7))))", 7.0);
    assert_value("2^0.5", std::f64::consts::SQRT_2);
}

#[test]
fn fully_parenthesized_expressions_match_their_value() {
    let cases = [("((1+2)*(3+4))", 21.0),
                 ("((10/(2+3))-(4*0.5))", 0.0),
                 ("(sqrt((9*4))+(1^5))", 7.0),
                 ("((2^(1+2))/(8-(2*2)))", 2.0)];

    for (src, expected) in cases {
        assert_value(src, expected);
    }
}

#[test]
fn function_without_parentheses_applies_to_next_operand() {
    assert_value("sqrt 16", 4.0);
}

#[test]
fn sqrt_of_negative_is_nan() {
    let value = eval("sqrt(0-4)").unwrap();
    assert!(value.is_nan());
}

#[test]
fn division_by_zero_fails() {
    assert_eq!(eval("5/0"), Err(CalcError::Eval(EvalError::DivisionByZero)));
    assert_eq!(eval("1/(2-2)"), Err(CalcError::Eval(EvalError::DivisionByZero)));
    assert_value("0/5", 0.0);
}

#[test]
fn undefined_identifier_is_named() {
    let err = eval("x+1").unwrap_err();
    assert_eq!(err, CalcError::Eval(EvalError::UndefinedVariable { name: "x".into() }));
    assert!(err.to_string().contains('x'));
}

#[test]
fn resolver_supplies_variables() {
    let vars = |name: &str| match name {
        "a" => Ok(3.0),
        "b" => Ok(4.0),
        _ => Err(EvalError::UndefinedVariable { name: name.to_string() }),
    };

    assert_eq!(evaluate("sqrt(a^2+b^2)", &vars), Ok(5.0));
    assert_eq!(evaluate("a*b - c", &vars),
               Err(CalcError::Eval(EvalError::UndefinedVariable { name: "c".into() })));
}

#[test]
fn resolver_errors_propagate_unchanged() {
    let locked = |_: &str| Err::<f64, _>(EvalError::UnsupportedFunction { name: "locked".into() });
    assert_eq!(evaluate("1 + z", &locked),
               Err(CalcError::Eval(EvalError::UnsupportedFunction { name: "locked".into() })));
}

#[test]
fn missing_resolver_is_reported() {
    let tree = compile("y*2").unwrap();
    assert_eq!(tree.evaluate(), Err(EvalError::NoResolver));

    let tree = compile("3*2").unwrap();
    assert_eq!(tree.evaluate(), Ok(6.0));
}

#[test]
fn malformed_postfix_fails_to_build() {
    let operator_first = seq(&[Token::operator('+'), Token::operand("1")]);
    assert_eq!(ExprTree::from_postfix(&operator_first).unwrap_err(),
               BuildError::MissingOperatorOperands { operator: "+".into() });

    let leftover = seq(&[Token::operand("1"), Token::operand("2")]);
    assert_eq!(ExprTree::from_postfix(&leftover).unwrap_err(),
               BuildError::LeftoverOperands { count: 2 });

    let bare_function = seq(&[Token::function("sqrt")]);
    assert_eq!(ExprTree::from_postfix(&bare_function).unwrap_err(),
               BuildError::MissingFunctionOperand { function: "sqrt".into() });

    let paren = seq(&[Token::operand("1"), Token::left_paren()]);
    assert_eq!(ExprTree::from_postfix(&paren).unwrap_err(),
               BuildError::UnexpectedParenthesis { token: "(".into() });

    assert_eq!(ExprTree::from_postfix(&Sequence::new()).unwrap_err(),
               BuildError::EmptyExpression);
}

#[test]
fn unary_minus_is_not_supported() {
    assert!(matches!(compile("-4"),
                     Err(CalcError::Build(BuildError::MissingOperatorOperands { .. }))));
    assert!(matches!(compile("2*-3"), Err(CalcError::Build(_))));
    assert_value("0-4", -4.0);
}

#[test]
fn empty_input_fails_to_build() {
    assert!(matches!(compile(""), Err(CalcError::Build(BuildError::EmptyExpression))));
    assert!(matches!(compile("()"), Err(CalcError::Build(BuildError::EmptyExpression))));
}

#[test]
fn adjacent_operands_are_leftovers() {
    assert!(matches!(compile("2 3"),
                     Err(CalcError::Build(BuildError::LeftoverOperands { count: 2 }))));
    assert!(matches!(compile("2x"), Err(CalcError::Build(_))));
}

#[test]
fn long_sums_evaluate() {
    let source = format!("1{}", "+1".repeat(10_000));
    assert_eq!(eval(&source), Ok(10_001.0));

    let source = format!("{}1{}", "(".repeat(5_000), ")".repeat(5_000));
    assert_eq!(eval(&source), Ok(1.0));
}

#[test]
fn error_messages_are_readable() {
    assert_eq!(eval("5/0").unwrap_err().to_string(), "Division by zero.");
    assert_eq!(eval("(1").unwrap_err().to_string(), "Unbalanced parentheses.");
    assert_eq!(eval("1 ? 2").unwrap_err().to_string(),
               "Invalid character '?' at position 2.");
    assert_eq!(eval("x").unwrap_err().to_string(), "Undefined variable 'x'.");
}
