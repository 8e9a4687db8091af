use super::*;
use crate::ast::Value;

#[test]
fn test_parse_basic_document() {
    let input = "let hostname = 'my-server'\n\
                 let ip_address = '192.168.0.1'\n\
                 let ports = array(80, 443, 22)\n\
                 let max_connections = 75";

    let doc = parse_document(input).expect("Failed to parse document");

    assert_eq!(doc.len(), 4);
    assert_eq!(doc.get("hostname"), Some(&Value::Text("my-server".into())));
    assert_eq!(doc.get("ip_address"), Some(&Value::Text("192.168.0.1".into())));
    assert_eq!(
        doc.get("ports"),
        Some(&Value::List(vec![
            Value::Integer(80),
            Value::Integer(443),
            Value::Integer(22),
        ]))
    );
    assert_eq!(doc.get("max_connections"), Some(&Value::Integer(75)));
}

#[test]
fn test_declaration_order_is_preserved() {
    let input = "let zebra = 1\nlet apple = 2\nlet mango = 3";
    let doc = parse_document(input).expect("Failed to parse document");

    let keys: Vec<&String> = doc.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["zebra", "apple", "mango"]);
}

#[test]
fn test_expression_uses_earlier_bindings() {
    let input = "let a = 3\nlet b = 4\nlet total = ${ a b + }";
    let doc = parse_document(input).expect("Failed to parse document");

    assert_eq!(doc.get("total"), Some(&Value::Integer(7)));
}

#[test]
fn test_expression_sorts_declared_list() {
    let input = "let unsorted = array(3, 1, 2)\nlet sorted_list = ${ unsorted sort() }";
    let doc = parse_document(input).expect("Failed to parse document");

    assert_eq!(
        doc.get("sorted_list"),
        Some(&Value::List(vec![
            Value::Integer(1),
            Value::Integer(2),
            Value::Integer(3),
        ]))
    );
}

#[test]
fn test_forward_reference_fails() {
    // `b` is declared after the expression that mentions it.
    let input = "let a = ${ b 1 + }\nlet b = 2";
    let err = parse_document(input).unwrap_err();

    match err {
        QuillError::UnknownToken { token, line, .. } => {
            assert_eq!(token, "b");
            assert_eq!(line, 1);
        }
        other => panic!("Expected UnknownToken, got {:?}", other),
    }
}

#[test]
fn test_declaration_does_not_see_itself() {
    let input = "let a = ${ a 1 + }";
    let err = parse_document(input).unwrap_err();
    assert!(matches!(err, QuillError::UnknownToken { .. }));
}

#[test]
fn test_last_write_wins_keeps_position() {
    let input = "let a = 1\nlet b = 2\nlet a = 3";
    let doc = parse_document(input).expect("Failed to parse document");

    assert_eq!(doc.len(), 2);
    assert_eq!(doc.get("a"), Some(&Value::Integer(3)));

    let keys: Vec<&String> = doc.iter().map(|(k, _)| k).collect();
    assert_eq!(keys, ["a", "b"]);
}

#[test]
fn test_empty_rhs_is_syntax_error() {
    let err = parse_document("let a = ").unwrap_err();
    match err {
        QuillError::SyntaxError { line, .. } => assert_eq!(line, 1),
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_digits_not_allowed_in_names() {
    let err = parse_document("let port2 = 1").unwrap_err();
    assert!(matches!(err, QuillError::SyntaxError { .. }));
}

#[test]
fn test_line_without_let_keyword_fails() {
    let err = parse_document("let a = 1\nport = 8080").unwrap_err();
    match err {
        QuillError::SyntaxError { line, .. } => assert_eq!(line, 2),
        other => panic!("Expected SyntaxError, got {:?}", other),
    }
}

#[test]
fn test_missing_equals_fails() {
    let err = parse_document("let a 5").unwrap_err();
    assert!(matches!(err, QuillError::SyntaxError { .. }));
}

#[test]
fn test_error_aborts_whole_parse() {
    // The bad second line must not leave a document with only `a` behind.
    let input = "let a = 1\nlet = broken\nlet b = 2";
    assert!(parse_document(input).is_err());
}

#[test]
fn test_unknown_value_carries_text() {
    let err = parse_document("let a = maybe(1)").unwrap_err();
    match err {
        QuillError::UnknownValue { text, .. } => assert_eq!(text, "maybe(1)"),
        other => panic!("Expected UnknownValue, got {:?}", other),
    }
}

#[test]
fn test_negative_integer_is_not_a_literal() {
    let err = parse_document("let a = -5").unwrap_err();
    assert!(matches!(err, QuillError::UnknownValue { .. }));
}

#[test]
fn test_quoted_string_keeps_interior_verbatim() {
    let doc = parse_document("let msg = 'a \"b\" c'").expect("Failed to parse document");
    assert_eq!(doc.get("msg"), Some(&Value::Text("a \"b\" c".into())));
}

#[test]
fn test_empty_quoted_string() {
    let doc = parse_document("let msg = ''").expect("Failed to parse document");
    assert_eq!(doc.get("msg"), Some(&Value::Text("".into())));
}

#[test]
fn test_empty_array_literal() {
    let doc = parse_document("let xs = array()").expect("Failed to parse document");
    assert_eq!(doc.get("xs"), Some(&Value::List(vec![])));

    let doc = parse_document("let xs = array(  )").expect("Failed to parse document");
    assert_eq!(doc.get("xs"), Some(&Value::List(vec![])));
}

#[test]
fn test_array_items_classified_independently() {
    let doc = parse_document("let xs = array('a', 2, bare)").expect("Failed to parse document");

    assert_eq!(
        doc.get("xs"),
        Some(&Value::List(vec![
            Value::Text("a".into()),
            Value::Integer(2),
            Value::Text("bare".into()),
        ]))
    );
}

#[test]
fn test_array_bare_token_is_not_looked_up() {
    // `a` is bound, but array items never consult the document.
    let doc = parse_document("let a = 1\nlet xs = array(a)").expect("Failed to parse document");
    assert_eq!(doc.get("xs"), Some(&Value::List(vec![Value::Text("a".into())])));
}

#[test]
fn test_empty_expression_binds_null() {
    let doc = parse_document("let nothing = ${ }").expect("Failed to parse document");
    assert_eq!(doc.get("nothing"), Some(&Value::Null));
}

#[test]
fn test_expression_reports_declaration_line() {
    let input = "let a = 1\nlet b = 2\nlet c = ${ a ghost + }";
    let err = parse_document(input).unwrap_err();

    match err {
        QuillError::UnknownToken { token, line, .. } => {
            assert_eq!(token, "ghost");
            assert_eq!(line, 3);
        }
        other => panic!("Expected UnknownToken, got {:?}", other),
    }
}

#[test]
fn test_rebinding_visible_to_later_expressions() {
    let input = "let a = 1\nlet a = 10\nlet b = ${ a a * }";
    let doc = parse_document(input).expect("Failed to parse document");
    assert_eq!(doc.get("b"), Some(&Value::Integer(100)));
}

#[test]
fn test_extra_whitespace_is_tolerated() {
    let input = "  let   spaced   =   42  ";
    let doc = parse_document(input).expect("Failed to parse document");
    assert_eq!(doc.get("spaced"), Some(&Value::Integer(42)));
}
