//! Tests for Value, Type and Symbol

use symeval::*;

#[test]
fn test_primitive_values() {
    assert_eq!(Value::Bool(true), Value::Bool(true));
    assert_ne!(Value::Bool(true), Value::Bool(false));

    assert_eq!(Value::Int(42), Value::Int(42));
    assert_ne!(Value::Int(42), Value::Int(43));
}

#[test]
fn test_no_coercion_between_int_and_bool() {
    assert_ne!(Value::Int(0), Value::Bool(false));
    assert_ne!(Value::Int(1), Value::Bool(true));
    assert_eq!(Value::Int(1).as_bool(), None);
    assert_eq!(Value::Bool(true).as_int(), None);
}

#[test]
fn test_value_predicates() {
    assert!(Value::Int(1).is_int());
    assert!(!Value::Int(1).is_bool());
    assert!(Value::Bool(false).is_bool());
    assert!(Value::Error.is_error());
    assert!(!Value::Error.is_int());
}

#[test]
fn test_value_type_tags() {
    assert_eq!(Value::Int(-3).ty(), Type::Int);
    assert_eq!(Value::Bool(true).ty(), Type::Bool);
    assert_eq!(Value::Error.ty(), Type::Error);
}

#[test]
fn test_value_display() {
    assert_eq!(Value::Int(i64::MIN).to_string(), i64::MIN.to_string());
    assert_eq!(format!("{}", Value::Bool(true)), "true");
    assert_eq!(format!("{:>6}", Value::Bool(false)), " false");
}

#[test]
fn test_symbol_type_matches_value() {
    let symbols = [
        Symbol::with_type("a", Type::Int),
        Symbol::with_type("b", Type::Bool),
        Symbol::with_type("c", Type::Error),
        Symbol::new("d", Value::Int(9)),
        Symbol::new("e", Value::Bool(true)),
    ];
    for sym in &symbols {
        assert_eq!(sym.ty(), sym.value().ty(), "{sym}");
    }
}

#[test]
fn test_symbol_clone_is_equal() {
    let sym = Symbol::new("count", Value::Int(3));
    let copy = sym.clone();
    assert_eq!(sym, copy);
    assert_eq!(copy.name(), "count");
}

#[test]
fn test_symbol_display() {
    assert_eq!(Symbol::new("x", Value::Int(3)).to_string(), "x: int = 3");
    assert_eq!(
        Symbol::new("flag", Value::Bool(true)).to_string(),
        "flag: bool = true"
    );
}
