/// Property tests: based integer literals, and reading back the
/// textual form (`Display`) of generated values.
use kstring::KString;
use num::{BigInt, BigRational};
use proptest::prelude::*;
use sxp::parse::ReadError;
use sxp::read::read;
use sxp::value::Value;

fn radix_char(radix: u32) -> char {
    match radix {
        2 => 'b',
        8 => 'o',
        10 => 'd',
        _ => 'x',
    }
}

/// Literal bodies with at least one digit invalid for the base.
fn arb_bad_body() -> impl Strategy<Value = (u32, String)> {
    prop_oneof![
        "[01]{0,4}[2-9g-z][01]{0,4}".prop_map(|s| (2, s)),
        "[0-7]{0,4}[89g-z][0-7]{0,4}".prop_map(|s| (8, s)),
        "[0-9]{0,4}[g-z.][0-9]{0,4}".prop_map(|s| (10, s)),
        "[0-9a-f]{0,4}[g-z.][0-9a-f]{0,4}".prop_map(|s| (16, s)),
    ]
}

/// Symbols that read back as symbols: they start with a character no
/// number can start with.
fn arb_symbol() -> impl Strategy<Value = String> {
    "[a-zA-Z*!?=][a-zA-Z0-9:/._*!?=+-]{0,12}"
}

fn arb_atom() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| Value::Integer(BigInt::from(n))),
        any::<f64>()
            .prop_filter("finite", |x| x.is_finite())
            .prop_map(Value::Float),
        (any::<i32>(), 1..1000i32)
            .prop_map(|(n, d)| Value::Rational(BigRational::new(n.into(), d.into()))),
        any::<String>().prop_map(|s| Value::String(KString::from_ref(&s))),
        any::<String>().prop_map(|s| Value::Uri(KString::from_ref(&s))),
        arb_symbol().prop_map(|s| Value::Symbol(KString::from_ref(&s))),
    ]
}

fn arb_value() -> impl Strategy<Value = Value> {
    arb_atom().prop_recursive(4, 64, 8, |inner| {
        prop::collection::vec(inner, 0..8).prop_map(Value::List)
    })
}

proptest! {
    #[test]
    fn based_integers(
        n in any::<i64>(),
        radix in prop::sample::select(vec![2u32, 8, 10, 16]),
        explicit_plus in any::<bool>(),
        upper in any::<bool>(),
    ) {
        let n = BigInt::from(n);
        let mut digits = n.magnitude().to_str_radix(radix);
        if upper {
            digits = digits.to_uppercase();
        }
        let sign = if n < BigInt::from(0) { "-" } else if explicit_plus { "+" } else { "" };
        let literal = format!("#{}{}{}", radix_char(radix), sign, digits);
        prop_assert_eq!(read(&literal).unwrap(), Value::Integer(n));
    }

    #[test]
    fn invalid_digits_for_base((radix, body) in arb_bad_body()) {
        let literal = format!("#{}{}", radix_char(radix), body);
        match read(&literal).unwrap_err().err {
            ReadError::InvalidNumberSyntax { radix: r, literal: l } => {
                prop_assert_eq!(r, radix);
                prop_assert_eq!(l.as_str(), body.as_str());
            }
            e => prop_assert!(false, "unexpected {:?}", e),
        }
    }

    #[test]
    fn strings_read_back(s in any::<String>()) {
        let v = Value::String(KString::from_ref(&s));
        prop_assert_eq!(read(&v.to_string()).unwrap(), v);
    }

    #[test]
    fn uris_read_back(s in any::<String>()) {
        let v = Value::Uri(KString::from_ref(&s));
        prop_assert_eq!(read(&v.to_string()).unwrap(), v);
    }

    #[test]
    fn symbols_read_back(s in arb_symbol()) {
        let v = Value::Symbol(KString::from_ref(&s));
        prop_assert_eq!(read(&v.to_string()).unwrap(), v);
    }

    #[test]
    fn floats_read_back(x in any::<f64>().prop_filter("finite", |x| x.is_finite())) {
        let v = Value::Float(x);
        prop_assert_eq!(read(&v.to_string()).unwrap(), v);
    }

    #[test]
    fn trees_read_back(v in arb_value()) {
        let text = v.to_string();
        prop_assert_eq!(read(&text).unwrap(), v);
    }
}
