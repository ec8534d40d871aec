use anyhow::Result;
use kstring::KString;
use sxp::parse::ReadError;
use sxp::read::forms;
use sxp::settings::{Constructors, Format, PlainConstructors, Rationals, Settings,
                    DEFAULT_SETTINGS, STRICT_FORMAT, SXP_FORMAT};
use sxp::value::{list, Value};

const STRICT: Settings<'static> = Settings {
    format: &STRICT_FORMAT,
    constructors: &PlainConstructors,
    depth_limit: 500,
};

#[test]
fn lenient_escapes_pass_through() -> Result<()> {
    assert_eq!(forms(r#""\q\>""#, &DEFAULT_SETTINGS).read_one()?,
               Value::string("q>"));
    Ok(())
}

#[test]
fn strict_escapes() -> Result<()> {
    let e = forms(r#""a\qb""#, &STRICT).read_one().unwrap_err();
    assert!(matches!(e.err, ReadError::InvalidEscapedChar('q')));
    assert_eq!(e.pos.col, 3);
    // the table and the closing delimiter are still fine
    assert_eq!(forms(r#""\"\\\/\b\f\n\r\t""#, &STRICT).read_one()?,
               Value::string("\"\\/\x08\x0C\n\r\t"));
    assert_eq!(forms(r"<a\>b>", &STRICT).read_one()?, Value::uri("a>b"));
    // but only the delimiter of the literal at hand
    let e = forms(r#""a\>b""#, &STRICT).read_one().unwrap_err();
    assert!(matches!(e.err, ReadError::InvalidEscapedChar('>')));
    // characters are not escapes
    assert_eq!(forms(r"#\q", &STRICT).read_one()?, Value::string("q"));
    Ok(())
}

#[test]
fn unsupported_rationals() -> Result<()> {
    let format = Format { rationals: Rationals::Unsupported, ..SXP_FORMAT };
    let settings = Settings { format: &format, ..DEFAULT_SETTINGS };
    let e = forms("(x 1/3)", &settings).read_one().unwrap_err();
    match e.err {
        ReadError::UnsupportedRational(s) => assert_eq!(s.as_str(), "1/3"),
        e => panic!("unexpected {:?}", e)
    }
    let e = forms("1/3", &settings).read_one().unwrap_err();
    assert_eq!(e.to_string(), "rational numbers are not supported: \"1/3\" @1.0");
    // other numbers are unaffected
    assert_eq!(forms("1.5", &settings).read_one()?, Value::Float(1.5));
    Ok(())
}

#[derive(Debug)]
struct LispConstructors;

impl Constructors for LispConstructors {
    fn symbol(&self, name: &str) -> Value {
        match name {
            "nil" => Value::Null,
            "t" => Value::Bool(true),
            _ => Value::Symbol(KString::from_ref(&name.to_lowercase())),
        }
    }
    fn uri(&self, text: &str) -> Value {
        Value::String(KString::from_ref(text))
    }
}

#[test]
fn custom_constructors() -> Result<()> {
    let settings = Settings { constructors: &LispConstructors, ..DEFAULT_SETTINGS };
    assert_eq!(forms("(nil t FOO <x:y> \"nil\")", &settings).read_one()?,
               list([Value::Null, Value::Bool(true), Value::symbol("foo"),
                     Value::string("x:y"), Value::string("nil")]));
    Ok(())
}

#[test]
fn depth_limit() -> Result<()> {
    let settings = Settings { depth_limit: 2, ..DEFAULT_SETTINGS };
    assert_eq!(forms("(())", &settings).read_one()?,
               list([Value::List(vec![])]));
    let e = forms("((()))", &settings).read_one().unwrap_err();
    assert!(matches!(e.err, ReadError::NestingTooDeep));
    assert_eq!(e.pos.col, 2);
    Ok(())
}

#[test]
fn default_depth_limit_stops_runaway_nesting() {
    let deep = "(".repeat(100_000);
    let e = forms(&deep, &DEFAULT_SETTINGS).read_one().unwrap_err();
    assert!(matches!(e.err, ReadError::NestingTooDeep));
}
