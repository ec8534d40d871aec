use anyhow::Result;
use std::path::Path;
use sxp::parse::ReadError;
use sxp::read::{read_all_stream, read_file, read_file_with, write_all,
                ReadErrorWithLocation};
use sxp::settings::{Settings, STRICT_FORMAT, DEFAULT_SETTINGS};
use sxp::value::Value;

const INPUT: &[u8] = include_bytes!("t-input.sxp");
const EXPECTED: &[u8] = include_bytes!("t-expected.sxp");

#[test]
fn t1() -> Result<()> {
    let vals = read_all_stream(INPUT)?;
    let mut out = Vec::<u8>::new();
    write_all(&mut out, &vals)?;
    assert_eq!(String::from_utf8(out)?, String::from_utf8(EXPECTED.to_vec())?);
    Ok(())
}

#[test]
fn t1_from_file() -> Result<()> {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/t-input.sxp");
    let vals = read_file(&path)?;
    assert_eq!(vals, read_all_stream(INPUT)?);
    assert_eq!(vals.len(), 3);
    Ok(())
}

#[test]
fn missing_file() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/does-not-exist.sxp");
    let e = read_file(&path).unwrap_err();
    assert!(e.to_string().contains("does-not-exist.sxp"));
}

#[test]
fn error_in_file_names_file_and_position() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("sxp-t1-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("bad.sxp");
    std::fs::write(&path, "(a\n  b))")?;
    let e = read_file(&path).unwrap_err();
    std::fs::remove_dir_all(&dir)?;
    let msg = e.to_string();
    assert!(msg.starts_with("unexpected list terminator ')' in "), "{}", msg);
    assert!(msg.ends_with("bad.sxp\"@2.4"), "{}", msg);
    Ok(())
}

#[test]
fn file_settings_are_honoured() -> Result<()> {
    let dir = std::env::temp_dir().join(format!("sxp-t1-strict-{}", std::process::id()));
    std::fs::create_dir_all(&dir)?;
    let path = dir.join("escapes.sxp");
    std::fs::write(&path, r#"("a\qb")"#)?;
    let lenient = read_file(&path);
    let strict = Settings { format: &STRICT_FORMAT, ..DEFAULT_SETTINGS };
    let e = read_file_with(&path, &strict);
    std::fs::remove_dir_all(&dir)?;
    assert_eq!(lenient?, vec![Value::List(vec![Value::string("aqb")])]);
    match e {
        Err(ReadErrorWithLocation::PC(pc)) => assert!(
            matches!(pc.err_with_pos.err, ReadError::InvalidEscapedChar('q')),
            "{:?}", pc.err_with_pos.err),
        Err(e) => panic!("unexpected {}", e),
        Ok(v) => panic!("unexpected success {:?}", v),
    }
    Ok(())
}
