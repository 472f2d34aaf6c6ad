//! Conformance tests for DMF record parsing.

use mecard_test::component::format::{ParseErrorKind, parse_record, try_parse_record};
use mecard_test::fixtures::{
    ESCAPES, INVALID_UTF8, MALFORMED_RECORDS, SHIFT_JIS, UNMAPPED_SHIFT_JIS,
    single_value_record,
};

#[test]
fn null_resistance() {
    assert!(parse_record("").is_none());
    assert!(parse_record(b"").is_none());
    assert!(parse_record(Vec::<u8>::new()).is_none());
}

#[test_log::test]
fn malformed_records_fail() {
    for (name, input) in MALFORMED_RECORDS {
        tracing::debug!(name, input, "Checking malformed record");
        let err = try_parse_record(input).expect_err(name);
        assert!(err.is_malformed(), "{name}: {err}");
    }
}

#[test]
fn no_props() {
    for input in [" foo :", " foo : ;", " foo : ;;"] {
        let rec = parse_record(input).unwrap();
        assert_eq!(rec.identifier(), "foo", "{input:?}");
        assert!(rec.properties().is_empty(), "{input:?}");
    }
}

#[test]
fn basic_with_optional_terminators() {
    let input = "id:name-0:value_0;name-1:value_1;;";

    // Two last characters can be skipped
    for cut in 0..3 {
        let rec = parse_record(&input[..input.len() - cut]).unwrap();
        assert_eq!(rec.identifier(), "id");
        assert_eq!(rec.properties().len(), 2);
        assert_eq!(rec.properties()[0].name(), "name-0");
        assert_eq!(rec.properties()[0].values(), ["value_0"]);
        assert_eq!(rec.properties()[1].name(), "name-1");
        assert_eq!(rec.properties()[1].values(), ["value_1"]);
    }
}

#[test]
fn single_property() {
    let rec = parse_record("id:name:value;;").unwrap();
    assert_eq!(rec.identifier(), "id");
    assert_eq!(rec.properties().len(), 1);
    assert_eq!(rec.properties()[0].name(), "name");
    assert_eq!(rec.properties()[0].values(), ["value"]);
}

#[test]
fn empty_value() {
    let rec = parse_record(" foo-bar: name0:value; name1:;;").unwrap();
    assert_eq!(rec.identifier(), "foo-bar");
    assert_eq!(rec.properties().len(), 2);
    assert_eq!(rec.properties()[0].name(), "name0");
    assert_eq!(rec.properties()[0].values(), ["value"]);
    assert_eq!(rec.properties()[1].name(), "name1");
    assert_eq!(rec.properties()[1].values(), [""]);
    assert!(rec.properties()[1].is_blank());
}

#[test]
fn multiple_values() {
    let rec = parse_record(" id: name:value0,,value1,").unwrap();
    assert_eq!(rec.identifier(), "id");
    assert_eq!(rec.properties().len(), 1);
    assert_eq!(rec.properties()[0].name(), "name");
    assert_eq!(rec.properties()[0].values(), ["value0", "", "value1", ""]);
}

#[test]
fn repeated_names_are_kept_in_order() {
    let rec = parse_record("id:a:1;b:2;a:3;;").unwrap();
    let names: Vec<_> = rec.properties().iter().map(|p| p.name()).collect();
    assert_eq!(names, ["a", "b", "a"]);
    assert_eq!(rec.properties_named("a").count(), 2);
}

#[test]
fn valid_utf8() {
    let rec = parse_record("id: name:тест;;").unwrap();
    assert_eq!(rec.properties().len(), 1);
    assert_eq!(rec.properties()[0].values(), ["тест"]);
}

#[test]
fn invalid_utf8_is_iso_8bit() {
    for &seq in INVALID_UTF8 {
        let mut input = b"id: name:".to_vec();
        input.extend_from_slice(seq);

        let rec = parse_record(&input).unwrap();
        assert_eq!(rec.identifier(), "id");
        assert_eq!(rec.properties().len(), 1);
        assert_eq!(rec.properties()[0].values()[0], seq, "{seq:02x?}");
        assert_eq!(rec.properties()[0].values().len(), 1);
    }
}

#[test]
fn shift_jis() {
    for &(input, expected) in SHIFT_JIS {
        let rec = parse_record(single_value_record(input)).unwrap();
        assert_eq!(rec.properties().len(), 1);
        assert_eq!(rec.properties()[0].name(), "test");
        assert_eq!(rec.properties()[0].values(), [expected]);
    }
}

#[test_log::test]
fn unmapped_shift_jis_is_iso_8bit() {
    for &seq in UNMAPPED_SHIFT_JIS {
        let rec = parse_record(single_value_record(seq)).unwrap();
        assert_eq!(rec.properties().len(), 1);
        assert_eq!(rec.properties()[0].values(), [seq], "{seq:02x?}");
    }
}

#[test]
fn escapes() {
    for &(input, expected) in ESCAPES {
        let rec = parse_record(single_value_record(input.as_bytes())).unwrap();
        assert_eq!(rec.properties().len(), 1);
        assert_eq!(rec.properties()[0].values(), [expected], "{input:?}");
    }
}

#[test]
fn dangling_backslash_fails_the_record() {
    let err = try_parse_record("foo: a:\\").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::UnexpectedContent);
    assert_eq!(err.offset, 7);
}

#[test]
fn output_does_not_borrow_input() {
    let rec = {
        let input = String::from("id:name:value;;");
        parse_record(&input).unwrap()
    };
    assert_eq!(rec.properties()[0].values(), ["value"]);
}
