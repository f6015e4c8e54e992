use fvalidate::{
    and, array, array_of, boolean, date, empty, is, json_string, like, not, number, object,
    object_of, one_of, optional, or, regex, regexp, string, Path, ValidationError, Validator, Value,
};
use chrono::{TimeZone, Utc};
use serde_json::json;

fn expect_error(path: Path, expected: &str, received: impl Into<Value>) -> Option<ValidationError> {
    Some(ValidationError::new(path, expected, received.into()))
}

fn run(validator: &Validator, subject: impl Into<Value>) -> Option<ValidationError> {
    validator.validate(&subject.into())
}

// ====== Primitive Tests ======

#[test]
fn test_string() {
    assert_eq!(run(&string(), ""), None);
    assert_eq!(run(&string(), 3), expect_error(Path::root(), "string", 3));
}

#[test]
fn test_number() {
    assert_eq!(run(&number(), 0), None);
    assert_eq!(run(&number(), f64::INFINITY), None);
}

#[test]
fn test_boolean() {
    assert_eq!(run(&boolean(), true), None);
    assert_eq!(
        run(&boolean(), Value::Null),
        expect_error(Path::root(), "boolean", Value::Null)
    );
}

#[test]
fn test_empty() {
    assert_eq!(run(&empty(), Value::Null), None);
    assert_eq!(run(&empty(), Value::Undefined), None);
    assert_eq!(
        run(&empty(), ""),
        expect_error(Path::root(), "null or undefined", "")
    );
}

#[test]
fn test_object() {
    assert_eq!(run(&object(), json!({})), None);
    assert_eq!(
        run(&object(), Value::Null),
        expect_error(Path::root(), "object", Value::Null)
    );
    assert_eq!(
        run(&object(), json!([])),
        expect_error(Path::root(), "object", json!([]))
    );
}

#[test]
fn test_array() {
    assert_eq!(run(&array(), json!([])), None);
    assert_eq!(run(&array(), 0), expect_error(Path::root(), "array", 0));
}

#[test]
fn test_date() {
    let at = Utc.with_ymd_and_hms(2021, 6, 1, 12, 0, 0).unwrap();
    let pattern = ::regex::Regex::new("x").unwrap();

    assert_eq!(run(&date(), at), None);
    assert_eq!(
        run(&date(), pattern.clone()),
        expect_error(Path::root(), "date", pattern)
    );
    assert_eq!(
        run(&date(), "2021-06-01T12:00:00.000Z"),
        expect_error(Path::root(), "date", "2021-06-01T12:00:00.000Z")
    );
}

#[test]
fn test_regexp() {
    let pattern = ::regex::Regex::new("x+").unwrap();

    assert_eq!(run(&regexp(), pattern), None);
    assert_eq!(run(&regexp(), "x+"), expect_error(Path::root(), "regexp", "x+"));
    assert_eq!(
        run(&regexp(), json!({})).unwrap().message,
        "Path:'', Expected: regexp, Received: '{}'"
    );
}

#[test]
fn test_regex() {
    let test = regex("test").unwrap();

    assert_eq!(run(&test, "test"), None);
    assert_eq!(
        run(&test, "taste"),
        expect_error(Path::root(), "match regex(/test/)", "taste")
    );
}

// ====== Logical Tests ======

#[test]
fn test_not() {
    assert_eq!(run(&not(array()), 0), None);
    assert_eq!(
        run(&not(array()), json!([])),
        expect_error(Path::root(), "not(array)", json!([]))
    );
}

#[test]
fn test_and() {
    let sss = and([string(), regex("sss").unwrap()]);

    assert_eq!(run(&sss, "sss"), None);
    assert_eq!(
        run(&sss, "sas"),
        expect_error(Path::root(), "match regex(/sss/)", "sas")
    );
    assert_eq!(run(&and([string()]), "sss"), None);
}

#[test]
fn test_or() {
    let v = or([string(), number()]);

    assert_eq!(run(&v, "sas"), None);
    assert_eq!(
        run(&v, json!([])),
        expect_error(Path::root(), "or(string, number)", json!([]))
    );
}

#[test]
fn test_optional() {
    let v = optional(string());

    assert_eq!(run(&v, "sas"), None);
    assert_eq!(run(&v, Value::Null), None);
    assert_eq!(
        run(&v, 3),
        expect_error(Path::root(), "or(null or undefined, string)", 3)
    );
}

// ====== Equality Tests ======

#[test]
fn test_is() {
    assert_eq!(run(&is("test"), "test"), None);
    assert_eq!(
        run(&is("test"), "taste"),
        expect_error(Path::root(), r#"is("test")"#, "taste")
    );
}

#[test]
fn test_is_deep() {
    let reference = json!({ "a": { "b": { "c": 33 } } });

    assert_eq!(run(&is(reference.clone()), reference.clone()), None);
    assert_eq!(
        run(&is(reference), json!({ "a": { "b": { "c": 34 } } })),
        expect_error(
            Path::root(),
            r#"is({"a":{"b":{"c":33}}})"#,
            json!({ "a": { "b": { "c": 34 } } })
        )
    );
}

#[test]
fn test_one_of() {
    let v = one_of(["apple", "beer"]);

    assert_eq!(run(&v, "apple"), None);
    assert_eq!(
        run(&v, "cat"),
        expect_error(Path::root(), r#"or(is("apple"), is("beer"))"#, "cat")
    );
}

// ====== Structural Tests ======

fn nested_schema() -> Validator {
    object_of([
        ("parentNumber", number()),
        ("parentString", string()),
        ("parentOptional", optional(array())),
        ("parentObject", object()),
        (
            "child",
            object_of([
                ("childNumber", number()),
                ("childString", string()),
                (
                    "grandChild",
                    object_of([("optionalString", optional(string()))]),
                ),
            ]),
        ),
    ])
}

#[test]
fn test_object_of_deep_mismatch() {
    let subject = json!({
        "parentNumber": 333,
        "parentString": "aaa",
        "parentOptional": [],
        "parentObject": { "c": "c" },
        "child": {
            "childNumber": 444,
            "childString": "bbb",
            "grandChild": { "optionalString": 22 }
        }
    });

    assert_eq!(
        run(&nested_schema(), subject),
        expect_error(
            ["child", "grandChild", "optionalString"].into_iter().collect(),
            "or(null or undefined, string)",
            22
        )
    );
}

#[test]
fn test_array_of() {
    assert_eq!(
        run(&array_of(string()), 33),
        expect_error(Path::root(), "array", 33)
    );
    assert_eq!(
        run(&array_of(string()), json!(["33", 44])),
        expect_error(Path::root().push_index(1), "string", 44)
    );
}

// ====== Json String Tests ======

#[test]
fn test_json_string() {
    let v = json_string(object_of([("str", string()), ("num", number())]));

    assert_eq!(run(&v, r#"{ "str": "apple", "num": 42 }"#), None);
    assert_eq!(
        run(&v, r#"{ "str": "apple", "num": null }"#),
        expect_error(Path::root().push_key("num"), "number", Value::Null)
    );
}

// ====== Like Tests ======

#[test]
fn test_like() {
    let reference = json!([{
        "str": "str1",
        "num": 333,
        "obj": { "str": "str1", "num": 333 }
    }]);
    let subject = json!([
        { "str": "str1", "num": 444, "obj": { "str": "str1", "num": 444 } },
        { "str": "str1", "num": 444, "obj": { "str": "str1" } }
    ]);

    assert_eq!(
        run(&like(reference), subject),
        expect_error(
            Path::root().push_index(1).push_key("obj").push_key("num"),
            "number",
            Value::Undefined
        )
    );
}

#[test]
fn test_like_date_and_regexp() {
    let reference = Value::object([
        ("createdAt", Value::from(Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap())),
        ("matcher", Value::from(::regex::Regex::new("^id-").unwrap())),
    ]);
    let v = like(reference);

    let good = Value::object([
        ("createdAt", Value::from(Utc.with_ymd_and_hms(2024, 2, 29, 8, 30, 0).unwrap())),
        ("matcher", Value::from(::regex::Regex::new("[0-9]+").unwrap())),
    ]);
    assert_eq!(v.validate(&good), None);

    let bad = Value::object([
        ("createdAt", Value::from(Utc.with_ymd_and_hms(2024, 2, 29, 8, 30, 0).unwrap())),
        ("matcher", Value::from("^id-")),
    ]);
    assert_eq!(
        v.validate(&bad),
        expect_error(Path::root().push_key("matcher"), "regexp", "^id-")
    );
}

#[test]
fn test_like_message_renders_undefined() {
    let err = run(&like(json!({ "x": 1 })), json!({})).unwrap();
    assert_eq!(err.message, "Path:'x', Expected: number, Received: 'undefined'");
}

// ====== Purity Tests ======

#[test]
fn test_repeated_validation_is_identical() {
    let v = like(json!([{ "x": 1 }]));
    let subject = Value::from(json!([{ "x": 1 }, { "x": "s" }]));

    let first = v.validate(&subject);
    let second = v.validate(&subject);

    assert!(first.is_some());
    assert_eq!(first, second);
}
