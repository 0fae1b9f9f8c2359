use anyhow::{bail, Error};
use serde_json::{json, Value};

use drip_table_schema::*;

static STRING_SCHEMA: Schema = StringSchema::new("A test string").schema();

static SIMPLE_OBJECT_SCHEMA: Schema = ObjectSchema::new(
    "simple object schema",
    &[
        ("prop1", false, &STRING_SCHEMA),
        ("prop2", true, &STRING_SCHEMA),
        ("prop3", false, &STRING_SCHEMA),
    ],
)
.schema();

static SIMPLE_ARRAY_SCHEMA: Schema = ArraySchema::new("String list.", &STRING_SCHEMA).schema();

static NESTED_OBJECT_SCHEMA: Schema = ObjectSchema::new(
    "nested object schema",
    &[
        ("arr1", false, &SIMPLE_ARRAY_SCHEMA),
        ("obj1", false, &SIMPLE_OBJECT_SCHEMA),
        ("prop1", false, &STRING_SCHEMA),
    ],
)
.schema();

static OBJECT_WITH_ADDITIONAL: Schema = ObjectSchema::new(
    "object allowing additional properties",
    &[
        ("regular1", false, &STRING_SCHEMA),
        ("regular2", true, &STRING_SCHEMA),
    ],
)
.additional_properties(true)
.schema();

static STRING_OR_LIST: Schema = AnyOfSchema::new(
    "a single string or a list of strings",
    &[&STRING_SCHEMA, &SIMPLE_ARRAY_SCHEMA],
)
.schema();

static BOUNDED_ARRAY_SCHEMA: Schema = ArraySchema::new("Two numbers.", &NumberSchema::new("n").schema())
    .min_length(2)
    .max_length(2)
    .schema();

static PAGE_SCHEMA: Schema = IntegerSchema::new("Page number.").minimum(1).schema();

const SHAPE_TYPE_ENTRY: SchemaPropertyEntry = (
    "type",
    false,
    &StringSchema::new("Shape type.")
        .format(&StringFormat::Enum(&[
            EnumEntry::new("circle", "A circle."),
            EnumEntry::new("round", "Alias of 'circle'."),
            EnumEntry::new("square", "A square."),
        ]))
        .schema(),
);

static CIRCLE_SCHEMA: Schema = ObjectSchema::new(
    "circle",
    &[("radius", false, &PAGE_SCHEMA), SHAPE_TYPE_ENTRY],
)
.schema();

static SQUARE_SCHEMA: Schema = ObjectSchema::new(
    "square",
    &[("side", true, &STRING_SCHEMA), SHAPE_TYPE_ENTRY],
)
.schema();

static SHAPE_SCHEMA: Schema = OneOfSchema::new(
    "a shape",
    &SHAPE_TYPE_ENTRY,
    &[
        ("circle", &CIRCLE_SCHEMA),
        ("round", &CIRCLE_SCHEMA),
        ("square", &SQUARE_SCHEMA),
    ],
)
.schema();

fn compare_error(expected: &[(&str, &str)], err: Error) -> Result<(), Error> {
    let err = match err.downcast_ref::<VerifyError>() {
        Some(err) => err,
        None => bail!("unable to downcast error: {}", err),
    };

    let result = (move || {
        let errors = err.errors();

        if errors.len() != expected.len() {
            bail!(
                "error list has different length: {} != {}",
                expected.len(),
                errors.len()
            );
        }

        for i in 0..expected.len() {
            if expected[i].0 != errors[i].0 {
                bail!(
                    "error {} path differs: '{}' != '{}'",
                    i,
                    expected[i].0,
                    errors[i].0
                );
            }
            if expected[i].1 != errors[i].1.to_string() {
                bail!(
                    "error {} message differs: '{}' != '{}'",
                    i,
                    expected[i].1,
                    errors[i].1
                );
            }
        }

        Ok(())
    })();

    if result.is_err() {
        println!("GOT: {err:?}");
    }

    result
}

fn test_verify(
    schema: &Schema,
    data: &Value,
    expected_errors: &[(&str, &str)],
) -> Result<(), Error> {
    match schema.verify_json(data) {
        Ok(_) => bail!("expected errors, but got Ok()"),
        Err(err) => compare_error(expected_errors, err)?,
    }
    Ok(())
}

#[test]
fn verify_simple_object() -> Result<(), Error> {
    let simple_value = json!({"prop1": 1, "prop4": "abc"});

    test_verify(
        &SIMPLE_OBJECT_SCHEMA,
        &simple_value,
        &[
            ("prop1", "Expected string value."),
            ("prop4", "schema does not allow additional properties"),
            ("prop3", "property is missing and it is not optional"),
        ],
    )?;

    Ok(())
}

#[test]
fn verify_nested_object() -> Result<(), Error> {
    let nested_value = json!({"prop1": 1, "prop4": "abc", "obj1": {}, "arr1": ["abc", 0]});

    test_verify(
        &NESTED_OBJECT_SCHEMA,
        &nested_value,
        &[
            ("arr1/1", "Expected string value."),
            ("obj1/prop1", "property is missing and it is not optional"),
            ("obj1/prop3", "property is missing and it is not optional"),
            ("prop1", "Expected string value."),
            ("prop4", "schema does not allow additional properties"),
        ],
    )?;

    Ok(())
}

#[test]
fn verify_additional_properties() -> Result<(), Error> {
    let value = json!({"regular1": "a", "more": 1});
    OBJECT_WITH_ADDITIONAL
        .verify_json(&value)
        .expect("object with additional properties failed to verify");

    test_verify(
        &OBJECT_WITH_ADDITIONAL,
        &json!({"more": 1}),
        &[("regular1", "property is missing and it is not optional")],
    )?;

    Ok(())
}

#[test]
fn verify_any_of() -> Result<(), Error> {
    STRING_OR_LIST.verify_json(&json!("name"))?;
    STRING_OR_LIST.verify_json(&json!(["address", "city"]))?;

    test_verify(
        &STRING_OR_LIST,
        &json!(["address", 2]),
        &[("1", "Expected string value.")],
    )?;

    let err = STRING_OR_LIST.verify(&json!(true)).unwrap_err();
    assert_eq!(err.len(), 1);
    assert_eq!(err.errors()[0].0, "");
    assert_eq!(
        err.errors()[0].1.to_string(),
        "Expected string or array value."
    );

    Ok(())
}

#[test]
fn verify_array_length() -> Result<(), Error> {
    BOUNDED_ARRAY_SCHEMA.verify_json(&json!([8, 0.5]))?;

    let err = BOUNDED_ARRAY_SCHEMA.verify_json(&json!([8])).unwrap_err();
    assert_eq!(err.to_string(), "array must contain at least 2 elements");

    Ok(())
}

#[test]
fn verify_error_display() {
    let err = SIMPLE_OBJECT_SCHEMA.verify(&json!({"prop1": "a"})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "schema verification failed - 'prop3': property is missing and it is not optional"
    );

    let err = SIMPLE_OBJECT_SCHEMA.verify(&json!({})).unwrap_err();
    assert_eq!(
        err.to_string(),
        "schema verification failed:\n\
         - 'prop1': property is missing and it is not optional\n\
         - 'prop3': property is missing and it is not optional"
    );
}

#[test]
fn verify_sorted_properties() {
    for schema in [&SIMPLE_OBJECT_SCHEMA, &NESTED_OBJECT_SCHEMA, &OBJECT_WITH_ADDITIONAL] {
        assert!(schema.object().unwrap().properties_sorted());
    }
}

#[test]
fn verify_one_of() -> Result<(), Error> {
    SHAPE_SCHEMA.verify_json(&json!({"type": "circle", "radius": 2}))?;
    SHAPE_SCHEMA.verify_json(&json!({"type": "round", "radius": 2}))?;
    SHAPE_SCHEMA.verify_json(&json!({"type": "square"}))?;

    // the variant schema is selected by type, its own properties are checked
    test_verify(
        &SHAPE_SCHEMA,
        &json!({"type": "circle"}),
        &[("radius", "property is missing and it is not optional")],
    )?;
    test_verify(
        &SHAPE_SCHEMA,
        &json!({"type": "square", "side": 4, "radius": 1}),
        &[
            ("radius", "schema does not allow additional properties"),
            ("side", "Expected string value."),
        ],
    )?;

    test_verify(
        &SHAPE_SCHEMA,
        &json!({"radius": 1}),
        &[("type", "property is missing and it is not optional")],
    )?;
    test_verify(
        &SHAPE_SCHEMA,
        &json!({"type": "triangle"}),
        &[("type", "value 'triangle' is not defined in the enumeration.")],
    )?;

    let err = SHAPE_SCHEMA.verify_json(&json!([])).unwrap_err();
    assert_eq!(err.to_string(), "Expected object - got array.");

    Ok(())
}

#[test]
fn verify_whole_number_as_integer() -> Result<(), Error> {
    PAGE_SCHEMA.verify_json(&json!(2))?;
    PAGE_SCHEMA.verify_json(&json!(2.0))?;

    let err = PAGE_SCHEMA.verify_json(&json!(2.5)).unwrap_err();
    assert_eq!(err.to_string(), "Expected integer value.");

    let err = PAGE_SCHEMA.verify_json(&json!(0.0)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "value must have a minimum value of 1 (got 0)"
    );

    assert!(PAGE_SCHEMA.verify_json(&json!(1e300)).is_err());
    assert!(PAGE_SCHEMA.verify_json(&json!(u64::MAX)).is_err());

    Ok(())
}
