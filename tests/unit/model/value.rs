use super::*;

#[test]
fn number_projection() {
    assert_eq!(Value::text("100").as_number(), 100);
    assert_eq!(Value::text("-25").as_number(), -25);
    assert_eq!(Value::text("abc").as_number(), 0);
    assert_eq!(Value::text("").as_number(), 0);
}

#[test]
fn boolean_projection() {
    assert!(Value::text("TRUE").as_boolean());
    assert!(Value::text("true").as_boolean());
    assert!(!Value::text("FALSE").as_boolean());
    assert!(!Value::text("").as_boolean());
    assert!(!Value::text("maybe").as_boolean());
}

#[test]
fn color_projection_defaults_missing_channels() {
    let v = Value {
        red: Field::Present("3".into()),
        blue: Field::Present("5".into()),
        green: Field::Empty,
        alpha: Field::Present("x".into()),
        ..Value::default()
    };
    assert_eq!(
        v.as_color(),
        ColorValue {
            red: 3,
            blue: 5,
            green: 0,
            alpha: 0
        }
    );
}

#[test]
fn projections_are_independent() {
    let v = Value {
        data: "42".into(),
        horiz: Field::Present("3".into()),
        vert: Field::Present("5".into()),
        ..Value::default()
    };
    assert_eq!(v.as_number(), 42);
    assert_eq!(v.as_position(), PositionValue { horiz: 3, vert: 5 });
    assert_eq!(v.as_color(), ColorValue::default());
    assert!(!v.as_boolean());
}

#[test]
fn constructors_round_trip_through_projections() {
    let c = ColorValue {
        red: 1,
        blue: 2,
        green: 3,
        alpha: 4,
    };
    assert_eq!(Value::color(c).as_color(), c);
    let p = PositionValue {
        horiz: -10,
        vert: 20,
    };
    assert_eq!(Value::position(p).as_position(), p);
}
