use bind::memory::obj_type;
use bind::{native_enum, Code, Interp, NativeEnum, Value};

#[derive(Debug, Clone, Copy, PartialEq)]
enum Color {
    Red,
    Green,
    Blue = 10,
}

native_enum!(Color = "color" { Red, Green, Blue });

fn color_interp() -> Interp {
    let mut interp = Interp::new();
    let cmd = interp.create_command("color");
    cmd.add_enum::<Color>();
    cmd.add_subcommand("check")
        .add_function(|_: String| "string")
        .add_function(|_: Color| "enum");
    interp
}

#[test]
fn enum_from_name_and_from_raw() {
    let mut interp = color_interp();

    assert_eq!(interp.eval_words("color Green"), Code::Ok);
    assert_eq!(interp.result().as_str(), "Green");
    assert!(interp.result().has_type(Color::descriptor()));

    assert_eq!(interp.eval_words("color 10"), Code::Ok);
    assert_eq!(interp.result().as_str(), "Blue");
}

#[test]
fn invalid_enum_input() {
    let mut interp = color_interp();
    assert_eq!(interp.eval_words("color Purple"), Code::Error);
    assert_eq!(interp.result().as_str(), "Invalid input for enum: Purple");

    assert_eq!(interp.eval_objv(&[Value::string("color"), Value::int(3)]), Code::Error);
    assert_eq!(interp.result().as_str(), "Invalid input for enum: 3");
}

#[test]
fn enum_typed_value_picks_the_enum_overload() {
    let mut interp = color_interp();
    interp.eval_words("color Red");
    let red = interp.result().clone();

    interp.eval_objv(&[Value::string("color"), Value::string("check"), red]);
    assert_eq!(interp.result().as_str(), "enum");

    interp.eval_words("color check Red");
    assert_eq!(interp.result().as_str(), "string");
}

#[test]
fn enum_descriptor_is_not_a_builtin() {
    let d = Color::descriptor();
    assert_eq!(d.name(), "color");
    assert_ne!(d, &obj_type::STRING);
    assert!(std::ptr::eq(d, Color::descriptor()));
}

#[test]
fn enum_casts() {
    assert_eq!(bind::try_cast::<Color>(&Value::string("Blue")), Some(Color::Blue));
    assert_eq!(bind::try_cast::<Color>(&Value::string("1")), Some(Color::Green));
    assert_eq!(bind::try_cast::<Color>(&Value::int(10)), Some(Color::Blue));
    assert_eq!(bind::try_cast::<Color>(&Value::double(1.0)), None);
    assert_eq!(Color::Blue.to_raw(), 10);
    assert_eq!(Color::from_raw(2), None);
}
