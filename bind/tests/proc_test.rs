use bind::{Code, Error, Interp, Proc, Value};

fn callback_interp() -> Interp {
    let mut interp = Interp::new();
    interp.create_command("add").add_function(|x: i64, y: i64| x + y);
    interp
        .create_command("call-callback")
        .add_function_with_interp(|ip: &mut Interp, cmd: Proc, x: i64, y: i64| {
            cmd.call(ip, [x, y])
        });
    interp
}

#[test]
fn callback_runs_the_named_command() {
    let mut interp = callback_interp();
    assert_eq!(interp.eval_words("call-callback add 2 3"), Code::Ok);
    assert_eq!(interp.result().get_int(), Some(5));
}

#[test]
fn callback_errors_propagate() {
    let mut interp = callback_interp();
    assert_eq!(interp.eval_words("call-callback missing 2 3"), Code::Error);
    let err = interp.throw_result().unwrap_err();
    assert!(matches!(*err, Error::UnknownCommand(ref name) if name == "missing"));
}

#[test]
fn proc_is_callable_from_native_code() {
    let mut interp = callback_interp();
    let add = Proc::new("add");
    let sum = add.call(&mut interp, [Value::int(40), Value::string("2")]).unwrap();
    assert_eq!(sum.get_int(), Some(42));
}
