use bind::{Interp, Value};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn overloaded_interp() -> Interp {
    let mut interp = Interp::new();
    interp
        .create_command("pick")
        .add_function(|x: i64| x)
        .add_function(|x: f64| x)
        .add_function(|x: String| x);
    interp.create_command("single").add_function(|x: i64, y: i64| x + y);
    interp
}

fn bench_dispatch(c: &mut Criterion) {
    let mut interp = overloaded_interp();

    let single = [Value::string("single"), Value::int(1), Value::int(2)];
    c.bench_function("single overload", |b| {
        b.iter(|| interp.eval_objv(black_box(&single)))
    });

    let exact = [Value::string("pick"), Value::int(7)];
    c.bench_function("exact tier", |b| b.iter(|| interp.eval_objv(black_box(&exact))));

    let equivalent = [Value::string("pick"), Value::bignum(7.into())];
    c.bench_function("equivalent tier", |b| {
        b.iter(|| interp.eval_objv(black_box(&equivalent)))
    });

    c.bench_function("string tier", |b| {
        b.iter(|| {
            let objv = [Value::string("pick"), Value::string("hello")];
            interp.eval_objv(black_box(&objv))
        })
    });
}

criterion_group!(benches, bench_dispatch);
criterion_main!(benches);
