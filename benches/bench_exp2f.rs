use criterion::Criterion;

use bench_util::{bench_inputs_f32, configure_criterion, gen_range_f32, glibc_exp2f};

fn bench_exp2f(c: &mut Criterion) {
    let inputs = [-140.0, -10.0, -0.5, 0.0, 0.003, 0.5, 1.0, 10.5, 127.0];
    let common = gen_range_f32(1024, -125.0, 127.0, 0x2b3c);

    let mut group = c.benchmark_group("exp2f/smoke");
    bench_inputs_f32(&mut group, &inputs, corelibm::exp2f, glibc_exp2f());
    group.finish();

    let mut group = c.benchmark_group("exp2f/common");
    bench_inputs_f32(&mut group, &common, corelibm::exp2f, glibc_exp2f());
    group.finish();
}

fn main() {
    let mut c = configure_criterion();
    bench_exp2f(&mut c);
    c.final_summary();
}
