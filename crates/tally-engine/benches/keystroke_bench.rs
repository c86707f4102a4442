use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use tally_engine::{NullDisplay, TallyEngine};
use tally_types::{InputEvent, Operator};

/// Generate a keystroke tape cycling through digit entry, the four
/// operators, percentage, sign toggling, and equals.
fn generate_tape(len: usize) -> Vec<InputEvent> {
    let operators = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];
    (0..len)
        .map(|i| match i % 8 {
            0..=2 => InputEvent::Digit(char::from(b'0' + (i % 10) as u8)),
            3 => InputEvent::DecimalPoint,
            4 => InputEvent::Digit(char::from(b'0' + (i % 10) as u8)),
            5 => InputEvent::Operator(operators[(i / 8) % 4]),
            6 => InputEvent::Digit(char::from(b'1' + (i % 9) as u8)),
            _ => {
                if i % 16 == 7 {
                    InputEvent::Equals
                } else {
                    InputEvent::ToggleSign
                }
            }
        })
        .collect()
}

fn bench_keystroke_throughput(c: &mut Criterion) {
    let mut group = c.benchmark_group("keystroke_throughput");

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("handle_events", size), size, |b, &size| {
            let tape = generate_tape(size);
            b.iter(|| {
                let mut engine = TallyEngine::new(Box::new(NullDisplay));
                for event in &tape {
                    engine.handle(*event);
                }
                black_box(engine.entry().len())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_keystroke_throughput);
criterion_main!(benches);
