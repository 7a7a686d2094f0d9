//! Benchmarks for selkit command throughput.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ropey::Rope;
use selkit::{
    Engine, LineBuffer,
    types::{Command, Position, Selection},
};
use std::time::Duration;

/// Rope-based buffer for benchmarking
struct BenchBuffer {
    rope: Rope,
}

impl BenchBuffer {
    fn new(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }
}

impl LineBuffer for BenchBuffer {
    fn line_count(&self) -> u32 {
        self.rope.len_lines() as u32
    }

    fn line(&self, line: u32) -> Option<String> {
        if line >= self.line_count() {
            return None;
        }
        let text = self.rope.line(line as usize).to_string();
        Some(text.trim_end_matches(['\n', '\r']).to_string())
    }

    fn insert_line(&mut self, at: u32, text: String) {
        if at < self.line_count() {
            let idx = self.rope.line_to_char(at as usize);
            self.rope.insert(idx, &format!("{text}\n"));
        } else {
            let end = self.rope.len_chars();
            self.rope.insert(end, &format!("\n{text}"));
        }
    }
}

fn generate_sample_text(lines: usize) -> String {
    let mut text = String::new();
    for i in 0..lines {
        text.push_str(&format!(
            "    This is line {} with some sample_text for \u{1F600} selection commands.\n",
            i + 1
        ));
        if i % 10 == 0 {
            text.push_str("\n  \n"); // Blank runs for the line scanner
        }
    }
    text
}

fn benchmark_word_selection(c: &mut Criterion) {
    let mut buffer = BenchBuffer::new(&generate_sample_text(1000));
    let engine = Engine::new();

    c.bench_function("select next word across a line", |b| {
        b.iter(|| {
            let mut sel = Selection::caret(Position::new(500, 0));
            for _ in 0..12 {
                let _ = engine.execute(Command::SelectNextWord, &mut buffer, &mut sel);
            }
            black_box(sel);
        });
    });

    c.bench_function("select previous word across lines", |b| {
        b.iter(|| {
            let mut sel = Selection::caret(Position::new(800, 0));
            for _ in 0..12 {
                let _ = engine.execute(Command::SelectPreviousWord, &mut buffer, &mut sel);
            }
            black_box(sel);
        });
    });

    c.bench_function("select word above/below", |b| {
        b.iter(|| {
            let mut sel = Selection::on_line(400, 10, 14);
            for cmd in [Command::SelectWordAbove, Command::SelectWordBelow] {
                let _ = engine.execute(black_box(cmd), &mut buffer, &mut sel);
            }
            black_box(sel);
        });
    });
}

fn benchmark_line_commands(c: &mut Criterion) {
    let text = generate_sample_text(1000);
    let engine = Engine::new();

    c.bench_function("select line contents", |b| {
        let mut buffer = BenchBuffer::new(&text);
        b.iter(|| {
            let mut sel = Selection::new(Position::new(100, 3), Position::new(140, 2));
            let _ = engine.execute(Command::SelectLineContents, &mut buffer, &mut sel);
            black_box(sel);
        });
    });

    c.bench_function("duplicate and open lines", |b| {
        b.iter(|| {
            let mut buffer = BenchBuffer::new(&text);
            let mut sel = Selection::new(Position::new(10, 0), Position::new(20, 0));
            let _ = engine.execute(Command::DuplicateLine, &mut buffer, &mut sel);
            let _ = engine.execute(Command::MoveToEolAndInsertLf, &mut buffer, &mut sel);
            black_box(buffer.line_count());
        });
    });
}

fn benchmark_dispatch(c: &mut Criterion) {
    let engine = Engine::new();
    let mut buffer: Vec<String> = generate_sample_text(200)
        .lines()
        .map(str::to_string)
        .collect();

    c.bench_function("perform by identifier", |b| {
        b.iter(|| {
            let mut sels = vec![Selection::caret(Position::new(50, 8))];
            engine.perform(
                black_box("com.example.Marvin.selectCurrentWord"),
                &mut buffer,
                &mut sels,
                || {},
            );
            black_box(sels);
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(10))
        .sample_size(100);
    targets = benchmark_word_selection,
              benchmark_line_commands,
              benchmark_dispatch
}
criterion_main!(benches);
