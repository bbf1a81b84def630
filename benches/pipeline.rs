use criterion::{Criterion, Throughput};
use serialcalc::calculator::Calculator;
use serialcalc::codec::{decode, encode};
use serialcalc::eval::evaluate_line;
use serialcalc::line::{LineAssembler, LineQueue};
use serialcalc::transport::Transmit;
use std::hint::black_box;

/// Transmitter that discards everything, so only the pipeline is measured.
struct NullUart;

impl Transmit for NullUart {
    type Error = ();
    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        black_box(byte);
        Ok(())
    }
}

pub fn bench_encode(c: &mut Criterion) {
    c.bench_function("encode_u32_max", |b| b.iter(|| encode(black_box(u32::MAX))));
}

pub fn bench_decode(c: &mut Criterion) {
    c.bench_function("decode_10_digits", |b| {
        b.iter(|| decode(black_box(b"4294967295")))
    });
}

pub fn bench_evaluate_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate_line");
    let lines: [&[u8]; 3] = [b"12+7=", b"4294967295/65535\r", b"100000*100000="];
    for line in lines {
        group.throughput(Throughput::Bytes(line.len() as u64));
        group.bench_function(String::from_utf8_lossy(line).trim_end(), |b| {
            b.iter(|| evaluate_line(black_box(line)))
        });
    }
    group.finish();
}

pub fn bench_assemble_and_answer(c: &mut Criterion) {
    let input = b"123456+654321=";
    let mut group = c.benchmark_group("session");
    group.throughput(Throughput::Bytes(input.len() as u64));
    group.bench_function("assemble_and_answer", |b| {
        let mut queue: LineQueue = LineQueue::new();
        let (producer, consumer) = queue.split();
        let mut assembler = LineAssembler::new(producer);
        let mut calculator = Calculator::new(NullUart, consumer);
        let mut echo = NullUart;

        b.iter(|| {
            assembler.on_bytes(black_box(input), &mut echo).unwrap();
            calculator.poll().unwrap()
        })
    });
    group.finish();
}
