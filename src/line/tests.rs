use super::*;
use crate::transport::Error;

struct MockUart {
    sent: heapless::Vec<u8, 128>,
    fail: bool,
}

impl MockUart {
    fn new() -> Self {
        Self {
            sent: heapless::Vec::new(),
            fail: false,
        }
    }
}

impl Transmit for MockUart {
    type Error = Error;

    fn send_byte(&mut self, byte: u8) -> Result<(), Self::Error> {
        if self.fail {
            return Err(Error::BufferFull);
        }
        self.sent.push(byte).map_err(|_| Error::BufferFull)
    }
}

#[test]
fn test_alphabet() {
    for byte in b"0123456789+-*/=\r".iter().copied() {
        assert!(is_accepted(byte), "{byte:#x} should be accepted");
    }
    for byte in b" a\n.%(x\t".iter().copied() {
        assert!(!is_accepted(byte), "{byte:#x} should be rejected");
    }
    assert!(!is_accepted(0x00));
    assert!(!is_accepted(0xFF));
}

#[test]
fn test_pending_tracks_partial_line() {
    let mut queue: LineQueue = LineQueue::new();
    let (producer, consumer) = queue.split();
    let mut assembler = LineAssembler::new(producer);
    let mut uart = MockUart::new();

    assembler.on_bytes(b"12+", &mut uart).unwrap();
    assert_eq!(assembler.pending(), b"12+");
    assert_eq!(assembler.pending_len(), 3);
    assert!(!consumer.ready());

    assembler.reset();
    assert_eq!(assembler.pending_len(), 0);
}

#[test]
fn test_terminator_moves_line_out() {
    let mut queue: LineQueue = LineQueue::new();
    let (producer, mut consumer) = queue.split();
    let mut assembler = LineAssembler::new(producer);
    let mut uart = MockUart::new();

    assembler.on_bytes(b"3*4\r", &mut uart).unwrap();
    assert_eq!(assembler.pending_len(), 0);
    assert_eq!(consumer.dequeue().unwrap().as_slice(), b"3*4\r");
}

#[test]
fn test_echo_failure_still_hands_off_line() {
    let mut queue: LineQueue = LineQueue::new();
    let (producer, mut consumer) = queue.split();
    let mut assembler = LineAssembler::new(producer);
    let mut uart = MockUart::new();

    assembler.on_bytes(b"1+1", &mut uart).unwrap();
    uart.fail = true;
    assert_eq!(assembler.on_byte(b'=', &mut uart), Err(Error::BufferFull));
    assert_eq!(consumer.dequeue().unwrap().as_slice(), b"1+1=");
}

#[test]
fn test_echo_disabled() {
    let mut queue: LineQueue = LineQueue::new();
    let (producer, _consumer) = queue.split();
    let config = Config {
        echo: false,
        ..Config::default()
    };
    let mut assembler = LineAssembler::with_config(producer, &config);
    let mut uart = MockUart::new();

    assembler.on_bytes(b"1+1=", &mut uart).unwrap();
    assert!(uart.sent.is_empty());

    assembler.set_echo(true);
    assembler.on_bytes(b"2", &mut uart).unwrap();
    assert_eq!(uart.sent.as_slice(), b"2");
}
