use slot_ring::{RingBuffer, RingBufferError};

#[test]
fn test_reject_then_recover_after_read() {
    let mut buf = RingBuffer::new(3).unwrap();
    buf.write(1).unwrap();
    buf.write(2).unwrap();
    buf.write(3).unwrap();
    assert_eq!(
        buf.write(4),
        Err(RingBufferError::BufferOverflow { capacity: 3 })
    );

    assert_eq!(buf.read(), Ok(1));
    buf.write(4).unwrap();

    assert_eq!(buf.read(), Ok(2));
    assert_eq!(buf.read(), Ok(3));
    assert_eq!(buf.read(), Ok(4));
    assert_eq!(buf.read(), Err(RingBufferError::BufferEmpty));
}

#[test]
fn test_force_write_evicts_oldest() {
    let mut buf = RingBuffer::new(2).unwrap();
    buf.write(1).unwrap();
    buf.write(2).unwrap();
    assert!(buf.is_full());

    buf.force_write(3);
    assert!(buf.is_full());
    assert_eq!(buf.iter().copied().collect::<Vec<_>>(), vec![2, 3]);

    assert_eq!(buf.read(), Ok(2));
    assert_eq!(buf.read(), Ok(3));
    assert!(buf.is_empty());
}

#[test]
fn test_clear_at_every_fill_level() {
    for fill in 0..=4 {
        let mut buf = RingBuffer::new(4).unwrap();
        for v in 0..fill {
            buf.write(v).unwrap();
        }
        buf.clear();
        assert!(buf.is_empty(), "fill level {fill}");

        buf.write(42).unwrap();
        assert_eq!(buf.read(), Ok(42));
    }
}

#[test]
fn test_non_copy_values_move_out() {
    let mut buf = RingBuffer::new(2).unwrap();
    buf.write(String::from("first")).unwrap();
    buf.force_write(String::from("second"));
    buf.force_write(String::from("third"));

    assert_eq!(buf.peek().map(String::as_str), Some("second"));
    let out: Vec<String> = buf.into_iter().collect();
    assert_eq!(out, ["second", "third"]);
}

#[test]
fn test_shared_behind_mutex() {
    use std::sync::{Arc, Mutex};
    use std::thread;

    let buf = Arc::new(Mutex::new(RingBuffer::new(64).unwrap()));
    let producers: Vec<_> = (0..4)
        .map(|p| {
            let buf = Arc::clone(&buf);
            thread::spawn(move || {
                for i in 0..16 {
                    buf.lock().unwrap().write(p * 100 + i).unwrap();
                }
            })
        })
        .collect();
    for handle in producers {
        handle.join().unwrap();
    }

    let mut buf = buf.lock().unwrap();
    assert!(buf.is_full());
    let mut values: Vec<_> = buf.drain().collect();
    values.sort_unstable();
    assert_eq!(values.len(), 64);
    assert_eq!(values[0], 0);
    assert_eq!(values[63], 315);
}
