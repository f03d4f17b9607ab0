use pretty_assertions::assert_eq;
use std::io::{self, Write};
use trace_tabulate::aggregator::{BlockTable, BucketRow, PairBlock};
use trace_tabulate::output::{header_line, row_line, write_block_table, write_pair_rows};
use trace_tabulate::utils::OutputError;

/// Sink that records flushes and can be told to fail
#[derive(Default)]
struct RecordingSink {
    data: Vec<u8>,
    flushes: usize,
    fail_flush: bool,
}

impl Write for RecordingSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.data.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if self.fail_flush {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"));
        }
        self.flushes += 1;
        Ok(())
    }
}

fn sample_table() -> BlockTable {
    BlockTable {
        timestamp: "2024-01-01 12:00:00".to_string(),
        labels: vec!["cpu".to_string(), "mem".to_string()],
        rows: vec![
            BucketRow {
                bucket: 5,
                values: vec![10, 5],
            },
            BucketRow {
                bucket: 6,
                values: vec![20, 0],
            },
        ],
    }
}

#[test]
fn test_header_line() {
    let labels = vec!["cpu".to_string(), "mem".to_string()];
    assert_eq!(header_line(&labels), "time,bucket,cpu,mem");
}

#[test]
fn test_row_line() {
    let row = BucketRow {
        bucket: 32,
        values: vec![1, 0, 7],
    };
    assert_eq!(row_line("2024-01-01 12:00:00", &row), "2024-01-01 12:00:00,32,1,0,7");
}

#[test]
fn test_write_block_table() {
    let mut sink = RecordingSink::default();
    write_block_table(&sample_table(), &mut sink).unwrap();

    assert_eq!(
        String::from_utf8(sink.data).unwrap(),
        "time,bucket,cpu,mem\n\
         2024-01-01 12:00:00,5,10,5\n\
         2024-01-01 12:00:00,6,20,0\n\
         \n"
    );
    assert_eq!(sink.flushes, 1);
}

#[test]
fn test_write_pair_rows_terminated() {
    let mut block = PairBlock::new();
    block.push("a", "1");
    block.push("c", "3");

    let mut sink = RecordingSink::default();
    write_pair_rows(&block, &mut sink, true).unwrap();

    assert_eq!(String::from_utf8(sink.data).unwrap(), "a,c\n1,3\n\n");
    assert_eq!(sink.flushes, 1);
}

#[test]
fn test_write_pair_rows_unterminated() {
    let mut block = PairBlock::new();
    block.push("a", "1");

    let mut sink = RecordingSink::default();
    write_pair_rows(&block, &mut sink, false).unwrap();

    assert_eq!(String::from_utf8(sink.data).unwrap(), "a\n1\n");
}

#[test]
fn test_write_empty_pair_rows() {
    let mut sink = RecordingSink::default();
    write_pair_rows(&PairBlock::new(), &mut sink, true).unwrap();

    assert_eq!(String::from_utf8(sink.data).unwrap(), "\n\n\n");
}

#[test]
fn test_flush_failure_is_reported() {
    let mut sink = RecordingSink {
        fail_flush: true,
        ..Default::default()
    };

    let result = write_block_table(&sample_table(), &mut sink);
    assert!(matches!(result, Err(OutputError::FlushFailed(_))));
}
