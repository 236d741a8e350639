use std::sync::mpsc::channel;
use std::sync::Arc;

use threadpool::ThreadPool;

use crate::huffman::{CodingError, HuffmanCoder};

type LineOperation = fn(&HuffmanCoder<char>, &str) -> Result<String, CodingError>;

type LineResult = (usize, Result<String, CodingError>);

/// Outcome of one line, tagged with its 1-based line number.
pub type LineOutcome = (usize, Option<Result<String, CodingError>>);

/// Encodes or decodes independent lines on a thread pool.
///
/// Results come back in input order. A line whose worker died before
/// sending is reported as `None`.
pub struct LineCoder<'a> {
    threadpool: &'a ThreadPool,
    coder: Arc<HuffmanCoder<char>>,
}

impl<'a> LineCoder<'a> {
    pub fn new(threadpool: &'a ThreadPool, coder: Arc<HuffmanCoder<char>>) -> Self {
        LineCoder { threadpool, coder }
    }

    pub fn encode_lines(&self, lines: &[&str]) -> Vec<LineOutcome> {
        self.process(lines, HuffmanCoder::<char>::encode_text)
    }

    pub fn decode_lines(&self, lines: &[&str]) -> Vec<LineOutcome> {
        self.process(lines, HuffmanCoder::<char>::decode_text)
    }

    fn process(&self, lines: &[&str], operation: LineOperation) -> Vec<LineOutcome> {
        let (sender, receiver) = channel::<LineResult>();
        for (index, line) in lines.iter().enumerate() {
            let sender = sender.clone();
            let coder = Arc::clone(&self.coder);
            let line = line.to_string();
            self.threadpool.execute(move || {
                let result = operation(&coder, &line);
                log::trace!("Line {} processed", index + 1);
                // the receiver only hangs up once every line is collected
                let _ = sender.send((index + 1, result));
            });
        }
        drop(sender);

        let mut results: Vec<Option<Result<String, CodingError>>> = vec![None; lines.len()];
        for (line_number, result) in receiver.iter() {
            results[line_number - 1] = Some(result);
        }
        results
            .into_iter()
            .enumerate()
            .map(|(index, result)| (index + 1, result))
            .collect()
    }
}

#[cfg(test)]
mod test {
    use std::sync::Arc;

    use threadpool::ThreadPool;

    use super::LineCoder;
    use crate::huffman::{CodingError, HuffmanCoder};

    fn create_line_coder<'a>(pool: &'a ThreadPool, text: &str) -> LineCoder<'a> {
        let coder = HuffmanCoder::from_text(text).unwrap();
        LineCoder::new(pool, Arc::new(coder))
    }

    #[test]
    fn test_results_keep_line_order() {
        let pool = ThreadPool::new(4);
        let text = "first line\nsecond\nthird one here\n\nlast";
        let line_coder = create_line_coder(&pool, text);
        let lines: Vec<&str> = text.split('\n').collect();
        let encoded: Vec<String> = line_coder
            .encode_lines(&lines)
            .into_iter()
            .map(|(_, result)| result.unwrap().unwrap())
            .collect();
        let encoded_refs: Vec<&str> = encoded.iter().map(String::as_str).collect();
        let decoded: Vec<String> = line_coder
            .decode_lines(&encoded_refs)
            .into_iter()
            .map(|(_, result)| result.unwrap().unwrap())
            .collect();
        assert_eq!(decoded, lines);
    }

    #[test]
    fn test_failures_are_reported_per_line() {
        let pool = ThreadPool::new(2);
        let line_coder = create_line_coder(&pool, "abc");
        let results = line_coder.encode_lines(&["ab", "xa", "c"]);
        assert_eq!(results[0].0, 1);
        assert!(matches!(results[0].1, Some(Ok(_))));
        assert_eq!(
            results[1],
            (
                2,
                Some(Err(CodingError::UnknownSymbol {
                    symbol: "'x'".to_string(),
                    position: 0
                }))
            )
        );
        assert!(matches!(results[2].1, Some(Ok(_))));
    }

    #[test]
    fn test_no_lines() {
        let pool = ThreadPool::new(1);
        let line_coder = create_line_coder(&pool, "abc");
        assert!(line_coder.encode_lines(&[]).is_empty());
    }
}
