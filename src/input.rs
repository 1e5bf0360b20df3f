//! Reader for the batch query format.
//!
//! Each case is `N M`, then `S D`, then `M` edges `U V P`. A case header of
//! `0 0`, or end of input at a case boundary, ends the stream.

use std::fmt::Write as _;
use std::io::{BufRead, Write};
use std::str::FromStr;

use log::{debug, info};

use crate::algorithm::almost_shortest::AlmostShortestPath;
use crate::graph::{DirectedGraph, MutableGraph};
use crate::{Error, Result};

/// One almost-shortest-path query read from the input
#[derive(Debug, Clone)]
pub struct Query {
    pub graph: DirectedGraph<u64>,
    pub source: usize,
    pub destination: usize,
}

/// Splits a buffered reader into whitespace-separated tokens, remembering the
/// line each token came from for error messages.
struct Tokens<R> {
    reader: R,
    line: String,
    line_number: usize,
    pending: Vec<String>,
}

impl<R: BufRead> Tokens<R> {
    fn new(reader: R) -> Self {
        Tokens {
            reader,
            line: String::new(),
            line_number: 0,
            pending: Vec::new(),
        }
    }

    /// Next token, or `None` at end of input
    fn next(&mut self) -> Result<Option<String>> {
        while self.pending.is_empty() {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
            self.pending = self.line.split_whitespace().rev().map(String::from).collect();
        }
        Ok(self.pending.pop())
    }

    /// Next token parsed as `T`; running out of input is an error here
    fn parse_next<T: FromStr>(&mut self, what: &str) -> Result<T> {
        let token = match self.next()? {
            Some(token) => token,
            None => return Err(self.error(format!("unexpected end of input, expected {}", what))),
        };
        token
            .parse()
            .map_err(|_| self.error(format!("expected {}, found {:?}", what, token)))
    }

    fn error(&self, message: String) -> Error {
        Error::Parse {
            line: self.line_number,
            message,
        }
    }
}

/// Iterator over the queries of a batch input
pub struct QueryReader<R> {
    tokens: Tokens<R>,
    finished: bool,
}

impl<R: BufRead> QueryReader<R> {
    pub fn new(reader: R) -> Self {
        QueryReader {
            tokens: Tokens::new(reader),
            finished: false,
        }
    }

    fn read_query(&mut self) -> Result<Option<Query>> {
        let vertex_count: usize = match self.tokens.next()? {
            Some(token) => token.parse().map_err(|_| {
                self.tokens
                    .error(format!("expected vertex count, found {:?}", token))
            })?,
            None => return Ok(None),
        };
        let edge_count: usize = self.tokens.parse_next("edge count")?;
        if vertex_count == 0 && edge_count == 0 {
            return Ok(None);
        }

        let source = self.vertex(vertex_count, "source vertex")?;
        let destination = self.vertex(vertex_count, "destination vertex")?;

        let mut graph = DirectedGraph::with_capacity(vertex_count);
        for _ in 0..edge_count {
            let from = self.vertex(vertex_count, "edge start")?;
            let to = self.vertex(vertex_count, "edge end")?;
            let weight: u64 = self.tokens.parse_next("edge weight")?;
            graph.add_edge(from, to, weight);
        }

        Ok(Some(Query {
            graph,
            source,
            destination,
        }))
    }

    fn vertex(&mut self, vertex_count: usize, what: &str) -> Result<usize> {
        let vertex: usize = self.tokens.parse_next(what)?;
        if vertex >= vertex_count {
            return Err(self.tokens.error(format!(
                "{} {} is outside 0..{}",
                what, vertex, vertex_count
            )));
        }
        Ok(vertex)
    }
}

impl<R: BufRead> Iterator for QueryReader<R> {
    type Item = Result<Query>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        match self.read_query() {
            Ok(Some(query)) => Some(Ok(query)),
            Ok(None) => {
                self.finished = true;
                None
            }
            Err(err) => {
                self.finished = true;
                Some(Err(err))
            }
        }
    }
}

/// Reads every query from `input` and writes one answer per line to `output`.
///
/// Answers are collected and written once the whole input has been read.
/// Returns the number of queries answered.
pub fn solve_stream<R, O>(input: R, mut output: O) -> Result<usize>
where
    R: BufRead,
    O: Write,
{
    let solver = AlmostShortestPath::new();
    let mut answers = String::new();
    let mut cases = 0;

    for query in QueryReader::new(input) {
        let query = query?;
        let result = solver.solve(&query.graph, query.source, query.destination)?;
        debug!(
            "Case {}: {} -> {} answered {}",
            cases + 1,
            query.source,
            query.destination,
            result.answer()
        );
        // Writing into a String cannot fail
        let _ = writeln!(answers, "{}", result.answer());
        cases += 1;
    }

    output.write_all(answers.as_bytes())?;
    output.flush()?;
    info!("Answered {} queries", cases);
    Ok(cases)
}
