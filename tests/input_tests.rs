use almost_sssp::graph::Graph;
use almost_sssp::input::{solve_stream, QueryReader};
use almost_sssp::Error;
use std::io::Cursor;

fn run(input: &str) -> Result<String, Error> {
    let mut output = Vec::new();
    solve_stream(Cursor::new(input), &mut output)?;
    Ok(String::from_utf8(output).unwrap())
}

const SAMPLE: &str = "\
7 9
0 6
0 1 1
0 2 1
0 3 2
0 4 3
1 5 2
2 6 4
3 6 2
4 6 4
5 6 1
4 6
0 2
0 1 1
1 2 1
1 3 1
3 2 1
2 0 3
3 0 2
6 8
0 1
0 1 1
0 2 2
0 3 3
2 5 3
3 4 2
4 1 1
5 1 1
3 0 1
0 0
";

#[test]
fn test_sample_input() {
    assert_eq!(run(SAMPLE).unwrap(), "5\n-1\n6\n");
}

#[test]
fn test_scenarios_in_one_stream() {
    let input = "4 5\n0 3\n0 1 1\n1 3 1\n0 2 1\n2 3 1\n0 3 5\n2 1\n0 1\n0 1 3\n3 1\n0 2\n0 1 4\n0 0\n";
    assert_eq!(run(input).unwrap(), "5\n-1\n-1\n");
}

#[test]
fn test_stream_without_sentinel() {
    let input = "2 1\n0 1\n0 1 3\n";
    assert_eq!(run(input).unwrap(), "-1\n");
}

#[test]
fn test_blank_lines_and_spacing() {
    let input = "\n\n  4 5 \n0   3\n\n0 1 1\n1 3 1\n0 2 1\n2 3 1\n0 3 5\n\n0 0\n";
    assert_eq!(run(input).unwrap(), "5\n");
}

#[test]
fn test_sentinel_stops_reading() {
    let input = "0 0\n2 1\n0 1\n0 1 3\n";
    assert_eq!(run(input).unwrap(), "");
}

#[test]
fn test_reader_yields_queries() {
    let input = "3 2\n0 2\n0 1 4\n1 2 5\n0 0\n";
    let queries: Vec<_> = QueryReader::new(Cursor::new(input))
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(queries.len(), 1);
    assert_eq!(queries[0].source, 0);
    assert_eq!(queries[0].destination, 2);
    assert_eq!(queries[0].graph.vertex_count(), 3);
    assert_eq!(queries[0].graph.edge_count(), 2);
    assert_eq!(queries[0].graph.get_edge_weight(1, 2), Some(5));
}

#[test]
fn test_truncated_edge_list() {
    let input = "3 2\n0 2\n0 1 4\n";
    match run(input) {
        Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_non_numeric_field() {
    let input = "3 1\n0 x\n";
    match run(input) {
        Err(Error::Parse { line, message }) => {
            assert_eq!(line, 2);
            assert!(message.contains("destination vertex"));
        }
        other => panic!("expected parse error, got {:?}", other),
    }
}

#[test]
fn test_vertex_out_of_range() {
    let input = "2 1\n0 1\n0 5 1\n0 0\n";
    assert!(matches!(run(input), Err(Error::Parse { line: 3, .. })));
}

#[test]
fn test_negative_weight_rejected() {
    let input = "2 1\n0 1\n0 1 -4\n0 0\n";
    assert!(matches!(run(input), Err(Error::Parse { line: 3, .. })));
}

#[test]
fn test_reader_stops_after_error() {
    let mut reader = QueryReader::new(Cursor::new("2 1\n0 9\n"));
    assert!(matches!(reader.next(), Some(Err(_))));
    assert!(reader.next().is_none());
}
