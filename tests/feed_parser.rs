// tests/feed_parser.rs
//
// Line/field splitting without any column semantics.
//
use shop_feed::csv::{parse_rows, rows_to_string, split_header, split_line, SplitMode};

fn strs(row: &[String]) -> Vec<&str> {
    row.iter().map(String::as_str).collect()
}

#[test]
fn quoted_field_keeps_embedded_comma() {
    let row = split_line(r#"2,ÁO,FEMALE,S,https://x/,AVAILABLE,"độ mới 98%, như mới""#, SplitMode::Quoted);
    assert_eq!(row.len(), 7);
    assert_eq!(row[6], "độ mới 98%, như mới");
}

#[test]
fn doubled_quote_is_one_literal_quote() {
    let row = split_line(r#"a,"say ""hi""",b"#, SplitMode::Quoted);
    assert_eq!(strs(&row), vec!["a", r#"say "hi""#, "b"]);
}

#[test]
fn fields_are_trimmed_after_unquoting() {
    let row = split_line(r#"  1 , " padded " ,x  "#, SplitMode::Quoted);
    assert_eq!(strs(&row), vec!["1", "padded", "x"]);
}

#[test]
fn simple_mode_splits_every_comma() {
    let row = split_line(r#"1,"a, b",c"#, SplitMode::Simple);
    assert_eq!(strs(&row), vec!["1", "\"a", "b\"", "c"]);
}

#[test]
fn empty_fields_are_kept() {
    let row = split_line("1,,3,", SplitMode::Quoted);
    assert_eq!(strs(&row), vec!["1", "", "3", ""]);
}

#[test]
fn unterminated_quote_runs_to_end_of_line() {
    let row = split_line(r#"1,"open, never closed"#, SplitMode::Quoted);
    assert_eq!(strs(&row), vec!["1", "open, never closed"]);
}

#[test]
fn blank_lines_and_crlf_produce_no_rows() {
    let text = "H1,H2\r\n\r\n1,2\r\n   \n3,4\n\n";
    let rows = parse_rows(text, SplitMode::Quoted);
    assert_eq!(rows.len(), 3);
    assert_eq!(strs(&rows[0]), vec!["H1", "H2"]);
    assert_eq!(strs(&rows[1]), vec!["1", "2"]);
    assert_eq!(strs(&rows[2]), vec!["3", "4"]);
}

#[test]
fn ragged_rows_are_not_padded() {
    let rows = parse_rows("a,b,c\n1\n1,2,3,4\n", SplitMode::Quoted);
    assert_eq!(rows[1].len(), 1);
    assert_eq!(rows[2].len(), 4);
}

#[test]
fn header_split_off_first_row() {
    let rows = parse_rows("\n\nSTT,URL\n1,u\n", SplitMode::Quoted);
    let (header, data) = split_header(&rows).unwrap();
    assert_eq!(strs(header), vec!["STT", "URL"]);
    assert_eq!(data.len(), 1);

    assert!(split_header(&parse_rows("\n \n", SplitMode::Quoted)).is_none());
}

#[test]
fn written_rows_parse_back() {
    let header = vec!["STT".to_string(), "NOTES".to_string()];
    let rows = vec![
        vec!["1".to_string(), "plain".to_string()],
        vec!["2".to_string(), r#"comma, and "quotes""#.to_string()],
    ];
    let text = rows_to_string(Some(header.as_slice()), &rows, ',');
    let parsed = parse_rows(&text, SplitMode::Quoted);
    assert_eq!(parsed[0], header);
    assert_eq!(&parsed[1..], &rows[..]);
}

#[test]
fn parsing_is_deterministic() {
    let text = "STT,NOTES\n1,\"a,b\"\n2,c\n";
    assert_eq!(parse_rows(text, SplitMode::Quoted), parse_rows(text, SplitMode::Quoted));
}
