// tests/run_e2e.rs
//
// Whole-batch runs against temp directories.
//
use std::fs;
use std::path::Path;

use race_results::config::RunOptions;
use race_results::progress::{ConsoleProgress, Progress};
use race_results::{run, Error};
use tempfile::tempdir;

const HEADER: &str = "bib,name,sex,age,location,net,clock,pace,event";

fn page(rows: &[[&str; 9]]) -> String {
    let mut body = String::new();
    for r in rows {
        body.push_str("<tr>");
        for c in r {
            body.push_str(&format!("<td>{c}</td>"));
        }
        body.push_str("</tr>\n");
    }
    format!(
        "<html><head><title>Results</title></head><body>\n\
         <table id=\"nav\"><tbody><tr><td>Overall</td><td>Gender</td></tr></tbody></table>\n\
         <table id=\"results\"><thead><tr><th>Bib</th></tr></thead><tbody>\n{body}</tbody></table>\n\
         </body></html>"
    )
}

fn write(dir: &Path, name: &str, contents: &str) {
    fs::write(dir.join(name), contents).unwrap();
}

fn lines(path: &Path) -> Vec<String> {
    fs::read_to_string(path).unwrap().lines().map(String::from).collect()
}

const JANE: [&str; 9] = ["1", "Jane Doe", "F", "30", "NYC", "3:45:00", "3:46:10", "8:35", "Marathon"];
const JOHN: [&str; 9] = ["2", "<img src=\"us.png\">John Smith", "M", "41", "Boston, MA", "3:50:02", "3:52:40", "8:47", "Marathon"];
const ANN: [&str; 9] = ["3", "Ann Lee", "F", "25", "", "1:45:00", "1:46:00", "8:01", "Half"];

#[test]
fn single_page_single_row() {
    let dir = tempdir().unwrap();
    write(dir.path(), "race.html", &page(&[JANE]));
    let opts = RunOptions::in_dir(dir.path());

    let summary = run(&opts, None).unwrap();
    assert_eq!(summary.files_processed, 1);
    assert_eq!(summary.records_written, 1);
    assert_eq!(
        lines(&opts.out_path),
        vec![HEADER, "1,Jane Doe,F,30,NYC,3:45:00,3:46:10,8:35,Marathon"]
    );
}

#[test]
fn no_pages_gives_header_only() {
    let dir = tempdir().unwrap();
    write(dir.path(), "notes.txt", "not html");
    let opts = RunOptions::in_dir(dir.path());

    let summary = run(&opts, None).unwrap();
    assert_eq!(summary.records_written, 0);
    assert_eq!(fs::read_to_string(&opts.out_path).unwrap(), format!("{HEADER}\n"));
}

#[test]
fn record_count_is_sum_of_rows_over_pages() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.html", &page(&[JANE, JOHN]));
    write(dir.path(), "b.html", &page(&[ANN]));
    write(dir.path(), "c.html", &page(&[]));
    let opts = RunOptions::in_dir(dir.path());

    let summary = run(&opts, None).unwrap();
    assert_eq!(summary.files_processed, 3);
    assert_eq!(summary.records_written, 3);

    let out = lines(&opts.out_path);
    assert_eq!(out.len(), 1 + 3);
    assert_eq!(out[0], HEADER);
    // icon skipped, comma-bearing location quoted
    assert!(out.contains(&"2,John Smith,M,41,\"Boston, MA\",3:50:02,3:52:40,8:47,Marathon".to_string()));
    assert!(out.contains(&"3,Ann Lee,F,25,,1:45:00,1:46:00,8:01,Half".to_string()));
}

#[test]
fn rerun_is_byte_identical() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.html", &page(&[JANE, JOHN]));
    write(dir.path(), "b.html", &page(&[ANN]));
    let opts = RunOptions::in_dir(dir.path());

    run(&opts, None).unwrap();
    let first = fs::read(&opts.out_path).unwrap();
    run(&opts, None).unwrap();
    let second = fs::read(&opts.out_path).unwrap();
    assert_eq!(first, second);
}

#[test]
fn existing_output_is_overwritten() {
    let dir = tempdir().unwrap();
    let opts = RunOptions::in_dir(dir.path());
    fs::write(&opts.out_path, "stale\nstale\nstale\n").unwrap();

    run(&opts, None).unwrap();
    assert_eq!(lines(&opts.out_path), vec![HEADER]);
}

#[test]
fn output_can_live_elsewhere() {
    let inputs = tempdir().unwrap();
    let outputs = tempdir().unwrap();
    write(inputs.path(), "race.html", &page(&[JANE]));
    let out_path = outputs.path().join("nested").join("all.csv");

    let opts = RunOptions::new(inputs.path(), &out_path);
    run(&opts, None).unwrap();
    assert_eq!(lines(&out_path).len(), 2);
    assert!(!inputs.path().join("fullResults.csv").exists());
}

#[test]
fn malformed_markup_is_absorbed() {
    let dir = tempdir().unwrap();
    let broken = "<table><tbody><tr><td>nav</table>\
                  <table><tbody><tr><td>7<td>Kim<td>F<td>33<td>LA<td>4:01:00<td>4:02:00<td>9:11<td>Marathon\
                  <tr><td>8<td>Lou<td>M<td>35<td>SF<td>4:05:00<td>4:06:00<td>9:20<td>Marathon</p></span>";
    write(dir.path(), "broken.html", broken);
    let opts = RunOptions::in_dir(dir.path());

    let summary = run(&opts, None).unwrap();
    assert_eq!(summary.records_written, 2);
    let out = lines(&opts.out_path);
    assert_eq!(out[1], "7,Kim,F,33,LA,4:01:00,4:02:00,9:11,Marathon");
    assert_eq!(out[2], "8,Lou,M,35,SF,4:05:00,4:06:00,9:20,Marathon");
}

#[test]
fn missing_results_table_aborts_the_run() {
    let dir = tempdir().unwrap();
    write(dir.path(), "nav_only.html", "<table><tbody><tr><td>only one</td></tr></tbody></table>");
    let opts = RunOptions::in_dir(dir.path());

    match run(&opts, None) {
        Err(Error::MissingTableBody { path, found }) => {
            assert_eq!(found, 1);
            assert!(path.ends_with("nav_only.html"));
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert_eq!(lines(&opts.out_path), vec![HEADER]);
}

#[test]
fn short_row_aborts_but_keeps_earlier_records() {
    let dir = tempdir().unwrap();
    let short_row = "<tr><td>9</td><td>Max</td><td>M</td></tr>";
    let doc = page(&[JANE, ANN]).replace("</tbody></table>\n</body>", &format!("{short_row}</tbody></table>\n</body>"));
    write(dir.path(), "partial.html", &doc);
    let opts = RunOptions::in_dir(dir.path());

    match run(&opts, None) {
        Err(Error::ShortRow { row, cells, .. }) => assert_eq!((row, cells), (3, 3)),
        other => panic!("unexpected: {other:?}"),
    }
    let out = lines(&opts.out_path);
    assert_eq!(out.len(), 3);
    assert!(out[1].starts_with("1,Jane Doe,"));
    assert!(out[2].starts_with("3,Ann Lee,"));
}

#[test]
fn short_row_aborts_the_run() {
    let dir = tempdir().unwrap();
    let short = page(&[JANE]).replace("<td>Marathon</td>", "");
    write(dir.path(), "short.html", &short);
    let opts = RunOptions::in_dir(dir.path());

    match run(&opts, None) {
        Err(Error::ShortRow { path, row, cells, needed }) => {
            assert!(path.ends_with("short.html"));
            assert_eq!((row, cells, needed), (1, 8, 9));
        }
        other => panic!("unexpected: {other:?}"),
    }
}

#[test]
fn missing_input_dir_yields_header_only() {
    let dir = tempdir().unwrap();
    let opts = RunOptions::new(dir.path().join("nope"), dir.path().join("out.csv"));
    // glob yields nothing for a missing directory: header-only output.
    let summary = run(&opts, None).unwrap();
    assert_eq!(summary.files_processed, 0);
}

#[test]
fn console_progress_lists_each_file() {
    let dir = tempdir().unwrap();
    write(dir.path(), "a.html", &page(&[JANE]));
    write(dir.path(), "b.html", &page(&[ANN]));
    let opts = RunOptions::in_dir(dir.path());

    let mut progress = ConsoleProgress::new(Vec::new());
    run(&opts, Some(&mut progress as &mut dyn Progress)).unwrap();
    let printed = String::from_utf8(progress.into_inner()).unwrap();
    let mut names: Vec<&str> = printed.lines().collect();
    names.sort();
    assert_eq!(names, vec!["a.html", "b.html"]);
}

#[test]
fn counting_progress_sees_every_record() {
    #[derive(Default)]
    struct Count {
        total: usize,
        files: usize,
        records: usize,
        finished: bool,
    }
    impl Progress for Count {
        fn begin(&mut self, total: usize) {
            self.total = total;
        }

        fn file_started(&mut self, _path: &Path) {
            self.files += 1;
        }

        fn record_written(&mut self) {
            self.records += 1;
        }

        fn finish(&mut self) {
            self.finished = true;
        }
    }

    let dir = tempdir().unwrap();
    write(dir.path(), "a.html", &page(&[JANE, JOHN, ANN]));
    let mut count = Count::default();
    run(&RunOptions::in_dir(dir.path()), Some(&mut count)).unwrap();
    assert_eq!((count.total, count.files, count.records, count.finished), (1, 1, 3, true));
}

#[test]
fn declared_latin1_page_keeps_accents() {
    let dir = tempdir().unwrap();
    let mut doc: Vec<u8> = Vec::new();
    doc.extend_from_slice(b"<html><head><meta charset=\"iso-8859-1\"></head><body>");
    doc.extend_from_slice(b"<table><tbody><tr><td>nav</td></tr></tbody></table><table><tbody><tr>");
    let cells: [&[u8]; 9] = [
        b"1",
        b"J\xfcrgen M\xfcller",
        b"M",
        b"40",
        b"Z\xfcrich",
        b"3:10:00",
        b"3:11:00",
        b"7:15",
        b"Marathon",
    ];
    for cell in cells {
        doc.extend_from_slice(b"<td>");
        doc.extend_from_slice(cell);
        doc.extend_from_slice(b"</td>");
    }
    doc.extend_from_slice(b"</tr></tbody></table></body></html>");
    fs::write(dir.path().join("zurich.html"), &doc).unwrap();
    let opts = RunOptions::in_dir(dir.path());

    run(&opts, None).unwrap();
    let out = lines(&opts.out_path);
    assert_eq!(out[1], "1,J\u{fc}rgen M\u{fc}ller,M,40,Z\u{fc}rich,3:10:00,3:11:00,7:15,Marathon");
}
