use super::*;
use crate::metrics::{cohesion, readability, syntax};

const HEADER: &str = "sentence,word1,lemma1,pos1,morph1,dep1";

fn rows(lines: &[&str]) -> String {
    let mut text = String::from(HEADER);
    for line in lines {
        text.push('\n');
        text.push_str(line);
    }
    text.push('\n');
    text
}

fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    fs::create_dir_all(dir).expect("create dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

fn extract_args(root: &Path) -> ExtractArgs {
    ExtractArgs {
        input_path: root.join("data"),
        output_path: root.join("out").join("metrics.csv"),
        num_workers: Some(1),
        features_path: root.join("features.txt"),
        dictionaries_dir: root.join("Dictionaries"),
        file_pattern: None,
        report_path: Some(root.join("report.json")),
        fail_fast: false,
    }
}

fn seed_corpus(root: &Path) {
    let data = root.join("data");
    write_file(
        &data,
        "a.csv",
        &rows(&[
            "Закон принят Думой,Закон,закон,NOUN,\"NOUN,inan\",nsubj:pass",
            "Закон принят Думой,принят,принять,VERB,\"PRTS,perf\",root",
            "Закон принят Думой,Думой,дума,PROPN,\"NOUN,inan\",obl",
        ]),
    );
    write_file(
        &data,
        "b.csv",
        &rows(&[
            "Суд рассмотрел иск,Суд,суд,NOUN,\"NOUN,inan\",nsubj",
            "Суд рассмотрел иск,рассмотрел,рассмотреть,VERB,\"VERB,perf\",root",
            "Суд рассмотрел иск,иск,иск,NOUN,\"NOUN,inan\",obj",
            "Истец подал жалобу,Истец,истец,NOUN,\"NOUN,anim\",nsubj",
            "Истец подал жалобу,подал,подать,VERB,\"VERB,perf\",root",
            "Истец подал жалобу,жалобу,жалоба,NOUN,\"NOUN,inan\",obj",
        ]),
    );
    write_file(root, "features.txt", "N_word(words)\nsent(sents)\nASL(words)\n");
}

fn read_report(root: &Path) -> serde_json::Value {
    let raw = fs::read_to_string(root.join("report.json")).expect("read report");
    serde_json::from_str(&raw).expect("report is json")
}

#[test]
fn repeated_sentence_text_continues_its_first_group() {
    let text = rows(&[
        "A,закон,закон,NOUN,NOUN,nsubj",
        "B,суд,суд,NOUN,NOUN,nsubj",
        "A,принят,принять,VERB,VERB,root",
    ]);
    let document = parse_annotated_reader(text.as_bytes()).expect("parse");

    assert_eq!(document.sentence_count(), 2);
    assert_eq!(document.sents(), ["A".to_string(), "B".to_string()]);
    let first: Vec<&str> = document.words()[0]
        .tokens
        .iter()
        .map(|token| token.word.as_str())
        .collect();
    assert_eq!(first, vec!["закон", "принят"]);
    assert_eq!(document.words()[1].len(), 1);
}

#[test]
fn parsing_is_deterministic() {
    let text = rows(&[
        "A,закон,закон,NOUN,NOUN,nsubj",
        "B,суд,суд,NOUN,NOUN,nsubj",
    ]);
    let first = parse_annotated_reader(text.as_bytes()).expect("parse");
    let second = parse_annotated_reader(text.as_bytes()).expect("parse");
    assert_eq!(first, second);
}

#[test]
fn invalid_words_are_dropped_and_missing_columns_read_empty() {
    let text = "sentence,word1,word2,word3,word4,word5,lemma1\n\
                Статья 5 из-за,Статья,5,\",\",из-за,,статья\n";
    let document = parse_annotated_reader(text.as_bytes()).expect("parse");

    let tokens = &document.words()[0].tokens;
    assert_eq!(tokens.len(), 2);
    assert_eq!(tokens[0].word, "Статья");
    assert_eq!(tokens[0].lemma, "статья");
    assert_eq!(tokens[1].word, "из-за");
    assert_eq!(tokens[1].lemma, "");
    assert_eq!(tokens[1].morph, "");
}

#[test]
fn sentence_without_valid_words_is_kept_only_as_raw_text() {
    let text = rows(&["1.,1,1,NUM,NUMB,nummod", "Суд,суд,суд,NOUN,NOUN,root"]);
    let document = parse_annotated_reader(text.as_bytes()).expect("parse");

    assert_eq!(document.words().len(), 1);
    assert_eq!(document.sents().len(), 2);
    assert_eq!(document.sentence_count(), 2);
    assert_eq!(document.token_count(), 1);
    assert_eq!(readability::asl(document.words()), Scalar::Real(1.0));
}

#[test]
fn numbering_rows_do_not_split_neighbouring_sentences() {
    let text = rows(&[
        "Закон принят,Закон,закон,NOUN,\"NOUN,inan\",nsubj",
        "Закон принят,принят,принять,VERB,\"PRTS,perf\",root",
        "1.,1,1,NUM,NUMB,nummod",
        "Закон действует,Закон,закон,NOUN,\"NOUN,inan\",nsubj",
        "Закон действует,действует,действовать,VERB,\"VERB,impf\",root",
    ]);
    let document = parse_annotated_reader(text.as_bytes()).expect("parse");

    assert_eq!(document.words().len(), 2);
    assert_eq!(document.sents().len(), 3);
    assert_eq!(readability::asl(document.words()), Scalar::Real(2.0));
    assert_eq!(cohesion::cohes_1(document.words()), Scalar::Count(1));
    assert_eq!(
        syntax::nsubj_pr(document.words(), document.sents()),
        Scalar::Real(2.0 / 3.0)
    );
}

#[test]
fn missing_sentence_column_is_rejected() {
    let text = "text,word1\nx,закон\n";
    let err = parse_annotated_reader(text.as_bytes()).expect_err("must fail");
    assert!(format!("{err:#}").contains("sentence"));
}

#[test]
fn extract_writes_one_row_per_file_in_declared_column_order() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed_corpus(dir.path());

    run(extract_args(dir.path())).expect("extract should succeed");

    let matrix = fs::read_to_string(dir.path().join("out").join("metrics.csv")).expect("read csv");
    assert_eq!(
        matrix,
        "fname,N_word,sent,ASL\na.csv,3,1,3.0\nb.csv,6,2,3.0\n"
    );

    let report = read_report(dir.path());
    assert_eq!(report["status"], "completed");
    assert_eq!(report["counts"]["processed_count"], 2);
    assert_eq!(report["counts"]["tokens_total"], 9);
    assert_eq!(report["paths"]["dictionaries_dir"], serde_json::Value::Null);
    assert_eq!(report["inputs"][1]["fname"], "b.csv");
    assert_eq!(report["metrics"][2], "ASL");
}

#[test]
fn output_does_not_depend_on_worker_count() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed_corpus(dir.path());
    let output = |workers: usize| {
        let mut args = extract_args(dir.path());
        args.num_workers = Some(workers);
        args.output_path = dir.path().join(format!("metrics-{workers}.csv"));
        run(args.clone()).expect("extract should succeed");
        fs::read_to_string(args.output_path).expect("read csv")
    };

    assert_eq!(output(1), output(4));
}

#[test]
fn malformed_file_is_isolated_unless_fail_fast() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed_corpus(dir.path());
    write_file(&dir.path().join("data"), "broken.csv", "text,word1\nx,закон\n");

    run(extract_args(dir.path())).expect("other files should still be extracted");

    let matrix = fs::read_to_string(dir.path().join("out").join("metrics.csv")).expect("read csv");
    assert_eq!(matrix.lines().count(), 3);
    assert!(!matrix.contains("broken.csv"));

    let report = read_report(dir.path());
    assert_eq!(report["status"], "completed_with_failures");
    assert_eq!(report["failures"][0]["fname"], "broken.csv");
    assert_eq!(report["counts"]["file_count"], 3);

    let mut args = extract_args(dir.path());
    args.fail_fast = true;
    let err = run(args).expect_err("fail-fast must stop");
    assert!(format!("{err:#}").contains("broken.csv"));
}

#[test]
fn file_pattern_limits_inputs() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed_corpus(dir.path());
    let mut args = extract_args(dir.path());
    args.file_pattern = Some("^b".to_string());

    run(args).expect("extract should succeed");

    let matrix = fs::read_to_string(dir.path().join("out").join("metrics.csv")).expect("read csv");
    assert_eq!(matrix, "fname,N_word,sent,ASL\nb.csv,6,2,3.0\n");
}

#[test]
fn directory_without_csv_files_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed_corpus(dir.path());
    let empty = dir.path().join("empty");
    write_file(&empty, "notes.txt", "not a corpus");

    let mut args = extract_args(dir.path());
    args.input_path = empty;
    let err = run(args).expect_err("no inputs must fail");
    assert!(format!("{err:#}").contains("no annotated CSV files"));
}

#[test]
fn dictionary_metrics_require_the_dictionary_directory() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed_corpus(dir.path());
    write_file(dir.path(), "features.txt", "N_word(words)\nAbbr_pr(words)\n");

    let err = run(extract_args(dir.path())).expect_err("missing dictionaries must fail");
    assert!(format!("{err:#}").contains("Dictionaries"));
}

#[test]
fn unknown_metric_fails_before_any_file_is_read() {
    let dir = tempfile::tempdir().expect("tempdir");
    seed_corpus(dir.path());
    write_file(dir.path(), "features.txt", "N_word(words)\nMystery(words)\n");

    let err = run(extract_args(dir.path())).expect_err("unknown metric must fail");
    assert!(format!("{err:#}").contains("Mystery"));
    assert!(!dir.path().join("out").join("metrics.csv").exists());
}
