//! show / add / done command tests
mod common;

use common::{SAMPLE_LINES, read_lines, schedule_file, today};
use sch::table::NO_SCHEDULE;
use sch::{ListOptions, SchError, Scheduler, str_width};

fn scheduler(lines: &[&str]) -> (tempfile::TempDir, std::path::PathBuf, Scheduler) {
    let (dir, path) = schedule_file(lines);
    let scheduler = Scheduler::new(&path, today()).unwrap();
    (dir, path, scheduler)
}

// 見出しに今日の日付と曜日が表示される
#[test]
fn test_show_headline() {
    let (_dir, _path, scheduler) = scheduler(&SAMPLE_LINES);
    let output = scheduler.handle_show(ListOptions::default());
    assert_eq!(
        output.lines().next().unwrap(),
        "*** 2014年8月3日　日曜日 ***"
    );

    let output = scheduler.with_headline(false).handle_show(ListOptions::default());
    assert!(!output.contains("***"));
}

// 既定では今日以降・緊急・未完了の予定だけを表示
#[test]
fn test_show_default_filters() {
    let (_dir, _path, scheduler) = scheduler(&SAMPLE_LINES);
    let output = scheduler.with_headline(false).handle_show(ListOptions::default());
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains("予定日"));
    assert!(lines[1].starts_with("3 "));
    assert!(lines[1].contains("2014/08/07(木)"));
    assert!(lines[1].contains("アルゴリズム 課題提出"));
    assert_eq!(str_width(lines[0]), str_width(lines[1]));
}

#[test]
fn test_show_all_and_done() {
    let (_dir, _path, scheduler) = scheduler(&SAMPLE_LINES);
    let output = scheduler.handle_show(ListOptions {
        show_all: true,
        show_done: true,
    });
    assert!(!output.contains("アニメ上映会"));
    assert!(output.contains("CodeIQ提出期限"));
    assert!(output.contains("散髪"));
    let done_line = output.lines().find(|l| l.contains("CodeIQ")).unwrap();
    assert!(done_line.starts_with("2 d "));
}

// 表示はファイルの順序ではなく日付順、番号はファイル上の位置
#[test]
fn test_show_sorts_by_date_keeping_numbers() {
    let (_dir, _path, scheduler) = scheduler(&["0 20140810 -18 後", "0 20140805 -18 先"]);
    let output = scheduler.with_headline(false).handle_show(ListOptions::default());
    let lines: Vec<&str> = output.lines().collect();
    assert!(lines[1].starts_with("2 ") && lines[1].contains("先"));
    assert!(lines[2].starts_with("1 ") && lines[2].contains("後"));
}

#[test]
fn test_show_nothing() {
    let (_dir, _path, scheduler) = scheduler(&["0 20140801 0 アニメ上映会"]);
    let output = scheduler.with_headline(false).handle_show(ListOptions::default());
    assert_eq!(output, format!("{}\n", NO_SCHEDULE));
}

// 予定を追加するとファイルが日付順で書き直され、新しい予定に印が付く
#[test]
fn test_add() {
    let (_dir, path, mut scheduler) = scheduler(&SAMPLE_LINES);
    let output = scheduler
        .handle_add("0805", "h", "講演会", ListOptions::default())
        .unwrap();

    let added = output.lines().find(|l| l.contains("講演会")).unwrap();
    assert!(added.starts_with("3 * "));
    assert!(added.contains("2014/08/05(火)"));
    assert!(added.contains("-10"));

    let lines = read_lines(&path);
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[2], "0 20140805 -10 講演会");
    assert_eq!(scheduler.records().len(), 5);
}

// フィルタで隠れる予定でも追加直後は表示される
#[test]
fn test_add_shows_new_record_even_if_not_urgent() {
    let (_dir, _path, mut scheduler) = scheduler(&SAMPLE_LINES);
    let output = scheduler
        .handle_add("0830", "l", "遠い予定", ListOptions::default())
        .unwrap();
    assert!(output.contains("遠い予定"));
    assert!(!output.contains("散髪"));
}

fn marked_rows(output: &str) -> Vec<&str> {
    output
        .lines()
        .filter(|l| l.split_whitespace().nth(1) == Some("*"))
        .collect()
}

// 既存と同じ内容の予定を追加しても印が付くのは新しい方だけ
#[test]
fn test_add_duplicate_marks_only_new_record() {
    let (_dir, _path, scheduler) = scheduler(&SAMPLE_LINES);
    let mut scheduler = scheduler.with_headline(false);
    let output = scheduler
        .handle_add("0807", "-18", "アルゴリズム 課題提出", ListOptions::default())
        .unwrap();
    let marked = marked_rows(&output);
    assert_eq!(marked.len(), 1);
    assert!(marked[0].starts_with("4 * "));
    assert_eq!(output.lines().filter(|l| l.contains("アルゴリズム")).count(), 2);
}

// 同じ内容でもフィルタを素通りするのは新しいレコードだけ
#[test]
fn test_add_duplicate_whitelists_only_new_record() {
    let (_dir, _path, scheduler) = scheduler(&SAMPLE_LINES);
    let mut scheduler = scheduler.with_headline(false);
    let output = scheduler
        .handle_add("0820", "10", "散髪", ListOptions::default())
        .unwrap();
    let rows: Vec<&str> = output.lines().filter(|l| l.contains("散髪")).collect();
    assert_eq!(rows.len(), 1);
    assert!(rows[0].starts_with("5 * "));
}

/// Replace the schedule file with a non-empty directory so the final rename fails
fn block_file(path: &std::path::Path) {
    std::fs::remove_file(path).unwrap();
    std::fs::create_dir(path).unwrap();
    std::fs::write(path.join("keep"), "x").unwrap();
}

fn dir_entries(dir: &std::path::Path) -> Vec<String> {
    std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

// 保存に失敗した場合はメモリ上の予定も変更せず、一時ファイルも残さない
#[test]
fn test_add_save_failure_keeps_state() {
    let (dir, path, mut scheduler) = scheduler(&["0 20140807 -18 後", "0 20140805 -18 先"]);
    block_file(&path);

    let result = scheduler.handle_add("0806", "e", "中", ListOptions::default());
    assert!(result.is_err());

    let descriptions: Vec<&str> = scheduler.records().iter().map(|r| r.description()).collect();
    assert_eq!(descriptions, vec!["後", "先"]);
    assert_eq!(dir_entries(dir.path()), vec!["schedule-list"]);
}

#[test]
fn test_done_save_failure_keeps_state() {
    let (dir, path, mut scheduler) = scheduler(&SAMPLE_LINES);
    block_file(&path);

    assert!(scheduler.handle_done(&[1], ListOptions::default()).is_err());
    assert!(!scheduler.records()[0].done());
    assert_eq!(dir_entries(dir.path()), vec!["schedule-list"]);
}

#[test]
fn test_add_to_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("schedule-list");
    let mut scheduler = Scheduler::new(&path, today()).unwrap();
    scheduler
        .handle_add("20140901", "-3", "新規", ListOptions::default())
        .unwrap();
    assert_eq!(read_lines(&path), vec!["0 20140901 -3 新規"]);
}

// 不正な入力ではファイルを変更しない
#[test]
fn test_add_invalid_priority() {
    let (_dir, path, mut scheduler) = scheduler(&SAMPLE_LINES);
    let err = scheduler
        .handle_add("0805", "x", "講演会", ListOptions::default())
        .unwrap_err();
    assert_eq!(
        err.downcast_ref::<SchError>(),
        Some(&SchError::InvalidPriority {
            token: "x".to_string()
        })
    );
    assert_eq!(read_lines(&path), SAMPLE_LINES);
    assert_eq!(scheduler.records().len(), 4);
}

#[test]
fn test_add_invalid_date() {
    let (_dir, _path, mut scheduler) = scheduler(&SAMPLE_LINES);
    let err = scheduler
        .handle_add("0230", "n", "x", ListOptions::default())
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<SchError>(),
        Some(SchError::InvalidDate { .. })
    ));
}

// 実行済みにすると完了フラグが反転して保存される
#[test]
fn test_done_toggles() {
    let (_dir, path, mut scheduler) = scheduler(&SAMPLE_LINES);
    let output = scheduler.handle_done(&[3], ListOptions::default()).unwrap();
    assert!(!output.contains("アルゴリズム"));
    assert!(read_lines(&path)[2].starts_with("1 20140807"));

    scheduler.handle_done(&[2, 3, 3], ListOptions::default()).unwrap();
    let lines = read_lines(&path);
    assert!(lines[1].starts_with("0 20140804"));
    assert!(lines[2].starts_with("0 20140807"));
}

#[test]
fn test_done_out_of_range() {
    let (_dir, path, mut scheduler) = scheduler(&SAMPLE_LINES);
    let err = scheduler
        .handle_done(&[1, 9], ListOptions::default())
        .unwrap_err();
    assert!(err.to_string().contains("9"));
    assert!(scheduler.handle_done(&[0], ListOptions::default()).is_err());
    assert!(scheduler.handle_done(&[], ListOptions::default()).is_err());
    assert_eq!(read_lines(&path), SAMPLE_LINES);
}

// 不正な行を含むファイルは読み込み時にエラー
#[test]
fn test_new_with_malformed_file() {
    let (_dir, path) = schedule_file(&["0 20140801 0 a", "0 20140802"]);
    let err = Scheduler::new(&path, today()).err().unwrap();
    assert!(format!("{:#}", err).contains(":2"));
}
