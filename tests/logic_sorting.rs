// Tests for task sorting logic.
use afaire::{Task, TaskList, parse};

fn task(line: &str) -> Task {
    parse(line).unwrap()
}

#[test]
fn test_completed_sinks() {
    let mut list = TaskList::from(vec![
        task("x archive old mail"),
        task("answer new mail"),
        task("x clean inbox"),
    ]);
    list.sort();

    // After sorting, no done task may precede an open one.
    let mut seen_done = false;
    for t in &list {
        if t.done {
            seen_done = true;
        } else {
            assert!(!seen_done, "open task after a done one: {}", t.title);
        }
    }
    assert_eq!(list[0].title, "answer new mail");
}

#[test]
fn test_due_dates_order_earliest_first() {
    let mut list = TaskList::from(vec![
        task("later 2024-4-1"),
        task("soon 2024-3-5"),
        task("no date at all"),
    ]);
    list.sort();

    assert_eq!(list[0].title, "soon");
    assert_eq!(list[1].title, "later");
    // A task without a due date sorts after any dated one.
    assert_eq!(list[2].title, "no date at all");
}

#[test]
fn test_start_date_breaks_due_ties() {
    let mut list = TaskList::from(vec![
        task("b 2024-3-5 s:2024-3-4"),
        task("a 2024-3-5 s:2024-3-1"),
        task("c 2024-3-5"),
    ]);
    list.sort();

    assert_eq!(list[0].title, "a");
    assert_eq!(list[1].title, "b");
    assert_eq!(list[2].title, "c"); // missing start sorts last
}

#[test]
fn test_title_is_the_last_resort() {
    let mut list = TaskList::from(vec![task("pears"), task("apples"), task("oranges")]);
    list.sort();

    assert_eq!(list[0].title, "apples");
    assert_eq!(list[1].title, "oranges");
    assert_eq!(list[2].title, "pears");
}

#[test]
fn test_completion_outranks_dates() {
    // A done task with a due date still sinks below an open undated task.
    let mut list = TaskList::from(vec![task("x urgent done 2024-3-5"), task("idle open")]);
    list.sort();

    assert_eq!(list[0].title, "idle open");
    assert_eq!(list[1].title, "urgent done");
}

#[test]
fn test_sort_is_consistent_on_shuffled_input() {
    // Same multiset of tasks in two different input orders must end up
    // in the same display order.
    let lines = [
        "x wash car",
        "buy paint 2024-5-2",
        "buy brushes 2024-5-2",
        "call plumber",
        "x pay invoice 2024-4-30",
        "tidy shed s:2024-5-1",
    ];
    let mut a = TaskList::from(lines.iter().map(|l| task(l)).collect::<Vec<_>>());
    let mut b = TaskList::from(lines.iter().rev().map(|l| task(l)).collect::<Vec<_>>());
    a.sort();
    b.sort();

    let titles_a: Vec<&str> = a.iter().map(|t| t.title.as_str()).collect();
    let titles_b: Vec<&str> = b.iter().map(|t| t.title.as_str()).collect();
    assert_eq!(titles_a, titles_b);
    assert_eq!(titles_a[0], "buy brushes");
}
