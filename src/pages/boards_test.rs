use super::*;

fn board(name: &str) -> Board {
    Board {
        id: format!("b-{name}"),
        name: name.to_owned(),
        slug: name.to_lowercase(),
    }
}

#[test]
fn sorted_boards_orders_case_insensitively() {
    let sorted = sorted_boards(vec![board("zulu"), board("Alpha"), board("mike")]);
    let names: Vec<&str> = sorted.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Alpha", "mike", "zulu"]);
}

#[test]
fn sorted_boards_breaks_case_ties_deterministically() {
    let sorted = sorted_boards(vec![board("ops"), board("Ops")]);
    let names: Vec<&str> = sorted.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Ops", "ops"]);
}

#[test]
fn board_count_label_pluralizes() {
    assert_eq!(board_count_label(0), "0 boards total.");
    assert_eq!(board_count_label(1), "1 board total.");
    assert_eq!(board_count_label(3), "3 boards total.");
}
