use std::io::Cursor;

use mochila_cli::{OutputMode, Session, SessionConfig};
use mochila_inventory::{CAPACITY, Inventory};

struct Outcome {
    inventory: Inventory,
    output: String,
}

fn run_script(script: &str, config: SessionConfig) -> Outcome {
    run_bytes(script.as_bytes(), config)
}

fn run_bytes(script: &[u8], config: SessionConfig) -> Outcome {
    let reader = Cursor::new(script.to_vec());
    let mut session = Session::new(reader, Vec::new(), config);
    session.run().expect("session should finish cleanly");

    let (inventory, out) = session.into_parts();
    Outcome {
        inventory,
        output: String::from_utf8(out).expect("output should be UTF-8"),
    }
}

fn quiet() -> SessionConfig {
    SessionConfig {
        output: OutputMode::Table,
        show_banner: false,
    }
}

fn run(script: &str) -> Outcome {
    run_script(script, quiet())
}

fn collect(name: &str, category: &str, weight: &str, quantity: &str) -> String {
    format!("1\n{name}\n{category}\n{weight}\n{quantity}\n")
}

#[test]
fn banner_and_farewell_frame_the_session() {
    let out = run_script("0\n", SessionConfig::default());
    assert!(out.output.contains("WELCOME TO THE INVENTORY SIMULATION"));
    assert!(out.output.contains("[BACKPACK] Items: 0/10"));
    assert!(out.output.contains("Good luck on your next mission!"));
}

#[test]
fn end_of_input_ends_session_like_quit() {
    let out = run("");
    assert!(out.output.contains("Good luck on your next mission!"));
}

#[test]
fn input_cut_off_mid_collect_stores_nothing() {
    let out = run("1\nFaca\nArma\n");
    assert!(out.inventory.is_empty());
    assert!(out.output.contains("Good luck on your next mission!"));
}

#[test]
fn non_utf8_menu_line_is_reported_and_session_continues() {
    let mut script = collect("Faca", "Arma", "0.5", "1").into_bytes();
    script.extend_from_slice(b"\xff\xfe\n3\n0\n");

    let out = run_bytes(&script, quiet());

    assert!(out.output.contains("[ERROR] Invalid option. Enter a number."));
    assert!(out.output.contains("| 1     | Faca "));
    assert_eq!(out.inventory.len(), 1);
}

#[test]
fn non_utf8_search_name_is_not_found_instead_of_fatal() {
    let mut script = collect("Faca", "Arma", "0.5", "1").into_bytes();
    script.extend_from_slice(b"4\nFa\xe7a\n0\n");

    let out = run_bytes(&script, quiet());

    assert!(out.output.contains("[NOT FOUND]"));
    assert!(out.output.contains("Good luck on your next mission!"));
    assert_eq!(out.inventory.len(), 1);
}

#[test]
fn blank_category_lines_wait_for_a_word() {
    let out = run("1\nFaca\n\n  \nArma\n0.5\n1\n0\n");

    let (_, item) = out.inventory.find_by_name("Faca").expect("item stored");
    assert_eq!(item.category(), "Arma");
}

#[test]
fn collect_inspect_discard_search_walkthrough() {
    let script = [
        collect("Faca", "Arma", "0.5", "1"),
        collect("Kit", "Medico", "1.2", "2"),
        "3\n".to_string(),
        "2\n1\n".to_string(),
        "4\nKit\n".to_string(),
        "0\n".to_string(),
    ]
    .concat();

    let out = run(&script);

    assert!(out.output.contains("[SUCCESS] 'Faca' (Arma) added to the backpack. Space remaining: 9."));
    assert!(out.output.contains("[SUCCESS] 'Kit' (Medico) added to the backpack. Space remaining: 8."));
    assert!(out.output.contains("| 1     | Faca "));
    assert!(out.output.contains("[SUCCESS] Item 'Faca' removed from the backpack."));
    assert!(out.output.contains("[FOUND] Item 'Kit' at position 1 (Category: Medico, Qty: 2, Weight: 1.20)."));

    let names: Vec<&str> = out.inventory.list().iter().map(|i| i.name()).collect();
    assert_eq!(names, ["Kit"]);
}

#[test]
fn name_keeps_inner_spaces_and_category_keeps_first_word() {
    let out = run(&format!("{}0\n", collect("Kit Medico", "Medico de campo", "1.2", "2")));

    let (pos, item) = out.inventory.find_by_name("Kit Medico").expect("item stored");
    assert_eq!(pos, 1);
    assert_eq!(item.category(), "Medico");
    assert_eq!(item.quantity(), 2);
}

#[test]
fn bad_number_leaves_backpack_unchanged() {
    let script = [
        collect("Faca", "Arma", "0.5", "1"),
        collect("Corda", "Ferramenta", "pesada", "1"),
        collect("Lanterna", "Ferramenta", "0.3", "muitas"),
        "0\n".to_string(),
    ]
    .concat();

    let out = run(&script);

    assert!(out.output.contains("[ERROR] 'pesada' is not a valid number."));
    assert!(out.output.contains("[ERROR] 'muitas' is not a valid number."));
    assert_eq!(out.inventory.len(), 1);
}

#[test]
fn overlong_name_is_rejected() {
    let long_name = "x".repeat(60);
    let out = run(&format!("{}0\n", collect(&long_name, "Arma", "1", "1")));

    assert!(out.output.contains("name cannot exceed 49 characters. Item not added."));
    assert!(out.inventory.is_empty());
}

#[test]
fn full_backpack_refuses_without_prompting() {
    let mut script: String = (0..CAPACITY)
        .map(|i| collect(&format!("item-{i}"), "Misc", "1", "1"))
        .collect();
    // The 11th collect must not consume further lines, so "3" is read as a menu option.
    script.push_str("1\n3\n0\n");

    let out = run(&script);

    assert!(out.output.contains("[BACKPACK FULL] Maximum capacity (10) reached."));
    assert!(out.output.contains("| 10    | item-9 "));
    assert_eq!(out.inventory.len(), CAPACITY);
}

#[test]
fn discard_rejects_out_of_range_positions() {
    let script = [
        collect("Faca", "Arma", "0.5", "1"),
        "2\n0\n".to_string(),
        "2\n-3\n".to_string(),
        "2\n2\n".to_string(),
        "2\numa\n".to_string(),
        "0\n".to_string(),
    ]
    .concat();

    let out = run(&script);

    assert_eq!(out.output.matches("[ERROR] Invalid position. Try again.").count(), 3);
    assert!(out.output.contains("[ERROR] 'uma' is not a valid number."));
    assert_eq!(out.inventory.len(), 1);
}

#[test]
fn empty_backpack_messages_skip_prompts() {
    // Neither discard nor search may read a follow-up line here.
    let out = run("2\n4\n3\n0\n");

    assert!(out.output.contains("The backpack is empty. Nothing to remove."));
    assert!(out.output.contains("The backpack is empty. No items to search."));
    assert!(out.output.contains("THE BACKPACK IS EMPTY!"));
}

#[test]
fn search_is_exact_match() {
    let script = [
        collect("Kit Medico", "Medico", "1.2", "2"),
        "4\nkit medico\n".to_string(),
        "0\n".to_string(),
    ]
    .concat();

    let out = run(&script);
    assert!(out.output.contains("[NOT FOUND] Item 'kit medico' is not in the backpack."));
}

#[test]
fn invalid_and_unknown_menu_options_are_reported() {
    let out = run("abc\n9\n0\n");
    assert!(out.output.contains("[ERROR] Invalid option. Enter a number."));
    assert!(out.output.contains("[WARNING] Unrecognized option. Try again."));
}

#[test]
fn json_mode_renders_list_and_hits_as_json() {
    let script = [
        collect("Faca", "Arma", "0.5", "1"),
        "3\n".to_string(),
        "4\nFaca\n".to_string(),
        "0\n".to_string(),
    ]
    .concat();

    let out = run_script(
        &script,
        SessionConfig {
            output: OutputMode::Json,
            show_banner: false,
        },
    );

    assert!(out.output.contains("\"name\": \"Faca\""));
    assert!(out.output.contains("\"position\": 1"));
    assert!(!out.output.contains("BACKPACK INVENTORY"));
}
