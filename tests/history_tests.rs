use proptest::prelude::*;
use tabfm::tabs::TabManager;

proptest! {
    /// For any sequence of navigate/back/forward/up, the history cursor
    /// stays inside the history and always points at the current path.
    #[test]
    fn history_index_never_leaves_bounds(ops in prop::collection::vec(0..4usize, 1..100)) {
        let mut manager = TabManager::new("/start".to_string());
        let mut counter = 0u32;

        for op in ops {
            match op {
                0 => {
                    counter += 1;
                    manager.navigate(format!("/dir/{counter}"));
                }
                1 => manager.go_back(),
                2 => manager.go_forward(),
                _ => manager.go_up(),
            }

            let tab = manager.active_tab();
            prop_assert!(tab.history_index < tab.history.len());
            prop_assert_eq!(&tab.history[tab.history_index], &tab.path);
        }
    }

    /// Closing tabs never drops below one, and the active id always
    /// references a live tab.
    #[test]
    fn close_tab_invariants(ops in prop::collection::vec(0..3usize, 1..50)) {
        let mut manager = TabManager::new("/a".to_string());

        for (i, op) in ops.into_iter().enumerate() {
            match op {
                0 => {
                    manager.add_tab(format!("/tab/{i}"));
                }
                1 => manager.close_tab(manager.active_id()),
                _ => manager.cycle_active(true),
            }

            prop_assert!(!manager.tabs().is_empty());
            let active = manager.active_id();
            prop_assert!(manager.tabs().iter().any(|t| t.id == active));
        }
    }
}

#[test]
fn navigating_after_back_discards_forward_branch() {
    let mut manager = TabManager::new("/a".to_string());
    manager.navigate("/b".to_string());
    manager.navigate("/c".to_string());
    manager.go_back();
    manager.navigate("/d".to_string());

    let tab = manager.active_tab();
    assert_eq!(tab.history, ["/a", "/b", "/d"]);
    assert_eq!(tab.history_index, 2);
}

#[test]
fn go_up_edge_cases() {
    let mut manager = TabManager::new("/".to_string());
    manager.go_up();
    assert_eq!(manager.active_tab().path, "/");

    let mut manager = TabManager::new("/home/user/docs".to_string());
    manager.go_up();
    assert_eq!(manager.active_tab().path, "/home/user");

    let mut manager = TabManager::new("C:\\Users".to_string());
    manager.go_up();
    assert_eq!(manager.active_tab().path, "C:\\");

    let mut manager = TabManager::new("C:\\".to_string());
    manager.go_up();
    assert_eq!(manager.active_tab().path, "C:\\");
}

#[test]
fn closing_the_active_tab_reassigns_to_former_index() {
    let mut manager = TabManager::new("/a".to_string());
    let b = manager.add_tab("/b".to_string());
    let c = manager.add_tab("/c".to_string());

    manager.set_active_tab(b);
    manager.close_tab(b);
    assert_eq!(manager.active_id(), c);

    // Closing the rightmost active tab clamps to the new end.
    manager.set_active_tab(c);
    manager.close_tab(c);
    assert_eq!(manager.active_tab().path, "/a");

    // The last tab refuses to close.
    manager.close_tab(manager.active_id());
    assert_eq!(manager.tabs().len(), 1);
}
