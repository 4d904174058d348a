use gatelog::errors::AppError;
use gatelog::models::{EntityKind, EventKind, Status};

mod common;
use common::{memory_store, setup_test_db};

fn event_count(store: &gatelog::Store) -> usize {
    store.list_events("", 10_000).expect("list events").len()
}

#[test]
fn test_create_assigns_increasing_ids_and_logs_created() {
    let mut store = memory_store();

    let a = store.create_vehicle("A100").unwrap();
    let b = store.create_vehicle("B200").unwrap();
    let c = store.create_commander("Petrov Ivan").unwrap();

    assert!(b > a, "ids must increase: {a} then {b}");
    assert!(c > 0);

    let events = store.list_events("", 100).unwrap();
    assert_eq!(events.len(), 3);
    assert!(events.iter().all(|e| e.event_type == EventKind::Created));

    // newest first
    assert_eq!(events[0].entity_type, EntityKind::Commander);
    assert_eq!(events[0].entity_name, "Petrov Ivan");
    assert_eq!(events[0].entity_id, c);
    assert_eq!(events[2].entity_name, "A100");
    assert_eq!(events[2].entity_id, a);
    assert!(events[0].id > events[1].id && events[1].id > events[2].id);
}

#[test]
fn test_new_entities_start_idle() {
    let mut store = memory_store();
    let id = store.create_vehicle("A100").unwrap();

    let v = store.get_vehicle(id).unwrap();
    assert_eq!(v.status, Status::Idle);
    assert_eq!(v.number, "A100");
}

#[test]
fn test_duplicate_is_rejected_and_nothing_changes() {
    let mut store = memory_store();
    store.create_vehicle("A100").unwrap();
    store.create_commander("Petrov Ivan").unwrap();

    let err = store.create_vehicle("A100").unwrap_err();
    assert!(matches!(err, AppError::Duplicate { .. }), "got {err:?}");

    // trimmed input collides too
    let err = store.create_commander("  Petrov Ivan ").unwrap_err();
    assert!(matches!(err, AppError::Duplicate { .. }), "got {err:?}");

    assert_eq!(store.list_vehicles("").unwrap().len(), 1);
    assert_eq!(store.list_commanders("").unwrap().len(), 1);
    assert_eq!(event_count(&store), 2, "no event for a rejected insert");
}

#[test]
fn test_empty_input_is_a_validation_error() {
    let mut store = memory_store();

    for input in ["", "   ", "\t\n"] {
        let err = store.create_vehicle(input).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");

        let err = store.create_commander(input).unwrap_err();
        assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    }

    assert_eq!(event_count(&store), 0);
}

#[test]
fn test_input_is_trimmed_before_storing() {
    let mut store = memory_store();
    let id = store.create_vehicle("  A100  ").unwrap();

    assert_eq!(store.get_vehicle(id).unwrap().number, "A100");
    assert_eq!(store.list_events("", 10).unwrap()[0].entity_name, "A100");
}

#[test]
fn test_delete_missing_id_is_not_found_and_logs_nothing() {
    let mut store = memory_store();
    store.create_vehicle("A100").unwrap();

    let err = store.delete_vehicle(9999).unwrap_err();
    assert!(matches!(err, AppError::NotFound { id: 9999, .. }), "got {err:?}");

    let err = store.delete_commander(1).unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }), "got {err:?}");

    assert_eq!(event_count(&store), 1);
}

#[test]
fn test_delete_logs_name_and_event_survives_the_row() {
    let mut store = memory_store();
    let id = store.create_vehicle("A100").unwrap();

    store.delete_vehicle(id).unwrap();

    assert!(store.list_vehicles("").unwrap().is_empty());
    assert!(matches!(
        store.get_vehicle(id).unwrap_err(),
        AppError::NotFound { .. }
    ));

    let events = store.list_events("", 10).unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].event_type, EventKind::Deleted);
    assert_eq!(events[0].entity_name, "A100");
    assert_eq!(events[0].entity_id, id);
    assert_eq!(events[1].event_type, EventKind::Created);
}

#[test]
fn test_list_is_sorted_and_filtered_by_substring() {
    let mut store = memory_store();
    for n in ["B200", "A150", "C300", "A100"] {
        store.create_vehicle(n).unwrap();
    }

    let all: Vec<String> = store
        .list_vehicles("")
        .unwrap()
        .into_iter()
        .map(|v| v.number)
        .collect();
    assert_eq!(all, ["A100", "A150", "B200", "C300"]);

    let some: Vec<String> = store
        .list_vehicles("A1")
        .unwrap()
        .into_iter()
        .map(|v| v.number)
        .collect();
    assert_eq!(some, ["A100", "A150"]);

    // search text is trimmed
    assert_eq!(store.list_vehicles(" 300 ").unwrap().len(), 1);

    // matching is case-sensitive
    assert!(store.list_vehicles("a1").unwrap().is_empty());

    assert!(store.list_vehicles("ZZZ").unwrap().is_empty());
}

#[test]
fn test_commander_search_handles_cyrillic() {
    let mut store = memory_store();
    store.create_commander("Петров Иван Сергеевич").unwrap();
    store.create_commander("Иванов Пётр Олегович").unwrap();
    store.create_commander("Сидоров Олег Иванович").unwrap();

    let names: Vec<String> = store
        .list_commanders("Иван")
        .unwrap()
        .into_iter()
        .map(|c| c.name)
        .collect();
    assert_eq!(
        names,
        [
            "Иванов Пётр Олегович",
            "Петров Иван Сергеевич",
            "Сидоров Олег Иванович"
        ]
    );

    assert_eq!(store.list_commanders("Олег").unwrap().len(), 2);
}

#[test]
fn test_stats_match_direct_counts() {
    let mut store = memory_store();
    let v1 = store.create_vehicle("A100").unwrap();
    store.create_vehicle("B200").unwrap();
    store.create_vehicle("C300").unwrap();
    store.create_commander("Petrov Ivan").unwrap();
    store.create_commander("Andreev Oleg").unwrap();

    store.set_status(EntityKind::Vehicle, v1, "A100", Status::Arrived).unwrap();
    store.set_status(EntityKind::Vehicle, v1, "A100", Status::Departed).unwrap();

    let stats = store.compute_stats().unwrap();
    assert_eq!(stats.vehicles, 3);
    assert_eq!(stats.commanders, 2);
    assert_eq!(stats.arrivals, 1);
    assert_eq!(stats.departures, 1);
    assert_eq!(stats.total_events, 7);
}

#[test]
fn test_clear_events_empties_history_and_logging_continues() {
    let mut store = memory_store();
    store.create_vehicle("A100").unwrap();
    store.create_vehicle("B200").unwrap();

    let removed = store.clear_events().unwrap();
    assert_eq!(removed, 2);
    assert!(store.list_events("", 100).unwrap().is_empty());

    // entities are untouched
    assert_eq!(store.list_vehicles("").unwrap().len(), 2);

    store.create_commander("Petrov Ivan").unwrap();
    let events = store.list_events("", 100).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].entity_name, "Petrov Ivan");
    assert_eq!(events[0].event_type, EventKind::Created);
}

#[test]
fn test_status_rotates_through_all_states() {
    let mut store = memory_store();
    let id = store.create_vehicle("A100").unwrap();

    assert_eq!(store.advance_status(EntityKind::Vehicle, id).unwrap(), Status::Arrived);
    assert_eq!(store.advance_status(EntityKind::Vehicle, id).unwrap(), Status::Departed);
    assert_eq!(store.advance_status(EntityKind::Vehicle, id).unwrap(), Status::Idle);
    assert_eq!(store.advance_status(EntityKind::Vehicle, id).unwrap(), Status::Arrived);

    assert_eq!(store.get_vehicle(id).unwrap().status, Status::Arrived);

    let kinds: Vec<EventKind> = store
        .list_events("", 100)
        .unwrap()
        .into_iter()
        .map(|e| e.event_type)
        .collect();
    assert_eq!(
        kinds,
        [
            EventKind::Arrived,
            EventKind::Idle,
            EventKind::Departed,
            EventKind::Arrived,
            EventKind::Created
        ]
    );
}

#[test]
fn test_idle_never_jumps_to_departed() {
    let mut store = memory_store();
    let id = store.create_commander("Petrov Ivan").unwrap();

    let err = store
        .set_status(EntityKind::Commander, id, "Petrov Ivan", Status::Departed)
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "got {err:?}");

    // re-entering the current state is not a transition either
    let err = store
        .set_status(EntityKind::Commander, id, "Petrov Ivan", Status::Idle)
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "got {err:?}");

    assert_eq!(store.get_commander(id).unwrap().status, Status::Idle);
    assert_eq!(event_count(&store), 1, "rejected transitions are not logged");
}

#[test]
fn test_set_status_uses_the_callers_name_snapshot() {
    let mut store = memory_store();
    let id = store.create_vehicle("A100").unwrap();

    store
        .set_status(EntityKind::Vehicle, id, "A100 (trailer)", Status::Arrived)
        .unwrap();

    let last = &store.list_events("", 1).unwrap()[0];
    assert_eq!(last.event_type, EventKind::Arrived);
    assert_eq!(last.entity_name, "A100 (trailer)");
    assert_eq!(last.entity_id, id);
}

#[test]
fn test_set_status_on_missing_row_is_not_found() {
    let mut store = memory_store();

    let err = store
        .set_status(EntityKind::Vehicle, 42, "ghost", Status::Arrived)
        .unwrap_err();
    assert!(matches!(err, AppError::NotFound { id: 42, .. }), "got {err:?}");

    let err = store.advance_status(EntityKind::Commander, 42).unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }), "got {err:?}");

    assert_eq!(event_count(&store), 0);
}

#[test]
fn test_set_status_rejects_empty_name() {
    let mut store = memory_store();
    let id = store.create_vehicle("A100").unwrap();

    let err = store
        .set_status(EntityKind::Vehicle, id, "  ", Status::Arrived)
        .unwrap_err();
    assert!(matches!(err, AppError::Validation(_)), "got {err:?}");
    assert_eq!(store.get_vehicle(id).unwrap().status, Status::Idle);
}

#[test]
fn test_unknown_type_or_status_strings_are_validation_errors() {
    assert!(matches!(
        "parked".parse::<Status>().unwrap_err(),
        AppError::Validation(_)
    ));
    assert!(matches!(
        "truck".parse::<EntityKind>().unwrap_err(),
        AppError::Validation(_)
    ));

    assert_eq!("Arrived".parse::<Status>().unwrap(), Status::Arrived);
    assert_eq!(" commander ".parse::<EntityKind>().unwrap(), EntityKind::Commander);
}

#[test]
fn test_list_events_search_limit_and_order() {
    let mut store = memory_store();
    let v = store.create_vehicle("A100").unwrap();
    store.create_vehicle("B200").unwrap();
    store.create_commander("Petrov Ivan").unwrap();
    store.advance_status(EntityKind::Vehicle, v).unwrap();

    // by entity name
    let by_name = store.list_events("A100", 100).unwrap();
    assert_eq!(by_name.len(), 2);
    assert_eq!(by_name[0].event_type, EventKind::Arrived);

    // by event type
    let arrived = store.list_events("arrived", 100).unwrap();
    assert_eq!(arrived.len(), 1);

    // by entity type
    let commanders = store.list_events("commander", 100).unwrap();
    assert_eq!(commanders.len(), 1);
    assert_eq!(commanders[0].entity_name, "Petrov Ivan");

    // limit keeps the newest rows
    let two = store.list_events("", 2).unwrap();
    assert_eq!(two.len(), 2);
    assert_eq!(two[0].event_type, EventKind::Arrived);
    assert_eq!(two[1].entity_name, "Petrov Ivan");

    assert!(store.list_events("nothing matches", 100).unwrap().is_empty());
}

#[test]
fn test_recent_events_returns_latest_n() {
    let mut store = memory_store();
    for n in ["A100", "B200", "C300", "D400"] {
        store.create_vehicle(n).unwrap();
    }

    let recent = store
        .recent_events(gatelog::db::DEFAULT_RECENT_LIMIT)
        .unwrap();
    assert_eq!(recent.len(), 4);

    let recent = store.recent_events(2).unwrap();
    let names: Vec<&str> = recent.iter().map(|e| e.entity_name.as_str()).collect();
    assert_eq!(names, ["D400", "C300"]);
}

#[test]
fn test_timestamps_use_fixed_format() {
    let mut store = memory_store();
    store.create_vehicle("A100").unwrap();

    let ev = &store.list_events("", 1).unwrap()[0];
    let ts = ev.ts_str();
    assert_eq!(ts.len(), 19, "unexpected timestamp {ts}");
    assert_eq!(&ts[4..5], "-");
    assert_eq!(&ts[10..11], " ");
    assert_eq!(&ts[13..14], ":");
}

#[test]
fn test_failed_delete_rolls_back_the_event() {
    let mut store = memory_store();
    let id = store.create_vehicle("A100").unwrap();

    store
        .conn()
        .execute_batch(
            "CREATE TRIGGER block_delete BEFORE DELETE ON vehicles
             BEGIN SELECT RAISE(ABORT, 'blocked'); END;",
        )
        .unwrap();

    let err = store.delete_vehicle(id).unwrap_err();
    assert!(matches!(err, AppError::Db(_)), "got {err:?}");

    assert_eq!(store.list_vehicles("").unwrap().len(), 1);
    let events = store.list_events("", 10).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].event_type, EventKind::Created);
}

#[test]
fn test_failed_status_log_rolls_back_the_update() {
    let mut store = memory_store();
    let id = store.create_vehicle("A100").unwrap();

    store
        .conn()
        .execute_batch(
            "CREATE TRIGGER block_arrival BEFORE INSERT ON events
             WHEN NEW.event_type = 'arrived'
             BEGIN SELECT RAISE(ABORT, 'blocked'); END;",
        )
        .unwrap();

    let err = store.advance_status(EntityKind::Vehicle, id).unwrap_err();
    assert!(matches!(err, AppError::Db(_)), "got {err:?}");

    assert_eq!(store.get_vehicle(id).unwrap().status, Status::Idle);
    assert_eq!(event_count(&store), 1);
}

#[test]
fn test_failed_created_log_rolls_back_the_insert() {
    let mut store = memory_store();

    store
        .conn()
        .execute_batch(
            "CREATE TRIGGER block_created BEFORE INSERT ON events
             WHEN NEW.event_type = 'created'
             BEGIN SELECT RAISE(ABORT, 'blocked'); END;",
        )
        .unwrap();

    let err = store.create_vehicle("A100").unwrap_err();
    assert!(matches!(err, AppError::Db(_)), "got {err:?}");
    assert!(store.list_vehicles("").unwrap().is_empty());
}

#[test]
fn test_data_survives_reopening_the_file() {
    let db_path = setup_test_db("store_reopen");

    let first_event_id = {
        let mut store = gatelog::Store::open(&db_path).unwrap();
        let id = store.create_vehicle("A100").unwrap();
        store.advance_status(EntityKind::Vehicle, id).unwrap();
        store.list_events("", 1).unwrap()[0].id
    };

    let mut store = gatelog::Store::open(&db_path).unwrap();
    let vehicles = store.list_vehicles("").unwrap();
    assert_eq!(vehicles.len(), 1);
    assert_eq!(vehicles[0].status, Status::Arrived);
    assert_eq!(store.compute_stats().unwrap().total_events, 2);

    // ids keep growing after a wipe
    store.clear_events().unwrap();
    store.create_vehicle("B200").unwrap();
    assert!(store.list_events("", 1).unwrap()[0].id > first_event_id);
}

#[test]
fn test_json_timestamps_match_stored_text() {
    let mut store = memory_store();
    let id = store.create_commander("Petrov Ivan").unwrap();

    let commander = store.get_commander(id).unwrap();
    let value = serde_json::to_value(&commander).unwrap();
    assert_eq!(
        value["created"],
        commander.created.format("%Y-%m-%d %H:%M:%S").to_string()
    );

    let event = store.list_events("", 1).unwrap().remove(0);
    let value = serde_json::to_value(&event).unwrap();
    assert_eq!(value["ts"], event.ts_str());
    assert_eq!(value["event_type"], "created");
    assert_eq!(value["entity_type"], "commander");
}
