// SPDX-License-Identifier: MIT OR Apache-2.0

//! Local/remote equivalence tests.
//!
//! The whole design exists to preserve one contract: any sequence of
//! operations issued through a remote controller produces the same
//! observable results as issuing it against the local controller directly.
//! These tests drive both paths over a live socket and compare.

mod common;

use confctl::prelude::*;
use std::sync::Arc;
use std::thread;

fn pair() -> (LocalController, RemoteController) {
    common::init_tracing();
    let local = LocalController::new().unwrap();
    let remote = RemoteController::new(local.endpoint()).unwrap();
    (local, remote)
}

#[test]
fn test_remote_set_is_visible_on_both_sides() {
    let (local, remote) = pair();

    remote.set("DB_HOST", "localhost");

    assert_eq!(local.get("DB_HOST").as_deref(), Some("localhost"));
    assert_eq!(remote.get("DB_HOST").as_deref(), Some("localhost"));

    local.close().unwrap();
}

#[test]
fn test_local_set_is_visible_remotely() {
    let (local, remote) = pair();

    local.set("key", "value");
    assert_eq!(remote.get("key").as_deref(), Some("value"));

    local.close().unwrap();
}

#[test]
fn test_remote_absence_is_none() {
    let (local, remote) = pair();

    assert_eq!(remote.get("nope"), None);
    assert_eq!(remote.get_for("noprefix", "k"), None);

    local.close().unwrap();
}

#[test]
fn test_namespace_isolation_over_remote() {
    let (local, remote) = pair();

    remote.set_for("p1", "k", "a");
    remote.set_for("p2", "k", "b");

    assert_eq!(remote.get_for("p1", "k").as_deref(), Some("a"));
    assert_eq!(remote.get_for("p2", "k").as_deref(), Some("b"));
    assert_eq!(local.get_for("p1", "k").as_deref(), Some("a"));

    local.close().unwrap();
}

#[test]
fn test_append_semantics_over_remote() {
    let (local, remote) = pair();

    remote.add("k", "x", ",");
    remote.add("k", "y", ",");
    remote.add("k2", "z", ",");

    assert_eq!(remote.get("k").as_deref(), Some("x,y"));
    assert_eq!(remote.get("k2").as_deref(), Some("z"));
    assert_eq!(local.get("k").as_deref(), Some("x,y"));

    local.close().unwrap();
}

#[test]
fn test_namespaced_append_over_remote() {
    let (local, remote) = pair();

    remote.add_for("p", "k", "x", ":");
    remote.add_for("p", "k", "y", ":");

    assert_eq!(remote.get_for("p", "k").as_deref(), Some("x:y"));

    local.close().unwrap();
}

#[test]
fn test_value_with_url_safe_punctuation() {
    let (local, remote) = pair();

    remote.set("k", "x,y-z.0");
    assert_eq!(remote.get("k").as_deref(), Some("x,y-z.0"));

    local.close().unwrap();
}

#[test]
fn test_unfiltered_dump_equivalence() {
    let (local, remote) = pair();

    remote.set("a", "1");
    remote.set("b", "2");
    remote.set_for("ns", "k", "v");

    let mut local_dump = local.dump_env(&[]);
    let mut remote_dump = remote.dump_env(&[]);
    local_dump.sort();
    remote_dump.sort();

    assert_eq!(local_dump, remote_dump);
    assert!(remote_dump.contains(&"a=1".to_string()));
    // Namespace entries do not serialize as key=value.
    assert!(!remote_dump.iter().any(|line| line.starts_with("ns=")));

    local.close().unwrap();
}

#[test]
fn test_filtered_dump_order_over_remote() {
    let (local, remote) = pair();

    remote.set("a", "1");
    remote.set("b", "2");
    remote.set("c", "3");

    assert_eq!(remote.dump_env(&["b", "a"]), vec!["b=2", "a=1"]);
    assert_eq!(remote.dump_env(&["b", "a"]), local.dump_env(&["b", "a"]));

    local.close().unwrap();
}

#[test]
fn test_namespace_dump_over_remote() {
    let (local, remote) = pair();

    remote.set_for("p", "a", "1");
    remote.set_for("p", "b", "2");

    assert_eq!(remote.dump_env_for("p", &["b", "a"]), vec!["b=2", "a=1"]);
    assert!(remote.dump_env_for("absent", &[]).is_empty());

    local.close().unwrap();
}

#[test]
fn test_port_key_is_retrievable_remotely() {
    let (local, remote) = pair();

    let expected = local.endpoint().rsplit(':').next().unwrap().to_string();
    assert_eq!(remote.get(CONTROLLER_PORT_KEY), Some(expected));

    local.close().unwrap();
}

#[test]
fn test_replayed_sequence_produces_identical_results() {
    fn apply(controller: &dyn ConfigController) {
        controller.set("host", "localhost");
        controller.set_for("db", "user", "admin");
        controller.add("flags", "verbose", ",");
        controller.add("flags", "trace", ",");
        controller.add_for("db", "opts", "tls", ";");
        controller.set("host", "127.0.0.1");
    }

    let (direct, _unused) = pair();
    apply(&direct);

    let (replayed_local, replayed_remote) = pair();
    apply(&replayed_remote);

    for key in ["host", "flags"] {
        assert_eq!(direct.get(key), replayed_remote.get(key));
    }
    for (prefix, key) in [("db", "user"), ("db", "opts")] {
        assert_eq!(direct.get_for(prefix, key), replayed_remote.get_for(prefix, key));
    }

    let filter = ["host", "flags"];
    assert_eq!(direct.dump_env(&filter), replayed_remote.dump_env(&filter));

    let mut direct_db = direct.dump_env_for("db", &[]);
    let mut replayed_db = replayed_remote.dump_env_for("db", &[]);
    direct_db.sort();
    replayed_db.sort();
    assert_eq!(direct_db, replayed_db);

    direct.close().unwrap();
    replayed_local.close().unwrap();
}

#[test]
fn test_concurrent_remote_appends_serialize() {
    let (local, remote) = pair();
    let remote = Arc::new(remote);
    let workers = 8;

    let handles: Vec<_> = (0..workers)
        .map(|_| {
            let remote = Arc::clone(&remote);
            thread::spawn(move || remote.add("k", "1", ","))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let value = local.get("k").unwrap();
    assert_eq!(value.split(',').count(), workers);
    assert!(value.split(',').all(|token| token == "1"));

    local.close().unwrap();
}

#[test]
fn test_remote_against_dead_endpoint_degrades_to_zero_values() {
    common::init_tracing();
    // Port 9 (discard) is reliably unbound on loopback.
    let remote = RemoteController::new("127.0.0.1:9").unwrap();

    remote.set("key", "value");
    remote.add("key", "value", ",");
    remote.set_for("p", "k", "v");

    assert_eq!(remote.get("key"), None);
    assert_eq!(remote.get_for("p", "k"), None);
    assert!(remote.dump_env(&[]).is_empty());
    assert!(remote.dump_env_for("p", &[]).is_empty());
    assert!(remote.close().is_ok());
}

#[test]
fn test_remote_after_local_close_degrades_to_zero_values() {
    let (local, remote) = pair();
    local.set("key", "value");
    local.close().unwrap();

    assert_eq!(remote.get("key"), None);
    assert!(remote.dump_env(&[]).is_empty());
}
